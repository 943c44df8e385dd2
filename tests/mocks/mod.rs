pub mod mock_repository;
pub mod recording_view;

pub use mock_repository::MockAddressBookRepository;
pub use recording_view::RecordingView;
