pub mod picker;

pub use picker::InteractivePicker;
pub use picker::application::directory::Directory;
pub use picker::application::fixture::FixtureDirectory;
pub use picker::domain::models::{
    Channel, DataSource, DialogOption, Item, Selection, SelectionMode, UserProfile,
};
pub use picker::ui::app_state::PickerState;
pub use picker::ui::view_model::{ListKind, ViewModel};
