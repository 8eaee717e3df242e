use crate::picker::domain::models::Item;

#[derive(Clone, Debug)]
pub enum Message {
    // Search events
    QueryChanged(String),
    SearchRequested,
    SearchCompleted { id: u64, items: Vec<Item> },
    SearchFailed { id: u64, error: String },
    /// The source has no search backend; scheduled search resolves as a
    /// no-op instead of an error.
    SearchSkipped,

    // Paging events
    LoadMoreRequested,
    LoadMore,
    PageLoaded { id: u64, items: Vec<Item> },
    PageFailed { id: u64, error: String },

    // Selection events
    SelectRow(usize),
    ToggleItem(String),
    RemoveSelected(String),
    RemoveLastSelected,
    Submit,

    // Terminal events
    Close,
}
