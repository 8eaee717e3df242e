use crate::picker::domain::models::Selection;

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    None,
    /// Arm the search debounce timer; delay in milliseconds.
    ScheduleSearch(u64),
    /// Dispatch the current term to the search backend under the given
    /// fetch generation.
    ExecuteSearch { id: u64 },
    /// Arm the load-more debounce timer; delay in milliseconds.
    ScheduleLoadMore(u64),
    /// Fetch the given page under the given fetch generation.
    ExecutePageFetch { id: u64, page: i64 },
    /// The user confirmed a selection; the picker should dismiss.
    Complete(Selection),
    /// The user closed the picker without selecting.
    Close,
}
