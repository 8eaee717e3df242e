use crate::picker::domain::models::{DataSource, Item, SelectionMode};
use crate::picker::domain::sections::{self, Section};
use crate::picker::ui::app_state::PickerState;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ListKind {
    Flat,
    Sectioned,
}

/// Everything the rendering layer needs for one frame, derived from
/// [`PickerState`] without mutating it.
#[derive(Clone, PartialEq, Debug)]
pub struct ViewModel {
    pub rows: Vec<Item>,
    /// Populated only when `list_kind` is `Sectioned`.
    pub sections: Vec<Section>,
    pub list_kind: ListKind,
    pub loading_visible: bool,
    pub no_results_visible: bool,
    /// Selected items in insertion order.
    pub chips: Vec<Item>,
    pub selected_keys: Vec<String>,
    pub term: String,
    pub error: Option<String>,
    pub cursor: usize,
    pub mode: SelectionMode,
    pub source: DataSource,
}

impl ViewModel {
    pub fn derive(state: &PickerState) -> Self {
        let rows: Vec<Item> = state.rows().to_vec();
        let searching = !state.term.is_empty();

        // User directories are browsed in alphabetical sections; search
        // results and every other source stay flat.
        let list_kind = if state.source == DataSource::Users && !searching {
            ListKind::Sectioned
        } else {
            ListKind::Flat
        };

        let sections = match list_kind {
            ListKind::Sectioned => sections::by_initial(&rows),
            ListKind::Flat => Vec::new(),
        };

        let attempted = state.page != -1 || state.search_attempted();
        let no_results_visible = !state.loading && attempted && rows.is_empty();

        Self {
            rows,
            sections,
            list_kind,
            loading_visible: state.loading,
            no_results_visible,
            chips: state.selected.clone(),
            selected_keys: state.selected.iter().map(|i| i.key().to_string()).collect(),
            term: state.term.clone(),
            error: state.error.clone(),
            cursor: state.cursor,
            mode: state.mode,
            source: state.source,
        }
    }
}
