use crate::picker::constants::*;
use crate::picker::domain::filter::LocalFilter;
use crate::picker::domain::models::{DataSource, Item, Selection, SelectionMode};
use crate::picker::ui::commands::Command;
use crate::picker::ui::events::Message;

/// State owned by one picker screen. Everything mutates through
/// [`PickerState::update`]; the event loop only runs the returned
/// [`Command`]s.
pub struct PickerState {
    pub source: DataSource,
    pub mode: SelectionMode,
    /// Browse view: pages appended in load order. Never touched by search.
    pub items: Vec<Item>,
    /// Multi-select membership, in insertion order. Unused in single mode.
    pub selected: Vec<Item>,
    /// Search view, replaced wholesale per completed search.
    pub search_results: Vec<Item>,
    pub term: String,
    pub loading: bool,
    /// Page cursor, -1 before the first load. Only a handled page
    /// completion moves it; failures leave it alone.
    pub page: i64,
    pub has_more: bool,
    /// Generation stamped onto every dispatched fetch. Bumped on each
    /// dispatch and on each term transition, so any completion carrying
    /// an older id is stale and gets dropped.
    pub fetch_generation: u64,
    pub cursor: usize,
    pub error: Option<String>,
    search_attempted: bool,
}

impl PickerState {
    pub fn new(
        source: DataSource,
        mode: SelectionMode,
        initial_items: Vec<Item>,
        initial_selected: Vec<Item>,
    ) -> Self {
        let selected = match mode {
            SelectionMode::Multi => initial_selected,
            SelectionMode::Single => Vec::new(),
        };

        Self {
            source,
            mode,
            items: initial_items,
            selected,
            search_results: Vec::new(),
            term: String::new(),
            loading: false,
            page: -1,
            has_more: source.is_paged(),
            fetch_generation: 0,
            cursor: 0,
            error: None,
            search_attempted: false,
        }
    }

    /// First load on mount: paged sources fetch page 0, dynamic sources
    /// load their options through an empty-term search. Static sources
    /// already have their items.
    pub fn initialize(&mut self) -> Command {
        match self.source {
            DataSource::Users | DataSource::Channels => self.dispatch_page_fetch(),
            DataSource::Dynamic => {
                self.loading = true;
                self.fetch_generation += 1;
                Command::ExecuteSearch {
                    id: self.fetch_generation,
                }
            }
            DataSource::Static => Command::None,
        }
    }

    pub fn update(&mut self, msg: Message) -> Command {
        match msg {
            Message::QueryChanged(q) => {
                if q.is_empty() {
                    // Back to browsing: the paged list is untouched, so no
                    // network call is needed. The bump drops any in-flight
                    // search result that would arrive afterwards.
                    self.term.clear();
                    self.search_results.clear();
                    self.fetch_generation += 1;
                    self.loading = false;
                    self.clamp_cursor();
                    Command::None
                } else {
                    self.term = q;
                    self.error = None;
                    // Loading covers the whole debounced call, timer
                    // included, so stale "No Results" never flashes while
                    // the user is still typing.
                    self.loading = true;
                    self.fetch_generation += 1;
                    Command::ScheduleSearch(SEARCH_DEBOUNCE_MS)
                }
            }
            Message::SearchRequested => {
                // The debounce timer outlived a term that has since been
                // cleared; nothing to search for.
                if self.term.is_empty() {
                    return Command::None;
                }
                if self.source == DataSource::Static {
                    // No backend for seeded lists; filter locally.
                    self.search_results = LocalFilter::apply(&self.items, &self.term);
                    self.search_attempted = true;
                    self.loading = false;
                    self.clamp_cursor();
                    return Command::None;
                }
                self.loading = true;
                self.fetch_generation += 1;
                Command::ExecuteSearch {
                    id: self.fetch_generation,
                }
            }
            Message::SearchCompleted { id, items } => {
                if id != self.fetch_generation {
                    return Command::None;
                }
                if self.term.is_empty() {
                    // Dynamic sources load their option list through an
                    // empty-term search.
                    self.items = items;
                } else {
                    self.search_results = items;
                }
                self.search_attempted = true;
                self.loading = false;
                self.clamp_cursor();
                Command::None
            }
            Message::SearchFailed { id, error } => {
                if id != self.fetch_generation {
                    return Command::None;
                }
                self.loading = false;
                self.error = Some(error);
                Command::None
            }
            Message::SearchSkipped => {
                self.loading = false;
                Command::None
            }
            Message::LoadMoreRequested => {
                if self.can_load_more() {
                    Command::ScheduleLoadMore(LOAD_MORE_DEBOUNCE_MS)
                } else {
                    Command::None
                }
            }
            Message::LoadMore => {
                // Re-checked here: the state may have changed while the
                // debounce timer was running.
                if self.can_load_more() {
                    self.dispatch_page_fetch()
                } else {
                    Command::None
                }
            }
            Message::PageLoaded { id, items } => {
                if id != self.fetch_generation {
                    return Command::None;
                }
                if items.is_empty() {
                    self.has_more = false;
                }
                self.items.extend(items);
                self.page += 1;
                self.loading = false;
                Command::None
            }
            Message::PageFailed { id, error } => {
                if id != self.fetch_generation {
                    return Command::None;
                }
                self.loading = false;
                self.error = Some(error);
                Command::None
            }
            Message::SelectRow(index) => {
                if index < self.rows().len() {
                    self.cursor = index;
                }
                Command::None
            }
            Message::ToggleItem(key) => {
                let Some(item) = self.find_item(&key) else {
                    return Command::None;
                };
                match self.mode {
                    SelectionMode::Single => Command::Complete(Selection::Single(item)),
                    SelectionMode::Multi => {
                        if let Some(pos) = self.selected.iter().position(|i| i.key() == key) {
                            self.selected.remove(pos);
                        } else {
                            self.selected.push(item);
                        }
                        Command::None
                    }
                }
            }
            Message::RemoveSelected(key) => {
                if self.mode == SelectionMode::Multi {
                    self.selected.retain(|i| i.key() != key);
                }
                Command::None
            }
            Message::RemoveLastSelected => {
                if self.mode == SelectionMode::Multi {
                    self.selected.pop();
                }
                Command::None
            }
            Message::Submit => match self.mode {
                SelectionMode::Multi => {
                    Command::Complete(Selection::Multiple(self.selected.clone()))
                }
                SelectionMode::Single => Command::None,
            },
            Message::Close => Command::Close,
        }
    }

    /// The rows the list shows right now: search view while a term is
    /// active, the browse view otherwise.
    pub fn rows(&self) -> &[Item] {
        if self.term.is_empty() {
            &self.items
        } else {
            &self.search_results
        }
    }

    pub fn is_selected(&self, key: &str) -> bool {
        self.selected.iter().any(|i| i.key() == key)
    }

    pub fn search_attempted(&self) -> bool {
        self.search_attempted
    }

    fn can_load_more(&self) -> bool {
        self.source.is_paged() && !self.loading && self.term.is_empty() && self.has_more
    }

    fn dispatch_page_fetch(&mut self) -> Command {
        self.loading = true;
        self.error = None;
        self.fetch_generation += 1;
        Command::ExecutePageFetch {
            id: self.fetch_generation,
            page: self.page + 1,
        }
    }

    fn find_item(&self, key: &str) -> Option<Item> {
        self.rows()
            .iter()
            .chain(self.selected.iter())
            .find(|i| i.key() == key)
            .cloned()
    }

    fn clamp_cursor(&mut self) {
        let len = self.rows().len();
        if self.cursor >= len {
            self.cursor = len.saturating_sub(1);
        }
    }
}
