//! Timing and paging constants for the interactive picker.

/// Quiet period after the last keystroke before a search is dispatched,
/// in milliseconds.
pub const SEARCH_DEBOUNCE_MS: u64 = 300;

/// Window that collapses rapid scroll-triggered load-more requests into
/// a single fetch, in milliseconds.
pub const LOAD_MORE_DEBOUNCE_MS: u64 = 100;

/// Event polling interval in milliseconds.
pub const EVENT_POLL_INTERVAL_MS: u64 = 50;

/// Page size when fetching user profiles.
pub const PROFILE_CHUNK_SIZE: usize = 100;

/// Page size when fetching channels.
pub const CHANNEL_CHUNK_SIZE: usize = 50;

/// Height of the search bar component.
pub const SEARCH_BAR_HEIGHT: u16 = 3;

/// Height of the selected-chip strip when visible.
pub const CHIP_STRIP_HEIGHT: u16 = 2;

/// Page size for PageUp/PageDown navigation.
pub const PAGE_SIZE: usize = 10;
