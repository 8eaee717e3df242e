use crate::picker::constants::PAGE_SIZE;
use crate::picker::ui::components::Component;
use crate::picker::ui::events::Message;
use crate::picker::ui::view_model::{ListKind, ViewModel};
use crate::picker::domain::models::{DataSource, Item, SelectionMode};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem as TuiListItem, Paragraph},
};

/// One display line in the list: a section header or a selectable row.
enum Entry {
    Header(String),
    Row(Item),
}

/// The scrollable item list. Section headers are display-only; the cursor
/// walks selectable rows in display order.
pub struct ItemList {
    entries: Vec<Entry>,
    row_count: usize,
    cursor: usize,
    scroll_offset: usize,
    loading: bool,
    no_results: bool,
    error: Option<String>,
    selected_keys: Vec<String>,
    mode: SelectionMode,
    source: DataSource,
}

impl Default for ItemList {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemList {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            row_count: 0,
            cursor: 0,
            scroll_offset: 0,
            loading: false,
            no_results: false,
            error: None,
            selected_keys: Vec::new(),
            mode: SelectionMode::Single,
            source: DataSource::Static,
        }
    }

    pub fn set_view_model(&mut self, vm: &ViewModel) {
        self.entries = match vm.list_kind {
            ListKind::Flat => vm.rows.iter().cloned().map(Entry::Row).collect(),
            ListKind::Sectioned => {
                let mut entries = Vec::new();
                for section in &vm.sections {
                    entries.push(Entry::Header(section.label.clone()));
                    entries.extend(section.items.iter().cloned().map(Entry::Row));
                }
                entries
            }
        };
        self.row_count = vm.rows.len();
        self.cursor = vm.cursor.min(self.row_count.saturating_sub(1));
        self.loading = vm.loading_visible;
        self.no_results = vm.no_results_visible;
        self.error = vm.error.clone();
        self.selected_keys = vm.selected_keys.clone();
        self.mode = vm.mode;
        self.source = vm.source;
    }

    /// Row under the cursor, in display order.
    pub fn cursor_item(&self) -> Option<&Item> {
        self.entries
            .iter()
            .filter_map(|e| match e {
                Entry::Row(item) => Some(item),
                Entry::Header(_) => None,
            })
            .nth(self.cursor)
    }

    fn cursor_display_index(&self) -> usize {
        let mut rows_seen = 0;
        for (i, entry) in self.entries.iter().enumerate() {
            if let Entry::Row(_) = entry {
                if rows_seen == self.cursor {
                    return i;
                }
                rows_seen += 1;
            }
        }
        0
    }

    fn loading_label(&self) -> &'static str {
        match self.source {
            DataSource::Users => "Loading Users...",
            DataSource::Channels => "Loading Channels...",
            DataSource::Dynamic | DataSource::Static => "Loading Options...",
        }
    }

    fn row_line(&self, item: &Item, is_cursor: bool) -> Line<'static> {
        let selected = self.selected_keys.iter().any(|k| k == item.key());

        let marker = match self.mode {
            SelectionMode::Multi if selected => "[x] ",
            SelectionMode::Multi => "[ ] ",
            SelectionMode::Single => "",
        };

        let mut spans = vec![Span::raw(marker.to_string())];
        match item {
            Item::User(u) => {
                spans.push(Span::styled(
                    format!("@{}", u.username),
                    Style::default().fg(Color::Cyan),
                ));
                let full_name = u.full_name();
                if !full_name.is_empty() {
                    spans.push(Span::styled(
                        format!("  {full_name}"),
                        Style::default().fg(Color::Gray),
                    ));
                }
            }
            Item::Channel(c) => {
                spans.push(Span::styled(
                    c.display_name.clone(),
                    Style::default().fg(Color::Green),
                ));
                if !c.purpose.is_empty() {
                    spans.push(Span::styled(
                        format!("  {}", c.purpose),
                        Style::default().fg(Color::Gray),
                    ));
                }
            }
            Item::Option(o) => {
                spans.push(Span::raw(o.text.clone()));
            }
        }

        let mut line = Line::from(spans);
        if is_cursor {
            line = line.style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            );
        }
        line
    }
}

impl Component for ItemList {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area);

        let list_area = chunks[0];

        if self.no_results && self.entries.is_empty() {
            let empty = Paragraph::new("No Results")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL));
            f.render_widget(empty, list_area);
        } else {
            let visible_height = list_area.height.saturating_sub(2) as usize;

            // Keep the cursor row inside the visible window.
            let cursor_display = self.cursor_display_index();
            if cursor_display < self.scroll_offset {
                self.scroll_offset = cursor_display;
            } else if visible_height > 0 && cursor_display >= self.scroll_offset + visible_height {
                self.scroll_offset = cursor_display + 1 - visible_height;
            }

            let mut lines: Vec<TuiListItem> = Vec::new();
            for (i, entry) in self
                .entries
                .iter()
                .enumerate()
                .skip(self.scroll_offset)
                .take(visible_height)
            {
                let line = match entry {
                    Entry::Header(label) => Line::from(Span::styled(
                        label.clone(),
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    )),
                    Entry::Row(item) => self.row_line(item, i == cursor_display),
                };
                lines.push(TuiListItem::new(line));
            }

            if self.loading {
                lines.push(TuiListItem::new(Line::from(Span::styled(
                    self.loading_label(),
                    Style::default().fg(Color::DarkGray),
                ))));
            }

            let list = List::new(lines).block(Block::default().borders(Borders::ALL));
            f.render_widget(list, list_area);
        }

        let status_text = match (&self.error, self.mode) {
            (Some(err), _) => format!("Error: {err} (scroll or retype to retry)"),
            (None, SelectionMode::Multi) => {
                "↑/↓: Navigate | Enter: Toggle | Ctrl+D: Confirm | Esc: Cancel".to_string()
            }
            (None, SelectionMode::Single) => {
                "↑/↓: Navigate | Enter: Select | Esc: Cancel".to_string()
            }
        };
        let status_style = if self.error.is_some() {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let status = Paragraph::new(status_text)
            .style(status_style)
            .alignment(Alignment::Center);
        f.render_widget(status, chunks[1]);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Up => {
                if self.cursor > 0 {
                    Some(Message::SelectRow(self.cursor - 1))
                } else {
                    None
                }
            }
            KeyCode::Down => {
                if self.cursor + 1 < self.row_count {
                    Some(Message::SelectRow(self.cursor + 1))
                } else {
                    // Bottom of the list: ask for the next page.
                    Some(Message::LoadMoreRequested)
                }
            }
            KeyCode::Char('p') if key.modifiers == KeyModifiers::CONTROL => {
                if self.cursor > 0 {
                    Some(Message::SelectRow(self.cursor - 1))
                } else {
                    None
                }
            }
            KeyCode::Char('n') if key.modifiers == KeyModifiers::CONTROL => {
                if self.cursor + 1 < self.row_count {
                    Some(Message::SelectRow(self.cursor + 1))
                } else {
                    Some(Message::LoadMoreRequested)
                }
            }
            KeyCode::PageUp => {
                let new_index = self.cursor.saturating_sub(PAGE_SIZE);
                (new_index != self.cursor).then_some(Message::SelectRow(new_index))
            }
            KeyCode::PageDown => {
                let new_index = (self.cursor + PAGE_SIZE).min(self.row_count.saturating_sub(1));
                if new_index != self.cursor {
                    Some(Message::SelectRow(new_index))
                } else {
                    Some(Message::LoadMoreRequested)
                }
            }
            KeyCode::Home => (self.cursor != 0).then_some(Message::SelectRow(0)),
            KeyCode::End => {
                let last = self.row_count.saturating_sub(1);
                (self.cursor != last && self.row_count > 0).then_some(Message::SelectRow(last))
            }
            KeyCode::Enter => self
                .cursor_item()
                .map(|item| Message::ToggleItem(item.key().to_string())),
            _ => None,
        }
    }
}
