use crate::picker::ui::components::Component;
use crate::picker::ui::events::Message;
use crate::picker::domain::models::Item;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

/// Strip of removable tokens for the current multi-selection, in the
/// order items were picked.
#[derive(Default)]
pub struct SelectedChips {
    chips: Vec<Item>,
}

impl SelectedChips {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_chips(&mut self, chips: Vec<Item>) {
        self.chips = chips;
    }

    pub fn is_empty(&self) -> bool {
        self.chips.is_empty()
    }
}

impl Component for SelectedChips {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(
            "Selected: ",
            Style::default().fg(Color::DarkGray),
        )];
        for (i, chip) in self.chips.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(
                format!("[{} ✕]", chip.label()),
                Style::default().fg(Color::Black).bg(Color::Cyan),
            ));
        }

        let strip = Paragraph::new(Line::from(spans)).wrap(Wrap { trim: true });
        f.render_widget(strip, area);
    }

    fn handle_key(&mut self, _key: KeyEvent) -> Option<Message> {
        // Removal happens through the search bar (backspace on an empty
        // query) or a row toggle; the strip itself is display-only.
        None
    }
}
