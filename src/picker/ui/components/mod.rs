pub mod item_list;
pub mod search_bar;
pub mod selected_chips;

#[cfg(test)]
mod item_list_test;

use crate::picker::ui::events::Message;
use crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

pub trait Component {
    fn render(&mut self, f: &mut Frame, area: Rect);
    fn handle_key(&mut self, key: KeyEvent) -> Option<Message>;
}
