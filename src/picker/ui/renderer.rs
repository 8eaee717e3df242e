use crate::picker::constants::{CHIP_STRIP_HEIGHT, SEARCH_BAR_HEIGHT};
use crate::picker::domain::models::SelectionMode;
use crate::picker::ui::components::{
    Component, item_list::ItemList, search_bar::SearchBar, selected_chips::SelectedChips,
};
use crate::picker::ui::view_model::ViewModel;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

pub struct Renderer {
    search_bar: SearchBar,
    chips: SelectedChips,
    item_list: ItemList,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            search_bar: SearchBar::new(),
            chips: SelectedChips::new(),
            item_list: ItemList::new(),
        }
    }

    pub fn render(&mut self, f: &mut Frame, vm: &ViewModel) {
        self.search_bar.set_query(vm.term.clone());
        self.search_bar.set_searching(vm.loading_visible);
        self.search_bar.set_message(vm.error.clone());
        self.chips.set_chips(vm.chips.clone());
        self.item_list.set_view_model(vm);

        let show_chips = vm.mode == SelectionMode::Multi && !vm.chips.is_empty();
        let chip_height = if show_chips { CHIP_STRIP_HEIGHT } else { 0 };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(SEARCH_BAR_HEIGHT),
                Constraint::Length(chip_height),
                Constraint::Min(0),
            ])
            .split(f.area());

        self.search_bar.render(f, chunks[0]);
        if show_chips {
            self.chips.render(f, chunks[1]);
        }
        self.item_list.render(f, chunks[2]);
    }

    pub fn get_search_bar_mut(&mut self) -> &mut SearchBar {
        &mut self.search_bar
    }

    pub fn get_item_list_mut(&mut self) -> &mut ItemList {
        &mut self.item_list
    }
}
