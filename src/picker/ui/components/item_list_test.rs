#[cfg(test)]
mod tests {
    use crate::picker::domain::models::{DataSource, DialogOption, Item, SelectionMode, UserProfile};
    use crate::picker::domain::sections::by_initial;
    use crate::picker::ui::components::Component;
    use crate::picker::ui::components::item_list::ItemList;
    use crate::picker::ui::events::Message;
    use crate::picker::ui::view_model::{ListKind, ViewModel};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn option(value: &str) -> Item {
        Item::Option(DialogOption {
            text: format!("Option {value}"),
            value: value.to_string(),
        })
    }

    fn user(id: &str, username: &str) -> Item {
        Item::User(UserProfile {
            id: id.to_string(),
            username: username.to_string(),
            first_name: String::new(),
            last_name: String::new(),
            nickname: String::new(),
        })
    }

    fn flat_vm(rows: Vec<Item>, cursor: usize) -> ViewModel {
        ViewModel {
            rows,
            sections: Vec::new(),
            list_kind: ListKind::Flat,
            loading_visible: false,
            no_results_visible: false,
            chips: Vec::new(),
            selected_keys: Vec::new(),
            term: String::new(),
            error: None,
            cursor,
            mode: SelectionMode::Single,
            source: DataSource::Static,
        }
    }

    fn list_with(rows: Vec<Item>, cursor: usize) -> ItemList {
        let mut list = ItemList::new();
        list.set_view_model(&flat_vm(rows, cursor));
        list
    }

    #[test]
    fn test_down_moves_cursor() {
        let mut list = list_with(vec![option("a"), option("b")], 0);

        let msg = list.handle_key(key(KeyCode::Down));

        assert!(matches!(msg, Some(Message::SelectRow(1))));
    }

    #[test]
    fn test_down_at_bottom_requests_more() {
        let mut list = list_with(vec![option("a"), option("b")], 1);

        let msg = list.handle_key(key(KeyCode::Down));

        assert!(matches!(msg, Some(Message::LoadMoreRequested)));
    }

    #[test]
    fn test_up_at_top_is_a_no_op() {
        let mut list = list_with(vec![option("a")], 0);
        assert!(list.handle_key(key(KeyCode::Up)).is_none());
    }

    #[test]
    fn test_enter_toggles_the_cursor_row_by_key() {
        let mut list = list_with(vec![option("a"), option("b")], 1);

        let msg = list.handle_key(key(KeyCode::Enter));

        assert!(matches!(msg, Some(Message::ToggleItem(k)) if k == "b"));
    }

    #[test]
    fn test_enter_on_empty_list_is_a_no_op() {
        let mut list = list_with(Vec::new(), 0);
        assert!(list.handle_key(key(KeyCode::Enter)).is_none());
    }

    #[test]
    fn test_page_down_clamps_and_then_requests_more() {
        let mut list = list_with(vec![option("a"), option("b"), option("c")], 0);

        let msg = list.handle_key(key(KeyCode::PageDown));
        assert!(matches!(msg, Some(Message::SelectRow(2))));

        let mut list = list_with(vec![option("a"), option("b"), option("c")], 2);
        let msg = list.handle_key(key(KeyCode::PageDown));
        assert!(matches!(msg, Some(Message::LoadMoreRequested)));
    }

    #[test]
    fn test_home_and_end() {
        let mut list = list_with(vec![option("a"), option("b"), option("c")], 1);

        assert!(matches!(
            list.handle_key(key(KeyCode::Home)),
            Some(Message::SelectRow(0))
        ));
        assert!(matches!(
            list.handle_key(key(KeyCode::End)),
            Some(Message::SelectRow(2))
        ));
    }

    #[test]
    fn test_sectioned_cursor_walks_display_order() {
        // bob loads before alice, but the sectioned display puts A first.
        let rows = vec![user("u1", "bob"), user("u2", "alice")];
        let sections = by_initial(&rows);
        let vm = ViewModel {
            sections,
            list_kind: ListKind::Sectioned,
            source: DataSource::Users,
            ..flat_vm(rows, 0)
        };
        let mut list = ItemList::new();
        list.set_view_model(&vm);

        // Cursor 0 is the first row in display order: alice.
        let msg = list.handle_key(key(KeyCode::Enter));
        assert!(matches!(msg, Some(Message::ToggleItem(k)) if k == "u2"));
    }

    #[test]
    fn test_cursor_item_skips_headers() {
        let rows = vec![user("u1", "bob"), user("u2", "alice")];
        let sections = by_initial(&rows);
        let vm = ViewModel {
            sections,
            list_kind: ListKind::Sectioned,
            source: DataSource::Users,
            cursor: 1,
            ..flat_vm(rows, 0)
        };
        let mut list = ItemList::new();
        list.set_view_model(&vm);

        assert_eq!(list.cursor_item(), Some(&user("u1", "bob")));
    }

    #[test]
    fn test_stale_cursor_is_clamped_to_rows() {
        let mut list = ItemList::new();
        list.set_view_model(&flat_vm(vec![option("a"), option("b")], 5));

        let msg = list.handle_key(key(KeyCode::Enter));

        assert!(matches!(msg, Some(Message::ToggleItem(k)) if k == "b"));
    }
}
