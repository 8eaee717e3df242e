#[cfg(test)]
mod tests {
    use crate::picker::domain::models::{Channel, DataSource, DialogOption, Item, UserProfile};

    fn sample_user() -> Item {
        Item::User(UserProfile {
            id: "u7".to_string(),
            username: "morgan".to_string(),
            first_name: "Morgan".to_string(),
            last_name: "Reed".to_string(),
            nickname: "mo".to_string(),
        })
    }

    #[test]
    fn test_identity_keys_per_shape() {
        assert_eq!(sample_user().key(), "u7");

        let channel = Item::Channel(Channel {
            id: "c3".to_string(),
            name: "town-square".to_string(),
            display_name: "Town Square".to_string(),
            purpose: String::new(),
        });
        assert_eq!(channel.key(), "c3");

        // Options are keyed by value, not by display text.
        let option = Item::Option(DialogOption {
            text: "Deploy to staging".to_string(),
            value: "deploy_staging".to_string(),
        });
        assert_eq!(option.key(), "deploy_staging");
        assert_eq!(option.label(), "Deploy to staging");
    }

    #[test]
    fn test_search_text_covers_user_names() {
        let text = sample_user().search_text();
        assert!(text.contains("morgan"));
        assert!(text.contains("Morgan Reed"));
        assert!(text.contains("mo"));
    }

    #[test]
    fn test_full_name_trims_missing_parts() {
        let user = UserProfile {
            id: "u1".to_string(),
            username: "alice".to_string(),
            first_name: "Alice".to_string(),
            last_name: String::new(),
            nickname: String::new(),
        };
        assert_eq!(user.full_name(), "Alice");
    }

    #[test]
    fn test_source_paging_shape() {
        assert!(DataSource::Users.is_paged());
        assert!(DataSource::Channels.is_paged());
        assert!(!DataSource::Dynamic.is_paged());
        assert!(!DataSource::Static.is_paged());

        assert!(DataSource::Dynamic.is_remote());
        assert!(!DataSource::Static.is_remote());

        assert_eq!(DataSource::Users.page_size(), 100);
        assert_eq!(DataSource::Channels.page_size(), 50);
    }

    #[test]
    fn test_item_deserializes_untagged_from_fixture_shapes() {
        let user: Item =
            serde_json::from_str(r#"{"id": "u1", "username": "alice"}"#).unwrap();
        assert!(matches!(user, Item::User(_)));

        let channel: Item = serde_json::from_str(
            r#"{"id": "c1", "name": "dev", "display_name": "Development"}"#,
        )
        .unwrap();
        assert!(matches!(channel, Item::Channel(_)));

        let option: Item =
            serde_json::from_str(r#"{"text": "Yes", "value": "yes"}"#).unwrap();
        assert!(matches!(option, Item::Option(_)));
    }
}
