#[cfg(test)]
mod tests {
    use crate::picker::domain::filter::LocalFilter;
    use crate::picker::domain::models::{DialogOption, Item};

    fn option(text: &str, value: &str) -> Item {
        Item::Option(DialogOption {
            text: text.to_string(),
            value: value.to_string(),
        })
    }

    #[test]
    fn test_empty_term_returns_everything() {
        let items = vec![option("Yes", "yes"), option("No", "no")];
        assert_eq!(LocalFilter::apply(&items, ""), items);
    }

    #[test]
    fn test_match_is_case_insensitive_substring() {
        let items = vec![
            option("Deploy to Staging", "deploy_staging"),
            option("Deploy to Production", "deploy_prod"),
            option("Rollback", "rollback"),
        ];

        let filtered = LocalFilter::apply(&items, "deploy");
        assert_eq!(filtered.len(), 2);

        let filtered = LocalFilter::apply(&items, "STAGING");
        assert_eq!(filtered, vec![option("Deploy to Staging", "deploy_staging")]);
    }

    #[test]
    fn test_value_is_searchable_too() {
        let items = vec![option("Roll back", "revert_v2")];
        assert_eq!(LocalFilter::apply(&items, "revert").len(), 1);
    }

    #[test]
    fn test_no_match_yields_empty() {
        let items = vec![option("Yes", "yes")];
        assert!(LocalFilter::apply(&items, "maybe").is_empty());
    }
}
