use crate::picker::domain::models::Item;

/// Local search for sources that have no remote search backend. Static
/// option lists are small, so a case-insensitive substring scan is enough.
pub struct LocalFilter;

impl LocalFilter {
    pub fn apply(items: &[Item], term: &str) -> Vec<Item> {
        if term.is_empty() {
            return items.to_vec();
        }

        let term_lower = term.to_lowercase();
        items
            .iter()
            .filter(|item| item.search_text().to_lowercase().contains(&term_lower))
            .cloned()
            .collect()
    }
}
