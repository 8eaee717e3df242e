use crate::picker::domain::models::Item;

/// A group of rows under one header in the sectioned layout.
#[derive(Clone, PartialEq, Debug)]
pub struct Section {
    pub label: String,
    pub items: Vec<Item>,
}

/// Group items under uppercase initial-letter headers, the way user
/// directories are browsed. Input order is preserved inside each section;
/// sections are ordered by label.
pub fn by_initial(items: &[Item]) -> Vec<Section> {
    let mut sections: Vec<Section> = Vec::new();

    for item in items {
        let label = item
            .label()
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_else(|| "#".to_string());

        match sections.iter_mut().find(|s| s.label == label) {
            Some(section) => section.items.push(item.clone()),
            None => sections.push(Section {
                label,
                items: vec![item.clone()],
            }),
        }
    }

    sections.sort_by(|a, b| a.label.cmp(&b.label));
    sections
}
