use crate::picker::application::directory::Directory;
use crate::picker::domain::models::{Channel, DataSource, DialogOption, Item, UserProfile};
use anyhow::{Context, Result, bail};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory backed by JSON files on disk: `users.json`, `channels.json`
/// and `options.json` under one fixtures directory. Paging slices the
/// loaded vectors; search is a case-insensitive substring match.
pub struct FixtureDirectory {
    users: Vec<Item>,
    channels: Vec<Item>,
    options: Vec<Item>,
    dynamic_search: bool,
}

impl FixtureDirectory {
    pub fn load(dir: &Path) -> Result<Self> {
        let users = load_file::<UserProfile>(&dir.join("users.json"))?
            .into_iter()
            .map(Item::User)
            .collect();
        let channels = load_file::<Channel>(&dir.join("channels.json"))?
            .into_iter()
            .map(Item::Channel)
            .collect();
        let options = load_file::<DialogOption>(&dir.join("options.json"))?
            .into_iter()
            .map(Item::Option)
            .collect();

        Ok(Self {
            users,
            channels,
            options,
            dynamic_search: true,
        })
    }

    /// Disable dynamic-option search to exercise the absent-collaborator
    /// configuration.
    pub fn without_dynamic_search(mut self) -> Self {
        self.dynamic_search = false;
        self
    }

    /// The option list, for seeding static screens that browse without
    /// fetching.
    pub fn static_items(&self) -> Vec<Item> {
        self.options.clone()
    }

    fn entries(&self, source: DataSource) -> &[Item] {
        match source {
            DataSource::Users => &self.users,
            DataSource::Channels => &self.channels,
            DataSource::Dynamic | DataSource::Static => &self.options,
        }
    }
}

fn load_file<T: serde::de::DeserializeOwned>(path: &PathBuf) -> Result<Vec<T>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read fixture {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse fixture {}", path.display()))
}

impl Directory for FixtureDirectory {
    fn fetch_page(&self, source: DataSource, page: i64, per_page: usize) -> Result<Vec<Item>> {
        if !source.is_paged() {
            bail!("source {source:?} is not paged");
        }
        if page < 0 {
            bail!("page index must not be negative, got {page}");
        }

        let entries = self.entries(source);
        let start = (page as usize).saturating_mul(per_page);
        let end = (start + per_page).min(entries.len());
        if start >= entries.len() {
            return Ok(Vec::new());
        }
        Ok(entries[start..end].to_vec())
    }

    fn search(&self, source: DataSource, term: &str) -> Result<Vec<Item>> {
        if !self.supports_search(source) {
            bail!("search not supported for source {source:?}");
        }

        let term_lower = term.to_lowercase();
        Ok(self
            .entries(source)
            .iter()
            .filter(|item| {
                term_lower.is_empty() || item.search_text().to_lowercase().contains(&term_lower)
            })
            .cloned()
            .collect())
    }

    fn supports_search(&self, source: DataSource) -> bool {
        match source {
            DataSource::Users | DataSource::Channels => true,
            DataSource::Dynamic => self.dynamic_search,
            DataSource::Static => false,
        }
    }
}
