use serde::{Deserialize, Serialize};

/// Where the picker gets its entries from.
///
/// Dispatch is by variant rather than by comparing source strings, so a
/// missing arm is a compile error instead of a silent fallthrough.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DataSource {
    Users,
    Channels,
    Dynamic,
    Static,
}

impl DataSource {
    /// Paged sources are fetched chunk by chunk as the cursor reaches the
    /// end of the list. Dynamic options arrive in one shot and are never
    /// reloaded on scroll.
    pub fn is_paged(&self) -> bool {
        matches!(self, DataSource::Users | DataSource::Channels)
    }

    /// Sources that need a network round-trip for their entries.
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            DataSource::Users | DataSource::Channels | DataSource::Dynamic
        )
    }

    pub fn page_size(&self) -> usize {
        match self {
            DataSource::Users => crate::picker::constants::PROFILE_CHUNK_SIZE,
            DataSource::Channels => crate::picker::constants::CHANNEL_CHUNK_SIZE,
            DataSource::Dynamic | DataSource::Static => 0,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SelectionMode {
    Single,
    Multi,
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub nickname: String,
}

impl UserProfile {
    pub fn full_name(&self) -> String {
        let name = format!("{} {}", self.first_name, self.last_name);
        name.trim().to_string()
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Channel {
    pub id: String,
    pub name: String,
    pub display_name: String,
    #[serde(default)]
    pub purpose: String,
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct DialogOption {
    pub text: String,
    pub value: String,
}

/// One selectable entry. The identity key depends on the shape: users and
/// channels are keyed by server id, dialog options by their value.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Item {
    User(UserProfile),
    Channel(Channel),
    Option(DialogOption),
}

impl Item {
    pub fn key(&self) -> &str {
        match self {
            Item::User(u) => &u.id,
            Item::Channel(c) => &c.id,
            Item::Option(o) => &o.value,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Item::User(u) => &u.username,
            Item::Channel(c) => &c.display_name,
            Item::Option(o) => &o.text,
        }
    }

    /// Text the local search filter matches against.
    pub fn search_text(&self) -> String {
        match self {
            Item::User(u) => format!("{} {} {}", u.username, u.full_name(), u.nickname),
            Item::Channel(c) => format!("{} {} {}", c.name, c.display_name, c.purpose),
            Item::Option(o) => format!("{} {}", o.text, o.value),
        }
    }
}

/// What the picker hands back when the user confirms.
#[derive(Clone, PartialEq, Debug, Serialize)]
#[serde(untagged)]
pub enum Selection {
    Single(Item),
    Multiple(Vec<Item>),
}

/// Work shipped to the directory worker thread. The id is the fetch
/// generation current at dispatch time; responses echo it back so stale
/// completions can be dropped.
#[derive(Clone, Debug)]
pub struct FetchRequest {
    pub id: u64,
    pub source: DataSource,
    pub kind: FetchKind,
}

#[derive(Clone, Debug)]
pub enum FetchKind {
    Page { page: i64, per_page: usize },
    Search { term: String },
}

#[derive(Debug)]
pub struct FetchResponse {
    pub id: u64,
    pub kind: FetchResponseKind,
}

#[derive(Debug)]
pub enum FetchResponseKind {
    Page(Result<Vec<Item>, String>),
    Search(Result<Vec<Item>, String>),
}
