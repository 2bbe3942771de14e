use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::word_list::WordList;

/// Name given to lists created with a blank name.
pub const UNNAMED_LIST: &str = "Untitled list";

/// The list every fresh process starts with.
pub const DEFAULT_LIST_NAME: &str = "Workforce & Recrutare";

/// Seed words for the default list, each starting at one vote.
const SEED_WORDS: [&str; 20] = [
    "talent",
    "carieră",
    "recrutare",
    "selecție",
    "competențe",
    "experiență",
    "abilități",
    "dezvoltare",
    "pregătire",
    "profesionalism",
    "motivație",
    "performanță",
    "echipă",
    "colaborare",
    "lider",
    "management",
    "salariu",
    "beneficii",
    "oportunitate",
    "succes",
];

/// Identifying fields of a list, as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListMeta {
    pub id: String,
    pub name: String,
}

/// Read-only view of the registry: all lists in creation order plus the
/// currently-active id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListsOverview {
    pub lists: Vec<ListMeta>,
    pub active_list_id: String,
}

/// Why a list delete was rejected. Both cases leave the registry untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeleteListError {
    #[error("List not found")]
    NotFound,
    #[error("Cannot delete the last word list")]
    LastList,
}

/// Owns every word list and tracks which one is active.
///
/// Invariants: the registry always holds at least one list, and `active_id`
/// always names an existing list. Lists are kept in creation order, which
/// makes replacement selection on delete deterministic.
#[derive(Debug)]
pub struct ListRegistry {
    lists: Vec<WordList>,
    active_id: String,
}

impl ListRegistry {
    /// Registry holding the given list as its sole, active member.
    pub fn with_list(list: WordList) -> Self {
        Self {
            active_id: list.id.clone(),
            lists: vec![list],
        }
    }

    /// Registry seeded with the default list of 20 domain words.
    pub fn seeded() -> Self {
        let mut list = WordList::new(DEFAULT_LIST_NAME);
        for word in SEED_WORDS {
            list.propose(word);
        }
        Self::with_list(list)
    }

    /// The currently-active list.
    pub fn active(&self) -> &WordList {
        self.lists
            .iter()
            .find(|list| list.id == self.active_id)
            .expect("registry invariant: active id always names an existing list")
    }

    pub fn active_mut(&mut self) -> &mut WordList {
        let active_id = self.active_id.clone();
        self.lists
            .iter_mut()
            .find(|list| list.id == active_id)
            .expect("registry invariant: active id always names an existing list")
    }

    /// Create a new list, empty or as a value copy of the active list's
    /// entries at call time. A blank name gets a placeholder. Never fails.
    pub fn create(&mut self, name: &str, copy_from_active: bool) -> ListMeta {
        let name = name.trim();
        let name = if name.is_empty() { UNNAMED_LIST } else { name };
        let list = if copy_from_active {
            WordList::copy_of(name, self.active())
        } else {
            WordList::new(name)
        };
        let meta = ListMeta {
            id: list.id.clone(),
            name: list.name.clone(),
        };
        self.lists.push(list);
        meta
    }

    /// Swap the active pointer. Returns false when the id is unknown.
    pub fn set_active(&mut self, id: &str) -> bool {
        if self.lists.iter().any(|list| list.id == id) {
            self.active_id = id.to_string();
            true
        } else {
            false
        }
    }

    /// Delete a list. Refuses unknown ids and the sole remaining list.
    /// When the active list is deleted, the first remaining list is
    /// promoted before returning, so there is never a state without an
    /// active list. Returns whether such a promotion happened.
    pub fn delete(&mut self, id: &str) -> Result<bool, DeleteListError> {
        let index = self
            .lists
            .iter()
            .position(|list| list.id == id)
            .ok_or(DeleteListError::NotFound)?;
        if self.lists.len() == 1 {
            return Err(DeleteListError::LastList);
        }
        self.lists.remove(index);
        if self.active_id == id {
            self.active_id = self.lists[0].id.clone();
            return Ok(true);
        }
        Ok(false)
    }

    pub fn overview(&self) -> ListsOverview {
        ListsOverview {
            lists: self
                .lists
                .iter()
                .map(|list| ListMeta {
                    id: list.id.clone(),
                    name: list.name.clone(),
                })
                .collect(),
            active_list_id: self.active_id.clone(),
        }
    }
}
