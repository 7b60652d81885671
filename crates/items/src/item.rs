use serde::{Deserialize, Serialize};

use itemforge_core::ItemId;

/// A stored item. Only the store constructs these, so `id` is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub description: Option<String>,
}

/// Candidate fields for create and full-replacement update.
///
/// Carries no identifier: ids are assigned by the store on create and taken
/// from the path on update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    pub description: Option<String>,
}

impl NewItem {
    pub fn new(name: impl Into<String>, description: Option<String>) -> Self {
        Self {
            name: name.into(),
            description,
        }
    }

    pub(crate) fn into_item(self, id: ItemId) -> Item {
        Item {
            id,
            name: self.name,
            description: self.description,
        }
    }
}

impl Item {
    /// Replace every mutable field in place; the id is untouched.
    pub(crate) fn replace_fields(&mut self, fields: NewItem) {
        self.name = fields.name;
        self.description = fields.description;
    }
}
