//! Product category document.

use serde::{Deserialize, Serialize};

use mercado_core::CategoryId;

/// A product category (`categorias` collection).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Server-assigned id; `None` until inserted.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<CategoryId>,
    /// Category name, unique within the fixture set.
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion")]
    pub description: String,
}

impl Category {
    /// Collection this document type is stored in.
    pub const COLLECTION: &'static str = "categorias";

    /// Create a category that has not been inserted yet.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: description.into(),
        }
    }
}
