//! Customer document.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use mercado_core::{CategoryId, Email, UserId};

use super::Address;

/// A registered customer (`usuarios` collection).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Server-assigned id; `None` until inserted.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,
    #[serde(rename = "nombre")]
    pub name: String,
    /// Unique across the collection, enforced by the `email` index.
    pub email: Email,
    #[serde(rename = "direccion")]
    pub address: Address,
    #[serde(rename = "telefono")]
    pub phone: String,
    #[serde(
        rename = "fechaRegistro",
        with = "bson::serde_helpers::chrono_datetime_as_bson_datetime"
    )]
    pub registered_at: DateTime<Utc>,
    #[serde(rename = "preferencias")]
    pub preferences: Preferences,
}

impl User {
    /// Collection this document type is stored in.
    pub const COLLECTION: &'static str = "usuarios";
}

/// Marketing preferences embedded in a user document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(rename = "recibirOfertas")]
    pub receive_offers: bool,
    #[serde(rename = "categoriasFavoritas")]
    pub favorite_categories: Vec<CategoryId>,
}
