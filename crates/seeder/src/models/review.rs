//! Product review document.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use mercado_core::{ProductId, Rating, ReviewId, UserId};

/// A product review left by a user (`reviews` collection).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    /// Server-assigned id; `None` until inserted.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ReviewId>,
    #[serde(rename = "producto_id")]
    pub product_id: ProductId,
    #[serde(rename = "usuario_id")]
    pub user_id: UserId,
    #[serde(rename = "calificacion")]
    pub rating: Rating,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "comentario")]
    pub comment: String,
    #[serde(
        rename = "fecha",
        with = "bson::serde_helpers::chrono_datetime_as_bson_datetime"
    )]
    pub date: DateTime<Utc>,
    /// "Was this helpful" vote count.
    #[serde(rename = "util")]
    pub helpful_votes: i32,
}

impl Review {
    /// Collection this document type is stored in.
    pub const COLLECTION: &'static str = "reviews";
}
