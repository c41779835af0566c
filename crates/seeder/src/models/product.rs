//! Product document.

use bson::Document;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use mercado_core::{CategoryId, ProductId};

/// A product for sale (`productos` collection).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Server-assigned id; `None` until inserted.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ProductId>,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "precio")]
    pub price: Decimal,
    /// Units in stock.
    pub stock: i32,
    /// Owning category.
    #[serde(rename = "categoria_id")]
    pub category_id: CategoryId,
    /// Free-form attributes; the shape varies per product type (display
    /// size, materials, sizes/colors as lists, ...), so this stays an open
    /// document rather than a fixed schema.
    #[serde(rename = "caracteristicas")]
    pub attributes: Document,
    #[serde(
        rename = "fechaCreacion",
        with = "bson::serde_helpers::chrono_datetime_as_bson_datetime"
    )]
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Collection this document type is stored in.
    pub const COLLECTION: &'static str = "productos";
}
