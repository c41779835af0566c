//! Postal address sub-document.

use serde::{Deserialize, Serialize};

/// A postal address.
///
/// Embedded both in users (`direccion`) and in orders (`direccionEnvio`).
/// Orders store their own copy as a shipping snapshot, so a user moving does
/// not rewrite order history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(rename = "calle")]
    pub street: String,
    #[serde(rename = "ciudad")]
    pub city: String,
    #[serde(rename = "codigoPostal")]
    pub postal_code: String,
    #[serde(rename = "pais")]
    pub country: String,
}

impl Address {
    /// Create a new address.
    #[must_use]
    pub fn new(
        street: impl Into<String>,
        city: impl Into<String>,
        postal_code: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            street: street.into(),
            city: city.into(),
            postal_code: postal_code.into(),
            country: country.into(),
        }
    }
}
