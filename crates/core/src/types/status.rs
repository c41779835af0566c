//! Status enums for orders.
//!
//! Wire values are the Spanish labels used by the original dataset, so the
//! seeded documents stay queryable with the labels downstream consumers
//! already expect. Rust-side names are English.

use serde::{Deserialize, Serialize};

/// Order fulfillment state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    /// The order has been received but not shipped yet.
    #[default]
    #[serde(rename = "Procesando")]
    Processing,
    /// The order has left the warehouse.
    #[serde(rename = "Enviado")]
    Shipped,
    /// The order reached the customer.
    #[serde(rename = "Entregado")]
    Delivered,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Processing => write!(f, "Procesando"),
            Self::Shipped => write!(f, "Enviado"),
            Self::Delivered => write!(f, "Entregado"),
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Procesando" => Ok(Self::Processing),
            "Enviado" => Ok(Self::Shipped),
            "Entregado" => Ok(Self::Delivered),
            _ => Err(format!("invalid order status: {s}")),
        }
    }
}

/// How an order was paid for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "Tarjeta de crédito")]
    CreditCard,
    #[serde(rename = "PayPal")]
    Paypal,
    #[serde(rename = "Transferencia bancaria")]
    BankTransfer,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_order_status_wire_values() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Processing).unwrap(),
            "\"Procesando\""
        );
        assert_eq!(
            serde_json::to_string(&OrderStatus::Shipped).unwrap(),
            "\"Enviado\""
        );
        assert_eq!(
            serde_json::to_string(&OrderStatus::Delivered).unwrap(),
            "\"Entregado\""
        );
    }

    #[test]
    fn test_order_status_roundtrip() {
        for status in [
            OrderStatus::Processing,
            OrderStatus::Shipped,
            OrderStatus::Delivered,
        ] {
            let parsed: OrderStatus = status.to_string().parse().unwrap();
            assert_eq!(parsed, status);

            let json = serde_json::to_string(&status).unwrap();
            let back: OrderStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(back, status);
        }
    }

    #[test]
    fn test_order_status_rejects_unknown() {
        assert!("Cancelado".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn test_payment_method_wire_values() {
        assert_eq!(
            serde_json::to_string(&PaymentMethod::CreditCard).unwrap(),
            "\"Tarjeta de crédito\""
        );
        assert_eq!(
            serde_json::to_string(&PaymentMethod::Paypal).unwrap(),
            "\"PayPal\""
        );
        assert_eq!(
            serde_json::to_string(&PaymentMethod::BankTransfer).unwrap(),
            "\"Transferencia bancaria\""
        );
    }
}
