//! Order document.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use mercado_core::{OrderId, OrderStatus, PaymentMethod, ProductId, UserId};

use super::Address;

/// A customer order (`pedidos` collection).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Server-assigned id; `None` until inserted.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<OrderId>,
    /// Ordering user.
    #[serde(rename = "usuario_id")]
    pub user_id: UserId,
    #[serde(
        rename = "fecha",
        with = "bson::serde_helpers::chrono_datetime_as_bson_datetime"
    )]
    pub date: DateTime<Utc>,
    #[serde(rename = "estado")]
    pub status: OrderStatus,
    #[serde(rename = "productos")]
    pub items: Vec<OrderItem>,
    /// Authored total. Not recomputed from the line items at load time;
    /// fixture tests pin it to their sum.
    pub total: Decimal,
    /// Where this order was shipped, copied from the user's address at order
    /// time.
    #[serde(rename = "direccionEnvio")]
    pub shipping_address: Address,
    #[serde(rename = "metodoPago")]
    pub payment_method: PaymentMethod,
}

impl Order {
    /// Collection this document type is stored in.
    pub const COLLECTION: &'static str = "pedidos";

    /// Sum of `precio × cantidad` over the line items.
    #[must_use]
    pub fn items_total(&self) -> Decimal {
        self.items.iter().map(OrderItem::line_total).sum()
    }
}

/// A single order line.
///
/// Name and price are snapshots taken when the order was placed; changing a
/// product later must not rewrite order history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    #[serde(rename = "producto_id")]
    pub product_id: ProductId,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "precio")]
    pub price: Decimal,
    #[serde(rename = "cantidad")]
    pub quantity: i32,
}

impl OrderItem {
    /// `precio × cantidad` for this line.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use bson::oid::ObjectId;
    use chrono::TimeZone;

    use super::*;

    fn sample() -> Order {
        Order {
            id: None,
            user_id: UserId::new(ObjectId::new()),
            date: Utc.with_ymd_and_hms(2023, 2, 10, 0, 0, 0).unwrap(),
            status: OrderStatus::Delivered,
            items: vec![
                OrderItem {
                    product_id: ProductId::new(ObjectId::new()),
                    name: "Smartphone XYZ".to_owned(),
                    price: Decimal::new(59999, 2),
                    quantity: 1,
                },
                OrderItem {
                    product_id: ProductId::new(ObjectId::new()),
                    name: "Novela Bestseller".to_owned(),
                    price: Decimal::new(1999, 2),
                    quantity: 2,
                },
            ],
            total: Decimal::new(63997, 2),
            shipping_address: Address::new("Calle Principal 123", "Madrid", "28001", "España"),
            payment_method: PaymentMethod::CreditCard,
        }
    }

    #[test]
    fn test_items_total_is_exact() {
        let order = sample();
        // 599.99 × 1 + 19.99 × 2 = 639.97, with no float drift
        assert_eq!(order.items_total(), Decimal::new(63997, 2));
        assert_eq!(order.items_total(), order.total);
    }

    #[test]
    fn test_wire_field_names() {
        let doc = bson::to_document(&sample()).unwrap();

        assert!(!doc.contains_key("_id"));
        assert!(doc.get_object_id("usuario_id").is_ok());
        assert!(doc.get_datetime("fecha").is_ok());
        assert_eq!(doc.get_str("estado").unwrap(), "Entregado");
        assert_eq!(doc.get_str("metodoPago").unwrap(), "Tarjeta de crédito");
        assert!(doc.get_document("direccionEnvio").is_ok());

        let items = doc.get_array("productos").unwrap();
        assert_eq!(items.len(), 2);
        let first = items
            .first()
            .and_then(bson::Bson::as_document)
            .unwrap();
        assert!(first.get_object_id("producto_id").is_ok());
        assert_eq!(first.get_str("nombre").unwrap(), "Smartphone XYZ");
        assert_eq!(first.get_i32("cantidad").unwrap(), 1);
    }
}
