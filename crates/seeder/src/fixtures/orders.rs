//! Order fixtures.

use mercado_core::{OrderStatus, PaymentMethod};

use crate::models::{Address, Order, OrderItem};

use super::products::ProductIds;
use super::users::UserIds;
use super::{date, price};

/// The five sample orders, inserted as one batch.
///
/// Line items and shipping addresses are authored snapshots: they repeat the
/// product and user data as it stood at order time instead of dereferencing
/// the live documents.
#[must_use]
pub fn orders(users: &UserIds, products: &ProductIds) -> [Order; 5] {
    [
        Order {
            id: None,
            user_id: users.ana,
            date: date(2023, 2, 10),
            status: OrderStatus::Delivered,
            items: vec![
                OrderItem {
                    product_id: products.smartphone,
                    name: "Smartphone XYZ".to_owned(),
                    price: price(599_99),
                    quantity: 1,
                },
                OrderItem {
                    product_id: products.novel,
                    name: "Novela Bestseller".to_owned(),
                    price: price(19_99),
                    quantity: 2,
                },
            ],
            total: price(639_97),
            shipping_address: Address::new("Calle Principal 123", "Madrid", "28001", "España"),
            payment_method: PaymentMethod::CreditCard,
        },
        Order {
            id: None,
            user_id: users.carlos,
            date: date(2023, 2, 20),
            status: OrderStatus::Delivered,
            items: vec![
                OrderItem {
                    product_id: products.running_shoes,
                    name: "Zapatillas Running".to_owned(),
                    price: price(89_99),
                    quantity: 1,
                },
                OrderItem {
                    product_id: products.rain_jacket,
                    name: "Chaqueta Impermeable".to_owned(),
                    price: price(119_99),
                    quantity: 1,
                },
            ],
            total: price(209_98),
            shipping_address: Address::new("Avenida Secundaria 456", "Barcelona", "08001", "España"),
            payment_method: PaymentMethod::Paypal,
        },
        Order {
            id: None,
            user_id: users.elena,
            date: date(2023, 3, 5),
            status: OrderStatus::Shipped,
            items: vec![OrderItem {
                product_id: products.pan_set,
                name: "Set de Sartenes".to_owned(),
                price: price(79_99),
                quantity: 1,
            }],
            total: price(79_99),
            shipping_address: Address::new("Plaza Mayor 789", "Valencia", "46001", "España"),
            payment_method: PaymentMethod::BankTransfer,
        },
        Order {
            id: None,
            user_id: users.luis,
            date: date(2023, 3, 15),
            status: OrderStatus::Processing,
            items: vec![
                OrderItem {
                    product_id: products.laptop,
                    name: "Laptop UltraBook".to_owned(),
                    price: price(1299_99),
                    quantity: 1,
                },
                OrderItem {
                    product_id: products.smartwatch,
                    name: "Smartwatch Fitness".to_owned(),
                    price: price(149_99),
                    quantity: 1,
                },
            ],
            total: price(1449_98),
            shipping_address: Address::new("Calle Norte 321", "Sevilla", "41001", "España"),
            payment_method: PaymentMethod::CreditCard,
        },
        Order {
            id: None,
            user_id: users.ana,
            date: date(2023, 3, 20),
            status: OrderStatus::Processing,
            items: vec![OrderItem {
                product_id: products.smartwatch,
                name: "Smartwatch Fitness".to_owned(),
                price: price(149_99),
                quantity: 1,
            }],
            total: price(149_99),
            shipping_address: Address::new("Calle Principal 123", "Madrid", "28001", "España"),
            payment_method: PaymentMethod::CreditCard,
        },
    ]
}
