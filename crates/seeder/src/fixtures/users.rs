//! User fixtures.

use mercado_core::UserId;

use crate::models::{Address, Preferences, User};

use super::categories::CategoryIds;
use super::{date, email};

/// Server-assigned ids of the four users, captured after insertion and
/// consumed by the order and review fixtures.
#[derive(Debug, Clone, Copy)]
pub struct UserIds {
    pub ana: UserId,
    pub carlos: UserId,
    pub elena: UserId,
    pub luis: UserId,
}

/// The four sample users, in insertion order.
#[must_use]
pub fn users(categories: &CategoryIds) -> [User; 4] {
    [
        User {
            id: None,
            name: "Ana Rodríguez".to_owned(),
            email: email("ana@example.com"),
            address: Address::new("Calle Principal 123", "Madrid", "28001", "España"),
            phone: "+34612345678".to_owned(),
            registered_at: date(2023, 1, 5),
            preferences: Preferences {
                receive_offers: true,
                favorite_categories: vec![categories.electronics, categories.books],
            },
        },
        User {
            id: None,
            name: "Carlos Gómez".to_owned(),
            email: email("carlos@example.com"),
            address: Address::new("Avenida Secundaria 456", "Barcelona", "08001", "España"),
            phone: "+34623456789".to_owned(),
            registered_at: date(2023, 1, 10),
            preferences: Preferences {
                receive_offers: false,
                favorite_categories: vec![categories.sports, categories.clothing],
            },
        },
        User {
            id: None,
            name: "Elena Martínez".to_owned(),
            email: email("elena@example.com"),
            address: Address::new("Plaza Mayor 789", "Valencia", "46001", "España"),
            phone: "+34634567890".to_owned(),
            registered_at: date(2023, 2, 15),
            preferences: Preferences {
                receive_offers: true,
                favorite_categories: vec![categories.home, categories.books],
            },
        },
        User {
            id: None,
            name: "Luis Fernández".to_owned(),
            email: email("luis@example.com"),
            address: Address::new("Calle Norte 321", "Sevilla", "41001", "España"),
            phone: "+34645678901".to_owned(),
            registered_at: date(2023, 3, 1),
            preferences: Preferences {
                receive_offers: true,
                favorite_categories: vec![categories.electronics, categories.sports],
            },
        },
    ]
}
