//! Review fixtures.

use mercado_core::Rating;

use crate::models::Review;

use super::date;
use super::products::ProductIds;
use super::users::UserIds;

/// The six sample reviews, inserted as one batch.
#[must_use]
pub fn reviews(products: &ProductIds, users: &UserIds) -> [Review; 6] {
    [
        Review {
            id: None,
            product_id: products.smartphone,
            user_id: users.ana,
            rating: Rating::Five,
            title: "Excelente producto".to_owned(),
            comment: "Muy satisfecha con la compra, cumple todas mis expectativas.".to_owned(),
            date: date(2023, 2, 15),
            helpful_votes: 10,
        },
        Review {
            id: None,
            product_id: products.laptop,
            user_id: users.luis,
            rating: Rating::Four,
            title: "Buena laptop pero algo cara".to_owned(),
            comment: "Buen rendimiento pero creo que la relación calidad-precio podría ser mejor."
                .to_owned(),
            date: date(2023, 3, 25),
            helpful_votes: 5,
        },
        Review {
            id: None,
            product_id: products.running_shoes,
            user_id: users.carlos,
            rating: Rating::Five,
            title: "Perfectas para correr".to_owned(),
            comment: "Muy cómodas y buena amortiguación. Las recomiendo totalmente.".to_owned(),
            date: date(2023, 2, 25),
            helpful_votes: 8,
        },
        Review {
            id: None,
            product_id: products.pan_set,
            user_id: users.elena,
            rating: Rating::Three,
            title: "Calidad aceptable".to_owned(),
            comment: "Son buenas pero esperaba mayor durabilidad del recubrimiento.".to_owned(),
            date: date(2023, 3, 15),
            helpful_votes: 3,
        },
        Review {
            id: None,
            product_id: products.novel,
            user_id: users.ana,
            rating: Rating::Five,
            title: "No pude dejar de leerlo".to_owned(),
            comment: "Una historia fascinante de principio a fin, totalmente recomendado."
                .to_owned(),
            date: date(2023, 2, 20),
            helpful_votes: 12,
        },
        Review {
            id: None,
            product_id: products.smartphone,
            user_id: users.carlos,
            rating: Rating::Four,
            title: "Buen teléfono pero batería mejorable".to_owned(),
            comment: "En general muy buen rendimiento pero la batería podría durar más.".to_owned(),
            date: date(2023, 3, 10),
            helpful_votes: 7,
        },
    ]
}
