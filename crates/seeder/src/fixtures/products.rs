//! Product fixtures.

use bson::doc;

use mercado_core::ProductId;

use crate::models::Product;

use super::categories::CategoryIds;
use super::{date, price};

/// Server-assigned ids of the eight products, captured after insertion and
/// consumed by the order and review fixtures.
#[derive(Debug, Clone, Copy)]
pub struct ProductIds {
    pub smartphone: ProductId,
    pub laptop: ProductId,
    pub tshirt: ProductId,
    pub running_shoes: ProductId,
    pub pan_set: ProductId,
    pub novel: ProductId,
    pub smartwatch: ProductId,
    pub rain_jacket: ProductId,
}

/// The eight sample products, in insertion order.
///
/// Each product's `caracteristicas` document is shaped for its product type;
/// there is no common schema across them.
#[must_use]
pub fn products(categories: &CategoryIds) -> [Product; 8] {
    [
        Product {
            id: None,
            name: "Smartphone XYZ".to_owned(),
            description: "Teléfono inteligente de última generación".to_owned(),
            price: price(599_99),
            stock: 100,
            category_id: categories.electronics,
            attributes: doc! {
                "pantalla": "6.5 pulgadas",
                "procesador": "Octa-core",
                "memoria": "8GB RAM",
                "almacenamiento": "128GB",
            },
            created_at: date(2023, 1, 15),
        },
        Product {
            id: None,
            name: "Laptop UltraBook".to_owned(),
            description: "Laptop ligera y potente".to_owned(),
            price: price(1299_99),
            stock: 50,
            category_id: categories.electronics,
            attributes: doc! {
                "pantalla": "14 pulgadas",
                "procesador": "Intel i7",
                "memoria": "16GB RAM",
                "almacenamiento": "512GB SSD",
            },
            created_at: date(2023, 2, 10),
        },
        Product {
            id: None,
            name: "Camiseta Casual".to_owned(),
            description: "Camiseta de algodón premium".to_owned(),
            price: price(29_99),
            stock: 200,
            category_id: categories.clothing,
            attributes: doc! {
                "material": "100% algodón",
                "tallas": ["S", "M", "L", "XL"],
                "colores": ["Azul", "Rojo", "Negro"],
            },
            created_at: date(2023, 1, 20),
        },
        Product {
            id: None,
            name: "Zapatillas Running".to_owned(),
            description: "Zapatillas para correr con amortiguación".to_owned(),
            price: price(89_99),
            stock: 75,
            category_id: categories.sports,
            attributes: doc! {
                "material": "Malla sintética",
                "tallas": [38, 39, 40, 41, 42, 43, 44],
                "colores": ["Negro/Rojo", "Azul/Blanco"],
            },
            created_at: date(2023, 3, 5),
        },
        Product {
            id: None,
            name: "Set de Sartenes".to_owned(),
            description: "Juego de 3 sartenes antiadherentes".to_owned(),
            price: price(79_99),
            stock: 30,
            category_id: categories.home,
            attributes: doc! {
                "material": "Aluminio con recubrimiento cerámico",
                "piezas": 3,
                "aptoInduccion": true,
            },
            created_at: date(2023, 2, 20),
        },
        Product {
            id: None,
            name: "Novela Bestseller".to_owned(),
            description: "Última novela del autor reconocido".to_owned(),
            price: price(19_99),
            stock: 150,
            category_id: categories.books,
            attributes: doc! {
                "formato": "Tapa blanda",
                "paginas": 320,
                "idioma": "Español",
            },
            created_at: date(2023, 1, 10),
        },
        Product {
            id: None,
            name: "Smartwatch Fitness".to_owned(),
            description: "Reloj inteligente con funciones deportivas".to_owned(),
            price: price(149_99),
            stock: 60,
            category_id: categories.electronics,
            attributes: doc! {
                "pantalla": "1.3 pulgadas AMOLED",
                "bateria": "10 días",
                "resistenciaAgua": "5 ATM",
                "sensores": ["Ritmo cardíaco", "GPS", "Acelerómetro"],
            },
            created_at: date(2023, 3, 15),
        },
        Product {
            id: None,
            name: "Chaqueta Impermeable".to_owned(),
            description: "Chaqueta resistente al agua y viento".to_owned(),
            price: price(119_99),
            stock: 40,
            category_id: categories.clothing,
            attributes: doc! {
                "material": "Poliéster reciclado",
                "impermeabilidad": "10.000mm",
                "tallas": ["S", "M", "L", "XL"],
                "colores": ["Verde", "Azul marino", "Negro"],
            },
            created_at: date(2023, 2, 25),
        },
    ]
}
