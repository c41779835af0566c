//! Category fixtures.

use mercado_core::CategoryId;

use crate::models::Category;

/// Server-assigned ids of the five categories, captured after insertion and
/// consumed by the product and user fixtures.
#[derive(Debug, Clone, Copy)]
pub struct CategoryIds {
    pub electronics: CategoryId,
    pub clothing: CategoryId,
    pub home: CategoryId,
    pub sports: CategoryId,
    pub books: CategoryId,
}

/// The five sample categories, in insertion order.
#[must_use]
pub fn categories() -> [Category; 5] {
    [
        Category::new("Electrónica", "Dispositivos y gadgets electrónicos"),
        Category::new("Ropa", "Prendas de vestir y accesorios"),
        Category::new("Hogar", "Productos para el hogar y decoración"),
        Category::new("Deportes", "Artículos deportivos y fitness"),
        Category::new("Libros", "Libros impresos y digitales"),
    ]
}
