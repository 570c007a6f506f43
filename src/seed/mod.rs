use tracing::info;

use crate::models::Product;
use crate::store::ProductStore;

/// Records present in every freshly started service, in storage order.
static SEED_PRODUCTS: &[(i64, &str, i64)] = &[
    (1, "Product 1", 10_000),
    (2, "Product 2", 20_000),
];

pub fn seed_products() -> Vec<Product> {
    SEED_PRODUCTS
        .iter()
        .map(|&(id, name, price)| Product {
            id,
            name: name.to_string(),
            price,
        })
        .collect()
}

/// Builds the startup store pre-populated with the seed records.
pub fn seeded_store() -> ProductStore {
    let store = ProductStore::from_products(seed_products());
    info!(count = store.len(), "Seeded product store");
    store
}
