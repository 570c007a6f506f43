use indexmap::IndexMap;

use crate::error::{AppError, AppResult};
use crate::models::{Product, ProductPayload};

// ── ProductStore: the in-process collection ──────────────────────────────────

/// Insertion-ordered product collection keyed by id.
///
/// `IndexMap` keeps records in the order they were created, replaces values in
/// place without moving them, and `shift_remove` closes the gap left by a
/// delete while preserving the relative order of the remaining records.
#[derive(Debug, Default)]
pub struct ProductStore {
    products: IndexMap<i64, Product>,
}

impl ProductStore {
    /// Builds a store holding `products` in the given order.
    /// A later record with a duplicate id replaces the earlier one in its slot.
    pub fn from_products(products: impl IntoIterator<Item = Product>) -> Self {
        Self {
            products: products.into_iter().map(|p| (p.id, p)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// One past the highest id currently stored, or 1 when empty.
    /// Removing the highest record frees its id for reuse.
    pub fn next_id(&self) -> i64 {
        self.products.keys().max().map_or(1, |max| max + 1)
    }

    /// Snapshot of every record in storage order.
    pub fn list(&self) -> Vec<Product> {
        self.products.values().cloned().collect()
    }

    // ── Mutations ─────────────────────────────────────────────────────────────

    /// Appends `payload` under a freshly allocated id and returns the stored record.
    pub fn create(&mut self, payload: ProductPayload) -> Product {
        let product = Product::from_payload(self.next_id(), payload);
        self.products.insert(product.id, product.clone());
        product
    }

    /// Replaces the record `id` in place. The stored id always stays `id`.
    pub fn update(&mut self, id: i64, payload: ProductPayload) -> AppResult<Product> {
        let slot = self.products.get_mut(&id).ok_or(AppError::NotFound(id))?;
        *slot = Product::from_payload(id, payload);
        Ok(slot.clone())
    }

    pub fn delete(&mut self, id: i64) -> AppResult<Product> {
        self.products
            .shift_remove(&id)
            .ok_or(AppError::NotFound(id))
    }
}
