use crate::models::product::Product;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Result of an upsert. The HTTP layer answers 200 for every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    /// New product appended with the allocated id
    Created(i64),
    /// Existing product replaced in place
    Updated(i64),
    /// Non-zero id with no matching product, nothing changed
    Ignored(i64),
}

struct Catalog {
    products: Vec<Product>,
    id_counter: i64,
}

/// In-memory product catalog
///
/// The product list and the id counter live behind one mutex. Every
/// operation holds the lock only for its own in-memory work.
pub struct ProductStore {
    catalog: Mutex<Catalog>,
}

impl ProductStore {
    /// Create a store pre-filled with `products`. The next created product
    /// gets `id_counter + 1`.
    pub fn with_products(products: Vec<Product>, id_counter: i64) -> Self {
        Self {
            catalog: Mutex::new(Catalog {
                products,
                id_counter,
            }),
        }
    }

    // A panic while holding the lock cannot leave the catalog half-written:
    // every mutation below is a single push, assignment or retain.
    fn lock(&self) -> MutexGuard<'_, Catalog> {
        self.catalog.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of every product in insertion order
    pub fn list(&self) -> Vec<Product> {
        self.lock().products.clone()
    }

    /// Create when `product.id == 0`, otherwise replace the product with the
    /// same id. An unknown non-zero id is a silent no-op.
    pub fn upsert(&self, mut product: Product) -> Upsert {
        let mut catalog = self.lock();

        if product.id == 0 {
            catalog.id_counter += 1;
            product.id = catalog.id_counter;
            let id = product.id;
            catalog.products.push(product);
            return Upsert::Created(id);
        }

        let id = product.id;
        match catalog.products.iter_mut().find(|p| p.id == id) {
            Some(existing) => {
                *existing = product;
                Upsert::Updated(id)
            }
            None => Upsert::Ignored(id),
        }
    }

    /// Remove every product with `id`. Returns how many were removed.
    pub fn delete(&self, id: i64) -> usize {
        let mut catalog = self.lock();
        let before = catalog.products.len();
        catalog.products.retain(|p| p.id != id);
        before - catalog.products.len()
    }

    pub fn len(&self) -> usize {
        self.lock().products.len()
    }
}
