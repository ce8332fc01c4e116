use orderdesk_products::{Product, ProductDirectory, ProductId, normalize_sku};

use crate::directory::name_starts_with;
use crate::store::{InMemoryStore, KeyedStore};

#[derive(Debug, Default)]
pub struct InMemoryProductDirectory {
    store: InMemoryStore<ProductId, Product>,
}

impl InMemoryProductDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let directory = Self::new();
        for product in products {
            directory.upsert(product);
        }
        directory
    }

    /// Insert or replace by product id.
    pub fn upsert(&self, product: Product) {
        self.store.upsert(product.id_typed(), product);
    }
}

impl ProductDirectory for InMemoryProductDirectory {
    fn find_by_sku(&self, sku: &str) -> Option<Product> {
        let sku = normalize_sku(sku);
        self.store.list().into_iter().find(|p| p.sku() == sku)
    }

    fn search_by_name(&self, prefix: &str) -> Vec<Product> {
        let mut found: Vec<Product> = self
            .store
            .list()
            .into_iter()
            .filter(|p| name_starts_with(p.name(), prefix))
            .collect();
        found.sort_by(|a, b| a.name().cmp(b.name()).then_with(|| a.sku().cmp(b.sku())));
        found
    }
}
