use serde::{Deserialize, Serialize};

use orderdesk_core::{DomainResult, Entity, Violations};

use crate::sku::{normalize_sku, validate_sku};

orderdesk_core::aggregate_id_newtype!(
    /// Product identifier.
    ProductId
);

const MAX_NAME_CHARS: usize = 80;

/// Catalog product as seen by order entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    sku: String,
    name: String,
    /// Price in smallest currency unit (e.g., cents).
    unit_price: u64,
}

impl Product {
    pub fn new(
        id: ProductId,
        sku: impl Into<String>,
        name: impl Into<String>,
        unit_price: u64,
    ) -> DomainResult<Self> {
        let sku = normalize_sku(&sku.into());
        let name = name.into().trim().to_string();

        let mut violations = Violations::new();
        if let Err(e) = validate_sku(&sku) {
            violations.add("sku", e.reason());
        }
        if violations.require_text("name", &name) {
            violations.max_chars("name", &name, MAX_NAME_CHARS);
        }
        violations.into_result()?;

        Ok(Self {
            id,
            sku,
            name,
            unit_price,
        })
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn sku(&self) -> &str {
        &self.sku
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_price(&self) -> u64 {
        self.unit_price
    }

    /// Catalog price change. Order lines that already copied the old price keep it.
    pub fn reprice(&mut self, unit_price: u64) {
        self.unit_price = unit_price;
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
