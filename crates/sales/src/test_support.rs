//! Shared test fixtures.

use orderdesk_parties::{Customer, CustomerId, CustomerKind};
use orderdesk_products::{Product, ProductId};
use orderdesk_users::{Group, User, UserId};

use crate::order::DeliveryAddress;

pub fn test_product(sku: &str, unit_price: u64) -> Product {
    Product::new(ProductId::generate(), sku, format!("Product {sku}"), unit_price).unwrap()
}

pub fn test_customer() -> Customer {
    Customer::new(
        CustomerId::generate(),
        "Maria Souza",
        Some("maria@example.com".to_string()),
        "12345678901",
        CustomerKind::Individual,
    )
    .unwrap()
}

pub fn test_salesperson() -> User {
    User::new(UserId::generate(), "Alice", "alice@example.com", vec![Group::Salespeople]).unwrap()
}

pub fn test_address() -> DeliveryAddress {
    DeliveryAddress {
        street: "Rua das Flores".to_string(),
        number: "100".to_string(),
        complement: None,
        neighborhood: "Centro".to_string(),
        city: "Uberlândia".to_string(),
        state: "MG".to_string(),
        zip: "38400-000".to_string(),
    }
}
