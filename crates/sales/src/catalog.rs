//! Read-only lookups the editing session depends on.

use std::sync::Arc;

use orderdesk_parties::{Customer, CustomerDirectory};
use orderdesk_products::{Product, ProductDirectory};
use orderdesk_users::{User, UserDirectory, UserId};

/// Everything order entry needs to look up. "No match" is never an error.
pub trait CatalogLookup: Send + Sync {
    fn find_product_by_code(&self, code: &str) -> Option<Product>;

    fn find_products_by_name_prefix(&self, text: &str) -> Vec<Product>;

    fn find_customers_by_name_prefix(&self, text: &str) -> Vec<Customer>;

    fn list_salespeople(&self) -> Vec<User>;

    fn find_user(&self, id: UserId) -> Option<User>;
}

impl<L> CatalogLookup for Arc<L>
where
    L: CatalogLookup + ?Sized,
{
    fn find_product_by_code(&self, code: &str) -> Option<Product> {
        (**self).find_product_by_code(code)
    }

    fn find_products_by_name_prefix(&self, text: &str) -> Vec<Product> {
        (**self).find_products_by_name_prefix(text)
    }

    fn find_customers_by_name_prefix(&self, text: &str) -> Vec<Customer> {
        (**self).find_customers_by_name_prefix(text)
    }

    fn list_salespeople(&self) -> Vec<User> {
        (**self).list_salespeople()
    }

    fn find_user(&self, id: UserId) -> Option<User> {
        (**self).find_user(id)
    }
}

/// [`CatalogLookup`] over the three directories.
#[derive(Debug, Clone)]
pub struct Catalog<P, C, U> {
    products: P,
    customers: C,
    users: U,
}

impl<P, C, U> Catalog<P, C, U> {
    pub fn new(products: P, customers: C, users: U) -> Self {
        Self {
            products,
            customers,
            users,
        }
    }
}

impl<P, C, U> CatalogLookup for Catalog<P, C, U>
where
    P: ProductDirectory,
    C: CustomerDirectory,
    U: UserDirectory,
{
    fn find_product_by_code(&self, code: &str) -> Option<Product> {
        self.products.find_by_sku(code)
    }

    fn find_products_by_name_prefix(&self, text: &str) -> Vec<Product> {
        self.products.search_by_name(text)
    }

    fn find_customers_by_name_prefix(&self, text: &str) -> Vec<Customer> {
        self.customers.search_by_name(text)
    }

    fn list_salespeople(&self) -> Vec<User> {
        self.users.salespeople()
    }

    fn find_user(&self, id: UserId) -> Option<User> {
        self.users.find_by_id(id)
    }
}
