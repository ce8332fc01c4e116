use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use orderdesk_core::{DomainError, DomainResult, ValueObject};
use orderdesk_parties::Customer;
use orderdesk_products::{Product, ProductId};
use orderdesk_users::User;

use crate::pricing;

orderdesk_core::aggregate_id_newtype!(
    /// Sales order identifier, assigned by the persistence boundary.
    OrderId
);

/// Quantity of a freshly appended blank row.
pub const DEFAULT_QUANTITY: i64 = 1;

/// Closed set of payment methods accepted on an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    CreditCard,
    DebitCard,
    Cheque,
    BankSlip,
    BankDeposit,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 6] = [
        PaymentMethod::Cash,
        PaymentMethod::CreditCard,
        PaymentMethod::DebitCard,
        PaymentMethod::Cheque,
        PaymentMethod::BankSlip,
        PaymentMethod::BankDeposit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::CreditCard => "Credit card",
            PaymentMethod::DebitCard => "Debit card",
            PaymentMethod::Cheque => "Cheque",
            PaymentMethod::BankSlip => "Bank slip",
            PaymentMethod::BankDeposit => "Bank deposit",
        }
    }
}

impl core::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// Where the order is delivered. Free text; presence is checked on save.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryAddress {
    pub street: String,
    pub number: String,
    pub complement: Option<String>,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

impl ValueObject for DeliveryAddress {}

/// Order line: product, quantity, unit price.
///
/// A line without a product is a blank row waiting to be filled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    product: Option<Product>,
    /// Price in smallest currency unit, copied from the product on assignment.
    unit_price: u64,
    quantity: i64,
}

impl LineItem {
    /// Blank row with the default quantity.
    pub fn empty() -> Self {
        Self::empty_with_quantity(DEFAULT_QUANTITY)
    }

    pub fn empty_with_quantity(quantity: i64) -> Self {
        Self {
            product: None,
            unit_price: 0,
            quantity,
        }
    }

    /// Line for `product` at its current catalog price.
    pub fn for_product(product: Product, quantity: i64) -> Self {
        let mut line = Self::empty_with_quantity(quantity);
        line.assign(product);
        line
    }

    pub fn product(&self) -> Option<&Product> {
        self.product.as_ref()
    }

    pub fn product_id(&self) -> Option<ProductId> {
        self.product.as_ref().map(Product::id_typed)
    }

    pub fn is_empty(&self) -> bool {
        self.product.is_none()
    }

    pub fn references(&self, product_id: ProductId) -> bool {
        self.product_id() == Some(product_id)
    }

    pub fn unit_price(&self) -> u64 {
        self.unit_price
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;
    }

    pub fn subtotal(&self) -> i64 {
        pricing::line_subtotal(self.unit_price, self.quantity)
    }

    fn assign(&mut self, product: Product) {
        self.unit_price = product.unit_price();
        self.product = Some(product);
    }
}

/// Aggregate root: the sales order being edited.
///
/// While a session edits the order, `items` ends with exactly one blank row.
/// `total` is derived and only changes through [`Order::recalculate_total`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: Option<OrderId>,
    created_at: Option<DateTime<Utc>>,
    customer: Option<Customer>,
    delivery_address: DeliveryAddress,
    payment_method: Option<PaymentMethod>,
    salesperson: Option<User>,
    items: Vec<LineItem>,
    total: i64,
}

impl Default for Order {
    fn default() -> Self {
        Self::new()
    }
}

impl Order {
    /// New, unsaved order with a blank delivery address and no lines.
    pub fn new() -> Self {
        Self {
            id: None,
            created_at: None,
            customer: None,
            delivery_address: DeliveryAddress::default(),
            payment_method: None,
            salesperson: None,
            items: Vec::new(),
            total: 0,
        }
    }

    pub fn id(&self) -> Option<OrderId> {
        self.id
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    /// Whether the order carries a persisted identity.
    pub fn is_existing(&self) -> bool {
        self.id.is_some()
    }

    /// Called by the persistence boundary when the order is first stored.
    pub fn assign_identity(&mut self, id: OrderId, created_at: DateTime<Utc>) {
        self.id = Some(id);
        self.created_at = Some(created_at);
    }

    pub fn customer(&self) -> Option<&Customer> {
        self.customer.as_ref()
    }

    pub fn set_customer(&mut self, customer: Option<Customer>) {
        self.customer = customer;
    }

    pub fn delivery_address(&self) -> &DeliveryAddress {
        &self.delivery_address
    }

    pub fn delivery_address_mut(&mut self) -> &mut DeliveryAddress {
        &mut self.delivery_address
    }

    pub fn set_delivery_address(&mut self, address: DeliveryAddress) {
        self.delivery_address = address;
    }

    pub fn payment_method(&self) -> Option<PaymentMethod> {
        self.payment_method
    }

    pub fn set_payment_method(&mut self, method: Option<PaymentMethod>) {
        self.payment_method = method;
    }

    pub fn salesperson(&self) -> Option<&User> {
        self.salesperson.as_ref()
    }

    pub fn set_salesperson(&mut self, salesperson: Option<User>) {
        self.salesperson = salesperson;
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn line(&self, row: usize) -> Option<&LineItem> {
        self.items.get(row)
    }

    pub fn total(&self) -> i64 {
        self.total
    }

    /// Lines that reference a product.
    pub fn priced_items(&self) -> impl Iterator<Item = &LineItem> {
        self.items.iter().filter(|i| !i.is_empty())
    }

    pub fn contains_product(&self, product_id: ProductId) -> bool {
        self.items.iter().any(|i| i.references(product_id))
    }

    /// Row index of the trailing blank row, if there is one.
    pub fn editable_row(&self) -> Option<usize> {
        match self.items.last() {
            Some(last) if last.is_empty() => Some(self.items.len() - 1),
            _ => None,
        }
    }

    /// Append a blank row with the default quantity.
    ///
    /// Does not check for an existing blank row.
    pub fn append_empty_line(&mut self) {
        self.append_empty_line_with_quantity(DEFAULT_QUANTITY);
    }

    pub fn append_empty_line_with_quantity(&mut self, quantity: i64) {
        self.items.push(LineItem::empty_with_quantity(quantity));
    }

    /// Remove the trailing row if and only if it has no product.
    ///
    /// Returns whether a row was removed.
    pub fn remove_empty_line(&mut self) -> bool {
        if self.editable_row().is_some() {
            self.items.pop();
            return true;
        }
        false
    }

    /// total = sum of unit price × quantity over lines with a product.
    pub fn recalculate_total(&mut self) {
        self.total = pricing::order_total(&self.items);
    }

    /// Add a filled line ahead of the blank row (e.g. when rebuilding a stored order).
    ///
    /// Rejects blank lines and products that already have a line.
    pub fn push_line(&mut self, line: LineItem) -> DomainResult<()> {
        let Some(product_id) = line.product_id() else {
            return Err(DomainError::validation("line has no product"));
        };
        if self.contains_product(product_id) {
            return Err(DomainError::conflict(format!(
                "a line item with product {product_id} already exists"
            )));
        }

        let at = self.editable_row().unwrap_or(self.items.len());
        self.items.insert(at, line);
        self.recalculate_total();
        Ok(())
    }

    pub fn set_quantity(&mut self, row: usize, quantity: i64) -> DomainResult<()> {
        let line = self.items.get_mut(row).ok_or_else(|| row_out_of_range(row))?;
        line.set_quantity(quantity);
        Ok(())
    }

    pub fn remove_line(&mut self, row: usize) -> DomainResult<LineItem> {
        if row >= self.items.len() {
            return Err(row_out_of_range(row));
        }
        Ok(self.items.remove(row))
    }

    /// Put `product` on the blank row, appending one first if missing.
    ///
    /// The row keeps whatever quantity was already typed into it. Returns the
    /// row index. Duplicate checks are the caller's job.
    pub(crate) fn fill_editable_line(&mut self, product: Product, quantity: i64) -> usize {
        let row = match self.editable_row() {
            Some(row) => row,
            None => {
                self.append_empty_line_with_quantity(quantity);
                self.items.len() - 1
            }
        };
        self.items[row].assign(product);
        row
    }
}

fn row_out_of_range(row: usize) -> DomainError {
    DomainError::invariant(format!("row {row} does not exist"))
}
