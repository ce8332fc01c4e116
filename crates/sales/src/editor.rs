//! Order editing session.
//!
//! One session owns one order for the duration of an edit. It is created when
//! editing starts and consumed by [`EditingSession::finish`]; nothing outside
//! the session mutates the order in between.
//!
//! Row conventions while editing:
//! - the order always ends with exactly one blank row, which is the row new
//!   products are put on;
//! - row 0 can never be deleted by typing a quantity below 1, and neither can
//!   the blank row. Both are clamped back to 1 instead.

use tracing::{debug, warn};

use orderdesk_core::{DomainError, DomainResult, Violations};
use orderdesk_events::Subscription;
use orderdesk_parties::Customer;
use orderdesk_products::{Product, validate_sku};
use orderdesk_users::{User, resolve_user};

use crate::catalog::CatalogLookup;
use crate::config::SessionConfig;
use crate::message::OrderChanged;
use crate::notify::Notifier;
use crate::order::{DeliveryAddress, Order, PaymentMethod};
use crate::save::{OrderRepository, SaveOutcome, save_order};
use crate::validation::validate_for_save;

/// What happened to a product offered to the editable row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineAssignment {
    /// The product now sits on `row` and a new blank row was appended.
    Assigned { row: usize },
    /// Another line already has this product; nothing changed.
    DuplicateProduct,
    /// The typed code is malformed; nothing was looked up.
    InvalidCode,
    /// No product to assign (blank code, no match, or nothing selected).
    Nothing,
}

/// What a quantity edit did to the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityChange {
    Updated,
    /// Quantity below 1 on a protected row; reset to 1.
    Clamped,
    /// Quantity below 1 on any other row; the row is gone.
    Removed,
}

pub struct EditingSession<L, R, N> {
    catalog: L,
    repository: R,
    notifier: N,
    config: SessionConfig,
    order: Order,
    salespeople: Vec<User>,
    code: String,
    editable_product: Option<Product>,
}

impl<L, R, N> EditingSession<L, R, N>
where
    L: CatalogLookup,
    R: OrderRepository,
    N: Notifier,
{
    /// Session over a fresh order. Call [`initialize`](Self::initialize) before editing.
    pub fn new(catalog: L, repository: R, notifier: N, config: SessionConfig) -> Self {
        Self {
            catalog,
            repository,
            notifier,
            config,
            order: Order::new(),
            salespeople: Vec::new(),
            code: String::new(),
            editable_product: None,
        }
    }

    /// `new` followed by `initialize`.
    pub fn start(catalog: L, repository: R, notifier: N, config: SessionConfig) -> Self {
        let mut session = Self::new(catalog, repository, notifier, config);
        session.initialize();
        session
    }

    /// Load the salesperson list and arm the order with its blank row.
    ///
    /// Calling it again does not add a second blank row.
    pub fn initialize(&mut self) {
        self.salespeople = self.catalog.list_salespeople();
        self.ensure_blank_row();
        self.order.recalculate_total();
        debug!(salespeople = self.salespeople.len(), "editing session initialized");
    }

    /// Discard the current order and start over with a fresh one.
    pub fn clear(&mut self) {
        self.order = Order::new();
        self.clear_working_fields();
        self.ensure_blank_row();
        self.order.recalculate_total();
    }

    /// Replace the edited order with one produced elsewhere.
    pub fn load_order(&mut self, order: Order) {
        debug!(order_id = ?order.id(), "order loaded into session");
        self.order = order;
        self.clear_working_fields();
        self.ensure_blank_row();
        self.order.recalculate_total();
    }

    /// Load the newest order queued on `changes`, if any. Older queued
    /// versions are skipped.
    pub fn receive_changes(&mut self, changes: &Subscription<OrderChanged>) -> bool {
        match changes.latest() {
            Some(changed) => {
                self.load_order(changed.order);
                true
            }
            None => false,
        }
    }

    /// End the session and hand the order back without its blank row.
    pub fn finish(mut self) -> Order {
        self.order.remove_empty_line();
        self.order.recalculate_total();
        self.order
    }

    pub fn order(&self) -> &Order {
        &self.order
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Whether the order being edited was already saved before.
    pub fn is_editing(&self) -> bool {
        self.order.is_existing()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Header fields
    // ─────────────────────────────────────────────────────────────────────────

    pub fn select_customer(&mut self, customer: Customer) {
        self.order.set_customer(Some(customer));
    }

    pub fn customer_name(&self) -> Option<&str> {
        self.order.customer().map(Customer::name)
    }

    pub fn complete_customer(&self, prefix: &str) -> Vec<Customer> {
        self.catalog.find_customers_by_name_prefix(prefix)
    }

    pub fn payment_methods(&self) -> &'static [PaymentMethod] {
        &PaymentMethod::ALL
    }

    pub fn set_payment_method(&mut self, method: Option<PaymentMethod>) {
        self.order.set_payment_method(method);
    }

    pub fn salespeople(&self) -> &[User] {
        &self.salespeople
    }

    pub fn select_salesperson(&mut self, salesperson: Option<User>) {
        self.order.set_salesperson(salesperson);
    }

    /// Select the salesperson from a selection key (see `orderdesk_users::user_key`).
    ///
    /// An empty key clears the selection. Unknown users and users outside the
    /// salespeople group are rejected and leave the selection unchanged.
    pub fn select_salesperson_by_key(&mut self, key: &str) -> DomainResult<()> {
        let resolved = resolve_user(key, |id| self.catalog.find_user(id))?;
        match resolved {
            None if key.trim().is_empty() => {
                self.order.set_salesperson(None);
                Ok(())
            }
            None => Err(DomainError::not_found()),
            Some(user) if !user.is_salesperson() => Err(DomainError::validation(format!(
                "{} is not a salesperson",
                user.name()
            ))),
            Some(user) => {
                self.order.set_salesperson(Some(user));
                Ok(())
            }
        }
    }

    pub fn delivery_address_mut(&mut self) -> &mut DeliveryAddress {
        self.order.delivery_address_mut()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Line items
    // ─────────────────────────────────────────────────────────────────────────

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn set_code(&mut self, code: impl Into<String>) {
        self.code = code.into();
    }

    pub fn editable_product(&self) -> Option<&Product> {
        self.editable_product.as_ref()
    }

    pub fn set_editable_product(&mut self, product: Option<Product>) {
        self.editable_product = product;
    }

    pub fn complete_product(&self, prefix: &str) -> Vec<Product> {
        self.catalog.find_products_by_name_prefix(prefix)
    }

    /// Look `code` up and put the product on the editable row.
    ///
    /// A blank code does nothing. A malformed code sends one error
    /// notification. A code with no match does nothing.
    pub fn lookup_product_by_code(&mut self, code: &str) -> LineAssignment {
        self.code = code.to_string();
        if code.trim().is_empty() {
            return LineAssignment::Nothing;
        }

        if let Err(err) = validate_sku(code) {
            warn!(sku = code, error = %err, "malformed product code");
            self.notifier.error(&format!(
                "{}: {}",
                self.config.messages.invalid_code,
                err.reason()
            ));
            return LineAssignment::InvalidCode;
        }

        self.editable_product = self.catalog.find_product_by_code(code);
        if self.editable_product.is_none() {
            debug!(sku = code, "no product for code");
        }
        self.assign_editable_product()
    }

    /// Put the currently selected working product on the editable row.
    pub fn assign_editable_product(&mut self) -> LineAssignment {
        let product = self.editable_product.clone();
        self.assign_product_to_editable_line(product)
    }

    /// Put `product` on the editable row unless another line already has it.
    ///
    /// On success a new blank row is appended, the working code and product
    /// are cleared, and the total is recalculated.
    pub fn assign_product_to_editable_line(&mut self, product: Option<Product>) -> LineAssignment {
        let Some(product) = product else {
            return LineAssignment::Nothing;
        };

        if self.order.contains_product(product.id_typed()) {
            warn!(sku = product.sku(), "product already on the order");
            self.notifier.error(&self.config.messages.duplicate_product);
            return LineAssignment::DuplicateProduct;
        }

        let sku = product.sku().to_string();
        let row = self
            .order
            .fill_editable_line(product, self.config.blank_row_quantity());
        self.order
            .append_empty_line_with_quantity(self.config.blank_row_quantity());
        self.clear_working_fields();
        self.order.recalculate_total();

        debug!(row, sku = %sku, total = self.order.total(), "product assigned");
        LineAssignment::Assigned { row }
    }

    /// Apply a quantity typed into `row`.
    ///
    /// Below 1, row 0 and the blank row are clamped to 1 and any other row is
    /// removed. The total is recalculated in every case. A row that does not
    /// exist is an invariant violation.
    pub fn update_quantity(&mut self, row: usize, quantity: i64) -> DomainResult<QuantityChange> {
        let protected = row == 0 || self.order.editable_row() == Some(row);
        let result = self.order.set_quantity(row, quantity).and_then(|()| {
            if quantity >= 1 {
                Ok(QuantityChange::Updated)
            } else if protected {
                self.order.set_quantity(row, 1).map(|()| QuantityChange::Clamped)
            } else {
                self.order.remove_line(row).map(|_| QuantityChange::Removed)
            }
        });

        self.order.recalculate_total();
        if let Ok(change) = &result {
            debug!(row, quantity, ?change, total = self.order.total(), "quantity updated");
        }
        result
    }

    pub fn recalculate(&mut self) {
        self.order.recalculate_total();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Saving
    // ─────────────────────────────────────────────────────────────────────────

    /// Save-time violations of the current order, without saving.
    pub fn validate(&self) -> Violations {
        validate_for_save(&self.order)
    }

    pub fn save(&mut self) -> SaveOutcome {
        save_order(&mut self.order, &self.repository, &self.notifier, &self.config)
    }

    fn ensure_blank_row(&mut self) {
        if self.order.editable_row().is_none() {
            self.order
                .append_empty_line_with_quantity(self.config.blank_row_quantity());
        }
    }

    fn clear_working_fields(&mut self) {
        self.editable_product = None;
        self.code.clear();
    }
}
