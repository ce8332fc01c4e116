//! Editing session configuration.

use crate::order::DEFAULT_QUANTITY;

pub const ENV_MSG_SAVED: &str = "ORDERDESK_MSG_SAVED";
pub const ENV_MSG_DUPLICATE_PRODUCT: &str = "ORDERDESK_MSG_DUPLICATE_PRODUCT";
pub const ENV_MSG_INVALID_CODE: &str = "ORDERDESK_MSG_INVALID_CODE";

/// User-facing message texts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages {
    pub saved: String,
    pub duplicate_product: String,
    /// Prefix for a rejected product code; the format problem is appended.
    pub invalid_code: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            saved: "Order saved successfully!".to_string(),
            duplicate_product: "A line item with this product already exists.".to_string(),
            invalid_code: "Invalid product code".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub messages: Messages,
    /// Quantity of each blank row the session appends. Read through
    /// [`SessionConfig::blank_row_quantity`], which never goes below 1.
    pub blank_row_quantity: i64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            messages: Messages::default(),
            blank_row_quantity: DEFAULT_QUANTITY,
        }
    }
}

impl SessionConfig {
    /// Defaults, with message texts overridden from the process environment.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Defaults, with message texts overridden by whatever `var` returns.
    pub fn from_vars<F>(var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let non_blank = |key: &str| var(key).filter(|v| !v.trim().is_empty());

        if let Some(v) = non_blank(ENV_MSG_SAVED) {
            config.messages.saved = v;
        }
        if let Some(v) = non_blank(ENV_MSG_DUPLICATE_PRODUCT) {
            config.messages.duplicate_product = v;
        }
        if let Some(v) = non_blank(ENV_MSG_INVALID_CODE) {
            config.messages.invalid_code = v;
        }
        config
    }

    pub fn with_messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }

    pub fn with_saved_message(mut self, message: impl Into<String>) -> Self {
        self.messages.saved = message.into();
        self
    }

    pub fn with_duplicate_product_message(mut self, message: impl Into<String>) -> Self {
        self.messages.duplicate_product = message.into();
        self
    }

    pub fn with_blank_row_quantity(mut self, quantity: i64) -> Self {
        self.blank_row_quantity = quantity.max(1);
        self
    }

    /// Quantity for new blank rows, with anything below 1 read as 1.
    pub fn blank_row_quantity(&self) -> i64 {
        self.blank_row_quantity.max(DEFAULT_QUANTITY)
    }
}
