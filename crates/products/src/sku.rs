//! Product code (SKU) format.
//!
//! A code is two ASCII letters followed by 4 to 18 digits, e.g. `AB1234`.
//! Codes compare case-insensitively; the canonical form is upper case.

use orderdesk_core::{DomainError, DomainResult};

const PREFIX_LEN: usize = 2;
const MIN_DIGITS: usize = 4;
const MAX_DIGITS: usize = 18;

/// Canonical form of a code: trimmed and upper-cased.
pub fn normalize_sku(raw: &str) -> String {
    raw.trim().to_ascii_uppercase()
}

/// Check that `raw` is a well-formed product code.
pub fn validate_sku(raw: &str) -> DomainResult<()> {
    let code = normalize_sku(raw);
    if code.is_empty() {
        return Err(DomainError::validation("product code is required"));
    }

    let well_formed = code.is_ascii() && code.len() > PREFIX_LEN && {
        let (prefix, digits) = code.split_at(PREFIX_LEN);
        prefix.chars().all(|c| c.is_ascii_alphabetic())
            && (MIN_DIGITS..=MAX_DIGITS).contains(&digits.len())
            && digits.chars().all(|c| c.is_ascii_digit())
    };

    if well_formed {
        Ok(())
    } else {
        Err(DomainError::validation(format!(
            "product code '{code}' must be two letters followed by {MIN_DIGITS} to {MAX_DIGITS} digits"
        )))
    }
}
