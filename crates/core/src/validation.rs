//! Structured validation results.
//!
//! Checks run at explicit checkpoints (before saving an order, before accepting
//! a typed product code) and collect every failure instead of stopping at the
//! first one.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// A single failed check on a named field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub field: String,
    pub message: String,
}

impl core::fmt::Display for Violation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Ordered list of violations collected by one validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violations(Vec<Violation>);

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.push(Violation {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Record a violation when `value` is absent.
    pub fn require<T>(&mut self, field: &str, value: Option<&T>) -> bool {
        if value.is_none() {
            self.add(field, "is required");
            return false;
        }
        true
    }

    /// Record a violation when `value` is empty or whitespace only.
    pub fn require_text(&mut self, field: &str, value: &str) -> bool {
        if value.trim().is_empty() {
            self.add(field, "is required");
            return false;
        }
        true
    }

    /// Record a violation when `value` is longer than `max` characters.
    pub fn max_chars(&mut self, field: &str, value: &str, max: usize) {
        if value.chars().count() > max {
            self.add(field, format!("must be at most {max} characters"));
        }
    }

    /// Record a violation when `value` is not shaped like an email address.
    pub fn email(&mut self, field: &str, value: &str) {
        if !is_valid_email(value) {
            self.add(field, "is not a valid email address");
        }
    }

    pub fn merge(&mut self, other: Violations) {
        self.0.extend(other.0);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.0.iter()
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|v| v.field == field)
    }

    /// `Ok(())` when nothing failed, otherwise a `Validation` error listing
    /// every violation.
    pub fn into_result(self) -> DomainResult<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(DomainError::validation(self.to_string()))
        }
    }
}

impl core::fmt::Display for Violations {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            core::fmt::Display::fmt(v, f)?;
        }
        Ok(())
    }
}

impl IntoIterator for Violations {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Basic email shape check: `local@domain.tld`, no whitespace.
pub fn is_valid_email(value: &str) -> bool {
    let value = value.trim();
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|l| !l.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_violations_are_ok() {
        assert_eq!(Violations::new().into_result(), Ok(()));
    }

    #[test]
    fn collects_every_failure_in_order() {
        let mut v = Violations::new();
        v.require_text("name", "   ");
        v.max_chars("code", "ABCDEF", 3);
        v.require::<u32>("salesperson", None);

        assert_eq!(v.len(), 3);
        assert!(v.has_field("code"));
        assert_eq!(
            v.to_string(),
            "name: is required; code: must be at most 3 characters; salesperson: is required"
        );
        match v.into_result() {
            Err(DomainError::Validation(msg)) => assert!(msg.starts_with("name: is required")),
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn max_chars_counts_characters_not_bytes() {
        let mut v = Violations::new();
        v.max_chars("city", "São Paulo", 9);
        assert!(v.is_empty());
    }

    #[test]
    fn email_shape() {
        assert!(is_valid_email("ana@example.com"));
        assert!(is_valid_email(" ana.silva@mail.example.org "));
        assert!(!is_valid_email("ana"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("ana@example"));
        assert!(!is_valid_email("ana@@example.com"));
        assert!(!is_valid_email("ana@example..com"));
        assert!(!is_valid_email("ana maria@example.com"));
    }
}
