use serde::{Deserialize, Serialize};

use orderdesk_core::{DomainResult, Entity, Violations};

orderdesk_core::aggregate_id_newtype!(
    /// Customer identifier.
    CustomerId
);

/// Customer kind: individual person or company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerKind {
    Individual,
    Company,
}

const MAX_NAME_CHARS: usize = 100;
const MAX_EMAIL_CHARS: usize = 255;
const MAX_DOCUMENT_CHARS: usize = 14;

/// Customer that can be selected on an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    id: CustomerId,
    name: String,
    email: Option<String>,
    /// Tax registration number (individual or company).
    document: String,
    kind: CustomerKind,
}

impl Customer {
    pub fn new(
        id: CustomerId,
        name: impl Into<String>,
        email: Option<String>,
        document: impl Into<String>,
        kind: CustomerKind,
    ) -> DomainResult<Self> {
        let name = name.into().trim().to_string();
        let document = document.into().trim().to_string();
        let email = email
            .map(|e| e.trim().to_lowercase())
            .filter(|e| !e.is_empty());

        let mut v = Violations::new();
        if v.require_text("name", &name) {
            v.max_chars("name", &name, MAX_NAME_CHARS);
        }
        if let Some(email) = &email {
            v.max_chars("email", email, MAX_EMAIL_CHARS);
            v.email("email", email);
        }
        if v.require_text("document", &document) {
            v.max_chars("document", &document, MAX_DOCUMENT_CHARS);
        }
        v.into_result()?;

        Ok(Self {
            id,
            name,
            email,
            document,
            kind,
        })
    }

    pub fn id_typed(&self) -> CustomerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn document(&self) -> &str {
        &self.document
    }

    pub fn kind(&self) -> CustomerKind {
        self.kind
    }
}

impl Entity for Customer {
    type Id = CustomerId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
