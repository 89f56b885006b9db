//! Contact domain model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// A contact record (person) in the CRM
///
/// Contacts are owned by whichever [`ContactStore`](crate::store::ContactStore)
/// backend holds them; the resolution engine only reads contacts and
/// writes back merged records through the store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub organization: Option<String>,
    pub job_title: Option<String>,

    // Organization
    pub tags: BTreeSet<String>,

    // Catch-all for non-standard fields (keys unique)
    pub custom_fields: HashMap<String, String>,

    // Metadata
    pub updated_at: DateTime<Utc>,
}

impl Contact {
    /// Create a new contact with required fields
    pub fn new(first_name: String, last_name: String, email: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            first_name,
            last_name,
            email,
            phone: None,
            organization: None,
            job_title: None,
            tags: BTreeSet::new(),
            custom_fields: HashMap::new(),
            updated_at: Utc::now(),
        }
    }

    /// Full display name ("First Last", trimmed when either part is empty)
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}
