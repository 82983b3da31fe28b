use std::collections::BTreeMap;

use serde::Serialize;

/// Key the relay reads to label the notification email.
pub const SUBJECT_KEY: &str = "_subject";

/// Body posted to the relay: every form value plus the routing hint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LeadPayload {
    #[serde(flatten)]
    fields: BTreeMap<String, String>,
    #[serde(rename = "_subject")]
    subject: String,
}

impl LeadPayload {
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            fields: BTreeMap::new(),
            subject: subject.into(),
        }
    }

    /// The routing hint always wins over a field named `_subject`.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        if name == SUBJECT_KEY {
            return;
        }

        self.fields.insert(name, value.into());
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.fields
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn email(&self) -> Option<&str> {
        self.get("email")
    }
}
