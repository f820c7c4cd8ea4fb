//! Session record and the identity derived from it.
//!
//! The record shape is owned by the login flow; the shell only reads it. All
//! fields are optional at the serde level so that partial or stale payloads
//! deserialize instead of failing, and [`Identity::from_session`] decides
//! whether the record is good enough to render an authenticated user.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Profile block stored under the `user` key of the session record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Locally persisted representation of an authenticated user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    #[serde(default, deserialize_with = "lenient_user", skip_serializing_if = "Option::is_none")]
    pub user: Option<UserProfile>,
    /// Bearer token issued by the login flow, if the backend returned one.
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Keys written by the login flow that the shell does not interpret.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SessionRecord {
    /// Builds a record for a user with only a display name.
    pub fn for_user(name: impl Into<String>) -> Self {
        Self {
            user: Some(UserProfile {
                name: Some(name.into()),
                ..UserProfile::default()
            }),
            ..Self::default()
        }
    }

    /// Interprets an arbitrary JSON value as a session record.
    ///
    /// Anything that is not an object yields `None`. Known keys with the
    /// wrong type are dropped individually, so a stray field never hides the
    /// user's name.
    pub fn from_value(value: Value) -> Option<Self> {
        if !value.is_object() {
            return None;
        }
        serde_json::from_value(value).ok()
    }
}

/// What the identity slot of the navigation bar shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identity {
    Authenticated {
        name: String,
        email: Option<String>,
        contact: Option<String>,
        address: Option<String>,
    },
    Anonymous,
}

impl Identity {
    /// Derives the identity from an optional session snapshot.
    ///
    /// A record without a `user` object, or whose user has no non-blank name,
    /// renders as [`Identity::Anonymous`]. Blank optional fields are dropped.
    pub fn from_session(session: Option<&SessionRecord>) -> Self {
        let Some(user) = session.and_then(|record| record.user.as_ref()) else {
            return Identity::Anonymous;
        };
        let Some(name) = non_blank(user.name.as_deref()) else {
            return Identity::Anonymous;
        };
        Identity::Authenticated {
            name,
            email: non_blank(user.email.as_deref()),
            contact: non_blank(user.contact.as_deref()),
            address: non_blank(user.address.as_deref()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Identity::Authenticated { .. })
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Identity::Authenticated { name, .. } => Some(name),
            Identity::Anonymous => None,
        }
    }

    /// First word of the display name, used where horizontal space is tight.
    pub fn short_name(&self) -> Option<&str> {
        self.name().and_then(|name| name.split_whitespace().next())
    }

    /// Optional profile rows in display order, skipping the absent ones.
    pub fn detail_rows(&self) -> Vec<(DetailKind, &str)> {
        let Identity::Authenticated {
            email, contact, address, ..
        } = self
        else {
            return Vec::new();
        };
        [
            (DetailKind::Email, email),
            (DetailKind::Contact, contact),
            (DetailKind::Address, address),
        ]
        .into_iter()
        .filter_map(|(kind, value)| value.as_deref().map(|value| (kind, value)))
        .collect()
    }
}

/// Kind of an optional profile row shown inside the user menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailKind {
    Email,
    Contact,
    Address,
}

impl DetailKind {
    pub fn icon(self) -> &'static str {
        match self {
            DetailKind::Email => "✉",
            DetailKind::Contact => "☎",
            DetailKind::Address => "⌂",
        }
    }
}

/// Strings pass through, numbers (phone numbers, numeric ids) are rendered,
/// anything else reads as absent.
fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    })
}

fn lenient_user<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<UserProfile>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    if !value.is_object() {
        return Ok(None);
    }
    Ok(serde_json::from_value(value).ok())
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value.map(str::trim).filter(|value| !value.is_empty()).map(str::to_string)
}
