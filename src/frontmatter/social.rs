use super::fields;
use crate::errors::ValidationResult;
use serde::de::{self, Unexpected};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Social profile links. Unknown keys are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Social {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(
        default,
        deserialize_with = "mastodon_handle",
        skip_serializing_if = "Option::is_none"
    )]
    pub mastodon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bluesky: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
}

/// Rejects a value that looks like a short handle but is not `@user@domain`.
fn mastodon_handle<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let handle = Option::<String>::deserialize(deserializer)?;
    let malformed = handle
        .as_deref()
        .is_some_and(|h| migrate_mastodon_handle(h).is_none());
    if malformed {
        let value = handle.unwrap_or_default();
        return Err(de::Error::invalid_value(
            Unexpected::Str(&value),
            &"an @user@domain handle or a profile URL",
        ));
    }
    Ok(handle)
}

impl Social {
    pub fn validate(raw: &Map<String, Value>) -> ValidationResult<Self> {
        fields::decode(raw)
    }

    /// Rewrites a short `@user@domain` mastodon handle into a profile URL.
    pub fn derive(mut self) -> Self {
        let migrated = self
            .mastodon
            .as_deref()
            .filter(|handle| handle.starts_with('@'))
            .and_then(migrate_mastodon_handle);
        if let Some(url) = migrated {
            tracing::debug!(mastodon = %url, "converted mastodon handle");
            self.mastodon = Some(url);
        }
        self
    }

    pub fn from_mapping(raw: &Map<String, Value>) -> ValidationResult<Self> {
        Self::validate(raw).map(Self::derive)
    }
}

/// `@user@domain` becomes `https://domain/@user`; anything not starting
/// with `@` is assumed to already be a URL and returned unchanged.
///
/// Returns `None` for a handle that starts with `@` but is not exactly
/// `@user@domain`.
pub fn migrate_mastodon_handle(handle: &str) -> Option<String> {
    let Some(rest) = handle.strip_prefix('@') else {
        return Some(handle.to_string());
    };
    let mut parts = rest.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(user), Some(domain), None) if !user.is_empty() && !domain.is_empty() => {
            Some(format!("https://{domain}/@{user}"))
        }
        _ => None,
    }
}
