//! Strips a credential helper from `credsStore` and `credHelpers`.
//!
//! Responsibilities:
//! - Remove `credsStore` when it names the helper.
//! - Remove every `credHelpers` entry that names the helper.
//! - Drop `credHelpers` once it has no entries left.
//!
//! Does NOT handle:
//! - Credentials stored in `auths`. Those are left as they are.
//!
//! Invariants:
//! - Helper names are compared case-insensitively.
//! - Non-string values are never treated as a match.
//! - Remaining keys keep their relative order.

use serde_json::Value;

use super::{LoadPolicy, Repair, WritePolicy};
use crate::constants::{CRED_HELPERS_KEY, CREDS_STORE_KEY, DESKTOP_CREDENTIAL_HELPER};
use crate::persistence::ConfigDocument;

/// Removes references to a credential helper, `desktop` by default.
///
/// Leaves the file alone when it is missing or corrupt, and only rewrites it
/// when something was removed.
#[derive(Debug, Clone)]
pub struct CredentialSanitizer {
    helper: String,
}

impl CredentialSanitizer {
    pub fn new(helper: impl Into<String>) -> Self {
        Self {
            helper: helper.into(),
        }
    }

    pub fn helper(&self) -> &str {
        &self.helper
    }
}

impl Default for CredentialSanitizer {
    fn default() -> Self {
        Self::new(DESKTOP_CREDENTIAL_HELPER)
    }
}

impl Repair for CredentialSanitizer {
    fn name(&self) -> &'static str {
        "credentials"
    }

    fn load_policy(&self) -> LoadPolicy {
        LoadPolicy::SkipOnError
    }

    fn write_policy(&self) -> WritePolicy {
        WritePolicy::OnChange
    }

    fn apply(&self, document: &mut ConfigDocument) -> bool {
        strip_credential_helper(document, &self.helper)
    }
}

/// Removes every reference to `helper` from the credential fields.
///
/// An empty `credHelpers` mapping is removed even if it was already empty
/// before this call. Returns true if the document changed.
pub fn strip_credential_helper(document: &mut ConfigDocument, helper: &str) -> bool {
    let helper = helper.to_lowercase();
    let names_helper = |value: &Value| value.as_str().is_some_and(|s| s.to_lowercase() == helper);
    let mut changed = false;

    if document.get(CREDS_STORE_KEY).is_some_and(names_helper) {
        document.remove(CREDS_STORE_KEY);
        tracing::info!(field = CREDS_STORE_KEY, "Removed credential helper");
        changed = true;
    }

    let mut drop_helpers = false;
    if let Some(Value::Object(helpers)) = document.get_mut(CRED_HELPERS_KEY) {
        let before = helpers.len();
        helpers.retain(|_, value| !names_helper(&*value));

        let removed = before - helpers.len();
        if removed > 0 {
            tracing::info!(field = CRED_HELPERS_KEY, removed, "Removed credential helper entries");
            changed = true;
        }
        drop_helpers = helpers.is_empty();
    }

    if drop_helpers {
        document.remove(CRED_HELPERS_KEY);
        changed = true;
    }

    changed
}
