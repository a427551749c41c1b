//! File extension list parsing and validation
//!
//! Users supply extensions as a single comma-separated string
//! (`".rs, toml,.md"`). Parsing trims each piece and prepends the leading
//! dot; validation then splits the tokens into those safe to hand to the
//! association tool and those that must be reported back as skipped.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Extensions registered when the preferences leave the list unset
pub const DEFAULT_FILE_EXTENSIONS: &str =
    ".js,.ts,.tsx,.jsx,.svelte,.vue,.py,.rb,.go,.php,.rs,.swift,.java,.cpp,.c,.h,.css,.scss,.json,.xml,.yaml,.yml,.md,.txt";

/// A single leading dot followed by ASCII alphanumerics, nothing else
static EXTENSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\.[A-Za-z0-9]+$").expect("extension regex is valid"));

/// A validated extension such as `.rs`
///
/// Only constructed through [`validate`] or the checked `TryFrom<String>`
/// (which deserialization goes through), so every value matches
/// `^\.[A-Za-z0-9]+$`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct ExtensionToken(String);

impl TryFrom<String> for ExtensionToken {
    type Error = Error;

    fn try_from(token: String) -> Result<Self> {
        if is_valid(&token) {
            Ok(Self(token))
        } else {
            Err(Error::invalid_extension(token))
        }
    }
}

impl From<ExtensionToken> for String {
    fn from(token: ExtensionToken) -> Self {
        token.0
    }
}

impl ExtensionToken {
    /// The extension including its leading dot
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExtensionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ExtensionToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Result of validating a parsed extension list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidatedExtensions {
    /// Tokens safe to pass to the association tool, in input order
    pub valid: Vec<ExtensionToken>,
    /// Tokens rejected by validation, in input order
    pub invalid: Vec<String>,
}

/// Split a comma-separated list into normalized tokens
///
/// Pieces are trimmed at their boundaries only (interior whitespace is
/// kept, so `"invalid ext"` becomes `".invalid ext"` and later fails
/// validation). Empty pieces are dropped. Casing is preserved and
/// duplicates are kept.
pub fn parse(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(normalize)
        .collect()
}

/// Partition tokens into valid and invalid extensions
pub fn validate<S: AsRef<str>>(tokens: &[S]) -> ValidatedExtensions {
    let mut result = ValidatedExtensions::default();

    for token in tokens {
        let token = token.as_ref();
        if is_valid(token) {
            result.valid.push(ExtensionToken(token.to_string()));
        } else {
            result.invalid.push(token.to_string());
        }
    }

    result
}

/// Parse and validate in one step
pub fn parse_and_validate(raw: &str) -> ValidatedExtensions {
    validate(&parse(raw))
}

/// Check a single token against the extension pattern
pub fn is_valid(token: &str) -> bool {
    EXTENSION_RE.is_match(token)
}

fn normalize(piece: &str) -> String {
    if piece.starts_with('.') {
        piece.to_string()
    } else {
        format!(".{}", piece)
    }
}
