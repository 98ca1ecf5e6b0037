//! Log-safety helpers for sensitive values.
//!
//! Api keys prove identity, so they must never reach the logs in full.
//! Wrap them in [`Redacted`] at every logging call site.

use std::fmt;

/// Characters kept visible at the front of a masked value, enough to
/// correlate log lines without disclosing the secret.
const VISIBLE_PREFIX: usize = 4;

/// Display/Debug wrapper that masks an api key when formatted.
pub struct Redacted<'a>(pub &'a str);

impl Redacted<'_> {
    fn masked(&self) -> String {
        let chars: Vec<char> = self.0.chars().collect();
        if chars.len() <= VISIBLE_PREFIX {
            "*".repeat(chars.len())
        } else {
            let prefix: String = chars[..VISIBLE_PREFIX].iter().collect();
            format!("{prefix}***")
        }
    }
}

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.masked())
    }
}

impl fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.masked())
    }
}
