//! Test helpers for generating unique test data
//!
//! Usernames must start with a lowercase letter and stay alphanumeric, so
//! these helpers append a hex UUID rather than a separator-delimited suffix.

use uuid::Uuid;

/// Generate a unique username with the given prefix.
///
/// The prefix must start with a lowercase letter; the suffix is a hex UUID,
/// so the result satisfies the server's username rules.
///
/// # Examples
/// ```
/// use server_test_support::unique_helpers::unique_username;
///
/// let a = unique_username("user");
/// let b = unique_username("user");
/// assert_ne!(a, b);
/// assert!(a.starts_with("user"));
/// ```
pub fn unique_username(prefix: &str) -> String {
    format!("{}{}", prefix, Uuid::new_v4().simple())
}
