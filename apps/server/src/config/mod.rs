//! Startup configuration: the roster file and the admin credentials.

pub mod admin_key;
pub mod roster_file;
