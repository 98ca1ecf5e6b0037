//! Infrastructure assembly shared by the binary and the tests.

pub mod state;
