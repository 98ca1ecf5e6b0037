//! Web boundary helpers that sit between middleware and handlers.

pub mod trace_ctx;
