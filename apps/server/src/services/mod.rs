//! Service layer: lock-holding orchestration between handlers and domain.

pub mod game_flow;
pub mod users;
