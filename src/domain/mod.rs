//! Domain layer - contract calls and client session state

pub mod contract;
pub mod session;
