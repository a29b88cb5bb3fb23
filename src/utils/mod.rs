// Shared utilities

pub mod constants;
pub mod storage;

pub use constants::*;
pub use storage::*;
