//! Command implementations.

pub mod analyze;
pub mod recommend;

pub use self::analyze::execute_analyze;
pub use self::recommend::execute_recommend;
