pub mod cell;
pub mod leave;
pub(crate) mod macros;
pub mod state;

// Re-export all models for easy importing
pub use cell::*;
pub use leave::*;
pub use state::*;
