pub mod initialize;
pub mod deposit;
pub mod claim;
pub mod admin;
pub mod treasury;
pub mod views;

// Glob re-exports for Anchor compatibility
// lib.rs uses fully qualified paths (e.g., instructions::deposit::handler)
#[allow(ambiguous_glob_reexports)]
pub use initialize::*;
pub use deposit::*;
pub use claim::*;
pub use admin::*;
pub use treasury::*;
pub use views::*;
