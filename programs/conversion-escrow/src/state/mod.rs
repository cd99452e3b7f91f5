pub mod engine_state;
pub mod depositor_record;

pub use engine_state::*;
pub use depositor_record::*;
