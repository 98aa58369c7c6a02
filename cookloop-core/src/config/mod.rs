//! Configuration types
//!
//! Program slots, fixed timing values and the stored program record.

pub mod record;
pub mod store;
pub mod timing;
pub mod types;

pub use record::{decode_programs, encode_programs, RecordError, StoredProgram, RECORD_CAPACITY};
pub use store::MemoryProgramStore;
pub use timing::TimingConfig;
pub use types::*;
