//! In-memory program store
//!
//! Emulates a small EEPROM: the program table is kept as an encoded
//! byte image and decoded on every load.

use super::record::{decode_programs, encode_programs, RECORD_CAPACITY};
use super::types::ProgramTable;
use crate::traits::ProgramStore;

/// Program store backed by a RAM byte image
#[derive(Debug, Clone)]
pub struct MemoryProgramStore {
    image: [u8; RECORD_CAPACITY],
    len: usize,
}

impl Default for MemoryProgramStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryProgramStore {
    /// Create an empty (erased) store
    pub const fn new() -> Self {
        Self {
            image: [0xFF; RECORD_CAPACITY],
            len: 0,
        }
    }

    /// Create a store holding the factory programs
    pub fn with_factory_programs() -> Self {
        let mut store = Self::new();
        store.save_programs(&ProgramTable::factory());
        store
    }

    /// Raw stored bytes
    pub fn image(&self) -> &[u8] {
        &self.image[..self.len]
    }

    /// Check if anything has been written
    pub fn is_erased(&self) -> bool {
        self.len == 0
    }
}

impl ProgramStore for MemoryProgramStore {
    fn load_programs(&mut self) -> ProgramTable {
        match decode_programs(self.image()) {
            Ok(table) => table,
            Err(_e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("program record unreadable ({}), using factory table", _e);
                ProgramTable::factory()
            }
        }
    }

    fn save_programs(&mut self, programs: &ProgramTable) {
        match encode_programs(programs, &mut self.image) {
            Ok(used) => {
                self.len = used.len();
                #[cfg(feature = "defmt")]
                defmt::debug!("program record written ({} bytes)", self.len);
            }
            Err(_e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("program record not written: {}", _e);
            }
        }
    }
}
