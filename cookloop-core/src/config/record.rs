//! Stored program record
//!
//! Only the numeric fields of each slot are persisted, serialized with
//! postcard in slot order. Labels are fixed per slot and reattached on
//! load.

use serde::{Deserialize, Serialize};

use super::types::{ProgramTable, Slot, SLOT_COUNT};

/// Upper bound of an encoded table (4 slots x 3 varint u16)
pub const RECORD_CAPACITY: usize = SLOT_COUNT * 3 * 3;

/// Numeric part of one slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StoredProgram {
    pub cook_s: u16,
    pub cool_s: u16,
    pub repetitions: u16,
}

/// Errors from the record codec
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RecordError {
    /// Output buffer cannot hold the record
    BufferTooSmall,
    /// Serialization failed
    Encode,
    /// Stored bytes are not a valid record
    Decode,
}

impl From<postcard::Error> for RecordError {
    fn from(e: postcard::Error) -> Self {
        match e {
            postcard::Error::SerializeBufferFull => RecordError::BufferTooSmall,
            postcard::Error::DeserializeUnexpectedEnd
            | postcard::Error::DeserializeBadVarint
            | postcard::Error::DeserializeBadBool
            | postcard::Error::DeserializeBadEncoding => RecordError::Decode,
            _ => RecordError::Encode,
        }
    }
}

/// Encode a program table into `buf`, returning the used prefix
pub fn encode_programs<'a>(
    programs: &ProgramTable,
    buf: &'a mut [u8],
) -> Result<&'a mut [u8], RecordError> {
    let mut record = [StoredProgram::default(); SLOT_COUNT];
    for (stored, (_, program)) in record.iter_mut().zip(programs.iter()) {
        *stored = StoredProgram {
            cook_s: program.cook_s,
            cool_s: program.cool_s,
            repetitions: program.repetitions,
        };
    }

    Ok(postcard::to_slice(&record, buf)?)
}

/// Decode a program table from stored bytes
pub fn decode_programs(bytes: &[u8]) -> Result<ProgramTable, RecordError> {
    let record: [StoredProgram; SLOT_COUNT] =
        postcard::from_bytes(bytes).map_err(|_| RecordError::Decode)?;

    let mut table = ProgramTable::factory();
    for (slot, stored) in Slot::ALL.iter().zip(record.iter()) {
        table.set_timings(*slot, stored.cook_s, stored.cool_s, stored.repetitions);
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_slot_survives_record() {
        let mut table = ProgramTable::factory();
        table.set_custom_cook(45);
        table.set_custom_cool(12);
        table.set_custom_repetitions(4);

        let mut buf = [0u8; RECORD_CAPACITY];
        let used = encode_programs(&table, &mut buf).unwrap().len();
        let decoded = decode_programs(&buf[..used]).unwrap();

        assert_eq!(decoded, table);
        assert_eq!(decoded.get(Slot::D).label, "Personalizado");
    }

    #[test]
    fn test_capacity_holds_largest_values() {
        let mut table = ProgramTable::factory();
        for slot in Slot::ALL {
            table.set_timings(slot, u16::MAX, u16::MAX, u16::MAX);
        }

        let mut buf = [0u8; RECORD_CAPACITY];
        assert!(encode_programs(&table, &mut buf).is_ok());
    }

    #[test]
    fn test_buffer_too_small() {
        let mut buf = [0u8; 4];
        let result = encode_programs(&ProgramTable::factory(), &mut buf);
        assert_eq!(result.unwrap_err(), RecordError::BufferTooSmall);
    }

    #[test]
    fn test_truncated_record_rejected() {
        let mut buf = [0u8; RECORD_CAPACITY];
        let used = encode_programs(&ProgramTable::factory(), &mut buf)
            .unwrap()
            .len();

        assert_eq!(
            decode_programs(&buf[..used - 1]).unwrap_err(),
            RecordError::Decode
        );
        assert_eq!(decode_programs(&[]).unwrap_err(), RecordError::Decode);
    }

    #[test]
    fn test_zero_repetitions_clamped_on_load() {
        // Hand-built record: every field zero
        let bytes = [0u8; SLOT_COUNT * 3];
        let table = decode_programs(&bytes).unwrap();
        assert_eq!(table.get(Slot::A).repetitions, 1);
        assert_eq!(table.get(Slot::A).cook_s, 0);
    }
}
