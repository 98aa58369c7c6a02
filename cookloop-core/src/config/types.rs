//! Program slot definitions
//!
//! The appliance carries four named programs. Slots A-C are factory
//! programs; slot D is written by the configuration wizard.

/// Number of program slots
pub const SLOT_COUNT: usize = 4;

/// Label used for ad-hoc quick-cook sessions
pub const QUICK_COOK_LABEL: &str = "Coccion Rapida";

/// One of the four program slots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Slot {
    A,
    B,
    C,
    /// User-configurable slot
    D,
}

impl Slot {
    /// All slots in keypad order
    pub const ALL: [Slot; SLOT_COUNT] = [Slot::A, Slot::B, Slot::C, Slot::D];

    /// The slot written by the configuration wizard
    pub const CUSTOM: Slot = Slot::D;

    /// Create a slot from a 0-based index
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// 0-based slot index
    pub fn index(self) -> usize {
        self as usize
    }

    /// Keypad letter for this slot
    pub fn letter(self) -> char {
        match self {
            Slot::A => 'A',
            Slot::B => 'B',
            Slot::C => 'C',
            Slot::D => 'D',
        }
    }

    /// Fixed display label for this slot
    pub fn label(self) -> &'static str {
        match self {
            Slot::A => "Calentar",
            Slot::B => "Descongelar",
            Slot::C => "Recalentar",
            Slot::D => "Personalizado",
        }
    }
}

/// A cooking program
///
/// A program runs `repetitions` cycles of `cook_s` seconds heating
/// followed by `cool_s` seconds standing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CookingProgram {
    /// Display label
    pub label: &'static str,
    /// Heating time in seconds
    pub cook_s: u16,
    /// Standing (cooling) time in seconds
    pub cool_s: u16,
    /// Number of cook/cool cycles, at least 1
    pub repetitions: u16,
}

impl CookingProgram {
    /// Create a program, clamping repetitions to at least 1
    pub const fn new(label: &'static str, cook_s: u16, cool_s: u16, repetitions: u16) -> Self {
        Self {
            label,
            cook_s,
            cool_s,
            repetitions: if repetitions == 0 { 1 } else { repetitions },
        }
    }

    /// Ad-hoc program started from a digit key
    pub const fn quick(cook_s: u16) -> Self {
        Self::new(QUICK_COOK_LABEL, cook_s, 0, 1)
    }
}

/// The four program slots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ProgramTable {
    programs: [CookingProgram; SLOT_COUNT],
}

impl Default for ProgramTable {
    fn default() -> Self {
        Self::factory()
    }
}

impl ProgramTable {
    /// Factory programs
    pub const fn factory() -> Self {
        Self {
            programs: [
                CookingProgram::new("Calentar", 30, 0, 1),
                CookingProgram::new("Descongelar", 20, 10, 5),
                CookingProgram::new("Recalentar", 15, 3, 3),
                CookingProgram::new("Personalizado", 0, 0, 1),
            ],
        }
    }

    /// Get the program in a slot
    pub fn get(&self, slot: Slot) -> &CookingProgram {
        &self.programs[slot.index()]
    }

    /// Iterate slots in keypad order
    pub fn iter(&self) -> impl Iterator<Item = (Slot, &CookingProgram)> {
        Slot::ALL.iter().copied().zip(self.programs.iter())
    }

    /// Replace the timings of a slot, keeping its label
    pub fn set_timings(&mut self, slot: Slot, cook_s: u16, cool_s: u16, repetitions: u16) {
        self.programs[slot.index()] = CookingProgram::new(slot.label(), cook_s, cool_s, repetitions);
    }

    /// Set the heating time of the custom slot
    pub fn set_custom_cook(&mut self, cook_s: u16) {
        self.programs[Slot::CUSTOM.index()].cook_s = cook_s;
    }

    /// Set the standing time of the custom slot
    pub fn set_custom_cool(&mut self, cool_s: u16) {
        self.programs[Slot::CUSTOM.index()].cool_s = cool_s;
    }

    /// Set the repetitions of the custom slot, clamped to at least 1
    pub fn set_custom_repetitions(&mut self, repetitions: u16) {
        self.programs[Slot::CUSTOM.index()].repetitions = repetitions.max(1);
    }
}
