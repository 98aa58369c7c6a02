//! Configuration wizard state machine

use embedded_hal::delay::DelayNs;
use heapless::String;

use crate::config::ProgramTable;
use crate::screens::{self, write_padded};
use crate::traits::{CharDisplay, Key};

/// Maximum digits accepted per entry
pub const MAX_INPUT_DIGITS: usize = 4;

/// Column where the numeric echo starts
const ENTRY_COL: u8 = 2;

/// Wizard steps, strictly advancing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigStep {
    CookTime,
    CoolTime,
    Repetitions,
    /// All values committed; `#` leaves the wizard
    Done,
}

impl ConfigStep {
    /// The step after this one
    pub fn next(self) -> Self {
        match self {
            ConfigStep::CookTime => ConfigStep::CoolTime,
            ConfigStep::CoolTime => ConfigStep::Repetitions,
            ConfigStep::Repetitions | ConfigStep::Done => ConfigStep::Done,
        }
    }

    /// First prompt line for this step
    pub fn prompt(self) -> &'static str {
        match self {
            ConfigStep::CookTime => "Tiemp de Cocc:",
            ConfigStep::CoolTime => "Tiempo standby:",
            ConfigStep::Repetitions => "Num repeticion:",
            ConfigStep::Done => "Programa listo",
        }
    }
}

/// Values committed so far
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ConfigDraft {
    pub cook_s: u16,
    pub cool_s: u16,
    pub repetitions: u16,
}

impl Default for ConfigDraft {
    fn default() -> Self {
        Self {
            cook_s: 0,
            cool_s: 0,
            repetitions: 1,
        }
    }
}

/// Result of feeding one tick to the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EditorOutcome {
    /// Still collecting input
    Pending,
    /// Last value committed; slot D holds the full program
    ProgramReady,
    /// `#` on the final screen; the wizard must be torn down
    Finalized,
}

/// Numeric-entry wizard for the custom slot
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ConfigurationEditor {
    step: ConfigStep,
    input: String<MAX_INPUT_DIGITS>,
    draft: ConfigDraft,
    /// Prompt for `step` not drawn yet
    prompt_pending: bool,
}

impl Default for ConfigurationEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigurationEditor {
    /// Start a fresh wizard at the cook time step
    pub fn new() -> Self {
        Self {
            step: ConfigStep::CookTime,
            input: String::new(),
            draft: ConfigDraft::default(),
            prompt_pending: true,
        }
    }

    /// Current step
    pub fn step(&self) -> ConfigStep {
        self.step
    }

    /// Digits typed for the current step
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Values committed so far
    pub fn draft(&self) -> &ConfigDraft {
        &self.draft
    }

    /// Redraw the current step's prompt and pending digits on the next tick
    pub fn request_redraw(&mut self) {
        self.prompt_pending = true;
    }

    /// Run one tick of the wizard
    ///
    /// Validation failures hold their message for `hold_ms` on `delay`
    /// before the step is prompted again.
    pub fn handle<D: CharDisplay, W: DelayNs>(
        &mut self,
        key: Option<Key>,
        display: &mut D,
        delay: &mut W,
        hold_ms: u32,
        programs: &mut ProgramTable,
    ) -> EditorOutcome {
        if self.prompt_pending {
            self.render_prompt(display);
        }

        match key {
            Some(Key::Digit(d)) => {
                self.push_digit(d, display);
                EditorOutcome::Pending
            }
            Some(Key::Hash) if self.step == ConfigStep::Done => {
                screens::show_message_below(display, screens::CANCELLED);
                EditorOutcome::Finalized
            }
            Some(Key::Hash) => self.confirm(display, delay, hold_ms, programs),
            _ => EditorOutcome::Pending,
        }
    }

    fn render_prompt<D: CharDisplay>(&mut self, display: &mut D) {
        display.clear();
        write_padded(display, 0, 0, self.step.prompt());
        if self.step == ConfigStep::Done {
            write_padded(display, 1, 0, "# para guardar");
        }
        // Digits typed before a door preemption are kept
        if !self.input.is_empty() {
            write_padded(display, 1, ENTRY_COL, &screens::entry_line(&self.input));
        }
        self.prompt_pending = false;
    }

    fn push_digit<D: CharDisplay>(&mut self, digit: u8, display: &mut D) {
        if self.input.len() >= MAX_INPUT_DIGITS {
            return;
        }
        let _ = self.input.push((b'0' + digit.min(9)) as char);
        write_padded(display, 1, ENTRY_COL, &screens::entry_line(&self.input));
    }

    fn confirm<D: CharDisplay, W: DelayNs>(
        &mut self,
        display: &mut D,
        delay: &mut W,
        hold_ms: u32,
        programs: &mut ProgramTable,
    ) -> EditorOutcome {
        if self.input.is_empty() {
            self.reject(display, delay, hold_ms, screens::ENTER_VALUE);
            return EditorOutcome::Pending;
        }

        // At most four digits, always fits
        let value: u16 = self.input.parse().unwrap_or(0);

        match self.step {
            ConfigStep::CookTime if value == 0 => {
                self.reject(display, delay, hold_ms, screens::MUST_BE_POSITIVE);
                return EditorOutcome::Pending;
            }
            ConfigStep::CookTime => {
                self.draft.cook_s = value;
                programs.set_custom_cook(value);
            }
            ConfigStep::CoolTime => {
                self.draft.cool_s = value;
                programs.set_custom_cool(value);
            }
            ConfigStep::Repetitions => {
                self.draft.repetitions = value.max(1);
                programs.set_custom_repetitions(value);
            }
            ConfigStep::Done => {}
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("config step {} committed: {}", self.step, value);

        self.step = self.step.next();
        self.input.clear();
        self.prompt_pending = true;

        if self.step == ConfigStep::Done {
            EditorOutcome::ProgramReady
        } else {
            EditorOutcome::Pending
        }
    }

    fn reject<D: CharDisplay, W: DelayNs>(
        &mut self,
        display: &mut D,
        delay: &mut W,
        hold_ms: u32,
        message: &str,
    ) {
        write_padded(display, 1, 0, message);
        delay.delay_ms(hold_ms);
        self.input.clear();
        self.prompt_pending = true;
    }
}
