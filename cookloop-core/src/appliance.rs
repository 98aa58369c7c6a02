//! Appliance control loop
//!
//! One [`Appliance`] owns every peripheral and all appliance state. Each
//! call to [`Appliance::tick`] runs one pass of the loop: sample the door,
//! read at most one key, run the handler for the current mode, apply the
//! global cancel rule and refresh the light, ring and buzzer.
//!
//! The loop never blocks except for the fixed message holds and the
//! finish chime, which go through the board's [`DelayNs`].

use embedded_hal::delay::DelayNs;

use crate::config::{ProgramTable, TimingConfig};
use crate::cycle::{CookCycleEngine, CookSession, CycleStep, Phase};
use crate::editor::{ConfigurationEditor, EditorOutcome};
use crate::render::{play_finish_chime, PatternRenderer, ToneCommand, ToneController};
use crate::screens;
use crate::state::{Event, Mode, ModeMachine};
use crate::traits::{
    Buzzer, CharDisplay, Clock, DoorSensor, Key, Keypad, LedRing, Light, ProgramStore, RingFrame,
};

/// Peripheral set of a concrete board
pub trait Board {
    type Keypad: Keypad;
    type Door: DoorSensor;
    type Display: CharDisplay;
    type Light: Light;
    type Buzzer: Buzzer;
    type Ring: LedRing;
    /// Millisecond clock that also provides the blocking pauses
    type Time: Clock + DelayNs;
}

/// Owned peripherals
pub struct Io<B: Board> {
    pub keypad: B::Keypad,
    pub door: B::Door,
    pub display: B::Display,
    pub light: B::Light,
    pub buzzer: B::Buzzer,
    pub ring: B::Ring,
    pub time: B::Time,
}

/// Cooking appliance controller
pub struct Appliance<B: Board, P: ProgramStore> {
    io: Io<B>,
    store: P,
    timing: TimingConfig,
    modes: ModeMachine,
    programs: ProgramTable,
    /// Present while configuring, kept across a door preemption
    editor: Option<ConfigurationEditor>,
    /// Present while a cook session exists
    engine: Option<CookCycleEngine>,
    pattern: PatternRenderer,
    tone: ToneController,
    /// Home menu must be drawn at the start of the next tick
    screen_stale: bool,
    last_light: Option<bool>,
    last_frame: Option<RingFrame>,
    last_tone: Option<ToneCommand>,
}

impl<B: Board, P: ProgramStore> Appliance<B, P> {
    /// Create the appliance, loading the program table from `store`
    pub fn new(io: Io<B>, mut store: P, timing: TimingConfig) -> Self {
        let programs = store.load_programs();

        #[cfg(feature = "defmt")]
        for (slot, program) in programs.iter() {
            defmt::debug!(
                "slot {}: {} {}/{}/{}",
                slot,
                program.label,
                program.cook_s,
                program.cool_s,
                program.repetitions
            );
        }

        Self {
            io,
            store,
            timing,
            modes: ModeMachine::new(),
            programs,
            editor: None,
            engine: None,
            pattern: PatternRenderer::new(),
            tone: ToneController::new(),
            screen_stale: true,
            last_light: None,
            last_frame: None,
            last_tone: None,
        }
    }

    /// Run one pass of the control loop
    pub fn tick(&mut self) {
        let door_closed = self.io.door.is_closed();
        if self.modes.resolve_door(door_closed) {
            self.on_door_change();
        }

        let key = self.io.keypad.poll_key();

        if self.screen_stale {
            screens::show_home(&mut self.io.display);
            self.screen_stale = false;
        }

        match self.modes.current() {
            Mode::Idle => self.handle_idle(key),
            Mode::Configuring => self.handle_configuring(key),
            Mode::Cooking => self.handle_cooking(),
            Mode::Paused => self.handle_paused(door_closed),
            Mode::Finished => {
                self.modes.apply(Event::FinishCleared);
                self.reset();
            }
            Mode::DoorOpen => {
                let resumable = self.modes.previous().has_session();
                screens::show_door_prompt(&mut self.io.display, resumable);
            }
        }

        self.check_cancel(key);
        self.update_outputs(door_closed);
    }

    /// Suspend an active cook without losing its progress
    ///
    /// Returns false if nothing is cooking. The next tick that finds the
    /// door closed resumes the cook.
    pub fn pause(&mut self) -> bool {
        if self.modes.current() != Mode::Cooking {
            return false;
        }
        self.modes.apply(Event::Pause);
        screens::show_message(&mut self.io.display, screens::PAUSED);
        true
    }

    fn on_door_change(&mut self) {
        match self.modes.current() {
            Mode::Configuring => {
                self.screen_stale = true;
                if let Some(editor) = self.editor.as_mut() {
                    editor.request_redraw();
                }
            }
            Mode::Cooking => {
                // Time spent with the door open does not count
                let now = self.io.time.now_ms();
                match self.engine.as_mut() {
                    Some(engine) => {
                        engine.rebase(now);
                        engine.redraw(&mut self.io.display);
                    }
                    None => self.screen_stale = true,
                }
            }
            _ => self.screen_stale = true,
        }
    }

    fn handle_idle(&mut self, key: Option<Key>) {
        match key {
            Some(Key::Hash) => {
                self.editor = Some(ConfigurationEditor::new());
                self.modes.apply(Event::Configure);
            }
            Some(Key::Program(slot)) => {
                let session = CookSession::new(Some(slot), self.programs.get(slot));
                self.start_cook(session);
            }
            Some(Key::Digit(d)) if d > 0 => self.start_cook(CookSession::quick(d as u16)),
            _ => {}
        }
    }

    fn start_cook(&mut self, session: CookSession) {
        screens::show_starting(&mut self.io.display);
        let now = self.io.time.now_ms();
        self.engine = Some(CookCycleEngine::start(session, now, self.timing.cook_tick_ms));
        self.modes.apply(Event::StartCook);
    }

    fn handle_configuring(&mut self, key: Option<Key>) {
        let editor = self.editor.get_or_insert_with(ConfigurationEditor::new);
        let outcome = editor.handle(
            key,
            &mut self.io.display,
            &mut self.io.time,
            self.timing.message_hold_ms,
            &mut self.programs,
        );

        match outcome {
            EditorOutcome::Pending => {}
            EditorOutcome::ProgramReady => self.store.save_programs(&self.programs),
            EditorOutcome::Finalized => {
                self.modes.apply(Event::ConfigFinalized);
                self.reset();
            }
        }
    }

    fn handle_cooking(&mut self) {
        let now = self.io.time.now_ms();
        let Some(engine) = self.engine.as_mut() else {
            self.reset();
            return;
        };

        if let CycleStep::Completed(ended) = engine.poll(now, &mut self.io.display) {
            self.complete(ended);
        }
    }

    fn complete(&mut self, ended: Phase) {
        self.modes.apply(Event::CycleComplete);

        let message = match ended {
            Phase::Heating => screens::COMPLETED,
            Phase::Cooling => screens::FINISHED,
        };
        screens::show_message(&mut self.io.display, message);

        play_finish_chime(&mut self.io.buzzer, &mut self.io.time, &self.timing);
        self.last_tone = Some(ToneCommand::Silent);
        self.io.time.delay_ms(self.timing.message_hold_ms);

        self.modes.apply(Event::FinishCleared);
        self.reset();
    }

    fn handle_paused(&mut self, door_closed: bool) {
        if !door_closed {
            return;
        }

        self.modes.apply(Event::Resume);
        screens::show_message(&mut self.io.display, screens::RESUMING);
        self.io.time.delay_ms(self.timing.message_hold_ms);

        let now = self.io.time.now_ms();
        if let Some(engine) = self.engine.as_mut() {
            engine.rebase(now);
        }
    }

    fn check_cancel(&mut self, key: Option<Key>) {
        if key != Some(Key::Star) || !self.modes.current().is_cancellable() {
            return;
        }

        screens::show_message(&mut self.io.display, screens::CANCELLED);
        self.io.time.delay_ms(self.timing.message_hold_ms);
        self.modes.apply(Event::Cancel);
        self.reset();
    }

    /// Drop any session or draft and return to `Idle`
    fn reset(&mut self) {
        self.editor = None;
        self.engine = None;
        self.modes.reset();
        self.screen_stale = true;
    }

    fn update_outputs(&mut self, door_closed: bool) {
        let now = self.io.time.now_ms();
        let mode = self.modes.current();
        let phase = self.engine.as_ref().map(CookCycleEngine::phase);

        let light = !door_closed || mode == Mode::Cooking;
        if self.last_light != Some(light) {
            self.io.light.set_on(light);
            self.last_light = Some(light);
        }

        let frame = self.pattern.render(door_closed, mode, phase, now, &self.timing);
        if self.last_frame != Some(frame) {
            self.io.ring.show(&frame);
            self.last_frame = Some(frame);
        }

        let tone = self.tone.evaluate(door_closed, mode, phase, now, &self.timing);
        if self.last_tone != Some(tone) {
            tone.apply(&mut self.io.buzzer);
            self.last_tone = Some(tone);
        }
    }

    pub fn mode(&self) -> Mode {
        self.modes.current()
    }

    /// Mode restored when the door closes
    pub fn previous_mode(&self) -> Mode {
        self.modes.previous()
    }

    pub fn programs(&self) -> &ProgramTable {
        &self.programs
    }

    /// Active cook session, if any
    pub fn session(&self) -> Option<&CookSession> {
        self.engine.as_ref().map(CookCycleEngine::session)
    }

    /// Configuration wizard, if one is open
    pub fn editor(&self) -> Option<&ConfigurationEditor> {
        self.editor.as_ref()
    }

    pub fn io(&self) -> &Io<B> {
        &self.io
    }

    pub fn io_mut(&mut self) -> &mut Io<B> {
        &mut self.io
    }

    pub fn store(&self) -> &P {
        &self.store
    }

    pub fn timing(&self) -> &TimingConfig {
        &self.timing
    }
}
