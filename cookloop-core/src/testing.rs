//! Host-side fakes for every peripheral trait

use core::cell::Cell;
use core::marker::PhantomData;

use embedded_hal::delay::DelayNs;
use heapless::Deque;

use crate::appliance::{Board, Io};
use crate::traits::{
    Buzzer, CharDisplay, Clock, DoorSensor, Key, Keypad, LedRing, Light, Rgb, RingFrame,
    DISPLAY_COLS, DISPLAY_ROWS, RING_PIXELS,
};

const COLS: usize = DISPLAY_COLS as usize;
const ROWS: usize = DISPLAY_ROWS as usize;

/// Character grid recording what is on screen
pub struct FakeDisplay {
    rows: [[u8; COLS]; ROWS],
    clears: u32,
}

impl FakeDisplay {
    pub fn new() -> Self {
        Self {
            rows: [[b' '; COLS]; ROWS],
            clears: 0,
        }
    }

    /// Full 16-character row
    pub fn line(&self, row: usize) -> &str {
        core::str::from_utf8(&self.rows[row]).unwrap()
    }

    pub fn clears(&self) -> u32 {
        self.clears
    }
}

impl CharDisplay for FakeDisplay {
    fn clear(&mut self) {
        self.rows = [[b' '; COLS]; ROWS];
        self.clears += 1;
    }

    fn write_at(&mut self, row: u8, col: u8, text: &str) {
        let Some(cells) = self.rows.get_mut(row as usize) else {
            return;
        };
        for (i, b) in text.bytes().enumerate() {
            if let Some(cell) = cells.get_mut(col as usize + i) {
                *cell = b;
            }
        }
    }
}

/// Queue of pending keypresses
pub struct FakeKeypad {
    queue: Deque<Key, 32>,
}

impl FakeKeypad {
    pub fn new() -> Self {
        Self { queue: Deque::new() }
    }

    pub fn press(&mut self, c: char) {
        let key = Key::from_char(c).unwrap();
        self.queue.push_back(key).unwrap();
    }
}

impl Keypad for FakeKeypad {
    fn poll_key(&mut self) -> Option<Key> {
        self.queue.pop_front()
    }
}

pub struct FakeDoor {
    pub closed: bool,
}

impl DoorSensor for FakeDoor {
    fn is_closed(&mut self) -> bool {
        self.closed
    }
}

pub struct FakeLight {
    pub on: bool,
    pub writes: u32,
}

impl Light for FakeLight {
    fn set_on(&mut self, on: bool) {
        self.on = on;
        self.writes += 1;
    }
}

/// Buzzer recording tone starts
pub struct FakeBuzzer {
    current: Option<u16>,
    last_tone: Option<u16>,
    starts: u32,
}

impl FakeBuzzer {
    pub fn new() -> Self {
        Self {
            current: None,
            last_tone: None,
            starts: 0,
        }
    }

    /// Frequency playing now
    pub fn current(&self) -> Option<u16> {
        self.current
    }

    /// Most recent frequency ever played
    pub fn last_tone(&self) -> Option<u16> {
        self.last_tone
    }

    /// Number of silent-to-tone or frequency changes
    pub fn starts(&self) -> u32 {
        self.starts
    }
}

impl Buzzer for FakeBuzzer {
    fn tone(&mut self, freq_hz: u16) {
        if self.current != Some(freq_hz) {
            self.starts += 1;
        }
        self.current = Some(freq_hz);
        self.last_tone = Some(freq_hz);
    }

    fn silence(&mut self) {
        self.current = None;
    }
}

pub struct FakeRing {
    pub frame: RingFrame,
    pub shows: u32,
}

impl FakeRing {
    pub fn new() -> Self {
        Self {
            frame: [Rgb::OFF; RING_PIXELS],
            shows: 0,
        }
    }

    pub fn lit(&self) -> usize {
        self.frame.iter().filter(|p| **p != Rgb::OFF).count()
    }
}

impl LedRing for FakeRing {
    fn show(&mut self, frame: &RingFrame) {
        self.frame = *frame;
        self.shows += 1;
    }
}

/// Clock and delay sharing one time cell
///
/// Delays advance the clock instantly and are totalled in `paused_ms`.
pub struct FakeTime<'a> {
    now: &'a Cell<u32>,
    paused_ms: u32,
    pending_ns: u32,
}

impl<'a> FakeTime<'a> {
    pub fn new(now: &'a Cell<u32>) -> Self {
        Self {
            now,
            paused_ms: 0,
            pending_ns: 0,
        }
    }

    pub fn paused_ms(&self) -> u32 {
        self.paused_ms
    }

    fn pass(&mut self, ms: u32) {
        self.now.set(self.now.get().wrapping_add(ms));
        self.paused_ms += ms;
    }
}

impl Clock for FakeTime<'_> {
    fn now_ms(&self) -> u32 {
        self.now.get()
    }
}

impl DelayNs for FakeTime<'_> {
    fn delay_ns(&mut self, ns: u32) {
        let total = self.pending_ns as u64 + ns as u64;
        self.pending_ns = (total % 1_000_000) as u32;
        self.pass((total / 1_000_000) as u32);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.pass(ms);
    }
}

/// Board made of fakes
pub struct FakeBoard<'a>(PhantomData<&'a ()>);

impl<'a> Board for FakeBoard<'a> {
    type Keypad = FakeKeypad;
    type Door = FakeDoor;
    type Display = FakeDisplay;
    type Light = FakeLight;
    type Buzzer = FakeBuzzer;
    type Ring = FakeRing;
    type Time = FakeTime<'a>;
}

/// Fake peripherals with the door closed and the light off
pub fn fake_io(now: &Cell<u32>) -> Io<FakeBoard<'_>> {
    Io {
        keypad: FakeKeypad::new(),
        door: FakeDoor { closed: true },
        display: FakeDisplay::new(),
        light: FakeLight {
            on: false,
            writes: 0,
        },
        buzzer: FakeBuzzer::new(),
        ring: FakeRing::new(),
        time: FakeTime::new(now),
    }
}
