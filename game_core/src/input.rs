//! Platform-neutral input and loop events

/// Physical key identifier, using USB-HID usage numbers (the same numbering SDL scancodes use)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Scancode(pub u16);

impl Scancode {
    pub const S: Scancode = Scancode(22);
    pub const W: Scancode = Scancode(26);
    pub const DOWN: Scancode = Scancode(81);
    pub const UP: Scancode = Scancode(82);
}

/// One event from the platform event source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    KeyDown(Scancode),
    KeyUp(Scancode),
    /// A frame is due: run one update followed by one draw
    Tick,
    Quit,
}

/// Pull-style event source. Blocks until the next event is available.
///
/// Returning `None` means the source is exhausted and is treated like `Quit`.
pub trait EventSource {
    fn wait_event(&mut self) -> Option<GameEvent>;
}

impl<I> EventSource for I
where
    I: Iterator<Item = GameEvent>,
{
    fn wait_event(&mut self) -> Option<GameEvent> {
        self.next()
    }
}
