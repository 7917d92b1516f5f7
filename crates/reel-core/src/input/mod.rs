//! Input abstraction layer.

pub mod mock;

/// Logical events the host translates out of its UI toolkit.
///
/// Touch coordinates are horizontal positions in whatever distance unit the
/// host uses; only the net displacement between start and end is interpreted.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputEvent {
    /// Tap on a strip avatar while the viewer is closed.
    AvatarTap(u16),
    /// Tap on the left half of the open viewer.
    TapLeft,
    /// Tap on the right half of the open viewer.
    TapRight,
    TouchStart(i32),
    TouchEnd(i32),
    /// The active slide's media element reported ready.
    MediaLoaded,
    /// The active slide's media element reported an error.
    MediaFailed,
    /// A video slide played to its end.
    PlaybackEnded,
}

/// Polled input provider.
pub trait InputProvider {
    type Error;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error>;
}
