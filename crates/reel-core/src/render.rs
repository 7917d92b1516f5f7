//! App-level view models and animation metadata.

use crate::catalog::MediaKind;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AnimationKind {
    SlideLeft,
    SlideRight,
    Fade,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AnimationFrame {
    pub kind: AnimationKind,
    /// 0..=100
    pub progress_pct: u8,
}

/// Transition started by a state change; frames are derived from the clock.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AnimationSpec {
    pub kind: AnimationKind,
    pub start_ms: u64,
    pub duration_ms: u16,
}

impl AnimationSpec {
    pub const fn new(kind: AnimationKind, start_ms: u64, duration_ms: u16) -> Self {
        Self {
            kind,
            start_ms,
            duration_ms,
        }
    }

    /// Current frame, or `None` once the transition has run out.
    pub fn frame(self, now_ms: u64) -> Option<AnimationFrame> {
        let duration = u64::from(self.duration_ms.max(1));
        let elapsed = now_ms.saturating_sub(self.start_ms);
        if elapsed >= duration {
            return None;
        }

        Some(AnimationFrame {
            kind: self.kind,
            progress_pct: ((elapsed * 100) / duration) as u8,
        })
    }
}

/// One strip entry: avatar plus the unviewed badge.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AvatarView<'a> {
    pub username: &'a str,
    pub avatar: &'a str,
    pub has_unviewed: bool,
}

impl Default for AvatarView<'_> {
    fn default() -> Self {
        Self {
            username: "",
            avatar: "",
            has_unviewed: false,
        }
    }
}

/// App-level view model consumed by the host renderer.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Screen<'a> {
    /// Closed state: the horizontal avatar strip.
    Strip {
        title: &'a str,
        users: &'a [AvatarView<'a>],
        animation: Option<AnimationFrame>,
    },
    /// Open state: one slide, full screen.
    ///
    /// The renderer draws one progress segment per slide of the active user:
    /// segments before `slide_index` full, the active one at `progress_pct`,
    /// the rest empty. While `loading` is set it draws a spinner instead of
    /// the media.
    Viewer {
        username: &'a str,
        slide_index: u16,
        slide_total: u16,
        progress_pct: u8,
        loading: bool,
        kind: MediaKind,
        media: &'a str,
        caption: Option<&'a str>,
        animation: Option<AnimationFrame>,
    },
}
