//! Application state machine for the story strip and the full-screen viewer.

use log::debug;

use crate::{
    catalog::{MediaKind, SlideView, StoryCatalog},
    input::{InputEvent, InputProvider},
    render::{AnimationFrame, AnimationKind, AnimationSpec, AvatarView, Screen},
};

const MAX_STRIP_ITEMS: usize = 16;
const PROGRESS_DONE: u8 = 100;

// Transition lengths mirror the viewer's fade and navigation timings.
const ANIM_FADE_MS: u16 = 300;
const ANIM_NAV_MS: u16 = 150;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    NoRender,
    RenderRequested,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ViewerConfig {
    /// Period of the auto-advance timer.
    pub step_interval_ms: u32,
    /// Progress added per elapsed period, on a 0..=100 scale.
    pub progress_step: u8,
    /// Net horizontal displacement above which a drag counts as navigation.
    pub swipe_threshold: u16,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            step_interval_ms: 50,
            progress_step: 1,
            swipe_threshold: 50,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum UiState {
    Strip,
    Viewer {
        user: u16,
        slide: u16,
        progress_pct: u8,
        loading: bool,
        next_step_ms: u64,
    },
}

pub struct StoryApp<CS, IN>
where
    CS: StoryCatalog,
    IN: InputProvider,
{
    catalog: CS,
    input: IN,
    config: ViewerConfig,
    app_title: &'static str,
    ui: UiState,
    pending_redraw: bool,
    transition: Option<AnimationSpec>,
    touch_anchor_x: Option<i32>,
}

include!("view.rs");
include!("input.rs");
include!("runtime.rs");
include!("navigation.rs");
