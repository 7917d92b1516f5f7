//! No-hardware host for the story viewer core.
//!
//! Runs a scripted session against the sample catalog: the script stands in
//! for the environment's touch surface and media elements (load, error, and
//! playback-ended signals), the loop owns the wall clock, and the renderer is
//! a plain-text sketch of the strip and the viewer.

use std::collections::VecDeque;
use std::convert::Infallible;
use std::time::{Duration, Instant};

use env_logger::{Builder, Target};
use log::{LevelFilter, info};
use reel_core::{
    app::{StoryApp, TickResult, ViewerConfig},
    catalog::{MediaKind, static_catalog::sample_catalog},
    input::{InputEvent, InputProvider},
    render::Screen,
    text_policy::{caption_compact, label_compact},
};

const TICK_SLEEP_MS: u64 = 5;
const DEMO_DURATION_MS: u64 = 3_200;
const PROGRESS_CELL_CHARS: usize = 10;
const LABEL_BYTES: usize = 48;
const CAPTION_BYTES: usize = 192;

// Demo pacing: 20 steps of 5% every 20 ms, so each slide displays for 400 ms.
const DEMO_CONFIG: ViewerConfig = ViewerConfig {
    step_interval_ms: 20,
    progress_step: 5,
    swipe_threshold: 50,
};

/// `(due_ms, event)` pairs, in due order.
const SESSION_SCRIPT: [(u64, InputEvent); 16] = [
    (100, InputEvent::AvatarTap(0)),
    (220, InputEvent::MediaLoaded),
    // The image slide auto-advances around 620 ms; its video successor loads
    // and then reports an early end.
    (750, InputEvent::MediaLoaded),
    (900, InputEvent::PlaybackEnded),
    // Next user's first slide fails to load; playback continues on the timer.
    (1_020, InputEvent::MediaFailed),
    (1_550, InputEvent::MediaLoaded),
    // A rightward drag of 80 units goes back one slide.
    (1_650, InputEvent::TouchStart(320)),
    (1_700, InputEvent::TouchEnd(240)),
    (1_820, InputEvent::MediaLoaded),
    (1_900, InputEvent::TapRight),
    (2_020, InputEvent::MediaLoaded),
    (2_100, InputEvent::TapRight),
    (2_220, InputEvent::MediaLoaded),
    (2_750, InputEvent::MediaLoaded),
    // The last user's video ends; the viewer closes back to the strip.
    (2_850, InputEvent::PlaybackEnded),
    (3_000, InputEvent::TouchEnd(0)),
];

/// Scripted stand-in for the host toolkit's event queue.
struct SessionInput {
    start: Instant,
    script: VecDeque<(u64, InputEvent)>,
}

impl SessionInput {
    fn new(start: Instant, script: &[(u64, InputEvent)]) -> Self {
        Self {
            start,
            script: script.iter().copied().collect(),
        }
    }
}

impl InputProvider for SessionInput {
    type Error = Infallible;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        let now_ms = self.start.elapsed().as_millis() as u64;
        match self.script.front() {
            Some((due_ms, _)) if *due_ms <= now_ms => {
                Ok(self.script.pop_front().map(|(_, event)| event))
            }
            _ => Ok(None),
        }
    }
}

fn init_logger() {
    if std::env::var("RUST_LOG").is_ok() {
        env_logger::init();
    } else {
        Builder::new()
            .target(Target::Stdout)
            .filter_level(LevelFilter::Info)
            .init();
    }
}

fn main() {
    init_logger();

    let start = Instant::now();
    let catalog = sample_catalog();
    let input = SessionInput::new(start, &SESSION_SCRIPT);
    let mut app = StoryApp::new(catalog, input, DEMO_CONFIG, "reel");

    info!("scripted session starting, {} events queued", SESSION_SCRIPT.len());

    loop {
        let now_ms = start.elapsed().as_millis() as u64;
        if now_ms >= DEMO_DURATION_MS {
            break;
        }

        if app.tick(now_ms) == TickResult::RenderRequested {
            app.with_screen(now_ms, draw);
        }

        std::thread::sleep(Duration::from_millis(TICK_SLEEP_MS));
    }

    info!("scripted session finished");
}

fn draw(screen: Screen<'_>) {
    match screen {
        Screen::Strip { title, users, .. } => {
            let mut line = String::new();
            for user in users {
                let mut buf = [0u8; LABEL_BYTES];
                let label = label_compact(user.username, &mut buf);
                let badge = if user.has_unviewed { "*" } else { " " };
                line.push_str(&format!("  ({badge}){label}"));
            }
            println!("[{title}]{line}");
        }
        Screen::Viewer {
            username,
            slide_index,
            slide_total,
            progress_pct,
            loading,
            kind,
            media,
            caption,
            ..
        } => {
            let mut bar = String::new();
            for segment in 0..slide_total {
                let fill_pct = if segment < slide_index {
                    100
                } else if segment == slide_index {
                    u16::from(progress_pct)
                } else {
                    0
                };
                let filled = usize::from(fill_pct) * PROGRESS_CELL_CHARS / 100;
                bar.push('|');
                for cell in 0..PROGRESS_CELL_CHARS {
                    bar.push(if cell < filled { '#' } else { '-' });
                }
            }
            bar.push('|');

            let kind = match kind {
                MediaKind::Image => "img",
                MediaKind::Video => "vid",
            };
            let state = if loading { "  [loading...]" } else { "" };
            let mut caption_buf = [0u8; CAPTION_BYTES];
            let caption = caption
                .map(|text| format!("  \"{}\"", caption_compact(text, &mut caption_buf)))
                .unwrap_or_default();
            println!("{bar}  @{username} {kind}:{media}{caption}{state}");
        }
    }
}
