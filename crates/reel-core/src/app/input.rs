impl<CS, IN> StoryApp<CS, IN>
where
    CS: StoryCatalog,
    IN: InputProvider,
{
    fn process_inputs(&mut self, now_ms: u64) {
        loop {
            match self.input.poll_event() {
                Ok(Some(event)) => self.apply_input_event(event, now_ms),
                Ok(None) => break,
                Err(_) => {
                    debug!("story-input: provider error, dropping the rest of this tick");
                    break;
                }
            }
        }
    }

    fn apply_input_event(&mut self, event: InputEvent, now_ms: u64) {
        match self.ui {
            UiState::Strip => self.apply_strip_input(event, now_ms),
            UiState::Viewer { .. } => self.apply_viewer_input(event, now_ms),
        }
    }

    fn apply_strip_input(&mut self, event: InputEvent, now_ms: u64) {
        match event {
            InputEvent::AvatarTap(user) => {
                if user >= self.catalog.user_count() {
                    debug!(
                        "story-nav: avatar tap out of range user={} total={}",
                        user,
                        self.catalog.user_count()
                    );
                    return;
                }
                if self.catalog.slide_count(user) == 0 {
                    debug!("story-nav: avatar tap on user={} with no slides", user);
                    return;
                }
                self.enter_viewer(user, 0, now_ms);
                self.start_transition(AnimationKind::Fade, now_ms, ANIM_FADE_MS);
            }
            other => {
                debug!("story-nav: strip ignored viewer event {:?}", other);
            }
        }
    }

    fn apply_viewer_input(&mut self, event: InputEvent, now_ms: u64) {
        match event {
            InputEvent::TapLeft => self.retreat(now_ms),
            InputEvent::TapRight => self.advance(now_ms),
            InputEvent::TouchStart(x) => {
                self.touch_anchor_x = Some(x);
            }
            InputEvent::TouchEnd(x) => self.apply_touch_end(x, now_ms),
            InputEvent::MediaLoaded => self.apply_media_loaded(now_ms),
            InputEvent::MediaFailed => self.apply_media_failed(now_ms),
            InputEvent::PlaybackEnded => self.advance(now_ms),
            InputEvent::AvatarTap(user) => {
                debug!("story-nav: viewer ignored avatar tap user={}", user);
            }
        }
    }

    fn apply_touch_end(&mut self, x: i32, now_ms: u64) {
        let Some(anchor) = self.touch_anchor_x.take() else {
            debug!("story-input: touch end without matching start");
            return;
        };

        // Positive delta is a leftward drag, same convention as the touch API.
        let delta = anchor.saturating_sub(x);
        if delta.unsigned_abs() <= u32::from(self.config.swipe_threshold) {
            return;
        }

        if delta > 0 {
            self.advance(now_ms);
        } else {
            self.retreat(now_ms);
        }
    }

    fn apply_media_loaded(&mut self, now_ms: u64) {
        let UiState::Viewer { user, slide, .. } = self.ui else {
            return;
        };

        // The slide is visible now; only now does it count as viewed, and
        // only now does its display window start.
        if self.catalog.mark_viewed(user, slide).is_err() {
            debug!(
                "story-catalog: mark viewed failed user={} slide={}",
                user, slide
            );
        }

        self.ui = UiState::Viewer {
            user,
            slide,
            progress_pct: 0,
            loading: false,
            next_step_ms: now_ms + u64::from(self.config.step_interval_ms),
        };
        self.pending_redraw = true;
    }

    fn apply_media_failed(&mut self, now_ms: u64) {
        let UiState::Viewer {
            user,
            slide,
            progress_pct,
            ..
        } = self.ui
        else {
            return;
        };

        debug!(
            "story-media: load failed user={} slide={}, continuing on timer",
            user, slide
        );

        self.ui = UiState::Viewer {
            user,
            slide,
            progress_pct,
            loading: false,
            next_step_ms: now_ms + u64::from(self.config.step_interval_ms),
        };
        self.pending_redraw = true;
    }
}
