impl<CS, IN> StoryApp<CS, IN>
where
    CS: StoryCatalog,
    IN: InputProvider,
{
    fn enter_viewer(&mut self, user: u16, slide: u16, now_ms: u64) {
        self.touch_anchor_x = None;
        debug!(
            "story-nav: enter viewer user={} slide={}/{}",
            user,
            slide.saturating_add(1),
            self.catalog.slide_count(user)
        );
        self.ui = UiState::Viewer {
            user,
            slide,
            progress_pct: 0,
            loading: true,
            next_step_ms: now_ms + u64::from(self.config.step_interval_ms),
        };
        self.pending_redraw = true;
    }

    fn enter_strip(&mut self, now_ms: u64) {
        self.touch_anchor_x = None;
        self.ui = UiState::Strip;
        self.start_transition(AnimationKind::Fade, now_ms, ANIM_FADE_MS);
        self.pending_redraw = true;
    }

    /// Next slide, next user's first slide, or close past the last user.
    fn advance(&mut self, now_ms: u64) {
        let UiState::Viewer { user, slide, .. } = self.ui else {
            return;
        };

        if slide.saturating_add(1) < self.catalog.slide_count(user) {
            self.enter_viewer(user, slide + 1, now_ms);
            self.start_transition(AnimationKind::SlideLeft, now_ms, ANIM_NAV_MS);
            return;
        }

        if let Some(next) = self.next_user_with_slides(user) {
            self.enter_viewer(next, 0, now_ms);
            self.start_transition(AnimationKind::SlideLeft, now_ms, ANIM_NAV_MS);
            return;
        }

        debug!("story-nav: advanced past the last slide, closing viewer");
        self.enter_strip(now_ms);
    }

    /// Previous slide, previous user's last slide, or close past the first.
    fn retreat(&mut self, now_ms: u64) {
        let UiState::Viewer { user, slide, .. } = self.ui else {
            return;
        };

        if slide > 0 {
            self.enter_viewer(user, slide - 1, now_ms);
            self.start_transition(AnimationKind::SlideRight, now_ms, ANIM_NAV_MS);
            return;
        }

        if let Some(prev) = self.previous_user_with_slides(user) {
            let last = self.catalog.slide_count(prev).saturating_sub(1);
            self.enter_viewer(prev, last, now_ms);
            self.start_transition(AnimationKind::SlideRight, now_ms, ANIM_NAV_MS);
            return;
        }

        debug!("story-nav: retreated past the first slide, closing viewer");
        self.enter_strip(now_ms);
    }

    fn start_transition(&mut self, kind: AnimationKind, now_ms: u64, duration_ms: u16) {
        self.transition = Some(AnimationSpec::new(kind, now_ms, duration_ms));
    }

    fn transition_frame(&self, now_ms: u64) -> Option<AnimationFrame> {
        self.transition.and_then(|anim| anim.frame(now_ms))
    }

    fn next_user_with_slides(&self, user: u16) -> Option<u16> {
        (user.saturating_add(1)..self.catalog.user_count())
            .find(|&candidate| self.catalog.slide_count(candidate) > 0)
    }

    fn previous_user_with_slides(&self, user: u16) -> Option<u16> {
        (0..user)
            .rev()
            .find(|&candidate| self.catalog.slide_count(candidate) > 0)
    }
}
