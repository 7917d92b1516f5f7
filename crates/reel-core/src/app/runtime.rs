impl<CS, IN> StoryApp<CS, IN>
where
    CS: StoryCatalog,
    IN: InputProvider,
{
    fn tick_viewer(&mut self, now_ms: u64) -> TickResult {
        let (user, slide, progress_pct, loading, next_step_ms) = match self.ui {
            UiState::Viewer {
                user,
                slide,
                progress_pct,
                loading,
                next_step_ms,
            } => (user, slide, progress_pct, loading, next_step_ms),
            UiState::Strip => return TickResult::NoRender,
        };

        if self.pending_redraw {
            self.pending_redraw = false;
            return TickResult::RenderRequested;
        }

        // Loading time never counts against the slide's display window.
        if loading || now_ms < next_step_ms {
            return TickResult::NoRender;
        }

        let progress = progress_pct
            .saturating_add(self.config.progress_step)
            .min(PROGRESS_DONE);
        if progress >= PROGRESS_DONE {
            self.advance(now_ms);
            self.pending_redraw = false;
            return TickResult::RenderRequested;
        }

        self.ui = UiState::Viewer {
            user,
            slide,
            progress_pct: progress,
            loading: false,
            next_step_ms: now_ms + u64::from(self.config.step_interval_ms),
        };
        TickResult::RenderRequested
    }
}
