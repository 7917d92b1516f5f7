impl<CS, IN> StoryApp<CS, IN>
where
    CS: StoryCatalog,
    IN: InputProvider,
{
    pub fn new(catalog: CS, input: IN, mut config: ViewerConfig, app_title: &'static str) -> Self {
        config.step_interval_ms = config.step_interval_ms.max(1);
        config.progress_step = config.progress_step.max(1);

        Self {
            catalog,
            input,
            config,
            app_title,
            ui: UiState::Strip,
            pending_redraw: true,
            transition: None,
            touch_anchor_x: None,
        }
    }

    /// Drive the state machine: drain pending input, then let the
    /// auto-advance timer run. `now_ms` is the host's monotonic clock.
    pub fn tick(&mut self, now_ms: u64) -> TickResult {
        self.process_inputs(now_ms);

        let rendered = match self.ui {
            UiState::Viewer { .. } => self.tick_viewer(now_ms),
            UiState::Strip => {
                if self.pending_redraw {
                    self.pending_redraw = false;
                    TickResult::RenderRequested
                } else {
                    TickResult::NoRender
                }
            }
        };

        // A live transition keeps frames coming even without a state change.
        if self.transition_frame(now_ms).is_some() {
            TickResult::RenderRequested
        } else {
            rendered
        }
    }

    pub fn with_screen<F>(&self, now_ms: u64, f: F)
    where
        F: FnOnce(Screen<'_>),
    {
        let animation = self.transition_frame(now_ms);

        match self.ui {
            UiState::Strip => {
                let mut users = [AvatarView::default(); MAX_STRIP_ITEMS];
                let mut count = 0usize;

                let total = (self.catalog.user_count() as usize).min(MAX_STRIP_ITEMS);
                for idx in 0..total {
                    let user = idx as u16;
                    users[count] = AvatarView {
                        username: self.catalog.username_at(user).unwrap_or("unknown"),
                        avatar: self.catalog.avatar_at(user).unwrap_or(""),
                        has_unviewed: self.catalog.has_unviewed(user),
                    };
                    count += 1;
                }

                f(Screen::Strip {
                    title: self.app_title,
                    users: &users[..count],
                    animation,
                });
            }
            UiState::Viewer {
                user,
                slide,
                progress_pct,
                loading,
                ..
            } => {
                let view = self.catalog.slide_at(user, slide).unwrap_or(SlideView {
                    kind: MediaKind::Image,
                    media: "",
                    caption: None,
                    viewed: false,
                });

                f(Screen::Viewer {
                    username: self.catalog.username_at(user).unwrap_or("unknown"),
                    slide_index: slide,
                    slide_total: self.catalog.slide_count(user),
                    progress_pct,
                    loading,
                    kind: view.kind,
                    media: view.media,
                    caption: view.caption,
                    animation,
                });
            }
        }
    }
}
