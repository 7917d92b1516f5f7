//! Story catalogs consumed by the viewer runtime.

pub mod static_catalog;

/// Media payload kind of one slide.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MediaKind {
    Image,
    Video,
}

/// Borrowed view of one slide.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SlideView<'a> {
    pub kind: MediaKind,
    pub media: &'a str,
    pub caption: Option<&'a str>,
    pub viewed: bool,
}

/// Ordered set of users, each owning an ordered run of slides.
///
/// Read-only for the lifetime of a viewing session except for the per-slide
/// viewed flag, which is set once a slide has actually been displayed.
pub trait StoryCatalog {
    type Error;

    fn user_count(&self) -> u16;
    fn username_at(&self, user: u16) -> Option<&str>;
    fn avatar_at(&self, user: u16) -> Option<&str>;

    /// Number of slides owned by `user` (`0` for an unknown index).
    fn slide_count(&self, user: u16) -> u16;
    fn slide_at(&self, user: u16, slide: u16) -> Option<SlideView<'_>>;

    /// Whether any slide of `user` has not been displayed yet.
    fn has_unviewed(&self, user: u16) -> bool {
        (0..self.slide_count(user))
            .any(|slide| matches!(self.slide_at(user, slide), Some(view) if !view.viewed))
    }

    /// Record that a slide became the active, loaded slide.
    fn mark_viewed(&mut self, user: u16, slide: u16) -> Result<(), Self::Error>;
}
