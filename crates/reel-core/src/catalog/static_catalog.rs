use super::{MediaKind, SlideView, StoryCatalog};
use heapless::{String, Vec};

pub const STATIC_CATALOG_MAX_USERS: usize = 16;
pub const STATIC_CATALOG_MAX_SLIDES: usize = 8;
pub const STATIC_CATALOG_NAME_BYTES: usize = 24;
pub const STATIC_CATALOG_MEDIA_BYTES: usize = 96;
pub const STATIC_CATALOG_CAPTION_BYTES: usize = 96;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CatalogError {
    InvalidUserIndex,
    InvalidSlideIndex,
    CapacityExceeded,
}

#[derive(Clone, Debug)]
struct SlideEntry {
    kind: MediaKind,
    media: String<STATIC_CATALOG_MEDIA_BYTES>,
    caption: Option<String<STATIC_CATALOG_CAPTION_BYTES>>,
    viewed: bool,
}

#[derive(Clone, Debug)]
struct UserEntry {
    username: String<STATIC_CATALOG_NAME_BYTES>,
    avatar: String<STATIC_CATALOG_MEDIA_BYTES>,
    slides: Vec<SlideEntry, STATIC_CATALOG_MAX_SLIDES>,
}

/// Bounded in-memory catalog backing the strip and the viewer.
#[derive(Clone, Debug, Default)]
pub struct StaticStoryCatalog {
    users: Vec<UserEntry, STATIC_CATALOG_MAX_USERS>,
}

impl StaticStoryCatalog {
    pub const fn new() -> Self {
        Self { users: Vec::new() }
    }

    /// Append a user with no slides yet, returning its index.
    /// Overlong strings are truncated to the catalog's byte budgets.
    pub fn push_user(&mut self, username: &str, avatar: &str) -> Result<u16, CatalogError> {
        let index = self.users.len() as u16;
        let entry = UserEntry {
            username: bounded(username),
            avatar: bounded(avatar),
            slides: Vec::new(),
        };
        self.users
            .push(entry)
            .map_err(|_| CatalogError::CapacityExceeded)?;
        Ok(index)
    }

    /// Append a slide to an existing user.
    pub fn push_slide(
        &mut self,
        user: u16,
        kind: MediaKind,
        media: &str,
        caption: Option<&str>,
    ) -> Result<(), CatalogError> {
        let entry = self
            .users
            .get_mut(user as usize)
            .ok_or(CatalogError::InvalidUserIndex)?;
        let slide = SlideEntry {
            kind,
            media: bounded(media),
            caption: caption.map(bounded),
            viewed: false,
        };
        entry
            .slides
            .push(slide)
            .map_err(|_| CatalogError::CapacityExceeded)
    }
}

impl StoryCatalog for StaticStoryCatalog {
    type Error = CatalogError;

    fn user_count(&self) -> u16 {
        self.users.len() as u16
    }

    fn username_at(&self, user: u16) -> Option<&str> {
        self.users.get(user as usize).map(|entry| entry.username.as_str())
    }

    fn avatar_at(&self, user: u16) -> Option<&str> {
        self.users.get(user as usize).map(|entry| entry.avatar.as_str())
    }

    fn slide_count(&self, user: u16) -> u16 {
        self.users
            .get(user as usize)
            .map_or(0, |entry| entry.slides.len() as u16)
    }

    fn slide_at(&self, user: u16, slide: u16) -> Option<SlideView<'_>> {
        let entry = self.users.get(user as usize)?;
        let slide = entry.slides.get(slide as usize)?;
        Some(SlideView {
            kind: slide.kind,
            media: slide.media.as_str(),
            caption: slide.caption.as_deref(),
            viewed: slide.viewed,
        })
    }

    fn mark_viewed(&mut self, user: u16, slide: u16) -> Result<(), Self::Error> {
        let entry = self
            .users
            .get_mut(user as usize)
            .ok_or(CatalogError::InvalidUserIndex)?;
        let slide = entry
            .slides
            .get_mut(slide as usize)
            .ok_or(CatalogError::InvalidSlideIndex)?;
        slide.viewed = true;
        Ok(())
    }
}

fn bounded<const N: usize>(source: &str) -> String<N> {
    let mut out = String::new();
    for ch in source.chars() {
        if out.push(ch).is_err() {
            break;
        }
    }
    out
}

/// Demo dataset used by the host until a real data source is connected.
pub fn sample_catalog() -> StaticStoryCatalog {
    let mut catalog = StaticStoryCatalog::new();

    let entries: [(&str, &str, &[(MediaKind, &str, Option<&str>)]); 3] = [
        (
            "alice",
            "media/alice-avatar.jpg",
            &[
                (MediaKind::Image, "media/alice-beach.jpg", Some("golden hour")),
                (MediaKind::Video, "media/alice-surf.mp4", None),
            ],
        ),
        (
            "ben",
            "media/ben-avatar.jpg",
            &[
                (MediaKind::Image, "media/ben-ramen.jpg", Some("best bowl in town")),
                (MediaKind::Image, "media/ben-market.jpg", None),
                (MediaKind::Image, "media/ben-skyline.jpg", Some("view from the office")),
            ],
        ),
        (
            "carla",
            "media/carla-avatar.jpg",
            &[(MediaKind::Video, "media/carla-trail.mp4", Some("mile 12"))],
        ),
    ];

    for (username, avatar, slides) in entries {
        let Ok(user) = catalog.push_user(username, avatar) else {
            break;
        };
        for (kind, media, caption) in slides {
            let _ = catalog.push_slide(user, *kind, media, *caption);
        }
    }

    catalog
}
