//! Video descriptors and trailer selection.

const TRAILER_KIND: &str = "Trailer";
const YOUTUBE_SITE: &str = "YouTube";
const YOUTUBE_WATCH_BASE: &str = "https://www.youtube.com/watch?v=";

/// A video attached to a title (`/movie/{id}/videos`).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Video {
    /// Upstream `type`: "Trailer", "Teaser", "Clip", ...
    pub kind: String,
    /// Hosting site, e.g. "YouTube" or "Vimeo".
    pub site: String,
    /// Site-specific key.
    pub key: String,
    pub name: Option<String>,
}

impl Video {
    pub fn new(
        kind: impl Into<String>,
        site: impl Into<String>,
        key: impl Into<String>,
    ) -> Self {
        Self {
            kind: kind.into(),
            site: site.into(),
            key: key.into(),
            name: None,
        }
    }

    pub fn is_youtube_trailer(&self) -> bool {
        self.kind == TRAILER_KIND && self.site == YOUTUBE_SITE
    }
}

/// The trailer chosen for a detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trailer {
    pub key: String,
    pub name: Option<String>,
}

impl Trailer {
    pub fn watch_url(&self) -> String {
        format!("{YOUTUBE_WATCH_BASE}{}", self.key)
    }
}

/// First descriptor with type "Trailer" hosted on YouTube, in catalog order.
/// `None` means the title has no trailer.
pub fn select_trailer(videos: &[Video]) -> Option<Trailer> {
    videos
        .iter()
        .find(|video| video.is_youtube_trailer())
        .map(|video| Trailer {
            key: video.key.clone(),
            name: video.name.clone(),
        })
}
