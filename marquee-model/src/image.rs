use std::fmt::{Display, Formatter};

/// Image size variants understood by the catalog image CDN.
#[derive(Debug, Clone, Copy, PartialEq, Hash, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ImageSize {
    Poster(PosterSize),   // Card and grid posters
    Profile(ProfileSize), // Cast portraits
    Original,             // Full-resolution detail header
}

impl Display for ImageSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageSize::Poster(s) => write!(f, "Poster (size: {:#?})", s),
            ImageSize::Profile(s) => write!(f, "Profile (size: {:#?})", s),
            ImageSize::Original => write!(f, "Original"),
        }
    }
}

impl ImageSize {
    /// Default card poster size (500px)
    pub const fn poster() -> Self {
        Self::Poster(PosterSize::W500)
    }

    /// Default cast portrait size (200px)
    pub const fn profile() -> Self {
        Self::Profile(ProfileSize::W200)
    }

    /// Path segment used by the CDN (e.g. "w500", "original").
    pub const fn as_str(&self) -> &'static str {
        match self {
            ImageSize::Poster(s) => s.as_str(),
            ImageSize::Profile(s) => s.as_str(),
            ImageSize::Original => "original",
        }
    }
}

/// Poster image sizes (2:3 aspect ratio)
#[derive(Debug, Clone, Copy, PartialEq, Hash, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PosterSize {
    /// 185px width - thumbnail
    W185,
    /// 342px width - small poster
    W342,
    /// 500px width - card poster (default)
    #[default]
    W500,
    /// 780px width - large poster
    W780,
}

impl PosterSize {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::W185 => "w185",
            Self::W342 => "w342",
            Self::W500 => "w500",
            Self::W780 => "w780",
        }
    }
}

/// Person profile sizes
#[derive(Debug, Clone, Copy, PartialEq, Hash, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProfileSize {
    W45,
    #[default]
    W200,
    H632,
}

impl ProfileSize {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::W45 => "w45",
            Self::W200 => "w200",
            Self::H632 => "h632",
        }
    }
}

/// Builds a CDN URL for an image path such as `/abc.jpg`. Titles without
/// artwork have no path and get no URL.
pub fn image_url(
    base: &str,
    size: ImageSize,
    path: Option<&str>,
) -> Option<String> {
    let path = path?.trim();
    if path.is_empty() {
        return None;
    }
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    Some(format!("{base}/{}/{path}", size.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://image.tmdb.org/t/p";

    #[test]
    fn builds_poster_and_profile_urls() {
        assert_eq!(
            image_url(BASE, ImageSize::poster(), Some("/p.jpg")).as_deref(),
            Some("https://image.tmdb.org/t/p/w500/p.jpg")
        );
        assert_eq!(
            image_url(BASE, ImageSize::profile(), Some("/a.jpg")).as_deref(),
            Some("https://image.tmdb.org/t/p/w200/a.jpg")
        );
        assert_eq!(
            image_url("https://cdn/", ImageSize::Original, Some("x.png"))
                .as_deref(),
            Some("https://cdn/original/x.png")
        );
    }

    #[test]
    fn missing_paths_have_no_url() {
        assert_eq!(image_url(BASE, ImageSize::poster(), None), None);
        assert_eq!(image_url(BASE, ImageSize::poster(), Some("  ")), None);
    }
}
