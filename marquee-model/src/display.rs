//! Presentation helpers shared by cards and detail pages.

const IMDB_TITLE_BASE: &str = "https://www.imdb.com/title/";
const MAX_STARS: u8 = 5;

/// `125` -> `"2h 5min"`.
pub fn format_runtime(minutes: u32) -> String {
    format!("{}h {}min", minutes / 60, minutes % 60)
}

pub fn age_rating(adult: bool) -> &'static str {
    if adult { "+18" } else { "PG-13" }
}

/// Five-star scale from a 0-10 vote average, rounded half away from zero.
pub fn star_count(vote_average: f32) -> u8 {
    if !vote_average.is_finite() {
        return 0;
    }
    (vote_average / 2.0).round().clamp(0.0, MAX_STARS as f32) as u8
}

pub fn stars(vote_average: f32) -> String {
    "★".repeat(star_count(vote_average) as usize)
}

pub fn imdb_url(imdb_id: &str) -> Option<String> {
    let id = imdb_id.trim();
    if id.is_empty() {
        None
    } else {
        Some(format!("{IMDB_TITLE_BASE}{id}"))
    }
}

/// Synopsis with a collapsed preview and a show more/less toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverviewText {
    full: String,
    preview_chars: usize,
    expanded: bool,
}

impl OverviewText {
    pub fn new(full: impl Into<String>, preview_chars: usize) -> Self {
        Self {
            full: full.into(),
            preview_chars,
            expanded: false,
        }
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn full(&self) -> &str {
        &self.full
    }

    /// Collapsed: the first `preview_chars` characters followed by `"... "`.
    /// Expanded: the full text.
    pub fn visible(&self) -> String {
        if self.expanded {
            return self.full.clone();
        }
        let cut = self
            .full
            .char_indices()
            .nth(self.preview_chars)
            .map(|(idx, _)| idx)
            .unwrap_or(self.full.len());
        format!("{}... ", &self.full[..cut])
    }
}
