//! Site-wide tunables. Frontend-only settings (base URL, asset paths) live in
//! the frontend's own `config` module.

/// Brand name appended to page titles.
pub const SITE_NAME: &str = "ابزارستان";

/// Upper bound of the related-articles list.
pub const MAX_RELATED: usize = 9;

/// Used when `data-reading-time` is missing, zero or not a number.
pub const DEFAULT_READING_TIME: u32 = 5;

/// Cover shown when the article document has no `.article-image`.
pub const DEFAULT_COVER_IMAGE: &str = "/assets/images/war.png";

/// A heading becomes active once its top is at or above this many pixels
/// from the viewport top.
pub const TOC_ACTIVE_THRESHOLD: f64 = 100.0;

/// Fixed header height subtracted when scrolling to a ToC target.
pub const TOC_HEADER_OFFSET: f64 = 100.0;

/// Header height subtracted when scrolling to a guide section.
pub const GUIDE_HEADER_OFFSET: f64 = 120.0;

/// Guide sections count as current this many pixels before their top.
pub const GUIDE_SPY_OFFSET: f64 = 150.0;

/// Viewports at or below this width use the mobile sidebar drawer.
pub const MOBILE_BREAKPOINT: f64 = 1024.0;

/// Delay before scrolling on mobile, so the drawer can close first.
pub const MOBILE_SCROLL_DELAY_MS: u32 = 350;

/// How long a toast notification stays on screen.
pub const TOAST_DURATION_MS: u32 = 3000;

/// Seed two sample comments into an article that has none yet.
pub const SEED_SAMPLE_COMMENTS: bool = true;
