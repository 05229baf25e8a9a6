//! Progress model for the full-screen page loader.

use rand::Rng;

/// Interval between random advances.
pub const TICK_MS: u32 = 100;
/// Upper bound (exclusive) of one tick's random advance, in percent.
pub const MAX_STEP: f64 = 30.0;
/// Full bar shown this long before the loader fades.
pub const HIDE_DELAY_MS: u32 = 300;
/// Fade duration; the loader is removed afterwards.
pub const REMOVE_DELAY_MS: u32 = 500;
/// Completion is forced this long after start.
pub const FORCE_COMPLETE_MS: u32 = 2000;
/// Content is made visible this long after start, whatever the loader did.
pub const REVEAL_MS: u32 = 3000;

/// Caption under the logo.
pub const LOADING_TEXT: &str = "در حال بارگذاری";

/// Visibility stage of the loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderPhase {
    /// Bar advancing.
    Loading,
    /// Bar full, loader still opaque.
    Complete,
    /// Fading out.
    Hidden,
    /// Gone from the page.
    Removed,
}

/// Bar percentage plus the loader's phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoaderProgress {
    percent: f64,
    phase: LoaderPhase,
}

impl Default for LoaderProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl LoaderProgress {
    /// Empty bar, loading.
    pub fn new() -> Self {
        LoaderProgress {
            percent: 0.0,
            phase: LoaderPhase::Loading,
        }
    }

    /// Bar fill, may overshoot 100 until [`Self::bar_width`] clamps it.
    pub fn percent(&self) -> f64 {
        self.percent
    }

    /// Current phase.
    pub fn phase(&self) -> LoaderPhase {
        self.phase
    }

    /// True once the bar has filled, in any later phase.
    pub fn is_complete(&self) -> bool {
        self.phase != LoaderPhase::Loading
    }

    /// Advances by `step`; reaching 100 completes. Returns whether the bar
    /// is now complete.
    pub fn advance(&mut self, step: f64) -> bool {
        if self.is_complete() {
            return true;
        }
        self.percent += step.max(0.0);
        if self.percent >= 100.0 {
            self.finish();
        }
        self.is_complete()
    }

    /// One timer tick with a random step in `[0, MAX_STEP)`.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        let step = random_step(rng);
        self.advance(step)
    }

    /// Fills the bar at once; later phases are kept.
    pub fn finish(&mut self) {
        if self.phase == LoaderPhase::Loading {
            self.percent = 100.0;
            self.phase = LoaderPhase::Complete;
        }
    }

    /// Complete → hidden → removed; no-op while loading or once removed.
    pub fn next_phase(&mut self) {
        self.phase = match self.phase {
            LoaderPhase::Complete => LoaderPhase::Hidden,
            LoaderPhase::Hidden | LoaderPhase::Removed => LoaderPhase::Removed,
            LoaderPhase::Loading => LoaderPhase::Loading,
        };
    }

    /// Inline width of the bar.
    pub fn bar_width(&self) -> String {
        format!("width: {:.1}%;", self.percent.min(100.0))
    }
}

/// Uniform step in `[0, MAX_STEP)`.
pub fn random_step<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.gen_range(0.0..MAX_STEP)
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn ticks_eventually_complete_at_hundred() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut progress = LoaderProgress::new();
        let mut ticks = 0;
        while !progress.tick(&mut rng) {
            ticks += 1;
            assert!(progress.percent() < 100.0);
            assert!(ticks < 10_000);
        }
        assert_eq!(progress.percent(), 100.0);
        assert_eq!(progress.phase(), LoaderPhase::Complete);
    }

    #[test]
    fn steps_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..1000 {
            let step = random_step(&mut rng);
            assert!((0.0..MAX_STEP).contains(&step));
        }
    }

    #[test]
    fn forced_finish_then_phases() {
        let mut progress = LoaderProgress::new();
        progress.advance(12.0);
        progress.next_phase();
        assert_eq!(progress.phase(), LoaderPhase::Loading);
        progress.finish();
        assert_eq!(progress.bar_width(), "width: 100.0%;");
        progress.next_phase();
        assert_eq!(progress.phase(), LoaderPhase::Hidden);
        progress.next_phase();
        progress.next_phase();
        assert_eq!(progress.phase(), LoaderPhase::Removed);
        assert!(progress.advance(5.0));
        assert_eq!(progress.percent(), 100.0);
    }
}
