//! 24-bit RGB palette and score bands for terminal output.

use owo_colors::Rgb;

/// Score at or above which a result is shown as good.
pub const GOOD_SCORE: f64 = 80.0;
/// Score at or above which a result is shown as fair.
pub const FAIR_SCORE: f64 = 60.0;

/// Quality band of a 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Good,
    Fair,
    Poor,
}

impl ScoreBand {
    pub fn of(score: f64) -> Self {
        if score >= GOOD_SCORE {
            ScoreBand::Good
        } else if score >= FAIR_SCORE {
            ScoreBand::Fair
        } else {
            ScoreBand::Poor
        }
    }
}

/// Colors used by the report renderer.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Good scores - green (34, 197, 94)
    pub good: Rgb,
    /// Fair scores and warnings - yellow (234, 179, 8)
    pub fair: Rgb,
    /// Poor scores and errors - red (239, 68, 68)
    pub poor: Rgb,
    /// Headings - cyan (34, 211, 238)
    pub heading: Rgb,
    /// Secondary text - gray (107, 114, 128)
    pub muted: Rgb,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            good: Rgb(34, 197, 94),
            fair: Rgb(234, 179, 8),
            poor: Rgb(239, 68, 68),
            heading: Rgb(34, 211, 238),
            muted: Rgb(107, 114, 128),
        }
    }
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Color for a score's band.
    pub fn score_color(&self, score: f64) -> Rgb {
        match ScoreBand::of(score) {
            ScoreBand::Good => self.good,
            ScoreBand::Fair => self.fair,
            ScoreBand::Poor => self.poor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_bands() {
        assert_eq!(ScoreBand::of(100.0), ScoreBand::Good);
        assert_eq!(ScoreBand::of(80.0), ScoreBand::Good);
        assert_eq!(ScoreBand::of(79.9), ScoreBand::Fair);
        assert_eq!(ScoreBand::of(60.0), ScoreBand::Fair);
        assert_eq!(ScoreBand::of(59.9), ScoreBand::Poor);
        assert_eq!(ScoreBand::of(0.0), ScoreBand::Poor);
    }

    #[test]
    fn test_score_color_follows_band() {
        let theme = Theme::new();
        assert_eq!(theme.score_color(90.0), theme.good);
        assert_eq!(theme.score_color(65.0), theme.fair);
        assert_eq!(theme.score_color(10.0), theme.poor);
    }
}
