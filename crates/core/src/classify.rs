use serde::Serialize;

/// Background/foreground pair for a calendar cell or chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorPair {
    pub background: &'static str,
    pub foreground: &'static str,
}

/// Discrete confidence bucket derived from the daily score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    No,
    CautiousYes,
    Yes,
}

impl Tier {
    pub fn label(&self) -> &'static str {
        match self {
            Tier::Yes => "go for it",
            Tier::CautiousYes => "proceed with caution",
            Tier::No => "probably not",
        }
    }

    pub fn short_label(&self) -> &'static str {
        match self {
            Tier::Yes => "Yes",
            Tier::CautiousYes => "Cautious yes",
            Tier::No => "No",
        }
    }

    /// CautiousYes sits on a light background, so it flips to dark text.
    pub fn colors(&self) -> ColorPair {
        match self {
            Tier::Yes => ColorPair {
                background: "green",
                foreground: "white",
            },
            Tier::CautiousYes => ColorPair {
                background: "yellow",
                foreground: "black",
            },
            Tier::No => ColorPair {
                background: "red",
                foreground: "white",
            },
        }
    }
}

/// Ordered threshold table mapping a score to a tier. Thresholds are
/// inclusive lower bounds, evaluated from the highest band down; anything
/// below the lowest band is `No`.
#[derive(Debug, Clone)]
pub struct TierPolicy {
    pub yes_min: f64,
    pub cautious_min: f64,
}

impl Default for TierPolicy {
    fn default() -> Self {
        Self {
            yes_min: 80.0,
            cautious_min: 70.0,
        }
    }
}

impl TierPolicy {
    /// Extend via SCORE_YES_MIN / SCORE_CAUTIOUS_MIN.
    pub fn from_env() -> Self {
        let mut out = Self::default();

        if let Ok(s) = std::env::var("SCORE_YES_MIN") {
            if let Ok(n) = s.parse::<f64>() {
                out.yes_min = n;
            }
        }

        if let Ok(s) = std::env::var("SCORE_CAUTIOUS_MIN") {
            if let Ok(n) = s.parse::<f64>() {
                out.cautious_min = n;
            }
        }

        out
    }

    pub fn classify(&self, score: f64) -> Tier {
        let bands = [
            (self.yes_min, Tier::Yes),
            (self.cautious_min, Tier::CautiousYes),
        ];
        for (min, tier) in bands {
            if score >= min {
                return tier;
            }
        }
        Tier::No
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_scores_land_in_documented_tiers() {
        let policy = TierPolicy::default();
        assert_eq!(policy.classify(69.999), Tier::No);
        assert_eq!(policy.classify(70.0), Tier::CautiousYes);
        assert_eq!(policy.classify(79.999), Tier::CautiousYes);
        assert_eq!(policy.classify(80.0), Tier::Yes);
    }

    #[test]
    fn extremes_classify_without_error() {
        let policy = TierPolicy::default();
        assert_eq!(policy.classify(0.0), Tier::No);
        assert_eq!(policy.classify(-10.0), Tier::No);
        assert_eq!(policy.classify(100.0), Tier::Yes);
        assert_eq!(policy.classify(f64::MAX), Tier::Yes);
    }

    #[test]
    fn custom_thresholds_shift_the_bands() {
        let policy = TierPolicy {
            yes_min: 65.0,
            cautious_min: 60.0,
        };
        assert_eq!(policy.classify(62.5), Tier::CautiousYes);
        assert_eq!(policy.classify(65.0), Tier::Yes);
        assert_eq!(policy.classify(59.9), Tier::No);
    }

    #[test]
    fn cautious_yes_uses_dark_foreground() {
        assert_eq!(Tier::CautiousYes.colors().foreground, "black");
        assert_eq!(Tier::Yes.colors().foreground, "white");
        assert_eq!(Tier::No.colors().foreground, "white");
    }

    #[test]
    fn labels_follow_the_tier() {
        assert_eq!(Tier::Yes.label(), "go for it");
        assert_eq!(Tier::CautiousYes.short_label(), "Cautious yes");
        assert_eq!(Tier::No.short_label(), "No");
    }
}
