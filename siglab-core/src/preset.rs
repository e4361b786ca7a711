//! Named signal presets for common synthetic shapes.

use crate::config::SignalConfig;

/// Built-in signal trees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalPreset {
    /// Steady daily growth from 100 with white noise.
    GrowthWithNoise,
    /// A weekly cycle around 50.
    WeeklySeasonality,
    /// Daily growth plus a weekly cycle plus autocorrelated noise.
    SeasonalTrend,
    /// 5% growth every 30 days with multiplicative jitter.
    CompoundGrowth,
}

impl SignalPreset {
    pub const ALL: [SignalPreset; 4] = [
        Self::GrowthWithNoise,
        Self::WeeklySeasonality,
        Self::SeasonalTrend,
        Self::CompoundGrowth,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::GrowthWithNoise => "growth_with_noise",
            Self::WeeklySeasonality => "weekly_seasonality",
            Self::SeasonalTrend => "seasonal_trend",
            Self::CompoundGrowth => "compound_growth",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }

    /// The preset's tree with its default parameters.
    pub fn to_config(self) -> SignalConfig {
        match self {
            Self::GrowthWithNoise => SignalConfig::add(
                SignalConfig::Linear {
                    gradient: 1.0,
                    duration: "1d".into(),
                    intercept: 100.0,
                },
                SignalConfig::Gaussian {
                    mean: 0.0,
                    std_dev: 2.0,
                },
            ),
            Self::WeeklySeasonality => SignalConfig::Sinusoidal {
                amplitude: 10.0,
                period: "1w".into(),
                intercept: 50.0,
                offset: None,
            },
            Self::SeasonalTrend => SignalConfig::add(
                SignalConfig::add(
                    SignalConfig::Linear {
                        gradient: 0.5,
                        duration: "1d".into(),
                        intercept: 100.0,
                    },
                    SignalConfig::Sinusoidal {
                        amplitude: 10.0,
                        period: "1w".into(),
                        intercept: 0.0,
                        offset: None,
                    },
                ),
                SignalConfig::Red {
                    mean: 0.0,
                    std_dev: 2.0,
                    correlation: 0.7,
                },
            ),
            Self::CompoundGrowth => SignalConfig::mul(
                SignalConfig::Exponential {
                    factor: 1.05,
                    duration: "30d".into(),
                    asymptote: 0.0,
                },
                SignalConfig::add(
                    SignalConfig::Flat { value: 100.0 },
                    SignalConfig::Gaussian {
                        mean: 0.0,
                        std_dev: 1.0,
                    },
                ),
            ),
        }
    }
}
