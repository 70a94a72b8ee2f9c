//! Recommendation generator
//!
//! Tiers a window **mean** with the guidance scheme (at-or-above boundaries)
//! and returns the fixed guidance for that metric and level. The text is
//! static configuration; the level comes from the shared threshold table.

use serde::Serialize;

use crate::{
    errors::ClassifyResult,
    metric::Metric,
    reading::Reading,
    thresholds::TierScheme,
    tiering::{AlertLevel, Tier, TierLabel},
};

use super::stats::summarize;

/// Fixed guidance for one metric at one level
struct Guidance {
    metric: Metric,
    level: AlertLevel,
    actions: &'static [&'static str],
}

const GUIDANCE: &[Guidance] = &[
    // Particulate
    Guidance {
        metric: Metric::Dust,
        level: AlertLevel::Critical,
        actions: &[
            "IMMEDIATE ACTION: Activate emergency air filtration systems",
            "Evacuate non-essential personnel from affected areas",
            "Contact environmental compliance officer",
            "Investigate source: Check industrial processes, HVAC systems",
            "Long-term: Install HEPA filtration units, seal dust sources",
        ],
    },
    Guidance {
        metric: Metric::Dust,
        level: AlertLevel::Warning,
        actions: &[
            "Increase ventilation rates by 30-50%",
            "Schedule deep cleaning of air ducts",
            "Monitor outdoor air quality - may be external source",
            "Consider upgrading air filters to MERV 13+",
        ],
    },
    Guidance {
        metric: Metric::Dust,
        level: AlertLevel::Moderate,
        actions: &[
            "Maintain current filtration protocols",
            "Regular filter replacement schedule recommended",
            "Monitor trends for any upward patterns",
        ],
    },
    Guidance {
        metric: Metric::Dust,
        level: AlertLevel::Normal,
        actions: &[
            "Air quality is within safe parameters",
            "Continue standard maintenance procedures",
        ],
    },
    // Temperature
    Guidance {
        metric: Metric::Temperature,
        level: AlertLevel::Critical,
        actions: &[
            "IMMEDIATE: Reduce heat-generating processes",
            "Check HVAC system capacity and functionality",
            "Implement worker rotation schedules",
            "Provide cooling stations and hydration",
        ],
    },
    Guidance {
        metric: Metric::Temperature,
        level: AlertLevel::Warning,
        actions: &[
            "Optimize HVAC settings for better cooling",
            "Ensure adequate air circulation",
            "Monitor equipment for heat generation",
        ],
    },
    Guidance {
        metric: Metric::Temperature,
        level: AlertLevel::Moderate,
        actions: &[
            "Temperature approaching upper comfort limits",
            "Preventive: Service HVAC before peak periods",
        ],
    },
    Guidance {
        metric: Metric::Temperature,
        level: AlertLevel::Normal,
        actions: &[
            "Temperature within optimal comfort zone",
            "Energy efficiency is likely optimal",
        ],
    },
    // Volatile organic compounds
    Guidance {
        metric: Metric::Tvoc,
        level: AlertLevel::Critical,
        actions: &[
            "IMMEDIATE: Identify VOC source (paints, solvents, chemicals)",
            "Maximize fresh air intake, open windows if safe",
            "Use activated carbon filtration",
            "Review chemical storage and handling procedures",
        ],
    },
    Guidance {
        metric: Metric::Tvoc,
        level: AlertLevel::Warning,
        actions: &[
            "Increase outdoor air ventilation rates",
            "Audit recent activities: painting, cleaning, manufacturing",
            "Consider VOC-absorbing materials (plants, air purifiers)",
        ],
    },
    Guidance {
        metric: Metric::Tvoc,
        level: AlertLevel::Moderate,
        actions: &[
            "Acceptable levels, but monitor trends",
            "Use low-VOC products when possible",
        ],
    },
    Guidance {
        metric: Metric::Tvoc,
        level: AlertLevel::Normal,
        actions: &[
            "VOC levels are minimal and safe",
            "Current ventilation strategy is effective",
        ],
    },
    // Equivalent CO2
    Guidance {
        metric: Metric::Eco2,
        level: AlertLevel::Critical,
        actions: &[
            "IMMEDIATE: Increase outdoor air exchange rate",
            "High occupancy detected - reduce density or stagger shifts",
            "Check HVAC for recirculation vs. fresh air ratio",
            "Symptoms: Drowsiness, headaches may occur",
        ],
    },
    Guidance {
        metric: Metric::Eco2,
        level: AlertLevel::Warning,
        actions: &[
            "Moderate ventilation improvement needed",
            "Optimize HVAC for better air turnover",
            "Consider occupancy-based ventilation controls",
        ],
    },
    Guidance {
        metric: Metric::Eco2,
        level: AlertLevel::Moderate,
        actions: &[
            "Slightly elevated, typical of occupied spaces",
            "Ensure HVAC is functioning per design specifications",
        ],
    },
    Guidance {
        metric: Metric::Eco2,
        level: AlertLevel::Normal,
        actions: &[
            "Excellent ventilation, fresh air circulation optimal",
            "Indoor air quality is superior",
        ],
    },
];

fn actions_for(metric: Metric, level: AlertLevel) -> &'static [&'static str] {
    GUIDANCE
        .iter()
        .find(|g| g.metric == metric && g.level == level)
        .map(|g| g.actions)
        .unwrap_or(&[])
}

/// Guidance for one metric over a window
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub metric: Metric,
    /// Window mean the level was derived from
    pub average: f64,
    pub level: Tier<AlertLevel>,
    /// Ordered action lines
    pub actions: &'static [&'static str],
}

impl Recommendation {
    /// `CRITICAL - PARTICULATE MATTER (PM2.5)` style heading
    pub fn headline(&self) -> String {
        format!("{} - {}", self.level.tier.label(), self.metric.guidance_heading())
    }

    /// Heading followed by the action lines
    pub fn lines(&self) -> Vec<String> {
        std::iter::once(self.headline())
            .chain(self.actions.iter().map(|line| (*line).to_string()))
            .collect()
    }
}

/// Guidance for a window mean
pub fn recommend(
    average: f64,
    metric: Metric,
    scheme: &TierScheme<AlertLevel>,
) -> ClassifyResult<Recommendation> {
    let level = scheme.tier(average, metric)?;
    Ok(Recommendation { metric, average, level, actions: actions_for(metric, level.tier) })
}

/// Guidance computed straight from a window of readings
///
/// Fails with `EmptyWindow` when the window has no samples for `metric`.
pub fn recommend_window(
    readings: &[Reading],
    metric: Metric,
    scheme: &TierScheme<AlertLevel>,
) -> ClassifyResult<Recommendation> {
    let summary = summarize(readings, metric)?;
    recommend(summary.average, metric, scheme)
}
