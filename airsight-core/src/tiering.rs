//! Generic Data-Driven Tiering
//!
//! ## Overview
//!
//! Every classifier in this crate reduces to the same question: given a value
//! and an ascending list of boundaries, which bucket does the value fall in?
//! This module answers it once. The classifiers differ only in configuration:
//!
//! | Consumer              | Boundaries        | Tiers                              | Rule            |
//! |-----------------------|-------------------|------------------------------------|-----------------|
//! | Dashboard KPI tier    | per-metric table  | Safe/Moderate/Warning/Hazard       | UpperInclusive  |
//! | Ambient PM2.5         | 30/60/90          | Low/Moderate/High/Very High        | UpperInclusive  |
//! | Ingestion points      | per-metric table  | Low/Moderate/High/Critical         | UpperInclusive  |
//! | Window guidance       | per-metric table  | Normal/Moderate/Warning/Critical   | LowerInclusive  |
//! | Composite gauge       | 30/60             | Safe/Warning/Hazard                | LowerInclusive  |
//! | Ingestion risk score  | 2/5/8             | Low/Moderate/High/Critical         | LowerInclusive  |
//!
//! ## Boundary Rules
//!
//! ```text
//! boundaries:        b0        b1        b2
//! UpperInclusive:  (..=b0] (b0..=b1] (b1..=b2] (b2..)
//! LowerInclusive:  (..b0)  [b0..b1)  [b1..b2)  [b2..)
//! ```
//!
//! With `UpperInclusive` a value exactly on a boundary belongs to the safer
//! tier it bounds; with `LowerInclusive` it enters the more severe one.
//!
//! ## Markers
//!
//! A tier carries a semantic `Marker`, never a glyph or colour. Rendering
//! systems map markers to whatever they draw.

use serde::{Deserialize, Serialize};

use crate::errors::{ClassifyError, ClassifyResult};

/// Presentation-neutral severity marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Marker {
    /// Within limits
    Clear,
    /// Above the comfort band, no action needed yet
    Elevated,
    /// Action recommended
    Warning,
    /// Immediate action required
    Critical,
    /// No data to judge
    Unknown,
}

/// Label and marker for a tier enumeration
pub trait TierLabel: Copy {
    /// Upper-case label, as shown in reports
    fn label(&self) -> &'static str;

    /// Semantic marker for presentation
    fn marker(&self) -> Marker;
}

/// How a value exactly on a boundary is placed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryRule {
    /// `value <= boundary` stays below the boundary
    UpperInclusive,
    /// `value >= boundary` moves above the boundary
    LowerInclusive,
}

impl BoundaryRule {
    #[inline]
    fn crosses(self, value: f64, boundary: f64) -> bool {
        match self {
            BoundaryRule::UpperInclusive => value > boundary,
            BoundaryRule::LowerInclusive => value >= boundary,
        }
    }
}

/// Result of tiering one value
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Tier<T> {
    /// The tier itself
    pub tier: T,
    /// Position on the scale, 0 = least severe
    pub rank: usize,
    /// Presentation marker
    pub marker: Marker,
}

impl<T: TierLabel> Tier<T> {
    /// Upper-case tier label
    pub fn label(&self) -> &'static str {
        self.tier.label()
    }
}

/// Ordered boundaries plus one tier per bucket
#[derive(Debug, Clone, Copy)]
pub struct TierScale<'a, T> {
    boundaries: &'a [f64],
    tiers: &'a [T],
    rule: BoundaryRule,
}

impl<'a, T: TierLabel> TierScale<'a, T> {
    /// Build a scale, checking that boundaries strictly ascend and that there
    /// is exactly one more tier than boundaries
    pub fn new(boundaries: &'a [f64], tiers: &'a [T], rule: BoundaryRule) -> ClassifyResult<Self> {
        validate_boundaries(boundaries)?;
        if tiers.len() != boundaries.len() + 1 {
            return Err(ClassifyError::InvalidBoundaries {
                reason: "tier count must be boundary count plus one",
            });
        }
        Ok(Self { boundaries, tiers, rule })
    }

    /// Build a scale from compile-time constants checked by unit tests
    pub(crate) const fn from_parts(boundaries: &'a [f64], tiers: &'a [T], rule: BoundaryRule) -> Self {
        Self { boundaries, tiers, rule }
    }

    /// Bucket index for `value`
    pub fn rank(&self, value: f64) -> usize {
        let rank = self
            .boundaries
            .iter()
            .take_while(|boundary| self.rule.crosses(value, **boundary))
            .count();
        rank.min(self.tiers.len().saturating_sub(1))
    }

    /// Tier for `value`
    pub fn classify(&self, value: f64) -> Tier<T> {
        let rank = self.rank(value);
        let tier = self.tiers[rank];
        Tier { tier, rank, marker: tier.marker() }
    }

    /// Number of tiers on the scale
    pub fn tier_count(&self) -> usize {
        self.tiers.len()
    }

    pub fn boundaries(&self) -> &'a [f64] {
        self.boundaries
    }

    pub fn rule(&self) -> BoundaryRule {
        self.rule
    }
}

/// Check that boundaries are finite and strictly ascending
pub fn validate_boundaries(boundaries: &[f64]) -> ClassifyResult<()> {
    if boundaries.is_empty() {
        return Err(ClassifyError::InvalidBoundaries { reason: "no boundaries" });
    }
    if boundaries.iter().any(|b| !b.is_finite()) {
        return Err(ClassifyError::InvalidBoundaries { reason: "boundary is not finite" });
    }
    if boundaries.windows(2).any(|pair| pair[0] >= pair[1]) {
        return Err(ClassifyError::InvalidBoundaries { reason: "boundaries must strictly ascend" });
    }
    Ok(())
}

// ===== TIER ENUMERATIONS =====

/// Fine dashboard severity, keyed independently per metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Safe,
    Moderate,
    Warning,
    Hazard,
}

impl TierLabel for Severity {
    fn label(&self) -> &'static str {
        match self {
            Severity::Safe => "SAFE",
            Severity::Moderate => "MODERATE",
            Severity::Warning => "WARNING",
            Severity::Hazard => "HAZARD",
        }
    }

    fn marker(&self) -> Marker {
        match self {
            Severity::Safe => Marker::Clear,
            Severity::Moderate => Marker::Elevated,
            Severity::Warning => Marker::Warning,
            Severity::Hazard => Marker::Critical,
        }
    }
}

/// Guidance level applied to window statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertLevel {
    Normal,
    Moderate,
    Warning,
    Critical,
}

impl TierLabel for AlertLevel {
    fn label(&self) -> &'static str {
        match self {
            AlertLevel::Normal => "NORMAL",
            AlertLevel::Moderate => "MODERATE",
            AlertLevel::Warning => "WARNING",
            AlertLevel::Critical => "CRITICAL",
        }
    }

    fn marker(&self) -> Marker {
        match self {
            AlertLevel::Normal => Marker::Clear,
            AlertLevel::Moderate => Marker::Elevated,
            AlertLevel::Warning => Marker::Warning,
            AlertLevel::Critical => Marker::Critical,
        }
    }
}

/// Risk level used at ingestion and for ambient particulate
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    VeryHigh,
    Critical,
}

impl RiskLevel {
    /// Title-case name, as the ingestion endpoint reports it
    pub const fn name(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::High => "High",
            RiskLevel::VeryHigh => "Very High",
            RiskLevel::Critical => "Critical",
        }
    }
}

impl TierLabel for RiskLevel {
    fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Moderate => "MODERATE",
            RiskLevel::High => "HIGH",
            RiskLevel::VeryHigh => "VERY HIGH",
            RiskLevel::Critical => "CRITICAL",
        }
    }

    fn marker(&self) -> Marker {
        match self {
            RiskLevel::Low => Marker::Clear,
            RiskLevel::Moderate => Marker::Elevated,
            RiskLevel::High => Marker::Warning,
            RiskLevel::VeryHigh | RiskLevel::Critical => Marker::Critical,
        }
    }
}

/// Tiers of the fine dashboard scheme
pub const SEVERITY_TIERS: [Severity; 4] =
    [Severity::Safe, Severity::Moderate, Severity::Warning, Severity::Hazard];

/// Tiers of the composite gauge
pub const COMPOSITE_TIERS: [Severity; 3] = [Severity::Safe, Severity::Warning, Severity::Hazard];

/// Tiers of window guidance and verdict escalation
pub const ALERT_TIERS: [AlertLevel; 4] =
    [AlertLevel::Normal, AlertLevel::Moderate, AlertLevel::Warning, AlertLevel::Critical];

/// Tiers of the ambient particulate scheme
pub const AMBIENT_TIERS: [RiskLevel; 4] =
    [RiskLevel::Low, RiskLevel::Moderate, RiskLevel::High, RiskLevel::VeryHigh];

/// Tiers of ingestion scoring
pub const INGEST_TIERS: [RiskLevel; 4] =
    [RiskLevel::Low, RiskLevel::Moderate, RiskLevel::High, RiskLevel::Critical];

#[cfg(test)]
mod tests {
    use super::*;

    const B: [f64; 3] = [10.0, 20.0, 30.0];

    #[test]
    fn upper_inclusive_keeps_boundary_in_lower_tier() {
        let scale = TierScale::new(&B, &SEVERITY_TIERS, BoundaryRule::UpperInclusive).unwrap();
        assert_eq!(scale.classify(10.0).tier, Severity::Safe);
        assert_eq!(scale.classify(10.001).tier, Severity::Moderate);
        assert_eq!(scale.classify(30.0).tier, Severity::Warning);
        assert_eq!(scale.classify(30.001).tier, Severity::Hazard);
    }

    #[test]
    fn lower_inclusive_moves_boundary_to_upper_tier() {
        let scale = TierScale::new(&B, &ALERT_TIERS, BoundaryRule::LowerInclusive).unwrap();
        assert_eq!(scale.classify(9.999).tier, AlertLevel::Normal);
        assert_eq!(scale.classify(10.0).tier, AlertLevel::Moderate);
        assert_eq!(scale.classify(30.0).tier, AlertLevel::Critical);
    }

    #[test]
    fn rank_and_marker_follow_tier() {
        let scale = TierScale::new(&B, &SEVERITY_TIERS, BoundaryRule::UpperInclusive).unwrap();
        let tier = scale.classify(25.0);
        assert_eq!(tier.rank, 2);
        assert_eq!(tier.marker, Marker::Warning);
        assert_eq!(tier.label(), "WARNING");
    }

    #[test]
    fn rejects_unordered_boundaries() {
        let err = TierScale::new(&[10.0, 10.0, 30.0], &SEVERITY_TIERS, BoundaryRule::UpperInclusive);
        assert!(matches!(err, Err(ClassifyError::InvalidBoundaries { .. })));
    }

    #[test]
    fn rejects_tier_count_mismatch() {
        let err = TierScale::new(&B, &COMPOSITE_TIERS, BoundaryRule::UpperInclusive);
        assert!(matches!(err, Err(ClassifyError::InvalidBoundaries { .. })));
    }

    #[test]
    fn builtin_tier_sets_are_ordered() {
        assert!(SEVERITY_TIERS.windows(2).all(|w| w[0] < w[1]));
        assert!(ALERT_TIERS.windows(2).all(|w| w[0] < w[1]));
        assert!(AMBIENT_TIERS.windows(2).all(|w| w[0] < w[1]));
        assert!(INGEST_TIERS.windows(2).all(|w| w[0] < w[1]));
        assert!(COMPOSITE_TIERS.windows(2).all(|w| w[0] < w[1]));
    }
}
