//! Threshold Table
//!
//! Per-metric boundaries held as data. The same table drives single-reading
//! tiering, batch guidance, verdict escalation and composite normalisation,
//! so the classifiers cannot drift apart on a threshold value.
//!
//! Tables are plain `serde` data. The built-in tables come from
//! `constants::thresholds`; a deployment can load its own from JSON:
//!
//! ```rust
//! use airsight_core::{Metric, ThresholdTable};
//!
//! let table = ThresholdTable::from_json(r#"{"dust": [50.0, 100.0, 150.0]}"#)?;
//! assert_eq!(table.boundaries(Metric::Dust)?.hazard(), 150.0);
//! assert!(table.boundaries(Metric::Tvoc).is_err());
//! # Ok::<(), airsight_core::ClassifyError>(())
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    constants::thresholds::{
        AMBIENT_PM25_BOUNDARIES, DUST_BOUNDARIES, ECO2_BOUNDARIES, INGEST_DUST_BOUNDARIES,
        INGEST_ECO2_BOUNDARIES, INGEST_TEMP_BOUNDARIES, INGEST_TVOC_BOUNDARIES, TEMP_BOUNDARIES,
        TVOC_BOUNDARIES,
    },
    errors::{ClassifyError, ClassifyResult},
    metric::Metric,
    tiering::{
        validate_boundaries, AlertLevel, BoundaryRule, RiskLevel, Severity, Tier, TierLabel,
        TierScale, ALERT_TIERS, AMBIENT_TIERS, INGEST_TIERS, SEVERITY_TIERS,
    },
};

/// Three ascending boundaries for one metric
///
/// Read as safe/warning/hazard on the dashboard table, or as the three
/// point thresholds on the ingestion table. Every constructor, `serde`
/// included, rejects rows that do not strictly ascend, so a scheme built over
/// any `ThresholdTable` can rely on the ordering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 3]")]
pub struct Boundaries([f64; 3]);

impl TryFrom<[f64; 3]> for Boundaries {
    type Error = ClassifyError;

    fn try_from(levels: [f64; 3]) -> Result<Self, Self::Error> {
        validate_boundaries(&levels)?;
        Ok(Self(levels))
    }
}

impl Boundaries {
    /// Build from three strictly ascending values
    pub fn new(safe: f64, warning: f64, hazard: f64) -> ClassifyResult<Self> {
        Self::try_from([safe, warning, hazard])
    }

    pub fn safe(&self) -> f64 {
        self.0[0]
    }

    pub fn warning(&self) -> f64 {
        self.0[1]
    }

    pub fn hazard(&self) -> f64 {
        self.0[2]
    }

    /// `(b1, b2, b3)`
    pub fn as_tuple(&self) -> (f64, f64, f64) {
        (self.0[0], self.0[1], self.0[2])
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

/// Boundaries keyed by metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThresholdTable {
    entries: BTreeMap<Metric, Boundaries>,
}

impl Default for ThresholdTable {
    /// The dashboard table: dust, temperature, TVOC and eCO2
    fn default() -> Self {
        Self::from_constants(&[
            (Metric::Dust, DUST_BOUNDARIES),
            (Metric::Temperature, TEMP_BOUNDARIES),
            (Metric::Tvoc, TVOC_BOUNDARIES),
            (Metric::Eco2, ECO2_BOUNDARIES),
        ])
    }
}

impl ThresholdTable {
    /// Empty table
    pub fn new() -> Self {
        Self { entries: BTreeMap::new() }
    }

    /// The ingestion scoring table
    pub fn ingestion() -> Self {
        Self::from_constants(&[
            (Metric::Dust, INGEST_DUST_BOUNDARIES),
            (Metric::Temperature, INGEST_TEMP_BOUNDARIES),
            (Metric::Tvoc, INGEST_TVOC_BOUNDARIES),
            (Metric::Eco2, INGEST_ECO2_BOUNDARIES),
        ])
    }

    /// The ambient table, keyed on particulate alone
    pub fn ambient() -> Self {
        Self::from_constants(&[(Metric::Dust, AMBIENT_PM25_BOUNDARIES)])
    }

    // Constants are checked by `builtin_tables_are_valid`.
    fn from_constants(rows: &[(Metric, [f64; 3])]) -> Self {
        let entries = rows
            .iter()
            .map(|(metric, levels)| (*metric, Boundaries(*levels)))
            .collect();
        Self { entries }
    }

    /// Parse a table from JSON (`{"dust": [b1, b2, b3], ...}`), rejecting
    /// rows that do not strictly ascend
    pub fn from_json(json: &str) -> ClassifyResult<Self> {
        let rows: BTreeMap<Metric, [f64; 3]> = serde_json::from_str(json)?;
        let entries = rows
            .into_iter()
            .map(|(metric, levels)| Ok((metric, Boundaries::try_from(levels)?)))
            .collect::<ClassifyResult<_>>()?;
        Ok(Self { entries })
    }

    /// Check every row
    pub fn validate(&self) -> ClassifyResult<()> {
        self.entries
            .values()
            .try_for_each(|boundaries| validate_boundaries(boundaries.as_slice()))
    }

    /// Add or replace a row
    pub fn insert(&mut self, metric: Metric, boundaries: Boundaries) -> Option<Boundaries> {
        self.entries.insert(metric, boundaries)
    }

    /// Boundaries for a metric
    pub fn boundaries(&self, metric: Metric) -> ClassifyResult<&Boundaries> {
        self.entries
            .get(&metric)
            .ok_or_else(|| ClassifyError::unknown_metric(metric.name()))
    }

    /// Boundaries for a metric given by name
    pub fn boundaries_for(&self, name: &str) -> ClassifyResult<&Boundaries> {
        let metric: Metric = name.parse()?;
        self.boundaries(metric)
    }

    /// Configured metrics, in `Metric` order
    pub fn metrics(&self) -> impl Iterator<Item = Metric> + '_ {
        self.entries.keys().copied()
    }

    pub fn contains(&self, metric: Metric) -> bool {
        self.entries.contains_key(&metric)
    }
}

/// A named tiering configuration: a table, a tier set and a boundary rule
#[derive(Debug, Clone)]
pub struct TierScheme<T: 'static> {
    name: &'static str,
    table: ThresholdTable,
    tiers: &'static [T],
    rule: BoundaryRule,
}

impl<T: TierLabel> TierScheme<T> {
    /// Build a scheme; every row of `table` must have one boundary fewer
    /// than there are tiers
    pub fn new(
        name: &'static str,
        table: ThresholdTable,
        tiers: &'static [T],
        rule: BoundaryRule,
    ) -> ClassifyResult<Self> {
        table.validate()?;
        if tiers.len() != 4 {
            return Err(ClassifyError::InvalidBoundaries {
                reason: "a three-boundary table needs exactly four tiers",
            });
        }
        Ok(Self { name, table, tiers, rule })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn table(&self) -> &ThresholdTable {
        &self.table
    }

    pub fn rule(&self) -> BoundaryRule {
        self.rule
    }

    /// Scale for one metric
    pub fn scale(&self, metric: Metric) -> ClassifyResult<TierScale<'_, T>> {
        let boundaries = self.table.boundaries(metric)?;
        Ok(TierScale::from_parts(boundaries.as_slice(), self.tiers, self.rule))
    }

    /// Tier `value` against `metric`'s boundaries
    pub fn tier(&self, value: f64, metric: Metric) -> ClassifyResult<Tier<T>> {
        let tier = self.scale(metric)?.classify(value);
        log_debug!("{}: {}={} -> {}", self.name, metric, value, tier.label());
        Ok(tier)
    }
}

impl TierScheme<Severity> {
    /// Four-tier dashboard scheme: Safe/Moderate/Warning/Hazard, per metric
    pub fn fine() -> Self {
        Self::fine_with(ThresholdTable::default())
    }

    /// Fine scheme over a caller-supplied table; rows are already ascending
    /// however the table was built
    pub fn fine_with(table: ThresholdTable) -> Self {
        Self { name: "fine", table, tiers: &SEVERITY_TIERS, rule: BoundaryRule::UpperInclusive }
    }
}

impl TierScheme<AlertLevel> {
    /// Window guidance scheme: Normal/Moderate/Warning/Critical, at-or-above
    pub fn guidance() -> Self {
        Self::guidance_with(ThresholdTable::default())
    }

    /// Guidance scheme over a caller-supplied table
    pub fn guidance_with(table: ThresholdTable) -> Self {
        Self { name: "guidance", table, tiers: &ALERT_TIERS, rule: BoundaryRule::LowerInclusive }
    }
}

impl TierScheme<RiskLevel> {
    /// Coarse ambient scheme: Low/Moderate/High/Very High on particulate
    pub fn coarse() -> Self {
        Self {
            name: "coarse",
            table: ThresholdTable::ambient(),
            tiers: &AMBIENT_TIERS,
            rule: BoundaryRule::UpperInclusive,
        }
    }

    /// Ingestion point scheme: one point per boundary strictly exceeded
    pub fn ingestion() -> Self {
        Self {
            name: "ingestion",
            table: ThresholdTable::ingestion(),
            tiers: &INGEST_TIERS,
            rule: BoundaryRule::UpperInclusive,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_tables_are_valid() {
        assert!(ThresholdTable::default().validate().is_ok());
        assert!(ThresholdTable::ingestion().validate().is_ok());
        assert!(ThresholdTable::ambient().validate().is_ok());
    }

    #[test]
    fn lookup_returns_three_boundaries() {
        let table = ThresholdTable::default();
        assert_eq!(table.boundaries(Metric::Dust).unwrap().as_tuple(), (500.0, 1000.0, 1500.0));
        assert_eq!(table.boundaries_for("eco2").unwrap().hazard(), 2000.0);
    }

    #[test]
    fn unconfigured_metric_is_unknown() {
        let table = ThresholdTable::default();
        assert_eq!(
            table.boundaries(Metric::Pm10),
            Err(ClassifyError::unknown_metric("pm10"))
        );
        assert!(matches!(
            table.boundaries_for("humidity"),
            Err(ClassifyError::UnknownMetric { .. })
        ));
    }

    #[test]
    fn json_table_must_ascend() {
        let err = ThresholdTable::from_json(r#"{"dust": [100.0, 50.0, 150.0]}"#);
        assert!(matches!(err, Err(ClassifyError::InvalidBoundaries { .. })));

        let err = ThresholdTable::from_json(r#"{"humidity": [1.0, 2.0, 3.0]}"#);
        assert!(matches!(err, Err(ClassifyError::Payload(_))));
    }

    #[test]
    fn plain_serde_rejects_descending_rows() {
        let err = serde_json::from_str::<Boundaries>("[3.0, 2.0, 1.0]");
        assert!(err.is_err());

        let err = serde_json::from_str::<ThresholdTable>(
            r#"{"dust": [1500.0, 1000.0, 500.0], "temp": [25.0, 30.0, 35.0]}"#,
        );
        assert!(err.unwrap_err().to_string().contains("strictly ascend"));

        let ok = serde_json::from_str::<ThresholdTable>(r#"{"dust": [500.0, 1000.0, 1500.0]}"#).unwrap();
        let fine = TierScheme::fine_with(ok);
        assert_eq!(fine.tier(1200.0, Metric::Dust).unwrap().tier, Severity::Warning);
    }

    #[test]
    fn table_round_trips_through_json() {
        let table = ThresholdTable::default();
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(ThresholdTable::from_json(&json).unwrap(), table);
    }

    #[test]
    fn schemes_share_algorithm_but_differ_in_config() {
        let fine = TierScheme::fine();
        let coarse = TierScheme::coarse();

        assert_eq!(fine.tier(1600.0, Metric::Dust).unwrap().tier, Severity::Hazard);
        assert_eq!(coarse.tier(75.0, Metric::Dust).unwrap().tier, RiskLevel::High);
        assert_eq!(coarse.tier(75.0, Metric::Dust).unwrap().tier.name(), "High");
        assert!(coarse.tier(75.0, Metric::Tvoc).is_err());
    }

    #[test]
    fn custom_scheme_checks_tier_count() {
        const THREE: [Severity; 3] = [Severity::Safe, Severity::Warning, Severity::Hazard];
        let err = TierScheme::new("bad", ThresholdTable::default(), &THREE, BoundaryRule::UpperInclusive);
        assert!(err.is_err());
    }
}
