// Risk Classification - Stepped threshold tables
// Each table is an ordered list of (exclusive upper bound, tier); the first bound
// the value is strictly below wins, otherwise the fallback tier applies.

use serde::Serialize;

/// Miss distance (km) under which the risk analysis section is produced
pub const RISK_ANALYSIS_CUTOFF_KM: f64 = 10_000_000.0;

/// First tier whose bound is strictly greater than `value`.
/// NaN never compares below a bound and therefore lands in `fallback`.
pub fn classify<T: Copy>(value: f64, tiers: &[(f64, T)], fallback: T) -> T {
    tiers
        .iter()
        .find(|(bound, _)| value < *bound)
        .map(|(_, tier)| *tier)
        .unwrap_or(fallback)
}

// =============================================================================
// SIZE RISK
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SizeRisk {
    Low,
    Moderate,
    High,
    Extreme,
}

const SIZE_RISK_TIERS: &[(f64, SizeRisk)] = &[
    (50.0, SizeRisk::Low),
    (140.0, SizeRisk::Moderate),
    (1000.0, SizeRisk::High),
];

impl SizeRisk {
    pub fn from_diameter(diameter_m: f64) -> Self {
        classify(diameter_m, SIZE_RISK_TIERS, SizeRisk::Extreme)
    }

    pub fn label(&self) -> &'static str {
        match self {
            SizeRisk::Low => "Low - Likely atmospheric breakup",
            SizeRisk::Moderate => "Moderate - Regional damage potential",
            SizeRisk::High => "High - Continental effects possible",
            SizeRisk::Extreme => "Extreme - Global catastrophe potential",
        }
    }
}

// =============================================================================
// APPROACH RISK
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ApproachRisk {
    Critical,
    High,
    Moderate,
    Low,
}

const APPROACH_RISK_TIERS: &[(f64, ApproachRisk)] = &[
    (100_000.0, ApproachRisk::Critical),
    (1_000_000.0, ApproachRisk::High),
    (7_500_000.0, ApproachRisk::Moderate),
];

impl ApproachRisk {
    pub fn from_distance(miss_distance_km: f64) -> Self {
        classify(miss_distance_km, APPROACH_RISK_TIERS, ApproachRisk::Low)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ApproachRisk::Critical => "CRITICAL - Extremely close approach",
            ApproachRisk::High => "HIGH - Close monitoring required",
            ApproachRisk::Moderate => "MODERATE - Within lunar distance",
            ApproachRisk::Low => "LOW - Safe distance",
        }
    }
}

// =============================================================================
// CONSEQUENCES
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ImpactSetting {
    Urban,
    Rural,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CasualtyTier {
    Airburst,
    Local,
    Regional,
    Catastrophic,
}

const CASUALTY_TIERS: &[(f64, CasualtyTier)] = &[
    (20.0, CasualtyTier::Airburst),
    (100.0, CasualtyTier::Local),
    (500.0, CasualtyTier::Regional),
];

impl CasualtyTier {
    pub fn from_diameter(diameter_m: f64) -> Self {
        classify(diameter_m, CASUALTY_TIERS, CasualtyTier::Catastrophic)
    }

    pub fn estimate(&self, setting: ImpactSetting) -> &'static str {
        match (self, setting) {
            (CasualtyTier::Airburst, ImpactSetting::Urban) => {
                "Hundreds to thousands (mostly injuries)"
            }
            (CasualtyTier::Airburst, ImpactSetting::Rural) => "Minimal",
            (CasualtyTier::Local, ImpactSetting::Urban) => "Thousands to tens of thousands",
            (CasualtyTier::Local, ImpactSetting::Rural) => "Hundreds to thousands",
            (CasualtyTier::Regional, ImpactSetting::Urban) => "Hundreds of thousands to millions",
            (CasualtyTier::Regional, ImpactSetting::Rural) => "Tens of thousands",
            (CasualtyTier::Catastrophic, ImpactSetting::Urban) => "Millions to tens of millions",
            (CasualtyTier::Catastrophic, ImpactSetting::Rural) => "Hundreds of thousands",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EconomicDamage {
    Minor,
    Significant,
    Severe,
    Civilizational,
}

const ECONOMIC_DAMAGE_TIERS: &[(f64, EconomicDamage)] = &[
    (50.0, EconomicDamage::Minor),
    (140.0, EconomicDamage::Significant),
    (500.0, EconomicDamage::Severe),
];

impl EconomicDamage {
    pub fn from_diameter(diameter_m: f64) -> Self {
        classify(diameter_m, ECONOMIC_DAMAGE_TIERS, EconomicDamage::Civilizational)
    }

    /// Damage range in billions of USD
    pub fn label(&self) -> &'static str {
        match self {
            EconomicDamage::Minor => "0.1 - 1 billion USD",
            EconomicDamage::Significant => "1 - 50 billion USD",
            EconomicDamage::Severe => "50 - 1,000 billion USD",
            EconomicDamage::Civilizational => "1,000+ billion USD (potential civilization impact)",
        }
    }
}

// =============================================================================
// HISTORICAL ANALOGY
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HistoricalAnalogy {
    Chelyabinsk,
    Tunguska,
    Barringer,
    BeyondRecord,
}

const HISTORICAL_TIERS: &[(f64, HistoricalAnalogy)] = &[
    (25.0, HistoricalAnalogy::Chelyabinsk),
    (80.0, HistoricalAnalogy::Tunguska),
    (200.0, HistoricalAnalogy::Barringer),
];

impl HistoricalAnalogy {
    pub fn from_diameter(diameter_m: f64) -> Self {
        classify(diameter_m, HISTORICAL_TIERS, HistoricalAnalogy::BeyondRecord)
    }

    pub fn comparison(&self) -> &'static str {
        match self {
            HistoricalAnalogy::Chelyabinsk => "Similar to: Chelyabinsk meteor (2013) - 20m diameter",
            HistoricalAnalogy::Tunguska => "Similar to: Tunguska event (1908) - ~50-60m diameter",
            HistoricalAnalogy::Barringer => {
                "Similar to: Barringer Crater impactor (~50,000 years ago) - ~50m diameter"
            }
            HistoricalAnalogy::BeyondRecord => "Larger than most historical impacts in human history",
        }
    }

    pub fn effects(&self) -> &'static str {
        match self {
            HistoricalAnalogy::Chelyabinsk => {
                "Effects: Atmospheric airburst, widespread window damage, ~1,500 injuries"
            }
            HistoricalAnalogy::Tunguska => {
                "Effects: Flattened 2,000 km² of forest, no direct casualties due to remote location"
            }
            HistoricalAnalogy::Barringer => "Effects: Created 1.2km wide crater in Arizona",
            HistoricalAnalogy::BeyondRecord => {
                "Would represent a significant global threat requiring international response"
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_is_strictly_less_than() {
        let tiers = [(10.0, 'a'), (20.0, 'b')];
        assert_eq!(classify(9.999, &tiers, 'z'), 'a');
        assert_eq!(classify(10.0, &tiers, 'z'), 'b');
        assert_eq!(classify(20.0, &tiers, 'z'), 'z');
        assert_eq!(classify(f64::NAN, &tiers, 'z'), 'z');
    }

    #[test]
    fn test_size_risk_boundaries() {
        assert_eq!(SizeRisk::from_diameter(0.0), SizeRisk::Low);
        assert_eq!(SizeRisk::from_diameter(49.9), SizeRisk::Low);
        assert_eq!(SizeRisk::from_diameter(50.0), SizeRisk::Moderate);
        assert_eq!(SizeRisk::from_diameter(139.999), SizeRisk::Moderate);
        assert_eq!(SizeRisk::from_diameter(140.0), SizeRisk::High);
        assert_eq!(SizeRisk::from_diameter(999.99), SizeRisk::High);
        assert_eq!(SizeRisk::from_diameter(1000.0), SizeRisk::Extreme);
        assert!(SizeRisk::from_diameter(350.0).label().starts_with("High"));
    }

    #[test]
    fn test_approach_risk_boundaries() {
        assert_eq!(ApproachRisk::from_distance(50_000.0), ApproachRisk::Critical);
        assert_eq!(ApproachRisk::from_distance(100_000.0), ApproachRisk::High);
        assert_eq!(ApproachRisk::from_distance(999_999.0), ApproachRisk::High);
        assert_eq!(ApproachRisk::from_distance(1_000_000.0), ApproachRisk::Moderate);
        assert_eq!(ApproachRisk::from_distance(7_500_000.0), ApproachRisk::Low);
        assert!(ApproachRisk::Critical.label().starts_with("CRITICAL"));
    }

    #[test]
    fn test_casualty_tiers() {
        assert_eq!(CasualtyTier::from_diameter(19.9), CasualtyTier::Airburst);
        assert_eq!(CasualtyTier::from_diameter(20.0), CasualtyTier::Local);
        assert_eq!(CasualtyTier::from_diameter(100.0), CasualtyTier::Regional);
        assert_eq!(CasualtyTier::from_diameter(500.0), CasualtyTier::Catastrophic);
        assert_eq!(CasualtyTier::Airburst.estimate(ImpactSetting::Rural), "Minimal");
        assert_eq!(
            CasualtyTier::Regional.estimate(ImpactSetting::Urban),
            "Hundreds of thousands to millions"
        );
    }

    #[test]
    fn test_economic_damage_tiers() {
        assert_eq!(EconomicDamage::from_diameter(0.0), EconomicDamage::Minor);
        assert_eq!(EconomicDamage::from_diameter(50.0), EconomicDamage::Significant);
        assert_eq!(EconomicDamage::from_diameter(140.0), EconomicDamage::Severe);
        assert_eq!(EconomicDamage::from_diameter(500.0), EconomicDamage::Civilizational);
    }

    #[test]
    fn test_historical_analogy_tiers() {
        assert_eq!(HistoricalAnalogy::from_diameter(24.0), HistoricalAnalogy::Chelyabinsk);
        assert_eq!(HistoricalAnalogy::from_diameter(25.0), HistoricalAnalogy::Tunguska);
        assert_eq!(HistoricalAnalogy::from_diameter(80.0), HistoricalAnalogy::Barringer);
        assert_eq!(HistoricalAnalogy::from_diameter(200.0), HistoricalAnalogy::BeyondRecord);
        assert!(HistoricalAnalogy::Tunguska.comparison().contains("Tunguska"));
    }
}
