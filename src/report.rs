// NEO Report Generator
// Turns one NEO record and a reference date into a sectioned text assessment

use chrono::NaiveDate;
use serde::Serialize;

use crate::api_client::NeoObject;
use crate::classification::{
    ApproachRisk, CasualtyTier, EconomicDamage, HistoricalAnalogy, ImpactSetting, SizeRisk,
    RISK_ANALYSIS_CUTOFF_KM,
};
use crate::neo_record::{
    closest_approach, historical_approaches, upcoming_approaches, ApproachEvent, NeoProfile,
    APPROACH_LIST_LIMIT, UNKNOWN,
};
use crate::physics_engine::{ImpactEstimate, ASSUMED_IMPACT_VELOCITY, LUNAR_DISTANCE_KM};

const BANNER_WIDTH: usize = 80;
const RULE_WIDTH: usize = 40;

// =============================================================================
// SECTIONS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Section {
    Header,
    BasicInformation,
    PhysicalCharacteristics,
    HazardAssessment,
    OrbitalCharacteristics,
    CloseApproaches,
    RiskAnalysis,
    HypotheticalImpact,
    Consequences,
    HistoricalContext,
    AdditionalResources,
}

/// Every section in report order; `RiskAnalysis` is skipped when not applicable
pub const SECTION_ORDER: [Section; 11] = [
    Section::Header,
    Section::BasicInformation,
    Section::PhysicalCharacteristics,
    Section::HazardAssessment,
    Section::OrbitalCharacteristics,
    Section::CloseApproaches,
    Section::RiskAnalysis,
    Section::HypotheticalImpact,
    Section::Consequences,
    Section::HistoricalContext,
    Section::AdditionalResources,
];

impl Section {
    pub fn title(&self) -> &'static str {
        match self {
            Section::Header => "COMPREHENSIVE ASTEROID ASSESSMENT",
            Section::BasicInformation => "BASIC INFORMATION",
            Section::PhysicalCharacteristics => "PHYSICAL CHARACTERISTICS",
            Section::HazardAssessment => "HAZARD ASSESSMENT",
            Section::OrbitalCharacteristics => "ORBITAL CHARACTERISTICS",
            Section::CloseApproaches => "CLOSE APPROACH HISTORY & FUTURE",
            Section::RiskAnalysis => "RISK ANALYSIS",
            Section::HypotheticalImpact => "HYPOTHETICAL IMPACT ANALYSIS",
            Section::Consequences => "POTENTIAL CONSEQUENCES",
            Section::HistoricalContext => "HISTORICAL CONTEXT",
            Section::AdditionalResources => "ADDITIONAL RESOURCES",
        }
    }
}

// =============================================================================
// ANALYSIS
// =============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct CloseApproachSummary {
    pub total: usize,
    pub closest: Option<ApproachEvent>,
    /// Most recent first, at most five
    pub historical: Vec<ApproachEvent>,
    /// Count of every future approach, listed or not
    pub upcoming_total: usize,
    /// Source order, at most five
    pub upcoming: Vec<ApproachEvent>,
}

impl CloseApproachSummary {
    pub fn from_events(events: &[ApproachEvent], today: NaiveDate) -> Self {
        let upcoming = upcoming_approaches(events, today);

        Self {
            total: events.len(),
            closest: closest_approach(events).cloned(),
            historical: historical_approaches(events, today)
                .into_iter()
                .cloned()
                .collect(),
            upcoming_total: upcoming.len(),
            upcoming: upcoming
                .into_iter()
                .take(APPROACH_LIST_LIMIT)
                .cloned()
                .collect(),
        }
    }

    pub fn closest_distance_km(&self) -> Option<f64> {
        self.closest.as_ref().and_then(|e| e.miss_distance_km)
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct RiskAssessment {
    pub size_risk: SizeRisk,
    pub approach_risk: ApproachRisk,
}

/// Everything the report shows, resolved and derived from one record
#[derive(Debug, Clone, Serialize)]
pub struct NeoAnalysis {
    pub reference_date: NaiveDate,
    pub profile: NeoProfile,
    pub average_diameter_m: f64,
    pub close_approaches: CloseApproachSummary,
    pub risk: Option<RiskAssessment>,
    pub impact: ImpactEstimate,
    pub casualties: CasualtyTier,
    pub economic_damage: EconomicDamage,
    pub historical_analogy: HistoricalAnalogy,
}

/// Derive the full analysis. The input record is only read.
pub fn analyze(neo: &NeoObject, today: NaiveDate) -> NeoAnalysis {
    let profile = NeoProfile::from_object(neo);
    let average_diameter_m = profile.average_diameter_m();
    let close_approaches = CloseApproachSummary::from_events(&profile.approaches, today);

    let risk = close_approaches
        .closest_distance_km()
        .filter(|d| *d < RISK_ANALYSIS_CUTOFF_KM)
        .map(|distance| RiskAssessment {
            size_risk: SizeRisk::from_diameter(average_diameter_m),
            approach_risk: ApproachRisk::from_distance(distance),
        });

    tracing::debug!(
        "Analyzed NEO {}: {} approaches ({} past listed, {} upcoming), risk section: {}",
        profile.reference_id,
        close_approaches.total,
        close_approaches.historical.len(),
        close_approaches.upcoming_total,
        risk.is_some()
    );

    NeoAnalysis {
        reference_date: today,
        average_diameter_m,
        close_approaches,
        risk,
        impact: ImpactEstimate::at_assumed_velocity(average_diameter_m),
        casualties: CasualtyTier::from_diameter(average_diameter_m),
        economic_damage: EconomicDamage::from_diameter(average_diameter_m),
        historical_analogy: HistoricalAnalogy::from_diameter(average_diameter_m),
        profile,
    }
}

/// Full text report for one record at the given reference date
pub fn generate_report(neo: &NeoObject, today: NaiveDate) -> String {
    analyze(neo, today).render()
}

// =============================================================================
// RENDERING
// =============================================================================

impl NeoAnalysis {
    /// Sections present in this report, in order
    pub fn sections(&self) -> Vec<Section> {
        SECTION_ORDER
            .iter()
            .copied()
            .filter(|s| *s != Section::RiskAnalysis || self.risk.is_some())
            .collect()
    }

    pub fn render(&self) -> String {
        let mut lines = Vec::new();
        for section in self.sections() {
            self.render_section(section, &mut lines);
        }
        lines.push(String::new());
        lines.push("=".repeat(BANNER_WIDTH));
        lines.join("\n")
    }

    fn render_section(&self, section: Section, lines: &mut Vec<String>) {
        if section != Section::Header {
            lines.push(String::new());
            lines.push(section.title().to_string());
            lines.push("-".repeat(RULE_WIDTH));
        }

        let p = &self.profile;
        let o = &p.orbital;
        match section {
            Section::Header => {
                lines.push("=".repeat(BANNER_WIDTH));
                lines.push(format!("{}: {}", section.title(), p.name));
                lines.push("=".repeat(BANNER_WIDTH));
            }
            Section::BasicInformation => {
                lines.push(format!("NASA Reference ID: {}", p.reference_id));
                lines.push(format!("Full Name: {}", p.name));
                lines.push(format!("Designation: {}", p.designation));
                lines.push(format!("Discovery: First observed {}", o.first_observation_date));
                lines.push(format!("Last observed: {}", o.last_observation_date));
                lines.push(format!("Data arc: {} days", o.data_arc_in_days));
                lines.push(format!("Observations used: {}", o.observations_used));
            }
            Section::PhysicalCharacteristics => {
                lines.push(format!(
                    "Estimated diameter: {:.1} - {:.1} meters",
                    p.diameter_min_m, p.diameter_max_m
                ));
                lines.push(format!("Average diameter: {:.1} meters", self.average_diameter_m));
                lines.push(format!(
                    "Absolute magnitude (H): {}",
                    p.absolute_magnitude_h
                        .map(|h| h.to_string())
                        .unwrap_or_else(|| UNKNOWN.to_string())
                ));
                lines.push(format!(
                    "Estimated mass: {} kg",
                    format_scientific(self.impact.mass_kg)
                ));
            }
            Section::HazardAssessment => {
                let flag = if p.is_potentially_hazardous { "YES" } else { "NO" };
                lines.push(format!("Potentially Hazardous Asteroid (PHA): {}", flag));
                if p.is_potentially_hazardous {
                    lines.push("WARNING: This object meets NASA criteria for enhanced monitoring:".to_string());
                    lines.push("  - Approaches within 7.5 million km of Earth".to_string());
                    lines.push("  - Estimated diameter > 140 meters".to_string());
                }
            }
            Section::OrbitalCharacteristics => {
                lines.push(format!("Semi-major axis: {} AU", o.semi_major_axis));
                lines.push(format!("Eccentricity: {}", o.eccentricity));
                lines.push(format!("Inclination: {}°", o.inclination));
                lines.push(format!("Orbital period: {} days", o.orbital_period));
                lines.push(format!("Perihelion distance: {} AU", o.perihelion_distance));
                lines.push(format!("Aphelion distance: {} AU", o.aphelion_distance));
                lines.push(format!(
                    "Orbit class: {} - {}",
                    o.orbit_class_type, o.orbit_class_description
                ));
            }
            Section::CloseApproaches => self.render_close_approaches(lines),
            Section::RiskAnalysis => {
                if let Some(risk) = &self.risk {
                    lines.push(format!("Size-based risk: {}", risk.size_risk.label()));
                    lines.push(format!("Approach risk: {}", risk.approach_risk.label()));
                }
            }
            Section::HypotheticalImpact => {
                let impact = &self.impact;
                lines.push("NOTE: This is a theoretical analysis for educational purposes".to_string());
                lines.push(format!(
                    "Assumed impact velocity: {:.0} km/s (typical)",
                    ASSUMED_IMPACT_VELOCITY / 1000.0
                ));
                lines.push(format!(
                    "Kinetic energy: {} Joules",
                    format_scientific(impact.kinetic_energy_j)
                ));
                lines.push(format!(
                    "TNT equivalent: {} kg ({:.1} megatons)",
                    format_scientific(impact.tnt_kg),
                    impact.tnt_megatons()
                ));
                lines.push(format!(
                    "Estimated crater diameter: {:.0} meters",
                    impact.crater_diameter_m
                ));
                lines.push(format!(
                    "Equivalent earthquake magnitude: {:.1}",
                    impact.seismic_magnitude
                ));
            }
            Section::Consequences => {
                lines.push(format!(
                    "Urban impact casualties: {}",
                    self.casualties.estimate(ImpactSetting::Urban)
                ));
                lines.push(format!(
                    "Rural impact casualties: {}",
                    self.casualties.estimate(ImpactSetting::Rural)
                ));
                lines.push(format!(
                    "Economic damage estimate: {}",
                    self.economic_damage.label()
                ));
            }
            Section::HistoricalContext => {
                lines.push(self.historical_analogy.comparison().to_string());
                lines.push(self.historical_analogy.effects().to_string());
            }
            Section::AdditionalResources => {
                lines.push(format!("NASA JPL Database: {}", p.nasa_jpl_url));
                if p.is_sentry_object {
                    lines.push("NOTICE: This object is on NASA's Sentry risk assessment system".to_string());
                }
                lines.push(String::new());
                lines.push(format!("Orbit uncertainty: {}", o.orbit_uncertainty));
                lines.push(format!(
                    "Minimum orbit intersection distance: {} AU",
                    o.minimum_orbit_intersection
                ));
            }
        }
    }

    fn render_close_approaches(&self, lines: &mut Vec<String>) {
        let ca = &self.close_approaches;
        lines.push(format!("Total recorded close approaches: {}", ca.total));
        if ca.total == 0 {
            return;
        }

        lines.push(format!("Current Reference Date: {} (UTC)", self.reference_date));
        match ca.closest_distance_km() {
            Some(distance) => {
                let date = ca
                    .closest
                    .as_ref()
                    .map(|e| e.date_label.as_str())
                    .unwrap_or(UNKNOWN);
                lines.push(format!("Closest recorded approach: {}", date));
                lines.push(format!(
                    "Closest distance: {} km ({:.2} lunar distances)",
                    format_thousands(distance),
                    distance / LUNAR_DISTANCE_KM
                ));
            }
            None => {
                lines.push(format!("Closest recorded approach: {}", UNKNOWN));
                lines.push(format!("Closest distance: {}", UNKNOWN));
            }
        }

        if !ca.historical.is_empty() {
            lines.push(String::new());
            lines.push(format!("Last {} Historical Approaches:", APPROACH_LIST_LIMIT));
            lines.extend(ca.historical.iter().map(approach_line));
        }

        if ca.upcoming_total > 0 {
            lines.push(String::new());
            lines.push(format!("Upcoming approaches: {}", ca.upcoming_total));
            lines.extend(ca.upcoming.iter().map(approach_line));
        }
    }
}

fn approach_line(event: &ApproachEvent) -> String {
    let distance = event
        .miss_distance_km
        .map(format_thousands)
        .unwrap_or_else(|| UNKNOWN.to_string());
    format!(
        "  {}: {} km, {} km/s",
        event.date_label, distance, event.velocity_km_s
    )
}

// =============================================================================
// NUMBER FORMATTING
// =============================================================================

/// Two-decimal scientific notation with a signed, two-digit exponent (`1.35e+11`)
pub fn format_scientific(value: f64) -> String {
    let raw = format!("{:.2e}", value);
    match raw.split_once('e') {
        Some((mantissa, exponent)) => {
            let exp: i32 = exponent.parse().unwrap_or(0);
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", mantissa, sign, exp.abs())
        }
        None => raw,
    }
}

/// Rounded to a whole number with comma thousands separators (`1,234,568`)
pub fn format_thousands(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let rounded = format!("{:.0}", value.abs());
    let mut grouped = String::with_capacity(rounded.len() + rounded.len() / 3);
    for (i, ch) in rounded.chars().enumerate() {
        if i > 0 && (rounded.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0.0 && rounded != "0" {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api_client::{
        CloseApproachData, DiameterRange, EstimatedDiameter, MissDistance,
    };

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn approach(date: &str, km: &str) -> CloseApproachData {
        CloseApproachData {
            close_approach_date: Some(date.to_string()),
            miss_distance: Some(MissDistance {
                kilometers: Some(serde_json::json!(km)),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    fn neo(min: f64, max: f64, hazardous: bool, approaches: Vec<CloseApproachData>) -> NeoObject {
        NeoObject {
            neo_reference_id: Some("3542519".to_string()),
            name: Some("(2010 PK9)".to_string()),
            estimated_diameter: Some(EstimatedDiameter {
                meters: Some(DiameterRange {
                    estimated_diameter_min: min,
                    estimated_diameter_max: max,
                }),
                ..Default::default()
            }),
            is_potentially_hazardous_asteroid: Some(hazardous),
            close_approach_data: Some(approaches),
            ..Default::default()
        }
    }

    fn title_positions(report: &str) -> Vec<(Section, usize)> {
        SECTION_ORDER
            .iter()
            .filter_map(|s| report.find(s.title()).map(|pos| (*s, pos)))
            .collect()
    }

    #[test]
    fn test_format_scientific() {
        assert_eq!(format_scientific(1.346e11), "1.35e+11");
        assert_eq!(format_scientific(0.0), "0.00e+00");
        assert_eq!(format_scientific(2.5e-5), "2.50e-05");
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0.0), "0");
        assert_eq!(format_thousands(999.4), "999");
        assert_eq!(format_thousands(1000.0), "1,000");
        assert_eq!(format_thousands(47112732.928), "47,112,733");
        assert_eq!(format_thousands(-1234.0), "-1,234");
    }

    #[test]
    fn test_sections_in_order_with_risk() {
        let record = neo(300.0, 400.0, true, vec![approach("2029-04-13", "50000")]);
        let analysis = analyze(&record, day("2024-01-01"));
        assert_eq!(analysis.sections(), SECTION_ORDER.to_vec());

        let report = analysis.render();
        let positions = title_positions(&report);
        assert_eq!(positions.len(), SECTION_ORDER.len());
        assert!(positions.windows(2).all(|w| w[0].1 < w[1].1));
        assert!(report.starts_with(&"=".repeat(80)));
        assert!(report.ends_with(&"=".repeat(80)));
    }

    #[test]
    fn test_end_to_end_hazardous_record() {
        let record = neo(300.0, 400.0, true, vec![approach("2029-04-13", "50000")]);
        let analysis = analyze(&record, day("2024-01-01"));

        assert_eq!(analysis.average_diameter_m, 350.0);
        let expected_mass = crate::physics_engine::mass(350.0);
        assert!((analysis.impact.mass_kg - expected_mass).abs() / expected_mass < 1e-12);
        let risk = analysis.risk.unwrap();
        assert_eq!(risk.size_risk, SizeRisk::High);
        assert_eq!(risk.approach_risk, ApproachRisk::Critical);

        let report = analysis.render();
        assert!(report.contains("Potentially Hazardous Asteroid (PHA): YES"));
        assert!(report.contains("enhanced monitoring"));
        assert!(report.contains("Size-based risk: High"));
        assert!(report.contains("Approach risk: CRITICAL"));
        assert!(report.contains("Closest distance: 50,000 km (0.13 lunar distances)"));
        assert!(report.contains("Upcoming approaches: 1"));
    }

    #[test]
    fn test_empty_approaches_omit_risk() {
        let record = neo(10.0, 20.0, false, Vec::new());
        let analysis = analyze(&record, day("2024-01-01"));
        assert!(analysis.risk.is_none());
        assert!(!analysis.sections().contains(&Section::RiskAnalysis));

        let report = analysis.render();
        assert!(report.contains("Total recorded close approaches: 0"));
        assert!(!report.contains("RISK ANALYSIS"));
        assert!(!report.contains("Size-based risk"));
        assert!(!report.contains("enhanced monitoring"));
    }

    #[test]
    fn test_distant_approach_omits_risk() {
        let record = neo(10.0, 20.0, false, vec![approach("2020-01-01", "10000000")]);
        let report = generate_report(&record, day("2024-01-01"));
        assert!(report.contains("Closest distance: 10,000,000 km"));
        assert!(!report.contains("RISK ANALYSIS"));
    }

    #[test]
    fn test_unparseable_distances_have_no_closest() {
        let record = neo(10.0, 20.0, false, vec![approach("2020-01-01", "far")]);
        let analysis = analyze(&record, day("2024-01-01"));
        assert!(analysis.close_approaches.closest.is_none());
        assert!(analysis.risk.is_none());

        let report = analysis.render();
        assert!(report.contains("Total recorded close approaches: 1"));
        assert!(report.contains("Closest distance: Unknown"));
        assert!(report.contains("  2020-01-01: Unknown km, N/A km/s"));
    }

    #[test]
    fn test_historical_and_upcoming_listing() {
        let record = neo(
            10.0,
            20.0,
            false,
            vec![
                approach("2020-01-01", "9000000"),
                approach("2023-06-15", "8000000"),
                approach("invalid", "5000000"),
                approach("2030-01-01", "6000000"),
            ],
        );
        let analysis = analyze(&record, day("2024-01-01"));
        let ca = &analysis.close_approaches;
        assert_eq!(ca.total, 4);
        let past: Vec<_> = ca.historical.iter().map(|e| e.date_label.as_str()).collect();
        assert_eq!(past, vec!["2023-06-15", "2020-01-01"]);
        assert_eq!(ca.upcoming_total, 1);
        // The invalid-dated event is still eligible as closest by distance
        assert_eq!(ca.closest_distance_km(), Some(5000000.0));
        assert_eq!(ca.closest.as_ref().unwrap().date_label, "invalid");

        let report = analysis.render();
        let recent = report.find("  2023-06-15:").unwrap();
        let older = report.find("  2020-01-01:").unwrap();
        assert!(recent < older);
        assert!(report.contains("Current Reference Date: 2024-01-01 (UTC)"));
    }

    #[test]
    fn test_upcoming_lists_at_most_five() {
        let approaches = (1..=7)
            .map(|i| approach(&format!("{}-01-01", 2030 + i), "9000000"))
            .collect();
        let analysis = analyze(&neo(10.0, 20.0, false, approaches), day("2024-01-01"));
        assert_eq!(analysis.close_approaches.upcoming_total, 7);
        assert_eq!(analysis.close_approaches.upcoming.len(), 5);
        assert_eq!(analysis.close_approaches.upcoming[0].date_label, "2031-01-01");
    }

    #[test]
    fn test_upcoming_lists_first_five_in_source_order() {
        let dates = [
            "2035-01-01", "2031-01-01", "2033-01-01", "2039-01-01", "2037-01-01", "2025-01-01",
            "2026-01-01",
        ];
        let approaches = dates.iter().map(|d| approach(d, "9000000")).collect();
        let analysis = analyze(&neo(10.0, 20.0, false, approaches), day("2024-01-01"));

        let listed: Vec<_> = analysis
            .close_approaches
            .upcoming
            .iter()
            .map(|e| e.date_label.as_str())
            .collect();
        assert_eq!(listed, dates[..5].to_vec());
        assert_eq!(analysis.close_approaches.upcoming_total, 7);

        let report = analysis.render();
        let first = report.find("  2035-01-01:").unwrap();
        let second = report.find("  2031-01-01:").unwrap();
        assert!(first < second);
        assert!(!report.contains("  2025-01-01:"));
    }

    #[test]
    fn test_zero_diameter_record_lands_in_lowest_tiers() {
        let analysis = analyze(&NeoObject::default(), day("2024-01-01"));
        assert_eq!(analysis.average_diameter_m, 0.0);
        assert_eq!(analysis.impact.kinetic_energy_j, 0.0);
        assert_eq!(analysis.casualties, CasualtyTier::Airburst);
        assert_eq!(analysis.economic_damage, EconomicDamage::Minor);
        assert_eq!(analysis.historical_analogy, HistoricalAnalogy::Chelyabinsk);

        let report = analysis.render();
        assert!(report.contains("COMPREHENSIVE ASTEROID ASSESSMENT: Unknown"));
        assert!(report.contains("Equivalent earthquake magnitude: 0.0"));
        assert!(report.contains("Semi-major axis: Unknown AU"));
    }

    #[test]
    fn test_sentry_notice() {
        let mut record = neo(10.0, 20.0, false, Vec::new());
        record.is_sentry_object = Some(true);
        let report = generate_report(&record, day("2024-01-01"));
        assert!(report.contains("Sentry risk assessment system"));
    }

    #[test]
    fn test_report_is_deterministic() {
        let record = neo(300.0, 400.0, true, vec![approach("2029-04-13", "50000")]);
        let today = day("2024-01-01");
        assert_eq!(generate_report(&record, today), generate_report(&record, today));
    }
}
