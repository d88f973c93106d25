// NEO Record - Resolved projection of a raw NeoWs record
// All defaults are applied here, once, so formatting never has to guess.

use chrono::NaiveDate;
use serde::Serialize;

use crate::api_client::{CloseApproachData, NeoObject, OrbitalData};

/// Placeholder shown for any absent textual field
pub const UNKNOWN: &str = "Unknown";

/// Placeholder for absent identifiers and links
pub const NOT_AVAILABLE: &str = "N/A";

/// Maximum number of past or future approaches listed
pub const APPROACH_LIST_LIMIT: usize = 5;

const APPROACH_DATE_FORMAT: &str = "%Y-%m-%d";

// =============================================================================
// APPROACH EVENTS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApproachEvent {
    /// Calendar date, `None` when the source string is missing or malformed
    pub date: Option<NaiveDate>,
    /// Date as given by the catalog
    pub date_label: String,
    /// Miss distance in kilometers, `None` when missing or non-numeric
    pub miss_distance_km: Option<f64>,
    /// Relative velocity (km/s) as given by the catalog
    pub velocity_km_s: String,
}

impl ApproachEvent {
    pub fn from_raw(raw: &CloseApproachData) -> Self {
        let date_text = raw.close_approach_date.as_deref();

        Self {
            date: date_text.and_then(parse_approach_date),
            date_label: date_text.unwrap_or(UNKNOWN).to_string(),
            miss_distance_km: raw
                .miss_distance
                .as_ref()
                .and_then(|m| m.kilometers.as_ref())
                .and_then(number_from_json)
                .filter(|d| !d.is_nan()),
            velocity_km_s: json_text_or(
                raw.relative_velocity
                    .as_ref()
                    .and_then(|v| v.kilometers_per_second.as_ref()),
                NOT_AVAILABLE,
            ),
        }
    }
}

/// Numeric value of a JSON number or numeric string
pub fn number_from_json(value: &serde_json::Value) -> Option<f64> {
    match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

pub fn parse_approach_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), APPROACH_DATE_FORMAT).ok()
}

/// Event with the smallest miss distance. Events without a distance are
/// never chosen; ties keep the earliest event in list order.
pub fn closest_approach(events: &[ApproachEvent]) -> Option<&ApproachEvent> {
    let mut best: Option<(&ApproachEvent, f64)> = None;
    for event in events {
        let Some(distance) = event.miss_distance_km else {
            continue;
        };
        match best {
            Some((_, current)) if distance >= current => {}
            _ => best = Some((event, distance)),
        }
    }
    best.map(|(event, _)| event)
}

/// Up to five events dated strictly before `today`, most recent first
pub fn historical_approaches(events: &[ApproachEvent], today: NaiveDate) -> Vec<&ApproachEvent> {
    let mut past: Vec<&ApproachEvent> = events
        .iter()
        .filter(|e| e.date.is_some_and(|d| d < today))
        .collect();
    // Stable sort keeps source order among events on the same day
    past.sort_by(|a, b| b.date.cmp(&a.date));
    past.truncate(APPROACH_LIST_LIMIT);
    past
}

/// All events dated strictly after `today`, in source order
pub fn upcoming_approaches(events: &[ApproachEvent], today: NaiveDate) -> Vec<&ApproachEvent> {
    events
        .iter()
        .filter(|e| e.date.is_some_and(|d| d > today))
        .collect()
}

// =============================================================================
// ORBITAL SUMMARY
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrbitalSummary {
    pub first_observation_date: String,
    pub last_observation_date: String,
    pub data_arc_in_days: String,
    pub observations_used: String,
    pub semi_major_axis: String,
    pub eccentricity: String,
    pub inclination: String,
    pub orbital_period: String,
    pub perihelion_distance: String,
    pub aphelion_distance: String,
    pub orbit_class_type: String,
    pub orbit_class_description: String,
    pub orbit_uncertainty: String,
    pub minimum_orbit_intersection: String,
}

fn text_or_unknown(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| UNKNOWN.to_string())
}

fn json_text_or(value: Option<&serde_json::Value>, fallback: &str) -> String {
    match value {
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(serde_json::Value::Null) | None => fallback.to_string(),
        Some(other) => other.to_string(),
    }
}

fn json_or_unknown(value: &Option<serde_json::Value>) -> String {
    json_text_or(value.as_ref(), UNKNOWN)
}

impl OrbitalSummary {
    pub fn from_raw(raw: Option<&OrbitalData>) -> Self {
        let empty = OrbitalData::default();
        let o = raw.unwrap_or(&empty);
        let class = o.orbit_class.clone().unwrap_or_default();

        Self {
            first_observation_date: text_or_unknown(&o.first_observation_date),
            last_observation_date: text_or_unknown(&o.last_observation_date),
            data_arc_in_days: json_or_unknown(&o.data_arc_in_days),
            observations_used: json_or_unknown(&o.observations_used),
            semi_major_axis: text_or_unknown(&o.semi_major_axis),
            eccentricity: text_or_unknown(&o.eccentricity),
            inclination: text_or_unknown(&o.inclination),
            orbital_period: text_or_unknown(&o.orbital_period),
            perihelion_distance: text_or_unknown(&o.perihelion_distance),
            aphelion_distance: text_or_unknown(&o.aphelion_distance),
            orbit_class_type: text_or_unknown(&class.orbit_class_type),
            orbit_class_description: text_or_unknown(&class.orbit_class_description),
            orbit_uncertainty: text_or_unknown(&o.orbit_uncertainty),
            minimum_orbit_intersection: text_or_unknown(&o.minimum_orbit_intersection),
        }
    }
}

// =============================================================================
// NEO PROFILE
// =============================================================================

/// Every field of a NEO record with its documented default applied
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NeoProfile {
    pub reference_id: String,
    pub name: String,
    pub designation: String,
    pub nasa_jpl_url: String,
    pub absolute_magnitude_h: Option<f64>,
    pub diameter_min_m: f64,
    pub diameter_max_m: f64,
    pub is_potentially_hazardous: bool,
    pub is_sentry_object: bool,
    pub orbital: OrbitalSummary,
    pub approaches: Vec<ApproachEvent>,
}

impl NeoProfile {
    /// Read-only projection of the raw record
    pub fn from_object(neo: &NeoObject) -> Self {
        let (diameter_min_m, diameter_max_m) = neo
            .estimated_diameter
            .as_ref()
            .and_then(|d| d.meters.as_ref())
            .map(|m| (m.estimated_diameter_min, m.estimated_diameter_max))
            .unwrap_or((0.0, 0.0));

        Self {
            reference_id: neo
                .neo_reference_id
                .clone()
                .or_else(|| neo.id.clone())
                .unwrap_or_else(|| UNKNOWN.to_string()),
            name: text_or_unknown(&neo.name),
            designation: neo
                .designation
                .clone()
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            nasa_jpl_url: neo
                .nasa_jpl_url
                .clone()
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            absolute_magnitude_h: neo.absolute_magnitude_h,
            diameter_min_m,
            diameter_max_m,
            is_potentially_hazardous: neo.is_potentially_hazardous_asteroid.unwrap_or(false),
            is_sentry_object: neo.is_sentry_object.unwrap_or(false),
            orbital: OrbitalSummary::from_raw(neo.orbital_data.as_ref()),
            approaches: neo
                .approaches()
                .iter()
                .map(ApproachEvent::from_raw)
                .collect(),
        }
    }

    pub fn average_diameter_m(&self) -> f64 {
        (self.diameter_min_m + self.diameter_max_m) / 2.0
    }
}

// =============================================================================
// TESTS
// =============================================================================
