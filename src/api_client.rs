// NASA NeoWs API Client
// Fetches Near-Earth Object records from NASA's API

use reqwest::StatusCode;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::config::Config;
use crate::error::FetchError;

// =============================================================================
// API RESPONSE TYPES
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedResponse {
    pub element_count: Option<i64>,
    pub near_earth_objects: BTreeMap<String, Vec<NeoObject>>,
}

/// One NEO record as served by `/neo/{id}`. Every field may be absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NeoObject {
    pub id: Option<String>,
    pub neo_reference_id: Option<String>,
    pub name: Option<String>,
    pub designation: Option<String>,
    pub nasa_jpl_url: Option<String>,
    pub absolute_magnitude_h: Option<f64>,
    pub estimated_diameter: Option<EstimatedDiameter>,
    pub is_potentially_hazardous_asteroid: Option<bool>,
    pub close_approach_data: Option<Vec<CloseApproachData>>,
    pub orbital_data: Option<OrbitalData>,
    pub is_sentry_object: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatedDiameter {
    pub kilometers: Option<DiameterRange>,
    pub meters: Option<DiameterRange>,
    pub miles: Option<DiameterRange>,
    pub feet: Option<DiameterRange>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DiameterRange {
    pub estimated_diameter_min: f64,
    pub estimated_diameter_max: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CloseApproachData {
    pub close_approach_date: Option<String>,
    pub close_approach_date_full: Option<String>,
    pub epoch_date_close_approach: Option<i64>,
    pub relative_velocity: Option<RelativeVelocity>,
    pub miss_distance: Option<MissDistance>,
    pub orbiting_body: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RelativeVelocity {
    // Number or numeric string, depending on the source
    pub kilometers_per_second: Option<serde_json::Value>,
    pub kilometers_per_hour: Option<String>,
    pub miles_per_hour: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MissDistance {
    pub astronomical: Option<String>,
    pub lunar: Option<String>,
    pub kilometers: Option<serde_json::Value>,
    pub miles: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitalData {
    pub orbit_id: Option<String>,
    pub orbit_determination_date: Option<String>,
    pub first_observation_date: Option<String>,
    pub last_observation_date: Option<String>,
    // Served as numbers today, but kept raw so a string never breaks parsing
    pub data_arc_in_days: Option<serde_json::Value>,
    pub observations_used: Option<serde_json::Value>,
    pub orbit_uncertainty: Option<String>,
    pub minimum_orbit_intersection: Option<String>,
    pub eccentricity: Option<String>,
    pub semi_major_axis: Option<String>,
    pub inclination: Option<String>,
    pub orbital_period: Option<String>,
    pub perihelion_distance: Option<String>,
    pub aphelion_distance: Option<String>,
    pub orbit_class: Option<OrbitClass>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitClass {
    pub orbit_class_type: Option<String>,
    pub orbit_class_description: Option<String>,
    pub orbit_class_range: Option<String>,
}

impl NeoObject {
    /// Parse a record that was already downloaded as JSON
    pub fn from_json(raw: &str) -> Result<Self, FetchError> {
        serde_json::from_str(raw).map_err(|e| FetchError::Decode(e.to_string()))
    }

    /// Close approaches; absent and `null` both read as empty
    pub fn approaches(&self) -> &[CloseApproachData] {
        self.close_approach_data.as_deref().unwrap_or_default()
    }
}

// =============================================================================
// API CLIENT
// =============================================================================

/// Map a non-success status to the caller-facing failure
pub fn classify_status(status: StatusCode, reference_id: &str) -> FetchError {
    if status == StatusCode::NOT_FOUND {
        FetchError::NotFound(reference_id.to_string())
    } else {
        FetchError::Http {
            status: status.as_u16(),
            message: status
                .canonical_reason()
                .unwrap_or("Unexpected status")
                .to_string(),
        }
    }
}

pub struct NeoWsClient {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl NeoWsClient {
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(FetchError::Connection)?;

        Ok(Self {
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
            client,
        })
    }

    /// Fetch a specific NEO by reference id
    pub async fn fetch_neo(&self, reference_id: &str) -> Result<NeoObject, FetchError> {
        let url = format!("{}/neo/{}", self.base_url, reference_id);
        tracing::info!("Fetching NEO {}", reference_id);

        self.get_json(&url, &[], reference_id).await
    }

    /// Fetch NEOs that approach Earth in a date range
    pub async fn fetch_feed(
        &self,
        start_date: &str,
        end_date: &str,
    ) -> Result<FeedResponse, FetchError> {
        let url = format!("{}/feed", self.base_url);
        tracing::info!("Fetching NEO feed {} .. {}", start_date, end_date);

        let range = format!("{}..{}", start_date, end_date);
        self.get_json(
            &url,
            &[("start_date", start_date), ("end_date", end_date)],
            &range,
        )
        .await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
        subject: &str,
    ) -> Result<T, FetchError> {
        let response = self
            .client
            .get(url)
            .query(query)
            .query(&[("api_key", self.api_key.as_str())])
            .send()
            .await
            .map_err(FetchError::Connection)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("NeoWs returned {} for {}", status, subject);
            return Err(classify_status(status, subject));
        }

        let body = response.text().await.map_err(FetchError::Connection)?;
        tracing::debug!("Received {} bytes for {}", body.len(), subject);

        serde_json::from_str(&body).map_err(|e| FetchError::Decode(e.to_string()))
    }
}

// =============================================================================
// TESTS
// =============================================================================
