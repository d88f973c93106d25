// Feed Summary - One line per NEO approaching in a date range

use serde::Serialize;

use crate::api_client::FeedResponse;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedEntry {
    pub date: String,
    pub name: String,
    pub hazardous: bool,
    pub max_diameter_km: Option<f64>,
}

/// Flatten the per-date map, dates ascending, source order within a date
pub fn summarize_feed(feed: &FeedResponse) -> Vec<FeedEntry> {
    feed.near_earth_objects
        .iter()
        .flat_map(|(date, neos)| {
            neos.iter().map(move |neo| FeedEntry {
                date: date.clone(),
                name: neo.name.clone().unwrap_or_else(|| "no name".to_string()),
                hazardous: neo.is_potentially_hazardous_asteroid.unwrap_or(false),
                max_diameter_km: neo
                    .estimated_diameter
                    .as_ref()
                    .and_then(|d| d.kilometers.as_ref())
                    .map(|k| k.estimated_diameter_max),
            })
        })
        .collect()
}

pub fn render_feed(feed: &FeedResponse, entries: &[FeedEntry]) -> String {
    let count = feed.element_count.unwrap_or(entries.len() as i64);
    let mut lines = vec![format!("Near-Earth objects in range: {}", count)];

    let mut current_date: Option<&str> = None;
    for entry in entries {
        if current_date != Some(entry.date.as_str()) {
            lines.push(String::new());
            lines.push(entry.date.clone());
            lines.push("-".repeat(entry.date.len()));
            current_date = Some(entry.date.as_str());
        }
        let size = entry
            .max_diameter_km
            .map(|km| km.to_string())
            .unwrap_or_else(|| "Unknown".to_string());
        lines.push(format!(
            "{} | Hazardous: {} | Max Size (km): {}",
            entry.name, entry.hazardous, size
        ));
    }

    lines.join("\n")
}
