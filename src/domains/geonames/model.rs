//! Data model for GeoNames queries, upstream records and result envelopes.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ============================================================================
// Queries
// ============================================================================

/// Parameters accepted by the `search-geonames` tool.
///
/// No field is required; an empty query still produces an upstream call
/// carrying only the fixed parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SearchQuery {
    #[schemars(description = "Search places where any field contains query term")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,

    #[schemars(description = "Search places where name contains query term")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[schemars(description = "Search places where name exactly matches query term")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_equals: Option<String>,

    #[schemars(description = "Search places where name starts with query term")]
    #[serde(
        rename = "name_startsWith",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub name_starts_with: Option<String>,

    #[schemars(description = "Filter results by country code (e.g., 'US')")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    #[schemars(description = "Bias results towards a specific country code (e.g., 'US')")]
    #[serde(
        rename = "countryBias",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub country_bias: Option<String>,

    #[schemars(description = "Filter results by continent code (e.g., 'EU')")]
    #[serde(
        rename = "continentCode",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub continent_code: Option<String>,
}

impl SearchQuery {
    /// Optional upstream parameters, in the order they are sent.
    pub fn optional_params(&self) -> [(&'static str, Option<&str>); 7] {
        [
            ("q", self.q.as_deref()),
            ("name", self.name.as_deref()),
            ("name_equals", self.name_equals.as_deref()),
            ("name_startsWith", self.name_starts_with.as_deref()),
            ("country", self.country.as_deref()),
            ("countryBias", self.country_bias.as_deref()),
            ("continentCode", self.continent_code.as_deref()),
        ]
    }
}

/// Parameters accepted by the `get-geoname` tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GetQuery {
    #[schemars(description = "The geoname id to search for")]
    #[serde(rename = "geonameId")]
    pub geoname_id: u64,
}

// ============================================================================
// Upstream records
// ============================================================================

/// Body of `searchJSON`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(rename = "totalResultsCount", default)]
    pub total_results_count: u64,

    #[serde(default)]
    pub geonames: Vec<UpstreamPlace>,
}

/// A place as GeoNames returns it in search results.
///
/// Only `geonameId` is guaranteed; oceans, for instance, have no country or
/// first-level division.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpstreamPlace {
    pub geoname_id: u64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub toponym_name: Option<String>,
    #[serde(default)]
    pub population: Option<u64>,
    #[serde(default)]
    pub lat: Option<String>,
    #[serde(default)]
    pub lng: Option<String>,
    #[serde(default)]
    pub country_name: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub country_id: Option<String>,
    #[serde(default)]
    pub admin_name1: Option<String>,
    #[serde(default)]
    pub admin_code1: Option<String>,
    #[serde(default)]
    pub fcl: Option<String>,
    #[serde(default)]
    pub fcl_name: Option<String>,
    #[serde(default)]
    pub fcode: Option<String>,
    #[serde(default)]
    pub fcode_name: Option<String>,
}

// ============================================================================
// Envelopes
// ============================================================================

/// Envelope returned by `search-geonames`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub query: SearchQuery,
    pub total_results: u64,
    pub results: Vec<NormalizedPlace>,
}

/// Simplified view of an [`UpstreamPlace`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedPlace {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub population: Option<u64>,
    pub coordinates: Coordinates,
    pub country: CountryInfo,
    pub admin1: Admin1,
    pub feature: FeatureInfo,
    pub geoname_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toponym_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Coordinates {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CountryInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Admin1 {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// Feature classification (class `P` = populated place, and so on).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_name: Option<String>,
}

/// Envelope returned by `get-geoname`.
///
/// `result` is the upstream record untouched, or `null` when the fetch failed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GetResult {
    pub query: GetResultQuery,
    pub result: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GetResultQuery {
    #[serde(rename = "geonameId")]
    pub geoname_id: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_query_accepts_tool_field_names() {
        let json = r#"{"name_equals": "Paris", "name_startsWith": "Par", "countryBias": "FR", "continentCode": "EU"}"#;
        let query: SearchQuery = serde_json::from_str(json).unwrap();
        assert_eq!(query.name_equals.as_deref(), Some("Paris"));
        assert_eq!(query.name_starts_with.as_deref(), Some("Par"));
        assert_eq!(query.country_bias.as_deref(), Some("FR"));
        assert_eq!(query.continent_code.as_deref(), Some("EU"));
        assert!(query.q.is_none());
    }

    #[test]
    fn test_search_query_echo_omits_absent_fields() {
        let query = SearchQuery {
            name: Some("london".to_string()),
            ..Default::default()
        };
        let value = serde_json::to_value(&query).unwrap();
        assert_eq!(value, serde_json::json!({ "name": "london" }));
    }

    #[test]
    fn test_get_query_requires_id() {
        assert!(serde_json::from_str::<GetQuery>("{}").is_err());
        let query: GetQuery = serde_json::from_str(r#"{"geonameId": 2643743}"#).unwrap();
        assert_eq!(query.geoname_id, 2643743);
    }

    #[test]
    fn test_upstream_place_tolerates_missing_fields() {
        let place: UpstreamPlace =
            serde_json::from_str(r#"{"geonameId": 3411923, "name": "Atlantic Ocean"}"#).unwrap();
        assert_eq!(place.geoname_id, 3411923);
        assert!(place.country_code.is_none());
        assert!(place.population.is_none());
    }
}
