//! Reshaping of upstream search results into the tool envelope.

use super::client::Fetched;
use super::model::{
    Admin1, Coordinates, CountryInfo, FeatureInfo, NormalizedPlace, SearchQuery, SearchResponse,
    SearchResult, UpstreamPlace,
};
use super::request::MAX_ROWS;

impl From<UpstreamPlace> for NormalizedPlace {
    fn from(place: UpstreamPlace) -> Self {
        Self {
            name: place.name,
            population: place.population,
            coordinates: Coordinates {
                latitude: place.lat,
                longitude: place.lng,
            },
            country: CountryInfo {
                name: place.country_name,
                code: place.country_code,
                id: place.country_id,
            },
            admin1: Admin1 {
                name: place.admin_name1,
                code: place.admin_code1,
            },
            feature: FeatureInfo {
                class: place.fcl,
                class_name: place.fcl_name,
                code: place.fcode,
                code_name: place.fcode_name,
            },
            geoname_id: place.geoname_id,
            toponym_name: place.toponym_name,
        }
    }
}

/// Build the search envelope.
///
/// An absent response yields `totalResults: 0` and an empty `results` list.
/// `totalResults` always carries the upstream count, even when `results` is
/// cut down to [`MAX_ROWS`].
pub fn normalize_search(query: SearchQuery, response: Fetched<SearchResponse>) -> SearchResult {
    let (total_results, results) = match response {
        Fetched::Present(response) => (
            response.total_results_count,
            response
                .geonames
                .into_iter()
                .take(MAX_ROWS)
                .map(NormalizedPlace::from)
                .collect(),
        ),
        Fetched::Absent => (0, Vec::new()),
    };

    SearchResult {
        query,
        total_results,
        results,
    }
}
