//! Upstream URL construction.

/// Maximum number of results requested from (and returned for) a search.
pub const MAX_ROWS: usize = 10;

const CREDENTIAL_PARAM: &str = "username=";

/// GeoNames endpoints used by the tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Search,
    Get,
}

impl Endpoint {
    /// Path segment appended to the base address.
    pub fn path(self) -> &'static str {
        match self {
            Self::Search => "searchJSON",
            Self::Get => "get",
        }
    }
}

/// Build an upstream URL.
///
/// Optional parameters come first, in the given order, and are dropped when
/// absent or empty. Fixed parameters follow and are always sent. Values are
/// form-encoded exactly once.
pub fn build_url(
    base: &str,
    endpoint: Endpoint,
    fixed: &[(&str, &str)],
    optional: &[(&str, Option<&str>)],
) -> String {
    let pairs: Vec<(&str, &str)> = optional
        .iter()
        .filter_map(|&(key, value)| value.filter(|v| !v.is_empty()).map(|v| (key, v)))
        .chain(fixed.iter().copied())
        .collect();

    // String pairs always serialize.
    let query = serde_urlencoded::to_string(&pairs).unwrap_or_default();

    format!(
        "{}/{}?{}",
        base.trim_end_matches('/'),
        endpoint.path(),
        query
    )
}

/// Replace the account name in a URL so it can be logged.
pub fn redact_credential(url: &str) -> String {
    let Some(start) = url
        .match_indices(CREDENTIAL_PARAM)
        .find(|(idx, _)| *idx == 0 || matches!(url.as_bytes()[idx - 1], b'?' | b'&'))
        .map(|(idx, _)| idx + CREDENTIAL_PARAM.len())
    else {
        return url.to_string();
    };

    let end = url[start..].find('&').map_or(url.len(), |i| start + i);
    format!("{}[REDACTED]{}", &url[..start], &url[end..])
}
