//! Regions that publish a Google "Daily Search Trends" RSS feed.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    pub code: &'static str,
    pub name: &'static str,
}

const fn country(code: &'static str, name: &'static str) -> Country {
    Country { code, name }
}

pub const DEFAULT_GEO: &str = "US";

pub const COUNTRIES: [Country; 50] = [
    country("AR", "Argentina"),
    country("AU", "Australia"),
    country("AT", "Austria"),
    country("BE", "Belgium"),
    country("BR", "Brazil"),
    country("CA", "Canada"),
    country("CL", "Chile"),
    country("CO", "Colombia"),
    country("CZ", "Czechia"),
    country("DK", "Denmark"),
    country("EG", "Egypt"),
    country("FI", "Finland"),
    country("FR", "France"),
    country("DE", "Germany"),
    country("GR", "Greece"),
    country("HK", "Hong Kong"),
    country("HU", "Hungary"),
    country("IN", "India"),
    country("ID", "Indonesia"),
    country("IE", "Ireland"),
    country("IL", "Israel"),
    country("IT", "Italy"),
    country("JP", "Japan"),
    country("KE", "Kenya"),
    country("MY", "Malaysia"),
    country("MX", "Mexico"),
    country("NL", "Netherlands"),
    country("NZ", "New Zealand"),
    country("NG", "Nigeria"),
    country("NO", "Norway"),
    country("PE", "Peru"),
    country("PH", "Philippines"),
    country("PL", "Poland"),
    country("PT", "Portugal"),
    country("RO", "Romania"),
    country("RU", "Russia"),
    country("SA", "Saudi Arabia"),
    country("SG", "Singapore"),
    country("ZA", "South Africa"),
    country("KR", "South Korea"),
    country("ES", "Spain"),
    country("SE", "Sweden"),
    country("CH", "Switzerland"),
    country("TW", "Taiwan"),
    country("TH", "Thailand"),
    country("TR", "Turkey"),
    country("UA", "Ukraine"),
    country("GB", "United Kingdom"),
    country("US", "United States"),
    country("VN", "Vietnam"),
];

/// Display name for an already-normalized region code.
pub fn country_name(code: &str) -> Option<&'static str> {
    COUNTRIES
        .iter()
        .find(|entry| entry.code == code)
        .map(|entry| entry.name)
}

/// Uppercases the requested region, falling back to `fallback` when it is
/// missing or blank. Unknown codes are kept as-is.
pub fn normalize_geo(raw: Option<&str>, fallback: &str) -> String {
    match raw.map(str::trim) {
        Some(value) if !value.is_empty() => value.to_uppercase(),
        _ => fallback.to_uppercase(),
    }
}

pub fn display_name(code: &str) -> &str {
    country_name(code).unwrap_or(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn table_has_fifty_unique_codes() {
        let codes = COUNTRIES.iter().map(|entry| entry.code).collect::<BTreeSet<_>>();
        assert_eq!(codes.len(), 50);
        assert!(codes.iter().all(|code| code.len() == 2 && code.chars().all(|ch| ch.is_ascii_uppercase())));
    }

    #[test]
    fn normalize_geo_uppercases_and_defaults() {
        assert_eq!(normalize_geo(Some("de"), DEFAULT_GEO), "DE");
        assert_eq!(normalize_geo(Some(" gb "), DEFAULT_GEO), "GB");
        assert_eq!(normalize_geo(None, DEFAULT_GEO), "US");
        assert_eq!(normalize_geo(Some("   "), DEFAULT_GEO), "US");
        assert_eq!(normalize_geo(Some("xx"), DEFAULT_GEO), "XX");
    }

    #[test]
    fn display_name_falls_back_to_code() {
        assert_eq!(display_name("JP"), "Japan");
        assert_eq!(display_name("ZZ"), "ZZ");
        assert_eq!(country_name("jp"), None);
    }
}
