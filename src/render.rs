use askama::Template;

use crate::countries::{display_name, Country, COUNTRIES};
use crate::error::Result;
use crate::feed::TrendRecord;

#[derive(Debug, Clone, Template)]
#[template(path = "index.html")]
pub struct RenderContext {
    pub trends: Vec<TrendRecord>,
    pub current_geo: String,
    pub countries: &'static [Country],
    pub error: Option<String>,
}

impl RenderContext {
    pub fn success(current_geo: String, trends: Vec<TrendRecord>) -> Self {
        Self {
            trends,
            current_geo,
            countries: &COUNTRIES,
            error: None,
        }
    }

    /// Degraded page: no trends, the selector still works, and a message
    /// names the region that failed.
    pub fn failure(current_geo: String) -> Self {
        let error = unavailable_message(&current_geo);
        Self {
            trends: Vec::new(),
            current_geo,
            countries: &COUNTRIES,
            error: Some(error),
        }
    }

    pub fn is_selected(&self, code: &str) -> bool {
        self.current_geo == code
    }

    pub fn current_name(&self) -> &str {
        display_name(&self.current_geo)
    }

    pub fn to_html(&self) -> Result<String> {
        Ok(self.render()?)
    }
}

pub fn unavailable_message(geo: &str) -> String {
    format!(
        "Could not load trends for {}. (This region might not support Daily Trends RSS).",
        display_name(geo)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::NewsItem;

    fn sample_trend() -> TrendRecord {
        TrendRecord {
            title: Some("Rust <1.90> release".to_string()),
            traffic: Some("50K+".to_string()),
            pub_date: Some("Sat, 17 Oct 2026 04:00:00 -0700".to_string()),
            main_picture: Some("https://example.com/p.jpg".to_string()),
            description: None,
            news: vec![NewsItem {
                title: "Release notes".to_string(),
                url: "https://example.com/notes".to_string(),
                source: "Example Blog".to_string(),
                picture: None,
            }],
        }
    }

    #[test]
    fn unavailable_message_uses_country_name_or_code() {
        assert!(unavailable_message("DE").contains("Could not load trends for Germany."));
        assert!(unavailable_message("QQ").contains("Could not load trends for QQ."));
    }

    #[test]
    fn success_page_lists_trends_and_selects_geo() {
        let html = RenderContext::success("JP".to_string(), vec![sample_trend()])
            .to_html()
            .unwrap();
        assert!(html.contains("data-current-geo=\"JP\""));
        assert!(html.contains("<option value=\"JP\" selected>Japan</option>"));
        assert!(html.contains("<option value=\"US\">United States</option>"));
        assert!(html.contains("Rust &lt;1.90&gt; release"));
        assert!(html.contains("50K+"));
        assert!(html.contains("Example Blog"));
        assert!(!html.contains("class=\"error\""));
        assert!(!html.contains("class=\"empty\""));
    }

    #[test]
    fn failure_page_keeps_all_countries() {
        let context = RenderContext::failure("XX".to_string());
        assert!(context.trends.is_empty());
        let html = context.to_html().unwrap();
        assert!(html.contains("class=\"error\""));
        assert!(html.contains("Could not load trends for XX."));
        for country in COUNTRIES.iter() {
            assert!(html.contains(&format!("<option value=\"{}\"", country.code)));
        }
    }

    #[test]
    fn empty_success_page_shows_empty_state() {
        let html = RenderContext::success("US".to_string(), Vec::new()).to_html().unwrap();
        assert!(html.contains("class=\"empty\""));
        assert!(!html.contains("class=\"error\""));
    }
}
