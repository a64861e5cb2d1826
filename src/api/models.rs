use serde::Deserialize;

use super::errors::ApiError;

/// GNews caps `max` at 100 results per page.
pub const MAX_RESULTS: i64 = 100;

pub const CATEGORIES: [&str; 9] = [
    "general",
    "world",
    "nation",
    "business",
    "technology",
    "entertainment",
    "sports",
    "science",
    "health",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortBy {
    PublishedAt,
    Relevance,
}

impl SortBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::PublishedAt => "publishedAt",
            SortBy::Relevance => "relevance",
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    #[serde(default = "default_lang")]
    pub lang: String,
    pub country: Option<String>,
    #[serde(default = "default_max")]
    pub max: i64,
    #[serde(default = "default_sortby")]
    pub sortby: SortBy,
    #[serde(default = "default_page")]
    pub page: i64,
}

impl SearchParams {
    /// Validates and reshapes the raw query into the upstream parameter set.
    /// Unset optionals are left out entirely rather than sent empty.
    pub fn normalize(&self) -> Result<Vec<(String, String)>, ApiError> {
        let q = match &self.q {
            Some(q) if !q.trim().is_empty() => q.clone(),
            _ => {
                return Err(ApiError::Validation {
                    field: "q",
                    message: "Search query is required",
                });
            }
        };

        let mut params = vec![
            ("q".to_string(), q),
            ("lang".to_string(), self.lang.clone()),
            ("max".to_string(), self.max.min(MAX_RESULTS).to_string()),
            ("sortby".to_string(), self.sortby.as_str().to_string()),
            ("page".to_string(), self.page.to_string()),
        ];

        if let Some(country) = &self.country {
            if !country.is_empty() {
                params.push(("country".to_string(), country.clone()));
            }
        }

        Ok(params)
    }
}

#[derive(Debug, Deserialize)]
pub struct HeadlinesParams {
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default = "default_lang")]
    pub lang: String,
    #[serde(default = "default_country")]
    pub country: String,
    #[serde(default = "default_max")]
    pub max: i64,
    #[serde(default = "default_page")]
    pub page: i64,
}

impl HeadlinesParams {
    pub fn normalize(&self) -> Vec<(String, String)> {
        vec![
            ("category".to_string(), self.category.clone()),
            ("lang".to_string(), self.lang.clone()),
            ("country".to_string(), self.country.clone()),
            ("max".to_string(), self.max.min(MAX_RESULTS).to_string()),
            ("page".to_string(), self.page.to_string()),
        ]
    }
}

fn default_lang() -> String {
    "en".to_string()
}

fn default_country() -> String {
    "us".to_string()
}

fn default_category() -> String {
    "general".to_string()
}

fn default_max() -> i64 {
    MAX_RESULTS
}

fn default_sortby() -> SortBy {
    SortBy::PublishedAt
}

fn default_page() -> i64 {
    1
}
