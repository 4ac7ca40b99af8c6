use std::collections::HashSet;

use serde::{Deserialize, Serialize};

pub const DEFAULT_QUERY: &str = "hottest tech news";
pub const DEFAULT_NUM_RESULTS: u32 = 8;
pub const MIN_NUM_RESULTS: u32 = 3;
pub const MAX_NUM_RESULTS: u32 = 12;

/// What the user typed into the form.
///
/// `new` behaves like the range control on the page and keeps
/// `num_results` inside `[MIN_NUM_RESULTS, MAX_NUM_RESULTS]`. The fields stay
/// public: the controller trusts whatever it is handed and never re-clamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryInput {
    pub query: String,
    pub num_results: u32,
}

impl QueryInput {
    pub fn new(query: impl Into<String>, num_results: u32) -> Self {
        Self {
            query: query.into(),
            num_results: clamp_num_results(num_results),
        }
    }

    /// Trimmed query, or `DEFAULT_QUERY` when nothing is left.
    pub fn effective_query(&self) -> String {
        let trimmed = self.query.trim();
        if trimmed.is_empty() {
            DEFAULT_QUERY.to_string()
        } else {
            trimmed.to_string()
        }
    }

    pub fn to_request(&self) -> SummarizeRequest {
        SummarizeRequest {
            query: self.effective_query(),
            num_results: self.num_results,
        }
    }
}

impl Default for QueryInput {
    fn default() -> Self {
        Self {
            query: DEFAULT_QUERY.to_string(),
            num_results: DEFAULT_NUM_RESULTS,
        }
    }
}

pub fn clamp_num_results(num_results: u32) -> u32 {
    num_results.clamp(MIN_NUM_RESULTS, MAX_NUM_RESULTS)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestState {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed,
}

/// One news item behind a source card. Field names follow the backend's JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub link: String,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub thumbnail_small: Option<String>,
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl Article {
    /// Render key for the card.
    pub fn key(&self) -> &str {
        &self.link
    }

    pub fn source_label(&self) -> &str {
        present(&self.source).unwrap_or("Unknown source")
    }

    pub fn date_label(&self) -> &str {
        present(&self.date).unwrap_or("Recently")
    }

    pub fn icon_url(&self) -> Option<&str> {
        present(&self.icon)
    }

    pub fn thumbnail_url(&self) -> Option<&str> {
        present(&self.thumbnail).or_else(|| present(&self.thumbnail_small))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResult {
    pub summary_text: String,
    pub articles: Vec<Article>,
}

impl SummaryResult {
    pub fn is_empty(&self) -> bool {
        self.summary_text.is_empty() && self.articles.is_empty()
    }

    /// Links that appear more than once. Cards are keyed by link, so these
    /// would collide.
    pub fn duplicate_links(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        for article in &self.articles {
            if !seen.insert(article.key()) && !duplicates.contains(&article.key()) {
                duplicates.push(article.key());
            }
        }
        duplicates
    }
}

/// JSON body of `POST /api/summarize`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarizeRequest {
    pub query: String,
    pub num_results: u32,
}

/// JSON body of a successful `POST /api/summarize`. Both fields may be
/// missing or `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarizeResponse {
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub articles: Option<Vec<Article>>,
}

impl From<SummarizeResponse> for SummaryResult {
    fn from(response: SummarizeResponse) -> Self {
        Self {
            summary_text: response.summary.unwrap_or_default(),
            articles: response.articles.unwrap_or_default(),
        }
    }
}
