//! Quick web search.
//!
//! `g:` and `b:` prefixes pick Google or Baidu; anything else goes to the
//! configured default engine.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchEngine {
    #[default]
    Google,
    Baidu,
}

impl SearchEngine {
    fn base_url(self) -> &'static str {
        match self {
            SearchEngine::Google => "https://www.google.com/search?q=",
            SearchEngine::Baidu => "https://www.baidu.com/s?wd=",
        }
    }

    pub fn url_for(self, query: &str) -> String {
        format!("{}{}", self.base_url(), urlencoding::encode(query))
    }
}

impl FromStr for SearchEngine {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "google" => Ok(SearchEngine::Google),
            "baidu" => Ok(SearchEngine::Baidu),
            other => Err(format!("unknown search engine: {other}")),
        }
    }
}

/// Search URL for a raw query box value, or `None` when it is blank.
pub fn search_url(raw: &str, default_engine: SearchEngine) -> Option<String> {
    let query = raw.trim();
    if query.is_empty() {
        return None;
    }
    let (engine, terms) = if let Some(rest) = query.strip_prefix("g:") {
        (SearchEngine::Google, rest)
    } else if let Some(rest) = query.strip_prefix("b:") {
        (SearchEngine::Baidu, rest)
    } else {
        (default_engine, query)
    };
    Some(engine.url_for(terms))
}
