use chrono::{NaiveDate, NaiveTime};
use reqwest::header;
use tracing::debug;

use crate::config::{QUESTIONS_URL, SEARCH_ADVANCED_URL, SITE, TAGS_PAGE_SIZE, TAGS_URL, USER_AGENT};
use crate::error::ApiError;
use crate::models::{
    ItemsPage, MostViewedParams, MostViewedQuestion, PopularTag, RecentQuestion, TagInfo,
    TagsParams,
};

/// Fetches a JSON document from a URL with query parameters. The two
/// pipelines go through this seam so tests can substitute a canned
/// response for the live API.
pub trait JsonFetch {
    fn get_json(
        &self,
        url: &str,
        params: &[(&str, String)],
    ) -> Result<serde_json::Value, ApiError>;
}

pub struct HttpClient {
    client: reqwest::blocking::Client,
}

impl HttpClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonFetch for HttpClient {
    fn get_json(
        &self,
        url: &str,
        params: &[(&str, String)],
    ) -> Result<serde_json::Value, ApiError> {
        let mut headers = header::HeaderMap::new();
        headers.insert("User-Agent", header::HeaderValue::from_static(USER_AGENT));

        debug!("GET {url}");
        let resp = self.client.get(url).headers(headers).query(params).send()?;
        if !resp.status().is_success() {
            return Err(ApiError::Status(resp.status()));
        }

        Ok(resp.json()?)
    }
}

/// Fetches the most-viewed questions created within the date range and
/// returns them sorted by view count, highest first. The API bounds the
/// result via `min` and `pagesize`; this side only orders it.
pub fn fetch_most_viewed(
    fetcher: &impl JsonFetch,
    params: &MostViewedParams,
) -> Result<Vec<MostViewedQuestion>, ApiError> {
    let query = [
        ("order", "desc".to_string()),
        ("sort", "creation".to_string()),
        ("site", SITE.to_string()),
        ("fromdate", params.from_date.format("%Y-%m-%d").to_string()),
        ("todate", params.to_date.format("%Y-%m-%d").to_string()),
        ("min", params.count.to_string()),
        ("pagesize", params.count.to_string()),
    ];

    let body = fetcher.get_json(SEARCH_ADVANCED_URL, &query)?;
    let page: ItemsPage<MostViewedQuestion> = serde_json::from_value(body)?;

    let mut questions = page.items;
    // Stable sort keeps response order between equal view counts.
    questions.sort_by(|a, b| b.view_count.cmp(&a.view_count));
    debug!("fetched {} questions", questions.len());
    Ok(questions)
}

/// Fetches the most recently active questions and keeps the ones without
/// any answer. Failures are reported here and yield an empty list, which
/// the caller presents as "no questions found".
pub fn fetch_recent_unanswered(fetcher: &impl JsonFetch) -> Vec<RecentQuestion> {
    let query = [
        ("order", "desc".to_string()),
        ("sort", "activity".to_string()),
        ("site", SITE.to_string()),
    ];

    let body = match fetcher.get_json(QUESTIONS_URL, &query) {
        Ok(body) => body,
        Err(err) => {
            eprintln!("Request failed: {err}");
            return Vec::new();
        }
    };
    let page: ItemsPage<serde_json::Value> = match serde_json::from_value(body) {
        Ok(page) => page,
        Err(err) => {
            eprintln!("Request failed: {err}");
            return Vec::new();
        }
    };

    debug!("fetched {} questions", page.items.len());
    page.items
        .into_iter()
        // Decode item by item so one malformed entry degrades alone.
        .map(|item| {
            serde_json::from_value(item).unwrap_or_else(|_| {
                eprintln!("Data is not in the expected format");
                RecentQuestion::default()
            })
        })
        .filter(RecentQuestion::is_unanswered)
        .collect()
}

/// Fetches the most popular tags for the date range and pairs each with
/// its info-page link. Failures are reported here and yield an empty
/// list, which the caller treats as nothing to print or save.
pub fn fetch_popular_tags(fetcher: &impl JsonFetch, params: &TagsParams) -> Vec<TagInfo> {
    let query = [
        ("site", SITE.to_string()),
        ("fromdate", unix_midnight(params.from_date).to_string()),
        ("todate", unix_midnight(params.to_date).to_string()),
        ("order", "desc".to_string()),
        ("sort", "popular".to_string()),
        ("pagesize", TAGS_PAGE_SIZE.to_string()),
    ];

    let page = fetcher
        .get_json(TAGS_URL, &query)
        .and_then(|body| Ok(serde_json::from_value::<ItemsPage<PopularTag>>(body)?));
    match page {
        Ok(page) => {
            debug!("fetched {} tags", page.items.len());
            page.items.into_iter().map(TagInfo::from).collect()
        }
        Err(err) => {
            eprintln!("An error occurred: {err}");
            Vec::new()
        }
    }
}

// The tags endpoint takes the date range as Unix timestamps.
fn unix_midnight(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp()
}
