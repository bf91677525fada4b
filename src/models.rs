use chrono::NaiveDate;

use crate::config::TAG_LINK_BASE;
use crate::error::ParamError;

/// One page of a StackExchange list response. The API wraps every list in
/// an "items" array; an error body carries no such key, so default to empty.
#[derive(serde::Deserialize)]
pub struct ItemsPage<T> {
    #[serde(default)]
    pub items: Vec<T>,
}

#[derive(serde::Deserialize, Clone, Default, Debug)]
pub struct MostViewedQuestion {
    pub title: String,
    pub link: String,
    pub view_count: u64,
}

/// A question from the recently-active list. Fields are optional so one
/// malformed item degrades on its own instead of failing the whole page.
#[derive(serde::Deserialize, Clone, Default)]
pub struct RecentQuestion {
    pub title: Option<String>,
    pub link: Option<String>,
    pub answer_count: Option<u64>,
}

impl RecentQuestion {
    pub fn is_unanswered(&self) -> bool {
        self.answer_count.unwrap_or(0) == 0
    }

    /// Extracts the title/link pair, substituting empty strings when the
    /// item is missing either key.
    pub fn title_and_link(&self) -> (String, String) {
        match (&self.title, &self.link) {
            (Some(title), Some(link)) => (title.clone(), link.clone()),
            _ => {
                eprintln!("Data is not in the expected format");
                (String::new(), String::new())
            }
        }
    }
}

/// A tag from the popular-tags list.
#[derive(serde::Deserialize, Clone, Default)]
pub struct PopularTag {
    pub name: String,
    pub count: u64,
}

/// A popular tag enriched with its StackOverflow info-page link, the
/// shape printed and saved to disk.
#[derive(serde::Serialize, Clone)]
pub struct TagInfo {
    pub name: String,
    pub count: u64,
    pub link: String,
}

impl From<PopularTag> for TagInfo {
    fn from(tag: PopularTag) -> Self {
        let encoded: String = url::form_urlencoded::byte_serialize(tag.name.as_bytes()).collect();
        Self {
            link: format!("{TAG_LINK_BASE}/{encoded}/info"),
            name: tag.name,
            count: tag.count,
        }
    }
}

/// Query parameters for the most-viewed search, built once per invocation.
#[derive(Debug)]
pub struct MostViewedParams {
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    pub count: u32,
}

impl MostViewedParams {
    pub fn parse(from_date: &str, to_date: &str, count: &str) -> Result<Self, ParamError> {
        let from_date = parse_date(from_date)?;
        let to_date = parse_date(to_date)?;
        let count: u32 = count.parse().map_err(|_| ParamError::Count {
            value: count.to_string(),
        })?;
        if count == 0 {
            return Err(ParamError::Count {
                value: count.to_string(),
            });
        }
        Ok(Self {
            from_date,
            to_date,
            count,
        })
    }
}

/// Date range for the popular-tags query, built once per invocation.
pub struct TagsParams {
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
}

impl TagsParams {
    pub fn parse(from_date: &str, to_date: &str) -> Result<Self, ParamError> {
        Ok(Self {
            from_date: parse_date(from_date)?,
            to_date: parse_date(to_date)?,
        })
    }
}

fn parse_date(value: &str) -> Result<NaiveDate, ParamError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| ParamError::Date {
        value: value.to_string(),
    })
}
