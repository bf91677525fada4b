//! StackExchange API endpoints and fixed request parameters.

pub const SEARCH_ADVANCED_URL: &str = "https://api.stackexchange.com/2.3/search/advanced";
pub const QUESTIONS_URL: &str = "https://api.stackexchange.com/2.3/questions";
pub const TAGS_URL: &str = "https://api.stackexchange.com/2.3/tags";

pub const SITE: &str = "stackoverflow";
pub const USER_AGENT: &str = "soq/0.1";

pub const TAG_LINK_BASE: &str = "https://stackoverflow.com/tags";
pub const TAGS_PAGE_SIZE: u32 = 10;
pub const TAGS_OUTPUT_FILE: &str = "popular_tags.json";
