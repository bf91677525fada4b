use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("request failed with status: {0}")]
    Status(reqwest::StatusCode),

    #[error("unexpected response shape: {0}")]
    Shape(#[from] serde_json::Error),
}

#[derive(Error, Debug, PartialEq)]
pub enum ParamError {
    #[error("invalid date '{value}', expected YYYY-MM-DD")]
    Date { value: String },

    #[error("'{value}' is not a positive question count")]
    Count { value: String },
}
