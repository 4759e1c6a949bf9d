use thiserror::Error;
use warp::{http::StatusCode, reject::Reject, Rejection, Reply};

#[derive(Error, Debug)]
pub enum ToolError {
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{service} returned status {status}: {body}")]
    Status {
        service: &'static str,
        status: u16,
        body: String,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("{0} is not configured")]
    NotConfigured(&'static str),
}

pub type Result<T> = std::result::Result<T, ToolError>;

impl Reject for ToolError {}

impl ToolError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ToolError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            ToolError::NotConfigured(_) => StatusCode::SERVICE_UNAVAILABLE,
            ToolError::Http(_) | ToolError::Status { .. } => StatusCode::BAD_GATEWAY,
            ToolError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub async fn handle_rejection(err: Rejection) -> std::result::Result<impl Reply, Rejection> {
    if let Some(tool_err) = err.find::<ToolError>() {
        let code = tool_err.status_code();
        let message = match tool_err {
            ToolError::InvalidQuery(_) => "Bad request",
            ToolError::NotConfigured(_) => "Service not configured",
            ToolError::Http(_) | ToolError::Status { .. } => "Upstream search service failed",
            ToolError::Serialization(_) => "Internal server error",
        };

        let json = warp::reply::json(&serde_json::json!({
            "error": message,
            "details": tool_err.to_string(),
        }));

        Ok(warp::reply::with_status(json, code))
    } else {
        Err(err)
    }
}
