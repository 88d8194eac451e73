use std::time::Duration;

use axum::http::StatusCode;

/// How long a simulated `timeout` hangs before answering 408.
pub const TIMEOUT_STALL: Duration = Duration::from_secs(20);

/// Failure mode requested through the `_mock_error` query parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorDirective {
    /// Hang for the stall interval, then 408.
    Timeout,
    /// 507 Insufficient Storage, the upstream's rate-limit signal.
    RateLimited,
    TooManyRequests,
    NotFound,
    ServerError,
}

impl ErrorDirective {
    /// Parse the raw parameter value. Anything outside the known set
    /// means "no simulation"; unknown strings are not an error.
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        match raw? {
            "timeout" => Some(Self::Timeout),
            "507" => Some(Self::RateLimited),
            "429" => Some(Self::TooManyRequests),
            "404" => Some(Self::NotFound),
            "500" => Some(Self::ServerError),
            _ => None,
        }
    }

    pub fn status(self) -> StatusCode {
        match self {
            Self::Timeout => StatusCode::REQUEST_TIMEOUT,
            Self::RateLimited => StatusCode::INSUFFICIENT_STORAGE,
            Self::TooManyRequests => StatusCode::TOO_MANY_REQUESTS,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::ServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Short annotation for the request log.
    pub fn annotation(self) -> &'static str {
        match self {
            Self::Timeout => "timeout simulation",
            Self::RateLimited => "rate limit",
            Self::TooManyRequests => "too many requests",
            Self::NotFound => "not found",
            Self::ServerError => "server error",
        }
    }
}

/// Parse the `_mock_delay` parameter. Non-numeric and negative values are
/// silently ignored rather than rejected; callers rely on being able to
/// pass junk here.
pub fn parse_delay(raw: Option<&str>) -> Option<Duration> {
    raw?.parse::<u64>().ok().map(Duration::from_secs)
}
