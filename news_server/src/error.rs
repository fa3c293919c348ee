use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use news_core::Error as NewsError;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug)]
pub struct ServerError(anyhow::Error);

impl<E> From<E> for ServerError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl std::fmt::Display for ServerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        tracing::error!("{}", self);
        let status = self.status_code();
        (status, self.to_string()).into_response()
    }
}

impl ServerError {
    fn status_code(&self) -> StatusCode {
        for cause in self.0.chain() {
            if let Some(err) = cause.downcast_ref::<NewsError>() {
                return match err {
                    NewsError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
                    NewsError::Transport(err) => upstream_status(err),
                };
            }
            if let Some(err) = cause.downcast_ref::<news_client::Error>() {
                return upstream_status(err);
            }
        }
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

/// The endpoint refusing us is reported apart from not reaching it at all.
fn upstream_status(err: &news_client::Error) -> StatusCode {
    match err {
        news_client::Error::Status(status) if status.as_u16() == 429 => StatusCode::SERVICE_UNAVAILABLE,
        news_client::Error::Status(_) => StatusCode::BAD_GATEWAY,
        err if err.is_timeout() => StatusCode::GATEWAY_TIMEOUT,
        news_client::Error::NetworkError(_) | news_client::Error::IOError(_) => StatusCode::BAD_GATEWAY,
        news_client::Error::MalformedResponse(_) => StatusCode::BAD_GATEWAY,
        news_client::Error::InvalidBaseUrl(_) | news_client::Error::UrlError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_status_codes() {
        let invalid = ServerError::from(NewsError::InvalidRequest("limit must be positive".to_string()));
        assert_eq!(invalid.status_code(), StatusCode::BAD_REQUEST);

        let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "timed out");
        let transport = ServerError::from(NewsError::Transport(news_client::Error::IOError(io)));
        assert_eq!(transport.status_code(), StatusCode::BAD_GATEWAY);

        let refused = ServerError::from(NewsError::Transport(news_client::Error::Status(
            news_client::StatusCode::INTERNAL_SERVER_ERROR,
        )));
        assert_eq!(refused.status_code(), StatusCode::BAD_GATEWAY);

        let limited = ServerError::from(NewsError::Transport(news_client::Error::Status(
            news_client::StatusCode::TOO_MANY_REQUESTS,
        )));
        assert_eq!(limited.status_code(), StatusCode::SERVICE_UNAVAILABLE);

        let malformed = serde_json::from_str::<Vec<u8>>("<html>").unwrap_err();
        let malformed = ServerError::from(NewsError::Transport(news_client::Error::MalformedResponse(malformed)));
        assert_eq!(malformed.status_code(), StatusCode::BAD_GATEWAY);

        let misconfigured = ServerError::from(NewsError::Transport(news_client::Error::InvalidBaseUrl(
            "mailto:x".to_string(),
        )));
        assert_eq!(misconfigured.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let other = ServerError::from(anyhow::anyhow!("something else"));
        assert_eq!(other.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
