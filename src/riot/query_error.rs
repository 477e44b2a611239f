use json::JsonError;
use reqwest::Error as HttpError;
use reqwest::StatusCode;
use thiserror::Error;

/// Any error that may occur when querying data from the Riot API.
#[derive(Debug, Error)]
pub enum QueryError
{
    /// The connection to the API is unstable, timed out or the service is
    /// down.
    #[error("An error occured contacting the Riot API: {0}")]
    HttpResponse(#[from] HttpError),
    /// The response body was not valid json.
    #[error("The Riot API did not return valid json: {0}")]
    JsonParseError(#[from] JsonError),
    /// The API answered, but not with `200 OK`. Contains the body, which
    /// usually holds a short explanation.
    #[error("The Riot API responded with {status}: {body}")]
    Unsuccessful { status: StatusCode, body: String },
    /// A field the response should contain is missing or has the wrong type.
    #[error("Field `{0}` is missing from the response or has the wrong type")]
    MissingField(&'static str),
    #[error("Unable to build request url: {0}")]
    InvalidUrl(String),
}

pub type QueryResult<T> = Result<T, QueryError>;

impl QueryError
{
    /// Whether trying the same request again might succeed. Only transport
    /// errors, rate limiting and server side errors qualify.
    pub fn is_retryable(&self) -> bool
    {
        match self {
            Self::HttpResponse(_) => true,
            Self::Unsuccessful { status, .. } => {
                *status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
            },
            Self::JsonParseError(_) | Self::MissingField(_) | Self::InvalidUrl(_) => false,
        }
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    fn unsuccessful(status: StatusCode) -> QueryError
    {
        QueryError::Unsuccessful {
            status,
            body: String::new(),
        }
    }

    #[test]
    fn retryable_statuses()
    {
        assert!(unsuccessful(StatusCode::TOO_MANY_REQUESTS).is_retryable());
        assert!(unsuccessful(StatusCode::SERVICE_UNAVAILABLE).is_retryable());
        assert!(!unsuccessful(StatusCode::NOT_FOUND).is_retryable());
        assert!(!unsuccessful(StatusCode::FORBIDDEN).is_retryable());
    }

    #[test]
    fn payload_errors_are_final()
    {
        assert!(!QueryError::MissingField("info").is_retryable());
        let parse_error = json::parse("{").unwrap_err();
        assert!(!QueryError::from(parse_error).is_retryable());
    }

    #[test]
    fn display()
    {
        let err = QueryError::Unsuccessful {
            status: StatusCode::NOT_FOUND,
            body:   "Data not found".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "The Riot API responded with 404 Not Found: Data not found"
        );
    }
}
