//! HTTP utilities shared by the stats and spreadsheet clients

use crate::{PlayoffsError, Result, ACCESS_TOKEN_ENV_VAR};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};

pub const USER_AGENT: &str = concat!("ffl-playoffs/", env!("CARGO_PKG_VERSION"));

/// Headers sent with every JSON API request.
pub fn json_header_map() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    h
}

/// JSON headers plus `Authorization: Bearer <token>`.
pub fn bearer_header_map(token: &str) -> Result<HeaderMap> {
    let mut h = json_header_map();
    let mut value = HeaderValue::from_str(&format!("Bearer {}", token.trim()))?;
    value.set_sensitive(true);
    h.insert(AUTHORIZATION, value);
    Ok(h)
}

/// Read the Sheets OAuth2 access token from `GOOGLE_SHEETS_TOKEN`.
pub fn access_token_from_env() -> Result<String> {
    std::env::var(ACCESS_TOKEN_ENV_VAR)
        .ok()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .ok_or_else(|| PlayoffsError::MissingAccessToken {
            env_var: ACCESS_TOKEN_ENV_VAR.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_header_map() {
        let headers = json_header_map();
        assert_eq!(headers.get(ACCEPT).unwrap(), "application/json");
    }

    #[test]
    fn test_bearer_header_map() {
        let headers = bearer_header_map(" ya29.token ").unwrap();
        let auth = headers.get(AUTHORIZATION).unwrap();
        assert_eq!(auth, "Bearer ya29.token");
        assert!(auth.is_sensitive());
        assert!(headers.contains_key(ACCEPT));
    }

    #[test]
    fn test_bearer_header_map_rejects_newlines() {
        assert!(matches!(
            bearer_header_map("bad\ntoken"),
            Err(PlayoffsError::InvalidHeader(_))
        ));
    }

    #[test]
    fn test_access_token_from_env() {
        std::env::set_var(ACCESS_TOKEN_ENV_VAR, "  abc123  ");
        assert_eq!(access_token_from_env().unwrap(), "abc123");

        std::env::set_var(ACCESS_TOKEN_ENV_VAR, "   ");
        assert!(matches!(
            access_token_from_env(),
            Err(PlayoffsError::MissingAccessToken { .. })
        ));

        std::env::remove_var(ACCESS_TOKEN_ENV_VAR);
        assert!(access_token_from_env().is_err());
    }
}
