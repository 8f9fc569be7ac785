//! Google Sheets v4 REST client.

use async_trait::async_trait;
use reqwest::{header::HeaderMap, Client, Response, Url};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use super::{Cell, CreateOutcome, Grid, SpreadsheetService};
use crate::{
    cli::types::SpreadsheetId,
    core::http::{bearer_header_map, USER_AGENT},
    PlayoffsError, Result,
};

/// Public Sheets API host.
pub const SHEETS_BASE_URL: &str = "https://sheets.googleapis.com";

#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<Cell>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ValueRangeBody<'a> {
    range: &'a str,
    major_dimension: &'static str,
    values: &'a Grid,
}

#[derive(Debug, Deserialize)]
struct SpreadsheetMeta {
    #[serde(default)]
    sheets: Vec<SheetEntry>,
}

#[derive(Debug, Deserialize)]
struct SheetEntry {
    properties: SheetProperties,
}

#[derive(Debug, Deserialize)]
struct SheetProperties {
    title: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Sheets client bound to a single spreadsheet.
pub struct GoogleSheetsClient {
    http: Client,
    base_url: String,
    spreadsheet_id: SpreadsheetId,
    headers: HeaderMap,
}

impl GoogleSheetsClient {
    /// Create a client authenticating with an OAuth2 bearer token.
    pub fn new(spreadsheet_id: SpreadsheetId, access_token: &str) -> Result<Self> {
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            http,
            base_url: SHEETS_BASE_URL.to_string(),
            spreadsheet_id,
            headers: bearer_header_map(access_token)?,
        })
    }

    /// Point the client at another host (used by tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn spreadsheet_id(&self) -> &SpreadsheetId {
        &self.spreadsheet_id
    }

    /// `{base}/v4/spreadsheets/{id}{suffix}/{extra...}` with every segment
    /// percent-encoded.
    fn url(&self, id_suffix: &str, extra: &[&str]) -> Result<Url> {
        let invalid = || PlayoffsError::InvalidUrl {
            url: self.base_url.clone(),
        };
        let mut url = Url::parse(&self.base_url).map_err(|_| invalid())?;
        {
            let mut segments = url.path_segments_mut().map_err(|_| invalid())?;
            segments
                .pop_if_empty()
                .push("v4")
                .push("spreadsheets")
                .push(&format!("{}{}", self.spreadsheet_id, id_suffix))
                .extend(extra);
        }
        Ok(url)
    }

    async fn check(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiErrorEnvelope>(&body)
            .map(|e| e.error.message)
            .unwrap_or(body);
        Err(PlayoffsError::SheetsApi {
            status: status.as_u16(),
            message,
        })
    }

    async fn add_sheet(&self, title: &str) -> Result<()> {
        let url = self.url(":batchUpdate", &[])?;
        let body = json!({
            "requests": [{
                "addSheet": { "properties": { "title": title } }
            }]
        });
        debug!("POST {}", url);
        let response = self
            .http
            .post(url)
            .headers(self.headers.clone())
            .json(&body)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }
}

fn is_already_exists(err: &PlayoffsError) -> bool {
    matches!(err, PlayoffsError::SheetsApi { status: 400, message }
        if message.to_lowercase().contains("already exists"))
}

#[async_trait]
impl SpreadsheetService for GoogleSheetsClient {
    async fn get_grid(&self, range: &str) -> Result<Grid> {
        let url = self.url("", &["values", range])?;
        debug!("GET {}", url);
        let response = self
            .http
            .get(url)
            .headers(self.headers.clone())
            .query(&[("valueRenderOption", "UNFORMATTED_VALUE")])
            .send()
            .await?;
        let parsed = Self::check(response).await?.json::<ValueRange>().await?;
        Ok(parsed.values)
    }

    async fn create_sheet(&self, title: &str) -> Result<CreateOutcome> {
        if self.list_sheet_titles().await?.iter().any(|t| t == title) {
            return Ok(CreateOutcome::AlreadyExists);
        }
        match self.add_sheet(title).await {
            Ok(()) => Ok(CreateOutcome::Created),
            Err(e) if is_already_exists(&e) => Ok(CreateOutcome::AlreadyExists),
            Err(e) => Err(e),
        }
    }

    async fn set_grid(&self, range: &str, values: &Grid) -> Result<()> {
        let url = self.url("", &["values", range])?;
        let body = ValueRangeBody {
            range,
            major_dimension: "ROWS",
            values,
        };
        debug!("PUT {} ({} rows)", url, values.len());
        let response = self
            .http
            .put(url)
            .headers(self.headers.clone())
            .query(&[("valueInputOption", "RAW")])
            .json(&body)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn clear_range(&self, range: &str) -> Result<()> {
        let target = format!("{range}:clear");
        let url = self.url("", &["values", target.as_str()])?;
        debug!("POST {}", url);
        let response = self
            .http
            .post(url)
            .headers(self.headers.clone())
            .json(&json!({}))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn list_sheet_titles(&self) -> Result<Vec<String>> {
        let url = self.url("", &[])?;
        debug!("GET {}", url);
        let response = self
            .http
            .get(url)
            .headers(self.headers.clone())
            .query(&[("fields", "sheets.properties.title")])
            .send()
            .await?;
        let meta = Self::check(response).await?.json::<SpreadsheetMeta>().await?;
        Ok(meta
            .sheets
            .into_iter()
            .map(|s| s.properties.title)
            .collect())
    }
}
