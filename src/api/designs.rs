//! `/api/designs` request helper.

use crate::design::{DesignPayload, DesignRequest};
use crate::error::SubmitError;

/// Path appended to the configured base URL.
pub(crate) const DESIGNS_PATH: &str = "/api/designs";

/// Send one design request and return the response body verbatim.
pub(crate) async fn create(
    http: &reqwest::Client,
    base_url: &str,
    request: &DesignRequest,
) -> Result<DesignPayload, SubmitError> {
    let url = format!("{base_url}{DESIGNS_PATH}");
    // `.json()` sets `Content-Type: application/json`.
    let response = http.post(&url).json(request).send().await?;
    if !response.status().is_success() {
        let code = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        return Err(SubmitError::Status {
            code,
            body: body.trim().to_string(),
        });
    }

    let body = response.text().await?;
    serde_json::from_str::<serde_json::Value>(&body)
        .map(DesignPayload::new)
        .map_err(|e| SubmitError::InvalidResponse(format!("response body is not JSON: {e}")))
}
