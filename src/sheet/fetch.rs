//! Remote fetch of the published schedule CSV.

use thiserror::Error;

/// The only fatal load error: the remote source could not be fetched this
/// cycle. Callers keep whatever snapshot they already have.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("schedule source unavailable ({url}): {reason}")]
    SourceUnavailable { url: String, reason: String },
}

impl FetchError {
    fn unavailable(url: &str, reason: impl ToString) -> Self {
        FetchError::SourceUnavailable {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Fetch the published CSV as text.
///
/// Any transport or HTTP-status failure maps to `SourceUnavailable`; there
/// is no retry policy here (the cache layer decides when to try again).
pub fn fetch_csv(url: &str) -> Result<String, FetchError> {
    tracing::debug!(url, "fetching schedule sheet");
    let response = ureq::get(url)
        .call()
        .map_err(|err| FetchError::unavailable(url, err))?;
    let body = response
        .into_string()
        .map_err(|err| FetchError::unavailable(url, err))?;
    tracing::debug!(bytes = body.len(), "fetched schedule sheet");
    Ok(body)
}
