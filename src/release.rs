//! Release catalog access.
//!
//! Fetches the full release list from a GitHub-Releases-shaped endpoint in a
//! single request. No pagination or caching: the upstream default page size is
//! assumed to cover every release.

use crate::error::InstallerError;
use serde::Deserialize;

/// A single downloadable file attached to a release.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ReleaseAsset {
    pub name: String,
    pub browser_download_url: String,
}

/// One release as returned by the releases API, assets in API order.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Release {
    pub tag_name: String,
    pub name: String,
    pub assets: Vec<ReleaseAsset>,
}

/// Fetch the release list, newest first as the API returns it.
pub async fn fetch_releases(endpoint: &str) -> Result<Vec<Release>, InstallerError> {
    tracing::debug!("Fetching releases from: {}", endpoint);

    let client = reqwest::Client::new();
    let mut request = client
        .get(endpoint)
        .header("Accept", "application/vnd.github.v3+json")
        .header(
            "User-Agent",
            concat!("hypertremolo-install/", env!("CARGO_PKG_VERSION")),
        );

    if let Ok(token) = std::env::var("GITHUB_TOKEN") {
        request = request.header("Authorization", format!("token {}", token));
        tracing::debug!("Using GITHUB_TOKEN");
    }

    let response = request.send().await?.error_for_status()?;
    let body = response.text().await?;
    let releases: Vec<Release> = serde_json::from_str(&body)?;
    Ok(releases)
}
