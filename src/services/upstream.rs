use reqwest::{header, Client};
use tracing::info;

use crate::config::Config;
use crate::models::filters::SearchFilters;

/// Raw upstream reply, relayed to the caller unchanged.
#[derive(Debug)]
pub struct UpstreamResponse {
    pub status: u16,
    pub body: String,
}

/// Map validated filters onto the upstream query pairs.
///
/// `api-key` always comes first, then the filter keys in struct order. The
/// upstream does not care about ordering; the convention just keeps query
/// strings deterministic. Multiple ISBNs collapse into one `isbn` pair joined
/// with `;` (sent percent-encoded as `%3B`); an empty list produces no `isbn`
/// pair at all.
pub fn build_query(filters: &SearchFilters, api_key: &str) -> Vec<(&'static str, String)> {
    let mut query = vec![("api-key", api_key.to_string())];

    if let Some(author) = &filters.author {
        query.push(("author", author.clone()));
    }
    if let Some(title) = &filters.title {
        query.push(("title", title.clone()));
    }
    if !filters.isbns.is_empty() {
        query.push(("isbn", filters.isbns.join(";")));
    }
    if let Some(offset) = filters.offset {
        query.push(("offset", offset.to_string()));
    }

    query
}

/// Single GET against the configured upstream. No retries; transport errors
/// bubble up to the handler.
pub async fn fetch_best_sellers(
    client: &Client,
    config: &Config,
    filters: &SearchFilters,
) -> Result<UpstreamResponse, reqwest::Error> {
    let query = build_query(filters, &config.api_key);

    let response = client
        .get(&config.upstream_url)
        .header(header::ACCEPT, "application/json")
        .query(&query)
        .send()
        .await?;

    let status = response.status().as_u16();
    let body = response.text().await?;

    info!("Upstream responded with status {}", status);

    Ok(UpstreamResponse { status, body })
}
