use anyhow::{anyhow, Context};
use reqwest::Url;

pub mod http_bookings_repo;
pub mod http_places_repo;

/// Append `segments` to the path of `base_url`, percent-encoding each one so
/// reserved characters stay inside their segment.
pub(crate) fn endpoint(base_url: &str, segments: &[&str]) -> anyhow::Result<Url> {
    let mut url = Url::parse(base_url)
        .with_context(|| format!("Invalid backend url {}", base_url))?;
    url.path_segments_mut()
        .map_err(|_| anyhow!("Backend url {} cannot take a path", base_url))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}
