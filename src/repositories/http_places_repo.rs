use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tracing::{debug, warn};
use crate::error::RepoError;
use crate::models::place::{Place, PlaceLocation};
use crate::repositories::endpoint;
use crate::services::places::PlaceLookup;

/// A place as stored under `offered-places/{id}`; the id is the key.
#[derive(Clone, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PlaceRecord {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub price: f64,
    #[serde(with = "time::serde::rfc3339")]
    pub available_from: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub available_to: OffsetDateTime,
    pub user_id: String,
    pub location: PlaceLocation,
}

impl PlaceRecord {
    pub fn into_place(self, id: &str) -> Place {
        Place {
            id: id.to_string(),
            title: self.title,
            description: self.description,
            image_url: self.image_url,
            price: self.price,
            available_from: self.available_from,
            available_to: self.available_to,
            user_id: self.user_id,
            location: self.location,
        }
    }
}

pub struct PlacesHttpRepo {
    client: Client,
    base_url: String,
}

impl PlacesHttpRepo {
    pub fn new(
        client: Client,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub async fn fetch_place(
        &self,
        place_id: &str,
    ) -> anyhow::Result<Place> {
        let url = endpoint(&self.base_url, &["offered-places", &format!("{}.json", place_id)])?;
        debug!("Fetching place from {}", url);

        let res = self.client
            .get(url.clone())
            .send()
            .await
            .map_err(RepoError::from)
            .with_context(|| format!("Error requesting place {}", place_id))?;

        let status = res.status();
        if !status.is_success() {
            warn!("Place lookup for {} answered with {}", place_id, status);
            return Err(RepoError::UnexpectedStatus { status, url: url.to_string() }.into());
        }

        let record: Option<PlaceRecord> = res
            .json()
            .await
            .map_err(RepoError::from)
            .with_context(|| format!("Error decoding place {}", place_id))?;

        match record {
            Some(record) => Ok(record.into_place(place_id)),
            None => Err(RepoError::PlaceNotFound(place_id.to_string()).into()),
        }
    }
}

#[async_trait]
impl PlaceLookup for PlacesHttpRepo {
    async fn get_place(&self, place_id: &str) -> anyhow::Result<Place> {
        self.fetch_place(place_id).await
    }
}
