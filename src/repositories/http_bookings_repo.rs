use std::sync::Arc;
use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tracing::{debug, warn};
use crate::error::RepoError;
use crate::models::booking::Booking;
use crate::repositories::endpoint;
use crate::services::bookings::BookingCreator;
use crate::services::session::SessionProvider;

/// A booking as posted to `bookings`; the backend generates the key.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookingRecord {
    pub place_id: String,
    pub user_id: String,
    pub place_title: String,
    pub place_image: String,
    pub first_name: String,
    pub last_name: String,
    pub guest_number: u32,
    #[serde(with = "time::serde::rfc3339")]
    pub booked_from: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub booked_to: OffsetDateTime,
}

/// Body answered to a push: the generated key.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct CreatedKey {
    pub name: String,
}

pub struct BookingsHttpRepo {
    client: Client,
    base_url: String,
    session: Arc<dyn SessionProvider>,
}

impl BookingsHttpRepo {
    pub fn new(
        client: Client,
        base_url: impl Into<String>,
        session: Arc<dyn SessionProvider>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            session,
        }
    }

    pub async fn store_booking(
        &self,
        record: &BookingRecord,
    ) -> anyhow::Result<String> {
        let url = endpoint(&self.base_url, &["bookings.json"])?;
        debug!("Posting booking for place {} to {}", record.place_id, url);

        let res = self.client
            .post(url.clone())
            .json(record)
            .send()
            .await
            .map_err(RepoError::from)
            .with_context(|| format!("Error posting booking for place {}", record.place_id))?;

        let status = res.status();
        if !status.is_success() {
            warn!("Booking creation for place {} answered with {}", record.place_id, status);
            return Err(RepoError::UnexpectedStatus { status, url: url.to_string() }.into());
        }

        let created: CreatedKey = res
            .json()
            .await
            .map_err(RepoError::from)
            .context("Error decoding created booking key")?;

        Ok(created.name)
    }
}

#[async_trait]
impl BookingCreator for BookingsHttpRepo {
    async fn add_booking(
        &self,
        place_id: &str,
        place_title: &str,
        place_image: &str,
        first_name: &str,
        last_name: &str,
        guest_number: u32,
        date_from: OffsetDateTime,
        date_to: OffsetDateTime,
    ) -> anyhow::Result<Booking> {
        let user_id = self.session
            .user_id()
            .await?
            .ok_or(RepoError::MissingSession)?;

        let record = BookingRecord {
            place_id: place_id.to_string(),
            user_id,
            place_title: place_title.to_string(),
            place_image: place_image.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            guest_number,
            booked_from: date_from,
            booked_to: date_to,
        };
        let id = self.store_booking(&record).await?;

        Ok(Booking {
            id,
            place_id: record.place_id,
            user_id: record.user_id,
            place_title: record.place_title,
            place_image: record.place_image,
            first_name: record.first_name,
            last_name: record.last_name,
            guest_number: record.guest_number,
            booked_from: record.booked_from,
            booked_to: record.booked_to,
        })
    }
}
