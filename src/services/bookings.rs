use async_trait::async_trait;
use time::OffsetDateTime;
use crate::models::booking::Booking;

#[async_trait]
pub trait BookingCreator: Send + Sync {
    #[allow(clippy::too_many_arguments)]
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
    ) -> anyhow::Result<Booking>;
}
