use async_trait::async_trait;
use crate::models::place::Place;

#[async_trait]
pub trait PlaceLookup: Send + Sync {
    async fn get_place(&self, place_id: &str) -> anyhow::Result<Place>;
}
