use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use time::OffsetDateTime;

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub id: String,
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

impl Place {
    /// A place is bookable by `user_id` iff that user does not own it.
    pub fn is_bookable_by(&self, user_id: &str) -> bool {
        self.user_id != user_id
    }

    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            lat: self.location.lat,
            lng: self.location.lng,
        }
    }
}

#[skip_serializing_none]
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlaceLocation {
    pub lat: f64,
    pub lng: f64,
    pub address: String,
    #[serde(default)]
    pub static_map_image_url: Option<String>,
}

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}
