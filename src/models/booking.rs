use std::fmt;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// How the booking modal picks the stay dates.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DateMode {
    Select,
    Random,
}

impl fmt::Display for DateMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateMode::Select => write!(f, "select"),
            DateMode::Random => write!(f, "random"),
        }
    }
}

/// Fields collected by the booking modal, consumed once by booking creation.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookingDraft {
    pub first_name: String,
    pub last_name: String,
    pub guest_number: u32,
    #[serde(with = "time::serde::rfc3339")]
    pub start_date: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub end_date: OffsetDateTime,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
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
