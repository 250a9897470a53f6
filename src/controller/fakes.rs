//! In-memory collaborators for driving the page in tests.

use std::collections::HashMap;
use std::sync::Arc;
use anyhow::anyhow;
use async_trait::async_trait;
use parking_lot::Mutex;
use time::macros::datetime;
use time::OffsetDateTime;
use tokio::sync::Notify;
use crate::controller::PlaceDetailPage;
use crate::models::booking::{Booking, BookingDraft, DateMode};
use crate::models::place::{Place, PlaceLocation};
use crate::services::bookings::BookingCreator;
use crate::services::dialogs::{
    ActionSheet, ActionSheetChoice, ActionSheetRequest, Alert, AlertPresenter, BookingModal,
    LoadingIndicator, MapModal, MapModalRequest, ModalResult,
};
use crate::services::navigation::Navigator;
use crate::services::places::PlaceLookup;
use crate::services::session::StaticSession;
use crate::services::PageServices;

pub fn sample_place(id: &str, owner: &str) -> Place {
    Place {
        id: id.to_string(),
        title: format!("Place {}", id),
        description: "A quiet flat near the river".to_string(),
        image_url: format!("https://images.example.com/{}.jpg", id),
        price: 149.99,
        available_from: datetime!(2026-01-01 0:00 UTC),
        available_to: datetime!(2026-12-31 0:00 UTC),
        user_id: owner.to_string(),
        location: PlaceLocation {
            lat: 1.3521,
            lng: 103.8198,
            address: "1 Riverside Walk".to_string(),
            static_map_image_url: None,
        },
    }
}

pub fn sample_draft() -> BookingDraft {
    BookingDraft {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        guest_number: 2,
        start_date: datetime!(2026-03-01 0:00 UTC),
        end_date: datetime!(2026-03-04 0:00 UTC),
    }
}

pub struct Fixture {
    pub session: Arc<StaticSession>,
    pub navigator: Arc<FakeNavigator>,
    pub places: Arc<FakePlaces>,
    pub bookings: Arc<FakeBookings>,
    pub action_sheet: Arc<FakeActionSheet>,
    pub booking_modal: Arc<FakeBookingModal>,
    pub map_modal: Arc<FakeMapModal>,
    pub loading: Arc<FakeLoading>,
    pub alerts: Arc<FakeAlerts>,
}

impl Fixture {
    pub fn new(user_id: Option<&str>) -> Self {
        Self {
            session: Arc::new(StaticSession::new(user_id.map(str::to_string))),
            navigator: Arc::new(FakeNavigator::default()),
            places: Arc::new(FakePlaces::default()),
            bookings: Arc::new(FakeBookings::default()),
            action_sheet: Arc::new(FakeActionSheet::default()),
            booking_modal: Arc::new(FakeBookingModal::default()),
            map_modal: Arc::new(FakeMapModal::default()),
            loading: Arc::new(FakeLoading::default()),
            alerts: Arc::new(FakeAlerts::default()),
        }
    }

    pub fn page(&self) -> PlaceDetailPage {
        PlaceDetailPage::new(PageServices {
            navigator: self.navigator.clone(),
            session: self.session.clone(),
            places: self.places.clone(),
            bookings: self.bookings.clone(),
            action_sheet: self.action_sheet.clone(),
            booking_modal: self.booking_modal.clone(),
            map_modal: self.map_modal.clone(),
            loading: self.loading.clone(),
            alerts: self.alerts.clone(),
        })
    }
}

#[derive(Default)]
pub struct FakeNavigator {
    back: Mutex<Vec<String>>,
    forward: Mutex<Vec<String>>,
}

impl FakeNavigator {
    pub fn back_routes(&self) -> Vec<String> {
        self.back.lock().clone()
    }

    pub fn forward_routes(&self) -> Vec<String> {
        self.forward.lock().clone()
    }
}

#[async_trait]
impl Navigator for FakeNavigator {
    async fn navigate_back(&self, route: &str) -> anyhow::Result<()> {
        self.back.lock().push(route.to_string());
        Ok(())
    }

    async fn navigate(&self, route: &str) -> anyhow::Result<()> {
        self.forward.lock().push(route.to_string());
        Ok(())
    }
}

/// Holds a lookup open until released.
#[derive(Clone, Default)]
pub struct Gate {
    entered: Arc<Notify>,
    release: Arc<Notify>,
}

impl Gate {
    pub async fn entered(&self) {
        self.entered.notified().await;
    }

    pub fn release(&self) {
        self.release.notify_one();
    }
}

#[derive(Default)]
pub struct FakePlaces {
    places: Mutex<HashMap<String, Place>>,
    gates: Mutex<HashMap<String, Gate>>,
    requested: Mutex<Vec<String>>,
}

impl FakePlaces {
    pub fn insert(&self, place: Place) {
        self.places.lock().insert(place.id.clone(), place);
    }

    pub fn hold(&self, place_id: &str) -> Gate {
        let gate = Gate::default();
        self.gates.lock().insert(place_id.to_string(), gate.clone());
        gate
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().clone()
    }
}

#[async_trait]
impl PlaceLookup for FakePlaces {
    async fn get_place(&self, place_id: &str) -> anyhow::Result<Place> {
        self.requested.lock().push(place_id.to_string());
        let gate = self.gates.lock().get(place_id).cloned();
        if let Some(gate) = gate {
            gate.entered.notify_one();
            gate.release.notified().await;
        }
        self.places
            .lock()
            .get(place_id)
            .cloned()
            .ok_or_else(|| anyhow!("place {} not found", place_id))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BookingCall {
    pub place_id: String,
    pub place_title: String,
    pub place_image: String,
    pub first_name: String,
    pub last_name: String,
    pub guest_number: u32,
    pub date_from: OffsetDateTime,
    pub date_to: OffsetDateTime,
}

#[derive(Default)]
pub struct FakeBookings {
    calls: Mutex<Vec<BookingCall>>,
    fail: Mutex<bool>,
}

impl FakeBookings {
    pub fn calls(&self) -> Vec<BookingCall> {
        self.calls.lock().clone()
    }

    pub fn fail_next(&self) {
        *self.fail.lock() = true;
    }
}

#[async_trait]
impl BookingCreator for FakeBookings {
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
        self.calls.lock().push(BookingCall {
            place_id: place_id.to_string(),
            place_title: place_title.to_string(),
            place_image: place_image.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            guest_number,
            date_from,
            date_to,
        });
        if std::mem::take(&mut *self.fail.lock()) {
            return Err(anyhow!("backend unavailable"));
        }
        Ok(Booking {
            id: format!("b{}", self.calls.lock().len()),
            place_id: place_id.to_string(),
            user_id: "u1".to_string(),
            place_title: place_title.to_string(),
            place_image: place_image.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            guest_number,
            booked_from: date_from,
            booked_to: date_to,
        })
    }
}

pub struct FakeActionSheet {
    choice: Mutex<ActionSheetChoice>,
    requests: Mutex<Vec<ActionSheetRequest>>,
}

impl Default for FakeActionSheet {
    fn default() -> Self {
        Self {
            choice: Mutex::new(ActionSheetChoice::Cancelled),
            requests: Mutex::new(Vec::new()),
        }
    }
}

impl FakeActionSheet {
    pub fn choose(&self, choice: ActionSheetChoice) {
        *self.choice.lock() = choice;
    }

    pub fn requests(&self) -> Vec<ActionSheetRequest> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl ActionSheet for FakeActionSheet {
    async fn present(&self, request: ActionSheetRequest) -> anyhow::Result<ActionSheetChoice> {
        self.requests.lock().push(request);
        Ok(*self.choice.lock())
    }
}

pub struct FakeBookingModal {
    result: Mutex<ModalResult<BookingDraft>>,
    opened: Mutex<Vec<(String, DateMode)>>,
}

impl Default for FakeBookingModal {
    fn default() -> Self {
        Self {
            result: Mutex::new(ModalResult::cancelled()),
            opened: Mutex::new(Vec::new()),
        }
    }
}

impl FakeBookingModal {
    pub fn dismiss_with(&self, result: ModalResult<BookingDraft>) {
        *self.result.lock() = result;
    }

    pub fn opened(&self) -> Vec<(String, DateMode)> {
        self.opened.lock().clone()
    }
}

#[async_trait]
impl BookingModal for FakeBookingModal {
    async fn open(&self, place: &Place, mode: DateMode) -> anyhow::Result<ModalResult<BookingDraft>> {
        self.opened.lock().push((place.id.clone(), mode));
        Ok(self.result.lock().clone())
    }
}

#[derive(Default)]
pub struct FakeMapModal {
    requests: Mutex<Vec<MapModalRequest>>,
}

impl FakeMapModal {
    pub fn requests(&self) -> Vec<MapModalRequest> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl MapModal for FakeMapModal {
    async fn open(&self, request: MapModalRequest) -> anyhow::Result<()> {
        self.requests.lock().push(request);
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadingEvent {
    Presented(String),
    Dismissed,
}

#[derive(Default)]
pub struct FakeLoading {
    events: Mutex<Vec<LoadingEvent>>,
}

impl FakeLoading {
    pub fn events(&self) -> Vec<LoadingEvent> {
        self.events.lock().clone()
    }
}

#[async_trait]
impl LoadingIndicator for FakeLoading {
    async fn present(&self, message: &str) -> anyhow::Result<()> {
        self.events.lock().push(LoadingEvent::Presented(message.to_string()));
        Ok(())
    }

    async fn dismiss(&self) -> anyhow::Result<()> {
        self.events.lock().push(LoadingEvent::Dismissed);
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeAlerts {
    shown: Mutex<Vec<Alert>>,
    gate: Mutex<Option<Gate>>,
}

impl FakeAlerts {
    pub fn shown(&self) -> Vec<Alert> {
        self.shown.lock().clone()
    }

    /// Keep the next alert open until released.
    pub fn hold(&self) -> Gate {
        let gate = Gate::default();
        *self.gate.lock() = Some(gate.clone());
        gate
    }
}

#[async_trait]
impl AlertPresenter for FakeAlerts {
    async fn present(&self, alert: Alert) -> anyhow::Result<()> {
        self.shown.lock().push(alert);
        let gate = self.gate.lock().take();
        if let Some(gate) = gate {
            gate.entered.notify_one();
            gate.release.notified().await;
        }
        Ok(())
    }
}
