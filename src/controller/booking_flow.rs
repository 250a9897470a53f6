use tracing::{debug, info, warn};
use crate::controller::{BookingPhase, PlaceDetailPage, BOOKING_FAILED_MESSAGE};
use crate::error::PageError;
use crate::models::booking::{Booking, BookingDraft, DateMode};
use crate::models::place::Place;
use crate::services::dialogs::{ActionSheetChoice, ActionSheetOption, ActionSheetRequest, ModalResult};

pub const ACTION_SHEET_HEADER: &str = "Choose an Action";
pub const SELECT_DATE_TEXT: &str = "Select Date";
pub const RANDOM_DATE_TEXT: &str = "Random Date";
pub const CANCEL_TEXT: &str = "Cancel";
pub const BOOKING_LOADING_MESSAGE: &str = "Booking place...";

#[derive(Clone, Debug, PartialEq)]
pub enum BookingOutcome {
    /// The action sheet was cancelled.
    Cancelled,
    /// The booking modal closed without confirming.
    Dismissed,
    Booked(Booking),
    /// Booking creation failed and the user was told so.
    Failed,
}

pub fn booking_action_sheet() -> ActionSheetRequest {
    ActionSheetRequest {
        header: ACTION_SHEET_HEADER.to_string(),
        options: vec![
            ActionSheetOption {
                text: SELECT_DATE_TEXT.to_string(),
                mode: DateMode::Select,
            },
            ActionSheetOption {
                text: RANDOM_DATE_TEXT.to_string(),
                mode: DateMode::Random,
            },
        ],
        cancel_text: CANCEL_TEXT.to_string(),
    }
}

/// Puts the booking flow back to idle however the flow ends, including
/// when its future is dropped mid-way.
struct BookingFlowGuard<'a> {
    page: &'a PlaceDetailPage,
}

impl Drop for BookingFlowGuard<'_> {
    fn drop(&mut self) {
        self.page.set_booking_phase(BookingPhase::Idle);
    }
}

impl PlaceDetailPage {
    /// Ask how the dates should be picked, then run the booking modal for
    /// the loaded place.
    pub async fn book_place(&self) -> Result<BookingOutcome, PageError> {
        let (place, _guard) = self.start_booking_flow(BookingPhase::ChoosingMode)?;

        let choice = self
            .services()
            .action_sheet
            .present(booking_action_sheet())
            .await?;

        match choice {
            ActionSheetChoice::Cancelled => {
                debug!("Booking action sheet cancelled");
                Ok(BookingOutcome::Cancelled)
            }
            ActionSheetChoice::Selected(mode) => self.collect_and_submit(&place, mode).await,
        }
    }

    /// Open the booking modal directly in `mode`, skipping the action sheet.
    pub async fn open_booking_modal(&self, mode: DateMode) -> Result<BookingOutcome, PageError> {
        let (place, _guard) = self.start_booking_flow(BookingPhase::CollectingDetails(mode))?;
        self.collect_and_submit(&place, mode).await
    }

    fn start_booking_flow(&self, phase: BookingPhase) -> Result<(Place, BookingFlowGuard<'_>), PageError> {
        let mut started = Err(PageError::NoPlaceLoaded);
        self.inner.state.send_if_modified(|state| {
            let Some(place) = state.place.as_ref() else {
                return false;
            };
            if state.booking != BookingPhase::Idle {
                started = Err(PageError::BookingInProgress);
                return false;
            }
            started = Ok(place.clone());
            state.booking = phase;
            true
        });
        started.map(|place| (place, BookingFlowGuard { page: self }))
    }

    pub(crate) fn set_booking_phase(&self, phase: BookingPhase) {
        self.inner.state.send_if_modified(|state| {
            if state.booking == phase {
                return false;
            }
            state.booking = phase;
            true
        });
    }

    async fn collect_and_submit(&self, place: &Place, mode: DateMode) -> Result<BookingOutcome, PageError> {
        self.set_booking_phase(BookingPhase::CollectingDetails(mode));
        debug!("Opening booking modal for place {} in {} mode", place.id, mode);

        match self.services().booking_modal.open(place, mode).await? {
            ModalResult::Confirmed(draft) => self.submit_booking(place, draft).await,
            ModalResult::Dismissed { role } => {
                debug!("Booking modal dismissed with role {:?}", role);
                Ok(BookingOutcome::Dismissed)
            }
        }
    }

    async fn submit_booking(&self, place: &Place, draft: BookingDraft) -> Result<BookingOutcome, PageError> {
        self.set_booking_phase(BookingPhase::Submitting);
        let loading = &self.services().loading;
        loading.present(BOOKING_LOADING_MESSAGE).await?;

        let booking_res = self
            .services()
            .bookings
            .add_booking(
                &place.id,
                &place.title,
                &place.image_url,
                &draft.first_name,
                &draft.last_name,
                draft.guest_number,
                draft.start_date,
                draft.end_date,
            )
            .await;

        if let Err(e) = loading.dismiss().await {
            warn!("Failed to dismiss booking indicator due to: {}", e);
        }

        match booking_res {
            Ok(booking) => {
                info!("Booked place {} as booking {}", place.id, booking.id);
                Ok(BookingOutcome::Booked(booking))
            }
            Err(e) => {
                warn!("Something went wrong booking place {} due to: {}", place.id, e);
                self.present_error(BOOKING_FAILED_MESSAGE).await;
                Ok(BookingOutcome::Failed)
            }
        }
    }
}
