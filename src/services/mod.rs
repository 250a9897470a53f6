use std::sync::Arc;

pub mod bookings;
pub mod dialogs;
pub mod navigation;
pub mod places;
pub mod session;

use crate::services::bookings::BookingCreator;
use crate::services::dialogs::{ActionSheet, AlertPresenter, BookingModal, LoadingIndicator, MapModal};
use crate::services::navigation::Navigator;
use crate::services::places::PlaceLookup;
use crate::services::session::SessionProvider;

/// Every collaborator the place detail page talks to.
#[derive(Clone)]
pub struct PageServices {
    pub navigator: Arc<dyn Navigator>,
    pub session: Arc<dyn SessionProvider>,
    pub places: Arc<dyn PlaceLookup>,
    pub bookings: Arc<dyn BookingCreator>,
    pub action_sheet: Arc<dyn ActionSheet>,
    pub booking_modal: Arc<dyn BookingModal>,
    pub map_modal: Arc<dyn MapModal>,
    pub loading: Arc<dyn LoadingIndicator>,
    pub alerts: Arc<dyn AlertPresenter>,
}
