use std::sync::Arc;
use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};
use crate::models::booking::DateMode;
use crate::models::place::Place;
use crate::models::route::RouteParams;
use crate::services::dialogs::Alert;
use crate::services::navigation::DISCOVER_ROUTE;
use crate::services::PageServices;

pub mod booking_flow;
pub mod load_place;
pub mod map_viewer;

pub const ERROR_HEADER: &str = "An error ocurred!";
pub const LOAD_FAILED_MESSAGE: &str = "Could not load place.";
pub const BOOKING_FAILED_MESSAGE: &str = "Could not create booking.";
pub const ACKNOWLEDGE_TEXT: &str = "Okay";

/// Where the booking interaction currently stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BookingPhase {
    #[default]
    Idle,
    ChoosingMode,
    CollectingDetails(DateMode),
    Submitting,
}

#[derive(Clone, Debug, Default)]
pub struct PageState {
    pub place: Option<Place>,
    pub is_bookable: bool,
    pub is_loading: bool,
    pub booking: BookingPhase,
    generation: u64,
    destroyed: bool,
}

impl PageState {
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }
}

/// Controller of the place detail screen.
///
/// Cloning is cheap and every clone drives the same page.
#[derive(Clone)]
pub struct PlaceDetailPage {
    inner: Arc<PageInner>,
}

struct PageInner {
    services: PageServices,
    state: watch::Sender<PageState>,
    subscription: Mutex<Option<JoinHandle<()>>>,
    load_task: Mutex<Option<JoinHandle<()>>>,
}

impl PlaceDetailPage {
    pub fn new(services: PageServices) -> Self {
        let (state, _) = watch::channel(PageState::default());
        Self {
            inner: Arc::new(PageInner {
                services,
                state,
                subscription: Mutex::new(None),
                load_task: Mutex::new(None),
            }),
        }
    }

    pub fn state(&self) -> PageState {
        self.inner.state.borrow().clone()
    }

    pub fn watch_state(&self) -> watch::Receiver<PageState> {
        self.inner.state.subscribe()
    }

    pub(crate) fn services(&self) -> &PageServices {
        &self.inner.services
    }

    /// Follow route changes, loading the place named by each new set of
    /// params. A newer navigation aborts the load of the previous one.
    pub fn subscribe(&self, mut routes: watch::Receiver<RouteParams>) {
        if self.state().destroyed {
            warn!("Ignoring route subscription on a destroyed place detail page");
            return;
        }

        let page = self.clone();
        let listener = tokio::spawn(async move {
            loop {
                let params = routes.borrow_and_update().clone();
                page.spawn_load(params);
                if routes.changed().await.is_err() {
                    debug!("Route params sender dropped, stopping place detail listener");
                    break;
                }
            }
        });

        if let Some(previous) = self.inner.subscription.lock().replace(listener) {
            previous.abort();
        }
    }

    fn spawn_load(&self, params: RouteParams) {
        let page = self.clone();
        let load = tokio::spawn(async move {
            let outcome = page.load_place(params).await;
            debug!("Place load finished with {:?}", outcome);
        });

        if let Some(previous) = self.inner.load_task.lock().replace(load) {
            previous.abort();
        }
    }

    /// Release the route subscription and discard any load still in flight.
    pub fn destroy(&self) {
        self.inner.state.send_modify(|state| {
            state.destroyed = true;
            state.generation += 1;
        });

        if let Some(listener) = self.inner.subscription.lock().take() {
            listener.abort();
        }
        if let Some(load) = self.inner.load_task.lock().take() {
            load.abort();
        }
    }

    async fn leave_to_listing(&self) {
        if let Err(e) = self.inner.services.navigator.navigate(DISCOVER_ROUTE).await {
            warn!("Failed to navigate to {} due to: {}", DISCOVER_ROUTE, e);
        }
    }

    async fn present_error(&self, message: &str) {
        let alert = Alert {
            header: ERROR_HEADER.to_string(),
            message: message.to_string(),
            button_text: ACKNOWLEDGE_TEXT.to_string(),
        };
        if let Err(e) = self.inner.services.alerts.present(alert).await {
            warn!("Failed to present error alert due to: {}", e);
        }
    }
}

#[cfg(test)]
pub(crate) mod fakes;
