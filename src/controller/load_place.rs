use tracing::{info, warn};
use crate::controller::{PlaceDetailPage, LOAD_FAILED_MESSAGE};
use crate::error::PageError;
use crate::models::place::Place;
use crate::models::route::RouteParams;
use crate::services::navigation::DISCOVER_ROUTE;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The route carried no place id.
    Redirected,
    Loaded { is_bookable: bool },
    /// The error alert was shown and acknowledged.
    Failed,
    /// A newer navigation or teardown overtook this load.
    Superseded,
}

/// A fetched place together with what the session user may do with it.
#[derive(Clone, Debug)]
pub struct AuthorizedPlace {
    pub place: Place,
    pub is_bookable: bool,
}

pub fn authorize(place: Place, user_id: &str) -> AuthorizedPlace {
    let is_bookable = place.is_bookable_by(user_id);
    AuthorizedPlace { place, is_bookable }
}

impl PlaceDetailPage {
    /// Resolve the session user, fetch the place named by `params` and
    /// publish it along with its bookability.
    pub async fn load_place(&self, params: RouteParams) -> LoadOutcome {
        let Some(place_id) = params.place_id().map(str::to_owned) else {
            if !self.abandon_load() {
                return LoadOutcome::Superseded;
            }
            info!("No place id in route params, heading back to {}", DISCOVER_ROUTE);
            if let Err(e) = self.services().navigator.navigate_back(DISCOVER_ROUTE).await {
                warn!("Failed to navigate back to {} due to: {}", DISCOVER_ROUTE, e);
            }
            return LoadOutcome::Redirected;
        };

        let Some(generation) = self.begin_load() else {
            return LoadOutcome::Superseded;
        };

        match self.fetch_authorized(&place_id).await {
            Ok(authorized) => {
                let is_bookable = authorized.is_bookable;
                if self.finish_load(generation, authorized) {
                    info!("Loaded place {}, bookable: {}", place_id, is_bookable);
                    LoadOutcome::Loaded { is_bookable }
                } else {
                    LoadOutcome::Superseded
                }
            }
            Err(e) => {
                warn!("Could not load place {} due to: {}", place_id, e);
                if !self.is_current_load(generation) {
                    return LoadOutcome::Superseded;
                }
                self.present_error(LOAD_FAILED_MESSAGE).await;
                if !self.is_current_load(generation) {
                    return LoadOutcome::Superseded;
                }
                self.leave_to_listing().await;
                LoadOutcome::Failed
            }
        }
    }

    async fn fetch_authorized(&self, place_id: &str) -> Result<AuthorizedPlace, PageError> {
        let user_id = self.resolve_user_id().await?;
        let place = self.services().places.get_place(place_id).await?;
        Ok(authorize(place, &user_id))
    }

    async fn resolve_user_id(&self) -> Result<String, PageError> {
        self.services()
            .session
            .user_id()
            .await?
            .filter(|user_id| !user_id.is_empty())
            .ok_or(PageError::MissingSession)
    }

    /// Start a new load generation. `None` once the page is destroyed.
    fn begin_load(&self) -> Option<u64> {
        let mut generation = None;
        self.inner.state.send_if_modified(|state| {
            if state.destroyed {
                return false;
            }
            state.generation += 1;
            state.is_loading = true;
            generation = Some(state.generation);
            true
        });
        generation
    }

    /// Overtake any load in flight without starting a new one.
    /// `false` once the page is destroyed.
    fn abandon_load(&self) -> bool {
        let mut abandoned = false;
        self.inner.state.send_if_modified(|state| {
            if state.destroyed {
                return false;
            }
            state.generation += 1;
            abandoned = true;
            std::mem::replace(&mut state.is_loading, false)
        });
        abandoned
    }

    fn finish_load(&self, generation: u64, authorized: AuthorizedPlace) -> bool {
        self.inner.state.send_if_modified(|state| {
            if state.destroyed || state.generation != generation {
                return false;
            }
            state.place = Some(authorized.place);
            state.is_bookable = authorized.is_bookable;
            state.is_loading = false;
            true
        })
    }

    fn is_current_load(&self, generation: u64) -> bool {
        let state = self.inner.state.borrow();
        !state.destroyed && state.generation == generation
    }
}
