use crate::controller::PlaceDetailPage;
use crate::error::PageError;
use crate::models::place::Place;
use crate::services::dialogs::MapModalRequest;

pub const MAP_CLOSE_TEXT: &str = "Close";

/// Read-only map centered on the place, titled with its address.
pub fn full_map_request(place: &Place) -> MapModalRequest {
    MapModalRequest {
        center: place.coordinates(),
        selectable: false,
        close_button_text: MAP_CLOSE_TEXT.to_string(),
        title: place.location.address.clone(),
    }
}

impl PlaceDetailPage {
    pub async fn show_full_map(&self) -> Result<(), PageError> {
        let request = {
            let state = self.inner.state.borrow();
            let place = state.place.as_ref().ok_or(PageError::NoPlaceLoaded)?;
            full_map_request(place)
        };
        self.services().map_modal.open(request).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::controller::fakes::{sample_place, Fixture};
    use crate::models::place::Coordinates;
    use crate::models::route::RouteParams;
    use super::*;

    #[tokio::test]
    async fn map_is_seeded_with_place_location() {
        let fixture = Fixture::new(Some("u1"));
        fixture.places.insert(sample_place("p1", "owner"));
        let page = fixture.page();
        page.load_place(RouteParams::for_place("p1")).await;

        page.show_full_map().await.unwrap();

        let requests = fixture.map_modal.requests();
        assert_eq!(
            requests,
            vec![MapModalRequest {
                center: Coordinates { lat: 1.3521, lng: 103.8198 },
                selectable: false,
                close_button_text: "Close".to_string(),
                title: "1 Riverside Walk".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn map_needs_a_loaded_place() {
        let fixture = Fixture::new(Some("u1"));
        let page = fixture.page();

        assert!(matches!(page.show_full_map().await, Err(PageError::NoPlaceLoaded)));
        assert!(fixture.map_modal.requests().is_empty());
    }
}
