use std::sync::Arc;
use std::time::Duration;
use anyhow::Context;
use clap::Parser;
use dotenv::dotenv;
use tracing::{info, warn};
use place_detail::config::Config;
use place_detail::controller::booking_flow::BookingOutcome;
use place_detail::controller::load_place::LoadOutcome;
use place_detail::controller::PlaceDetailPage;
use place_detail::helpers::terminal::TerminalUi;
use place_detail::models::route::RouteParams;
use place_detail::repositories::http_bookings_repo::BookingsHttpRepo;
use place_detail::repositories::http_places_repo::PlacesHttpRepo;
use place_detail::services::session::{SessionProvider, StaticSession};
use place_detail::services::PageServices;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let config = Config::parse();
    info!("Starting place detail in {} environment", config.environment);

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .build()
        .context("Error building the HTTP client")?;
    let session: Arc<dyn SessionProvider> = Arc::new(StaticSession::new(config.user_id.clone()));
    let ui = Arc::new(TerminalUi::stdio());

    let page = PlaceDetailPage::new(PageServices {
        navigator: ui.clone(),
        session: session.clone(),
        places: Arc::new(PlacesHttpRepo::new(client.clone(), config.api_base_url.clone())),
        bookings: Arc::new(BookingsHttpRepo::new(client, config.api_base_url.clone(), session)),
        action_sheet: ui.clone(),
        booking_modal: ui.clone(),
        map_modal: ui.clone(),
        loading: ui.clone(),
        alerts: ui.clone(),
    });

    let outcome = page.load_place(RouteParams::from(config.place_id.clone())).await;
    match outcome {
        LoadOutcome::Loaded { is_bookable } => run_menu(&page, &*ui, is_bookable).await?,
        other => info!("Leaving place detail after {:?}", other),
    }

    page.destroy();
    Ok(())
}

async fn run_menu<R, W>(
    page: &PlaceDetailPage,
    ui: &TerminalUi<R, W>,
    is_bookable: bool,
) -> anyhow::Result<()>
where
    R: tokio::io::AsyncBufRead + Unpin + Send,
    W: tokio::io::AsyncWrite + Unpin + Send,
{
    if let Some(place) = page.state().place {
        ui.print(&format!("{}\n{}\n${:.2} a night", place.title, place.description, place.price)).await?;
    }

    let prompt = if is_bookable {
        "[b]ook, [m]ap or [q]uit?"
    } else {
        "[m]ap or [q]uit?"
    };

    while let Some(command) = ui.read_command(prompt).await? {
        match command.as_str() {
            "b" | "book" if is_bookable => match page.book_place().await {
                Ok(BookingOutcome::Booked(booking)) => {
                    ui.print(&format!("Booked! Reference {}", booking.id)).await?;
                }
                Ok(outcome) => info!("Booking flow ended with {:?}", outcome),
                Err(e) => warn!("Could not start booking due to: {}", e),
            },
            "m" | "map" => {
                if let Err(e) = page.show_full_map().await {
                    warn!("Could not show the map due to: {}", e);
                }
            }
            "q" | "quit" => break,
            _ => ui.print("Unknown command.").await?,
        }
    }
    Ok(())
}
