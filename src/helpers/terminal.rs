use async_trait::async_trait;
use time::macros::format_description;
use time::{Date, OffsetDateTime};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout};
use tokio::sync::Mutex;
use tracing::info;
use crate::helpers::random_dates::{random_stay, validate_stay};
use crate::models::booking::{BookingDraft, DateMode};
use crate::models::place::Place;
use crate::services::dialogs::{
    ActionSheet, ActionSheetChoice, ActionSheetRequest, Alert, AlertPresenter, BookingModal,
    LoadingIndicator, MapModal, MapModalRequest, ModalResult,
};
use crate::services::navigation::Navigator;

pub const MAX_GUESTS: u32 = 4;

/// Line oriented stand-in for every dialog of the place detail screen.
///
/// Dialogs are serialized: one holds the terminal until it is dismissed.
pub struct TerminalUi<R, W> {
    io: Mutex<TerminalIo<R, W>>,
}

struct TerminalIo<R, W> {
    reader: R,
    writer: W,
}

impl TerminalUi<BufReader<Stdin>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
    }
}

impl<R, W> TerminalUi<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            io: Mutex::new(TerminalIo { reader, writer }),
        }
    }

    pub fn into_inner(self) -> (R, W) {
        let io = self.io.into_inner();
        (io.reader, io.writer)
    }

    pub async fn print(&self, text: &str) -> anyhow::Result<()> {
        self.io.lock().await.say(text).await
    }

    /// Prompt for a free-form line. `None` once input is exhausted.
    pub async fn read_command(&self, prompt: &str) -> anyhow::Result<Option<String>> {
        self.io.lock().await.ask(prompt).await
    }
}

impl<R, W> TerminalIo<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn say(&mut self, text: &str) -> anyhow::Result<()> {
        self.writer.write_all(text.as_bytes()).await?;
        self.writer.write_all(b"\n").await?;
        self.writer.flush().await?;
        Ok(())
    }

    async fn ask(&mut self, question: &str) -> anyhow::Result<Option<String>> {
        self.writer.write_all(question.as_bytes()).await?;
        self.writer.write_all(b" ").await?;
        self.writer.flush().await?;

        let mut line = String::new();
        if self.reader.read_line(&mut line).await? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    async fn ask_non_empty(&mut self, question: &str) -> anyhow::Result<Option<String>> {
        loop {
            match self.ask(question).await? {
                Some(answer) if answer.is_empty() => self.say("A value is required.").await?,
                other => return Ok(other),
            }
        }
    }

    async fn ask_date(&mut self, question: &str) -> anyhow::Result<Option<OffsetDateTime>> {
        loop {
            let Some(answer) = self.ask(question).await? else {
                return Ok(None);
            };
            match Date::parse(&answer, format_description!("[year]-[month]-[day]")) {
                Ok(date) => return Ok(Some(date.midnight().assume_utc())),
                Err(_) => self.say("Please enter a date as YYYY-MM-DD.").await?,
            }
        }
    }

    async fn ask_stay(&mut self, place: &Place) -> anyhow::Result<Option<(OffsetDateTime, OffsetDateTime)>> {
        loop {
            let Some(start) = self.ask_date("From (YYYY-MM-DD):").await? else {
                return Ok(None);
            };
            let Some(end) = self.ask_date("To (YYYY-MM-DD):").await? else {
                return Ok(None);
            };
            match validate_stay(place, start, end) {
                Ok(()) => return Ok(Some((start, end))),
                Err(e) => self.say(&format!("Invalid dates: {}.", e)).await?,
            }
        }
    }

    async fn ask_guests(&mut self) -> anyhow::Result<Option<u32>> {
        let question = format!("Number of guests (1-{}):", MAX_GUESTS);
        loop {
            let Some(answer) = self.ask(&question).await? else {
                return Ok(None);
            };
            match answer.parse::<u32>() {
                Ok(guests) if (1..=MAX_GUESTS).contains(&guests) => return Ok(Some(guests)),
                _ => self.say(&format!("Please enter a number from 1 to {}.", MAX_GUESTS)).await?,
            }
        }
    }

    async fn collect_draft(
        &mut self,
        place: &Place,
        proposal: Option<(OffsetDateTime, OffsetDateTime)>,
    ) -> anyhow::Result<Option<BookingDraft>> {
        let Some(first_name) = self.ask_non_empty("First name:").await? else {
            return Ok(None);
        };
        let Some(last_name) = self.ask_non_empty("Last name:").await? else {
            return Ok(None);
        };
        let Some(guest_number) = self.ask_guests().await? else {
            return Ok(None);
        };

        let (start_date, end_date) = match proposal {
            Some(stay) => stay,
            None => match self.ask_stay(place).await? {
                Some(stay) => stay,
                None => return Ok(None),
            },
        };

        Ok(Some(BookingDraft {
            first_name,
            last_name,
            guest_number,
            start_date,
            end_date,
        }))
    }
}

fn propose_stay(place: &Place) -> Option<(OffsetDateTime, OffsetDateTime)> {
    random_stay(&mut rand::rng(), place.available_from, place.available_to)
}

fn format_day(at: OffsetDateTime) -> anyhow::Result<String> {
    Ok(at.date().format(format_description!("[year]-[month]-[day]"))?)
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes")
}

#[async_trait]
impl<R, W> Navigator for TerminalUi<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn navigate_back(&self, route: &str) -> anyhow::Result<()> {
        info!("Navigating back to {}", route);
        self.io.lock().await.say(&format!("<- {}", route)).await
    }

    async fn navigate(&self, route: &str) -> anyhow::Result<()> {
        info!("Navigating to {}", route);
        self.io.lock().await.say(&format!("-> {}", route)).await
    }
}

#[async_trait]
impl<R, W> ActionSheet for TerminalUi<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn present(&self, request: ActionSheetRequest) -> anyhow::Result<ActionSheetChoice> {
        let mut io = self.io.lock().await;
        io.say(&request.header).await?;
        for (index, option) in request.options.iter().enumerate() {
            io.say(&format!("  {}) {}", index + 1, option.text)).await?;
        }
        io.say(&format!("  0) {}", request.cancel_text)).await?;

        loop {
            let Some(answer) = io.ask(">").await? else {
                return Ok(ActionSheetChoice::Cancelled);
            };
            match answer.parse::<usize>() {
                Ok(0) => return Ok(ActionSheetChoice::Cancelled),
                Ok(n) if n <= request.options.len() => {
                    return Ok(ActionSheetChoice::Selected(request.options[n - 1].mode));
                }
                _ => io.say("Unknown option.").await?,
            }
        }
    }
}

#[async_trait]
impl<R, W> BookingModal for TerminalUi<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn open(&self, place: &Place, mode: DateMode) -> anyhow::Result<ModalResult<BookingDraft>> {
        let proposal = match mode {
            DateMode::Random => propose_stay(place),
            DateMode::Select => None,
        };

        let mut io = self.io.lock().await;
        io.say(&format!("Book {} for ${:.2} a night", place.title, place.price)).await?;
        match (mode, proposal) {
            (DateMode::Random, Some((start, end))) => {
                io.say(&format!("Proposed stay: {} to {}", format_day(start)?, format_day(end)?)).await?;
            }
            (DateMode::Random, None) => {
                io.say("No random stay fits the availability, please pick the dates.").await?;
            }
            (DateMode::Select, _) => {}
        }

        let Some(draft) = io.collect_draft(place, proposal).await? else {
            return Ok(ModalResult::cancelled());
        };

        match io.ask("Book this place? [y/N]").await? {
            Some(answer) if is_yes(&answer) => Ok(ModalResult::Confirmed(draft)),
            _ => Ok(ModalResult::cancelled()),
        }
    }
}

#[async_trait]
impl<R, W> MapModal for TerminalUi<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn open(&self, request: MapModalRequest) -> anyhow::Result<()> {
        let mut io = self.io.lock().await;
        io.say(&request.title).await?;
        io.say(&format!("  lat {:.6}, lng {:.6}", request.center.lat, request.center.lng)).await?;
        io.ask(&format!("[{}]", request.close_button_text)).await?;
        Ok(())
    }
}

#[async_trait]
impl<R, W> LoadingIndicator for TerminalUi<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn present(&self, message: &str) -> anyhow::Result<()> {
        self.io.lock().await.say(message).await
    }

    async fn dismiss(&self) -> anyhow::Result<()> {
        self.io.lock().await.say("Done.").await
    }
}

#[async_trait]
impl<R, W> AlertPresenter for TerminalUi<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn present(&self, alert: Alert) -> anyhow::Result<()> {
        let mut io = self.io.lock().await;
        io.say(&alert.header).await?;
        io.say(&alert.message).await?;
        io.ask(&format!("[{}]", alert.button_text)).await?;
        Ok(())
    }
}
