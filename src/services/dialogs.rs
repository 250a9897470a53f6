use async_trait::async_trait;
use crate::models::booking::{BookingDraft, DateMode};
use crate::models::place::{Coordinates, Place};

pub const CANCEL_ROLE: &str = "cancel";

#[derive(Clone, Debug, PartialEq)]
pub struct ActionSheetOption {
    pub text: String,
    pub mode: DateMode,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ActionSheetRequest {
    pub header: String,
    pub options: Vec<ActionSheetOption>,
    pub cancel_text: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionSheetChoice {
    Selected(DateMode),
    Cancelled,
}

/// How a modal was closed. Only `Confirmed` carries a payload.
#[derive(Clone, Debug, PartialEq)]
pub enum ModalResult<T> {
    Confirmed(T),
    Dismissed { role: Option<String> },
}

impl<T> ModalResult<T> {
    pub fn cancelled() -> Self {
        ModalResult::Dismissed {
            role: Some(CANCEL_ROLE.to_string()),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MapModalRequest {
    pub center: Coordinates,
    pub selectable: bool,
    pub close_button_text: String,
    pub title: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alert {
    pub header: String,
    pub message: String,
    pub button_text: String,
}

#[async_trait]
pub trait ActionSheet: Send + Sync {
    async fn present(&self, request: ActionSheetRequest) -> anyhow::Result<ActionSheetChoice>;
}

#[async_trait]
pub trait BookingModal: Send + Sync {
    /// Resolves once the modal is dismissed.
    async fn open(&self, place: &Place, mode: DateMode) -> anyhow::Result<ModalResult<BookingDraft>>;
}

#[async_trait]
pub trait MapModal: Send + Sync {
    async fn open(&self, request: MapModalRequest) -> anyhow::Result<()>;
}

#[async_trait]
pub trait LoadingIndicator: Send + Sync {
    async fn present(&self, message: &str) -> anyhow::Result<()>;

    async fn dismiss(&self) -> anyhow::Result<()>;
}

#[async_trait]
pub trait AlertPresenter: Send + Sync {
    /// Resolves when the user acknowledges the alert's single button.
    async fn present(&self, alert: Alert) -> anyhow::Result<()>;
}
