use thiserror::Error;

#[derive(Debug, Error)]
pub enum PageError {
    #[error("no place is loaded")]
    NoPlaceLoaded,

    #[error("a booking is already in progress")]
    BookingInProgress,

    #[error("found no user")]
    MissingSession,

    #[error(transparent)]
    Collaborator(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("place {0} does not exist")]
    PlaceNotFound(String),

    #[error("no user is signed in")]
    MissingSession,

    #[error("backend answered {status} for {url}")]
    UnexpectedStatus {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
}
