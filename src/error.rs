use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Configuration(String),

    #[error("Invalid Spotify playlist URL: {0}")]
    InvalidReference(String),

    #[error("No music library found in Plex")]
    NoLibraryFound,

    #[error("No matching tracks found in Plex library")]
    NoMatchesFound,

    #[error("Spotify error: {0}")]
    Spotify(#[from] rspotify::ClientError),

    #[error("Plex request failed: {0}")]
    Plex(#[from] reqwest::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

