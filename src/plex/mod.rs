use anyhow::Context;
use client::{playlist_uri, Plex};
use log::{debug, info};
use reqwest::StatusCode;

use crate::{
    config::PlexConfig,
    error::{Error, Result},
    track::CatalogItem,
};

pub mod client;
pub mod matcher;
pub mod models;
pub mod playlist;

/// Plex library sections of this type hold music.
pub const MUSIC_SECTION_TYPE: &str = "artist";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibrarySection {
    pub key: String,
    pub title: String,
    pub kind: String,
}

impl LibrarySection {
    pub fn is_music(&self) -> bool {
        self.kind == MUSIC_SECTION_TYPE
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackQuery<'a> {
    pub title: &'a str,
    pub artist: Option<&'a str>,
    pub limit: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedPlaylist {
    pub rating_key: String,
    pub title: String,
    pub item_count: usize,
}

#[async_trait::async_trait]
pub trait DestinationCatalog: Send + Sync {
    /// Checks that the server is reachable and accepts our token.
    async fn verify(&self) -> Result<()>;

    async fn sections(&self) -> Result<Vec<LibrarySection>>;

    async fn search_tracks(&self, query: &TrackQuery<'_>) -> Result<Vec<CatalogItem>>;

    async fn create_playlist(
        &self,
        name: &str,
        items: &[CatalogItem],
    ) -> Result<CreatedPlaylist>;
}

pub struct PlexCatalog {
    plex: Plex,
}

impl PlexCatalog {
    pub fn new(config: &PlexConfig) -> Self {
        Self {
            plex: Plex::new(config.url.clone(), config.token.clone()),
        }
    }
}

#[async_trait::async_trait]
impl DestinationCatalog for PlexCatalog {
    async fn verify(&self) -> Result<()> {
        let response = self.plex.get("library/sections", &[]).await.map_err(|e| {
            Error::Configuration(format!("Failed to connect to Plex server: {e}"))
        })?;

        match response.status() {
            StatusCode::UNAUTHORIZED => Err(Error::Configuration(
                "Invalid Plex token. Please check your token and try again.".to_string(),
            )),
            status if !status.is_success() => Err(Error::Configuration(format!(
                "Failed to connect to Plex server: HTTP {status}"
            ))),
            _ => {
                info!("Connected to Plex server");
                Ok(())
            }
        }
    }

    async fn sections(&self) -> Result<Vec<LibrarySection>> {
        let sections = self.plex.get_sections().await?;
        Ok(sections
            .media_container
            .directories
            .into_iter()
            .map(LibrarySection::from)
            .collect())
    }

    async fn search_tracks(&self, query: &TrackQuery<'_>) -> Result<Vec<CatalogItem>> {
        let results = self
            .plex
            .search_tracks(query.title, query.artist, query.limit)
            .await?;
        Ok(results
            .media_container
            .metadata
            .unwrap_or_default()
            .into_iter()
            .take(query.limit)
            .map(CatalogItem::from)
            .collect())
    }

    async fn create_playlist(
        &self,
        name: &str,
        items: &[CatalogItem],
    ) -> Result<CreatedPlaylist> {
        let providers = self.plex.get_providers().await?;
        let provider = providers
            .media_container
            .library_identifier()
            .context("Plex server reported no library provider")?;

        let keys: Vec<&str> = items.iter().map(|i| i.rating_key.as_str()).collect();
        let uri = playlist_uri(&providers.media_container.machine_identifier, provider, &keys);
        debug!("Creating playlist {name:?} from {uri}");

        let playlist = self.plex.create_playlist(name, &uri).await?;
        Ok(CreatedPlaylist {
            rating_key: playlist.rating_key,
            title: playlist.title,
            item_count: playlist.leaf_count.unwrap_or(items.len()),
        })
    }
}
