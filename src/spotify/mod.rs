use log::debug;

use crate::{error::Result, track::SourceTrack};

pub mod client;
pub mod reference;

pub use client::SpotifyProvider;

/// One page of playlist items plus the offset of the page after it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    pub tracks: Vec<SourceTrack>,
    pub next: Option<u32>,
}

#[async_trait::async_trait]
pub trait SourcePlaylistProvider: Send + Sync {
    async fn authenticate(&self) -> Result<()>;

    async fn fetch_page(&self, playlist_id: &str, offset: u32) -> Result<Page>;
}

pub async fn fetch_all_tracks(
    provider: &dyn SourcePlaylistProvider,
    playlist_id: &str,
) -> Result<Vec<SourceTrack>> {
    let mut tracks: Vec<SourceTrack> = Vec::new();
    let mut offset = Some(0);

    while let Some(current) = offset {
        let page = provider.fetch_page(playlist_id, current).await?;
        debug!(
            "Fetched {} playlist items at offset {}",
            page.tracks.len(),
            current
        );
        tracks.extend(page.tracks);
        offset = page.next;
    }

    Ok(tracks)
}
