use log::info;

use crate::{
    error::Result,
    plex::{
        matcher::{match_tracks, matched_items},
        playlist::{assemble_playlist, require_music_library, AssemblyOutcome},
        DestinationCatalog,
    },
    spotify::{fetch_all_tracks, reference::extract_playlist_id, SourcePlaylistProvider},
    track::SourceTrack,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationReport {
    pub playlist_name: String,
    pub fetched: usize,
    pub matched: usize,
    pub unmatched: Vec<SourceTrack>,
    pub outcome: AssemblyOutcome,
}

pub struct Migration<'a> {
    source: &'a dyn SourcePlaylistProvider,
    destination: &'a dyn DestinationCatalog,
}

impl<'a> Migration<'a> {
    pub fn new(
        source: &'a dyn SourcePlaylistProvider,
        destination: &'a dyn DestinationCatalog,
    ) -> Self {
        Self {
            source,
            destination,
        }
    }

    pub async fn run(&self, reference: &str, playlist_name: &str) -> Result<MigrationReport> {
        let playlist_id = extract_playlist_id(reference)?;

        self.destination.verify().await?;
        self.source.authenticate().await?;

        info!("Fetching Spotify playlist {playlist_id} ...");
        let tracks = fetch_all_tracks(self.source, &playlist_id).await?;
        info!("Fetched {} tracks from Spotify", tracks.len());

        require_music_library(self.destination).await?;

        info!("Searching Plex for {} tracks ...", tracks.len());
        let matches = match_tracks(self.destination, &tracks).await?;
        let items = matched_items(&matches);
        info!("Matched {} of {} tracks", items.len(), tracks.len());

        let outcome = assemble_playlist(self.destination, playlist_name, &items).await?;

        Ok(MigrationReport {
            playlist_name: playlist_name.to_string(),
            fetched: tracks.len(),
            matched: items.len(),
            unmatched: matches
                .into_iter()
                .filter(|m| !m.is_match())
                .map(|m| m.source)
                .collect(),
            outcome,
        })
    }
}
