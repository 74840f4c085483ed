use log::{debug, info};

use crate::{
    error::Result,
    track::{CatalogItem, SourceTrack, TrackMatch},
};

use super::{DestinationCatalog, TrackQuery};

/// Plex ranks the results; we only ever take its best guess.
const SEARCH_LIMIT: usize = 1;

pub async fn match_track(
    catalog: &dyn DestinationCatalog,
    track: &SourceTrack,
) -> Result<Option<CatalogItem>> {
    let query = TrackQuery {
        title: &track.name,
        artist: track.primary_artist(),
        limit: SEARCH_LIMIT,
    };
    let results = catalog.search_tracks(&query).await?;
    Ok(results.into_iter().next())
}

pub async fn match_tracks(
    catalog: &dyn DestinationCatalog,
    tracks: &[SourceTrack],
) -> Result<Vec<TrackMatch>> {
    let mut matches = Vec::with_capacity(tracks.len());

    for (i, track) in tracks.iter().enumerate() {
        let item = match_track(catalog, track).await?;
        match &item {
            Some(found) => debug!(
                "[{}/{}] {} - {} => {} ({})",
                i + 1,
                tracks.len(),
                track.primary_artist().unwrap_or_default(),
                track.name,
                found.title,
                found.rating_key
            ),
            None => info!(
                "No match found for {} - {}",
                track.primary_artist().unwrap_or_default(),
                track.name
            ),
        }
        matches.push(TrackMatch {
            source: track.clone(),
            item,
        });
    }

    Ok(matches)
}

/// Matched items in source playlist order.
pub fn matched_items(matches: &[TrackMatch]) -> Vec<CatalogItem> {
    matches.iter().filter_map(|m| m.item.clone()).collect()
}
