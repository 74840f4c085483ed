use log::{error, info};

use crate::{
    error::{Error, Result},
    track::CatalogItem,
};

use super::{CreatedPlaylist, DestinationCatalog, LibrarySection};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssemblyOutcome {
    Created(CreatedPlaylist),
    CreationFailed { reason: String },
}

pub async fn require_music_library(
    catalog: &dyn DestinationCatalog,
) -> Result<Vec<LibrarySection>> {
    let music: Vec<LibrarySection> = catalog
        .sections()
        .await?
        .into_iter()
        .filter(LibrarySection::is_music)
        .collect();

    if music.is_empty() {
        return Err(Error::NoLibraryFound);
    }
    Ok(music)
}

/// Submits one creation request for all matched items. A failed request is
/// logged and reported as an outcome instead of an error.
pub async fn assemble_playlist(
    catalog: &dyn DestinationCatalog,
    name: &str,
    items: &[CatalogItem],
) -> Result<AssemblyOutcome> {
    if items.is_empty() {
        return Err(Error::NoMatchesFound);
    }

    match catalog.create_playlist(name, items).await {
        Ok(playlist) => {
            info!(
                "Created playlist {:?} ({}) with {} tracks",
                playlist.title, playlist.rating_key, playlist.item_count
            );
            Ok(AssemblyOutcome::Created(playlist))
        }
        Err(e) => {
            error!("Error creating playlist: {e}");
            Ok(AssemblyOutcome::CreationFailed {
                reason: e.to_string(),
            })
        }
    }
}
