use crate::error::{Error, Result};

const URI_PREFIX: &str = "spotify:playlist:";
const URL_PREFIX: &str = "open.spotify.com/playlist/";

/// Pulls the playlist id out of a `spotify:playlist:<id>` URI or an
/// `https://open.spotify.com/playlist/<id>?si=...` share link.
pub fn extract_playlist_id(reference: &str) -> Result<String> {
    let reference = reference.trim();

    let rest = if let Some((_, rest)) = reference.split_once(URI_PREFIX) {
        rest
    } else if let Some((_, rest)) = reference.split_once(URL_PREFIX) {
        rest
    } else {
        return Err(Error::InvalidReference(reference.to_string()));
    };

    let id = rest.split('?').next().unwrap_or_default();
    if id.is_empty() {
        return Err(Error::InvalidReference(reference.to_string()));
    }
    Ok(id.to_string())
}
