/// A playlist entry as read from Spotify.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceTrack {
    pub id: Option<String>,
    pub name: String,
    pub album: String,
    pub artists: Vec<String>,
}

impl SourceTrack {
    pub fn primary_artist(&self) -> Option<&str> {
        self.artists.first().map(String::as_str)
    }
}

/// A track that lives in the Plex library and can be put on a playlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogItem {
    pub rating_key: String,
    pub key: String,
    pub title: String,
    pub artist: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackMatch {
    pub source: SourceTrack,
    pub item: Option<CatalogItem>,
}

impl TrackMatch {
    pub fn is_match(&self) -> bool {
        self.item.is_some()
    }
}
