//! In-memory Spotify and Plex stand-ins for unit tests.

use std::sync::{
    atomic::{AtomicBool, AtomicUsize, Ordering},
    Mutex,
};

use anyhow::anyhow;

use crate::{
    error::{Error, Result},
    plex::{CreatedPlaylist, DestinationCatalog, LibrarySection, TrackQuery},
    spotify::{Page, SourcePlaylistProvider},
    track::{CatalogItem, SourceTrack},
};

pub fn source_track(name: &str, artist: &str) -> SourceTrack {
    SourceTrack {
        id: Some(format!("sp-{}", name.to_lowercase().replace(' ', "-"))),
        name: name.to_string(),
        album: String::new(),
        artists: vec![artist.to_string()],
    }
}

pub fn catalog_item(rating_key: &str, title: &str) -> CatalogItem {
    CatalogItem {
        rating_key: rating_key.to_string(),
        key: format!("/library/metadata/{rating_key}"),
        title: title.to_string(),
        artist: None,
    }
}

/// Serves a fixed track list in pages of `page_size`.
pub struct StubSource {
    tracks: Vec<SourceTrack>,
    page_size: usize,
    page_calls: AtomicUsize,
    authenticated: AtomicBool,
    requested_ids: Mutex<Vec<String>>,
}

impl StubSource {
    pub fn new(tracks: Vec<SourceTrack>, page_size: usize) -> Self {
        Self {
            tracks,
            page_size,
            page_calls: AtomicUsize::new(0),
            authenticated: AtomicBool::new(false),
            requested_ids: Mutex::new(Vec::new()),
        }
    }

    pub fn page_calls(&self) -> usize {
        self.page_calls.load(Ordering::SeqCst)
    }

    pub fn authenticated(&self) -> bool {
        self.authenticated.load(Ordering::SeqCst)
    }

    pub fn requested_ids(&self) -> Vec<String> {
        self.requested_ids.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl SourcePlaylistProvider for StubSource {
    async fn authenticate(&self) -> Result<()> {
        self.authenticated.store(true, Ordering::SeqCst);
        Ok(())
    }

    async fn fetch_page(&self, playlist_id: &str, offset: u32) -> Result<Page> {
        self.page_calls.fetch_add(1, Ordering::SeqCst);
        self.requested_ids.lock().unwrap().push(playlist_id.to_string());

        let start = (offset as usize).min(self.tracks.len());
        let end = (start + self.page_size).min(self.tracks.len());
        let next = (end < self.tracks.len()).then_some(end as u32);
        Ok(Page {
            tracks: self.tracks[start..end].to_vec(),
            next,
        })
    }
}

/// A Plex library whose search matches title and artist exactly.
pub struct StubCatalog {
    sections: Vec<LibrarySection>,
    tracks: Vec<(String, String, CatalogItem)>,
    reject_token: bool,
    fail_search: bool,
    fail_create: bool,
    verify_calls: AtomicUsize,
    searches: Mutex<Vec<(String, Option<String>, usize)>>,
    created: Mutex<Vec<(String, Vec<String>)>>,
}

impl StubCatalog {
    pub fn with_sections(sections: &[(&str, &str, &str)]) -> Self {
        Self {
            sections: sections
                .iter()
                .map(|(key, title, kind)| LibrarySection {
                    key: key.to_string(),
                    title: title.to_string(),
                    kind: kind.to_string(),
                })
                .collect(),
            tracks: Vec::new(),
            reject_token: false,
            fail_search: false,
            fail_create: false,
            verify_calls: AtomicUsize::new(0),
            searches: Mutex::new(Vec::new()),
            created: Mutex::new(Vec::new()),
        }
    }

    pub fn music() -> Self {
        Self::with_sections(&[("4", "Music", "artist")])
    }

    pub fn with_track(mut self, title: &str, artist: &str) -> Self {
        let rating_key = (self.tracks.len() + 100).to_string();
        let mut item = catalog_item(&rating_key, title);
        item.artist = Some(artist.to_string());
        self.tracks.push((title.to_string(), artist.to_string(), item));
        self
    }

    pub fn rejecting_token(mut self) -> Self {
        self.reject_token = true;
        self
    }

    pub fn failing_search(mut self) -> Self {
        self.fail_search = true;
        self
    }

    pub fn failing_create(mut self) -> Self {
        self.fail_create = true;
        self
    }

    pub fn verify_calls(&self) -> usize {
        self.verify_calls.load(Ordering::SeqCst)
    }

    pub fn searches(&self) -> Vec<(String, Option<String>, usize)> {
        self.searches.lock().unwrap().clone()
    }

    pub fn created(&self) -> Vec<(String, Vec<String>)> {
        self.created.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl DestinationCatalog for StubCatalog {
    async fn verify(&self) -> Result<()> {
        self.verify_calls.fetch_add(1, Ordering::SeqCst);
        if self.reject_token {
            return Err(Error::Configuration(
                "Invalid Plex token. Please check your token and try again.".to_string(),
            ));
        }
        Ok(())
    }

    async fn sections(&self) -> Result<Vec<LibrarySection>> {
        Ok(self.sections.clone())
    }

    async fn search_tracks(&self, query: &TrackQuery<'_>) -> Result<Vec<CatalogItem>> {
        self.searches.lock().unwrap().push((
            query.title.to_string(),
            query.artist.map(str::to_string),
            query.limit,
        ));
        if self.fail_search {
            return Err(anyhow!("connection reset by peer").into());
        }

        Ok(self
            .tracks
            .iter()
            .filter(|(title, artist, _)| {
                title == query.title && query.artist.map_or(true, |a| a == artist)
            })
            .map(|(_, _, item)| item.clone())
            .take(query.limit)
            .collect())
    }

    async fn create_playlist(
        &self,
        name: &str,
        items: &[CatalogItem],
    ) -> Result<CreatedPlaylist> {
        if self.fail_create {
            return Err(anyhow!("HTTP status server error (500 Internal Server Error)").into());
        }

        let mut created = self.created.lock().unwrap();
        created.push((
            name.to_string(),
            items.iter().map(|i| i.rating_key.clone()).collect(),
        ));
        Ok(CreatedPlaylist {
            rating_key: format!("pl-{}", created.len()),
            title: name.to_string(),
            item_count: items.len(),
        })
    }
}
