use log::{debug, info};
use rspotify::{
    model::{PlayableItem, PlaylistId, PlaylistItem},
    prelude::{BaseClient, Id, OAuthClient},
    scopes, AuthCodeSpotify, Config, Credentials, OAuth,
};

use crate::{
    config::SpotifyConfig,
    error::{Error, Result},
    track::SourceTrack,
};

use super::{Page, SourcePlaylistProvider};

const PAGE_SIZE: u32 = 100;

pub struct SpotifyProvider {
    spotify: AuthCodeSpotify,
}

impl SpotifyProvider {
    pub fn new(config: &SpotifyConfig) -> Self {
        let creds = Credentials::new(&config.client_id, &config.client_secret);
        let oauth = OAuth {
            redirect_uri: config.redirect_uri.clone(),
            scopes: scopes!("playlist-read-private", "playlist-read-collaborative"),
            ..Default::default()
        };
        let spotify = AuthCodeSpotify::with_config(
            creds,
            oauth,
            Config {
                token_cached: true,
                token_refreshing: true,
                ..Default::default()
            },
        );
        Self { spotify }
    }
}

#[async_trait::async_trait]
impl SourcePlaylistProvider for SpotifyProvider {
    async fn authenticate(&self) -> Result<()> {
        debug!("Starting Spotify authorization ...");
        let url = self.spotify.get_authorize_url(false)?;
        // Opens a browser or asks for the redirect URL on stdin unless a cached token is valid.
        self.spotify.prompt_for_token(&url)?;
        info!("Authorized with Spotify");
        Ok(())
    }

    async fn fetch_page(&self, playlist_id: &str, offset: u32) -> Result<Page> {
        let id = PlaylistId::from_id(playlist_id)
            .map_err(|_| Error::InvalidReference(playlist_id.to_string()))?;
        let page = self
            .spotify
            .playlist_items_manual(id, None, None, Some(PAGE_SIZE), Some(offset))?;

        let next = page.next.as_ref().map(|_| page.offset + page.limit);
        let tracks = page.items.into_iter().filter_map(to_source_track).collect();
        Ok(Page { tracks, next })
    }
}

fn to_source_track(item: PlaylistItem) -> Option<SourceTrack> {
    match item.track? {
        PlayableItem::Track(track) => Some(SourceTrack {
            id: track.id.as_ref().map(|id| id.id().to_string()),
            name: track.name,
            album: track.album.name,
            artists: track
                .artists
                .into_iter()
                .map(|a| a.name.trim().to_string())
                .collect(),
        }),
        PlayableItem::Episode(episode) => Some(SourceTrack {
            id: Some(episode.id.id().to_string()),
            name: episode.name,
            album: episode.show.name,
            artists: vec![episode.show.publisher],
        }),
    }
}
