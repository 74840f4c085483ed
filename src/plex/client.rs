use anyhow::Context;
use reqwest::{Client, Response};

use crate::error::Result;

use super::models::{
    metadata::{Metadata, MetadataMediaContainer},
    providers::ProviderMediaContainer,
    sections::SectionMediaContainer,
    MediaContainerWrapper,
};

const TRACK_TYPE: &str = "10";

pub struct Plex {
    client: Client,
    base_url: String,
    token: String,
}

impl Plex {
    pub fn new(base_url: String, token: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    pub async fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<Response> {
        let response = self
            .client
            .get(format!("{}/{}", self.base_url, url))
            .query(query)
            .header("X-Plex-Token", &self.token)
            .header("Accept", "application/json")
            .send()
            .await?;

        Ok(response)
    }

    pub async fn post(&self, url: &str, query: &[(&str, &str)]) -> Result<Response> {
        let response = self
            .client
            .post(format!("{}/{}", self.base_url, url))
            .query(query)
            .header("X-Plex-Token", &self.token)
            .header("Accept", "application/json")
            .send()
            .await?;

        Ok(response)
    }

    pub async fn get_sections(&self) -> Result<MediaContainerWrapper<SectionMediaContainer>> {
        let sections: MediaContainerWrapper<SectionMediaContainer> = self
            .get("library/sections", &[])
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(sections)
    }

    pub async fn get_providers(&self) -> Result<MediaContainerWrapper<ProviderMediaContainer>> {
        let providers: MediaContainerWrapper<ProviderMediaContainer> = self
            .get("media/providers", &[])
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(providers)
    }

    pub async fn search_tracks(
        &self,
        title: &str,
        artist: Option<&str>,
        limit: usize,
    ) -> Result<MediaContainerWrapper<MetadataMediaContainer>> {
        let limit = limit.to_string();
        let mut query = vec![
            ("type", TRACK_TYPE),
            ("title", title),
            ("X-Plex-Container-Start", "0"),
            ("X-Plex-Container-Size", limit.as_str()),
        ];
        if let Some(artist) = artist {
            query.push(("grandparentTitle", artist));
        }

        let tracks: MediaContainerWrapper<MetadataMediaContainer> = self
            .get("library/all", &query)
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(tracks)
    }

    /// Creates a static audio playlist from a `server://` item URI.
    pub async fn create_playlist(&self, name: &str, uri: &str) -> Result<Metadata> {
        let response: MediaContainerWrapper<MetadataMediaContainer> = self
            .post(
                "playlists",
                &[("type", "audio"), ("smart", "0"), ("title", name), ("uri", uri)],
            )
            .await?
            .error_for_status()?
            .json()
            .await?;

        let playlist = response
            .media_container
            .metadata
            .and_then(|m| m.into_iter().next())
            .context("Plex did not return the created playlist")?;
        Ok(playlist)
    }
}

/// `server://<machine>/<provider>/library/metadata/<k1>,<k2>,...`
pub fn playlist_uri(
    machine_identifier: &str,
    provider_identifier: &str,
    rating_keys: &[&str],
) -> String {
    format!(
        "server://{}/{}/library/metadata/{}",
        machine_identifier,
        provider_identifier,
        rating_keys.join(",")
    )
}
