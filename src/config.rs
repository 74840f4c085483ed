use clap::Parser;
use reqwest::Url;

use crate::error::{Error, Result};

pub const DEFAULT_REDIRECT_URI: &str = "http://localhost:8888/callback";

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "spotify-plex-playlist")]
#[command(version, about = "Convert Spotify playlists to Plex playlists", long_about = None)]
pub struct Cli {
    /// Spotify playlist URL or URI
    pub playlist_url: String,

    /// Name for the new Plex playlist
    pub playlist_name: String,

    /// Spotify Client ID (SPOTIPY_CLIENT_ID is also read)
    #[arg(long, env = "SPOTIFY_CLIENT_ID")]
    pub spotify_client_id: Option<String>,

    /// Spotify Client Secret (SPOTIPY_CLIENT_SECRET is also read)
    #[arg(long, env = "SPOTIFY_CLIENT_SECRET", hide_env_values = true)]
    pub spotify_client_secret: Option<String>,

    /// Spotify Redirect URI (SPOTIPY_REDIRECT_URI is also read)
    #[arg(long, env = "SPOTIFY_REDIRECT_URI")]
    pub spotify_redirect_uri: Option<String>,

    /// Plex Server URL
    #[arg(long, env = "PLEX_URL")]
    pub plex_url: Option<String>,

    /// Plex Authentication Token
    #[arg(long, env = "PLEX_TOKEN", hide_env_values = true)]
    pub plex_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpotifyConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlexConfig {
    pub url: String,
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub spotify: SpotifyConfig,
    pub plex: PlexConfig,
}

impl Config {
    /// Resolves credentials from the parsed command line. Clap has already
    /// fallen back to the environment for any flag that was not given.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        Self::resolve(cli, |name| std::env::var(name).ok())
    }

    /// Like `from_cli`, with the legacy `SPOTIPY_*` variables looked up
    /// through `legacy_env` when a Spotify value is still missing.
    pub fn resolve(cli: &Cli, legacy_env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let plex_url = required(
            &cli.plex_url,
            "Plex server URL is required. \
             Set PLEX_URL environment variable or use --plex-url argument.",
        )?;
        let plex_token = required(
            &cli.plex_token,
            "Plex token is required. \
             Set PLEX_TOKEN environment variable or use --plex-token argument.",
        )?;
        match Url::parse(&plex_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            _ => {
                return Err(Error::Configuration(format!(
                    "Invalid Plex server URL '{plex_url}'. \
                     Expected something like http://127.0.0.1:32400"
                )))
            }
        }

        let client_id = cli
            .spotify_client_id
            .clone()
            .or_else(|| legacy_env("SPOTIPY_CLIENT_ID"));
        let client_id = required(
            &client_id,
            "Spotify client ID is required. \
             Set SPOTIFY_CLIENT_ID environment variable or use --spotify-client-id argument.",
        )?;
        let client_secret = cli
            .spotify_client_secret
            .clone()
            .or_else(|| legacy_env("SPOTIPY_CLIENT_SECRET"));
        let client_secret = required(
            &client_secret,
            "Spotify client secret is required. \
             Set SPOTIFY_CLIENT_SECRET environment variable \
             or use --spotify-client-secret argument.",
        )?;
        let redirect_uri = cli
            .spotify_redirect_uri
            .clone()
            .or_else(|| legacy_env("SPOTIPY_REDIRECT_URI"));
        let redirect_uri = redirect_uri
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_REDIRECT_URI)
            .to_string();

        Ok(Config {
            spotify: SpotifyConfig {
                client_id,
                client_secret,
                redirect_uri,
            },
            plex: PlexConfig {
                url: plex_url.trim_end_matches('/').to_string(),
                token: plex_token,
            },
        })
    }
}

fn required(value: &Option<String>, message: &str) -> Result<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .ok_or_else(|| Error::Configuration(message.to_string()))
}
