mod config;
mod error;
mod migrate;
mod plex;
mod render;
mod spotify;
#[cfg(test)]
mod testing;
mod track;

use std::process::ExitCode;

use clap::Parser;
use config::{Cli, Config};
use error::Error;
use log::warn;
use migrate::{Migration, MigrationReport};
use plex::PlexCatalog;
use render::render;
use spotify::SpotifyProvider;

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env is fine; flags and the real environment still apply.
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let result = run(&cli).await;
    if let Ok(report) = &result {
        for track in &report.unmatched {
            warn!(
                "Not in Plex: {} - {}",
                track.primary_artist().unwrap_or_default(),
                track.name
            );
        }
    }

    let (text, code) = render(&result);
    println!("{text}");
    ExitCode::from(code)
}

async fn run(cli: &Cli) -> Result<MigrationReport, Error> {
    let config = Config::from_cli(cli)?;
    let destination = PlexCatalog::new(&config.plex);
    let source = SpotifyProvider::new(&config.spotify);

    Migration::new(&source, &destination)
        .run(&cli.playlist_url, &cli.playlist_name)
        .await
}
