use crate::{error::Error, migrate::MigrationReport, plex::playlist::AssemblyOutcome};

const TROUBLESHOOTING: &str = "\nTroubleshooting tips:
1. Make sure your Plex token is valid and not expired
2. Verify your Plex server URL is correct
3. Check that your Plex server is accessible
4. Ensure you have the necessary permissions on your Plex server";

/// Text printed to stdout and the process exit code for a finished run.
pub fn render(result: &Result<MigrationReport, Error>) -> (String, u8) {
    match result {
        Ok(report) => render_report(report),
        Err(e) => render_error(e),
    }
}

fn render_report(report: &MigrationReport) -> (String, u8) {
    match &report.outcome {
        AssemblyOutcome::Created(playlist) => (
            format!(
                "Playlist '{}' created successfully with {} tracks!",
                report.playlist_name, playlist.item_count
            ),
            0,
        ),
        AssemblyOutcome::CreationFailed { .. } => ("Failed to create playlist".to_string(), 1),
    }
}

fn render_error(err: &Error) -> (String, u8) {
    let text = format!("Error: {err}");
    match err {
        Error::Configuration(_) => (format!("{text}\n{TROUBLESHOOTING}"), 2),
        Error::InvalidReference(_) => (text, 2),
        Error::NoLibraryFound | Error::NoMatchesFound => (text, 3),
        _ => (text, 1),
    }
}
