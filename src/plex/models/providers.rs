use serde::Deserialize;

pub const LIBRARY_PROVIDER: &str = "com.plexapp.plugins.library";

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ProviderMediaContainer {
    pub machine_identifier: String,
    #[serde(rename = "MediaProvider", default)]
    pub media_provider: Vec<MediaProvider>,
}

impl ProviderMediaContainer {
    /// Identifier of the provider serving local library items. Older servers
    /// only list one provider, so fall back to the first.
    pub fn library_identifier(&self) -> Option<&str> {
        self.media_provider
            .iter()
            .find(|p| p.identifier == LIBRARY_PROVIDER)
            .or_else(|| self.media_provider.first())
            .map(|p| p.identifier.as_str())
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct MediaProvider {
    pub identifier: String,
}
