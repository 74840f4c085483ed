use serde::Deserialize;

pub mod metadata;
pub mod providers;
pub mod sections;

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MediaContainerWrapper<T> {
    #[serde(rename = "MediaContainer")]
    pub(crate) media_container: T,
}
