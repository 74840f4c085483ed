use serde::Deserialize;

use crate::track::CatalogItem;

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MetadataMediaContainer {
    #[serde(rename = "Metadata")]
    pub metadata: Option<Vec<Metadata>>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub key: String,
    pub rating_key: String,
    pub title: String,
    pub original_title: Option<String>,
    pub grandparent_title: Option<String>,
    pub leaf_count: Option<usize>,
}

impl From<Metadata> for CatalogItem {
    fn from(m: Metadata) -> CatalogItem {
        CatalogItem {
            rating_key: m.rating_key,
            key: m.key,
            title: m.title,
            // tracks credited to a guest keep the performer in originalTitle
            artist: m.original_title.or(m.grandparent_title),
        }
    }
}
