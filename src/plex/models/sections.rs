use serde::Deserialize;

use crate::plex::LibrarySection;

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SectionMediaContainer {
    #[serde(rename = "Directory", default)]
    pub directories: Vec<Directory>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Directory {
    pub key: String,
    pub title: String,
    #[serde(rename = "type")]
    pub rtype: String,
}

impl From<Directory> for LibrarySection {
    fn from(d: Directory) -> LibrarySection {
        LibrarySection {
            key: d.key,
            title: d.title,
            kind: d.rtype,
        }
    }
}
