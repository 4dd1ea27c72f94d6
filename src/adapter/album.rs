use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Album {
    pub title: String,
    pub artist: String,
    pub year: u16,
}

impl Album {
    pub fn new(title: impl Into<String>, artist: impl Into<String>, year: u16) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            year,
        }
    }
}

/// The record collection every player in the demo shares.
pub fn default_catalog() -> Vec<Album> {
    vec![
        Album::new("Autobahn", "Kraftwerk", 1974),
        Album::new("Violator", "Depeche Mode", 1990),
        Album::new("Homogenic", "Björk", 1997),
    ]
}

/// First album in `catalog` titled exactly `title`.
pub(crate) fn find<'a>(catalog: &'a [Album], title: &str) -> Option<&'a Album> {
    catalog.iter().find(|album| album.title == title)
}
