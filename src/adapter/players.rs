use std::io::{self, Write};

use super::album::{self, Album};

/// Interface the client code was written against.
pub trait AlbumPlayer {
    fn search_album(&self, title: &str) -> Option<&Album>;
    fn play_album(&self, album: &Album, out: &mut dyn Write) -> io::Result<()>;
}

pub struct Streamer<'a> {
    catalog: &'a [Album],
}

impl<'a> Streamer<'a> {
    pub fn new(catalog: &'a [Album]) -> Self {
        Self { catalog }
    }
}

impl AlbumPlayer for Streamer<'_> {
    fn search_album(&self, title: &str) -> Option<&Album> {
        album::find(self.catalog, title)
    }

    fn play_album(&self, album: &Album, out: &mut dyn Write) -> io::Result<()> {
        writeln!(
            out,
            "Streaming album {} ({}) by {}",
            album.title, album.year, album.artist
        )
    }
}

/// Same job as [`Streamer`], different method names.
pub struct Turntable<'a> {
    catalog: &'a [Album],
}

impl<'a> Turntable<'a> {
    pub fn new(catalog: &'a [Album]) -> Self {
        Self { catalog }
    }

    pub fn pick_record(&self, title: &str) -> Option<&'a Album> {
        album::find(self.catalog, title)
    }

    pub fn play_record(&self, album: &Album, out: &mut dyn Write) -> io::Result<()> {
        writeln!(
            out,
            "Playing record {} ({}) by {}",
            album.title, album.year, album.artist
        )
    }
}

/// Presents a [`Turntable`] as an [`AlbumPlayer`]. Calls are forwarded as-is.
pub struct TurntableAdapter<'a> {
    turntable: Turntable<'a>,
}

impl<'a> TurntableAdapter<'a> {
    pub fn new(turntable: Turntable<'a>) -> Self {
        Self { turntable }
    }
}

impl AlbumPlayer for TurntableAdapter<'_> {
    fn search_album(&self, title: &str) -> Option<&Album> {
        self.turntable.pick_record(title)
    }

    fn play_album(&self, album: &Album, out: &mut dyn Write) -> io::Result<()> {
        self.turntable.play_record(album, out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::album::default_catalog;

    fn played(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_streamer_plays_album() {
        let catalog = default_catalog();
        let streamer = Streamer::new(&catalog);
        let album = streamer.search_album("Autobahn").unwrap();

        assert_eq!(
            played(|out| streamer.play_album(album, out)),
            "Streaming album Autobahn (1974) by Kraftwerk\n"
        );
    }

    #[test]
    fn test_adapter_search_matches_pick_record() {
        let catalog = default_catalog();
        let turntable = Turntable::new(&catalog);
        let adapter = TurntableAdapter::new(Turntable::new(&catalog));

        for album in &catalog {
            assert_eq!(
                adapter.search_album(&album.title),
                turntable.pick_record(&album.title)
            );
        }
        assert_eq!(adapter.search_album("Kid A"), None);
    }

    #[test]
    fn test_adapter_play_matches_play_record() {
        let catalog = default_catalog();
        let turntable = Turntable::new(&catalog);
        let adapter = TurntableAdapter::new(Turntable::new(&catalog));

        for album in &catalog {
            let direct = played(|out| turntable.play_record(album, out));
            let adapted = played(|out| adapter.play_album(album, out));
            assert_eq!(direct, adapted);
        }
    }

    #[test]
    fn test_adapter_plays_unicode_artist() {
        let catalog = default_catalog();
        let adapter = TurntableAdapter::new(Turntable::new(&catalog));
        let album = adapter.search_album("Homogenic").unwrap();

        assert_eq!(
            played(|out| adapter.play_album(album, out)),
            "Playing record Homogenic (1997) by Björk\n"
        );
    }

    #[test]
    fn test_players_are_interchangeable() {
        let catalog = default_catalog();
        let players: Vec<Box<dyn AlbumPlayer + '_>> = vec![
            Box::new(Streamer::new(&catalog)),
            Box::new(TurntableAdapter::new(Turntable::new(&catalog))),
        ];

        for player in &players {
            assert_eq!(player.search_album("Violator").unwrap().artist, "Depeche Mode");
        }
    }
}
