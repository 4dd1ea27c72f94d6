//! Pattern 3: Adapter
//!
//! A streamer and a turntable can both find and play albums, but only the
//! streamer speaks the `AlbumPlayer` interface. The adapter fixes the names
//! without touching the behaviour.

use std::io::Write;

use tracing::debug;

pub mod album;
pub mod players;

pub use album::{default_catalog, Album};
pub use players::{AlbumPlayer, Streamer, Turntable, TurntableAdapter};

use crate::{PatternError, Result};

/// Finds `title` on any player and plays it.
pub fn play_title(player: &dyn AlbumPlayer, title: &str, out: &mut dyn Write) -> Result<()> {
    let album = player
        .search_album(title)
        .ok_or_else(|| PatternError::AlbumNotFound(title.to_string()))?;
    debug!(title = %album.title, artist = %album.artist, "playing album");
    player.play_album(album, out)?;
    Ok(())
}

/// The turntable has to be called by its own method names.
pub fn no_adapter_example(catalog: &[Album], title: &str, out: &mut dyn Write) -> Result<()> {
    let streamer = Streamer::new(catalog);
    play_title(&streamer, title, out)?;

    let turntable = Turntable::new(catalog);
    let album = turntable
        .pick_record(title)
        .ok_or_else(|| PatternError::AlbumNotFound(title.to_string()))?;
    turntable.play_record(album, out)?;
    Ok(())
}

pub fn adapter_example(catalog: &[Album], title: &str, out: &mut dyn Write) -> Result<()> {
    let streamer = Streamer::new(catalog);
    play_title(&streamer, title, out)?;

    let turntable = TurntableAdapter::new(Turntable::new(catalog));
    play_title(&turntable, title, out)?;
    Ok(())
}
