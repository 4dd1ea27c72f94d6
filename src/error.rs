use std::io;

use thiserror::Error;

/// Everything a demo can fail on.
///
/// The selection variants carry the rejected input so the message says exactly
/// which discriminator was not recognized.
#[derive(Error, Debug)]
pub enum PatternError {
    #[error("unknown cake type '{0}' (expected: simple, fancy)")]
    UnknownCakeType(String),

    #[error("unknown flavour '{0}' (expected: vanilla, chocolate)")]
    UnknownFlavour(String),

    #[error("unknown stain '{0}' (expected: coffee, wine)")]
    UnknownStain(String),

    #[error("unknown mate '{0}' (expected: classic, cordobés, tereré)")]
    UnknownMate(String),

    #[error("album '{0}' is not in the catalog")]
    AlbumNotFound(String),

    #[error("'{0}' is not subscribed to this channel")]
    NotSubscribed(String),

    #[error("failed to write demo output")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, PatternError>;
