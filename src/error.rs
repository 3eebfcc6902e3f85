use std::{io, path::PathBuf};
use thiserror::Error;

/// Failures that stop a whole run before any file is touched.
#[derive(Error, Debug)]
pub enum OrganizeError {
    #[error("source directory does not exist: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("cannot read source directory {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Why a file name could not be turned into a destination folder.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    #[error("no '_' separator")]
    NoSeparator,

    #[error("split failed")]
    SplitFailed,

    #[error("performer name is empty")]
    EmptyPerformer,

    #[error("cannot romanize performer initial")]
    NoInitial,

    #[error("file name is not valid UTF-8")]
    NonUtf8Name,
}

#[derive(Error, Debug)]
pub enum MoveError {
    #[error("destination already exists: {}", .0.display())]
    DestinationExists(PathBuf),

    #[error(transparent)]
    Io(#[from] io::Error),
}
