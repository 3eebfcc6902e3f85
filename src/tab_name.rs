use once_cell::sync::Lazy;
use regex::Regex;

use std::path::Path;

use crate::{
    error::SkipReason,
    romanizer::{initial, Romanizer},
};

/// A tab file name split into its parts, plus the folder it belongs in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabFile {
    pub raw_name: String,
    pub song_title: String,
    pub performer: String,
    pub folder: String,
}

/// Splits `<song title>_<performer>.<ext>` and derives the performer folder.
pub fn classify(raw_name: &str, romanizer: &dyn Romanizer) -> Result<TabFile, SkipReason> {
    if !raw_name.contains('_') {
        return Err(SkipReason::NoSeparator);
    }

    // first '_' only: the performer part may contain more of them
    static TAB_NAME: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"(?s)^(?P<title>[^_]*)_(?P<performer>.*)$").unwrap());
    let captures = TAB_NAME.captures(raw_name).ok_or(SkipReason::SplitFailed)?;
    let song_title = captures.name("title").map_or("", |m| m.as_str());
    let performer_with_ext = captures.name("performer").ok_or(SkipReason::SplitFailed)?.as_str();

    let performer = strip_extension(performer_with_ext);
    if performer.is_empty() {
        return Err(SkipReason::EmptyPerformer);
    }

    let initial = initial(romanizer, performer).ok_or(SkipReason::NoInitial)?;

    Ok(TabFile {
        raw_name: raw_name.to_string(),
        song_title: song_title.to_string(),
        performer: performer.to_string(),
        folder: folder_name(performer, initial),
    })
}

// `file_stem` semantics: "..gp5" keeps "." and ".." has no stem at all
fn strip_extension(name: &str) -> &str {
    Path::new(name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
}

fn starts_latin(performer: &str) -> bool {
    performer
        .chars()
        .next()
        .and_then(|c| c.to_uppercase().next())
        .is_some_and(|c| c.is_ascii_uppercase())
}

fn folder_name(performer: &str, initial: char) -> String {
    if starts_latin(performer) {
        performer.to_string()
    } else {
        format!("{initial}{performer}")
    }
}
