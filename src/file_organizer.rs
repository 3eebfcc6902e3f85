use std::{
    fmt, fs, io,
    path::{Path, PathBuf},
};

use crate::{
    cli::OrganizeConf,
    error::{MoveError, OrganizeError, SkipReason},
    romanizer::Romanizer,
    tab_name::classify,
    utilities::*,
};

/// What happened to one file during `organize`.
#[derive(Debug)]
pub enum Outcome {
    Moved { name: String, folder: String, created_dir: bool },
    DryRun { name: String, folder: String },
    Skipped { name: String, reason: SkipReason },
    DirectoryCreateFailed { name: String, folder: String, error: io::Error },
    MoveFailed { name: String, error: MoveError },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Moved { name, folder, created_dir } => {
                if *created_dir {
                    writeln!(f, "📁 Created directory: {folder}")?;
                }
                write!(f, "✅ Moved: {name} -> {folder}/")
            },
            Outcome::DryRun { name, folder } => write!(f, "[DRY-RUN] Would move: {name} -> {folder}/"),
            Outcome::Skipped { name, reason } => write!(f, "⚠️  Skipped ({reason}): {name}"),
            Outcome::DirectoryCreateFailed { name, folder, error } => {
                write!(f, "❌ Failed to create directory: {folder}, error: {error} (skipping {name})")
            },
            Outcome::MoveFailed { name, error } => write!(f, "❌ Failed to move: {name}, error: {error}"),
        }
    }
}

#[derive(Debug, Default)]
pub struct Report {
    pub outcomes: Vec<Outcome>,
}

impl Report {
    pub fn moved(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Moved { .. }))
    }

    pub fn dry_run(&self) -> usize {
        self.count(|o| matches!(o, Outcome::DryRun { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Skipped { .. }))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, Outcome::DirectoryCreateFailed { .. } | Outcome::MoveFailed { .. }))
    }

    fn count(&self, pred: impl Fn(&Outcome) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(o)).count()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Done: {} moved, {} dry-run, {} skipped, {} failed",
            self.moved(),
            self.dry_run(),
            self.skipped(),
            self.failed()
        )
    }
}

/// Regular files directly inside `source_dir`, sorted by name.
pub fn list_files(source_dir: &Path) -> Result<Vec<PathBuf>, OrganizeError> {
    if !source_dir.is_dir() {
        return Err(OrganizeError::SourceNotFound(source_dir.to_path_buf()));
    }

    let read_dir_err = |source: io::Error| OrganizeError::ReadDir {
        path: source_dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(source_dir).map_err(read_dir_err)? {
        let path = entry.map_err(read_dir_err)?.path();
        if path.is_file() {
            files.push(path);
        } else {
            tracing::debug!("not a regular file, ignoring {}", path.display());
        }
    }
    files.sort();
    Ok(files)
}

pub fn organize(conf: &OrganizeConf, romanizer: &dyn Romanizer) -> Result<Report, OrganizeError> {
    let files = list_files(&conf.source_dir)?;
    println!("Found {} files", files.len());
    tracing::info!("organizing {conf}");

    let mut report = Report::default();
    for path in files {
        let outcome = organize_file(conf, romanizer, &path);
        tracing::debug!("{}: {outcome:?}", path.display());
        println!("{outcome}");
        report.outcomes.push(outcome);
    }

    println!("{report}");
    Ok(report)
}

fn organize_file(conf: &OrganizeConf, romanizer: &dyn Romanizer, path: &Path) -> Outcome {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return Outcome::Skipped {
            name: path.display().to_string(),
            reason: SkipReason::NonUtf8Name,
        };
    };
    let name = name.to_string();

    let tab = match classify(&name, romanizer) {
        Ok(tab) => tab,
        Err(reason) => return Outcome::Skipped { name, reason },
    };

    tracing::debug!(song = %tab.song_title, performer = %tab.performer, "classified {}", tab.raw_name);

    let folder = tab.folder;
    if conf.dry_run {
        return Outcome::DryRun { name, folder };
    }

    let dir_path = conf.target_dir.join(&folder);
    let created_dir = match create_dir_if_not_exists(&dir_path) {
        Ok(created) => created,
        Err(error) => return Outcome::DirectoryCreateFailed { name, folder, error },
    };

    match move_file(path, &dir_path.join(&name)) {
        Ok(()) => Outcome::Moved { name, folder, created_dir },
        Err(error) => Outcome::MoveFailed { name, error },
    }
}
