use clap::{Parser, Subcommand};
use std::{fmt, path::PathBuf};

#[derive(Parser, Debug)]
#[command(name = "tab-organizer", version, about = "Sort guitar tab files into per-performer folders", long_about = None)]
pub struct Conf {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Move `<song>_<performer>.<ext>` files into folders named after the performer
    Organize {
        /// Directory holding the unsorted tab files
        #[arg(short, long, env = "TAB_ORGANIZER_SOURCE")]
        source: PathBuf,

        /// Base directory the performer folders are created in
        #[arg(short, long, env = "TAB_ORGANIZER_TARGET")]
        target: PathBuf,

        /// Only print what would be moved
        #[arg(short = 'n', long, default_value_t = false)]
        dry_run: bool,
    },
    /// List the files in the source directory
    ListFiles {
        #[arg(short, long, env = "TAB_ORGANIZER_SOURCE")]
        source: PathBuf,
    },
}

/// Everything `organize` needs to know about where files come from and go to.
#[derive(Clone, Debug)]
pub struct OrganizeConf {
    pub source_dir: PathBuf,
    pub target_dir: PathBuf,
    pub dry_run: bool,
}

impl OrganizeConf {
    pub fn new(source_dir: impl Into<PathBuf>, target_dir: impl Into<PathBuf>, dry_run: bool) -> Self {
        Self {
            source_dir: source_dir.into(),
            target_dir: target_dir.into(),
            dry_run,
        }
    }
}

impl fmt::Display for OrganizeConf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source_dir.display(), self.target_dir.display())?;
        if self.dry_run {
            write!(f, " (dry run)")?;
        }
        Ok(())
    }
}
