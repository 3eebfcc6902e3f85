use clap::Parser;

use std::process::ExitCode;

mod cli;
mod error;
mod file_organizer;
mod logging;
mod romanizer;
mod tab_name;
mod utilities;

use cli::{Command, Conf, OrganizeConf};
use error::OrganizeError;
use romanizer::{PinyinRomanizer, Romanizer};

fn run(command: Command, romanizer: &dyn Romanizer) -> Result<(), OrganizeError> {
    match command {
        Command::Organize { source, target, dry_run } => {
            let conf = OrganizeConf::new(source, target, dry_run);
            file_organizer::organize(&conf, romanizer)?;
        },
        Command::ListFiles { source } => {
            let files = file_organizer::list_files(&source)?;
            println!("Found {} files:", files.len());
            for path in files {
                if let Some(name) = path.file_name() {
                    println!("  {}", name.to_string_lossy());
                }
            }
        },
    }
    Ok(())
}

fn main() -> ExitCode {
    let conf = Conf::parse();
    logging::init_logging(conf.verbose);

    match run(conf.command, &PinyinRomanizer) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("❌ {e}");
            ExitCode::FAILURE
        },
    }
}
