use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "qslcard")]
#[command(
    author,
    version,
    about = "Generate printable QSL cards, one PDF page per logged contact"
)]
pub struct Args {
    /// Layout configuration file (card size, fonts, file locations)
    #[arg(default_value = "qslcard.json")]
    pub config: PathBuf,

    /// Output PDF file path (overrides files.output from the config)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Output path, preferring the command line over the configured one
    pub fn output_path(&self, configured: &std::path::Path) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| configured.to_path_buf())
    }

    /// Log level for the verbosity count
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        }
    }
}
