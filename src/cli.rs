//! Command line surface for the `xkcd-dl` binary

use crate::client::XkcdClient;
use crate::config::{BASE_URL, Config, DEFAULT_TIMEOUT, LATEST_COMIC};
use crate::error::Result;
use crate::presenter::{OutputFormat, render};
use crate::types::ComicId;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing::debug;

/// Command line arguments
#[derive(Debug, Clone, Parser)]
#[command(name = "xkcd-dl")]
#[command(version, about = "Fetch xkcd comic metadata and images")]
pub struct Cli {
    /// Comic number to fetch (0 = latest)
    #[arg(short = 'n', default_value_t = LATEST_COMIC)]
    pub number: u32,

    /// Save the comic image to disk
    #[arg(short = 's')]
    pub save: bool,

    /// Print metadata to stdout (text, json)
    #[arg(short = 'o', default_value = "")]
    pub output: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT.as_secs())]
    pub timeout: u64,

    /// Service origin
    #[arg(long, default_value = BASE_URL)]
    pub base_url: String,

    /// Directory saved images are written to
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,
}

impl Cli {
    /// Client configuration described by these arguments
    pub fn config(&self) -> Config {
        Config::default()
            .with_base_url(self.base_url.as_str())
            .with_timeout(Duration::from_secs(self.timeout))
            .with_output_dir(self.dir.as_path())
    }

    /// Comic selected by `-n`
    pub fn comic_id(&self) -> ComicId {
        ComicId::from(self.number)
    }
}

/// Fetch the selected comic and write its metadata to `out`
///
/// Nothing is written when `-o` names no known format.
///
/// # Errors
///
/// Any fetch, save or encode error, or a failed write to `out`.
pub async fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    let client = XkcdClient::new(cli.config())?;
    let comic = client.fetch(cli.comic_id(), cli.save).await?;

    let format = OutputFormat::parse(&cli.output);
    if format.is_none() && !cli.output.is_empty() {
        debug!(output = %cli.output, "unrecognised output format, printing nothing");
    }

    if let Some(text) = render(&comic, format)? {
        writeln!(out, "{}", text)?;
    }

    Ok(())
}

/// Turn the outcome of [`run`] into a process exit status
///
/// An error's message is written to `out` and yields a failure status.
pub fn report<W: Write>(result: Result<()>, out: &mut W) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!(error = ?e, "fetch failed");
            writeln!(out, "{}", e).ok();
            ExitCode::FAILURE
        }
    }
}
