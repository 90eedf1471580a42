use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the buildlog-store tool.
///
/// The tool streams container build output from a file or stdin into the
/// configured log sink and finalizes the sink when the input ends.
#[derive(Parser, Debug)]
#[clap(
    name = "buildlog-store",
    about = "Buffer container build logs and upload them to object storage"
)]
pub struct Args {
    /// Path to the YAML log store configuration file
    #[clap(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Destination name for the log (default: build-{timestamp}-{hostname}.log)
    #[clap(short, long)]
    pub name: Option<String>,

    /// Read build output from this file instead of stdin
    #[clap(short, long)]
    pub input: Option<PathBuf>,

    /// Discard the log instead of uploading it
    #[clap(long)]
    pub skip_upload: bool,

    /// Verbose logging
    #[clap(short, long)]
    pub verbose: bool,
}
