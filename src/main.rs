use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use log::{info, warn, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use buildlog_store::cli::Args;
use buildlog_store::config::LogStoreConfig;
use buildlog_store::constants::LOG_NAME_TIMESTAMP_FORMAT;
use buildlog_store::sink::{create_sink, CloseOutcome, LogSink};

fn main() -> Result<()> {
    // Parse arguments
    let args = Args::parse();

    // Initialize logging
    initialize_logging(args.verbose)?;

    // Load configuration and pick the destination name
    let config = load_config(&args)?;
    let name = match args.name.clone() {
        Some(name) => name,
        None => default_log_name()?,
    };

    let mut sink = create_sink(&config, &name)?;
    info!("Storing build log as {}", name);

    // Stream build output into the sink
    stream_input(&args, sink.as_mut())?;

    // Finalize exactly once
    match sink.close().context("Failed to finalize build log")? {
        CloseOutcome::Uploaded { key, bytes } => {
            info!("Uploaded {} bytes to key {}", bytes, key)
        }
        CloseOutcome::SkippedEmpty => info!("Build log was empty, nothing uploaded"),
        CloseOutcome::Discarded => info!("Build log discarded"),
    }

    Ok(())
}

/// Initialize logging with the specified verbosity level
fn initialize_logging(verbose: bool) -> Result<()> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    TermLogger::init(
        log_level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .context("Failed to initialize logger")?;
    Ok(())
}

/// Load the sink configuration, defaulting to no persistence
fn load_config(args: &Args) -> Result<LogStoreConfig> {
    if args.skip_upload {
        info!("Upload disabled, build log will be discarded");
        return Ok(LogStoreConfig::default());
    }

    match &args.config {
        Some(path) => {
            let config = LogStoreConfig::from_yaml_file(path).context(format!(
                "Failed to load log store config from {}",
                path.display()
            ))?;
            Ok(config)
        }
        None => {
            warn!("No configuration provided, build log will be discarded");
            Ok(LogStoreConfig::default())
        }
    }
}

/// Default log name: build-{timestamp}-{hostname}.log
fn default_log_name() -> Result<String> {
    let hostname = hostname::get()
        .map_err(|e| anyhow!("Failed to get hostname: {}", e))?
        .to_string_lossy()
        .to_string();
    let timestamp = chrono::Utc::now()
        .format(LOG_NAME_TIMESTAMP_FORMAT)
        .to_string();
    Ok(format!("build-{}-{}.log", timestamp, hostname))
}

/// Stream build output into the sink, preserving line boundaries
fn stream_input(args: &Args, sink: &mut dyn LogSink) -> Result<()> {
    let reader: Box<dyn Read> = match &args.input {
        Some(path) => Box::new(
            File::open(path).context(format!("Failed to open {}", path.display()))?,
        ),
        None => Box::new(io::stdin()),
    };
    let mut reader = BufReader::new(reader);

    let mut line = String::new();
    loop {
        line.clear();
        let read = reader
            .read_line(&mut line)
            .context("Failed to read build output")?;
        if read == 0 {
            break;
        }
        sink.write(&line)?;
    }

    Ok(())
}
