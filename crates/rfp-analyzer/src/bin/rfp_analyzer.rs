//! RFP analyzer job entry point
//!
//! Run with: cargo run -p rfp-analyzer -- --proposal-id <id> --storage-key <key>
//!
//! Logs go to stderr; the analysis JSON is written to stdout (or to
//! `--output`) as the last step, and only when the run (including webhook
//! delivery) succeeded. Nothing else reaches the result stream: anything a
//! parser library prints to stdout is redirected to stderr.

use anyhow::Context;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;

use rfp_analyzer::{
    source::LocalDocumentSource, AnalysisPipeline, AnalyzerConfig, JobConfig,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Analyze an RFP document and deliver the result to a webhook
#[derive(Debug, Parser)]
#[command(name = "rfp-analyzer", version, about)]
struct Args {
    /// Configuration file (TOML)
    #[arg(long, env = "RFP_CONFIG")]
    config: Option<PathBuf>,

    /// Proposal identifier, passed through to the result
    #[arg(long, env = "RFP_PROPOSAL_ID", default_value = "")]
    proposal_id: String,

    /// Storage key of the document, relative to the storage root
    #[arg(long, env = "RFP_STORAGE_KEY")]
    storage_key: String,

    /// Storage root directory, overrides the configuration file
    #[arg(long, env = "RFP_STORAGE_ROOT")]
    storage_root: Option<PathBuf>,

    /// Content type of the document; guessed from the key when omitted
    #[arg(long, env = "RFP_CONTENT_TYPE")]
    content_type: Option<String>,

    /// Webhook URL for the result callback
    #[arg(long, env = "RFP_WEBHOOK_URL")]
    webhook_url: Option<String>,

    /// Shared secret for the webhook
    #[arg(long, env = "RFP_WEBHOOK_SECRET", hide_env_values = true)]
    webhook_secret: Option<String>,

    /// Write the analysis JSON to this file instead of stdout
    #[arg(long, env = "RFP_OUTPUT")]
    output: Option<PathBuf>,
}

impl Args {
    fn job(&self) -> JobConfig {
        JobConfig {
            proposal_id: self.proposal_id.clone(),
            storage_key: self.storage_key.clone(),
            content_type: self.content_type.clone(),
            webhook_url: self.webhook_url.clone(),
            webhook_secret: self.webhook_secret.clone(),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rfp_analyzer=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    // pdf-extract prints font diagnostics with println!
    let result_stream = match &args.output {
        Some(path) => ResultStream::File(path.clone()),
        None => ResultStream::Stdout(
            claim_stdout().context("Failed to reserve stdout for the result")?,
        ),
    };

    // Load configuration
    let mut config = match &args.config {
        Some(path) => AnalyzerConfig::from_file(path)?,
        None => AnalyzerConfig::default(),
    };
    if let Some(root) = &args.storage_root {
        config.storage.root = root.clone();
    }

    tracing::info!("Configuration loaded");
    tracing::info!("  - PDF backend: {:?}", config.extraction.pdf_backend);
    tracing::info!("  - Layout fallback: {}", config.extraction.layout_fallback);
    tracing::info!("  - Webhook timeout: {}s", config.webhook.timeout_secs);
    tracing::info!("  - Storage root: {}", config.storage.root.display());

    let job = args.job();
    let source = LocalDocumentSource::from_config(&config.storage);
    let pipeline = AnalysisPipeline::new(&config)?;

    let output = pipeline.run_from_source(&job, &source).await?;

    result_stream.write_result(&output.json)
}

/// Where the analysis JSON goes
enum ResultStream {
    File(PathBuf),
    Stdout(Box<dyn Write>),
}

impl ResultStream {
    fn write_result(self, json: &str) -> anyhow::Result<()> {
        match self {
            Self::File(path) => std::fs::write(&path, format!("{}\n", json))
                .with_context(|| format!("Failed to write result to {}", path.display())),
            Self::Stdout(mut stream) => {
                writeln!(stream, "{}", json)?;
                stream.flush()?;
                Ok(())
            }
        }
    }
}

/// Keep the original stdout for the result and point descriptor 1 at stderr
#[cfg(unix)]
fn claim_stdout() -> std::io::Result<Box<dyn Write>> {
    use std::os::fd::FromRawFd;

    std::io::stdout().flush()?;

    // SAFETY: only this process's standard descriptors are touched, and the
    // duplicate is owned by the returned File from here on.
    unsafe {
        let saved = libc::dup(libc::STDOUT_FILENO);
        if saved < 0 {
            return Err(std::io::Error::last_os_error());
        }
        if libc::dup2(libc::STDERR_FILENO, libc::STDOUT_FILENO) < 0 {
            let err = std::io::Error::last_os_error();
            libc::close(saved);
            return Err(err);
        }
        Ok(Box::new(std::fs::File::from_raw_fd(saved)))
    }
}

#[cfg(not(unix))]
fn claim_stdout() -> std::io::Result<Box<dyn Write>> {
    Ok(Box::new(std::io::stdout()))
}
