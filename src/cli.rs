//! Command line interface
//!
//! Every option can also be set through the environment variables GitHub
//! Actions provides, so the binary runs unchanged as an action step.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::catalog::MagentoWatchClient;
use crate::config::{DEFAULT_BASE_URL, Inputs, MATRIX_OUTPUT};
use crate::{output, pipeline};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "magento-matrix")]
#[command(version, about = "Build a CI test matrix from supported Magento versions")]
pub struct Cli {
    /// Distribution to fetch (default: magento-community)
    #[arg(long, env = "INPUT_DISTRIBUTION")]
    pub distribution: Option<String>,

    /// Selection kind: latest, all or custom (default: latest)
    #[arg(long, env = "INPUT_KIND")]
    pub kind: Option<String>,

    /// Comma-separated versions for the custom kind
    #[arg(long, env = "INPUT_CUSTOM_VERSIONS")]
    pub custom_versions: Option<String>,

    /// Base URL of the magento.watch API
    #[arg(long, env = "MAGENTO_WATCH_API_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// File to append the matrix output to; prints to stdout when unset
    #[arg(long, env = "GITHUB_OUTPUT")]
    pub github_output: Option<PathBuf>,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

impl Cli {
    /// Returns the run inputs, with defaults applied to unset or blank values
    pub fn inputs(&self) -> Inputs {
        Inputs::from_raw(
            self.distribution.as_deref().unwrap_or_default(),
            self.kind.as_deref().unwrap_or_default(),
            self.custom_versions.as_deref().unwrap_or_default(),
        )
    }

    fn output_path(&self) -> Option<&Path> {
        self.github_output
            .as_deref()
            .filter(|path| !path.as_os_str().is_empty())
    }

    /// Fetches, filters and builds the matrix, then emits it as the `matrix` output
    pub fn execute(self) -> anyhow::Result<()> {
        let inputs = self.inputs();

        let matrix = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?
            .block_on(async {
                let client = MagentoWatchClient::new(&self.base_url)?;
                pipeline::run(&client, &inputs).await
            })?;

        let json = serde_json::to_string(&matrix)?;
        output::set_output(MATRIX_OUTPUT, &json, self.output_path())
            .context("Failed to write matrix output")?;

        Ok(())
    }
}

/// Installs the global subscriber, logging to stderr.
///
/// `RUST_LOG` overrides the default `info` level. The returned guard flushes
/// buffered logs when dropped.
pub fn init_logging(format: LogFormat) -> WorkerGuard {
    let (writer, guard) = tracing_appender::non_blocking(std::io::stderr());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false);

    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }

    guard
}
