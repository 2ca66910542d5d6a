mod config;
mod errors;
mod generate;
mod model;
mod server;
mod state;
mod titles;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::generate::generate;

#[derive(Parser)]
#[command(about = "Static page generator for the job-listing site")]
struct Cli {
    /// Site root: holds the view model, templates, and rendered pages.
    #[arg(long, default_value = ".")]
    site_root: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Rebuild every detail page and the index from the view model.
    Generate {
        /// JSON view model (default: <site-root>/viewmodel.json)
        #[arg(long)]
        viewmodel: Option<PathBuf>,
        /// Detail-page template (default: <site-root>/job_page_template.html)
        #[arg(long)]
        job_template: Option<PathBuf>,
        /// Index template (default: <site-root>/index_template.html)
        #[arg(long)]
        index_template: Option<PathBuf>,
        /// Detail-page output directory (default: <site-root>/job_pages)
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },
    /// Print each job's title from the view model.
    Titles {
        /// JSON view model (default: <site-root>/viewmodel.json)
        #[arg(long)]
        viewmodel: Option<PathBuf>,
    },
    /// Serve the rendered site with the contact-form endpoint.
    Serve,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let (viewmodel, job_template, index_template, output_dir) = match &cli.command {
        Command::Generate {
            viewmodel,
            job_template,
            index_template,
            output_dir,
        } => (
            viewmodel.clone(),
            job_template.clone(),
            index_template.clone(),
            output_dir.clone(),
        ),
        Command::Titles { viewmodel } => (viewmodel.clone(), None, None, None),
        Command::Serve => (None, None, None, None),
    };
    let config = Config::resolve(
        cli.site_root,
        viewmodel,
        job_template,
        index_template,
        output_dir,
    )?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Command::Generate { .. } => run_generate(&config),
        Command::Titles { .. } => run_titles(&config),
        Command::Serve => server::serve(config).await,
    }
}

/// Runs one full rebuild. A missing input file is a reported condition, not
/// a crash: the run aborts cleanly and the process still exits 0.
fn run_generate(config: &Config) -> Result<()> {
    match generate(
        &config.viewmodel_path,
        &config.job_template_path,
        &config.index_template_path,
        &config.output_dir,
    ) {
        Ok(summary) => {
            info!(
                "Generated {} detail pages ({} skipped, {} distinct tags), index at {}",
                summary.pages_written,
                summary.skipped_missing_id,
                summary.distinct_tags,
                summary.index_path.display()
            );
            Ok(())
        }
        Err(e) if e.is_missing_input() => {
            error!("{e}");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

fn run_titles(config: &Config) -> Result<()> {
    match titles::print_titles(&config.viewmodel_path) {
        Ok(()) => Ok(()),
        Err(e) if e.is_missing_input() => {
            error!("{e}");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
