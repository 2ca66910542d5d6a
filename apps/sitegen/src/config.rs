use std::path::PathBuf;

use anyhow::{Context, Result};

/// Resolved paths and settings for one invocation.
///
/// Paths default to the original site layout under the site root; each can
/// be overridden individually from the CLI. `PORT` and `RUST_LOG` come from
/// the environment (a `.env` file is honored if present).
#[derive(Debug, Clone)]
pub struct Config {
    pub site_root: PathBuf,
    pub viewmodel_path: PathBuf,
    pub job_template_path: PathBuf,
    pub index_template_path: PathBuf,
    pub output_dir: PathBuf,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn resolve(
        site_root: PathBuf,
        viewmodel: Option<PathBuf>,
        job_template: Option<PathBuf>,
        index_template: Option<PathBuf>,
        output_dir: Option<PathBuf>,
    ) -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            viewmodel_path: viewmodel.unwrap_or_else(|| site_root.join("viewmodel.json")),
            job_template_path: job_template
                .unwrap_or_else(|| site_root.join("job_page_template.html")),
            index_template_path: index_template
                .unwrap_or_else(|| site_root.join("index_template.html")),
            output_dir: output_dir.unwrap_or_else(|| site_root.join("job_pages")),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            site_root,
        })
    }
}
