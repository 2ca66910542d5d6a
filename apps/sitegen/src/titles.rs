//! `titles` subcommand: lists every job title in the view model, one per
//! line, with a literal `<no title>` fallback for untitled records.

use std::fs;
use std::path::Path;

use crate::errors::AppError;
use crate::model::ViewModel;

const NO_TITLE: &str = "<no title>";

/// Reads the view model and prints one line per job to standard output.
pub fn print_titles(viewmodel_path: &Path) -> Result<(), AppError> {
    if !viewmodel_path.exists() {
        return Err(AppError::MissingInput {
            kind: "view model",
            path: viewmodel_path.to_path_buf(),
        });
    }

    let document = fs::read_to_string(viewmodel_path)?;
    let view_model: ViewModel = serde_json::from_str(&document)?;

    for line in title_lines(&view_model) {
        println!("{line}");
    }
    Ok(())
}

fn title_lines(view_model: &ViewModel) -> Vec<String> {
    view_model
        .jobs
        .iter()
        .map(|job| {
            if job.title.is_empty() {
                NO_TITLE.to_string()
            } else {
                job.title.clone()
            }
        })
        .collect()
}
