//! Page generation — orchestrates the full rebuild.
//!
//! Flow: recreate output dir -> check inputs -> parse view model ->
//!       sort jobs -> write detail pages -> derive tag index -> write index.
//!
//! Every run is a full rebuild: the output directory is deleted and
//! recreated, and the index file is overwritten whole. There is no staging
//! or atomic swap, so a run that aborts on a missing input leaves the
//! output directory freshly emptied and the index untouched.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::errors::AppError;
use crate::generate::detail::{detail_page_file_name, render_detail_page};
use crate::generate::index::render_index_page;
use crate::generate::tags::TagIndex;
use crate::model::{Job, ViewModel};

/// Name of the index file written one level above the output directory.
const INDEX_FILE_NAME: &str = "index.html";

/// Outcome of a completed generation run.
#[derive(Debug, Clone)]
pub struct GenerateSummary {
    pub pages_written: usize,
    pub skipped_missing_id: usize,
    pub distinct_tags: usize,
    pub index_path: PathBuf,
}

/// Runs the full generation pipeline.
///
/// Steps:
/// 1. Recursively delete the output directory if present, recreate it empty.
/// 2. Verify the view model and both templates exist; a missing file aborts
///    the run with `AppError::MissingInput` and nothing further is written.
/// 3. Sort jobs by timestamp descending (stable; ISO-8601 strings sort
///    correctly lexicographically, missing timestamps sort last).
/// 4. Render and write one detail page per job with a non-empty id; jobs
///    without an id are logged and skipped, never aborting the run.
/// 5. Derive the tag index from the jobs that produced pages.
/// 6. Render the index template and overwrite the index file one level
///    above the output directory.
pub fn generate(
    viewmodel_path: &Path,
    job_template_path: &Path,
    index_template_path: &Path,
    output_dir: &Path,
) -> Result<GenerateSummary, AppError> {
    // Step 1: full rebuild, matching the delete-then-recreate contract
    if output_dir.exists() {
        fs::remove_dir_all(output_dir)?;
    }
    fs::create_dir_all(output_dir)?;

    // Step 2: input preconditions
    require_input("view model", viewmodel_path)?;
    require_input("job template", job_template_path)?;
    require_input("index template", index_template_path)?;

    let index_path = output_dir
        .parent()
        .map(|parent| parent.join(INDEX_FILE_NAME))
        .ok_or_else(|| {
            AppError::Validation(format!(
                "output directory {} has no parent for the index file",
                output_dir.display()
            ))
        })?;
    let pages_dir = output_dir
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| {
            AppError::Validation(format!(
                "output directory {} has no usable name for relative links",
                output_dir.display()
            ))
        })?;

    let document = fs::read_to_string(viewmodel_path)?;
    let view_model: ViewModel = serde_json::from_str(&document)?;
    let job_template = fs::read_to_string(job_template_path)?;
    let index_template = fs::read_to_string(index_template_path)?;

    // Step 3: sort; stable, so equal timestamps keep document order
    let mut jobs = view_model.jobs;
    jobs.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    // Step 4: detail pages
    let mut written: Vec<Job> = Vec::with_capacity(jobs.len());
    let mut skipped_missing_id = 0usize;
    for job in jobs {
        if !job.has_id() {
            warn!("Skipping job with no id (title: {:?})", job.title);
            skipped_missing_id += 1;
            continue;
        }

        let file_name = detail_page_file_name(&job.id);
        let html = render_detail_page(&job, &job_template);
        fs::write(output_dir.join(&file_name), html)?;
        info!("Wrote {file_name}");
        written.push(job);
    }

    // Step 5: tag index over the jobs that reached output
    let tag_index = TagIndex::from_jobs(&written);

    // Step 6: index page, whole-file overwrite
    let index_html = render_index_page(&written, &tag_index, &index_template, pages_dir);
    fs::write(&index_path, index_html)?;
    info!("Wrote {}", index_path.display());

    Ok(GenerateSummary {
        pages_written: written.len(),
        skipped_missing_id,
        distinct_tags: tag_index.entries.len(),
        index_path,
    })
}

fn require_input(kind: &'static str, path: &Path) -> Result<(), AppError> {
    if path.exists() {
        Ok(())
    } else {
        Err(AppError::MissingInput {
            kind,
            path: path.to_path_buf(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const JOB_TEMPLATE: &str = "<h1>{{title}}</h1>\n<p>{{timestamp}}</p>\n{{tags}}\n{{fullDescription}}";
    const INDEX_TEMPLATE: &str = "<ul>{{tagList}}</ul>\n{{jobListings}}";

    struct Site {
        root: TempDir,
    }

    impl Site {
        fn new(viewmodel: &str) -> Self {
            let root = TempDir::new().unwrap();
            fs::write(root.path().join("viewmodel.json"), viewmodel).unwrap();
            fs::write(root.path().join("job_page_template.html"), JOB_TEMPLATE).unwrap();
            fs::write(root.path().join("index_template.html"), INDEX_TEMPLATE).unwrap();
            Site { root }
        }

        fn generate(&self) -> Result<GenerateSummary, AppError> {
            generate(
                &self.root.path().join("viewmodel.json"),
                &self.root.path().join("job_page_template.html"),
                &self.root.path().join("index_template.html"),
                &self.out_dir(),
            )
        }

        fn out_dir(&self) -> PathBuf {
            self.root.path().join("job_pages")
        }

        fn index(&self) -> String {
            fs::read_to_string(self.root.path().join("index.html")).unwrap()
        }
    }

    #[test]
    fn test_one_page_per_job_with_id_and_skips_logged_jobs() {
        let site = Site::new(
            r#"{"jobs": [
                {"id": "a", "title": "Alpha"},
                {"title": "No Id"},
                {"id": "b", "title": "Beta"}
            ]}"#,
        );
        let summary = site.generate().unwrap();

        assert_eq!(summary.pages_written, 2);
        assert_eq!(summary.skipped_missing_id, 1);
        assert!(site.out_dir().join("job_page_a.html").exists());
        assert!(site.out_dir().join("job_page_b.html").exists());
        assert_eq!(fs::read_dir(site.out_dir()).unwrap().count(), 2);

        // The skipped job appears nowhere in the index either.
        assert!(!site.index().contains("No Id"));
    }

    #[test]
    fn test_jobs_sorted_by_timestamp_descending_empty_last() {
        let site = Site::new(
            r#"{"jobs": [
                {"id": "old", "title": "Old", "timestamp": "2024-01-01T00:00:00Z"},
                {"id": "recent", "title": "Recent", "timestamp": "2024-06-01T00:00:00Z"},
                {"id": "undated", "title": "Undated"}
            ]}"#,
        );
        site.generate().unwrap();

        let index = site.index();
        let recent = index.find("job_page_recent.html").unwrap();
        let old = index.find("job_page_old.html").unwrap();
        let undated = index.find("job_page_undated.html").unwrap();
        assert!(recent < old && old < undated);
    }

    #[test]
    fn test_tag_casing_collapses_to_first_seen_label() {
        let site = Site::new(
            r#"{"jobs": [
                {"id": "1", "timestamp": "2024-03-01T00:00:00Z", "tags": ["Remote"]},
                {"id": "2", "timestamp": "2024-02-01T00:00:00Z", "tags": ["remote"]},
                {"id": "3", "timestamp": "2024-01-01T00:00:00Z", "tags": [" REMOTE "]}
            ]}"#,
        );
        let summary = site.generate().unwrap();

        assert_eq!(summary.distinct_tags, 1);
        assert!(site
            .index()
            .contains(r#"<li class="tag-filter" data-tag="remote">Remote (3)</li>"#));
    }

    #[test]
    fn test_generation_is_idempotent_byte_for_byte() {
        let site = Site::new(
            r#"{"jobs": [
                {"id": "a", "title": "Alpha", "timestamp": "2024-03-05T00:00:00Z",
                 "tags": ["Rust", "Remote"], "fullDescription": "One.\n\nTwo."},
                {"id": "b", "title": "Beta", "tags": ["remote"]}
            ]}"#,
        );

        site.generate().unwrap();
        let first_index = site.index();
        let first_a = fs::read_to_string(site.out_dir().join("job_page_a.html")).unwrap();

        site.generate().unwrap();
        assert_eq!(site.index(), first_index);
        assert_eq!(
            fs::read_to_string(site.out_dir().join("job_page_a.html")).unwrap(),
            first_a
        );
    }

    #[test]
    fn test_missing_template_aborts_with_empty_output_dir() {
        let site = Site::new(r#"{"jobs": [{"id": "a"}]}"#);
        fs::remove_file(site.root.path().join("job_page_template.html")).unwrap();
        // Pre-existing index must survive an aborted run untouched.
        fs::write(site.root.path().join("index.html"), "stale index").unwrap();

        let err = site.generate().unwrap_err();
        assert!(err.is_missing_input());
        assert!(matches!(
            err,
            AppError::MissingInput { kind: "job template", .. }
        ));

        assert!(site.out_dir().exists());
        assert_eq!(fs::read_dir(site.out_dir()).unwrap().count(), 0);
        assert_eq!(site.index(), "stale index");
    }

    #[test]
    fn test_missing_view_model_reports_which_file() {
        let site = Site::new("{}");
        fs::remove_file(site.root.path().join("viewmodel.json")).unwrap();

        let err = site.generate().unwrap_err();
        assert!(matches!(
            err,
            AppError::MissingInput { kind: "view model", .. }
        ));
    }

    #[test]
    fn test_stale_pages_removed_by_full_rebuild() {
        let site = Site::new(r#"{"jobs": [{"id": "kept"}]}"#);
        fs::create_dir_all(site.out_dir()).unwrap();
        fs::write(site.out_dir().join("job_page_stale.html"), "old").unwrap();

        site.generate().unwrap();

        assert!(!site.out_dir().join("job_page_stale.html").exists());
        assert!(site.out_dir().join("job_page_kept.html").exists());
    }

    #[test]
    fn test_missing_jobs_array_writes_placeholder_index() {
        let site = Site::new("{}");
        let summary = site.generate().unwrap();

        assert_eq!(summary.pages_written, 0);
        assert!(site
            .index()
            .contains(crate::generate::index::NO_LISTINGS_PLACEHOLDER));
        assert!(site
            .index()
            .contains(crate::generate::index::NO_TAGS_PLACEHOLDER));
    }

    #[test]
    fn test_detail_pages_resolve_all_tokens() {
        let site = Site::new(
            r#"{"jobs": [{"id": "a", "title": "Alpha", "timestamp": "2024-03-05T00:00:00Z",
                          "tags": ["Rust"], "description": "Body text."}]}"#,
        );
        site.generate().unwrap();

        let page = fs::read_to_string(site.out_dir().join("job_page_a.html")).unwrap();
        assert!(page.contains("March 05, 2024"));
        assert!(page.contains("<p>Body text.</p>"));
        for token in crate::generate::detail::DETAIL_TOKENS {
            assert!(!page.contains(token), "unresolved token {token}");
        }
    }
}
