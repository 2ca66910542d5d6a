//! Index-page rendering: a pure function of the full job collection plus the
//! index template text.
//!
//! Same token-substitution model as the detail page: two recognized tokens,
//! replaced literally, no escaping.

use crate::generate::detail::render_tag_badges;
use crate::generate::tags::{normalize_tag, TagIndex};
use crate::model::Job;

/// Substituted for `{{jobListings}}` when no job qualified for output.
pub const NO_LISTINGS_PLACEHOLDER: &str = "<!-- No job listings available -->";

/// Substituted for `{{tagList}}` when no job carries any tag.
pub const NO_TAGS_PLACEHOLDER: &str = r#"<li class="tag-filter-empty">No tags</li>"#;

/// Tokens recognized by the index template.
pub const INDEX_TOKENS: [&str; 2] = ["{{jobListings}}", "{{tagList}}"];

/// Renders the index page. `jobs` must already be sorted (timestamp
/// descending) and filtered to those that produced a detail page;
/// `pages_dir` is the output directory's name, used for relative links.
pub fn render_index_page(
    jobs: &[Job],
    tag_index: &TagIndex,
    template: &str,
    pages_dir: &str,
) -> String {
    let listings = if jobs.is_empty() {
        NO_LISTINGS_PLACEHOLDER.to_string()
    } else {
        jobs.iter()
            .map(|job| render_job_listing(job, pages_dir))
            .collect::<Vec<_>>()
            .join("\n\n")
    };

    let tag_list = if tag_index.is_empty() {
        NO_TAGS_PLACEHOLDER.to_string()
    } else {
        render_tag_filter_list(tag_index, jobs.len())
    };

    template
        .replace("{{jobListings}}", &listings)
        .replace("{{tagList}}", &tag_list)
}

/// Renders the sidebar filter control list: an active "All" entry with the
/// total job count, then one entry per distinct tag in index order, each
/// carrying its normalized key for client-side filtering.
pub fn render_tag_filter_list(tag_index: &TagIndex, total_jobs: usize) -> String {
    let mut items = Vec::with_capacity(tag_index.entries.len() + 1);
    items.push(format!(
        r#"<li class="tag-filter active" data-tag="all">All ({total_jobs})</li>"#
    ));
    for entry in &tag_index.entries {
        items.push(format!(
            r#"<li class="tag-filter" data-tag="{}">{} ({})</li>"#,
            entry.key, entry.label, entry.count
        ));
    }
    items.join("\n")
}

/// Renders one listing entry linking to the job's detail page. Normalized
/// tags go into `data-tags` pipe-delimited for the filter script; badges are
/// rendered inline only when the job has tags.
pub fn render_job_listing(job: &Job, pages_dir: &str) -> String {
    let filter_keys: Vec<String> = job.tags.iter().map(|t| normalize_tag(t)).collect();
    let badges = render_tag_badges(&job.tags);
    let badge_block = if badges.is_empty() {
        String::new()
    } else {
        format!("\n  {badges}")
    };

    format!(
        r#"<article class="job-listing" data-tags="{data_tags}">
  <h2><a href="{pages_dir}/job_page_{id}.html">{title}</a></h2>
  <p class="job-location">{location}</p>
  <p class="job-summary">{summary}</p>
  <div class="job-full-description" hidden>{full}</div>{badge_block}
</article>"#,
        data_tags = filter_keys.join("|"),
        id = job.id,
        title = job.title,
        location = job.location,
        summary = job.description,
        full = job.effective_description(),
    )
}
