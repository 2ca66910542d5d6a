//! Detail-page rendering: a pure function of one job plus the template text.
//!
//! The template format is literal token substitution over a fixed set of
//! `{{name}}` placeholders. There is no grammar, no escaping, and no
//! conditionals; field values are trusted input inserted verbatim, and a
//! literal `{{` inside field text passes through untouched.

use chrono::{DateTime, NaiveDateTime};

use crate::model::Job;

/// Rendered in place of an absent or empty timestamp.
pub const DATE_NOT_SPECIFIED: &str = "Date not specified";

/// Tokens recognized by the detail template.
pub const DETAIL_TOKENS: [&str; 6] = [
    "{{title}}",
    "{{location}}",
    "{{salary}}",
    "{{timestamp}}",
    "{{fullDescription}}",
    "{{tags}}",
];

/// Renders one detail page from the template text.
///
/// Every occurrence of each recognized token is replaced; fields absent from
/// the job substitute the empty string. The stylesheet reference is rewritten
/// to its one-level-up form because detail pages live one directory below the
/// site root.
pub fn render_detail_page(job: &Job, template: &str) -> String {
    template
        .replace("{{title}}", &job.title)
        .replace("{{location}}", &job.location)
        .replace("{{salary}}", &job.salary)
        .replace("{{timestamp}}", &format_timestamp(&job.timestamp))
        .replace(
            "{{fullDescription}}",
            &render_paragraphs(job.effective_description()),
        )
        .replace("{{tags}}", &render_tag_badges(&job.tags))
        .replace(r#"href="job-styles.css""#, r#"href="../job-styles.css""#)
}

/// Output file name for a job's detail page.
pub fn detail_page_file_name(id: &str) -> String {
    format!("job_page_{id}.html")
}

/// Splits text on blank-line boundaries, trims each paragraph, drops empty
/// ones, and wraps each survivor in `<p>…</p>`, joined by a blank line.
pub fn render_paragraphs(text: &str) -> String {
    text.split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| format!("<p>{p}</p>"))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Formats an ISO-8601 timestamp as a long-form calendar date.
///
/// Absent -> fixed placeholder; unparseable -> the raw string, verbatim.
/// Malformed timestamps never fail the run.
pub fn format_timestamp(raw: &str) -> String {
    if raw.is_empty() {
        return DATE_NOT_SPECIFIED.to_string();
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%B %d, %Y").to_string();
    }
    // Timezone-less date-times are common in hand-edited view models.
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return dt.format("%B %d, %Y").to_string();
    }
    raw.to_string()
}

/// Renders tags as inline badges in a container element, in original casing.
/// Empty markup when the job has no tags.
pub fn render_tag_badges(tags: &[String]) -> String {
    if tags.is_empty() {
        return String::new();
    }
    let badges: Vec<String> = tags
        .iter()
        .map(|t| format!(r#"<span class="tag">{t}</span>"#))
        .collect();
    format!("<div class=\"job-tags\">{}</div>", badges.join(" "))
}
