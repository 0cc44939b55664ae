//! HTML fragments for the export modal
//!
//! Every piece of server- or user-supplied text goes through [`escape_html`]
//! before it is placed in markup, including attribute values.

use super::labels::Labels;
use crate::core::export::Progress;
use crate::domain::{ExporterError, Result, TermId, Taxonomy, UrlRecord};
use url::Url;

/// Displayed URLs longer than this are cut and suffixed with `...`
pub const URL_DISPLAY_LIMIT: usize = 50;

/// Escape `& < > " '` for safe insertion into HTML text or attributes
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Shorten a URL for display, then escape it
///
/// The cut happens on characters, so multi-byte text is never split.
pub fn truncate_url(url: &str) -> String {
    if url.chars().count() <= URL_DISPLAY_LIMIT {
        return escape_html(url);
    }
    let head: String = url.chars().take(URL_DISPLAY_LIMIT).collect();
    escape_html(&format!("{head}..."))
}

pub fn render_loading(labels: &Labels) -> String {
    format!(
        "<div class=\"url-exporter-loading\"><span class=\"spinner is-active\"></span><p>{}</p></div>",
        escape_html(&labels.loading)
    )
}

pub fn render_error(message: &str) -> String {
    format!(
        "<div class=\"url-exporter-error\"><span class=\"dashicons dashicons-warning\"></span><p>{}</p></div>",
        escape_html(message)
    )
}

pub fn render_no_results(labels: &Labels) -> String {
    render_error(&labels.no_results)
}

pub fn render_warning(message: &str) -> String {
    format!(
        "<div class=\"url-exporter-warning\"><span class=\"dashicons dashicons-info\"></span><p>{}</p></div>",
        escape_html(message)
    )
}

/// Progress block: count text, bar width and percentage label
pub fn render_progress(progress: Progress, labels: &Labels) -> String {
    let percent = progress.percent();
    format!(
        concat!(
            "<div class=\"url-exporter-progress\">",
            "<div class=\"progress-info\">",
            "<span class=\"progress-text\">{label}</span>",
            "<span class=\"progress-count\">{loaded} / {total}</span>",
            "</div>",
            "<div class=\"progress-bar-wrapper\">",
            "<div class=\"progress-bar\" style=\"width: {percent}%\"></div>",
            "</div>",
            "</div>"
        ),
        label = escape_html(&labels.progress(percent)),
        loaded = progress.loaded,
        total = progress.total,
        percent = percent,
    )
}

/// Header block and table of records
///
/// `copied_row` marks the row whose copy button currently shows feedback.
pub fn render_table(
    records: &[UrlRecord],
    term_label: &str,
    labels: &Labels,
    copied_row: Option<usize>,
) -> String {
    let mut html = format!(
        concat!(
            "<div class=\"url-exporter-info\">",
            "<p><strong>{term_heading}:</strong> {term}</p>",
            "<p><strong>{total_heading}:</strong> {count}</p>",
            "</div>",
            "<div class=\"url-exporter-table-wrapper\">",
            "<table class=\"url-exporter-table\">",
            "<thead><tr>",
            "<th class=\"column-title\">{title}</th>",
            "<th class=\"column-url\">{url}</th>",
            "<th class=\"column-date\">{date}</th>",
            "<th class=\"column-actions\">{actions}</th>",
            "</tr></thead><tbody>"
        ),
        term_heading = escape_html(&labels.term_heading),
        term = escape_html(term_label),
        total_heading = escape_html(&labels.total_heading),
        count = records.len(),
        title = escape_html(&labels.title_column),
        url = escape_html(&labels.url_column),
        date = escape_html(&labels.date_column),
        actions = escape_html(&labels.actions_column),
    );

    for (index, record) in records.iter().enumerate() {
        let (button_label, disabled) = if copied_row == Some(index) {
            (format!("✓ {}", labels.copied), " disabled")
        } else {
            (labels.copy.clone(), "")
        };

        html.push_str(&format!(
            concat!(
                "<tr data-row=\"{index}\">",
                "<td class=\"column-title\">{title}</td>",
                "<td class=\"column-url\"><a href=\"{href}\" target=\"_blank\" rel=\"noopener noreferrer\">{shown}</a></td>",
                "<td class=\"column-date\">{date}</td>",
                "<td class=\"column-actions\"><button type=\"button\" class=\"button button-small url-exporter-copy\" data-url=\"{href}\"{disabled}>{button}</button></td>",
                "</tr>"
            ),
            index = index,
            title = escape_html(&record.title),
            href = escape_html(&record.url),
            shown = truncate_url(&record.url),
            date = escape_html(&record.date),
            disabled = disabled,
            button = escape_html(&button_label),
        ));
    }

    html.push_str("</tbody></table></div>");
    html
}

/// "Export URLs" row action for a term listing
///
/// Returns `None` when the viewer lacks the administrative capability.
pub fn row_action_link(
    admin_url: &str,
    taxonomy: &Taxonomy,
    term_id: TermId,
    authorized: bool,
    labels: &Labels,
) -> Result<Option<String>> {
    if !authorized {
        return Ok(None);
    }

    let mut href = Url::parse(admin_url)
        .and_then(|base| base.join("edit-tags.php"))
        .map_err(|e| ExporterError::Validation(format!("Invalid admin URL '{admin_url}': {e}")))?;
    href.query_pairs_mut()
        .append_pair("taxonomy", taxonomy.as_str())
        .append_pair("tag_ID", &term_id.to_string());

    Ok(Some(format!(
        "<a href=\"{href}\" class=\"url-exporter-trigger\" data-taxonomy=\"{taxonomy}\" data-term-id=\"{term_id}\">{label}</a>",
        href = escape_html(href.as_str()),
        taxonomy = escape_html(taxonomy.as_str()),
        term_id = term_id,
        label = escape_html(&labels.export_action),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("plain" => "plain" ; "no special characters")]
    #[test_case("a & b" => "a &amp; b" ; "ampersand")]
    #[test_case("<script>" => "&lt;script&gt;" ; "angle brackets")]
    #[test_case(r#"say "hi""# => "say &quot;hi&quot;" ; "double quotes")]
    #[test_case("it's" => "it&#039;s" ; "single quote")]
    #[test_case("&amp;" => "&amp;amp;" ; "already escaped text is escaped again")]
    fn test_escape_html(input: &str) -> String {
        escape_html(input)
    }

    #[test]
    fn test_truncate_url_keeps_short_urls() {
        assert_eq!(truncate_url("https://example.com/a"), "https://example.com/a");
    }

    #[test]
    fn test_truncate_url_cuts_at_fifty_characters() {
        let url = format!("https://example.com/{}", "x".repeat(60));
        let shown = truncate_url(&url);
        assert_eq!(shown.chars().count(), 53);
        assert!(shown.ends_with("..."));
        assert!(url.starts_with(shown.trim_end_matches("...")));
    }

    #[test]
    fn test_truncate_url_escapes_after_cutting() {
        let url = format!("https://example.com/?a=1&b={}", "y".repeat(60));
        let shown = truncate_url(&url);
        assert!(shown.contains("&amp;b="));
    }

    #[test]
    fn test_table_escapes_record_fields() {
        let records = vec![UrlRecord::new(
            "https://example.com/?q=\"x\"",
            "<b>Bold</b> & co",
            "May 1, 2025",
        )];
        let html = render_table(&records, "News & <Views>", &Labels::default(), None);

        assert!(html.contains("&lt;b&gt;Bold&lt;/b&gt; &amp; co"));
        assert!(html.contains("News &amp; &lt;Views&gt;"));
        assert!(html.contains("data-url=\"https://example.com/?q=&quot;x&quot;\""));
        assert!(!html.contains("<b>Bold</b>"));
    }

    #[test]
    fn test_table_keeps_full_url_in_link_and_copy_target() {
        let url = format!("https://example.com/{}", "z".repeat(80));
        let records = vec![UrlRecord::new(url.clone(), "Long", "May 1, 2025")];
        let html = render_table(&records, "News", &Labels::default(), None);

        assert!(html.contains(&format!("href=\"{url}\"")));
        assert!(html.contains(&format!("data-url=\"{url}\"")));
        assert!(html.contains("...</a>"));
    }

    #[test]
    fn test_table_marks_copied_row() {
        let records = vec![
            UrlRecord::new("https://a", "A", "May 2, 2025"),
            UrlRecord::new("https://b", "B", "May 1, 2025"),
        ];
        let html = render_table(&records, "News", &Labels::default(), Some(1));

        assert_eq!(html.matches("✓ Copied!").count(), 1);
        assert!(html.contains("<p><strong>Total:</strong> 2</p>"));
    }

    #[test]
    fn test_progress_markup() {
        let html = render_progress(Progress::new(50, 120), &Labels::default());
        assert!(html.contains("50 / 120"));
        assert!(html.contains("width: 42%"));
        assert!(html.contains("Loading URLs... (42%)"));
    }

    #[test]
    fn test_row_action_link_for_authorized_viewer() {
        let taxonomy = Taxonomy::new("post_tag").unwrap();
        let term_id = TermId::new(7).unwrap();
        let link = row_action_link(
            "https://blog.example.com/wp-admin/",
            &taxonomy,
            term_id,
            true,
            &Labels::default(),
        )
        .unwrap()
        .unwrap();

        assert!(link.contains("edit-tags.php?taxonomy=post_tag&amp;tag_ID=7"));
        assert!(link.contains("data-taxonomy=\"post_tag\""));
        assert!(link.contains("data-term-id=\"7\""));
        assert!(link.contains(">Export URLs</a>"));
    }

    #[test]
    fn test_row_action_link_hidden_for_unauthorized_viewer() {
        let taxonomy = Taxonomy::new("category").unwrap();
        let link = row_action_link(
            "https://blog.example.com/wp-admin/",
            &taxonomy,
            TermId::new(3).unwrap(),
            false,
            &Labels::default(),
        )
        .unwrap();
        assert!(link.is_none());
    }
}
