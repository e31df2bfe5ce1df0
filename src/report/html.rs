use crate::types::audit_data::Phase2Result;

/// Scorecard as an HTML fragment: one list item per window.
pub fn build_interactive_map(richness: &Phase2Result) -> String {
    let items: String = richness
        .richness_scorecard
        .iter()
        .map(|row| {
            format!(
                "<li>Chapter {} {}: {:.1} ({})</li>",
                row.chapter,
                escape_html(&row.section),
                row.your_score,
                row.status.as_str()
            )
        })
        .collect();
    format!("<div><h3>Richness Map</h3><ul>{}</ul></div>", items)
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
