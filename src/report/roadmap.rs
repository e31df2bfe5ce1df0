use crate::types::audit_data::{FlaggedChapter, Phase2Result, RichnessStatus};

pub const ROADMAP_HEADER: &str = "Chapter,Issue,Priority";

/// One row per window below baseline, then one per externally flagged chapter.
pub fn build_roadmap_csv(richness: &Phase2Result, flagged: &[FlaggedChapter]) -> String {
    let mut rows = vec![ROADMAP_HEADER.to_string()];

    for row in &richness.richness_scorecard {
        let priority = match row.status {
            RichnessStatus::Green => continue,
            RichnessStatus::Red => "High",
            RichnessStatus::Yellow => "Medium",
        };
        rows.push(csv_row(&[
            &row.chapter.to_string(),
            &format!("{} below baseline", row.section),
            priority,
        ]));
    }

    for flag in flagged {
        let issue = match &flag.section {
            Some(section) if !section.is_empty() => format!("{} {}", section, flag.issue),
            _ => flag.issue.clone(),
        };
        rows.push(csv_row(&[&flag.chapter.to_string(), &issue, "High"]));
    }

    rows.join("\n")
}

fn csv_row(fields: &[&str]) -> String {
    fields
        .iter()
        .map(|f| csv_field(f))
        .collect::<Vec<_>>()
        .join(",")
}

/// Quotes a field only when it carries a delimiter, quote or line break.
fn csv_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
