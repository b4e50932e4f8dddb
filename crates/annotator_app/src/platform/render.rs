use std::fmt::Write;

use annotator_core::{EditorPhase, EditorViewModel, OpenArticleView};

/// Plain-text rendering of the whole view model: the article grid, the
/// editor panel and the lost-codes warning banner.
pub(crate) fn render(view: &EditorViewModel) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "-- coded articles ({} rows, sorted by {}){} --",
        view.rows.len(),
        view.sort.order_by(),
        if view.fetching { ", fetching..." } else { "" }
    );
    let _ = writeln!(
        out,
        "{:>6}  {:>8}  {:<32}  {:<14}  {:<10}  {:>4}  {:>5}  {:<11}  comments",
        "id", "article", "title", "medium", "date", "page", "len", "status"
    );
    for row in &view.rows {
        let _ = writeln!(
            out,
            "{:>6}  {:>8}  {:<32}  {:<14}  {:<10}  {:>4}  {:>5}  {:<11}  {}",
            row.id,
            row.article_id,
            clip(&row.title, 32),
            clip(&row.medium, 14),
            row.date,
            row.pagenr.map(|n| n.to_string()).unwrap_or_default(),
            row.length.map(|n| n.to_string()).unwrap_or_default(),
            row.status_label,
            row.comments
        );
    }

    match (&view.open, view.phase) {
        (_, EditorPhase::Loading) => {
            let _ = writeln!(out, "-- loading article... --");
        }
        (Some(open), _) => render_editor(&mut out, open),
        (None, _) => {
            let _ = writeln!(out, "-- no article open --");
        }
    }

    out
}

fn render_editor(out: &mut String, open: &OpenArticleView) {
    let _ = writeln!(
        out,
        "-- editing coded article {}{}{} --",
        open.id,
        if open.dirty { " *unsaved changes*" } else { "" },
        if open.saving { " (saving...)" } else { "" }
    );
    let _ = writeln!(
        out,
        "status:  {}",
        open.status.map(|s| s.label()).unwrap_or("(not set)")
    );
    let _ = writeln!(out, "comment: {}", open.comment);
    for (index, coding) in open.codings.iter().enumerate() {
        let values = coding
            .values
            .iter()
            .map(|value| {
                let mut rendered = format!("field {}=", value.field);
                if let Some(code) = value.code {
                    let _ = write!(rendered, "code {code}");
                } else if let Some(text) = &value.text {
                    let _ = write!(rendered, "{text:?}");
                } else {
                    rendered.push_str("(empty)");
                }
                rendered
            })
            .collect::<Vec<_>>()
            .join(", ");
        let unit = match coding.sentence {
            Some(sentence) => format!("sentence {sentence}"),
            None => "article".to_string(),
        };
        let _ = writeln!(out, "unit {index} ({unit}): {values}");
    }
    if !open.lost_fields.is_empty() {
        let fields = open
            .lost_fields
            .iter()
            .map(|field| field.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(
            out,
            "WARNING: some codes are not in the current codebooks; triggered by fields: {fields}"
        );
    }
}

fn clip(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let clipped: String = text.chars().take(max.saturating_sub(1)).collect();
        format!("{clipped}…")
    }
}
