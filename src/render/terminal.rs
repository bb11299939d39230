//! Plain-text rendering of a [`View`]
//!
//! Used by the `docentes` binary. Bars are drawn vertically, one row per
//! integer step up to [`MAX_CHART_ROWS`]; taller axes are scaled.

use chrono::{DateTime, Local, Utc};
use std::fmt::Write;

use super::view::{BarChart, DirectoryView, TeacherCard, View};
use crate::labels;

/// Tallest chart drawn, in text rows
pub const MAX_CHART_ROWS: u64 = 12;

const BAR_GLYPH: char = '█';

/// Render a view to text. `last_updated` adds a footer to directory views.
pub fn render_text(view: &View, last_updated: Option<DateTime<Utc>>) -> String {
    match view {
        View::Loading { message } => format!("{}\n", message),
        View::Error { message } => format!("{}\n", message),
        View::Directory(directory) => render_directory(directory, last_updated),
    }
}

fn render_directory(directory: &DirectoryView, last_updated: Option<DateTime<Utc>>) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", directory.title);
    let _ = writeln!(out, "{}", "=".repeat(directory.title.chars().count()));
    out.push('\n');

    for card in &directory.cards {
        render_card(&mut out, card);
    }

    render_chart(&mut out, &directory.chart);

    if let Some(at) = last_updated {
        out.push('\n');
        let _ = writeln!(
            out,
            "{}: {}",
            labels::LAST_UPDATE,
            at.with_timezone(&Local).format("%H:%M:%S")
        );
    }

    out
}

fn render_card(out: &mut String, card: &TeacherCard) {
    for (i, field) in card.fields.iter().enumerate() {
        let corner = if i == 0 { '┌' } else { '│' };
        let _ = writeln!(out, "{} {}: {}", corner, field.label, field.value);
    }
    out.push_str("└\n");
}

fn render_chart(out: &mut String, chart: &BarChart) {
    let _ = writeln!(out, "{}", chart.dataset_label);

    let column_width = chart
        .bars
        .iter()
        .map(|b| b.label.chars().count())
        .max()
        .unwrap_or(0)
        + 2;
    let bar_width = column_width.saturating_sub(4).max(1);
    let label_width = chart.axis.max.to_string().len();

    let rows = chart.axis.max.min(MAX_CHART_ROWS).max(1);

    for row in (1..=rows).rev() {
        // Smallest value that fills this row
        let threshold = (row * chart.axis.max).div_ceil(rows);
        let _ = write!(out, "{:>width$} │", threshold, width = label_width);

        for bar in &chart.bars {
            let cell = if bar.value >= threshold {
                BAR_GLYPH.to_string().repeat(bar_width)
            } else {
                " ".repeat(bar_width)
            };
            let _ = write!(out, "{:^width$}", cell, width = column_width);
        }
        out.truncate(out.trim_end().len());
        out.push('\n');
    }

    let _ = writeln!(
        out,
        "{:>width$} └{}",
        chart.axis.min,
        "─".repeat(column_width * chart.bars.len()),
        width = label_width
    );

    let _ = write!(out, "{} ", " ".repeat(label_width + 1));
    for bar in &chart.bars {
        let _ = write!(out, "{:^width$}", bar.label, width = column_width);
    }
    out.truncate(out.trim_end().len());
    out.push('\n');

    let _ = write!(out, "{} ", " ".repeat(label_width + 1));
    for bar in &chart.bars {
        let _ = write!(out, "{:^width$}", bar.value, width = column_width);
    }
    out.truncate(out.trim_end().len());
    out.push('\n');
}
