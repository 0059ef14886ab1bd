//! Aligned plain-text table rendering for task listings.

use chrono::SecondsFormat;
use unicode_width::UnicodeWidthStr;

use crate::task::domain::Task;

const COLUMNS: usize = 7;
const HEADERS: [&str; COLUMNS] = [
    "ID",
    "Title",
    "Description",
    "Status",
    "Created At",
    "Updated At",
    "Due At",
];
const GAP: &str = "  ";

/// Renders `tasks` as a table with a header row and a dashed underline.
///
/// Column widths grow to fit the widest cell, measured in terminal columns.
/// Line breaks and other control characters inside a cell are flattened to
/// spaces so every task stays on one line. An empty slice yields only the
/// two header lines.
#[must_use]
pub fn render(tasks: &[Task]) -> String {
    let header = HEADERS.map(str::to_owned);
    let underline = HEADERS.map(|title| "-".repeat(title.len()));
    let rows: Vec<[String; COLUMNS]> = tasks.iter().map(cells).collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let mut rendered = String::new();
    for row in [&header, &underline].into_iter().chain(&rows) {
        push_row(&mut rendered, row, &widths);
    }
    rendered
}

fn cells(task: &Task) -> [String; COLUMNS] {
    [
        task.id().to_string(),
        flatten(task.title().as_str()),
        flatten(task.description().as_str()),
        task.status().to_string(),
        task.created_at().to_rfc3339_opts(SecondsFormat::AutoSi, true),
        task.updated_at().to_rfc3339_opts(SecondsFormat::AutoSi, true),
        task.due_at().to_string(),
    ]
}

fn flatten(text: &str) -> String {
    text.replace(|c: char| c.is_control(), " ")
}

fn push_row(rendered: &mut String, row: &[String; COLUMNS], widths: &[usize; COLUMNS]) {
    let line = row
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let padding = width.saturating_sub(cell.width());
            format!("{cell}{}", " ".repeat(padding))
        })
        .collect::<Vec<_>>()
        .join(GAP);
    rendered.push_str(line.trim_end());
    rendered.push('\n');
}
