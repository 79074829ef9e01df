//! Output formatting helpers for human-readable and JSON output.

use hl7tree::{Component, Field};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Aligned table
    Human,
    /// Decomposed tree as JSON
    Json,
}

/// Print a table with aligned columns in human-readable format.
///
/// `headers` and each row in `rows` must have the same length.
pub fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    for line in format_table(headers, rows) {
        println!("{line}");
    }
}

/// Lays out the table lines printed by [`print_table`].
///
/// Widths count characters, so non-ASCII values stay aligned.
pub fn format_table(headers: &[&str], rows: &[Vec<String>]) -> Vec<String> {
    if rows.is_empty() {
        return Vec::new();
    }

    // Column widths: max of header and all row values
    let col_count = headers.len();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(col_count) {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 1);
    let header_line: Vec<String> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| format!("{:<width$}", h, width = widths[i]))
        .collect();
    lines.push(header_line.join("  "));

    for row in rows {
        let line: Vec<String> = row
            .iter()
            .enumerate()
            .take(col_count)
            .map(|(i, cell)| format!("{:<width$}", cell, width = widths[i]))
            .collect();
        lines.push(line.join("  "));
    }
    lines
}

/// Flattens a field into one row per sub-component.
///
/// Columns are the 1-based repetition, component and sub-component positions
/// followed by the literal value. Components without sub-components get a
/// single row with an empty sub-component column.
pub fn leaf_rows(field: &Field) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    match field.repetitions() {
        Some(reps) => {
            for (r, rep) in reps.iter().enumerate() {
                push_component_rows(&mut rows, &(r + 1).to_string(), rep.components());
            }
        }
        None => push_component_rows(&mut rows, "", field.components()),
    }
    rows
}

fn push_component_rows(rows: &mut Vec<Vec<String>>, rep: &str, components: &[Component]) {
    for (c, component) in components.iter().enumerate() {
        let comp = (c + 1).to_string();
        if component.subcomponents().is_empty() {
            rows.push(vec![rep.to_string(), comp, String::new(), String::new()]);
            continue;
        }
        for (s, sub) in component.subcomponents().iter().enumerate() {
            rows.push(vec![
                rep.to_string(),
                comp.clone(),
                (s + 1).to_string(),
                sub.value().to_string(),
            ]);
        }
    }
}
