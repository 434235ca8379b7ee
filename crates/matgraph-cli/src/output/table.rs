//! Boxed table rendering with ASCII/Unicode borders.

use std::fmt::Write;

struct Borders {
    horizontal: char,
    vertical: char,
    top: [char; 3],
    middle: [char; 3],
    bottom: [char; 3],
}

const ASCII: Borders = Borders {
    horizontal: '-',
    vertical: '|',
    top: ['+', '+', '+'],
    middle: ['+', '+', '+'],
    bottom: ['+', '+', '+'],
};

const UNICODE: Borders = Borders {
    horizontal: '─',
    vertical: '│',
    top: ['┌', '┬', '┐'],
    middle: ['├', '┼', '┤'],
    bottom: ['└', '┴', '┘'],
};

/// Render `rows` under `headers` as a boxed table, one line per row.
///
/// Cells are centered with one space of padding. Cell text must be plain
/// (no ANSI codes), since widths are measured in characters.
pub(crate) fn render(headers: &[&str], rows: &[Vec<String>], ascii: bool) -> String {
    let borders = if ascii { &ASCII } else { &UNICODE };

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(col, header)| {
            rows.iter()
                .filter_map(|row| row.get(col))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
                + 2
        })
        .collect();

    let mut out = String::new();
    out.push_str(&rule(&widths, borders.horizontal, borders.top));
    out.push_str(&line(headers.iter().copied(), &widths, borders.vertical));
    out.push_str(&rule(&widths, borders.horizontal, borders.middle));
    for row in rows {
        out.push_str(&line(row.iter().map(String::as_str), &widths, borders.vertical));
    }
    out.push_str(&rule(&widths, borders.horizontal, borders.bottom));
    out
}

fn rule(widths: &[usize], horizontal: char, [left, join, right]: [char; 3]) -> String {
    let segments: Vec<String> = widths
        .iter()
        .map(|&w| std::iter::repeat_n(horizontal, w).collect())
        .collect();
    format!("{left}{}{right}\n", segments.join(&join.to_string()))
}

fn line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize], vertical: char) -> String {
    let mut out = String::new();
    out.push(vertical);
    for (cell, &width) in cells.zip(widths) {
        let _ = write!(out, "{cell:^width$}{vertical}");
    }
    out.push('\n');
    out
}
