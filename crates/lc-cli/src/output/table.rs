#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

const MIN_COLUMN: usize = 6;
const SEPARATOR: &str = "  ";

/// Render `key  value` rows under a header and divider.
///
/// Numeric values are right-aligned. When the table is wider than
/// `max_width`, the value column is truncated first.
#[must_use]
pub fn render_key_value_table(rows: &[Vec<String>], options: TableOptions) -> String {
    let headers = ["key", "value"];
    let mut widths = column_widths(&headers, rows);
    fit_widths(&mut widths, &headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| format_cell(&truncate_text(header, *width), *width, false, 0))
        .collect::<Vec<_>>()
        .join(SEPARATOR);
    let divider = "-".repeat(header_line.chars().count());

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(header_line);
    lines.push(divider);
    for row in rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let text = row.get(index).map_or("-", String::as_str);
                let truncated = truncate_text(text, *width);
                let numeric = looks_numeric(&truncated);
                match options.color.then(|| color_code(&truncated)).flatten() {
                    Some(code) => {
                        let painted = format!("\u{1b}[{code}m{truncated}\u{1b}[0m");
                        let escapes = painted.chars().count() - truncated.chars().count();
                        format_cell(&painted, *width, numeric, escapes)
                    }
                    None => format_cell(&truncated, *width, numeric, 0),
                }
            })
            .collect::<Vec<_>>()
            .join(SEPARATOR);
        lines.push(line);
    }
    lines.join("\n")
}

fn column_widths(headers: &[&str], rows: &[Vec<String>]) -> Vec<usize> {
    headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .max(header.len())
                .max(MIN_COLUMN)
        })
        .collect()
}

fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };

    let separators = widths.len().saturating_sub(1) * SEPARATOR.len();
    let mut total = widths.iter().sum::<usize>() + separators;

    // Shrink the rightmost shrinkable column first; keys stay readable.
    for index in (0..widths.len()).rev() {
        let floor = headers[index].len().max(MIN_COLUMN);
        while total > max_width && widths[index] > floor {
            widths[index] -= 1;
            total -= 1;
        }
    }
}

fn truncate_text(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }

    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty() && trimmed.parse::<f64>().is_ok()
}

/// `escapes` is the number of invisible ANSI characters in `value`.
fn format_cell(value: &str, width: usize, numeric: bool, escapes: usize) -> String {
    let visible = value.chars().count() - escapes;
    let pad = " ".repeat(width.saturating_sub(visible));
    if numeric {
        format!("{pad}{value}")
    } else {
        format!("{value}{pad}")
    }
}

fn color_code(value: &str) -> Option<&'static str> {
    match value.to_ascii_lowercase().as_str() {
        "low" | "ok" | "true" => Some("32"),
        "moderate" | "warn" => Some("33"),
        "high" | "error" | "false" => Some("31"),
        _ => None,
    }
}
