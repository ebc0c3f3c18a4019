//! Plain-text tables for `--format table`.

use serde_json::{Map, Value};
use tf_core::durations::format_clock;

/// Columns shown first, in this order, when present.
const LEADING_COLUMNS: [&str; 8] = [
    "id",
    "title",
    "employee_name",
    "name",
    "status",
    "priority",
    "deadline",
    "time_spent",
];

/// Fields holding a second count, shown as `HH:MM:SS`.
const SECONDS_FIELDS: [&str; 2] = ["time_spent", "elapsed_secs"];

const MIN_COLUMN_WIDTH: usize = 4;
const GAP: &str = "  ";

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render any JSON value: arrays of objects as one row per item, objects as
/// key/value pairs, scalars as a single cell.
#[must_use]
pub fn render_value(value: &Value, options: TableOptions) -> String {
    match value {
        Value::Array(items) if items.is_empty() => String::from("(no rows)"),
        Value::Array(items) if items.iter().all(Value::is_object) => {
            let objects: Vec<&Map<String, Value>> =
                items.iter().filter_map(Value::as_object).collect();
            let headers = column_order(&objects);
            let rows = objects
                .iter()
                .map(|map| {
                    headers
                        .iter()
                        .map(|h| map.get(h).map_or_else(|| "-".to_string(), |v| cell(h, v)))
                        .collect()
                })
                .collect();
            Table { headers, rows }.render(options)
        }
        Value::Array(items) => Table {
            headers: vec!["value".to_string()],
            rows: items.iter().map(|v| vec![cell("", v)]).collect(),
        }
        .render(options),
        Value::Object(map) => Table {
            headers: vec!["key".to_string(), "value".to_string()],
            rows: column_order(&[map])
                .into_iter()
                .map(|key| {
                    let value = cell(&key, &map[&key]);
                    vec![key, value]
                })
                .collect(),
        }
        .render(options),
        scalar => Table {
            headers: vec!["value".to_string()],
            rows: vec![vec![cell("", scalar)]],
        }
        .render(options),
    }
}

fn column_order(objects: &[&Map<String, Value>]) -> Vec<String> {
    let mut rest: Vec<String> = Vec::new();
    for map in objects {
        for key in map.keys() {
            if !LEADING_COLUMNS.contains(&key.as_str()) && !rest.contains(key) {
                rest.push(key.clone());
            }
        }
    }
    rest.sort();

    LEADING_COLUMNS
        .iter()
        .filter(|col| objects.iter().any(|map| map.contains_key(**col)))
        .map(|col| (*col).to_string())
        .chain(rest)
        .collect()
}

fn cell(key: &str, value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Number(n) if SECONDS_FIELDS.contains(&key) => {
            n.as_u64().map_or_else(|| n.to_string(), format_clock)
        }
        Value::String(s) => s.clone(),
        Value::Bool(_) | Value::Number(_) => value.to_string(),
        nested => serde_json::to_string(nested).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    fn render(&self, options: TableOptions) -> String {
        let widths = self.widths(options.max_width);

        let mut lines = Vec::with_capacity(self.rows.len() + 2);
        let header = join_cells(&self.headers, &widths, |text| text.to_string());
        let divider = "-".repeat(header.chars().count());
        lines.push(header);
        lines.push(divider);

        for row in &self.rows {
            lines.push(join_cells(row, &widths, |text| {
                if options.color {
                    colorize(text)
                } else {
                    text.to_string()
                }
            }));
        }
        lines.join("\n")
    }

    /// Natural column widths, shrunk widest-first to fit `max_width`.
    fn widths(&self, max_width: Option<usize>) -> Vec<usize> {
        let mut widths: Vec<usize> = self
            .headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(i))
                    .map(|c| c.chars().count())
                    .chain(std::iter::once(header.chars().count()))
                    .max()
                    .unwrap_or(0)
                    .max(MIN_COLUMN_WIDTH)
            })
            .collect();

        let Some(max_width) = max_width else {
            return widths;
        };
        let gaps = widths.len().saturating_sub(1) * GAP.len();
        while widths.iter().sum::<usize>() + gaps > max_width {
            let Some((widest, _)) = widths
                .iter()
                .enumerate()
                .filter(|(_, w)| **w > MIN_COLUMN_WIDTH)
                .max_by_key(|(_, w)| **w)
            else {
                break;
            };
            widths[widest] -= 1;
        }
        widths
    }
}

fn join_cells<F>(cells: &[String], widths: &[usize], style: F) -> String
where
    F: Fn(&str) -> String,
{
    widths
        .iter()
        .enumerate()
        .map(|(i, width)| {
            let text = truncate(cells.get(i).map_or("-", String::as_str), *width);
            let pad = " ".repeat(width.saturating_sub(text.chars().count()));
            let styled = style(&text);
            if is_numeric(&text) {
                format!("{pad}{styled}")
            } else {
                format!("{styled}{pad}")
            }
        })
        .collect::<Vec<_>>()
        .join(GAP)
        .trim_end()
        .to_string()
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut out: String = text.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn is_numeric(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_digit())
        && text
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, ':' | '.' | '-'))
}

fn colorize(text: &str) -> String {
    let code = match text {
        "completed" | "true" => "32",
        "in_progress" => "36",
        "pending" | "paused" => "33",
        "high" | "Overdue" => "31",
        _ => return text.to_string(),
    };
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
