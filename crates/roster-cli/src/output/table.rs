#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render an aligned table for string rows.
#[must_use]
pub fn render_entity_table(
    headers: &[&str],
    rows: &[Vec<String>],
    options: TableOptions,
) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .max(header.len())
                .max(MIN_WIDTH)
        })
        .collect();

    fit_widths(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(widths.iter())
        .map(|(header, width)| pad(&truncate(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join(SEPARATOR)
        .trim_end()
        .to_string();

    let divider = "-".repeat(header_line.chars().count());

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(header_line);
    lines.push(divider);
    for row in rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let value = row.get(index).map_or("-", String::as_str);
                let cell = pad(&truncate(value, *width), *width, looks_numeric(value));
                if options.color {
                    colorize_status(&cell, value)
                } else {
                    cell
                }
            })
            .collect::<Vec<_>>()
            .join(SEPARATOR);
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

const MIN_WIDTH: usize = 6;
const SEPARATOR: &str = "  ";

/// Shrink the widest columns one character at a time until the table fits.
fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };

    let separators = widths.len().saturating_sub(1) * SEPARATOR.len();
    while widths.iter().sum::<usize>() + separators > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(idx, width)| **width > headers[*idx].len().max(MIN_WIDTH))
            .max_by_key(|(_, width)| **width)
            .map(|(idx, _)| idx);

        let Some(idx) = widest else {
            break;
        };
        widths[idx] -= 1;
    }
}

fn truncate(value: &str, width: usize) -> String {
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

fn pad(value: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(value.chars().count()));
    if right_align {
        format!("{fill}{value}")
    } else {
        format!("{value}{fill}")
    }
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.' | ','))
        && trimmed.chars().any(|ch| ch.is_ascii_digit())
}

/// Color an already padded cell by the employee status it shows.
fn colorize_status(cell: &str, value: &str) -> String {
    let code = match value {
        "Active" => "32",
        "On Leave" => "33",
        "Terminated" => "31",
        _ => return cell.to_string(),
    };
    format!("\u{1b}[{code}m{cell}\u{1b}[0m")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[test]
    fn columns_align_across_mixed_widths() {
        let headers = ["id", "status", "position"];
        let rows = vec![
            vec!["emp-1".to_string(), "Active".to_string(), "Eng".to_string()],
            vec![
                "emp-200".to_string(),
                "On Leave".to_string(),
                "Senior Engineer".to_string(),
            ],
        ];

        let table = render_entity_table(&headers, &rows, PLAIN);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[1].chars().all(|c| c == '-'));
        let status_col = lines[0].find("status").unwrap();
        assert_eq!(lines[2].find("Active"), Some(status_col));
        assert_eq!(lines[3].find("On Leave"), Some(status_col));
    }

    #[test]
    fn narrow_terminal_truncates_widest_column() {
        let headers = ["id", "notes"];
        let rows = vec![vec!["emp-1".to_string(), "x".repeat(80)]];
        let options = TableOptions {
            max_width: Some(30),
            color: false,
        };

        let table = render_entity_table(&headers, &rows, options);
        for line in table.lines() {
            assert!(line.chars().count() <= 30, "{line}");
        }
        assert!(table.contains('…'));
    }

    #[test]
    fn numbers_are_right_aligned() {
        let rows = vec![vec!["50000".to_string()], vec!["7".to_string()]];
        let table = render_entity_table(&["salary"], &rows, PLAIN);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[2], " 50000");
        assert_eq!(lines[3], "     7");
    }

    #[test]
    fn statuses_are_colored_when_enabled() {
        let options = TableOptions {
            max_width: None,
            color: true,
        };
        let rows = vec![vec!["Terminated".to_string()]];
        let table = render_entity_table(&["status"], &rows, options);
        assert!(table.contains("\u{1b}[31mTerminated"));
    }
}
