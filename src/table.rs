//! Elastic-width ASCII table rendering for terminal output.

pub fn render_table(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut widths = headers.iter().map(|h| h.chars().count()).collect::<Vec<_>>();
    for row in rows {
        for (idx, cell) in row.iter().enumerate().take(widths.len()) {
            widths[idx] = widths[idx].max(cell.chars().count());
        }
    }

    let separator = widths
        .iter()
        .map(|width| "-".repeat((*width).max(1)))
        .collect::<Vec<_>>();

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format_row(headers, &widths));
    lines.push(format_row(&separator, &widths));
    for row in rows {
        lines.push(format_row(row, &widths));
    }
    let mut output = lines.join("\n");
    output.push('\n');
    output
}

pub fn print_table(headers: &[String], rows: &[Vec<String>]) {
    print!("{}", render_table(headers, rows));
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    let line = cells
        .iter()
        .zip(widths.iter().copied())
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    line.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_expand_to_widest_cell() {
        let headers = vec!["model".to_string(), "Blue".to_string()];
        let rows = vec![vec!["X200 Pro Max".to_string(), "2".to_string()]];
        let rendered = render_table(&headers, &rows);
        let lines = rendered.lines().collect::<Vec<_>>();
        assert_eq!(lines[0], "model         Blue");
        assert_eq!(lines[1], "------------  ----");
        assert_eq!(lines[2], "X200 Pro Max  2");
    }

    #[test]
    fn header_only_table_renders_without_data_lines() {
        let headers = vec!["model".to_string()];
        let rendered = render_table(&headers, &[]);
        assert_eq!(rendered, "model\n-----\n");
    }
}
