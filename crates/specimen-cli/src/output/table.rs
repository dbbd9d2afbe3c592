/// Render a left-aligned table, truncating the widest columns when it would
/// exceed `max_width` terminal columns.
///
/// Widths are measured in terminal columns: East Asian wide and fullwidth
/// characters count as two.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>], max_width: Option<usize>) -> String {
    let mut widths = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(String::as_str)
                .map(display_width)
                .max()
                .unwrap_or(0)
                .max(display_width(header))
        })
        .collect::<Vec<_>>();

    if let Some(max_width) = max_width {
        shrink_to_fit(&mut widths, headers, max_width);
    }

    let header_line = format_row(headers.iter().copied(), &widths);
    let divider = "-".repeat(display_width(&header_line));

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(header_line);
    lines.push(divider);
    for row in rows {
        lines.push(format_row(row.iter().map(String::as_str), &widths));
    }
    lines.join("\n")
}

fn shrink_to_fit(widths: &mut [usize], headers: &[&str], max_width: usize) {
    let separators = widths.len().saturating_sub(1) * 2;
    while widths.iter().sum::<usize>() + separators > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(index, width)| **width > display_width(headers[*index]).max(4))
            .max_by_key(|(_, width)| **width)
            .map(|(index, _)| index);

        let Some(index) = widest else {
            break;
        };
        widths[index] -= 1;
    }
}

fn format_row<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let line = cells
        .zip(widths)
        .map(|(cell, width)| {
            let text = truncate(cell, *width);
            let pad = width.saturating_sub(display_width(&text));
            format!("{text}{}", " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join("  ");
    line.trim_end().to_string()
}

fn truncate(value: &str, width: usize) -> String {
    if display_width(value) <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }

    let budget = width - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in value.chars() {
        let ch_width = char_width(ch);
        if used + ch_width > budget {
            break;
        }
        used += ch_width;
        out.push(ch);
    }
    out.push('…');
    out
}

/// Terminal columns taken by `value`.
#[must_use]
pub fn display_width(value: &str) -> usize {
    value.chars().map(char_width).sum()
}

fn char_width(ch: char) -> usize {
    if is_wide(ch) { 2 } else { 1 }
}

// East Asian Wide (W) and Fullwidth (F) blocks.
const fn is_wide(ch: char) -> bool {
    matches!(ch as u32,
        0x1100..=0x115F
        | 0x2E80..=0x303E
        | 0x3041..=0x33FF
        | 0x3400..=0x4DBF
        | 0x4E00..=0x9FFF
        | 0xA000..=0xA4CF
        | 0xAC00..=0xD7A3
        | 0xF900..=0xFAFF
        | 0xFE30..=0xFE4F
        | 0xFF00..=0xFF60
        | 0xFFE0..=0xFFE6
        | 0x1F300..=0x1F64F
        | 0x1F900..=0x1F9FF
        | 0x20000..=0x3FFFD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_are_aligned() {
        let rows = vec![
            vec!["id".to_string(), "1001".to_string()],
            vec!["address.city".to_string(), "\"北京\"".to_string()],
        ];
        let table = render_table(&["path", "value"], &rows, None);
        let lines = table.lines().collect::<Vec<_>>();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("path          value"));
        assert!(lines[1].chars().all(|c| c == '-'));
        assert!(lines[2].starts_with("id            1001"));
    }

    #[test]
    fn cjk_cells_align_by_terminal_columns() {
        let rows = vec![
            vec!["\"北京\"".to_string(), "address.city".to_string()],
            vec!["\"100000\"".to_string(), "address.zipCode".to_string()],
        ];
        let table = render_table(&["value", "path"], &rows, None);
        let lines = table.lines().collect::<Vec<_>>();

        let path_column = |line: &str| {
            let start = line.find("address").expect("path cell");
            display_width(&line[..start])
        };
        assert_eq!(path_column(lines[2]), 10);
        assert_eq!(path_column(lines[3]), 10);
    }

    #[test]
    fn display_width_counts_wide_characters_twice() {
        assert_eq!(display_width("abc"), 3);
        assert_eq!(display_width("测试对象"), 8);
        assert_eq!(display_width("评论1"), 5);
    }

    #[test]
    fn truncation_respects_wide_characters() {
        let cut = truncate("这是一个用于测试", 6);
        assert_eq!(cut, "这是…");
        assert!(display_width(&cut) <= 6);
    }

    #[test]
    fn wide_tables_are_truncated() {
        let rows = vec![vec!["description".to_string(), "x".repeat(80)]];
        let table = render_table(&["path", "value"], &rows, Some(40));
        let row = table.lines().nth(2).expect("row line");
        assert!(display_width(row) <= 40);
        assert!(row.ends_with('…'));
    }
}
