//! Plain-text rendering of a tabular view.

use std::fmt::Write;

use timesheet_lib::table::{TabularView, VisibleRows};
use unicode_width::UnicodeWidthStr;

const GAP: &str = "  ";

/// Renders the current page of `view` as aligned text columns.
pub fn render_table(view: &TabularView) -> String {
    let columns = view.visible_columns();
    let state = view.view_state();

    let page = match view.visible_rows() {
        VisibleRows::Page(page) => page,
        VisibleRows::NoRows => return "No rows.\n".to_string(),
        VisibleRows::NoMatches => return format!("No rows match {:?}.\n", state.filter()),
    };

    if columns.is_empty() {
        return "All columns are hidden.\n".to_string();
    }

    let headers: Vec<String> = columns
        .iter()
        .map(|c| {
            let indicator = state.sort_direction(c.id()).indicator();
            if indicator.is_empty() {
                c.label().to_string()
            } else {
                format!("{} {}", c.label(), indicator)
            }
        })
        .collect();

    let cells: Vec<Vec<String>> = page
        .rows()
        .iter()
        .map(|row| columns.iter().map(|c| c.value(row).to_string()).collect())
        .collect();

    let widths: Vec<usize> = (0..columns.len())
        .map(|i| {
            cells
                .iter()
                .map(|row| row[i].width())
                .chain(std::iter::once(headers[i].width()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    push_line(&mut out, &headers, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_line(&mut out, &rule, &widths);
    for row in &cells {
        push_line(&mut out, row, &widths);
    }

    let range = page.row_range();
    let _ = writeln!(
        out,
        "\nPage {}/{} (rows {}-{} of {})",
        page.index() + 1,
        page.page_count(),
        range.start(),
        range.end(),
        page.total_count()
    );
    out
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.width());
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect();
    out.push_str(line.join(GAP).trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use timesheet_lib::model::Row;
    use timesheet_lib::table::{ColumnDef, TableConfig};

    use super::*;

    fn view() -> TabularView {
        let rows = vec![
            Row::new().set("name", "Bob").set("hours", 3),
            Row::new().set("name", "Ann").set("hours", 12),
        ];
        let columns = vec![ColumnDef::field("name", "Name"), ColumnDef::field("hours", "Hours")];
        TabularView::new(rows, columns, TableConfig::default()).unwrap()
    }

    #[test]
    fn test_render_sorted_page() {
        let mut view = view();
        view.toggle_sort("name").unwrap();

        let expected = "\
Name ▲  Hours
------  -----
Ann     12
Bob     3

Page 1/1 (rows 1-2 of 2)
";
        assert_eq!(render_table(&view), expected);
    }

    #[test]
    fn test_render_empty_states() {
        let mut view = view();
        view.set_filter("zzz");
        assert_eq!(render_table(&view), "No rows match \"zzz\".\n");

        view.set_rows(Vec::new());
        assert_eq!(render_table(&view), "No rows.\n");
    }
}
