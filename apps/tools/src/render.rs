use serde::Serialize;
use table_core::{SortColumn, SortIndicator, TableRow, TableView, ViewState, NO_MATCHES_MESSAGE};

fn header_label(state: &ViewState, column: SortColumn) -> String {
    match state.sort_indicator(column) {
        SortIndicator::Unsorted => column.title().to_string(),
        SortIndicator::Ascending => format!("{} ^", column.title()),
        SortIndicator::Descending => format!("{} v", column.title()),
    }
}

fn cells(row: &TableRow) -> [String; 4] {
    [
        row.id.to_string(),
        row.name.clone(),
        row.category.clone(),
        row.user.clone(),
    ]
}

pub fn table_text(state: &ViewState, table: &TableView) -> String {
    let TableView::Rows(rows) = table else {
        return format!("{NO_MATCHES_MESSAGE}\n");
    };

    let headers = SortColumn::ALL.map(|column| header_label(state, column));
    let body: Vec<[String; 4]> = rows.iter().map(cells).collect();

    let mut widths = headers.clone().map(|h| h.chars().count());
    for line in &body {
        for (width, cell) in widths.iter_mut().zip(line) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &headers, &widths);
    for line in &body {
        push_line(&mut out, line, &widths);
    }
    out
}

fn push_line(out: &mut String, cells: &[String; 4], widths: &[usize; 4]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    out.push_str(padded.join("  ").trim_end());
    out.push('\n');
}

#[derive(Serialize)]
struct TableJson<'a> {
    state: &'a ViewState,
    rows: &'a [TableRow],
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'static str>,
}

pub fn table_json(state: &ViewState, table: &TableView) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&TableJson {
        state,
        rows: table.rows(),
        message: table.is_empty().then_some(NO_MATCHES_MESSAGE),
    })
}
