use crate::services::files::FileObject;
use chrono::DateTime;

const HEADERS: [&str; 5] = ["File ID", "Size (bytes)", "Created", "Filename", "Purpose"];

fn format_created_at(created_at: i64) -> String {
    DateTime::from_timestamp(created_at, 0)
        .map(|ts| ts.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| created_at.to_string())
}

/// Renders file records as a fixed-width table, one row per record.
pub fn render_file_table(files: &[FileObject]) -> String {
    let rows: Vec<[String; 5]> = files
        .iter()
        .map(|file| {
            [
                file.id.clone(),
                file.bytes.to_string(),
                format_created_at(file.created_at),
                file.filename.clone(),
                file.purpose.clone(),
            ]
        })
        .collect();

    let mut widths: [usize; 5] = [0; 5];
    for (i, header) in HEADERS.iter().enumerate() {
        widths[i] = header.len();
    }
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.len());
        }
    }

    let render_row = |cells: &[String; 5]| -> String {
        let rendered: Vec<String> = cells
            .iter()
            .zip(widths.iter())
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .collect();
        format!("| {} |", rendered.join(" | "))
    };

    let header_cells: [String; 5] = HEADERS.map(str::to_string);
    let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(render_row(&header_cells));
    lines.push(format!("|-{}-|", separator.join("-|-")));
    for row in &rows {
        lines.push(render_row(row));
    }
    lines.join("\n")
}
