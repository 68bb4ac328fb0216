use chrono::{DateTime, Local, Utc};

use backoffice_core::{project_rows, Record, RecordRow, ResourceKind};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const BASE_COLUMNS: [&str; 5] = ["ID", "NAME", "EMAIL", "STATUS", "CREATED"];

pub(crate) fn format_timestamp(value: DateTime<Utc>) -> String {
    value.with_timezone(&Local).format(TIMESTAMP_FORMAT).to_string()
}

pub(crate) fn empty_placeholder(kind: ResourceKind) -> String {
    format!("No {kind} found.")
}

pub(crate) fn render_table<R: Record>(records: &[R]) -> String {
    let rows = project_rows(records);
    if rows.is_empty() {
        return empty_placeholder(R::KIND);
    }

    let mut header: Vec<&str> = BASE_COLUMNS.to_vec();
    header.extend_from_slice(R::extra_columns());
    header.push("ACTIONS");

    let body: Vec<Vec<String>> = rows.iter().map(|row| row_cells(R::KIND, row)).collect();
    layout(&header, &body)
}

pub(crate) fn render_json<R: Record>(records: &[R]) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

fn row_cells(kind: ResourceKind, row: &RecordRow) -> Vec<String> {
    let mut cells = vec![
        row.id.to_string(),
        row.name.clone(),
        row.email.clone(),
        row.status.label().to_string(),
        format_timestamp(row.created_at),
    ];
    cells.extend(row.extra.iter().cloned());
    cells.push(format!("{kind} update {id} | {kind} delete {id}", id = row.id));
    cells
}

fn layout(header: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = header.iter().map(|title| title.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_line = |cells: Vec<&str>| {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{cell:<width$}", width = *width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(format_line(header.to_vec()));
    for row in rows {
        lines.push(format_line(row.iter().map(String::as_str).collect()));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use backoffice_core::{Admin, Client};
    use chrono::TimeZone;

    fn acme() -> Client {
        Client {
            client_id: 1,
            name: "Acme".to_string(),
            email: "a@x.com".to_string(),
            address: None,
            phones: None,
            enabled: true,
            date_created: Utc
                .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
                .single()
                .expect("date"),
            admin_id: None,
        }
    }

    #[test]
    fn empty_collection_shows_placeholder_only() {
        let clients: Vec<Client> = Vec::new();
        let rendered = render_table(&clients);
        assert_eq!(rendered, "No clients found.");
        assert!(!rendered.contains("ID"));

        let admins: Vec<Admin> = Vec::new();
        assert_eq!(render_table(&admins), "No admins found.");
    }

    #[test]
    fn one_row_per_record_with_badge() {
        let mut globex = acme();
        globex.client_id = 2;
        globex.name = "Globex".to_string();
        globex.enabled = false;

        let rendered = render_table(&[acme(), globex]);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("ID"));
        assert!(lines[0].ends_with("ACTIONS"));
        assert!(lines[1].contains("Acme"));
        assert!(lines[1].contains("Active"));
        assert!(lines[1].contains("clients update 1 | clients delete 1"));
        assert!(lines[2].contains("Inactive"));
    }

    #[test]
    fn columns_are_aligned() {
        let mut long = acme();
        long.client_id = 22;
        long.name = "A much longer client name".to_string();
        let rendered = render_table(&[acme(), long]);
        let lines: Vec<&str> = rendered.lines().collect();
        let email_offsets: Vec<usize> = lines
            .iter()
            .skip(1)
            .map(|line| line.find("a@x.com").expect("email column"))
            .collect();
        assert_eq!(email_offsets[0], email_offsets[1]);
        assert_eq!(lines[0].find("EMAIL"), Some(email_offsets[0]));
    }

    #[test]
    fn timestamp_uses_date_and_time() {
        let formatted = format_timestamp(acme().date_created);
        assert_eq!(formatted.len(), 19);
        assert_eq!(&formatted[4..5], "-");
        assert_eq!(&formatted[13..14], ":");
    }

    #[test]
    fn json_output_keeps_api_fields() {
        let rendered = render_json(&[acme()]).expect("json");
        assert!(rendered.contains("\"client_id\": 1"));
        assert!(rendered.contains("\"date_created\""));
    }
}
