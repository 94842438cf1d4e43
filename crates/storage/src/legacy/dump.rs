//! Plain-text dump of every table, for debugging.

use std::io::Write;

use rusqlite::Connection;
use rusqlite::types::ValueRef;

use super::list_tables;
use crate::error::StorageResult;

/// Writes each table as a header line followed by aligned columns.
pub fn dump_all_tables<W: Write>(conn: &Connection, out: &mut W) -> StorageResult<()> {
    for table in list_tables(conn)? {
        let (columns, rows) = read_table(conn, &table)?;
        writeln!(out, "Table: {table}")?;
        write_aligned(out, &columns, &rows)?;
        writeln!(out)?;
    }
    Ok(())
}

fn read_table(conn: &Connection, table: &str) -> StorageResult<(Vec<String>, Vec<Vec<String>>)> {
    let mut stmt = conn.prepare(&format!("SELECT * FROM \"{}\"", table.replace('"', "\"\"")))?;
    let columns: Vec<String> = stmt.column_names().into_iter().map(str::to_owned).collect();
    let width = columns.len();
    let rows = stmt.query_map([], |row| {
        (0..width).map(|i| row.get_ref(i).map(render)).collect::<Result<Vec<_>, _>>()
    })?;
    Ok((columns, rows.collect::<Result<Vec<_>, _>>()?))
}

fn render(value: ValueRef<'_>) -> String {
    match value {
        ValueRef::Null => "None".to_owned(),
        ValueRef::Integer(i) => i.to_string(),
        ValueRef::Real(f) => f.to_string(),
        ValueRef::Text(t) => String::from_utf8_lossy(t).into_owned(),
        ValueRef::Blob(b) => format!("<{} bytes>", b.len()),
    }
}

fn write_aligned<W: Write>(
    out: &mut W,
    columns: &[String],
    rows: &[Vec<String>],
) -> std::io::Result<()> {
    let widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(i, name)| {
            rows.iter()
                .filter_map(|row| row.get(i))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(name.chars().count()))
                .max()
                .unwrap_or_default()
        })
        .collect();

    let line = |cells: &[String]| -> String {
        let padded: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .collect();
        padded.join("  ").trim_end().to_owned()
    };

    writeln!(out, "{}", line(columns))?;
    if rows.is_empty() {
        return writeln!(out, "(no rows)");
    }
    for row in rows {
        writeln!(out, "{}", line(row.as_slice()))?;
    }
    Ok(())
}
