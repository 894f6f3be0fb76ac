use anyhow::Result;
use clap::ValueEnum;
use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    #[value(alias = "md")]
    Markdown,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Json => "json",
            OutputFormat::Table => "table",
            OutputFormat::Markdown => "markdown",
        };
        f.write_str(name)
    }
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let data = serde_json::to_string_pretty(value)?;
    println!("{data}");
    Ok(())
}

pub fn render_table(headers: &[&str], rows: Vec<Vec<String>>) -> String {
    if rows.is_empty() {
        return "No results found.".to_string();
    }
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(headers.to_vec());
    for row in rows {
        table.add_row(row);
    }
    table.to_string()
}

pub fn render_markdown(headers: &[&str], rows: Vec<Vec<String>>) -> String {
    if rows.is_empty() {
        return "No results found.".to_string();
    }
    let escape = |cell: &str| cell.replace('|', "\\|").replace('\n', " ");
    let mut out = Vec::with_capacity(rows.len() + 2);
    out.push(format!("| {} |", headers.join(" | ")));
    out.push(format!("|{}", " --- |".repeat(headers.len())));
    for row in rows {
        let cells: Vec<String> = row.iter().map(|c| escape(c)).collect();
        out.push(format!("| {} |", cells.join(" | ")));
    }
    out.join("\n")
}

pub fn print_rows(format: OutputFormat, headers: &[&str], rows: Vec<Vec<String>>) {
    match format {
        OutputFormat::Markdown => println!("{}", render_markdown(headers, rows)),
        _ => println!("{}", render_table(headers, rows)),
    }
}

/// Key/value listing of a single object.
pub fn print_kv(format: OutputFormat, rows: Vec<Vec<String>>) {
    print_rows(format, &["Field", "Value"], rows);
}
