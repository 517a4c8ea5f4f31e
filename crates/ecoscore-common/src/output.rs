//! Terminal table rendering and structured output.

use crate::cli::OutputFormat;
use crate::error::Result;
use serde::Serialize;
use std::fmt;

/// A column-aligned text table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Column headers
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Data rows
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    fn column_widths(&self) -> Vec<usize> {
        let columns = self.rows.iter().map(Vec::len).chain([self.headers.len()]).max().unwrap_or(0);
        (0..columns)
            .map(|col| {
                self.rows
                    .iter()
                    .chain(std::iter::once(&self.headers))
                    .filter_map(|row| row.get(col))
                    .map(|cell| cell.chars().count())
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.column_widths();
        let write_row = |f: &mut fmt::Formatter<'_>, row: &[String]| -> fmt::Result {
            let cells: Vec<String> = widths
                .iter()
                .enumerate()
                .map(|(i, w)| format!("{:<w$}", row.get(i).map_or("", String::as_str), w = *w))
                .collect();
            writeln!(f, "│ {} │", cells.join(" │ "))
        };
        let rule = |left: &str, mid: &str, right: &str| {
            let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
            format!("{left}{}{right}", segments.join(mid))
        };

        writeln!(f, "{}", rule("┌", "┬", "┐"))?;
        if !self.headers.is_empty() {
            write_row(f, &self.headers)?;
            writeln!(f, "{}", rule("├", "┼", "┤"))?;
        }
        for row in &self.rows {
            write_row(f, row)?;
        }
        write!(f, "{}", rule("└", "┴", "┘"))
    }
}

/// Builder for [`Table`].
#[derive(Debug, Default)]
pub struct TableBuilder {
    table: Table,
}

impl TableBuilder {
    /// Start an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Set column headers
    pub fn headers<S: Into<String>>(mut self, headers: Vec<S>) -> Self {
        self.table.headers = headers.into_iter().map(Into::into).collect();
        self
    }

    /// Append a row
    pub fn row<S: Into<String>>(mut self, row: Vec<S>) -> Self {
        self.table.rows.push(row.into_iter().map(Into::into).collect());
        self
    }

    /// Finish the table
    pub fn build(self) -> Table {
        self.table
    }
}

/// Render a result in the requested format.
///
/// `text` is only invoked for [`OutputFormat::Text`].
pub fn render<T, F>(value: &T, format: OutputFormat, text: F) -> Result<String>
where
    T: Serialize,
    F: FnOnce(&T) -> String,
{
    match format {
        OutputFormat::Text => Ok(text(value)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Row {
        model: &'static str,
        co2e_grams: f64,
    }

    #[test]
    fn test_table_aligns_columns() {
        let table = TableBuilder::new()
            .headers(vec!["Model", "CO2e (g)"])
            .row(vec!["claude3-haiku", "12.3"])
            .row(vec!["gpt4", "4200.0"])
            .build();
        let rendered = table.to_string();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 6);
        let widths: Vec<usize> = lines.iter().map(|l| l.chars().count()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_table_without_headers() {
        let table = TableBuilder::new().row(vec!["a", "b"]).build();
        assert_eq!(table.to_string().lines().count(), 3);
    }

    #[test]
    fn test_render_text_uses_closure() {
        let row = Row { model: "llama7b", co2e_grams: 1.5 };
        let out =
            render(&row, OutputFormat::Text, |r| format!("{} {}", r.model, r.co2e_grams)).unwrap();
        assert_eq!(out, "llama7b 1.5");
    }

    #[test]
    fn test_render_json_and_yaml() {
        let row = Row { model: "llama7b", co2e_grams: 1.5 };
        let json = render(&row, OutputFormat::Json, |_| unreachable!()).unwrap();
        assert!(json.contains("\"model\": \"llama7b\""));
        let yaml = render(&row, OutputFormat::Yaml, |_| unreachable!()).unwrap();
        assert!(yaml.contains("model: llama7b"));
    }
}
