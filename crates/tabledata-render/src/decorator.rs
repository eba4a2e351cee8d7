//! Bordered table rendering.
//!
//! [`Table`] lays out a header, a separator, data rows and full-width
//! spanning rows (used for empty states) with an optional [`BorderStyle`].
//!
//! ```rust
//! use tabledata_render::{BorderStyle, Column, Table, TableSpec, Width};
//!
//! let spec = TableSpec::builder()
//!     .column(Column::new(Width::min(4)).header("Nome"))
//!     .column(Column::new(Width::Fixed(6)).right().header("Total"))
//!     .build();
//!
//! let rows = vec![vec!["Ana", "10"], vec!["Bruno", "250"]];
//! let table = Table::from_data(spec, 40, BorderStyle::Ascii, &rows);
//! assert_eq!(
//!     table.render(&rows),
//!     "+-------+--------+\n\
//!      | Nome  |  Total |\n\
//!      +-------+--------+\n\
//!      | Ana   |     10 |\n\
//!      | Bruno |    250 |\n\
//!      +-------+--------+"
//! );
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RenderError;
use crate::resolve::ResolvedWidths;
use crate::types::{Align, TableSpec};
use crate::util::{display_width, fit_cell};

/// Border style for table decoration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    /// No borders; columns separated by spaces.
    #[default]
    None,
    /// ASCII borders: +, -, |
    Ascii,
    /// Light box-drawing characters: ┌ ─ ┐ │ └ ┘ ├ ┼ ┤ ┬ ┴
    Light,
    /// Heavy box-drawing characters: ┏ ━ ┓ ┃ ┗ ┛ ┣ ╋ ┫ ┳ ┻
    Heavy,
    /// Double-line box-drawing characters: ╔ ═ ╗ ║ ╚ ╝ ╠ ╬ ╣ ╦ ╩
    Double,
    /// Rounded corners with light lines: ╭ ─ ╮ │ ╰ ╯
    Rounded,
}

impl BorderStyle {
    pub const ALL: [BorderStyle; 6] = [
        BorderStyle::None,
        BorderStyle::Ascii,
        BorderStyle::Light,
        BorderStyle::Heavy,
        BorderStyle::Double,
        BorderStyle::Rounded,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BorderStyle::None => "none",
            BorderStyle::Ascii => "ascii",
            BorderStyle::Light => "light",
            BorderStyle::Heavy => "heavy",
            BorderStyle::Double => "double",
            BorderStyle::Rounded => "rounded",
        }
    }

    /// Returns `true` if rows are framed by vertical border characters.
    pub fn is_framed(self) -> bool {
        self != BorderStyle::None
    }

    fn chars(self) -> Option<BorderChars> {
        let chars = match self {
            BorderStyle::None => return None,
            BorderStyle::Ascii => BorderChars {
                horizontal: '-',
                vertical: '|',
                top: ['+', '+', '+'],
                middle: ['+', '+', '+'],
                bottom: ['+', '+', '+'],
            },
            BorderStyle::Light => BorderChars {
                horizontal: '─',
                vertical: '│',
                top: ['┌', '┬', '┐'],
                middle: ['├', '┼', '┤'],
                bottom: ['└', '┴', '┘'],
            },
            BorderStyle::Heavy => BorderChars {
                horizontal: '━',
                vertical: '┃',
                top: ['┏', '┳', '┓'],
                middle: ['┣', '╋', '┫'],
                bottom: ['┗', '┻', '┛'],
            },
            BorderStyle::Double => BorderChars {
                horizontal: '═',
                vertical: '║',
                top: ['╔', '╦', '╗'],
                middle: ['╠', '╬', '╣'],
                bottom: ['╚', '╩', '╝'],
            },
            BorderStyle::Rounded => BorderChars {
                horizontal: '─',
                vertical: '│',
                top: ['╭', '┬', '╮'],
                middle: ['├', '┼', '┤'],
                bottom: ['╰', '┴', '╯'],
            },
        };
        Some(chars)
    }
}

impl std::fmt::Display for BorderStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BorderStyle {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        BorderStyle::ALL
            .into_iter()
            .find(|b| b.name() == wanted)
            .ok_or_else(|| RenderError::InvalidBorder(s.to_string()))
    }
}

/// Box-drawing characters; each line array is `[left, joint, right]`.
#[derive(Clone, Copy, Debug)]
struct BorderChars {
    horizontal: char,
    vertical: char,
    top: [char; 3],
    middle: [char; 3],
    bottom: [char; 3],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LineType {
    Top,
    Middle,
    Bottom,
}

/// A table with resolved column widths, ready to render rows.
#[derive(Clone, Debug)]
pub struct Table {
    spec: TableSpec,
    widths: Vec<usize>,
    border: BorderStyle,
}

impl Table {
    /// Creates a table from already-resolved widths.
    pub fn new(spec: TableSpec, widths: ResolvedWidths, border: BorderStyle) -> Self {
        let mut spec = spec;
        if let Some(chars) = border.chars() {
            spec.decorations.column_sep = format!(" {} ", chars.vertical);
        }
        Table {
            spec,
            widths: widths.widths,
            border,
        }
    }

    /// Resolves widths from the header and `rows`, then creates the table.
    ///
    /// `total_width` includes borders and separators.
    pub fn from_data<S: AsRef<str>>(
        spec: TableSpec,
        total_width: usize,
        border: BorderStyle,
        rows: &[Vec<S>],
    ) -> Self {
        let mut layout = spec;
        let mut available = total_width;
        if let Some(chars) = border.chars() {
            layout.decorations.column_sep = format!(" {} ", chars.vertical);
            // "│ " and " │" framing
            available = available.saturating_sub(4);
        }
        let widths = layout.resolve_widths_from_data(available, rows);
        Table::new(layout, widths, border)
    }

    pub fn widths(&self) -> &[usize] {
        &self.widths
    }

    pub fn num_columns(&self) -> usize {
        self.widths.len()
    }

    pub fn border_style(&self) -> BorderStyle {
        self.border
    }

    /// Width of the row content between the frame characters.
    pub fn inner_width(&self) -> usize {
        self.widths.iter().sum::<usize>() + self.spec.decorations.overhead(self.widths.len())
    }

    /// Formats a data row. Missing trailing cells render blank.
    pub fn row<S: AsRef<str>>(&self, values: &[S]) -> String {
        let cells: Vec<String> = self
            .widths
            .iter()
            .enumerate()
            .map(|(i, &width)| {
                let value = values.get(i).map(|v| v.as_ref()).unwrap_or("");
                let align = self
                    .spec
                    .columns
                    .get(i)
                    .map(|c| c.align)
                    .unwrap_or_default();
                fit_cell(value, width, align)
            })
            .collect();
        self.frame(&cells.join(&self.spec.decorations.column_sep))
    }

    /// Formats the header row from the column headers.
    pub fn header_row(&self) -> String {
        self.row(&self.spec.headers())
    }

    /// Formats a single cell spanning every column, left-aligned.
    pub fn spanning_row(&self, text: &str) -> String {
        self.frame(&fit_cell(text, self.inner_width(), Align::Left))
    }

    /// Line between header and body. Dashes when unframed.
    pub fn separator_row(&self) -> String {
        match self.border.chars() {
            Some(_) => self.horizontal_line(LineType::Middle),
            None => "-".repeat(self.inner_width()),
        }
    }

    pub fn top_border(&self) -> String {
        self.horizontal_line(LineType::Top)
    }

    pub fn bottom_border(&self) -> String {
        self.horizontal_line(LineType::Bottom)
    }

    /// Renders borders, header, separator and `rows`.
    pub fn render<S: AsRef<str>>(&self, rows: &[Vec<S>]) -> String {
        let body: Vec<String> = rows.iter().map(|r| self.row(r)).collect();
        self.assemble(body)
    }

    /// Renders borders, header, separator and one spanning row with `text`.
    pub fn render_empty(&self, text: &str) -> String {
        self.assemble(vec![self.spanning_row(text)])
    }

    fn assemble(&self, body: Vec<String>) -> String {
        let mut output = Vec::with_capacity(body.len() + 4);
        let top = self.top_border();
        if !top.is_empty() {
            output.push(top);
        }
        output.push(self.header_row());
        output.push(self.separator_row());
        output.extend(body);
        let bottom = self.bottom_border();
        if !bottom.is_empty() {
            output.push(bottom);
        }
        output.join("\n")
    }

    fn frame(&self, content: &str) -> String {
        match self.border.chars() {
            Some(chars) => format!("{} {} {}", chars.vertical, content, chars.vertical),
            None => content.trim_end().to_string(),
        }
    }

    fn horizontal_line(&self, line_type: LineType) -> String {
        let chars = match self.border.chars() {
            Some(chars) => chars,
            None => return String::new(),
        };
        let [left, joint, right] = match line_type {
            LineType::Top => chars.top,
            LineType::Middle => chars.middle,
            LineType::Bottom => chars.bottom,
        };

        let mut line = String::new();
        line.push(left);
        for (i, &width) in self.widths.iter().enumerate() {
            if i > 0 {
                line.push(joint);
            }
            line.extend(std::iter::repeat_n(chars.horizontal, width + 2));
        }
        line.push(right);
        line
    }
}

/// Display width of the widest line in a rendered block.
pub fn block_width(rendered: &str) -> usize {
    rendered.lines().map(display_width).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Column, Width};

    fn spec() -> TableSpec {
        TableSpec::builder()
            .column(Column::new(Width::Fixed(6)).header("Nome"))
            .column(Column::new(Width::Fixed(4)).right().header("Qtd"))
            .build()
    }

    fn rows() -> Vec<Vec<&'static str>> {
        vec![vec!["Caneta", "3"], vec!["Lápis", "12"]]
    }

    #[test]
    fn unframed_rows() {
        let table = Table::from_data(spec(), 80, BorderStyle::None, &rows());
        assert_eq!(table.header_row(), "Nome     Qtd");
        assert_eq!(table.separator_row(), "------------");
        assert_eq!(table.row(&["Caneta", "3"]), "Caneta     3");
    }

    #[test]
    fn every_framed_style_has_consistent_width() {
        for border in BorderStyle::ALL.into_iter().filter(|b| b.is_framed()) {
            let table = Table::from_data(spec(), 80, border, &rows());
            let rendered = table.render(&rows());
            let widths: Vec<usize> = rendered.lines().map(display_width).collect();
            assert!(
                widths.iter().all(|w| *w == widths[0]),
                "{border}: {widths:?}"
            );
            assert_eq!(block_width(&rendered), table.inner_width() + 4);
        }
    }

    #[test]
    fn light_border_joints() {
        let table = Table::from_data(spec(), 80, BorderStyle::Light, &rows());
        assert_eq!(table.top_border(), "┌────────┬──────┐");
        assert_eq!(table.separator_row(), "├────────┼──────┤");
        assert_eq!(table.bottom_border(), "└────────┴──────┘");
        assert_eq!(table.row(&["Lápis", "12"]), "│ Lápis  │   12 │");
    }

    #[test]
    fn spanning_row_covers_all_columns() {
        let table = Table::from_data(spec(), 80, BorderStyle::Ascii, &rows());
        let span = table.spanning_row("Sem dados");
        assert_eq!(span, "| Sem dados     |");
        assert_eq!(display_width(&span), display_width(&table.top_border()));
    }

    #[test]
    fn spanning_row_truncates_long_text() {
        let table = Table::from_data(spec(), 80, BorderStyle::None, &rows());
        let span = table.spanning_row("Nenhum registro encontrado para o filtro");
        assert_eq!(display_width(&span), table.inner_width());
        assert!(span.ends_with('…'));
    }

    #[test]
    fn render_empty_layout() {
        let table = Table::from_data::<&str>(spec(), 80, BorderStyle::None, &[]);
        let out = table.render_empty("Vazio");
        assert_eq!(out, "Nome     Qtd\n------------\nVazio");
    }

    #[test]
    fn missing_cells_render_blank() {
        let table = Table::from_data(spec(), 80, BorderStyle::Ascii, &rows());
        assert_eq!(table.row(&["Clips"]), "| Clips  |      |");
    }

    #[test]
    fn border_style_from_str() {
        assert_eq!("Rounded".parse::<BorderStyle>().unwrap(), BorderStyle::Rounded);
        assert_eq!(BorderStyle::default(), BorderStyle::None);
        assert!("fancy".parse::<BorderStyle>().is_err());
    }
}
