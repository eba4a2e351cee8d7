//! Core types for table layout configuration.
//!
//! Column widths, alignment and column decorations.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RenderError;

/// Text alignment within a column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Left-align text (pad on the right).
    #[default]
    Left,
    /// Right-align text (pad on the left).
    Right,
    /// Center text (pad on both sides).
    Center,
}

/// Specifies how a column determines its width.
///
/// Serialized forms: `8` (fixed), `{min: 4, max: 20}` (bounded), `"fill"`, and
/// `"2fr"` (fraction).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WidthRaw", into = "WidthRaw")]
pub enum Width {
    /// Fixed width in display columns.
    Fixed(usize),
    /// Width calculated from content, constrained by optional min/max bounds.
    Bounded {
        min: Option<usize>,
        max: Option<usize>,
    },
    /// Expand to fill remaining space. Multiple Fill columns share it equally.
    Fill,
    /// Proportional: takes n parts of the remaining space.
    Fraction(usize),
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum WidthRaw {
    Fixed(usize),
    Bounded {
        #[serde(default)]
        min: Option<usize>,
        #[serde(default)]
        max: Option<usize>,
    },
    StringVariant(String),
}

impl From<Width> for WidthRaw {
    fn from(width: Width) -> Self {
        match width {
            Width::Fixed(w) => WidthRaw::Fixed(w),
            Width::Bounded { min, max } => WidthRaw::Bounded { min, max },
            Width::Fill => WidthRaw::StringVariant("fill".to_string()),
            Width::Fraction(n) => WidthRaw::StringVariant(format!("{}fr", n)),
        }
    }
}

impl TryFrom<WidthRaw> for Width {
    type Error = RenderError;

    fn try_from(raw: WidthRaw) -> Result<Self, Self::Error> {
        match raw {
            WidthRaw::Fixed(w) => Ok(Width::Fixed(w)),
            WidthRaw::Bounded { min, max } => Ok(Width::Bounded { min, max }),
            WidthRaw::StringVariant(s) => s.parse(),
        }
    }
}

impl FromStr for Width {
    type Err = RenderError;

    /// Parses `"12"`, `"fill"` or `"<n>fr"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("fill") {
            return Ok(Width::Fill);
        }
        if let Some(parts) = s.strip_suffix("fr") {
            return parts
                .parse::<usize>()
                .map(Width::Fraction)
                .map_err(|_| RenderError::InvalidWidth(s.to_string()));
        }
        s.parse::<usize>()
            .map(Width::Fixed)
            .map_err(|_| RenderError::InvalidWidth(s.to_string()))
    }
}

impl Default for Width {
    fn default() -> Self {
        Width::Bounded {
            min: None,
            max: None,
        }
    }
}

impl Width {
    pub fn bounded(min: usize, max: usize) -> Self {
        Width::Bounded {
            min: Some(min),
            max: Some(max),
        }
    }

    pub fn min(min: usize) -> Self {
        Width::Bounded {
            min: Some(min),
            max: None,
        }
    }

    pub fn max(max: usize) -> Self {
        Width::Bounded {
            min: None,
            max: Some(max),
        }
    }
}

/// Layout of a single column.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// How the column determines its width.
    #[serde(default)]
    pub width: Width,
    /// Text alignment within the column.
    #[serde(default)]
    pub align: Align,
    /// Header title.
    #[serde(default)]
    pub header: Option<String>,
}

impl Column {
    pub fn new(width: Width) -> Self {
        Column {
            width,
            ..Default::default()
        }
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Shorthand for `.align(Align::Right)`.
    pub fn right(self) -> Self {
        self.align(Align::Right)
    }

    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }
}

/// Column separator and row framing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decorations {
    /// Separator between columns (e.g., `"  "` or `" │ "`).
    pub column_sep: String,
}

impl Default for Decorations {
    fn default() -> Self {
        Decorations {
            column_sep: "  ".to_string(),
        }
    }
}

impl Decorations {
    /// Width taken by separators between `num_columns` columns.
    pub fn overhead(&self, num_columns: usize) -> usize {
        crate::util::display_width(&self.column_sep) * num_columns.saturating_sub(1)
    }
}

/// The columns of a table plus their decorations.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableSpec {
    pub columns: Vec<Column>,
    pub decorations: Decorations,
}

impl TableSpec {
    pub fn builder() -> TableSpecBuilder {
        TableSpecBuilder::default()
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Header titles in column order; columns without one get `""`.
    pub fn headers(&self) -> Vec<String> {
        self.columns
            .iter()
            .map(|c| c.header.clone().unwrap_or_default())
            .collect()
    }
}

/// Builder for [`TableSpec`].
#[derive(Clone, Debug, Default)]
pub struct TableSpecBuilder {
    columns: Vec<Column>,
    decorations: Decorations,
}

impl TableSpecBuilder {
    pub fn column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    pub fn columns(mut self, columns: impl IntoIterator<Item = Column>) -> Self {
        self.columns.extend(columns);
        self
    }

    pub fn separator(mut self, sep: impl Into<String>) -> Self {
        self.decorations.column_sep = sep.into();
        self
    }

    pub fn build(self) -> TableSpec {
        TableSpec {
            columns: self.columns,
            decorations: self.decorations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_from_str() {
        assert_eq!("fill".parse::<Width>().unwrap(), Width::Fill);
        assert_eq!("3fr".parse::<Width>().unwrap(), Width::Fraction(3));
        assert_eq!(" 14 ".parse::<Width>().unwrap(), Width::Fixed(14));
        assert_eq!(
            "wide".parse::<Width>().unwrap_err(),
            RenderError::InvalidWidth("wide".to_string())
        );
        assert!("xfr".parse::<Width>().is_err());
    }

    #[test]
    fn width_serde_forms() {
        let widths: Vec<Width> =
            serde_json::from_str(r#"[8, {"min": 4, "max": 20}, {"max": 30}, "fill", "2fr"]"#)
                .unwrap();
        assert_eq!(
            widths,
            vec![
                Width::Fixed(8),
                Width::bounded(4, 20),
                Width::max(30),
                Width::Fill,
                Width::Fraction(2),
            ]
        );
        assert_eq!(serde_json::to_string(&Width::Fraction(2)).unwrap(), "\"2fr\"");
        assert!(serde_json::from_str::<Width>("\"huge\"").is_err());
    }

    #[test]
    fn width_from_yaml() {
        let width: Width = serde_yaml::from_str("fill").unwrap();
        assert_eq!(width, Width::Fill);
        let width: Width = serde_yaml::from_str("{ min: 5 }").unwrap();
        assert_eq!(width, Width::min(5));
    }

    #[test]
    fn align_serde() {
        let align: Align = serde_json::from_str("\"right\"").unwrap();
        assert_eq!(align, Align::Right);
    }

    #[test]
    fn column_builder() {
        let col = Column::new(Width::Fixed(14)).right().header("Ações");
        assert_eq!(col.align, Align::Right);
        assert_eq!(col.header.as_deref(), Some("Ações"));
    }

    #[test]
    fn spec_headers_and_overhead() {
        let spec = TableSpec::builder()
            .column(Column::new(Width::Fill).header("Nome"))
            .column(Column::new(Width::Fixed(5)))
            .separator(" | ")
            .build();
        assert_eq!(spec.headers(), vec!["Nome".to_string(), String::new()]);
        assert_eq!(spec.decorations.overhead(spec.num_columns()), 3);
    }
}
