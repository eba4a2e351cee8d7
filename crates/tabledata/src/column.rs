//! Column descriptors.

use std::fmt;
use std::sync::Arc;

use tabledata_render::{Align, Width};
use tabledata_seeker::Value;

/// Custom cell renderer: receives the field value and the whole row.
pub type CellRenderer<R> = Arc<dyn Fn(&Value<'_>, &R) -> String + Send + Sync>;

/// Upper bound for content-sized columns without an explicit width.
pub const DEFAULT_MAX_COLUMN_WIDTH: usize = 40;

/// Describes one table column: which field it reads, its header label and
/// how its cells are produced.
///
/// ```
/// use tabledata::{Align, ColumnSpec};
///
/// struct Produto { preco: f64 }
///
/// let preco = ColumnSpec::<Produto>::new("preco", "Preço")
///     .align(Align::Right)
///     .render(|_, p| format!("R$ {:.2}", p.preco));
/// assert_eq!(preco.label, "Preço");
/// ```
pub struct ColumnSpec<R> {
    /// Field key read from each row.
    pub name: String,
    /// Header text.
    pub label: String,
    pub renderer: Option<CellRenderer<R>>,
    pub width: Option<Width>,
    pub align: Option<Align>,
}

impl<R> ColumnSpec<R> {
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        ColumnSpec {
            name: name.into(),
            label: label.into(),
            renderer: None,
            width: None,
            align: None,
        }
    }

    /// Sets a custom cell renderer. Its output is used verbatim.
    pub fn render<F>(mut self, f: F) -> Self
    where
        F: Fn(&Value<'_>, &R) -> String + Send + Sync + 'static,
    {
        self.renderer = Some(Arc::new(f));
        self
    }

    pub fn width(mut self, width: Width) -> Self {
        self.width = Some(width);
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = Some(align);
        self
    }

    /// Produces the cell text for `row`.
    ///
    /// Without a renderer the field value's string form is used, and a
    /// missing field is the empty string.
    pub fn cell<F>(&self, row: &R, accessor: F) -> String
    where
        for<'a> F: Fn(&'a R, &str) -> Value<'a>,
    {
        let value = accessor(row, &self.name);
        match &self.renderer {
            Some(render) => render(&value, row),
            None => value.to_display_string(),
        }
    }

    /// Width used when none is configured: content-sized, at least as wide as
    /// the label.
    pub(crate) fn default_width(&self) -> Width {
        let label = tabledata_render::display_width(&self.label);
        Width::bounded(label, DEFAULT_MAX_COLUMN_WIDTH.max(label))
    }
}

impl<R> Clone for ColumnSpec<R> {
    fn clone(&self) -> Self {
        ColumnSpec {
            name: self.name.clone(),
            label: self.label.clone(),
            renderer: self.renderer.clone(),
            width: self.width.clone(),
            align: self.align,
        }
    }
}

impl<R> fmt::Debug for ColumnSpec<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnSpec")
            .field("name", &self.name)
            .field("label", &self.label)
            .field("renderer", &self.renderer.as_ref().map(|_| "<fn>"))
            .field("width", &self.width)
            .field("align", &self.align)
            .finish()
    }
}
