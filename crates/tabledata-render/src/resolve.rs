//! Width resolution for table columns.
//!
//! Turns column [`Width`] specs plus the available space into concrete
//! display widths.

use crate::types::{TableSpec, Width};
use crate::util::display_width;

/// Resolved widths for all columns in a table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedWidths {
    pub widths: Vec<usize>,
}

impl ResolvedWidths {
    pub fn get(&self, index: usize) -> Option<usize> {
        self.widths.get(index).copied()
    }

    /// Total width of all columns, without separators.
    pub fn total(&self) -> usize {
        self.widths.iter().sum()
    }

    pub fn len(&self) -> usize {
        self.widths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }
}

impl TableSpec {
    /// Resolve column widths by measuring the header and row cells.
    ///
    /// Bounded columns take the widest cell clamped to their bounds. Fill and
    /// Fraction columns share whatever remains of `total_width` after fixed,
    /// bounded and separator space. With no flexible column the remainder is
    /// left unused, so narrow tables stay narrow.
    ///
    /// ```rust
    /// use tabledata_render::{Column, TableSpec, Width};
    ///
    /// let spec = TableSpec::builder()
    ///     .column(Column::new(Width::bounded(3, 10)))
    ///     .column(Column::new(Width::Fill))
    ///     .build();
    ///
    /// let rows = vec![vec!["Ana", "Rua A"], vec!["Bruno", "Rua B"]];
    /// let widths = spec.resolve_widths_from_data(30, &rows);
    /// assert_eq!(widths.widths, vec![5, 23]);
    /// ```
    pub fn resolve_widths_from_data<S: AsRef<str>>(
        &self,
        total_width: usize,
        rows: &[Vec<S>],
    ) -> ResolvedWidths {
        let mut content_widths: Vec<usize> = self
            .columns
            .iter()
            .map(|c| c.header.as_deref().map(display_width).unwrap_or(0))
            .collect();

        for row in rows {
            for (width, cell) in content_widths.iter_mut().zip(row.iter()) {
                *width = (*width).max(display_width(cell.as_ref()));
            }
        }

        self.resolve_widths_impl(total_width, &content_widths)
    }

    fn resolve_widths_impl(&self, total_width: usize, content_widths: &[usize]) -> ResolvedWidths {
        if self.columns.is_empty() {
            return ResolvedWidths { widths: vec![] };
        }

        let available = total_width.saturating_sub(self.decorations.overhead(self.columns.len()));

        let mut widths: Vec<usize> = Vec::with_capacity(self.columns.len());
        // (index, weight) for Fill/Fraction
        let mut flex: Vec<(usize, usize)> = Vec::new();
        let mut used: usize = 0;

        for (i, col) in self.columns.iter().enumerate() {
            match col.width {
                Width::Fixed(w) => {
                    widths.push(w);
                    used += w;
                }
                Width::Bounded { min, max } => {
                    let content = content_widths.get(i).copied().unwrap_or(0);
                    let w = content
                        .max(min.unwrap_or(0))
                        .min(max.unwrap_or(usize::MAX));
                    widths.push(w);
                    used += w;
                }
                Width::Fill => {
                    widths.push(0);
                    flex.push((i, 1));
                }
                Width::Fraction(n) => {
                    widths.push(0);
                    flex.push((i, n));
                }
            }
        }

        let remaining = available.saturating_sub(used);
        let total_weight: usize = flex.iter().map(|(_, w)| w).sum();
        if total_weight > 0 {
            let mut left = remaining;
            for (pos, (idx, weight)) in flex.iter().enumerate() {
                // last flex column absorbs rounding
                let share = if pos == flex.len() - 1 {
                    left
                } else {
                    (remaining * weight) / total_weight
                };
                left = left.saturating_sub(share);
                widths[*idx] = share;
            }
        }

        ResolvedWidths { widths }
    }
}
