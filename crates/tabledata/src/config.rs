//! Table configuration files.
//!
//! A [`TableConfig`] describes columns, tabs, filters and ordering in YAML or
//! JSON so a table can be set up without code:
//!
//! ```yaml
//! empty_text: "Nenhum produto encontrado."
//! default_tab: ativos
//! columns:
//!   - { name: nome, label: Produto, width: fill }
//!   - { name: valorVenda, label: Venda, align: right }
//! tabs:
//!   - { tab_key: ativos, name: ativo, label: Ativos, condition: EQUAL, value: true }
//!   - { label: Todos }
//! filters:
//!   title: Filtros
//!   items:
//!     - { name: nome, label: Nome, condition: LIKE }
//! order_by:
//!   - { field: nome, dir: asc }
//! ```
//!
//! Custom cell renderers can't be expressed here; columns render the field's
//! string form.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tabledata_render::{Align, Width};
use tabledata_seeker::{Condition, Operand, OrderBy, Seekable};

use crate::column::ColumnSpec;
use crate::error::ConfigError;
use crate::filter::FilterSpec;
use crate::tab::{TabSet, TabSpec};
use crate::table::{Accessor, DataTable, DataTableBuilder};

/// One configured column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColumnConfig {
    pub name: String,
    /// Header text; the field name when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<Width>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<Align>,
}

impl ColumnConfig {
    pub fn to_spec<R>(&self) -> ColumnSpec<R> {
        let mut spec = ColumnSpec::new(
            self.name.clone(),
            self.label.clone().unwrap_or_else(|| self.name.clone()),
        );
        spec.width = self.width.clone();
        spec.align = self.align;
        spec
    }
}

/// One configured tab. `value` is any JSON scalar or array.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TabConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tab_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub label: String,
    pub condition: Condition,
    pub value: serde_json::Value,
}

impl TabConfig {
    pub fn to_spec(&self) -> Result<TabSpec, ConfigError> {
        let value = Operand::try_from(&self.value).map_err(|source| ConfigError::InvalidTabValue {
            tab: self.label.clone(),
            source,
        })?;
        Ok(TabSpec {
            tab_key: self.tab_key.clone(),
            name: self.name.clone(),
            label: self.label.clone(),
            condition: self.condition,
            value,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FiltersConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub items: Vec<FilterSpec>,
}

/// Declarative table setup loaded from YAML or JSON.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TableConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions_width: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_tab: Option<String>,
    pub columns: Vec<ColumnConfig>,
    pub tabs: Vec<TabConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<FiltersConfig>,
    pub order_by: Vec<OrderBy>,
}

impl TableConfig {
    pub fn from_yaml(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(source)?)
    }

    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Loads a `.yaml`, `.yml` or `.json` file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        let read = || {
            std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })
        };
        let config = match extension.as_str() {
            "yaml" | "yml" => Self::from_yaml(&read()?)?,
            "json" => Self::from_json(&read()?)?,
            _ => return Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        };
        tracing::debug!(
            path = %path.display(),
            columns = config.columns.len(),
            tabs = config.tabs.len(),
            "table config loaded"
        );
        Ok(config)
    }

    pub fn column_specs<R>(&self) -> Vec<ColumnSpec<R>> {
        self.columns.iter().map(ColumnConfig::to_spec::<R>).collect()
    }

    pub fn tab_specs(&self) -> Result<Vec<TabSpec>, ConfigError> {
        self.tabs.iter().map(TabConfig::to_spec).collect()
    }

    pub fn tab_set(&self) -> Result<TabSet, ConfigError> {
        Ok(TabSet::new(self.tab_specs()?))
    }

    pub fn filter_specs(&self) -> Vec<FilterSpec> {
        self.filters
            .as_ref()
            .map(|f| f.items.clone())
            .unwrap_or_default()
    }

    /// Applies every configured setting to `builder`.
    pub fn apply<R>(&self, builder: DataTableBuilder<R>) -> Result<DataTableBuilder<R>, ConfigError> {
        let mut builder = builder
            .columns(self.column_specs())
            .tabs(self.tab_specs()?)
            .filters(self.filter_specs());
        if let Some(title) = self.filters.as_ref().and_then(|f| f.title.clone()) {
            builder = builder.filters_title(title);
        }
        if let Some(text) = &self.empty_text {
            builder = builder.empty_text(text.clone());
        }
        if let Some(key) = &self.actions_key {
            builder = builder.actions_key(key.clone());
        }
        if let Some(width) = self.actions_width {
            builder = builder.actions_width(width);
        }
        if let Some(tab) = &self.default_tab {
            builder = builder.default_tab(tab.clone());
        }
        for order_by in &self.order_by {
            builder = builder.order_by(order_by.clone());
        }
        Ok(builder)
    }

    /// A builder for [`Seekable`] rows with this configuration applied.
    pub fn to_builder<R: Seekable>(&self) -> Result<DataTableBuilder<R>, ConfigError> {
        self.apply(DataTable::builder())
    }

    pub fn to_builder_with_accessor<R>(
        &self,
        accessor: Accessor<R>,
    ) -> Result<DataTableBuilder<R>, ConfigError> {
        self.apply(DataTable::builder_with_accessor(accessor))
    }
}
