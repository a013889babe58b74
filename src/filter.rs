//! Client-side list filtering.

use crate::api::ExportQuery;
use crate::models::Entity;

/// Search term plus an optional status/type/role code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub term: String,
    pub filter: Option<String>,
}

impl ListQuery {
    pub fn is_empty(&self) -> bool {
        self.term.trim().is_empty() && self.filter.is_none()
    }

    /// Case-insensitive substring match over the entity's search text, and
    /// an exact match on its filter code when a filter is set.
    pub fn matches<E: Entity>(&self, entity: &E) -> bool {
        if let Some(code) = &self.filter {
            if entity.filter_code() != code {
                return false;
            }
        }
        let term = self.term.trim().to_lowercase();
        term.is_empty()
            || entity
                .search_text()
                .iter()
                .any(|text| text.to_lowercase().contains(&term))
    }

    /// Indices into `items` that pass the query, in original order.
    pub fn apply<E: Entity>(&self, items: &[E]) -> Vec<usize> {
        items
            .iter()
            .enumerate()
            .filter(|(_, item)| self.matches(*item))
            .map(|(i, _)| i)
            .collect()
    }

    /// Step the filter through `options`, with `None` between the last and
    /// first option.
    pub fn cycle_filter(&mut self, options: &[(&'static str, &'static str)]) {
        let next = match &self.filter {
            None => options.first(),
            Some(current) => options
                .iter()
                .position(|(code, _)| code == current)
                .and_then(|i| options.get(i + 1)),
        };
        self.filter = next.map(|(code, _)| code.to_string());
    }

    pub fn export_query(&self) -> ExportQuery {
        let term = self.term.trim();
        ExportQuery {
            term: (!term.is_empty()).then(|| term.to_string()),
            status: self.filter.clone(),
        }
    }
}
