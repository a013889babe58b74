//! Render-ready snapshots of entity slices.
//!
//! The UI draws from these instead of the typed slices, so one table and
//! one detail renderer serve every entity kind.

use super::{App, Screen};
use crate::filter::ListQuery;
use crate::models::{Entity, EntityId, EntityKind};
use crate::store::state::with_kind;
use crate::store::{AppState, RequestStatus, Stored};

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub id: EntityId,
    pub cells: Vec<String>,
}

/// One list screen: the rows passing the query, in server order.
#[derive(Debug, Clone, PartialEq)]
pub struct ListView {
    pub kind: EntityKind,
    pub columns: &'static [&'static str],
    pub rows: Vec<Row>,
    /// Rows before client-side filtering.
    pub total: usize,
    pub status: RequestStatus,
}

impl ListView {
    pub fn build(state: &AppState, kind: EntityKind, query: &ListQuery) -> Self {
        with_kind!(kind, E => Self::from_slice::<E>(state, query))
    }

    fn from_slice<E: Stored>(state: &AppState, query: &ListQuery) -> Self {
        let slice = E::slice(state);
        let rows = query
            .apply(&slice.items)
            .into_iter()
            .map(|i| {
                let item = &slice.items[i];
                Row {
                    id: item.id().clone(),
                    cells: item.cells(),
                }
            })
            .collect();
        Self {
            kind: E::KIND,
            columns: E::columns(),
            rows,
            total: slice.items.len(),
            status: slice.status.clone(),
        }
    }

    /// Name the record at `index` by its first non-empty cell outside the
    /// ID column.
    pub fn label(&self, index: usize) -> Option<String> {
        self.rows.get(index).map(|row| {
            row.cells
                .iter()
                .zip(self.columns.iter())
                .find(|(cell, column)| **column != "ID" && !cell.is_empty())
                .map(|(cell, _)| cell.clone())
                .unwrap_or_else(|| row.id.to_string())
        })
    }
}

/// One record's labelled fields.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub kind: EntityKind,
    pub id: EntityId,
    /// `None` until the record is known, either fetched or from the list.
    pub fields: Option<Vec<(&'static str, String)>>,
    pub status: RequestStatus,
}

impl DetailView {
    pub fn build(state: &AppState, kind: EntityKind, id: &EntityId) -> Self {
        with_kind!(kind, E => Self::from_slice::<E>(state, id))
    }

    fn from_slice<E: Stored>(state: &AppState, id: &EntityId) -> Self {
        let slice = E::slice(state);
        let record = slice
            .selected
            .as_ref()
            .filter(|s| s.id() == id)
            .or_else(|| slice.find(id));
        Self {
            kind: E::KIND,
            id: id.clone(),
            fields: record.map(Entity::fields),
            status: slice.status.clone(),
        }
    }
}

impl App {
    pub fn list_view(&self, kind: EntityKind) -> ListView {
        ListView::build(self.store.state(), kind, &self.query(kind))
    }

    /// Detail of the record on screen, if the detail screen is showing.
    pub fn detail_view(&self) -> Option<DetailView> {
        match &self.screen {
            Screen::Detail(kind, id) => Some(DetailView::build(self.store.state(), *kind, id)),
            _ => None,
        }
    }
}
