//! Item Table
//!
//! Keeps the last successfully fetched list and projects it into rows.

use std::collections::HashMap;

use crate::domain::{Entity, Item, ItemId};

/// Columns without priority: id, nombre, descripcion, actions
const BASE_COLUMNS: usize = 4;

/// Last fetched items in server order, indexed by id
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemTable {
    items: Vec<Item>,
    index: HashMap<ItemId, usize>,
}

impl ItemTable {
    pub fn replace(&mut self, items: Vec<Item>) {
        self.index = items
            .iter()
            .enumerate()
            .map(|(pos, item)| (item.id(), pos))
            .collect();
        self.items = items;
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.index.get(&id).map(|&pos| &self.items[pos])
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn rows(&self) -> Vec<TableRow> {
        self.items.iter().map(TableRow::from).collect()
    }

    /// View for a successful fetch of this table
    pub fn view(&self) -> TableView {
        if self.is_empty() {
            TableView::Empty
        } else {
            TableView::Rows(self.rows())
        }
    }
}

/// One rendered `<tr>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub id: ItemId,
    pub nombre: String,
    pub descripcion: String,
    pub id_prioridad: Option<i64>,
    pub tipo_prioridad: Option<String>,
}

impl From<&Item> for TableRow {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id,
            nombre: item.nombre.clone(),
            descripcion: item.descripcion.clone(),
            id_prioridad: item.id_prioridad,
            tipo_prioridad: item.tipo_prioridad.clone(),
        }
    }
}

/// What the table body currently shows
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TableView {
    /// Before the first fetch completes
    #[default]
    Loading,
    Rows(Vec<TableRow>),
    /// Single "no items" placeholder row
    Empty,
    /// Single error row
    Failed,
}

impl TableView {
    /// Number of `<tr>` elements rendered for this view
    pub fn row_count(&self) -> usize {
        match self {
            TableView::Loading => 0,
            TableView::Rows(rows) => rows.len(),
            TableView::Empty | TableView::Failed => 1,
        }
    }
}

/// `colspan` for placeholder rows
pub fn column_count(priority_enabled: bool) -> usize {
    if priority_enabled {
        BASE_COLUMNS + 1
    } else {
        BASE_COLUMNS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_follow_server_order() {
        let mut table = ItemTable::default();
        table.replace(vec![
            Item::new(9, "Z", "last id first"),
            Item::new(2, "B", "b"),
            Item::new(5, "M", "m"),
        ]);

        let ids: Vec<ItemId> = table.rows().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![9, 2, 5]);
        assert_eq!(table.view().row_count(), 3);
    }

    #[test]
    fn test_empty_list_renders_one_placeholder() {
        let mut table = ItemTable::default();
        table.replace(Vec::new());
        assert_eq!(table.view(), TableView::Empty);
        assert_eq!(table.view().row_count(), 1);
    }

    #[test]
    fn test_replace_rebuilds_index() {
        let mut table = ItemTable::default();
        table.replace(vec![Item::new(1, "A", "a"), Item::new(2, "B", "b")]);
        assert_eq!(table.get(2).map(|i| i.nombre.as_str()), Some("B"));

        table.replace(vec![Item::new(3, "C", "c")]);
        assert!(table.get(1).is_none());
        assert!(table.get(2).is_none());
        assert_eq!(table.get(3).map(|i| i.nombre.as_str()), Some("C"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_row_copies_priority_label() {
        let row = TableRow::from(&Item::new(1, "A", "d").with_priority(1, "Alta"));
        assert_eq!(row.id_prioridad, Some(1));
        assert_eq!(row.tipo_prioridad.as_deref(), Some("Alta"));
    }

    #[test]
    fn test_column_count() {
        assert_eq!(column_count(false), 4);
        assert_eq!(column_count(true), 5);
    }
}
