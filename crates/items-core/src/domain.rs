//! Domain Layer
//!
//! The single record managed by the screen and the body sent when saving it.

use serde::{Deserialize, Serialize};

/// Server-assigned item identifier
pub type ItemId = i64;

/// Core trait for entities that carry a server identity
pub trait Entity: Sized + Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + std::hash::Hash;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Item as returned by `GET /items`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier, immutable once created
    pub id: ItemId,
    /// Display name
    pub nombre: String,
    /// Free-form description
    pub descripcion: String,
    /// Selected priority level (priority variant only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_prioridad: Option<i64>,
    /// Server label for `id_prioridad`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tipo_prioridad: Option<String>,
}

impl Item {
    pub fn new(id: ItemId, nombre: impl Into<String>, descripcion: impl Into<String>) -> Self {
        Self {
            id,
            nombre: nombre.into(),
            descripcion: descripcion.into(),
            id_prioridad: None,
            tipo_prioridad: None,
        }
    }

    /// Attach a priority and the label the server derived for it
    pub fn with_priority(mut self, id_prioridad: i64, tipo_prioridad: impl Into<String>) -> Self {
        self.id_prioridad = Some(id_prioridad);
        self.tipo_prioridad = Some(tipo_prioridad.into());
        self
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// JSON body for `POST /items` and `PUT /items/{id}`
///
/// Never carries the id; the path does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPayload {
    pub nombre: String,
    pub descripcion: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_prioridad: Option<i64>,
}
