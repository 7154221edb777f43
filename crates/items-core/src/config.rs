//! Controller Configuration
//!
//! Every field has a default so a partial JSON object (or none at all) is
//! enough to configure the screen.

use serde::{Deserialize, Serialize};

/// Placeholder substituted with the item id in `Labels::confirm_delete`
const ID_PLACEHOLDER: &str = "{id}";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Path of the items resource, relative to the page origin
    pub api_path: String,
    pub labels: Labels,
    /// `None` disables the priority field and column
    pub priority: Option<PriorityConfig>,
    /// `log` level filter name ("error", "warn", "info", "debug", "trace")
    pub log_level: String,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            api_path: "/items".to_string(),
            labels: Labels::default(),
            priority: None,
            log_level: "info".to_string(),
        }
    }
}

impl ControllerConfig {
    /// Configuration for the screen variant with a priority column
    pub fn with_priority() -> Self {
        Self {
            priority: Some(PriorityConfig::default()),
            ..Self::default()
        }
    }

    pub fn priority_enabled(&self) -> bool {
        self.priority.is_some()
    }

    pub fn log_level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

/// User-visible strings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub submit_create: String,
    pub submit_update: String,
    pub validation_failed: String,
    pub save_failed: String,
    pub load_failed: String,
    pub empty: String,
    /// `{id}` is replaced with the item id
    pub confirm_delete: String,
    pub edit_button: String,
    pub delete_button: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            submit_create: "Guardar Elemento".to_string(),
            submit_update: "Actualizar Elemento".to_string(),
            validation_failed: "Por favor, completa todos los campos.".to_string(),
            save_failed: "No se pudo guardar el elemento.".to_string(),
            load_failed: "Error al cargar datos. Revisa la consola.".to_string(),
            empty: "No hay elementos para mostrar.".to_string(),
            confirm_delete: "¿Estás seguro de que quieres eliminar el elemento con ID {id}?"
                .to_string(),
            edit_button: "Editar".to_string(),
            delete_button: "Eliminar".to_string(),
        }
    }
}

impl Labels {
    pub fn confirm_delete_for(&self, id: i64) -> String {
        self.confirm_delete.replace(ID_PLACEHOLDER, &id.to_string())
    }
}

/// Fixed set of priority levels offered by the selector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriorityConfig {
    /// Value the selector returns to after a successful save
    pub default_id: i64,
    pub levels: Vec<PriorityLevel>,
}

impl Default for PriorityConfig {
    fn default() -> Self {
        Self {
            default_id: 3,
            levels: vec![
                PriorityLevel::new(1, "Alta"),
                PriorityLevel::new(2, "Media"),
                PriorityLevel::new(3, "Baja"),
            ],
        }
    }
}

impl PriorityConfig {
    /// Selector value for the default level
    pub fn default_value(&self) -> String {
        self.default_id.to_string()
    }

    pub fn has_level(&self, id: i64) -> bool {
        self.levels.iter().any(|level| level.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorityLevel {
    pub id: i64,
    pub label: String,
}

impl PriorityLevel {
    pub fn new(id: i64, label: impl Into<String>) -> Self {
        Self { id, label: label.into() }
    }
}
