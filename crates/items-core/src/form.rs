//! Item Form
//!
//! The form has two modes: creating a new item or editing an existing one.
//! The mode decides the request method and the submit button label.

use crate::config::{Labels, PriorityConfig};
use crate::domain::{Item, ItemId, ItemPayload};
use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Create,
    Editing(ItemId),
}

/// Where a submit is sent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitTarget {
    /// `POST {base}`
    Create,
    /// `PUT {base}/{id}`
    Update(ItemId),
}

/// Current contents of the form fields, as typed
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ItemForm {
    pub mode: Mode,
    pub nombre: String,
    pub descripcion: String,
    /// Raw selector value; ignored when priority is disabled
    pub prioridad: String,
}

impl ItemForm {
    pub fn new(priority: Option<&PriorityConfig>) -> Self {
        let mut form = Self::default();
        form.reset(priority);
        form
    }

    /// Value of the hidden id field: empty in Create mode
    pub fn hidden_id(&self) -> String {
        match self.mode {
            Mode::Create => String::new(),
            Mode::Editing(id) => id.to_string(),
        }
    }

    pub fn submit_label<'a>(&self, labels: &'a Labels) -> &'a str {
        match self.mode {
            Mode::Create => &labels.submit_create,
            Mode::Editing(_) => &labels.submit_update,
        }
    }

    pub fn target(&self) -> SubmitTarget {
        match self.mode {
            Mode::Create => SubmitTarget::Create,
            Mode::Editing(id) => SubmitTarget::Update(id),
        }
    }

    /// Build the request body, or reject the form
    pub fn validate(&self, priority: Option<&PriorityConfig>) -> Result<ItemPayload, ValidationError> {
        let nombre = self.nombre.trim();
        let descripcion = self.descripcion.trim();
        if nombre.is_empty() || descripcion.is_empty() {
            return Err(ValidationError::MissingFields);
        }

        let id_prioridad = match priority {
            None => None,
            Some(_) => match self.prioridad.trim().parse::<i64>() {
                Ok(value) if value != 0 => Some(value),
                _ => return Err(ValidationError::MissingFields),
            },
        };

        Ok(ItemPayload {
            nombre: nombre.to_string(),
            descripcion: descripcion.to_string(),
            id_prioridad,
        })
    }

    /// Back to an empty Create form
    pub fn reset(&mut self, priority: Option<&PriorityConfig>) {
        self.mode = Mode::Create;
        self.nombre.clear();
        self.descripcion.clear();
        self.prioridad = priority.map(PriorityConfig::default_value).unwrap_or_default();
    }

    /// Load an item into the form for editing
    ///
    /// A priority the selector has no option for loads as empty, so the
    /// form fails validation instead of sending a value the user never saw.
    pub fn begin_edit(&mut self, item: &Item, priority: Option<&PriorityConfig>) {
        self.mode = Mode::Editing(item.id);
        self.nombre = item.nombre.clone();
        self.descripcion = item.descripcion.clone();
        self.prioridad = match (item.id_prioridad, priority) {
            (Some(id), Some(config)) if config.has_level(id) => id.to_string(),
            _ => String::new(),
        };
    }
}
