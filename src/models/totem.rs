use serde::{Deserialize, Serialize};

/// Tótem (terminal física de cobro) de un vendedor
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Totem {
    pub id: i64,
    pub external_pos_id: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    pub owner_id: i64,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

fn default_active() -> bool {
    true
}

impl Totem {
    /// Ubicación para mostrar en tabla ("N/A" si no hay)
    pub fn location_label(&self) -> &str {
        match self.location.as_deref() {
            Some(loc) if !loc.trim().is_empty() => loc,
            _ => "N/A",
        }
    }
}

/// Body de POST /totems/ y PATCH /totems/{id}
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct TotemPayload {
    pub external_pos_id: String,
    pub location: String,
    pub is_active: bool,
    pub owner_id: i64,
}

/// Valores crudos del formulario del modal de tótem.
/// `id` vacío = crear, no vacío = actualizar.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct TotemForm {
    pub id: String,
    pub external_pos_id: String,
    pub location: String,
    pub is_active: bool,
}

impl TotemForm {
    /// Formulario en blanco para "Añadir Nuevo Tótem"
    pub fn blank() -> Self {
        Self {
            is_active: true,
            ..Self::default()
        }
    }

    /// Formulario precargado con los valores actuales del tótem
    pub fn from_totem(totem: &Totem) -> Self {
        Self {
            id: totem.id.to_string(),
            external_pos_id: totem.external_pos_id.clone(),
            location: totem.location.clone().unwrap_or_default(),
            is_active: totem.is_active,
        }
    }

    /// Identidad del tótem a actualizar, `None` si el campo está vacío
    pub fn identity(&self) -> Option<&str> {
        let id = self.id.trim();
        if id.is_empty() {
            None
        } else {
            Some(id)
        }
    }

    pub fn to_payload(&self, owner_id: i64) -> TotemPayload {
        TotemPayload {
            external_pos_id: self.external_pos_id.clone(),
            location: self.location.clone(),
            is_active: self.is_active,
            owner_id,
        }
    }
}
