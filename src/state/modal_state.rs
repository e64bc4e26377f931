// ============================================================================
// MODAL STATE - Máquina de estados del editor de tótems
// ============================================================================
// Closed → Create → Closed
// Closed → Edit(totem) → Closed
// ============================================================================

use crate::models::{Totem, TotemForm};
use crate::utils::constants::{TITLE_CREATE_TOTEM, TITLE_EDIT_TOTEM};

#[derive(Clone, Debug, Default, PartialEq)]
pub enum TotemModal {
    #[default]
    Closed,
    Create,
    Edit(Totem),
}

impl TotemModal {
    pub fn is_open(&self) -> bool {
        !matches!(self, TotemModal::Closed)
    }

    pub fn open_create(&mut self) {
        *self = TotemModal::Create;
    }

    pub fn open_edit(&mut self, totem: Totem) {
        *self = TotemModal::Edit(totem);
    }

    /// Devuelve true si estaba abierto
    pub fn close(&mut self) -> bool {
        let was_open = self.is_open();
        *self = TotemModal::Closed;
        was_open
    }

    pub fn title(&self) -> &'static str {
        match self {
            TotemModal::Edit(_) => TITLE_EDIT_TOTEM,
            _ => TITLE_CREATE_TOTEM,
        }
    }

    /// Valores iniciales del formulario: en blanco para crear, precargados para editar
    pub fn form(&self) -> TotemForm {
        match self {
            TotemModal::Edit(totem) => TotemForm::from_totem(totem),
            _ => TotemForm::blank(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn totem() -> Totem {
        Totem {
            id: 3,
            external_pos_id: "POS-3".to_string(),
            location: Some("Caja 1".to_string()),
            is_active: false,
            owner_id: 1,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_crear_limpia_formulario() {
        let mut modal = TotemModal::default();
        assert!(!modal.is_open());
        modal.open_create();
        assert!(modal.is_open());
        assert_eq!(modal.title(), TITLE_CREATE_TOTEM);
        let form = modal.form();
        assert_eq!(form.identity(), None);
        assert!(form.external_pos_id.is_empty());
    }

    #[test]
    fn test_editar_precarga_formulario() {
        let mut modal = TotemModal::default();
        modal.open_edit(totem());
        assert_eq!(modal.title(), TITLE_EDIT_TOTEM);
        let form = modal.form();
        assert_eq!(form.identity(), Some("3"));
        assert_eq!(form.external_pos_id, "POS-3");
        assert_eq!(form.location, "Caja 1");
        assert!(!form.is_active);
    }

    #[test]
    fn test_cerrar() {
        let mut modal = TotemModal::Edit(totem());
        assert!(modal.close());
        assert!(!modal.close());
        assert_eq!(modal, TotemModal::Closed);
    }
}
