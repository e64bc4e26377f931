use gloo_storage::{LocalStorage, Storage};

/// Leer un valor crudo (sin JSON) de localStorage
pub fn load_raw_from_storage(key: &str) -> Option<String> {
    LocalStorage::raw().get_item(key).ok().flatten()
}

pub fn remove_from_storage(key: &str) -> Result<(), String> {
    LocalStorage::raw()
        .remove_item(key)
        .map_err(|_| "Error eliminando de localStorage".to_string())
}
