use std::path::Path;

use crate::storage::sqlite::IN_MEMORY;

/// # Errors
///
/// Will return `Err` if the database file's directory does not exist
pub fn check_db_name(db_name: &str) -> Result<String, String> {
    let db_name = db_name.trim();
    if db_name.is_empty() {
        return Err("The database name must not be empty.".to_string());
    }
    if db_name == IN_MEMORY {
        return Ok(db_name.to_string());
    }
    let path = Path::new(db_name);
    if path.is_dir() {
        return Err(format!("The database name '{db_name}' is a directory."));
    }
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.is_dir() => Err(format!(
            "The directory for database '{db_name}' does not exist."
        )),
        _ => Ok(db_name.to_string()),
    }
}

/// # Errors
///
/// Will return `Err` if the storage key is blank
pub fn check_storage_key(storage_key: &str) -> Result<(), String> {
    if storage_key.trim().is_empty() {
        return Err("The storage key must not be empty.".to_string());
    }
    Ok(())
}
