use crate::DomainError;

/// Valida el formato de un InChIKey: 27 caracteres en tres bloques de
/// mayúsculas o dígitos separados por dos guiones. No comprueba que el hash
/// corresponda a molécula alguna, solo la forma.
pub fn validate_inchikey(inchikey: &str) -> Result<(), DomainError> {
    let normalized = inchikey.trim().to_uppercase();
    if normalized.len() != 27 {
        return Err(DomainError::ValidationError(
            "InChIKey debe tener exactamente 27 caracteres".to_string(),
        ));
    }
    let parts: Vec<&str> = normalized.split('-').collect();
    if parts.len() != 3 {
        return Err(DomainError::ValidationError(
            "InChIKey debe contener exactamente dos guiones".to_string(),
        ));
    }
    if parts
        .iter()
        .any(|p| p.is_empty() || !p.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()))
    {
        return Err(DomainError::ValidationError(
            "Formato InChIKey inválido o contiene caracteres inválidos".to_string(),
        ));
    }
    Ok(())
}
