use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

/// Longest value accepted for any single query or path parameter.
pub const MAX_PARAMETER_LEN: usize = 256;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    #[error("Unsupported query parameter: {0}")]
    UnsupportedParameter(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Checks a raw query against an allow-list of field names and returns the
/// sanitized parameters, ordered by name.
pub fn validate_query(
    raw: &HashMap<String, String>,
    allowed: &[&str],
) -> Result<BTreeMap<String, String>, ValidationError> {
    let mut sanitized = BTreeMap::new();

    // Sorted so the first rejected key is deterministic
    let ordered: BTreeMap<&String, &String> = raw.iter().collect();

    for (key, value) in ordered {
        if !allowed.contains(&key.as_str()) {
            return Err(ValidationError::UnsupportedParameter(key.clone()));
        }
        let value = validate_parameter(key, value)?;
        sanitized.insert(key.clone(), value.to_string());
    }

    Ok(sanitized)
}

/// Trims a parameter value and rejects it when empty, oversized or carrying
/// control characters.
pub fn validate_parameter<'a>(name: &str, value: &'a str) -> Result<&'a str, ValidationError> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::MissingParameter(name.to_string()));
    }

    if value.len() > MAX_PARAMETER_LEN {
        return Err(ValidationError::InvalidParameter(format!(
            "{} must be at most {} characters",
            name, MAX_PARAMETER_LEN
        )));
    }

    if value.chars().any(char::is_control) {
        return Err(ValidationError::InvalidParameter(format!(
            "{} contains control characters",
            name
        )));
    }

    Ok(value)
}

pub fn validate_hash(hash: &str) -> Result<&str, ValidationError> {
    validate_parameter("hash", hash)
}
