//! Short code generation and validation utilities.
//!
//! Generated codes come from the OS random source; custom codes chosen by
//! callers are checked against a small character set and a reserved list.

use crate::error::AppError;
use base64::Engine as _;

/// Random bytes per generated code. 6 bytes encode to 8 base64 characters.
const CODE_LENGTH_BYTES: usize = 6;

pub const MIN_CUSTOM_CODE_LEN: usize = 3;
pub const MAX_CUSTOM_CODE_LEN: usize = 32;

/// Codes that would shadow service routes.
const RESERVED_CODES: &[&str] = &["api", "health"];

/// Generates a random short code.
///
/// Uses `getrandom` for entropy and encodes the result as URL-safe base64
/// without padding, producing an 8-character code.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the system random source fails.
pub fn generate_code() -> Result<String, AppError> {
    let mut buffer = [0u8; CODE_LENGTH_BYTES];

    getrandom::fill(&mut buffer)
        .map_err(|e| AppError::internal(format!("Failed to generate random bytes: {}", e)))?;

    Ok(base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer))
}

/// Validates a caller-chosen short code.
///
/// # Rules
///
/// - Length: 3-32 characters
/// - Allowed characters: ASCII letters, digits, `-`, `_`
/// - Cannot start or end with a hyphen
/// - Cannot be a reserved route name
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_custom_code(code: &str) -> Result<(), AppError> {
    if code.len() < MIN_CUSTOM_CODE_LEN || code.len() > MAX_CUSTOM_CODE_LEN {
        return Err(AppError::bad_request(format!(
            "Custom short must be {}-{} characters",
            MIN_CUSTOM_CODE_LEN, MAX_CUSTOM_CODE_LEN
        )));
    }

    if !code
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(AppError::bad_request(
            "Custom short can only contain letters, digits, hyphens and underscores",
        ));
    }

    if code.starts_with('-') || code.ends_with('-') {
        return Err(AppError::bad_request(
            "Custom short cannot start or end with a hyphen",
        ));
    }

    if RESERVED_CODES
        .iter()
        .any(|reserved| reserved.eq_ignore_ascii_case(code))
    {
        return Err(AppError::bad_request("This short is reserved"));
    }

    Ok(())
}
