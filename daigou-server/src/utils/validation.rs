//! Input validation helpers
//!
//! Centralized text length constants and validation functions.
//! Limits are chosen based on reasonable UX limits for names, notes,
//! descriptions; the embedded store has no built-in length enforcement.

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: product title, category name, username, etc.
pub const MAX_NAME_LEN: usize = 200;

/// Notes, specs, item remarks
pub const MAX_NOTE_LEN: usize = 500;

/// Short identifiers: paopaohu id, contact info, remittance digits
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Passwords (before hashing)
pub const MAX_PASSWORD_LEN: usize = 128;

/// URLs / image paths
pub const MAX_URL_LEN: usize = 2048;

/// Long product descriptions
pub const MAX_DESCRIPTION_LEN: usize = 10_000;

// ── Validation helpers (CRUD handlers) ──────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} 為必填欄位")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} 過長 ({} 字元，上限 {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} 過長 ({} 字元，上限 {max_len})",
            v.len()
        )));
    }
    Ok(())
}

/// 统一编号：8 码数字，选填字段有值时才检查
pub fn validate_tax_id(value: &Option<String>) -> Result<(), AppError> {
    if let Some(v) = value
        && !v.is_empty()
        && (v.len() != 8 || !v.bytes().all(|b| b.is_ascii_digit()))
    {
        return Err(AppError::validation("統一編號須為 8 碼數字".to_string()));
    }
    Ok(())
}
