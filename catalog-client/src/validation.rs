//! Input validation helpers
//!
//! Client-side checks run by command handlers before any request is issued.
//! A failure here never reaches the network.

use shared::models::{CategoryCreate, ProductCreate};

use crate::derived::NO_CATEGORY_FILTER;
use crate::{ClientError, ClientResult};

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: category, product
pub const MAX_NAME_LEN: usize = 200;

/// Free-text descriptions
pub const MAX_DESCRIPTION_LEN: usize = 500;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> ClientResult<()> {
    if value.trim().is_empty() {
        return Err(ClientError::validation(format!("{field} must not be empty")));
    }
    validate_text_len(value, field, max_len)
}

/// Validate that a string is within the length limit.
pub fn validate_text_len(value: &str, field: &str, max_len: usize) -> ClientResult<()> {
    let len = value.chars().count();
    if len > max_len {
        return Err(ClientError::validation(format!(
            "{field} is too long ({len} chars, max {max_len})"
        )));
    }
    Ok(())
}

/// Category fields, shared by add and update
pub fn validate_category(category_name: &str, description: &str) -> ClientResult<()> {
    validate_required_text(category_name, "Category name", MAX_NAME_LEN)?;
    validate_text_len(description, "Description", MAX_DESCRIPTION_LEN)
}

/// Product fields, shared by add and update
///
/// Checked in order: name, category selected, price.
pub fn validate_product(
    product_name: &str,
    description: &str,
    price: f64,
    category_id: i64,
) -> ClientResult<()> {
    validate_required_text(product_name, "Product name", MAX_NAME_LEN)?;
    validate_text_len(description, "Description", MAX_DESCRIPTION_LEN)?;
    if category_id == NO_CATEGORY_FILTER {
        return Err(ClientError::validation("Please select a category"));
    }
    if !price.is_finite() || price <= 0.0 {
        return Err(ClientError::validation("Price must be greater than 0"));
    }
    Ok(())
}

/// Convenience for create drafts
pub fn validate_category_draft(draft: &CategoryCreate) -> ClientResult<()> {
    validate_category(&draft.category_name, &draft.description)
}

/// Convenience for create drafts
pub fn validate_product_draft(draft: &ProductCreate) -> ClientResult<()> {
    validate_product(
        &draft.product_name,
        &draft.description,
        draft.price,
        draft.category_id,
    )
}
