//! Raw table records.
//!
//! Each submodule contains a `FromRow` struct matching one table's columns
//! and an `into_row` conversion to the validated core row type. Blank
//! optional text is normalized to `None` during conversion.

pub mod affectation_type;
pub mod case_study;
pub mod element;
pub mod overview;
pub mod scene;
pub mod tag;
pub mod zone;

/// Treat empty or whitespace-only optional text as absent.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Reject an empty required text column.
pub(crate) fn required(
    table: &'static str,
    id: atlas_core::types::DbId,
    column: &str,
    value: String,
) -> Result<String, atlas_core::source::DataSourceError> {
    if value.trim().is_empty() {
        return Err(atlas_core::source::DataSourceError::InvalidRow {
            table,
            id,
            reason: format!("{column} is empty"),
        });
    }
    Ok(value)
}
