//! Shared validation helpers for inbound HTTP adapters.

use serde_json::json;

use crate::domain::{BlogId, Error};

/// Validation error codes attached to HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    InvalidUuid,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::InvalidUuid => "invalid_uuid",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let field = field.as_str();
    Error::validation(format!("missing required field: {field}")).with_details(json!({
        "field": field,
        "code": ErrorCode::MissingField.as_str(),
    }))
}

pub(crate) fn invalid_uuid_error(field: FieldName, value: &str) -> Error {
    let field_name = field.as_str();
    Error::validation(format!("{field_name} must be a valid UUID")).with_details(json!({
        "field": field_name,
        "value": value,
        "code": ErrorCode::InvalidUuid.as_str(),
    }))
}

/// Parse a path segment into a [`BlogId`], mapping failures to a field-tagged
/// validation error.
pub(crate) fn parse_blog_id(value: &str, field: FieldName) -> Result<BlogId, Error> {
    BlogId::parse(value).map_err(|_| invalid_uuid_error(field, value))
}

/// Require a field to be present, mapping absence to a field-tagged
/// validation error.
pub(crate) fn require_field(value: Option<String>, field: FieldName) -> Result<String, Error> {
    value.ok_or_else(|| missing_field_error(field))
}
