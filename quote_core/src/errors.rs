//! # Error Types
//!
//! Structured error types for quote_core. Every failure the engine can
//! produce is an explicit variant with enough context for a caller (or an
//! API layer wrapping the engine) to handle it programmatically.
//!
//! The error taxonomy splits along one line that matters to callers:
//! errors the requester can fix (bad dimensions, a product that physically
//! cannot be produced from the available rolls) versus errors only the
//! catalog maintainer or the host application can fix (dangling references,
//! unpriceable process methods).
//!
//! ## Example
//!
//! ```rust
//! use quote_core::errors::{QuoteError, QuoteResult};
//!
//! fn validate_width(width_cm: &str) -> QuoteResult<()> {
//!     if width_cm.starts_with('-') {
//!         return Err(QuoteError::invalid_request(
//!             "width_cm",
//!             width_cm,
//!             "Width must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::ProcessMethod;

/// Result type alias for quote_core operations
pub type QuoteResult<T> = Result<T, QuoteError>;

/// Structured error type for quoting operations.
///
/// Each variant provides specific context about what went wrong. Missing
/// catalog references are deliberately hard errors rather than silently
/// skipped components: a quote that omits a priced component is worse than
/// no quote at all.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum QuoteError {
    /// A request value is invalid (non-positive dimension, zero quantity, etc.)
    #[error("Invalid request for '{field}': {value} - {reason}")]
    InvalidRequest {
        field: String,
        value: String,
        reason: String,
    },

    /// No active variant of the material can accommodate the gross width
    #[error("Material '{material}' cannot fit gross width {gross_width_cm} cm on any roll")]
    InfeasibleMaterial {
        material: String,
        gross_width_cm: Decimal,
    },

    /// Product template not found in the catalog
    #[error("Template not found: {template_id}")]
    MissingTemplate { template_id: u32 },

    /// Material not found in the catalog
    #[error("Material not found: {material_id}")]
    MissingMaterial { material_id: u32 },

    /// Process not found in the catalog
    #[error("Process not found: {process_id}")]
    MissingProcess { process_id: u32 },

    /// Process uses a method the engine has no quantity formula for
    #[error("Process '{process}' uses unsupported method {method}")]
    UnsupportedMethod {
        process: String,
        method: ProcessMethod,
    },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl QuoteError {
    /// Create an InvalidRequest error
    pub fn invalid_request(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        QuoteError::InvalidRequest {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InfeasibleMaterial error
    pub fn infeasible_material(material: impl Into<String>, gross_width_cm: Decimal) -> Self {
        QuoteError::InfeasibleMaterial {
            material: material.into(),
            gross_width_cm,
        }
    }

    /// Create an UnsupportedMethod error
    pub fn unsupported_method(process: impl Into<String>, method: ProcessMethod) -> Self {
        QuoteError::UnsupportedMethod {
            process: process.into(),
            method,
        }
    }

    /// Create an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        QuoteError::Internal {
            message: message.into(),
        }
    }

    /// Check if this error was caused by the request itself (as opposed to
    /// catalog data or engine state). Client errors are safe to show to the
    /// person who entered the dimensions.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            QuoteError::InvalidRequest { .. } | QuoteError::InfeasibleMaterial { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            QuoteError::InvalidRequest { .. } => "INVALID_REQUEST",
            QuoteError::InfeasibleMaterial { .. } => "INFEASIBLE_MATERIAL",
            QuoteError::MissingTemplate { .. } => "MISSING_TEMPLATE",
            QuoteError::MissingMaterial { .. } => "MISSING_MATERIAL",
            QuoteError::MissingProcess { .. } => "MISSING_PROCESS",
            QuoteError::UnsupportedMethod { .. } => "UNSUPPORTED_METHOD",
            QuoteError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_error_serialization() {
        let error = QuoteError::infeasible_material("Latex Paper", dec!(190));
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: QuoteError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
        assert!(json.contains("\"type\":\"InfeasibleMaterial\""));
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            QuoteError::invalid_request("width_cm", "0", "must be positive").error_code(),
            "INVALID_REQUEST"
        );
        assert_eq!(
            QuoteError::MissingTemplate { template_id: 99 }.error_code(),
            "MISSING_TEMPLATE"
        );
        assert_eq!(
            QuoteError::unsupported_method("Manual Fitting", ProcessMethod::Time).error_code(),
            "UNSUPPORTED_METHOD"
        );
    }

    #[test]
    fn test_client_error_split() {
        assert!(QuoteError::invalid_request("quantity", "0", "zero").is_client_error());
        assert!(QuoteError::infeasible_material("Foil", dec!(500)).is_client_error());
        assert!(!QuoteError::MissingMaterial { material_id: 7 }.is_client_error());
        assert!(!QuoteError::internal("bug").is_client_error());
    }
}
