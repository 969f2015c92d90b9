//! # quote_core - Wide-Format Print Quoting Engine
//!
//! `quote_core` is the pricing heart of a print-shop MIS: given a catalog
//! snapshot and a customer request, it lays the job out on roll media,
//! derives finishing quantities, and produces a full cost/price breakdown.
//! All inputs and outputs are JSON-serializable, so the engine drops into
//! an API server, a desktop tool, or a test harness unchanged.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions of catalog snapshot plus request
//! - **Deterministic**: Same inputs always serialize to the same bytes
//! - **Exact arithmetic**: `Decimal` everywhere, no binary floats near money
//! - **Fail-closed**: Broken catalog references abort the quote, never
//!   silently drop a priced component
//!
//! ## Quick Start
//!
//! ```rust
//! use quote_core::{calculate, CalculationRequest};
//! use quote_core::catalog::sample_catalog;
//! use rust_decimal_macros::dec;
//!
//! let catalog = sample_catalog();
//! let request = CalculationRequest::new(dec!(90), dec!(50), 1).with_template(1);
//!
//! let result = calculate(&catalog, &request).unwrap();
//! println!("{}", serde_json::to_string_pretty(&result).unwrap());
//! assert_eq!(result.total_price_net, dec!(45.20));
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - Materials, roll variants, processes, product templates
//! - [`engine`] - The calculation pipeline and its request/result types
//! - [`quote`] - Multi-item quote assembly and quote lifecycle
//! - [`money`] - The rounding policy (half-up, three externalization points)
//! - [`errors`] - Structured error types

pub mod catalog;
pub mod engine;
pub mod errors;
pub mod money;
pub mod quote;

// Re-export commonly used types at crate root for convenience
pub use catalog::{
    CatalogSnapshot, Material, MaterialVariant, Process, ProcessMethod, ProductTemplate,
    TemplateComponent,
};
pub use engine::{
    calculate, calculate_with, CalculationRequest, CalculationResult, EngineDefaults,
};
pub use errors::{QuoteError, QuoteResult};
pub use quote::{price_quote, QuoteItemSpec, QuoteStatus, QuoteSummary};
