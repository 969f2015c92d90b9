//! # Pricing Engine
//!
//! The deterministic calculation pipeline, split into its stages:
//!
//! - [`dimensions`]: net format to gross production format
//! - [`material_fit`]: cheapest feasible roll variant for the format
//! - [`process_quantity`]: geometry to billable process quantities
//! - [`calculate`]: orchestration, request and result types
//!
//! Each stage is a pure function over catalog data; the orchestrator wires
//! them together and owns the running panel geometry.

pub mod calculate;
pub mod dimensions;
pub mod material_fit;
pub mod process_quantity;

pub use calculate::{
    calculate, calculate_with, CalculationRequest, CalculationResult, ClientLine, ComponentLine,
    EngineDefaults, LineKind,
};
pub use dimensions::{resolve_gross_dimensions, GrossDimensions};
pub use material_fit::{select_best_fit, MaterialFit};
pub use process_quantity::{process_cost, process_price, process_quantity, PanelGeometry};
