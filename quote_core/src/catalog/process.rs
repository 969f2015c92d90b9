//! # Finishing Processes
//!
//! A process is a priced finishing step: contour cutting, lamination,
//! welding, eyelets. Each process declares how its billable quantity is
//! derived from job geometry (its [`ProcessMethod`]) together with its
//! rates and the extra material allowance it needs around the print.
//!
//! ## Example
//!
//! ```rust
//! use quote_core::catalog::{Process, ProcessMethod};
//! use rust_decimal_macros::dec;
//!
//! let cutting = Process::new(1, "CNC Cutting", ProcessMethod::Linear, dec!(5.00))
//!     .with_internal_cost(dec!(2.00))
//!     .with_setup_fee(dec!(10.00))
//!     .with_margins(dec!(0.5), dec!(0.5))
//!     .with_unit("mb");
//!
//! assert_eq!(cutting.method.code(), "LINEAR");
//! ```

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How a process converts job geometry into a billable quantity.
///
/// Only `Area` and `Linear` have quantity formulas today. `Time` and
/// `Unit` exist in catalogs for manual estimation workflows; asking the
/// engine to price one is a hard error, never a silent zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProcessMethod {
    /// Billed per square meter of gross print area
    Area,
    /// Billed per running meter of panel perimeter
    Linear,
    /// Billed per hour of labor (manual estimation only)
    Time,
    /// Billed per piece (manual estimation only)
    Unit,
}

impl ProcessMethod {
    pub const ALL: [ProcessMethod; 4] = [
        ProcessMethod::Area,
        ProcessMethod::Linear,
        ProcessMethod::Time,
        ProcessMethod::Unit,
    ];

    /// Short code matching the wire format
    pub fn code(&self) -> &'static str {
        match self {
            ProcessMethod::Area => "AREA",
            ProcessMethod::Linear => "LINEAR",
            ProcessMethod::Time => "TIME",
            ProcessMethod::Unit => "UNIT",
        }
    }

    /// Human-readable name for UI display
    pub fn display_name(&self) -> &'static str {
        match self {
            ProcessMethod::Area => "Area (m²)",
            ProcessMethod::Linear => "Linear (running meters)",
            ProcessMethod::Time => "Time (hours)",
            ProcessMethod::Unit => "Per piece",
        }
    }

    /// Whether the engine has a quantity formula for this method
    pub fn is_priceable(&self) -> bool {
        matches!(self, ProcessMethod::Area | ProcessMethod::Linear)
    }
}

impl fmt::Display for ProcessMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A priced finishing step.
///
/// `unit_price` is the sell rate per billable unit, `internal_cost` the
/// cost-of-goods rate, and `setup_fee` a flat amount charged once per
/// component regardless of quantity. `margin_w_cm`/`margin_h_cm` are the
/// per-side material allowances this process needs around the net format
/// (a cutting bed grips the edge, lamination needs bleed).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Process {
    pub id: u32,
    pub name: String,
    pub method: ProcessMethod,
    pub unit_price: Decimal,
    #[serde(default)]
    pub internal_cost: Decimal,
    #[serde(default)]
    pub setup_fee: Decimal,
    #[serde(default)]
    pub margin_w_cm: Decimal,
    #[serde(default)]
    pub margin_h_cm: Decimal,
    #[serde(default = "default_unit")]
    pub unit: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_unit() -> String {
    "pcs".to_string()
}

fn default_active() -> bool {
    true
}

impl Process {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        method: ProcessMethod,
        unit_price: Decimal,
    ) -> Self {
        Process {
            id,
            name: name.into(),
            method,
            unit_price,
            internal_cost: Decimal::ZERO,
            setup_fee: Decimal::ZERO,
            margin_w_cm: Decimal::ZERO,
            margin_h_cm: Decimal::ZERO,
            unit: default_unit(),
            is_active: true,
        }
    }

    pub fn with_internal_cost(mut self, internal_cost: Decimal) -> Self {
        self.internal_cost = internal_cost;
        self
    }

    pub fn with_setup_fee(mut self, setup_fee: Decimal) -> Self {
        self.setup_fee = setup_fee;
        self
    }

    pub fn with_margins(mut self, margin_w_cm: Decimal, margin_h_cm: Decimal) -> Self {
        self.margin_w_cm = margin_w_cm;
        self.margin_h_cm = margin_h_cm;
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }
}
