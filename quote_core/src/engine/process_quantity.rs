//! # Process Quantity Derivation
//!
//! Turns job geometry into the billable quantity of a finishing process,
//! then into its cost and sell price. Quantity depends on the process
//! method:
//!
//! - **Area**: gross width x gross height in m², times order quantity.
//! - **Linear**: perimeter of one panel in running meters, times panel
//!   count, times order quantity. When the print is split, each panel
//!   carries the overlap in its width, so cutting is billed for the
//!   seam allowances too.
//! - **Time** / **Unit**: no formula; pricing one is a hard error so a
//!   manual-estimation process can never slip into a quote at zero.
//!
//! The setup fee is flat per component: charged once however large the
//! derived quantity is, on both the cost and the price side.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::{Process, ProcessMethod};
use crate::errors::{QuoteError, QuoteResult};
use crate::money::quantize;

use super::dimensions::GrossDimensions;

/// Panel state a process inherits from the material laid out before it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelGeometry {
    pub gross: GrossDimensions,
    pub num_panels: u32,
    pub is_split: bool,
    /// Overlap allowance in effect for the request (cm)
    pub overlap_cm: Decimal,
}

impl PanelGeometry {
    /// Geometry before any material has been laid out: one whole panel.
    pub fn unsplit(gross: GrossDimensions, overlap_cm: Decimal) -> Self {
        PanelGeometry {
            gross,
            num_panels: 1,
            is_split: false,
            overlap_cm,
        }
    }
}

/// Derive the billable quantity of a process for the given geometry and
/// order quantity.
pub fn process_quantity(
    process: &Process,
    geometry: &PanelGeometry,
    quantity: u32,
) -> QuoteResult<Decimal> {
    let order_qty = Decimal::from(quantity);
    match process.method {
        ProcessMethod::Area => {
            let area_m2 = (geometry.gross.width_cm / Decimal::ONE_HUNDRED)
                * (geometry.gross.height_cm / Decimal::ONE_HUNDRED);
            Ok(area_m2 * order_qty)
        }
        ProcessMethod::Linear => {
            let overlap = if geometry.is_split {
                geometry.overlap_cm
            } else {
                Decimal::ZERO
            };
            let panel_width_cm =
                geometry.gross.width_cm / Decimal::from(geometry.num_panels) + overlap;
            let perimeter_m =
                Decimal::TWO * (panel_width_cm + geometry.gross.height_cm) / Decimal::ONE_HUNDRED;
            Ok(perimeter_m * Decimal::from(geometry.num_panels) * order_qty)
        }
        ProcessMethod::Time | ProcessMethod::Unit => Err(QuoteError::unsupported_method(
            process.name.clone(),
            process.method,
        )),
    }
}

/// Cost of goods for a process: quantity at internal cost plus setup fee.
pub fn process_cost(process: &Process, billable_qty: Decimal) -> Decimal {
    billable_qty * quantize(process.internal_cost) + quantize(process.setup_fee)
}

/// Sell price for a process: quantity at unit price plus setup fee.
pub fn process_price(process: &Process, billable_qty: Decimal) -> Decimal {
    billable_qty * quantize(process.unit_price) + quantize(process.setup_fee)
}
