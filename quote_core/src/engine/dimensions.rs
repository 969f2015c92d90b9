//! # Gross Dimension Resolution
//!
//! Converts the customer's net format into the gross production format the
//! rest of the engine works with. Two allowance classes stack per side:
//!
//! - the template's product margin (bleed around the finished piece), and
//! - the **largest** process margin among every process attached to the
//!   template.
//!
//! Process margins do not add up: the print gets one safety strip sized
//! for the most demanding process, whether or not that process is selected
//! for this particular request. A cutting bed needs its grip strip even
//! when the customer skips lamination.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogSnapshot, ComponentKind, ProductTemplate};
use crate::errors::QuoteResult;
use crate::money::quantize;

/// Production-format dimensions, net format plus all allowances.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrossDimensions {
    pub width_cm: Decimal,
    pub height_cm: Decimal,
}

/// Resolve gross production dimensions for a request.
///
/// `gross = net + 2 * product_margin + 2 * max(process margins)`, applied
/// per axis. Without a template the gross format equals the net format.
///
/// Every process referenced by the template must exist in the snapshot,
/// selected or not; a dangling reference is a hard error.
pub fn resolve_gross_dimensions(
    width_cm: Decimal,
    height_cm: Decimal,
    template: Option<&ProductTemplate>,
    snapshot: &CatalogSnapshot,
) -> QuoteResult<GrossDimensions> {
    let net_w = quantize(width_cm);
    let net_h = quantize(height_cm);

    let template = match template {
        Some(t) => t,
        None => {
            return Ok(GrossDimensions {
                width_cm: net_w,
                height_cm: net_h,
            })
        }
    };

    let product_w = quantize(template.default_margin_w_cm);
    let product_h = quantize(template.default_margin_h_cm);

    // Widest process allowance across ALL attached processes, not just the
    // active ones.
    let mut process_w = Decimal::ZERO;
    let mut process_h = Decimal::ZERO;
    for component in &template.components {
        if let ComponentKind::Process { process_id } = component.kind {
            let process = snapshot.process(process_id)?;
            process_w = process_w.max(quantize(process.margin_w_cm));
            process_h = process_h.max(quantize(process.margin_h_cm));
        }
    }

    Ok(GrossDimensions {
        width_cm: net_w + product_w * Decimal::TWO + process_w * Decimal::TWO,
        height_cm: net_h + product_h * Decimal::TWO + process_h * Decimal::TWO,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Process, ProcessMethod, ProductTemplate, TemplateComponent};
    use crate::errors::QuoteError;
    use rust_decimal_macros::dec;

    fn snapshot_with_processes() -> CatalogSnapshot {
        CatalogSnapshot::new()
            .with_process(
                Process::new(1, "CNC Cutting", ProcessMethod::Linear, dec!(5.00))
                    .with_margins(dec!(0.5), dec!(0.5)),
            )
            .with_process(
                Process::new(2, "Welding", ProcessMethod::Linear, dec!(3.00))
                    .with_margins(dec!(2.0), dec!(1.0)),
            )
    }

    #[test]
    fn test_no_template_keeps_net_format() {
        let snapshot = CatalogSnapshot::new();
        let gross = resolve_gross_dimensions(dec!(90), dec!(50), None, &snapshot).unwrap();
        assert_eq!(gross.width_cm, dec!(90));
        assert_eq!(gross.height_cm, dec!(50));
    }

    #[test]
    fn test_product_margins_apply_per_side() {
        let snapshot = CatalogSnapshot::new();
        let template = ProductTemplate::new(1, "Banner").with_margins(dec!(0.5), dec!(1.0));
        let gross =
            resolve_gross_dimensions(dec!(90), dec!(50), Some(&template), &snapshot).unwrap();
        assert_eq!(gross.width_cm, dec!(91));
        assert_eq!(gross.height_cm, dec!(52));
    }

    #[test]
    fn test_process_margins_take_maximum_not_sum() {
        let snapshot = snapshot_with_processes();
        let template = ProductTemplate::new(1, "Cut Banner")
            .with_component(TemplateComponent::process(1, 1))
            .with_component(TemplateComponent::process(2, 2).with_sort_order(1));
        let gross =
            resolve_gross_dimensions(dec!(100), dec!(100), Some(&template), &snapshot).unwrap();
        // max(0.5, 2.0) = 2.0 per side on width, max(0.5, 1.0) = 1.0 on height
        assert_eq!(gross.width_cm, dec!(104));
        assert_eq!(gross.height_cm, dec!(102));
    }

    #[test]
    fn test_unselected_optional_process_still_widens_format() {
        let snapshot = snapshot_with_processes();
        let template = ProductTemplate::new(1, "Cut Banner").with_component(
            TemplateComponent::process(1, 2).optional("Finish", "Welded edges"),
        );
        // The caller never selects component 1, but its margin still counts.
        let gross =
            resolve_gross_dimensions(dec!(100), dec!(100), Some(&template), &snapshot).unwrap();
        assert_eq!(gross.width_cm, dec!(104));
        assert_eq!(gross.height_cm, dec!(102));
    }

    #[test]
    fn test_dangling_process_reference_fails() {
        let snapshot = CatalogSnapshot::new();
        let template =
            ProductTemplate::new(1, "Broken").with_component(TemplateComponent::process(1, 42));
        let result = resolve_gross_dimensions(dec!(100), dec!(100), Some(&template), &snapshot);
        assert_eq!(result, Err(QuoteError::MissingProcess { process_id: 42 }));
    }

    #[test]
    fn test_raw_inputs_are_normalized() {
        let snapshot = CatalogSnapshot::new();
        let gross =
            resolve_gross_dimensions(dec!(90.00004), dec!(50.00005), None, &snapshot).unwrap();
        assert_eq!(gross.width_cm, dec!(90.0000));
        assert_eq!(gross.height_cm, dec!(50.0001));
    }
}
