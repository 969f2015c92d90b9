//! # Material Best-Fit Selection
//!
//! Lays the gross format onto every active roll variant of a material and
//! keeps the cheapest feasible layout. For each variant:
//!
//! 1. If the gross width exceeds the printable width, the print splits
//!    into the minimum number of vertical panels, each widened by the
//!    overlap allowance for seaming.
//! 2. Panels are packed side by side across the roll; the number of rows
//!    of panels determines consumed roll length.
//! 3. Consumed area (full roll width times consumed length) prices the
//!    variant at its cost rate.
//!
//! A variant that cannot hold even one panel per row is skipped. If every
//! variant is skipped the material is infeasible for this format - that is
//! a quotable-request problem, reported as such, not a crash.
//!
//! Cost comparison is strict: a later variant replaces the incumbent only
//! when it is strictly cheaper, so equal-cost ties resolve to the variant
//! listed first and repeated runs always pick the same roll.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogSnapshot, MaterialVariant};
use crate::errors::{QuoteError, QuoteResult};
use crate::money::quantize;

use super::dimensions::GrossDimensions;

/// The chosen variant and the layout it implies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialFit {
    pub material_name: String,
    pub variant_id: u32,
    /// Full roll width of the chosen variant (cm)
    pub roll_width_cm: Decimal,
    /// Billing unit of the chosen variant (typically "m2")
    pub unit: String,
    /// Vertical panels the print splits into (1 = unsplit)
    pub num_panels: u32,
    /// Width of one panel including overlap when split (cm)
    pub panel_width_cm: Decimal,
    /// Panels that fit side by side across the printable width
    pub panels_per_row: u32,
    /// Rows of panels along the roll
    pub rows: u64,
    /// Consumed roll length (cm)
    pub total_length_cm: Decimal,
    /// Consumed area: full roll width x consumed length (m²)
    pub area_m2: Decimal,
    /// Material cost at the variant's cost rate
    pub cost: Decimal,
    /// Material sell price: cost plus the variant's markup
    pub price: Decimal,
}

/// Layout of the gross format on one specific variant.
#[derive(Debug, Clone, PartialEq)]
struct VariantLayout {
    num_panels: u32,
    panel_width_cm: Decimal,
    panels_per_row: u32,
    rows: u64,
    total_length_cm: Decimal,
    area_m2: Decimal,
    cost: Decimal,
}

/// Lay the gross format onto one variant. `Ok(None)` means the variant
/// cannot produce this format and should be skipped.
fn layout_for_variant(
    variant: &MaterialVariant,
    gross: GrossDimensions,
    quantity: u32,
    overlap_cm: Decimal,
) -> QuoteResult<Option<VariantLayout>> {
    let effective_w = variant.effective_width_cm();
    if effective_w <= Decimal::ZERO {
        // Margins consume the whole roll; nothing can be printed on it.
        return Ok(None);
    }

    let (num_panels, panel_width_cm) = if gross.width_cm > effective_w {
        let count = (gross.width_cm / effective_w).ceil();
        let num_panels = count
            .to_u32()
            .ok_or_else(|| QuoteError::internal("panel count out of range"))?;
        let panel_width_cm = gross.width_cm / Decimal::from(num_panels) + overlap_cm;
        (num_panels, panel_width_cm)
    } else {
        (1, gross.width_cm)
    };

    // Overlap can push a panel past the printable width; the variant is
    // then unusable even though the bare panels would fit.
    let per_row = (effective_w / panel_width_cm).floor();
    let panels_per_row = per_row
        .to_u32()
        .ok_or_else(|| QuoteError::internal("panels per row out of range"))?;
    if panels_per_row == 0 {
        return Ok(None);
    }

    let panel_instances = u64::from(num_panels) * u64::from(quantity);
    let rows = (Decimal::from(panel_instances) / Decimal::from(panels_per_row)).ceil();
    let rows = rows
        .to_u64()
        .ok_or_else(|| QuoteError::internal("row count out of range"))?;

    let total_length_cm = Decimal::from(rows) * gross.height_cm;

    // Billing is by consumed roll area at full roll width: the customer
    // pays for the edge margins too.
    let roll_width_cm = quantize(variant.width_cm);
    let area_m2 = (roll_width_cm / Decimal::ONE_HUNDRED) * (total_length_cm / Decimal::ONE_HUNDRED);
    let cost = area_m2 * quantize(variant.cost_price_per_unit);

    Ok(Some(VariantLayout {
        num_panels,
        panel_width_cm,
        panels_per_row,
        rows,
        total_length_cm,
        area_m2,
        cost,
    }))
}

/// Pick the cheapest feasible roll variant of a material for the gross
/// format at the given quantity.
///
/// Inactive variants are never considered. Fails with
/// [`QuoteError::InfeasibleMaterial`] when no variant can produce the
/// format, and with [`QuoteError::MissingMaterial`] when the material id
/// is not in the snapshot.
pub fn select_best_fit(
    snapshot: &CatalogSnapshot,
    material_id: u32,
    gross: GrossDimensions,
    quantity: u32,
    overlap_cm: Decimal,
) -> QuoteResult<MaterialFit> {
    let material = snapshot.material(material_id)?;

    let mut best: Option<(VariantLayout, &MaterialVariant)> = None;
    for variant in snapshot.variants_of(material_id) {
        if !variant.is_active {
            continue;
        }
        let layout = match layout_for_variant(variant, gross, quantity, overlap_cm)? {
            Some(layout) => layout,
            None => continue,
        };
        let replace = match &best {
            Some((incumbent, _)) => layout.cost < incumbent.cost,
            None => true,
        };
        if replace {
            best = Some((layout, variant));
        }
    }

    let (layout, variant) = match best {
        Some(found) => found,
        None => {
            return Err(QuoteError::infeasible_material(
                material.name.as_str(),
                gross.width_cm,
            ))
        }
    };

    let markup = quantize(variant.markup_percentage);
    let price = layout.cost * (Decimal::ONE + markup / Decimal::ONE_HUNDRED);

    Ok(MaterialFit {
        material_name: material.name.clone(),
        variant_id: variant.id,
        roll_width_cm: quantize(variant.width_cm),
        unit: variant.unit.clone(),
        num_panels: layout.num_panels,
        panel_width_cm: layout.panel_width_cm,
        panels_per_row: layout.panels_per_row,
        rows: layout.rows,
        total_length_cm: layout.total_length_cm,
        area_m2: layout.area_m2,
        cost: layout.cost,
        price,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Material;
    use rust_decimal_macros::dec;

    fn paper_variant(id: u32, width_cm: Decimal, cost: Decimal) -> MaterialVariant {
        MaterialVariant::new(id, 1, width_cm, cost, "m2")
            .with_markup(dec!(100.00))
            .with_edge_margin(dec!(2.0))
    }

    fn paper_catalog(variants: Vec<MaterialVariant>) -> CatalogSnapshot {
        CatalogSnapshot::new().with_material(Material::new(1, "Latex Paper"), variants)
    }

    fn gross(width_cm: Decimal, height_cm: Decimal) -> GrossDimensions {
        GrossDimensions { width_cm, height_cm }
    }

    #[test]
    fn test_unsplit_layout() {
        let catalog = paper_catalog(vec![paper_variant(1, dec!(100), dec!(20.00))]);
        let fit = select_best_fit(&catalog, 1, gross(dec!(91), dec!(51)), 1, dec!(2.0)).unwrap();

        // 91 <= 96 printable: one panel at its own width, one row of 51 cm
        assert_eq!(fit.num_panels, 1);
        assert_eq!(fit.panel_width_cm, dec!(91));
        assert_eq!(fit.panels_per_row, 1);
        assert_eq!(fit.rows, 1);
        assert_eq!(fit.total_length_cm, dec!(51));
        // area = 1.00 m * 0.51 m = 0.51 m²; cost = 0.51 * 20 = 10.20
        assert_eq!(fit.area_m2, dec!(0.51));
        assert_eq!(fit.cost, dec!(10.2));
        assert_eq!(fit.price, dec!(20.4));
    }

    #[test]
    fn test_split_layout_panel_geometry() {
        let catalog = paper_catalog(vec![paper_variant(2, dec!(137), dec!(28.00))]);
        let fit = select_best_fit(&catalog, 1, gross(dec!(300), dec!(100)), 1, dec!(2.0)).unwrap();

        // printable 133; ceil(300/133) = 3 panels of 300/3 + 2 = 102 cm
        assert_eq!(fit.num_panels, 3);
        assert_eq!(fit.panel_width_cm, dec!(102));
        assert_eq!(fit.panels_per_row, 1);
        assert_eq!(fit.rows, 3);
        assert_eq!(fit.total_length_cm, dec!(300));
        // area = 1.37 * 3.00 = 4.11 m²; cost = 4.11 * 28 = 115.08
        assert_eq!(fit.area_m2, dec!(4.11));
        assert_eq!(fit.cost, dec!(115.08));
    }

    #[test]
    fn test_quantity_packs_rows() {
        let catalog = paper_catalog(vec![paper_variant(2, dec!(137), dec!(28.00))]);
        // 60 cm panels: two fit per row on 133 cm printable width.
        let fit = select_best_fit(&catalog, 1, gross(dec!(60), dec!(50)), 5, dec!(2.0)).unwrap();
        assert_eq!(fit.panels_per_row, 2);
        // 5 panel instances / 2 per row = 3 rows
        assert_eq!(fit.rows, 3);
        assert_eq!(fit.total_length_cm, dec!(150));
    }

    #[test]
    fn test_overlap_can_make_variant_infeasible() {
        let catalog = paper_catalog(vec![paper_variant(1, dec!(100), dec!(20.00))]);
        // 190/96 -> 2 panels of 95 + 2 = 97 cm, wider than the 96 cm
        // printable width, so nothing fits a row.
        let result = select_best_fit(&catalog, 1, gross(dec!(190), dec!(100)), 1, dec!(2.0));
        assert_eq!(
            result,
            Err(QuoteError::infeasible_material("Latex Paper", dec!(190)))
        );
    }

    #[test]
    fn test_cheapest_variant_wins_and_flips_with_quantity() {
        let catalog = paper_catalog(vec![
            paper_variant(1, dec!(100), dec!(20.00)),
            paper_variant(2, dec!(137), dec!(28.00)),
        ]);

        // One 60x50 panel: narrow roll wastes less (10.00 vs 19.18).
        let fit = select_best_fit(&catalog, 1, gross(dec!(60), dec!(50)), 1, dec!(2.0)).unwrap();
        assert_eq!(fit.variant_id, 1);
        assert_eq!(fit.cost, dec!(10.00));

        // Two panels: the wide roll packs both in one row (19.18 vs 20.00).
        let fit = select_best_fit(&catalog, 1, gross(dec!(60), dec!(50)), 2, dec!(2.0)).unwrap();
        assert_eq!(fit.variant_id, 2);
        assert_eq!(fit.cost, dec!(19.18));
    }

    #[test]
    fn test_equal_cost_tie_keeps_first_variant() {
        let catalog = paper_catalog(vec![
            paper_variant(7, dec!(100), dec!(20.00)),
            paper_variant(8, dec!(100), dec!(20.00)),
        ]);
        let fit = select_best_fit(&catalog, 1, gross(dec!(90), dec!(50)), 1, dec!(2.0)).unwrap();
        assert_eq!(fit.variant_id, 7);
    }

    #[test]
    fn test_inactive_variants_are_skipped() {
        let catalog = paper_catalog(vec![
            paper_variant(1, dec!(100), dec!(1.00)).inactive(),
            paper_variant(2, dec!(100), dec!(20.00)),
        ]);
        let fit = select_best_fit(&catalog, 1, gross(dec!(90), dec!(50)), 1, dec!(2.0)).unwrap();
        assert_eq!(fit.variant_id, 2);

        let catalog = paper_catalog(vec![paper_variant(1, dec!(100), dec!(1.00)).inactive()]);
        let result = select_best_fit(&catalog, 1, gross(dec!(90), dec!(50)), 1, dec!(2.0));
        assert!(matches!(result, Err(QuoteError::InfeasibleMaterial { .. })));
    }

    #[test]
    fn test_margin_eating_roll_is_skipped_not_crashed() {
        let catalog = paper_catalog(vec![
            MaterialVariant::new(1, 1, dec!(3), dec!(5.00), "m2").with_edge_margin(dec!(2.0)),
        ]);
        let result = select_best_fit(&catalog, 1, gross(dec!(50), dec!(50)), 1, dec!(2.0));
        assert!(matches!(result, Err(QuoteError::InfeasibleMaterial { .. })));
    }

    #[test]
    fn test_missing_material_fails_closed() {
        let catalog = CatalogSnapshot::new();
        let result = select_best_fit(&catalog, 9, gross(dec!(50), dec!(50)), 1, dec!(2.0));
        assert_eq!(result, Err(QuoteError::MissingMaterial { material_id: 9 }));
    }

    #[test]
    fn test_panel_count_is_monotonic_in_width() {
        let variant = paper_variant(1, dec!(100), dec!(20.00));
        let mut last = 0u32;
        for step in 1..=40 {
            let width = Decimal::from(step * 10);
            let layout =
                layout_for_variant(&variant, gross(width, dec!(50)), 1, dec!(2.0)).unwrap();
            if let Some(layout) = layout {
                assert!(
                    layout.num_panels >= last,
                    "panel count dropped at width {width}"
                );
                last = layout.num_panels;
            }
        }
    }
}
