//! # Sample Catalog
//!
//! A small realistic catalog for demos and tests: two print materials
//! (one of them stocked in two roll widths), two finishing processes, and
//! two templates including an optional component.

use rust_decimal_macros::dec;

use super::{
    CatalogSnapshot, Material, MaterialVariant, Process, ProcessMethod, ProductTemplate,
    TemplateComponent,
};

/// Build the demo catalog.
///
/// Latex paper comes on 100 cm and 137 cm rolls so variant optimization is
/// observable; the magnetic board template carries an optional lamination
/// component.
pub fn sample_catalog() -> CatalogSnapshot {
    CatalogSnapshot::new()
        .with_material(
            Material::new(1, "Latex Paper").with_category("Print media"),
            vec![
                MaterialVariant::new(1, 1, dec!(100), dec!(20.00), "m2")
                    .with_markup(dec!(100.00))
                    .with_edge_margin(dec!(2.0)),
                MaterialVariant::new(2, 1, dec!(137), dec!(28.00), "m2")
                    .with_markup(dec!(100.00))
                    .with_edge_margin(dec!(2.0)),
            ],
        )
        .with_material(
            Material::new(2, "Magnetic Foil").with_category("Specialty media"),
            vec![MaterialVariant::new(3, 2, dec!(140), dec!(35.00), "m2")
                .with_markup(dec!(80.00))
                .with_edge_margin(dec!(1.0))],
        )
        .with_process(
            Process::new(1, "CNC Cutting", ProcessMethod::Linear, dec!(5.00))
                .with_internal_cost(dec!(2.00))
                .with_setup_fee(dec!(10.00))
                .with_margins(dec!(0.5), dec!(0.5))
                .with_unit("mb"),
        )
        .with_process(
            Process::new(2, "Lamination", ProcessMethod::Area, dec!(15.00))
                .with_internal_cost(dec!(8.00))
                .with_setup_fee(dec!(5.00))
                .with_unit("m2"),
        )
        .with_template(
            ProductTemplate::new(1, "Photo Wallpaper")
                .with_description("Panel-split wall print on latex paper")
                .with_margins(dec!(0.5), dec!(0.5))
                .with_overlap(dec!(1.5))
                .with_component(TemplateComponent::material(1, 1))
                .with_component(TemplateComponent::process(2, 1).with_sort_order(1)),
        )
        .with_template(
            ProductTemplate::new(2, "Magnetic Board")
                .with_description("Contour-cut magnetic foil board")
                .with_margins(dec!(1.0), dec!(1.0))
                .with_overlap(dec!(2.0))
                .with_component(TemplateComponent::material(3, 2))
                .with_component(
                    TemplateComponent::process(4, 2)
                        .optional("Finish", "With lamination")
                        .with_sort_order(1),
                )
                .with_component(TemplateComponent::process(5, 1).with_sort_order(2)),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ComponentKind;

    #[test]
    fn test_sample_catalog_is_consistent() {
        let catalog = sample_catalog();
        // Every component reference resolves.
        for template in catalog.templates.values() {
            for component in &template.components {
                match component.kind {
                    ComponentKind::Material { material_id } => {
                        assert!(catalog.material(material_id).is_ok());
                        assert!(!catalog.variants_of(material_id).is_empty());
                    }
                    ComponentKind::Process { process_id } => {
                        assert!(catalog.process(process_id).is_ok());
                    }
                }
            }
        }
    }

    #[test]
    fn test_sample_catalog_shape() {
        let catalog = sample_catalog();
        assert_eq!(catalog.materials.len(), 2);
        assert_eq!(catalog.processes.len(), 2);
        assert_eq!(catalog.templates.len(), 2);
        assert_eq!(catalog.variants_of(1).len(), 2);
        let board = catalog.template(2).unwrap();
        assert_eq!(board.components.len(), 3);
        assert!(!board.components[1].is_required);
    }
}
