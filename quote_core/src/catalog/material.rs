//! # Materials and Roll Variants
//!
//! A material (latex paper, magnetic foil, mesh banner) is stocked as one
//! or more roll variants. Variants of the same material differ in roll
//! width and therefore in cost per square meter; the engine picks whichever
//! variant produces the cheapest feasible layout for a given job.
//!
//! ## Example
//!
//! ```rust
//! use quote_core::catalog::{Material, MaterialVariant};
//! use rust_decimal_macros::dec;
//!
//! let paper = Material::new(1, "Latex Paper").with_category("Print media");
//! let roll = MaterialVariant::new(1, paper.id, dec!(100), dec!(20.00), "m2")
//!     .with_markup(dec!(100.00))
//!     .with_edge_margin(dec!(2.0));
//!
//! assert_eq!(roll.effective_width_cm(), dec!(96));
//! assert!(roll.is_usable());
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::money::quantize;

/// A stocked material, independent of roll width.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Material {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Material {
            id,
            name: name.into(),
            category: None,
            description: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A concrete roll of a material: one width, one cost rate, one markup.
///
/// `margin_w_cm` is the unprintable strip along each roll edge; the usable
/// width is `width_cm - 2 * margin_w_cm`. `cost_price_per_unit` is the
/// purchase cost per `unit` (typically m²), and `markup_percentage` turns
/// cost into sell price for this variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialVariant {
    pub id: u32,
    pub material_id: u32,
    pub width_cm: Decimal,
    pub cost_price_per_unit: Decimal,
    #[serde(default)]
    pub markup_percentage: Decimal,
    #[serde(default)]
    pub margin_w_cm: Decimal,
    pub unit: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl MaterialVariant {
    pub fn new(
        id: u32,
        material_id: u32,
        width_cm: Decimal,
        cost_price_per_unit: Decimal,
        unit: impl Into<String>,
    ) -> Self {
        MaterialVariant {
            id,
            material_id,
            width_cm,
            cost_price_per_unit,
            markup_percentage: Decimal::ZERO,
            margin_w_cm: Decimal::ZERO,
            unit: unit.into(),
            is_active: true,
        }
    }

    pub fn with_markup(mut self, markup_percentage: Decimal) -> Self {
        self.markup_percentage = markup_percentage;
        self
    }

    pub fn with_edge_margin(mut self, margin_w_cm: Decimal) -> Self {
        self.margin_w_cm = margin_w_cm;
        self
    }

    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// Printable width of this roll after subtracting both edge margins.
    ///
    /// Reads are normalized to input precision, so the result matches what
    /// the layout engine works with.
    pub fn effective_width_cm(&self) -> Decimal {
        quantize(self.width_cm) - quantize(self.margin_w_cm) * Decimal::TWO
    }

    /// Whether the roll has any printable width at all. A variant whose
    /// margins consume the full roll is treated as unusable, not as an
    /// error.
    pub fn is_usable(&self) -> bool {
        self.effective_width_cm() > Decimal::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_effective_width() {
        let roll = MaterialVariant::new(1, 1, dec!(137), dec!(28.00), "m2")
            .with_edge_margin(dec!(2.0));
        assert_eq!(roll.effective_width_cm(), dec!(133));
    }

    #[test]
    fn test_margins_consuming_roll_is_unusable() {
        let roll = MaterialVariant::new(1, 1, dec!(3), dec!(10.00), "m2")
            .with_edge_margin(dec!(2.0));
        assert_eq!(roll.effective_width_cm(), dec!(-1));
        assert!(!roll.is_usable());
    }

    #[test]
    fn test_defaults() {
        let roll = MaterialVariant::new(5, 2, dec!(140), dec!(35.00), "m2");
        assert_eq!(roll.markup_percentage, Decimal::ZERO);
        assert_eq!(roll.margin_w_cm, Decimal::ZERO);
        assert!(roll.is_active);
    }

    #[test]
    fn test_variant_deserializes_with_defaults() {
        let json = r#"{
            "id": 1,
            "material_id": 1,
            "width_cm": "100",
            "cost_price_per_unit": "20.00",
            "unit": "m2"
        }"#;
        let roll: MaterialVariant = serde_json::from_str(json).unwrap();
        assert!(roll.is_active);
        assert_eq!(roll.margin_w_cm, Decimal::ZERO);
    }
}
