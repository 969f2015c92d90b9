//! # Product Templates
//!
//! A template is a named bill of components: which material gets printed
//! and which finishing processes apply, with per-product margins and the
//! default overlap used when the print must be split into panels.
//!
//! Components reference exactly one catalog entity through the tagged
//! [`ComponentKind`] - a component is either a material slot or a process
//! slot, never both, never neither.
//!
//! ## Example
//!
//! ```rust
//! use quote_core::catalog::{ProductTemplate, TemplateComponent};
//! use rust_decimal_macros::dec;
//!
//! let wallpaper = ProductTemplate::new(1, "Photo Wallpaper")
//!     .with_margins(dec!(0.5), dec!(0.5))
//!     .with_overlap(dec!(1.5))
//!     .with_component(TemplateComponent::material(1, 1))
//!     .with_component(TemplateComponent::process(2, 1).with_sort_order(1));
//!
//! assert_eq!(wallpaper.components.len(), 2);
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// What a template component points at.
///
/// ## JSON Serialization
///
/// Kinds serialize with a "type" discriminator:
///
/// ```json
/// { "type": "Material", "material_id": 1 }
/// { "type": "Process", "process_id": 2 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ComponentKind {
    /// A printed material slot; the engine picks the cheapest roll variant
    Material { material_id: u32 },
    /// A finishing process slot
    Process { process_id: u32 },
}

/// One line of a template's bill of components.
///
/// Required components are always priced. Optional components
/// (`is_required == false`) are priced only when the request selects them
/// by component id; `group_name`/`option_label` exist so a UI can present
/// them as choices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateComponent {
    pub id: u32,
    #[serde(flatten)]
    pub kind: ComponentKind,
    #[serde(default = "default_required")]
    pub is_required: bool,
    #[serde(default)]
    pub group_name: Option<String>,
    #[serde(default)]
    pub option_label: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
}

fn default_required() -> bool {
    true
}

impl TemplateComponent {
    /// Create a required material component
    pub fn material(id: u32, material_id: u32) -> Self {
        TemplateComponent {
            id,
            kind: ComponentKind::Material { material_id },
            is_required: true,
            group_name: None,
            option_label: None,
            sort_order: 0,
        }
    }

    /// Create a required process component
    pub fn process(id: u32, process_id: u32) -> Self {
        TemplateComponent {
            id,
            kind: ComponentKind::Process { process_id },
            is_required: true,
            group_name: None,
            option_label: None,
            sort_order: 0,
        }
    }

    /// Mark this component as optional, grouped for UI selection
    pub fn optional(
        mut self,
        group_name: impl Into<String>,
        option_label: impl Into<String>,
    ) -> Self {
        self.is_required = false;
        self.group_name = Some(group_name.into());
        self.option_label = Some(option_label.into());
        self
    }

    pub fn with_sort_order(mut self, sort_order: i32) -> Self {
        self.sort_order = sort_order;
        self
    }
}

/// A quotable product: components plus product-level allowances.
///
/// `default_margin_w_cm`/`default_margin_h_cm` are per-side bleed added to
/// the customer's net format. `default_overlap_cm` is the panel overlap
/// used when a print wider than the roll is split, unless the request
/// overrides it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductTemplate {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub default_margin_w_cm: Decimal,
    #[serde(default)]
    pub default_margin_h_cm: Decimal,
    #[serde(default = "default_overlap")]
    pub default_overlap_cm: Decimal,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub components: Vec<TemplateComponent>,
}

fn default_overlap() -> Decimal {
    dec!(1.0)
}

fn default_active() -> bool {
    true
}

impl ProductTemplate {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        ProductTemplate {
            id,
            name: name.into(),
            description: None,
            default_margin_w_cm: Decimal::ZERO,
            default_margin_h_cm: Decimal::ZERO,
            default_overlap_cm: default_overlap(),
            is_active: true,
            components: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_margins(mut self, margin_w_cm: Decimal, margin_h_cm: Decimal) -> Self {
        self.default_margin_w_cm = margin_w_cm;
        self.default_margin_h_cm = margin_h_cm;
        self
    }

    pub fn with_overlap(mut self, overlap_cm: Decimal) -> Self {
        self.default_overlap_cm = overlap_cm;
        self
    }

    pub fn with_component(mut self, component: TemplateComponent) -> Self {
        self.components.push(component);
        self
    }

    /// Components to price for a request: all required ones plus the
    /// optional ones whose ids appear in `selected`, in `sort_order`
    /// (ties keep insertion order).
    pub fn active_components(&self, selected: &[u32]) -> Vec<&TemplateComponent> {
        let mut active: Vec<&TemplateComponent> = self
            .components
            .iter()
            .filter(|c| c.is_required || selected.contains(&c.id))
            .collect();
        active.sort_by_key(|c| c.sort_order);
        active
    }
}
