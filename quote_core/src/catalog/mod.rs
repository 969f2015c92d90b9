//! # Catalog
//!
//! Reference data the engine prices against: materials with their roll
//! variants, finishing processes, and product templates. The engine never
//! talks to a database; the host hands it a [`CatalogSnapshot`] and every
//! calculation is a pure function of snapshot plus request.
//!
//! Lookups are fail-closed: a component that references a missing catalog
//! entity aborts the calculation with a [`crate::QuoteError`] instead of
//! being skipped. A silently incomplete quote is the one failure mode this
//! crate refuses to have.
//!
//! ## Example
//!
//! ```rust
//! use quote_core::catalog::{CatalogSnapshot, Material, MaterialVariant};
//! use rust_decimal_macros::dec;
//!
//! let catalog = CatalogSnapshot::new().with_material(
//!     Material::new(1, "Mesh Banner"),
//!     vec![MaterialVariant::new(1, 1, dec!(160), dec!(12.50), "m2")],
//! );
//!
//! assert_eq!(catalog.material(1).unwrap().name, "Mesh Banner");
//! assert!(catalog.material(2).is_err());
//! ```

pub mod material;
pub mod process;
pub mod sample;
pub mod template;

pub use material::{Material, MaterialVariant};
pub use process::{Process, ProcessMethod};
pub use sample::sample_catalog;
pub use template::{ComponentKind, ProductTemplate, TemplateComponent};

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::{QuoteError, QuoteResult};

/// An immutable view of the catalog, keyed for the lookups the engine
/// performs. Variants are grouped by material id because variant choice is
/// always a scan within one material.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    pub materials: HashMap<u32, Material>,
    pub variants: HashMap<u32, Vec<MaterialVariant>>,
    pub processes: HashMap<u32, Process>,
    pub templates: HashMap<u32, ProductTemplate>,
}

impl CatalogSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a material together with its roll variants
    pub fn with_material(mut self, material: Material, variants: Vec<MaterialVariant>) -> Self {
        self.variants.insert(material.id, variants);
        self.materials.insert(material.id, material);
        self
    }

    pub fn with_process(mut self, process: Process) -> Self {
        self.processes.insert(process.id, process);
        self
    }

    pub fn with_template(mut self, template: ProductTemplate) -> Self {
        self.templates.insert(template.id, template);
        self
    }

    pub fn material(&self, material_id: u32) -> QuoteResult<&Material> {
        self.materials
            .get(&material_id)
            .ok_or(QuoteError::MissingMaterial { material_id })
    }

    /// Roll variants stocked for a material. Unknown ids yield an empty
    /// slice; whether that is an error is the caller's call (for pricing
    /// it surfaces as an infeasible material).
    pub fn variants_of(&self, material_id: u32) -> &[MaterialVariant] {
        self.variants
            .get(&material_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn process(&self, process_id: u32) -> QuoteResult<&Process> {
        self.processes
            .get(&process_id)
            .ok_or(QuoteError::MissingProcess { process_id })
    }

    pub fn template(&self, template_id: u32) -> QuoteResult<&ProductTemplate> {
        self.templates
            .get(&template_id)
            .ok_or(QuoteError::MissingTemplate { template_id })
    }
}
