//! # Quote Calculation
//!
//! The orchestrator: resolves the template, walks its active components in
//! order, and accumulates the two parallel money streams (cost of goods
//! and sell price) into a [`CalculationResult`].
//!
//! Component order matters. Panel geometry established by a material
//! component (how many panels, whether the print is split) flows into
//! every process component that comes after it, which is how a cutting
//! process ends up billed for panel seams.
//!
//! ## Example
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
//! assert_eq!(result.total_price_net, dec!(45.20));
//! assert_eq!(result.margin_percentage, dec!(42.1));
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogSnapshot, ComponentKind, ProductTemplate};
use crate::errors::{QuoteError, QuoteResult};
use crate::money::{quantize, round_half_up, round_money, round_percent};

use super::dimensions::{resolve_gross_dimensions, GrossDimensions};
use super::material_fit::select_best_fit;
use super::process_quantity::{process_cost, process_price, process_quantity, PanelGeometry};

/// Engine-level fallbacks, applied only where neither the request nor the
/// template provides a value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineDefaults {
    /// Panel overlap used for template-less requests (cm)
    pub overlap_cm: Decimal,
}

impl Default for EngineDefaults {
    fn default() -> Self {
        EngineDefaults {
            overlap_cm: dec!(2.0),
        }
    }
}

/// What the customer asked for.
///
/// Dimensions are the **net** format; the engine adds all allowances
/// itself. `selected_options` names optional template components by id;
/// unknown ids are ignored rather than rejected, so a stale UI selection
/// cannot block a quote.
///
/// ## JSON Example
///
/// ```json
/// {
///   "width_cm": "120",
///   "height_cm": "80",
///   "quantity": 2,
///   "template_id": 2,
///   "selected_options": [4],
///   "overlap_override_cm": "3.0"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Net width in cm
    pub width_cm: Decimal,

    /// Net height in cm
    pub height_cm: Decimal,

    /// Number of identical pieces
    pub quantity: u32,

    /// Template to price against; absent for ad-hoc quoting
    #[serde(default)]
    pub template_id: Option<u32>,

    /// Ids of optional template components to include
    #[serde(default)]
    pub selected_options: Vec<u32>,

    /// Panel overlap override in cm; explicit zero is honored
    #[serde(default)]
    pub overlap_override_cm: Option<Decimal>,
}

impl CalculationRequest {
    pub fn new(width_cm: Decimal, height_cm: Decimal, quantity: u32) -> Self {
        CalculationRequest {
            width_cm,
            height_cm,
            quantity,
            template_id: None,
            selected_options: Vec::new(),
            overlap_override_cm: None,
        }
    }

    pub fn with_template(mut self, template_id: u32) -> Self {
        self.template_id = Some(template_id);
        self
    }

    pub fn with_selected_option(mut self, component_id: u32) -> Self {
        self.selected_options.push(component_id);
        self
    }

    pub fn with_overlap_override(mut self, overlap_cm: Decimal) -> Self {
        self.overlap_override_cm = Some(overlap_cm);
        self
    }

    /// Validate request parameters.
    pub fn validate(&self) -> QuoteResult<()> {
        if self.width_cm <= Decimal::ZERO {
            return Err(QuoteError::invalid_request(
                "width_cm",
                self.width_cm.to_string(),
                "Width must be positive",
            ));
        }
        if self.height_cm <= Decimal::ZERO {
            return Err(QuoteError::invalid_request(
                "height_cm",
                self.height_cm.to_string(),
                "Height must be positive",
            ));
        }
        if self.quantity == 0 {
            return Err(QuoteError::invalid_request(
                "quantity",
                "0",
                "Quantity must be at least 1",
            ));
        }
        if let Some(overlap) = self.overlap_override_cm {
            if overlap < Decimal::ZERO {
                return Err(QuoteError::invalid_request(
                    "overlap_override_cm",
                    overlap.to_string(),
                    "Overlap cannot be negative",
                ));
            }
        }
        Ok(())
    }
}

/// Whether a result line prices a material or a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LineKind {
    Material,
    Process,
}

/// Customer-facing summary line: one per quoted product, no internals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientLine {
    pub description: String,
    pub quantity: u32,
    pub total_net: Decimal,
}

/// Production-facing line: one per priced component, with the derived
/// quantity and layout details an operator needs to sanity-check a job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentLine {
    pub name: String,
    pub kind: LineKind,
    /// Billable quantity in `unit` (full precision, not display-rounded)
    pub quantity: Decimal,
    pub unit: String,
    /// Sell price for this component, externalized to money precision
    pub price_net: Decimal,
    pub details: String,
    /// True when this line came from a selected optional component
    pub is_optional: bool,
}

/// Complete pricing breakdown for one request.
///
/// ## JSON Example
///
/// ```json
/// {
///   "total_price_net": "45.20",
///   "total_cost_cogs": "26.16",
///   "margin_percentage": "42.1",
///   "gross_dimensions": { "width_cm": "92", "height_cm": "52" },
///   "is_split": false,
///   "num_panels": 1,
///   "overlap_used_cm": "1.5",
///   "client_view": [
///     { "description": "Photo Wallpaper", "quantity": 1, "total_net": "45.20" }
///   ],
///   "tech_view": [
///     {
///       "name": "Latex Paper (roll 100 cm)",
///       "kind": "MATERIAL",
///       "quantity": "0.52",
///       "unit": "m2",
///       "price_net": "20.8",
///       "details": "Panels: 1, overlap: 1.5 cm, panel width: 92 cm",
///       "is_optional": false
///     }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    // === Totals ===
    /// Net sell price across all components (money precision)
    pub total_price_net: Decimal,

    /// Cost of goods across all components (money precision)
    pub total_cost_cogs: Decimal,

    /// Margin as percent of price: (price - cost) / price * 100, one
    /// decimal place; zero when the price is zero
    pub margin_percentage: Decimal,

    // === Geometry ===
    /// Gross production format after all allowances
    pub gross_dimensions: GrossDimensions,

    /// Whether the print splits into multiple panels
    pub is_split: bool,

    /// Panel count from the last material laid out (1 = unsplit)
    pub num_panels: u32,

    /// Overlap that was in effect for this calculation (cm)
    pub overlap_used_cm: Decimal,

    // === Views ===
    /// Customer-facing lines
    pub client_view: Vec<ClientLine>,

    /// Production-facing lines, one per priced component
    pub tech_view: Vec<ComponentLine>,
}

/// Price a request against a catalog snapshot using stock defaults.
///
/// Pure function: same snapshot and request always produce the same
/// result, byte for byte once serialized.
pub fn calculate(
    snapshot: &CatalogSnapshot,
    request: &CalculationRequest,
) -> QuoteResult<CalculationResult> {
    calculate_with(snapshot, request, &EngineDefaults::default())
}

/// Price a request with explicit engine defaults.
pub fn calculate_with(
    snapshot: &CatalogSnapshot,
    request: &CalculationRequest,
    defaults: &EngineDefaults,
) -> QuoteResult<CalculationResult> {
    request.validate()?;

    let template = match request.template_id {
        Some(template_id) => Some(snapshot.template(template_id)?),
        None => None,
    };

    let overlap_cm = resolve_overlap(request, template, defaults);
    let gross = resolve_gross_dimensions(request.width_cm, request.height_cm, template, snapshot)?;

    let active = match template {
        Some(t) => t.active_components(&request.selected_options),
        None => Vec::new(),
    };

    let mut geometry = PanelGeometry::unsplit(gross, overlap_cm);
    let mut total_cost = Decimal::ZERO;
    let mut total_price = Decimal::ZERO;
    let mut tech_view = Vec::with_capacity(active.len());

    for component in active {
        match component.kind {
            ComponentKind::Material { material_id } => {
                let fit =
                    select_best_fit(snapshot, material_id, gross, request.quantity, overlap_cm)?;

                // Later processes inherit this material's panel layout.
                geometry = PanelGeometry {
                    gross,
                    num_panels: fit.num_panels,
                    is_split: fit.num_panels > 1,
                    overlap_cm,
                };

                total_cost += fit.cost;
                total_price += fit.price;
                tech_view.push(ComponentLine {
                    name: format!("{} (roll {} cm)", fit.material_name, fit.roll_width_cm),
                    kind: LineKind::Material,
                    quantity: fit.area_m2,
                    unit: fit.unit.clone(),
                    price_net: round_money(fit.price),
                    details: format!(
                        "Panels: {}, overlap: {} cm, panel width: {} cm",
                        fit.num_panels,
                        overlap_cm,
                        round_half_up(fit.panel_width_cm, 1),
                    ),
                    is_optional: !component.is_required,
                });
            }
            ComponentKind::Process { process_id } => {
                let process = snapshot.process(process_id)?;
                let billable_qty = process_quantity(process, &geometry, request.quantity)?;
                let cost = process_cost(process, billable_qty);
                let price = process_price(process, billable_qty);

                total_cost += cost;
                total_price += price;
                tech_view.push(ComponentLine {
                    name: process.name.clone(),
                    kind: LineKind::Process,
                    quantity: billable_qty,
                    unit: process.unit.clone(),
                    price_net: round_money(price),
                    details: format!(
                        "Method: {}, margin {} cm",
                        process.method.code(),
                        quantize(process.margin_w_cm),
                    ),
                    is_optional: !component.is_required,
                });
            }
        }
    }

    let margin_percentage = if total_price > Decimal::ZERO {
        round_percent((total_price - total_cost) / total_price * Decimal::ONE_HUNDRED)
    } else {
        Decimal::ZERO
    };

    let description = match template {
        Some(t) => t.name.clone(),
        None => "Custom product".to_string(),
    };

    Ok(CalculationResult {
        total_price_net: round_money(total_price),
        total_cost_cogs: round_money(total_cost),
        margin_percentage,
        gross_dimensions: gross,
        is_split: geometry.is_split,
        num_panels: geometry.num_panels,
        overlap_used_cm: overlap_cm,
        client_view: vec![ClientLine {
            description,
            quantity: request.quantity,
            total_net: round_money(total_price),
        }],
        tech_view,
    })
}

/// Overlap precedence: request override, then template default, then
/// engine default.
fn resolve_overlap(
    request: &CalculationRequest,
    template: Option<&ProductTemplate>,
    defaults: &EngineDefaults,
) -> Decimal {
    if let Some(overlap) = request.overlap_override_cm {
        return quantize(overlap);
    }
    match template {
        Some(t) => quantize(t.default_overlap_cm),
        None => quantize(defaults.overlap_cm),
    }
}
