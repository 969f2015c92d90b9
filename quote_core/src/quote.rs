//! # Quote Assembly
//!
//! Multi-item quoting on top of the single-item engine: price a list of
//! item specs against one catalog snapshot and roll the totals up into a
//! [`QuoteSummary`]. Also home to [`QuoteStatus`], the lifecycle a stored
//! quote moves through in a host application.
//!
//! Pricing a quote is all-or-nothing. One unpriceable item fails the whole
//! quote; a partial quote with silently missing lines is never produced.
//!
//! ## Example
//!
//! ```rust
//! use quote_core::catalog::sample_catalog;
//! use quote_core::quote::{price_quote, QuoteItemSpec};
//! use quote_core::CalculationRequest;
//! use rust_decimal_macros::dec;
//!
//! let catalog = sample_catalog();
//! let items = vec![
//!     QuoteItemSpec::new(CalculationRequest::new(dec!(90), dec!(50), 1).with_template(1)),
//!     QuoteItemSpec::new(CalculationRequest::new(dec!(100), dec!(100), 1).with_template(2)),
//! ];
//!
//! let summary = price_quote(&catalog, &items).unwrap();
//! assert_eq!(summary.total_price_net, dec!(166.65));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::CatalogSnapshot;
use crate::engine::{calculate, CalculationRequest, CalculationResult};
use crate::errors::QuoteResult;

/// One requested quote line: a calculation request plus an optional
/// display name. Without a name the line is labeled from the template (or
/// as a custom product).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteItemSpec {
    #[serde(default)]
    pub product_name: Option<String>,
    pub request: CalculationRequest,
}

impl QuoteItemSpec {
    pub fn new(request: CalculationRequest) -> Self {
        QuoteItemSpec {
            product_name: None,
            request,
        }
    }

    pub fn named(product_name: impl Into<String>, request: CalculationRequest) -> Self {
        QuoteItemSpec {
            product_name: Some(product_name.into()),
            request,
        }
    }
}

/// A priced quote line: the resolved name plus the full breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteItem {
    pub product_name: String,
    pub result: CalculationResult,
}

/// Totals for a priced quote.
///
/// Totals sum the items' externalized money values, so the summary always
/// matches what the individual lines show.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteSummary {
    pub items: Vec<QuoteItem>,
    pub total_price_net: Decimal,
    pub total_cost_cogs: Decimal,
    /// Absolute margin: price minus cost
    pub margin_value: Decimal,
}

/// Lifecycle state of a stored quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuoteStatus {
    Draft,
    Sent,
    Accepted,
    Rejected,
    Completed,
}

impl QuoteStatus {
    pub const ALL: [QuoteStatus; 5] = [
        QuoteStatus::Draft,
        QuoteStatus::Sent,
        QuoteStatus::Accepted,
        QuoteStatus::Rejected,
        QuoteStatus::Completed,
    ];

    /// Human-readable name for UI display
    pub fn display_name(&self) -> &'static str {
        match self {
            QuoteStatus::Draft => "Draft",
            QuoteStatus::Sent => "Sent",
            QuoteStatus::Accepted => "Accepted",
            QuoteStatus::Rejected => "Rejected",
            QuoteStatus::Completed => "Completed",
        }
    }

    /// Whether a quote may move from this status to `next`. Drafts go
    /// out, sent quotes get a decision, accepted quotes get produced.
    pub fn can_transition_to(&self, next: QuoteStatus) -> bool {
        matches!(
            (self, next),
            (QuoteStatus::Draft, QuoteStatus::Sent)
                | (QuoteStatus::Sent, QuoteStatus::Accepted)
                | (QuoteStatus::Sent, QuoteStatus::Rejected)
                | (QuoteStatus::Accepted, QuoteStatus::Completed)
        )
    }

    /// Terminal statuses have no outgoing transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(self, QuoteStatus::Rejected | QuoteStatus::Completed)
    }
}

/// Price every item of a quote against the snapshot.
///
/// Fails on the first unpriceable item with that item's error.
pub fn price_quote(
    snapshot: &CatalogSnapshot,
    items: &[QuoteItemSpec],
) -> QuoteResult<QuoteSummary> {
    let mut priced = Vec::with_capacity(items.len());
    let mut total_price_net = Decimal::ZERO;
    let mut total_cost_cogs = Decimal::ZERO;

    for spec in items {
        let result = calculate(snapshot, &spec.request)?;
        let product_name = match &spec.product_name {
            Some(name) => name.clone(),
            None => result
                .client_view
                .first()
                .map(|line| line.description.clone())
                .unwrap_or_else(|| "Custom product".to_string()),
        };

        total_price_net += result.total_price_net;
        total_cost_cogs += result.total_cost_cogs;
        priced.push(QuoteItem { product_name, result });
    }

    Ok(QuoteSummary {
        items: priced,
        total_price_net,
        total_cost_cogs,
        margin_value: total_price_net - total_cost_cogs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample_catalog;
    use crate::errors::QuoteError;
    use rust_decimal_macros::dec;

    #[test]
    fn test_quote_totals_sum_item_totals() {
        let catalog = sample_catalog();
        let items = vec![
            QuoteItemSpec::new(CalculationRequest::new(dec!(90), dec!(50), 1).with_template(1)),
            QuoteItemSpec::new(CalculationRequest::new(dec!(100), dec!(100), 1).with_template(2)),
        ];
        let summary = price_quote(&catalog, &items).unwrap();

        assert_eq!(summary.items.len(), 2);
        // 45.20 + 121.45 and 26.16 + 68.71
        assert_eq!(summary.total_price_net, dec!(166.65));
        assert_eq!(summary.total_cost_cogs, dec!(94.87));
        assert_eq!(summary.margin_value, dec!(71.78));
    }

    #[test]
    fn test_item_names_resolve_from_template() {
        let catalog = sample_catalog();
        let items = vec![
            QuoteItemSpec::new(CalculationRequest::new(dec!(90), dec!(50), 1).with_template(1)),
            QuoteItemSpec::named(
                "Lobby backdrop",
                CalculationRequest::new(dec!(100), dec!(100), 1).with_template(2),
            ),
            QuoteItemSpec::new(CalculationRequest::new(dec!(40), dec!(40), 1)),
        ];
        let summary = price_quote(&catalog, &items).unwrap();

        assert_eq!(summary.items[0].product_name, "Photo Wallpaper");
        assert_eq!(summary.items[1].product_name, "Lobby backdrop");
        assert_eq!(summary.items[2].product_name, "Custom product");
    }

    #[test]
    fn test_one_bad_item_fails_the_quote() {
        let catalog = sample_catalog();
        let items = vec![
            QuoteItemSpec::new(CalculationRequest::new(dec!(90), dec!(50), 1).with_template(1)),
            QuoteItemSpec::new(CalculationRequest::new(dec!(90), dec!(50), 1).with_template(42)),
        ];
        assert_eq!(
            price_quote(&catalog, &items),
            Err(QuoteError::MissingTemplate { template_id: 42 })
        );
    }

    #[test]
    fn test_empty_quote_is_zero() {
        let catalog = sample_catalog();
        let summary = price_quote(&catalog, &[]).unwrap();
        assert!(summary.items.is_empty());
        assert_eq!(summary.total_price_net, Decimal::ZERO);
        assert_eq!(summary.margin_value, Decimal::ZERO);
    }

    #[test]
    fn test_status_transitions() {
        assert!(QuoteStatus::Draft.can_transition_to(QuoteStatus::Sent));
        assert!(QuoteStatus::Sent.can_transition_to(QuoteStatus::Accepted));
        assert!(QuoteStatus::Sent.can_transition_to(QuoteStatus::Rejected));
        assert!(QuoteStatus::Accepted.can_transition_to(QuoteStatus::Completed));

        assert!(!QuoteStatus::Draft.can_transition_to(QuoteStatus::Accepted));
        assert!(!QuoteStatus::Completed.can_transition_to(QuoteStatus::Draft));
        assert!(!QuoteStatus::Rejected.can_transition_to(QuoteStatus::Sent));

        assert!(QuoteStatus::Rejected.is_terminal());
        assert!(QuoteStatus::Completed.is_terminal());
        assert!(!QuoteStatus::Sent.is_terminal());
    }

    #[test]
    fn test_status_wire_format() {
        let json = serde_json::to_string(&QuoteStatus::Accepted).unwrap();
        assert_eq!(json, "\"ACCEPTED\"");
    }
}
