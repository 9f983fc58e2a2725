//! Bilateral agreements and partner trust.
//!
//! An [`Agreement`] is a candidate contract to either buy one batch of the
//! input product or sell one batch of the output product at a fixed future
//! time, quantity and unit price, between the calling agent and exactly one
//! counterparty. The negotiation runtime produces these; the signer decides
//! which to commit to.
//!
//! Counterparty reliability comes from an external trust subsystem as a
//! [`TrustMap`]: agent id to probability that the agent honours its side.
//! Both revenue and cost are discounted by that probability.

use crate::error::{TactError, TactResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Trust probabilities keyed by agent id. Values must lie in `[0, 1]`.
pub type TrustMap = HashMap<String, f64>;

/// A candidate bilateral agreement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agreement {
    /// Number of units traded if the agreement executes.
    pub quantity: usize,
    /// Delivery time step.
    pub time: usize,
    /// Price per unit.
    pub unit_price: f64,
    /// True for a buy of the input product, false for a sell of the output.
    pub is_buy: bool,
    /// The two parties, one of which must be the calling agent.
    pub partners: [String; 2],
}

impl Agreement {
    /// Agreement to buy `quantity` input units at `time`.
    pub fn buy(
        quantity: usize,
        time: usize,
        unit_price: f64,
        first: impl Into<String>,
        second: impl Into<String>,
    ) -> Self {
        Self {
            quantity,
            time,
            unit_price,
            is_buy: true,
            partners: [first.into(), second.into()],
        }
    }

    /// Agreement to sell `quantity` output units at `time`.
    pub fn sell(
        quantity: usize,
        time: usize,
        unit_price: f64,
        first: impl Into<String>,
        second: impl Into<String>,
    ) -> Self {
        Self {
            quantity,
            time,
            unit_price,
            is_buy: false,
            partners: [first.into(), second.into()],
        }
    }

    /// Check the numeric fields of the agreement itself.
    pub fn validate(&self) -> TactResult<()> {
        if self.quantity == 0 {
            return Err(TactError::Validation(
                "agreement quantity must be positive, got 0".into(),
            ));
        }
        if !self.unit_price.is_finite() || self.unit_price < 0.0 {
            return Err(TactError::Validation(format!(
                "agreement unit_price must be finite and non-negative, got {}",
                self.unit_price
            )));
        }
        Ok(())
    }
}

/// Look up the trust probability of the counterparty of `agreement`.
///
/// Validates the partner structure: exactly two distinct partners, one of
/// them equal to `agent_id`, the other present in the trust table with a
/// probability in `[0, 1]`.
pub fn partner_trust(
    agent_id: &str,
    agreement: &Agreement,
    trust_probabilities: &TrustMap,
) -> TactResult<f64> {
    let [first, second] = &agreement.partners;
    if first == second {
        return Err(TactError::Validation(format!(
            "agreement partners must be distinct, got [{first:?}, {second:?}]"
        )));
    }
    let partner = if first == agent_id {
        second
    } else if second == agent_id {
        first
    } else {
        return Err(TactError::Validation(format!(
            "agreement partners [{first:?}, {second:?}] do not include the signing agent {agent_id:?}"
        )));
    };
    let trust = trust_probabilities.get(partner).copied().ok_or_else(|| {
        TactError::Validation(format!("partner {partner:?} missing from the trust table"))
    })?;
    if !(0.0..=1.0).contains(&trust) {
        return Err(TactError::Validation(format!(
            "trust probability for partner {partner:?} must be in [0, 1], got {trust}"
        )));
    }
    Ok(trust)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trust_table() -> TrustMap {
        TrustMap::from([("OTHER".to_string(), 0.75)])
    }

    #[test]
    fn test_partner_trust_lookup() {
        let a = Agreement::sell(1, 6, 110.0, "Monty", "OTHER");
        assert_eq!(partner_trust("Monty", &a, &trust_table()).unwrap(), 0.75);

        // Partner order does not matter.
        let b = Agreement::buy(1, 4, 10.0, "OTHER", "Monty");
        assert_eq!(partner_trust("Monty", &b, &trust_table()).unwrap(), 0.75);
    }

    #[test]
    fn test_duplicate_partners_rejected() {
        let a = Agreement::sell(1, 2, 5.0, "Monty", "Monty");
        let err = partner_trust("Monty", &a, &trust_table()).unwrap_err();
        assert!(err.to_string().contains("distinct"));
    }

    #[test]
    fn test_agent_must_be_a_partner() {
        let a = Agreement::sell(1, 2, 5.0, "ALPHA", "OTHER");
        let err = partner_trust("Monty", &a, &trust_table()).unwrap_err();
        assert!(err.to_string().contains("Monty"));
    }

    #[test]
    fn test_unknown_partner_rejected() {
        let a = Agreement::sell(1, 2, 5.0, "Monty", "STRANGER");
        let err = partner_trust("Monty", &a, &trust_table()).unwrap_err();
        assert!(err.to_string().contains("STRANGER"));
    }

    #[test]
    fn test_trust_out_of_range_rejected() {
        let a = Agreement::sell(1, 2, 5.0, "Monty", "OTHER");
        let bad = TrustMap::from([("OTHER".to_string(), 1.5)]);
        let err = partner_trust("Monty", &a, &bad).unwrap_err();
        assert!(err.to_string().contains("[0, 1]"));
    }

    #[test]
    fn test_agreement_field_validation() {
        let zero_quantity = Agreement::buy(0, 1, 5.0, "Monty", "OTHER");
        assert!(zero_quantity.validate().is_err());

        let negative_price = Agreement::buy(1, 1, -2.0, "Monty", "OTHER");
        assert!(negative_price.validate().is_err());

        let fine = Agreement::buy(1, 1, 2.0, "Monty", "OTHER");
        assert!(fine.validate().is_ok());
    }
}
