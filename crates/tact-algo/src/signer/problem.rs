//! Signer problem preparation
//!
//! Validates the agreement batch and splits it into time-ordered buy and
//! sell sides ready for the MILP (or the greedy baseline).

use tact_core::{partner_trust, Agreement, TactResult, TrustMap};

/// One agreement annotated for its side of the signing problem.
///
/// `master_index` is the position in the caller's input list and survives
/// every reordering so verdicts can be written back in input order.
/// `sub_index` is the position within the side before time-sorting; it names
/// the decision variable and breaks time ties deterministically.
#[derive(Debug, Clone)]
pub(crate) struct SideAgreement {
    pub master_index: usize,
    pub sub_index: usize,
    pub quantity: usize,
    pub time: usize,
    pub unit_price: f64,
    pub partner_trust: f64,
}

impl SideAgreement {
    /// Trust-discounted value of the agreement: `quantity · price · trust`.
    pub fn risk_adjusted_value(&self) -> f64 {
        self.quantity as f64 * self.unit_price * self.partner_trust
    }
}

/// Validate every agreement and partition the batch into buys and sells,
/// each side sorted by delivery time (ties keep submission order).
pub(crate) fn partition_agreements(
    agent_id: &str,
    agreements: &[Agreement],
    trust_probabilities: &TrustMap,
) -> TactResult<(Vec<SideAgreement>, Vec<SideAgreement>)> {
    let mut buys = Vec::new();
    let mut sells = Vec::new();
    for (master_index, agreement) in agreements.iter().enumerate() {
        agreement.validate()?;
        let trust = partner_trust(agent_id, agreement, trust_probabilities)?;
        let side = if agreement.is_buy { &mut buys } else { &mut sells };
        side.push(SideAgreement {
            master_index,
            sub_index: side.len(),
            quantity: agreement.quantity,
            time: agreement.time,
            unit_price: agreement.unit_price,
            partner_trust: trust,
        });
    }
    buys.sort_by_key(|a| (a.time, a.sub_index));
    sells.sort_by_key(|a| (a.time, a.sub_index));
    Ok((buys, sells))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trust_table() -> TrustMap {
        TrustMap::from([("OTHER".to_string(), 0.75)])
    }

    #[test]
    fn test_partition_splits_and_sorts_by_time() {
        let agreements = vec![
            Agreement::sell(1, 6, 110.0, "Monty", "OTHER"),
            Agreement::buy(1, 4, 10.0, "Monty", "OTHER"),
            Agreement::sell(1, 1, 12.0, "Monty", "OTHER"),
            Agreement::buy(2, 2, 8.0, "OTHER", "Monty"),
        ];
        let (buys, sells) = partition_agreements("Monty", &agreements, &trust_table()).unwrap();

        assert_eq!(buys.len(), 2);
        assert_eq!(sells.len(), 2);
        assert_eq!(buys[0].time, 2);
        assert_eq!(buys[1].time, 4);
        assert_eq!(sells[0].time, 1);
        assert_eq!(sells[1].time, 6);
        // Input positions survive the reordering.
        assert_eq!(sells[1].master_index, 0);
        assert_eq!(buys[0].master_index, 3);
    }

    #[test]
    fn test_time_ties_keep_submission_order() {
        let agreements = vec![
            Agreement::buy(1, 3, 1.0, "Monty", "OTHER"),
            Agreement::buy(1, 3, 2.0, "Monty", "OTHER"),
            Agreement::buy(1, 3, 3.0, "Monty", "OTHER"),
        ];
        let (buys, _) = partition_agreements("Monty", &agreements, &trust_table()).unwrap();
        let sub_indices: Vec<usize> = buys.iter().map(|b| b.sub_index).collect();
        assert_eq!(sub_indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_risk_adjusted_value() {
        let agreements = vec![Agreement::sell(2, 5, 10.0, "Monty", "OTHER")];
        let (_, sells) = partition_agreements("Monty", &agreements, &trust_table()).unwrap();
        assert!((sells[0].risk_adjusted_value() - 15.0).abs() < 1e-12);
    }

    #[test]
    fn test_validation_failures_propagate() {
        let unknown_partner = vec![Agreement::buy(1, 1, 1.0, "Monty", "NOBODY")];
        assert!(partition_agreements("Monty", &unknown_partner, &trust_table()).is_err());

        let zero_quantity = vec![Agreement::buy(0, 1, 1.0, "Monty", "OTHER")];
        assert!(partition_agreements("Monty", &zero_quantity, &trust_table()).is_err());
    }
}
