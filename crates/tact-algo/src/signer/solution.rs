//! Signer solution data structures
//!
//! Defines the per-agreement verdicts and the full signer result.

use crate::milp::SolverStatus;
use serde::Serialize;
use std::time::Duration;
use tact_core::{Agreement, TrustMap};

/// Decision for one agreement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Verdict {
    /// Sign, tagged with the signing agent's id.
    Signed(String),
    /// Leave unsigned.
    Skipped,
}

impl Verdict {
    /// True when the agreement is to be signed.
    pub fn is_signed(&self) -> bool {
        matches!(self, Verdict::Signed(_))
    }

    /// Nullable-string view: the signer id, or `None` for a skip.
    pub fn as_option(&self) -> Option<&str> {
        match self {
            Verdict::Signed(agent_id) => Some(agent_id),
            Verdict::Skipped => None,
        }
    }
}

/// Complete result of a signing decision, optimal or greedy.
///
/// `signatures` has the same length and order as the input agreement list.
/// The solver diagnostics are `None` whenever no MILP ran: for the greedy
/// baseline and for the trivial edge cases (empty batch, one-sided batch).
#[derive(Debug, Clone, Serialize)]
pub struct SignerOutcome {
    /// The signing agent.
    pub agent_id: String,
    /// Per-agreement verdicts in input order.
    pub signatures: Vec<Verdict>,
    /// The agreement batch the decision was made over.
    pub agreements: Vec<Agreement>,
    /// The trust table the decision was made with.
    pub trust_probabilities: TrustMap,
    /// Backend status, when a MILP ran.
    pub model_status: Option<SolverStatus>,
    /// Time spent assembling the MILP.
    pub time_to_generate_ilp: Option<Duration>,
    /// Time spent in the backend.
    pub time_to_solve_ilp: Option<Duration>,
    /// Risk-adjusted profit of the chosen subset.
    pub profit: Option<f64>,
}

impl SignerOutcome {
    /// Result that signs nothing and carries no solver diagnostics.
    pub(crate) fn all_skipped(
        agent_id: &str,
        agreements: &[Agreement],
        trust_probabilities: &TrustMap,
    ) -> Self {
        Self {
            agent_id: agent_id.to_string(),
            signatures: vec![Verdict::Skipped; agreements.len()],
            agreements: agreements.to_vec(),
            trust_probabilities: trust_probabilities.clone(),
            model_status: None,
            time_to_generate_ilp: None,
            time_to_solve_ilp: None,
            profit: None,
        }
    }

    /// Number of agreements to sign.
    pub fn signed_count(&self) -> usize {
        self.signatures.iter().filter(|v| v.is_signed()).count()
    }

    /// Input positions of the agreements to sign.
    pub fn signed_indices(&self) -> Vec<usize> {
        self.signatures
            .iter()
            .enumerate()
            .filter(|(_, v)| v.is_signed())
            .map(|(i, _)| i)
            .collect()
    }

    /// Compatibility view for external collaborators: the agent id for a
    /// sign, `None` for a skip, in input order.
    pub fn signature_list(&self) -> Vec<Option<&str>> {
        self.signatures.iter().map(|v| v.as_option()).collect()
    }

    /// Format a human-readable summary.
    pub fn summary(&self) -> String {
        let mut s = String::new();
        s.push_str(&format!("Signer Summary\n{}\n", "=".repeat(40)));
        s.push_str(&format!("Agent: {}\n", self.agent_id));
        match &self.model_status {
            Some(status) => s.push_str(&format!("Status: {status}\n")),
            None => s.push_str("Status: no solver run\n"),
        }
        s.push_str(&format!(
            "Signed: {} of {}\n",
            self.signed_count(),
            self.signatures.len()
        ));
        if let Some(profit) = self.profit {
            s.push_str(&format!("Risk-Adjusted Profit: {profit:.2}\n"));
        }
        if let Some(solve) = self.time_to_solve_ilp {
            s.push_str(&format!("Solve Time: {solve:.2?}\n"));
        }
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome_with_one_signature() -> SignerOutcome {
        let agreements = vec![
            Agreement::sell(1, 3, 20.0, "Monty", "OTHER"),
            Agreement::buy(1, 1, 5.0, "Monty", "OTHER"),
        ];
        let trust = TrustMap::from([("OTHER".to_string(), 0.5)]);
        let mut outcome = SignerOutcome::all_skipped("Monty", &agreements, &trust);
        outcome.signatures[1] = Verdict::Signed("Monty".to_string());
        outcome
    }

    #[test]
    fn test_verdict_views() {
        let signed = Verdict::Signed("Monty".to_string());
        assert!(signed.is_signed());
        assert_eq!(signed.as_option(), Some("Monty"));
        assert_eq!(Verdict::Skipped.as_option(), None);
    }

    #[test]
    fn test_signed_indices_and_count() {
        let outcome = outcome_with_one_signature();
        assert_eq!(outcome.signed_count(), 1);
        assert_eq!(outcome.signed_indices(), vec![1]);
        assert_eq!(outcome.signature_list(), vec![None, Some("Monty")]);
    }

    #[test]
    fn test_all_skipped_shape() {
        let outcome = SignerOutcome::all_skipped("Monty", &[], &TrustMap::new());
        assert!(outcome.signatures.is_empty());
        assert!(outcome.model_status.is_none());
        assert!(outcome.profit.is_none());
    }

    #[test]
    fn test_summary_without_solver_run() {
        let summary = outcome_with_one_signature().summary();
        assert!(summary.contains("no solver run"));
        assert!(summary.contains("Signed: 1 of 2"));
    }

    #[test]
    fn test_serializes() {
        let json = serde_json::to_string(&outcome_with_one_signature()).unwrap();
        assert!(json.contains("\"Skipped\""));
        assert!(json.contains("\"Signed\""));
    }
}
