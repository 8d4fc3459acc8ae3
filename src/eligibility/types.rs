use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
/// Outcome of scoring one profile against one entity.
pub struct EligibilityScore {
    /// Sum of matched dimension weights.
    pub score: u32,
    /// Human-readable explanations, in dimension order.
    pub reasons: Vec<String>,
}

impl EligibilityScore {
    fn add(&mut self, weight: u32) {
        self.score += weight;
    }

    fn add_with_reason(&mut self, weight: u32, reason: String) {
        self.score += weight;
        self.reasons.push(reason);
    }

    pub(super) fn credit(&mut self, weight: u32, reason: Option<String>) {
        match reason {
            Some(reason) => self.add_with_reason(weight, reason),
            None => self.add(weight),
        }
    }
}
