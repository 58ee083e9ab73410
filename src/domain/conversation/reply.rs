//! The outbound result of one dispatched turn.

use serde::{Deserialize, Serialize};

use super::slots::SlotMutation;

/// Rendered reply text plus the slot changes the turn requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub text: String,
    #[serde(default)]
    pub slot_mutations: Vec<SlotMutation>,
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            slot_mutations: Vec::new(),
        }
    }

    pub fn with_mutation(mut self, mutation: SlotMutation) -> Self {
        self.slot_mutations.push(mutation);
        self
    }
}
