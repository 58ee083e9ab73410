//! Conversation slots: named parameters extracted from user input.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Slot names read or written by the action handlers.
pub mod names {
    pub const THEME: &str = "theme";
    pub const BUDGET: &str = "budget";
    pub const DATE: &str = "date";
    pub const DURATION: &str = "duration";
    pub const DESTINATION: &str = "destination";
    pub const PARTY_SIZE: &str = "party_size";
    pub const DESTINATION1: &str = "destination1";
    pub const DESTINATION2: &str = "destination2";
    pub const ORIGIN: &str = "origin";
    pub const RETURN_DATE: &str = "return_date";
    pub const LAST_SEARCH: &str = "last_search";
}

/// A primitive slot value. Dates travel as ISO strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SlotValue {
    Text(String),
    Number(serde_json::Number),
}

impl SlotValue {
    pub fn text(value: impl Into<String>) -> Self {
        SlotValue::Text(value.into())
    }

    /// Whole positive count. Integer-valued floats (`2.0`) and numeric
    /// text are accepted; anything else is `None`.
    pub fn as_count(&self) -> Option<u32> {
        let value = match self {
            SlotValue::Number(n) => n.as_f64()?,
            SlotValue::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        let in_range = value >= 1.0 && value <= f64::from(u32::MAX);
        if in_range && value.fract() == 0.0 {
            Some(value as u32)
        } else {
            None
        }
    }

    /// True for blank text, which counts as unset.
    pub fn is_blank(&self) -> bool {
        matches!(self, SlotValue::Text(s) if s.trim().is_empty())
    }
}

impl fmt::Display for SlotValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotValue::Text(s) => write!(f, "{}", s.trim()),
            SlotValue::Number(n) => write!(f, "{}", n),
        }
    }
}

/// Instruction to change one slot after a turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum SlotMutation {
    Set { slot: String, value: SlotValue },
    Clear { slot: String },
}

impl SlotMutation {
    pub fn set(slot: impl Into<String>, value: SlotValue) -> Self {
        SlotMutation::Set {
            slot: slot.into(),
            value,
        }
    }

    pub fn clear(slot: impl Into<String>) -> Self {
        SlotMutation::Clear { slot: slot.into() }
    }

    pub fn slot(&self) -> &str {
        match self {
            SlotMutation::Set { slot, .. } | SlotMutation::Clear { slot } => slot,
        }
    }
}

/// Point-in-time view of a conversation's slots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotSnapshot(BTreeMap<String, SlotValue>);

impl SlotSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter, mostly for tests and fixtures.
    pub fn with(mut self, slot: impl Into<String>, value: impl Into<SlotValue>) -> Self {
        self.0.insert(slot.into(), value.into());
        self
    }

    /// Raw value, blank text included.
    pub fn get(&self, slot: &str) -> Option<&SlotValue> {
        self.0.get(slot)
    }

    /// Rendered value of a slot; absent and blank slots read as `None`.
    pub fn text(&self, slot: &str) -> Option<String> {
        self.0
            .get(slot)
            .filter(|v| !v.is_blank())
            .map(ToString::to_string)
    }

    /// Slot read as a positive count. Unset reads as `Ok(None)`; a value
    /// that is not a whole positive number is a validation failure.
    pub fn count(&self, slot: &str) -> Result<Option<u32>, ValidationError> {
        match self.0.get(slot).filter(|v| !v.is_blank()) {
            None => Ok(None),
            Some(value) => value
                .as_count()
                .map(Some)
                .ok_or_else(|| ValidationError::invalid_format(slot, "must be a whole positive number")),
        }
    }

    pub fn is_set(&self, slot: &str) -> bool {
        self.text(slot).is_some()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Merges inbound slot values; `None` clears the slot.
    pub fn merge(&mut self, updates: BTreeMap<String, Option<SlotValue>>) {
        for (slot, value) in updates {
            match value {
                Some(v) => {
                    self.0.insert(slot, v);
                }
                None => {
                    self.0.remove(&slot);
                }
            }
        }
    }

    /// Applies mutations in order.
    pub fn apply(&mut self, mutations: &[SlotMutation]) {
        for mutation in mutations {
            match mutation {
                SlotMutation::Set { slot, value } => {
                    self.0.insert(slot.clone(), value.clone());
                }
                SlotMutation::Clear { slot } => {
                    self.0.remove(slot);
                }
            }
        }
    }
}

impl From<&str> for SlotValue {
    fn from(value: &str) -> Self {
        SlotValue::Text(value.to_string())
    }
}

impl From<String> for SlotValue {
    fn from(value: String) -> Self {
        SlotValue::Text(value)
    }
}

impl From<i64> for SlotValue {
    fn from(value: i64) -> Self {
        SlotValue::Number(value.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_and_absent_slots_read_as_none() {
        let slots = SlotSnapshot::new().with(names::THEME, "  ");
        assert_eq!(slots.text(names::THEME), None);
        assert_eq!(slots.text(names::BUDGET), None);
        assert!(slots.get(names::THEME).is_some());
    }

    #[test]
    fn numeric_slots_render_without_decimal_noise() {
        let slots = SlotSnapshot::new().with(names::PARTY_SIZE, 4);
        assert_eq!(slots.text(names::PARTY_SIZE).as_deref(), Some("4"));
    }

    #[test]
    fn counts_accept_integer_valued_floats_and_numeric_text() {
        let float: SlotValue = serde_json::from_str("2.0").unwrap();
        let slots = SlotSnapshot::new()
            .with(names::PARTY_SIZE, float)
            .with("adults", " 3 ");

        assert_eq!(slots.count(names::PARTY_SIZE), Ok(Some(2)));
        assert_eq!(slots.count("adults"), Ok(Some(3)));
        assert_eq!(slots.count(names::BUDGET), Ok(None));
    }

    #[test]
    fn counts_reject_words_fractions_and_zero() {
        for raw in ["\"two\"", "2.5", "0", "-1"] {
            let value: SlotValue = serde_json::from_str(raw).unwrap();
            let slots = SlotSnapshot::new().with(names::PARTY_SIZE, value);
            let err = slots.count(names::PARTY_SIZE).unwrap_err();
            assert_eq!(err.field(), names::PARTY_SIZE);
        }
    }

    #[test]
    fn slot_values_deserialize_untagged() {
        let value: SlotValue = serde_json::from_str("\"Paris\"").unwrap();
        assert_eq!(value, SlotValue::text("Paris"));
        let value: SlotValue = serde_json::from_str("3").unwrap();
        assert_eq!(value.to_string(), "3");
    }

    #[test]
    fn merge_sets_and_clears() {
        let mut slots = SlotSnapshot::new()
            .with(names::DESTINATION, "Rome")
            .with(names::BUDGET, "500€");

        let mut updates = BTreeMap::new();
        updates.insert(names::DESTINATION.to_string(), Some(SlotValue::text("Lisbon")));
        updates.insert(names::BUDGET.to_string(), None);
        slots.merge(updates);

        assert_eq!(slots.text(names::DESTINATION).as_deref(), Some("Lisbon"));
        assert!(!slots.is_set(names::BUDGET));
    }

    #[test]
    fn apply_runs_mutations_in_order() {
        let mut slots = SlotSnapshot::new();
        slots.apply(&[
            SlotMutation::set(names::LAST_SEARCH, SlotValue::text("Rome")),
            SlotMutation::clear(names::LAST_SEARCH),
            SlotMutation::set(names::BUDGET, SlotValue::text("100 USD")),
        ]);
        assert!(!slots.is_set(names::LAST_SEARCH));
        assert!(slots.is_set(names::BUDGET));
    }

    #[test]
    fn mutations_serialize_with_op_tag() {
        let json = serde_json::to_value(SlotMutation::clear(names::BUDGET)).unwrap();
        assert_eq!(json, serde_json::json!({"op": "clear", "slot": "budget"}));

        let json =
            serde_json::to_value(SlotMutation::set(names::LAST_SEARCH, SlotValue::text("Rome")))
                .unwrap();
        assert_eq!(
            json,
            serde_json::json!({"op": "set", "slot": "last_search", "value": "Rome"})
        );
    }
}
