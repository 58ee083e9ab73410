//! DTOs for the action webhook.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::domain::conversation::SlotValue;

/// Body of POST /api/actions.
///
/// `conversation_id` arrives as a raw string so that an invalid id maps to
/// a 400 with a field name instead of a generic JSON rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct ActionRequest {
    pub conversation_id: String,
    pub intent: String,
    #[serde(default)]
    pub slots: BTreeMap<String, Option<SlotValue>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_slots_deserialize_as_none() {
        let req: ActionRequest = serde_json::from_str(
            r#"{"conversation_id":"c1","intent":"action_fallback","slots":{"destination":null,"party_size":2}}"#,
        )
        .unwrap();

        assert_eq!(req.slots.get("destination"), Some(&None));
        assert!(matches!(req.slots.get("party_size"), Some(Some(SlotValue::Number(_)))));
    }

    #[test]
    fn slots_default_to_empty() {
        let req: ActionRequest =
            serde_json::from_str(r#"{"conversation_id":"c1","intent":"action_fallback"}"#).unwrap();
        assert!(req.slots.is_empty());
    }
}
