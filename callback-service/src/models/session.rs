use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Default prompt: an English debt-collection phone agent that answers with a
/// `[COLLECTION]` line followed by an `[INTENT]` classification line.
pub const COLLECTION_INSTRUCTIONS: &str = concat!(
    "You are a professional debt-collection agent speaking on the phone. ",
    "Speak naturally and briefly \u{2014} act like a human agent, not a robotic script.\n",
    "When the caller responds (single sentence) do two things:\n",
    "1) Give a single, natural-sounding collection reply (no more than one sentence). ",
    "If the caller shows willingness, ask politely for a repayment time. ",
    "If the caller is unwilling or ambiguous, be firmer and request a clear stance.\n",
    "2) Immediately after that, output the caller's intent as one of five categories and a very short reason.\n",
    "Choose one intent category: 1=willing no time, 2=willing with time, 3=does not want to pay, ",
    "4=unclear, 5=no intention.\n",
    "Format these two lines exactly (no extra text):\n",
    "[COLLECTION] Your short reply here.\n",
    "[INTENT] <category> + brief reason\n",
    "Examples:\n",
    "[COLLECTION] Okay \u{2014} when can you make the payment?\n",
    "[INTENT] 2 + promises to pay tomorrow morning\n",
    "OR\n",
    "[COLLECTION] I understand, but we need a clear answer \u{2014} will you pay or not?\n",
    "[INTENT] 3 + refuses to pay currently\n",
    "Keep the live interaction under 2 minutes. ",
    "After the call ends, return only these two lines again to record the final intent."
);

pub const DEFAULT_VOICE: &str = "Puck";
pub const DEFAULT_INTENT_TIMEOUT_SECONDS: u64 = 30;
/// Category 2 ("willing with time") ends the call by default.
pub const DEFAULT_INTENT_END_CATEGORIES: [u8; 1] = [2];

/// Session configuration returned to the proxy for a single call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub system_instructions: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice: Option<String>,
    pub end_on_intent: bool,
    pub intent_timeout_seconds: u64,
    pub intent_end_categories: BTreeSet<u8>,
}

impl SessionConfig {
    pub fn has_instructions(&self) -> bool {
        !self.system_instructions.trim().is_empty()
    }
}

/// Immutable template the server selects session configurations from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionProfile {
    pub system_instructions: String,
    pub voice: Option<String>,
    pub end_on_intent: bool,
    pub intent_timeout_seconds: u64,
    pub intent_end_categories: BTreeSet<u8>,
}

impl Default for SessionProfile {
    fn default() -> Self {
        Self {
            system_instructions: COLLECTION_INSTRUCTIONS.to_string(),
            voice: Some(DEFAULT_VOICE.to_string()),
            end_on_intent: true,
            intent_timeout_seconds: DEFAULT_INTENT_TIMEOUT_SECONDS,
            intent_end_categories: DEFAULT_INTENT_END_CATEGORIES.into_iter().collect(),
        }
    }
}
