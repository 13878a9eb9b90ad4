//! Yes/no gate consulted before destructive store operations.
//!
//! Delete, import, clear and reset each ask the store's gate before touching
//! state. Interactive front ends supply a prompt; headless callers and tests
//! pick a fixed policy or a closure.

use serde::{Deserialize, Serialize};

pub const CONFIRM_DELETE: &str = "Are you sure you want to delete this bookmark?";
pub const CONFIRM_IMPORT: &str = "This will replace all current data. Continue?";
pub const CONFIRM_CLEAR: &str =
    "This will delete ALL bookmarks and categories. This cannot be undone. Continue?";
pub const CONFIRM_RESET: &str = "Reset all settings to default?";

pub trait ConfirmationGate {
    /// Returns `true` if the operation described by `prompt` may proceed.
    fn confirm(&mut self, prompt: &str) -> bool;
}

/// Approves every request.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysConfirm;

impl ConfirmationGate for AlwaysConfirm {
    fn confirm(&mut self, _prompt: &str) -> bool {
        true
    }
}

/// Declines every request.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverConfirm;

impl ConfirmationGate for NeverConfirm {
    fn confirm(&mut self, _prompt: &str) -> bool {
        false
    }
}

impl<F> ConfirmationGate for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Whether a gated operation ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum Outcome {
    Applied,
    Cancelled,
}

impl Outcome {
    pub fn is_applied(self) -> bool {
        self == Outcome::Applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_policies() {
        assert!(AlwaysConfirm.confirm(CONFIRM_DELETE));
        assert!(!NeverConfirm.confirm(CONFIRM_DELETE));
    }

    #[test]
    fn test_closure_gate_sees_prompt() {
        let mut seen = Vec::new();
        {
            let mut gate = |prompt: &str| {
                seen.push(prompt.to_string());
                prompt == CONFIRM_RESET
            };
            assert!(!gate.confirm(CONFIRM_CLEAR));
            assert!(gate.confirm(CONFIRM_RESET));
        }
        assert_eq!(seen, vec![CONFIRM_CLEAR, CONFIRM_RESET]);
    }

    #[test]
    fn test_outcome_serializes_pascal_case() {
        let json = serde_json::to_string(&Outcome::Cancelled).unwrap();
        assert_eq!(json, r#""Cancelled""#);
        assert!(Outcome::Applied.is_applied());
    }
}
