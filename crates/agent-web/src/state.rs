//! Invocation State
//!
//! The page's one transient entity. `begin` and `settle` are the only two
//! transitions: begin marks the attempt in flight and clears any stale
//! error; settle records the outcome and drops the busy flag, exactly once
//! per attempt.

use serde_json::Value;

/// Outcome-tracking state for the invoke panel
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InvocationState {
    /// Last successful response body; overwritten only by a success
    pub result: Option<Value>,

    /// Last failure message; cleared at the start of every attempt
    pub error: Option<String>,

    /// True strictly between dispatch and settlement
    pub busy: bool,
}

impl InvocationState {
    /// Mark a new attempt as dispatched
    pub fn begin(&mut self) {
        self.busy = true;
        self.error = None;
    }

    /// Record an attempt's outcome. A failure leaves the previous result
    /// untouched. Overlapping attempts are not serialized: whichever
    /// settles last wins.
    pub fn settle(&mut self, outcome: Result<Value, String>) {
        match outcome {
            Ok(value) => self.result = Some(value),
            Err(message) => self.error = Some(message),
        }
        self.busy = false;
    }

    /// Output pane text: pretty-printed result, or the placeholder before
    /// the first success
    pub fn output_text(&self) -> String {
        self.result.as_ref().map_or_else(
            || "← Run an invocation to see output".to_string(),
            |value| serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string()),
        )
    }
}
