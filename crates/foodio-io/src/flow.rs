//! Per-action request state.
//!
//! Each asynchronous action (studio generation, text overlay) carries
//! exactly one of these values instead of separate loading/error/result
//! flags, so ambiguous combinations (loading *and* errored, result
//! *and* error) are unrepresentable within an action.

/// State of one asynchronous user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionState<T> {
    /// Nothing requested, or the previous result was cleared.
    Idle,
    /// A request is in flight; the triggering control is disabled.
    Pending,
    /// The most recent request succeeded.
    Ready(T),
    /// The most recent request failed with a user-facing message.
    Failed(String),
}

// Manual impl: the derived one would bound `T: Default`, but `Idle`
// carries no `T`.
impl<T> Default for ActionState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> ActionState<T> {
    /// Whether a request is currently in flight.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// The successful result, if any.
    #[must_use]
    pub const fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// The user-facing failure message, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_is_idle() {
        let state = ActionState::<u32>::default();
        assert_eq!(state, ActionState::Idle);
        assert!(!state.is_pending());
        assert!(state.ready().is_none());
        assert!(state.error().is_none());
    }

    #[test]
    fn pending_exposes_no_result_or_error() {
        let state = ActionState::<u32>::Pending;
        assert!(state.is_pending());
        assert!(state.ready().is_none());
        assert!(state.error().is_none());
    }

    #[test]
    fn ready_overwrites_are_wholesale() {
        // Requesting generation twice yields only the latest result;
        // no accumulation of prior results.
        let mut state = ActionState::Ready(1);
        state = ActionState::Pending;
        assert!(state.is_pending());
        state = ActionState::Ready(2);
        assert_eq!(state.ready(), Some(&2));
    }

    #[test]
    fn failed_carries_the_message() {
        let state = ActionState::<u32>::Failed("Failed to generate image.".into());
        assert_eq!(state.error(), Some("Failed to generate image."));
        assert!(!state.is_pending());
    }

    #[test]
    fn actions_are_independent() {
        // A text-overlay failure must leave the studio result intact.
        let studio = ActionState::Ready("studio-shot");
        let overlay = ActionState::<&str>::Failed("Failed to add text.".into());
        assert_eq!(studio.ready(), Some(&"studio-shot"));
        assert!(overlay.error().is_some());
    }
}
