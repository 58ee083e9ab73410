//! Transcript publisher port - hands turn events to the history recorder.

use crate::domain::conversation::TurnRecorded;

/// Fire-and-forget sink for turn events.
///
/// `publish` must never block the reply path. Implementations may drop the
/// event when their buffer is full and report that with `false`.
pub trait TranscriptPublisher: Send + Sync {
    fn publish(&self, event: TurnRecorded) -> bool;
}
