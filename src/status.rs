// Overture Status Sink
//
// The observable side channel of the sequence: one label per completed phase
// ("init trees", "init gas station", "init car"). A cancelled run publishes a
// prefix of that sequence and nothing more; the silence is the signal.

use tokio::sync::mpsc::UnboundedSender;

/// Receives phase-completion labels
pub trait StatusSink: Send + Sync {
    /// Publish a phase label.
    ///
    /// Must not block; the sequencer calls this inline between phases.
    fn publish(&self, label: &str);
}

/// Stream labels into a channel (last resort for a dropped receiver is to
/// discard, matching the fire-and-forget nature of status display)
impl StatusSink for UnboundedSender<String> {
    fn publish(&self, label: &str) {
        if self.send(label.to_string()).is_err() {
            log::warn!("status receiver dropped, discarding label '{}'", label);
        }
    }
}

/// Adapts a plain closure into a sink
pub struct FnSink<F>(pub F);

impl<F> StatusSink for FnSink<F>
where
    F: Fn(&str) + Send + Sync,
{
    fn publish(&self, label: &str) {
        (self.0)(label);
    }
}
