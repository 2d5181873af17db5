use crate::stoich::SimulationResult;

/// One-way notification hook for generated explanation text.
///
/// The bench calls this once after each successful resolution with a
/// snapshot of the outcome. Implementations typically hand the snapshot to
/// a remote text-generation service; whatever they do, the simulation has
/// already committed its state and never waits on or reads back from the
/// provider, so a failing provider cannot affect numeric results.
pub trait ExplanationProvider {
    fn reaction_resolved(&mut self, result: &SimulationResult);
}

/// Default provider: discards every notification.
pub struct NoopExplanation;

impl ExplanationProvider for NoopExplanation {
    fn reaction_resolved(&mut self, _result: &SimulationResult) {}
}
