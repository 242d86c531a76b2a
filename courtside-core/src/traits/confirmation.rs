/// Yes/no prompt collaborator.
///
/// Returns `true` on an affirmative answer. The prompt is the only blocking
/// step in the core; the dispatcher also exposes the same round trip as an
/// explicit two-phase flow for hosts that cannot block.
pub trait ConfirmationPrompt {
    fn confirm(&mut self, message: &str) -> bool;
}
