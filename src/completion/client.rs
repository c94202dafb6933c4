//! CompletionClient trait definition

use super::CompletionError;

/// Stateless text-in, text-out completion client
///
/// Each call is independent. Implementations block until the service
/// replies or fails; there is no retry and no cancellation.
pub trait CompletionClient {
    /// Send the built prompt and return the model's full textual reply
    fn complete(&self, prompt: &str) -> Result<String, CompletionError>;
}

impl<C: CompletionClient + ?Sized> CompletionClient for &C {
    fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        (**self).complete(prompt)
    }
}

impl<C: CompletionClient + ?Sized> CompletionClient for Box<C> {
    fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        (**self).complete(prompt)
    }
}
