//! User interaction for embedsmith.
//! The generator asks through the [`Prompter`] trait so it can run without a terminal.

use crate::error::Result;
use dialoguer::Confirm;

/// Asks the user yes/no questions.
pub trait Prompter {
    /// Asks `prompt` and returns the answer.
    ///
    /// # Arguments
    /// * `skip` - Answer yes without asking
    /// * `prompt` - Question shown to the user
    ///
    /// # Errors
    /// * `Error::Interrupted` if the user interrupts the prompt
    /// * `Error::PromptError` if the terminal cannot be used
    fn confirm(&self, skip: bool, prompt: String) -> Result<bool>;
}

/// Terminal prompter backed by dialoguer. Defaults to "no".
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        DialoguerPrompter::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn confirm(&self, skip: bool, prompt: String) -> Result<bool> {
        if skip {
            return Ok(true);
        }

        Ok(Confirm::new().with_prompt(prompt).default(false).interact()?)
    }
}
