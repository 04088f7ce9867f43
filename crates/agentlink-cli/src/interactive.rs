//! Interactive confirmation prompts

use anyhow::{Context, Result};
use dialoguer::Confirm;

/// Yes/no prompts on the terminal
pub struct Confirmer;

impl Confirmer {
    /// Ask a yes/no question, defaulting to no.
    ///
    /// Escape or `q` count as no.
    pub fn confirm(question: &str) -> Result<bool> {
        let answer = Confirm::new()
            .with_prompt(question)
            .default(false)
            .interact_opt()
            .context("Failed to show prompt")?;
        Ok(answer.unwrap_or(false))
    }
}
