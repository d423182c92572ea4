//! Interactive confirmation

use anyhow::Result;
use dialoguer::Confirm;
use tracing::warn;

/// Source of yes/no answers
pub trait Prompt {
    fn confirm(&self, question: &str) -> Result<bool>;
}

/// Asks on the controlling terminal
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn confirm(&self, question: &str) -> Result<bool> {
        Ok(Confirm::new().with_prompt(question).interact()?)
    }
}

/// Ask `question`, then ask again for confirmation.
///
/// Both answers must agree; on a mismatch the pair is asked again.
pub fn confirm_twice(prompt: &dyn Prompt, question: &str) -> Result<bool> {
    loop {
        let first = prompt.confirm(question)?;
        let second = prompt.confirm("Repeat for confirmation")?;
        if first == second {
            return Ok(first);
        }
        warn!("Error: the two entered values do not match");
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Replays canned answers; errors once they run out
    pub struct ScriptedPrompt {
        answers: RefCell<VecDeque<bool>>,
        pub asked: RefCell<Vec<String>>,
    }

    impl ScriptedPrompt {
        pub fn new(answers: &[bool]) -> Self {
            Self {
                answers: RefCell::new(answers.iter().copied().collect()),
                asked: RefCell::new(Vec::new()),
            }
        }
    }

    impl Prompt for ScriptedPrompt {
        fn confirm(&self, question: &str) -> Result<bool> {
            self.asked.borrow_mut().push(question.to_string());
            self.answers
                .borrow_mut()
                .pop_front()
                .ok_or_else(|| anyhow::anyhow!("prompt aborted"))
        }
    }
}
