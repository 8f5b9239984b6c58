use crate::domain::ports::Confirmer;
use crate::utils::error::Result;
use std::io::{self, BufRead};

/// Reads one line from a reader (stdin in the binary). Only `y`/`yes` confirm.
pub struct LineConfirmer<R: BufRead> {
    input: R,
}

impl LineConfirmer<io::StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> LineConfirmer<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }
}

impl<R: BufRead> Confirmer for LineConfirmer<R> {
    fn confirm(&mut self) -> Result<bool> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            tracing::debug!("Confirmation input closed, treating as 'no'");
            return Ok(false);
        }
        Ok(is_affirmative(&line))
    }
}

/// Confirms without asking, for `--yes`.
#[derive(Debug, Default, Clone, Copy)]
pub struct AssumeYes;

impl Confirmer for AssumeYes {
    fn confirm(&mut self) -> Result<bool> {
        Ok(true)
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}
