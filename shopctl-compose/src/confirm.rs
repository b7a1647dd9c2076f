//! Interactive confirmation for destructive commands

use async_trait::async_trait;
use shopctl_core::{Error, Result};
use std::io::Write;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::io::{AsyncBufReadExt, BufReader};

/// Trait for asking the operator to acknowledge an action
#[async_trait]
pub trait Confirmer: Send + Sync {
    /// Show `prompt` and block until the operator answers
    ///
    /// # Errors
    /// Returns error if the answer cannot be read
    async fn confirm(&self, prompt: &str) -> Result<bool>;
}

/// Reads one line from stdin
///
/// There is no timeout and no bypass flag. Closing stdin (EOF) aborts.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinConfirmer;

impl StdinConfirmer {
    /// Create a new stdin confirmer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

/// Whether a typed line acknowledges the prompt
///
/// A bare Enter, `y` or `yes` proceeds.
#[must_use]
pub fn is_acknowledgement(line: &str) -> bool {
    matches!(
        line.trim().to_ascii_lowercase().as_str(),
        "" | "y" | "yes"
    )
}

#[async_trait]
impl Confirmer for StdinConfirmer {
    async fn confirm(&self, prompt: &str) -> Result<bool> {
        print!("{prompt}");
        std::io::stdout().flush()?;

        let mut line = String::new();
        let read = BufReader::new(tokio::io::stdin())
            .read_line(&mut line)
            .await
            .map_err(|e| Error::Confirmation {
                message: e.to_string(),
            })?;

        if read == 0 {
            println!();
            return Ok(false);
        }

        Ok(is_acknowledgement(&line))
    }
}

/// Mock confirmer with a fixed answer
#[derive(Debug, Clone)]
pub struct MockConfirmer {
    answer: bool,
    prompts: Arc<AtomicUsize>,
}

impl MockConfirmer {
    /// Always acknowledge
    #[must_use]
    pub fn accepting() -> Self {
        Self::with_answer(true)
    }

    /// Always abort
    #[must_use]
    pub fn refusing() -> Self {
        Self::with_answer(false)
    }

    fn with_answer(answer: bool) -> Self {
        Self {
            answer,
            prompts: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of prompts shown
    #[must_use]
    pub fn prompt_count(&self) -> usize {
        self.prompts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Confirmer for MockConfirmer {
    async fn confirm(&self, _prompt: &str) -> Result<bool> {
        self.prompts.fetch_add(1, Ordering::SeqCst);
        Ok(self.answer)
    }
}
