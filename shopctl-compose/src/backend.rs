//! Executor trait for pluggable command runners

use async_trait::async_trait;
use shopctl_core::{CommandSpec, Result};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Trait for running external commands
///
/// This allows for different implementations:
/// - [`SystemExecutor`](crate::SystemExecutor) - spawns real processes
/// - [`DryRunExecutor`](crate::DryRunExecutor) - prints what would run
/// - [`MockExecutor`] - records calls for tests
///
/// # Thread Safety
/// All implementations must be `Send + Sync` for use across async tasks.
#[async_trait]
pub trait Executor: Send + Sync {
    /// Run `spec` to completion and return its exit code
    ///
    /// A non-zero exit code is a normal return value. Errors are reserved
    /// for failing to start the program at all.
    ///
    /// # Errors
    /// Returns error if the program cannot be started
    async fn run(&self, spec: &CommandSpec) -> Result<i32>;
}

#[async_trait]
impl<T: Executor + ?Sized> Executor for Box<T> {
    async fn run(&self, spec: &CommandSpec) -> Result<i32> {
        (**self).run(spec).await
    }
}

type Matcher = Box<dyn Fn(&CommandSpec) -> bool + Send + Sync>;

/// Mock executor for testing (never spawns anything)
///
/// Every spec is recorded. Exit codes default to 0 and can be scripted
/// per command with [`MockExecutor::fail_when`].
///
/// # Example
/// ```
/// use shopctl_compose::{Executor, MockExecutor};
/// use shopctl_core::CommandSpec;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let executor = MockExecutor::new();
/// executor.fail_when(|spec| spec.has_arg("rmi"), 1).await;
///
/// let code = executor.run(&CommandSpec::new("docker").arg("rmi")).await.unwrap();
/// assert_eq!(code, 1);
/// assert_eq!(executor.call_count().await, 1);
/// # }
/// ```
#[derive(Clone)]
pub struct MockExecutor {
    state: Arc<Mutex<MockState>>,
}

#[derive(Default)]
struct MockState {
    calls: Vec<CommandSpec>,
    failures: Vec<(Matcher, i32)>,
}

impl MockExecutor {
    /// Create a new mock executor
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(MockState::default())),
        }
    }

    /// Return `code` for every spec matching `matcher`
    ///
    /// The first registered matcher that matches wins.
    pub async fn fail_when<F>(&self, matcher: F, code: i32)
    where
        F: Fn(&CommandSpec) -> bool + Send + Sync + 'static,
    {
        self.state
            .lock()
            .await
            .failures
            .push((Box::new(matcher), code));
    }

    /// All recorded specs, in call order
    pub async fn calls(&self) -> Vec<CommandSpec> {
        self.state.lock().await.calls.clone()
    }

    /// Number of recorded calls
    pub async fn call_count(&self) -> usize {
        self.state.lock().await.calls.len()
    }

    /// Rendered command lines, in call order
    pub async fn command_lines(&self) -> Vec<String> {
        self.state
            .lock()
            .await
            .calls
            .iter()
            .map(ToString::to_string)
            .collect()
    }
}

impl Default for MockExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MockExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockExecutor").finish_non_exhaustive()
    }
}

#[async_trait]
impl Executor for MockExecutor {
    async fn run(&self, spec: &CommandSpec) -> Result<i32> {
        let mut state = self.state.lock().await;
        state.calls.push(spec.clone());

        let code = state
            .failures
            .iter()
            .find(|(matcher, _)| matcher(spec))
            .map_or(0, |(_, code)| *code);

        tracing::debug!(
            command = %spec,
            exit_code = code,
            total_calls = state.calls.len(),
            "Mock: Ran command"
        );

        Ok(code)
    }
}
