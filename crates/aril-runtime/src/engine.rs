//! The engine-state handle and its process-wide factory
//!
//! All translation units of a process share one `EngineState` unless a
//! caller supplies its own. Construction is assumed single-threaded;
//! the mutex only makes the shared handle passable between call sites.

use crate::error::{Result, RuntimeError};
use aril_core::Value;
use std::sync::{Arc, Mutex, OnceLock};

/// The external compile/evaluate runtime
///
/// Implementations live outside this workspace; the adapter only
/// forwards to them.
pub trait ExecutionEngine: Send {
    /// Compile target-IR text under the given function name
    fn compile(&mut self, name: &str, source: &str) -> Result<()>;

    /// Evaluate a previously compiled function
    fn evaluate(&mut self, name: &str, args: &[Value]) -> Result<Value>;
}

/// Opaque handle to one engine instance
pub struct EngineState {
    engine: Box<dyn ExecutionEngine>,
}

impl EngineState {
    /// Wrap an engine in a state handle
    pub fn new(engine: Box<dyn ExecutionEngine>) -> Self {
        Self { engine }
    }

    /// Forward target-IR text to the engine for compilation
    pub fn compile(&mut self, name: &str, source: &str) -> Result<()> {
        log::debug!("compiling `{name}` ({} bytes of IR text)", source.len());
        self.engine.compile(name, source)
    }

    /// Forward an evaluation request to the engine
    pub fn evaluate(&mut self, name: &str, args: &[Value]) -> Result<Value> {
        self.engine.evaluate(name, args)
    }
}

/// A shareable engine-state handle
pub type SharedEngineState = Arc<Mutex<EngineState>>;

static SHARED: OnceLock<SharedEngineState> = OnceLock::new();

/// The process-wide engine state, created on first use
///
/// The factory runs only for the first caller; later calls return the
/// same handle and ignore their factory. Callers that need a private
/// engine build their own `EngineState` and never touch this.
pub fn shared_state<F>(factory: F) -> SharedEngineState
where
    F: FnOnce() -> EngineState,
{
    SHARED
        .get_or_init(|| Arc::new(Mutex::new(factory())))
        .clone()
}

/// Lock a shared handle, mapping poisoning to a runtime error
pub(crate) fn lock(state: &SharedEngineState) -> Result<std::sync::MutexGuard<'_, EngineState>> {
    state.lock().map_err(|_| RuntimeError::Poisoned)
}
