//! The compile/evaluate boundary
//!
//! `submit` hands a translated unit's text to an engine state;
//! `invoke` evaluates a compiled function against the same state.
//! `CompiledFunction` bundles the two for the common case: translate a
//! definition once, then call it repeatedly.

use crate::engine::{lock, EngineState, SharedEngineState};
use crate::error::Result;
use aril_compiler::{TranslationUnit, UnitOptions};
use aril_core::ast::Node;
use aril_core::Value;

/// Submit a translated unit to the engine for compilation
pub fn submit(unit: &TranslationUnit, state: &mut EngineState) -> Result<()> {
    state.compile(unit.name(), unit.source())
}

/// Evaluate a previously submitted function
pub fn invoke(name: &str, state: &mut EngineState, args: &[Value]) -> Result<Value> {
    state.evaluate(name, args)
}

/// A source function translated, submitted, and ready to call
pub struct CompiledFunction {
    name: String,
    state: SharedEngineState,
}

impl std::fmt::Debug for CompiledFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompiledFunction")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl CompiledFunction {
    /// Translate a definition and submit it to the given engine state
    pub fn define(root: &Node, options: &UnitOptions, state: SharedEngineState) -> Result<Self> {
        let unit = TranslationUnit::build(root, options)?;
        submit(&unit, &mut *lock(&state)?)?;
        Ok(Self {
            name: unit.name().to_string(),
            state,
        })
    }

    /// The function's name as known to the engine
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Evaluate the function with the given arguments
    pub fn call(&self, args: &[Value]) -> Result<Value> {
        lock(&self.state)?.evaluate(&self.name, args)
    }
}
