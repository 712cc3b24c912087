//! Provenance tagging and the per-unit symbol table
//!
//! Every identifier and keyword leaf in the IR carries a `$line$col`
//! suffix recording where it came from in the source. The suffix must
//! be stripped before base names are compared.

use aril_core::ast::Span;
use std::collections::HashSet;

/// Append the provenance suffix to a name
pub fn tag(name: &str, span: Span) -> String {
    format!("{}${}${}", name, span.line, span.column)
}

/// The base name of a possibly-tagged symbol
pub fn base_name(symbol: &str) -> &str {
    match symbol.find('$') {
        Some(i) => &symbol[..i],
        None => symbol,
    }
}

/// The set of names defined in one translation unit
///
/// The table is flat across all nested blocks of the unit: a name
/// defined inside a branch or a loop body counts as defined everywhere
/// else in the function. This is intentional; the target IR has no
/// block-local shadowing.
#[derive(Debug, Default)]
pub struct SymbolTable {
    defined: HashSet<String>,
}

impl SymbolTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `name` has already been bound in this unit
    pub fn is_defined(&self, name: &str) -> bool {
        self.defined.contains(name)
    }

    /// Record `name` as bound; idempotent
    pub fn define(&mut self, name: &str) {
        self.defined.insert(name.to_string());
    }
}
