//! Translation units
//!
//! A `TranslationUnit` is built once per source function or lambda,
//! runs its whole transduction synchronously during construction, and
//! is immutable afterwards. It owns the produced IR tree and the
//! serialized target-IR text.

use crate::error::{CompileError, Result};
use crate::serializer::serialize;
use crate::transducer::Transducer;
use crate::pretty;
use aril_core::ast::Node;
use aril_core::ir::IrNode;

/// Options controlling unit construction
#[derive(Debug, Clone, Default)]
pub struct UnitOptions {
    /// Log the pretty-printed unit before it is handed to the engine
    pub debug: bool,
    /// Keep provenance tags in the debug output
    pub keep_tags: bool,
}

/// One translated source function
#[derive(Debug, Clone)]
pub struct TranslationUnit {
    name: String,
    ir: IrNode,
    source: String,
}

impl TranslationUnit {
    /// Translate a function or lambda definition
    ///
    /// The root must be a definition node; parameters are registered in
    /// the unit's symbol table before the body is walked.
    pub fn build(root: &Node, options: &UnitOptions) -> Result<Self> {
        let name = match root {
            Node::FunctionDef { name, .. } => name.clone(),
            Node::Lambda { .. } => "<lambda>".to_string(),
            other => {
                return Err(CompileError::unsupported(
                    "translation root must be a function or lambda definition",
                    other.span(),
                ))
            }
        };

        let mut transducer = Transducer::new();
        let ir = transducer.transduce(root)?;
        let source = serialize(&ir);

        if options.debug {
            let text = if options.keep_tags {
                source.clone()
            } else {
                pretty::strip_tags(&source)
            };
            log::debug!("translated `{}`:\n{}", name, pretty::pretty(&text));
        }

        Ok(Self { name, ir, source })
    }

    /// The source function's plain name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The produced IR tree
    pub fn ir(&self) -> &IrNode {
        &self.ir
    }

    /// The serialized target-IR text
    pub fn source(&self) -> &str {
        &self.source
    }
}
