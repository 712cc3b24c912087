//! Full frontend-to-adapter integration tests
//!
//! Drive a source definition through translation, submission and
//! invocation against a recording engine, and check exactly what text
//! crosses the boundary.

use aril_compiler::{TranslationUnit, UnitOptions};
use aril_core::ast::{BinaryOp, Node, Param, Parameters, Span};
use aril_core::Value;
use aril_runtime::{invoke, submit, EngineState, ExecutionEngine, Result, RuntimeError};
use std::sync::{Arc, Mutex};

/// Engine stub that remembers submitted text and echoes its arguments
#[derive(Default)]
struct RecordingEngine {
    submitted: Vec<(String, String)>,
}

impl ExecutionEngine for RecordingEngine {
    fn compile(&mut self, name: &str, source: &str) -> Result<()> {
        self.submitted.push((name.to_string(), source.to_string()));
        Ok(())
    }

    fn evaluate(&mut self, name: &str, args: &[Value]) -> Result<Value> {
        if !self.submitted.iter().any(|(n, _)| n == name) {
            return Err(RuntimeError::Engine(format!("`{name}` was never compiled")));
        }
        Ok(Value::Array(args.to_vec()))
    }
}

fn sp(line: u32, column: u32) -> Span {
    Span::new(line, column)
}

// def double(x):
//     return x * 2
fn double() -> Node {
    Node::function_def(
        sp(1, 0),
        "double",
        Parameters::positional(vec![Param::new(sp(1, 11), "x")]),
        vec![Node::return_stmt(
            sp(2, 4),
            Some(Node::binop(
                sp(2, 11),
                Node::name(sp(2, 11), "x"),
                BinaryOp::Mul,
                Node::num(sp(2, 15), "2"),
            )),
        )],
    )
}

#[test]
fn test_submitted_text_is_the_serialized_unit() -> anyhow::Result<()> {
    let engine = Arc::new(Mutex::new(RecordingEngine::default()));
    let mut state = EngineState::new(Box::new(Probe(engine.clone())));

    let unit = TranslationUnit::build(&double(), &UnitOptions::default())?;
    submit(&unit, &mut state)?;

    let submitted = engine.lock().unwrap().submitted.clone();
    assert_eq!(submitted.len(), 1);
    assert_eq!(submitted[0].0, "double");
    assert_eq!(
        submitted[0].1,
        "define$1$0(double$1$0, x, block(__mul(x$2$11, 2)))"
    );
    Ok(())
}

#[test]
fn test_invoke_after_submit() -> anyhow::Result<()> {
    let mut state = EngineState::new(Box::new(RecordingEngine::default()));

    let unit = TranslationUnit::build(&double(), &UnitOptions::default())?;
    submit(&unit, &mut state)?;

    let value = invoke("double", &mut state, &[Value::Number(21.0)])?;
    assert_eq!(value, Value::Array(vec![Value::Number(21.0)]));
    Ok(())
}

#[test]
fn test_invoke_before_submit_fails() {
    let mut state = EngineState::new(Box::new(RecordingEngine::default()));
    let err = invoke("double", &mut state, &[]).unwrap_err();
    assert!(matches!(err, RuntimeError::Engine(_)));
}

/// Forwards to a shared recording engine so the test can inspect it
struct Probe(Arc<Mutex<RecordingEngine>>);

impl ExecutionEngine for Probe {
    fn compile(&mut self, name: &str, source: &str) -> Result<()> {
        self.0
            .lock()
            .map_err(|_| RuntimeError::Poisoned)?
            .compile(name, source)
    }

    fn evaluate(&mut self, name: &str, args: &[Value]) -> Result<Value> {
        self.0
            .lock()
            .map_err(|_| RuntimeError::Poisoned)?
            .evaluate(name, args)
    }
}
