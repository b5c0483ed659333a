use crate::error_handling::*;
use crate::parsing::*;
use crate::rewriting::*;

pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Rewrites and evaluates expressions. Holds no per-expression state, so one
/// instance can be reused for any number of calls.
#[derive(Clone, Debug)]
pub struct Evaluator {
    max_depth: usize,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}

impl Evaluator {
    pub fn new(max_depth: usize) -> Self {
        Self{max_depth}
    }

    pub fn evaluate(&self, expression: &str) -> Result<f64> {
        let rewritten = rewrite(expression);
        tracing::debug!(%expression, %rewritten, "evaluating");
        let value = Parser::new(&rewritten, self.max_depth).parse()?;
        tracing::trace!(value, "evaluated");
        Ok(value)
    }
}

pub fn calculate(expression: &str) -> Result<f64> {
    Evaluator::default().evaluate(expression)
}
