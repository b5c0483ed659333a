use crate::error_handling::*;
use regex::Regex;
use std::sync::LazyLock;

pub const DEFAULT_MAX_OPERATORS: usize = 99;

static SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?[0-9].*[0-9]+$").expect("shape pattern"));

// `//` never wins: the single-character class is tried first at every position.
static OPERATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-+*/^]|//").expect("operator pattern"));

/// Screens a line before it reaches the evaluator.
#[derive(Clone, Debug)]
pub struct Validator {
    max_operators: usize,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_OPERATORS)
    }
}

impl Validator {
    pub fn new(max_operators: usize) -> Self {
        Self{max_operators}
    }

    pub fn validate(&self, expression: &str) -> Result<()> {
        if !SHAPE.is_match(expression) {
            return Err(CalcError::malformed_expression);
        }
        if count_operators(expression) > self.max_operators {
            return Err(CalcError::too_many_operators(self.max_operators));
        }
        Ok(())
    }
}

pub fn count_operators(expression: &str) -> usize {
    OPERATOR.find_iter(expression).count()
}
