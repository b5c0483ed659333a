use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum CalcError {
    #[error("unexpected character, '{0}', encountered")]
    unexpected_character(char),

    #[error("'{0}' is not a valid number")]
    invalid_number(String),

    #[error("unknown function: {0}")]
    unknown_function(String),

    #[error("did not expect '{0}' after the expression")]
    trailing_input(char),

    #[error("expression ended abruptly")]
    abrupt_end,

    #[error("expression is nested deeper than {0} levels")]
    nesting_too_deep(usize),

    #[error("expression must start with a number and end with a digit")]
    malformed_expression,

    #[error("expression has more than {0} operators")]
    too_many_operators(usize),
}

pub type Result<T> = std::result::Result<T, CalcError>;
