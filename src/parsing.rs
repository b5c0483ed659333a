use crate::error_handling::*;
use crate::scanning::*;
use std::str::FromStr;

#[derive(Clone, Copy)]
pub enum UnaryOperator {
    negative,
    positive,
}

impl UnaryOperator {
    pub fn symbol(&self) -> char {
        use UnaryOperator::*;
        match self {
            positive => '+',
            negative => '-',
        }
    }

    pub fn call(&self, value: f64) -> f64 {
        use UnaryOperator::*;
        match self {
            positive => value,
            negative => -value,
        }
    }
}

#[derive(Clone, Copy)]
pub enum BinaryOperator {
    addition,
    subtraction,
    multiplication,
    division,
}

impl BinaryOperator {
    pub fn symbol(&self) -> char {
        use BinaryOperator::*;
        match self {
            addition => '+',
            subtraction => '-',
            multiplication => '*',
            division => '/',
        }
    }

    pub fn call(&self, left: f64, right: f64) -> f64 {
        use BinaryOperator::*;
        match self {
            addition => left + right,
            subtraction => left - right,
            multiplication => left * right,
            division => left / right,
        }
    }
}

const SIGNS: [UnaryOperator; 2] = [UnaryOperator::positive, UnaryOperator::negative];
const ADDITIVE: [BinaryOperator; 2] = [BinaryOperator::addition, BinaryOperator::subtraction];
const MULTIPLICATIVE: [BinaryOperator; 2] = [BinaryOperator::multiplication, BinaryOperator::division];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PseudoFunction {
    power,
    floor,
}

impl PseudoFunction {
    pub const ALL: [PseudoFunction; 2] = [PseudoFunction::power, PseudoFunction::floor];

    pub fn name(&self) -> &'static str {
        use PseudoFunction::*;
        match self {
            power => "Math.pow",
            floor => "Math.floor",
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct UnknownFunction;

impl FromStr for PseudoFunction {
    type Err = UnknownFunction;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|function| function.name() == s)
            .ok_or(UnknownFunction)
    }
}

/// One-pass recursive-descent evaluator.
///
/// ```text
/// expression := term (('+' | '-') term)*
/// term       := factor (('*' | '/') factor)*
/// factor     := ('+' | '-') factor | '(' expression ')' | number
///             | identifier ('(' expression ')' | factor)
/// ```
///
/// Values are computed while parsing; nothing is built in between. A missing
/// `)` is tolerated.
pub struct Parser<'a> {
    source: StringScanner<'a>,
    depth: usize,
    max_depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(expression: &'a str, max_depth: usize) -> Self {
        Self {
            source: StringScanner::new(expression),
            depth: 0,
            max_depth,
        }
    }

    pub fn parse(mut self) -> Result<f64> {
        let value = self.parse_expression()?;
        match self.source.get_current() {
            Some(character) => Err(CalcError::trailing_input(character)),
            None => Ok(value),
        }
    }

    fn eat_binary(&mut self, candidates: &[BinaryOperator]) -> Option<BinaryOperator> {
        candidates.iter().copied().find(|operator| self.source.eat(operator.symbol()))
    }

    fn parse_expression(&mut self) -> Result<f64> {
        let mut value = self.parse_term()?;
        while let Some(operator) = self.eat_binary(&ADDITIVE) {
            value = operator.call(value, self.parse_term()?);
        }
        Ok(value)
    }

    fn parse_term(&mut self) -> Result<f64> {
        let mut value = self.parse_factor()?;
        while let Some(operator) = self.eat_binary(&MULTIPLICATIVE) {
            value = operator.call(value, self.parse_factor()?);
        }
        Ok(value)
    }

    fn parse_factor(&mut self) -> Result<f64> {
        if self.depth == self.max_depth {
            return Err(CalcError::nesting_too_deep(self.max_depth));
        }
        self.depth += 1;
        let value = self.parse_atom();
        self.depth -= 1;
        value
    }

    fn parse_atom(&mut self) -> Result<f64> {
        if let Some(sign) = SIGNS.into_iter().find(|sign| self.source.eat(sign.symbol())) {
            return Ok(sign.call(self.parse_factor()?));
        }

        if self.source.eat('(') {
            let value = self.parse_expression()?;
            self.source.eat(')');
            return Ok(value);
        }

        if let Some(function) = PseudoFunction::ALL
            .into_iter()
            .find(|function| self.source.eat_keyword(function.name()))
        {
            return self.parse_call(function.name());
        }

        match self.source.get_current() {
            Some(character) if is_digit_or_dot(character) => {
                let content = self.source.take_while(is_digit_or_dot);
                content
                    .parse()
                    .map_err(|_| CalcError::invalid_number(content.into()))
            },
            Some(character) if character.is_ascii_lowercase() => {
                let name = self.source.take_while(|c| c.is_ascii_lowercase());
                self.parse_call(name)
            },
            Some(character) => Err(CalcError::unexpected_character(character)),
            None => Err(CalcError::abrupt_end),
        }
    }

    fn parse_call(&mut self, name: &str) -> Result<f64> {
        use PseudoFunction::*;

        let function = name.parse::<PseudoFunction>().ok();
        let (argument, exponent) = if self.source.eat('(') {
            let argument = self.parse_expression()?;
            let exponent = if function == Some(power) && self.source.eat(',') {
                Some(self.parse_expression()?)
            } else {
                None
            };
            self.source.eat(')');
            (argument, exponent)
        } else {
            (self.parse_factor()?, None)
        };

        match function {
            Some(power) => {
                let exponent = match exponent {
                    Some(exponent) => exponent,
                    None => self.parse_factor()?,
                };
                Ok(argument.powf(exponent))
            },
            Some(floor) => Ok(argument.floor()),
            None => Err(CalcError::unknown_function(name.into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(expression: &str) -> Result<f64> {
        Parser::new(expression, 64).parse()
    }

    #[test]
    fn precedence_and_associativity() {
        assert_eq!(parse("2+3*4"), Ok(14.0));
        assert_eq!(parse("10-4-3"), Ok(3.0));
        assert_eq!(parse("64/4/2"), Ok(8.0));
        assert_eq!(parse("(2+3)*4"), Ok(20.0));
    }

    #[test]
    fn spaces_before_delimiters() {
        assert_eq!(parse(" 1 + 2 * ( 3 - 1 ) "), Ok(5.0));
    }

    #[test]
    fn unary_signs_stack() {
        assert_eq!(parse("--5"), Ok(5.0));
        assert_eq!(parse("-+-5"), Ok(5.0));
        assert_eq!(parse("2*-3"), Ok(-6.0));
    }

    #[test]
    fn pseudo_functions() {
        assert_eq!(parse("Math.pow(2,10)"), Ok(1024.0));
        assert_eq!(parse("Math.pow(2)3"), Ok(8.0));
        assert_eq!(parse("Math.pow2 3"), Ok(8.0));
        assert_eq!(parse("Math.floor(1.0*7/2)"), Ok(3.0));
        assert_eq!(parse("Math.floor3.7"), Ok(3.0));
        assert_eq!(parse("Math.floor(-0.5)"), Ok(-1.0));
    }

    #[test]
    fn missing_closing_paren_is_tolerated() {
        assert_eq!(parse("(1+2"), Ok(3.0));
        assert_eq!(parse("Math.floor(7/2"), Ok(3.0));
    }

    #[test]
    fn comma_only_belongs_to_pow() {
        assert_eq!(parse("Math.floor(1,2)"), Err(CalcError::trailing_input(',')));
        assert_eq!(parse("Math.pow(1,2"), Ok(1.0));
    }

    #[test]
    fn unknown_function_after_its_argument() {
        assert_eq!(parse("foo(2)"), Err(CalcError::unknown_function("foo".into())));
        assert_eq!(parse("foo(@)"), Err(CalcError::unexpected_character('@')));
        assert_eq!(parse("math.floor(2)"), Err(CalcError::invalid_number(".".into())));
    }

    #[test]
    fn malformed_numbers() {
        assert_eq!(parse("1.2.3"), Err(CalcError::invalid_number("1.2.3".into())));
        assert_eq!(parse(".5+1."), Ok(1.5));
    }

    #[test]
    fn end_of_input_inside_a_factor() {
        assert_eq!(parse("5+"), Err(CalcError::abrupt_end));
        assert_eq!(parse(""), Err(CalcError::abrupt_end));
    }

    #[test]
    fn nesting_is_bounded() {
        let deep = format!("{}1", "(".repeat(100));
        assert_eq!(parse(&deep), Err(CalcError::nesting_too_deep(64)));
        let shallow = format!("{}1", "(".repeat(10));
        assert_eq!(parse(&shallow), Ok(1.0));
    }
}
