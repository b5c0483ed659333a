use regex::Regex;
use std::sync::LazyLock;

static DIGIT_DIVISION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)//([0-9]+)").expect("division pattern"));

static DOUBLE_SLASH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"//").expect("slash pattern"));

static OPEN_FLOOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Math\.floor\(1\.0\*([0-9]+)/([0-9]+)\)?").expect("floor pattern")
});

static DIGIT_POWER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)\^([0-9]+)").expect("power pattern"));

/// Turns `a//b` and `a^b` into the `Math.floor`/`Math.pow` calls the parser
/// understands.
///
/// Only plain digit runs are recognised as operands. Any other `//` becomes
/// an unclosed `Math.floor(1.0*`, and any other `^` is left in place.
pub fn rewrite(expression: &str) -> String {
    let expression = DIGIT_DIVISION.replace_all(expression, "Math.floor(1.0*${1}/${2})");
    let expression = DOUBLE_SLASH.replace_all(&expression, "Math.floor(1.0*");
    let expression = OPEN_FLOOR.replace_all(&expression, "Math.floor(1.0*${1}/${2})");
    DIGIT_POWER
        .replace_all(&expression, "Math.pow(${1},${2})")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_division() {
        assert_eq!(rewrite("7//2"), "Math.floor(1.0*7/2)");
        assert_eq!(rewrite("1+10//3*2"), "1+Math.floor(1.0*10/3)*2");
    }

    #[test]
    fn division_with_other_operands_stays_open() {
        assert_eq!(rewrite("(7)//2"), "(7)Math.floor(1.0*2");
        assert_eq!(rewrite("1+//(7)/2"), "1+Math.floor(1.0*(7)/2");
        assert_eq!(rewrite("7 // 2"), "7 Math.floor(1.0* 2");
    }

    #[test]
    fn leading_double_slash_gets_closed() {
        assert_eq!(rewrite("//7/2"), "Math.floor(1.0*7/2)");
    }

    #[test]
    fn digit_power() {
        assert_eq!(rewrite("2^10"), "Math.pow(2,10)");
        assert_eq!(rewrite("2^3^2"), "Math.pow(2,3)^2");
        assert_eq!(rewrite("(2)^3"), "(2)^3");
    }

    #[test]
    fn untouched_without_operators() {
        assert_eq!(rewrite("1+2*3"), "1+2*3");
    }
}
