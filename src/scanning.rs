
pub trait Scanner {
    fn get_current(&self) -> Option<char>;
    fn advance(&mut self);
    fn is_valid(&self) -> bool;
}

/// Character cursor over an expression.
///
/// `current` is `None` once the cursor has moved past the last character,
/// which is how end of input is signalled to the parser. The index only
/// ever moves forward.
pub struct StringScanner<'a> {
    string: &'a str,
    current: Option<char>,
    index: usize,
}

pub fn is_digit_or_dot(character: char) -> bool {
    character.is_ascii_digit() || character == '.'
}

impl<'a> StringScanner<'a> {
    pub fn new(string: &'a str) -> Self {
        Self {
            string,
            current: string.chars().next(),
            index: 0,
        }
    }

    pub fn position(&self) -> usize {
        self.index
    }

    fn view(&self) -> &'a str {
        &self.string[self.index..]
    }

    fn skip_spaces(&mut self) {
        while self.current == Some(' ') {
            self.advance();
        }
    }

    /// Skips spaces, then consumes `expected` if it is under the cursor.
    pub fn eat(&mut self, expected: char) -> bool {
        self.skip_spaces();
        if self.current == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes `keyword` only if the remaining input starts with it.
    pub fn eat_keyword(&mut self, keyword: &str) -> bool {
        if self.view().starts_with(keyword) {
            self.index += keyword.len();
            self.current = self.view().chars().next();
            true
        } else {
            false
        }
    }

    pub fn take_while<P: Fn(char) -> bool>(&mut self, predicate: P) -> &'a str {
        let start = self.index;
        while self.current.filter(|&c| predicate(c)).is_some() {
            self.advance();
        }
        &self.string[start..self.index]
    }
}

impl Scanner for StringScanner<'_> {
    fn get_current(&self) -> Option<char> {
        self.current
    }

    fn advance(&mut self) {
        if let Some(character) = self.current {
            self.index += character.len_utf8();
            self.current = self.view().chars().next();
        }
    }

    fn is_valid(&self) -> bool {
        self.current.is_some()
    }
}
