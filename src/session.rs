use crate::evaluating::*;
use crate::formatting::*;
use crate::validating::*;
use std::io::{BufRead, Write};

#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    english,
    russian,
}

pub struct Messages {
    pub prompt: &'static str,
    pub result: &'static str,
    pub error: &'static str,
    pub invalid: &'static str,
    pub exit_keyword: &'static str,
}

impl Language {
    pub fn messages(&self) -> Messages {
        use Language::*;
        match self {
            english => Messages {
                prompt: "Enter a math expression: ",
                result: "Result",
                error: "Error",
                invalid: "Invalid expression",
                exit_keyword: "exit",
            },
            russian => Messages {
                prompt: "Введите математическое выражение: ",
                result: "Результат",
                error: "Ошибка",
                invalid: "Некорректное выражение",
                exit_keyword: "выход",
            },
        }
    }
}

/// Prompt, read, evaluate, print; until the exit keyword or end of input.
pub struct Session {
    evaluator: Evaluator,
    validator: Validator,
    messages: Messages,
}

impl Session {
    pub fn new(evaluator: Evaluator, validator: Validator, language: Language) -> Self {
        Self{evaluator, validator, messages: language.messages()}
    }

    fn is_exit(&self, line: &str) -> bool {
        line.to_lowercase() == self.messages.exit_keyword.to_lowercase()
    }

    /// Answers a single line, or `None` if it asks to stop.
    pub fn respond(&self, line: &str) -> Option<String> {
        if self.is_exit(line) {
            return None;
        }

        let response = match self.validator.validate(line) {
            Err(e) => {
                tracing::debug!(%line, error = %e, "rejected");
                self.messages.invalid.to_string()
            },
            Ok(()) => match self.evaluator.evaluate(line) {
                Ok(value) => format!("{}: {}", self.messages.result, format_result(value)),
                Err(e) => format!("{}: {}", self.messages.error, e),
            },
        };
        Some(response)
    }

    pub fn run<R: BufRead, W: Write>(&self, input: R, mut output: W) -> std::io::Result<()> {
        let mut lines = input.lines();
        loop {
            write!(output, "{}", self.messages.prompt)?;
            output.flush()?;

            let Some(line) = lines.next() else {
                break;
            };
            let line = line?;

            match self.respond(line.trim_end_matches('\r')) {
                Some(response) => writeln!(output, "{response}")?,
                None => break,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(language: Language) -> Session {
        Session::new(Evaluator::default(), Validator::default(), language)
    }

    #[test]
    fn responds_with_result_or_error() {
        let session = session(Language::english);
        assert_eq!(session.respond("2+2").as_deref(), Some("Result: 4.0"));
        assert_eq!(session.respond("5/0").as_deref(), Some("Result: Infinity"));
        assert_eq!(
            session.respond("5+@2").as_deref(),
            Some("Error: unexpected character, '@', encountered")
        );
        assert_eq!(session.respond("(1+2)").as_deref(), Some("Invalid expression"));
    }

    #[test]
    fn exit_keyword_ignores_case() {
        let english = session(Language::english);
        assert_eq!(english.respond("EXIT"), None);
        assert!(english.respond("exit ").is_some());

        let russian = session(Language::russian);
        assert_eq!(russian.respond("ВЫХОД"), None);
        assert_eq!(russian.respond("1*3").as_deref(), Some("Результат: 3.0"));
    }
}
