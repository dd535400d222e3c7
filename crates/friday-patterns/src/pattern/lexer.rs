//! Pattern lexer converting pattern strings into semantic tokens.

use crate::errors::PatternError;

use super::placeholder::{PlaceholderSpec, parse_placeholder};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    Literal(String),
    Placeholder {
        start: usize,
        name: String,
        hint: Option<String>,
    },
    OpenBrace {
        index: usize,
    },
    CloseBrace {
        index: usize,
    },
}

fn flush_literal(literal: &mut String, tokens: &mut Vec<Token>) {
    if !literal.is_empty() {
        tokens.push(Token::Literal(std::mem::take(literal)));
    }
}

fn starts_placeholder(next: Option<char>) -> bool {
    next.is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
}

pub(crate) fn lex_pattern(pattern: &str) -> Result<Vec<Token>, PatternError> {
    let mut tokens = Vec::new();
    let mut literal = String::new();
    let mut chars = pattern.char_indices().peekable();

    while let Some((index, ch)) = chars.next() {
        let next = chars.peek().map(|&(_, c)| c);
        match ch {
            '\\' => match chars.next() {
                Some((_, escaped)) => literal.push(escaped),
                None => literal.push('\\'),
            },
            '{' if next == Some('{') => {
                chars.next();
                literal.push('{');
            }
            '{' if starts_placeholder(next) => {
                flush_literal(&mut literal, &mut tokens);
                let PlaceholderSpec {
                    name,
                    hint,
                    start,
                    end,
                } = parse_placeholder(pattern, index)?;
                while chars.next_if(|&(i, _)| i < end).is_some() {}
                tokens.push(Token::Placeholder { start, name, hint });
            }
            '{' => {
                flush_literal(&mut literal, &mut tokens);
                tokens.push(Token::OpenBrace { index });
            }
            '}' if next == Some('}') => {
                chars.next();
                literal.push('}');
            }
            '}' => {
                flush_literal(&mut literal, &mut tokens);
                tokens.push(Token::CloseBrace { index });
            }
            other => literal.push(other),
        }
    }

    flush_literal(&mut literal, &mut tokens);
    Ok(tokens)
}
