//! Parse pass — raw tokens → populated specifications.
//!
//! One left-to-right scan. Dash-prefixed tokens resolve to named
//! specifications, plain tokens fill positional specifications in
//! declaration order, and everything after a bare `--` is plain.

use crate::args::spec::ArgumentSpec;
use crate::error::{ArgumentError, Result};

/// End-of-options delimiter.
pub(crate) const DELIMITER: &str = "--";

/// What a successful pass leaves behind besides the specification results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ParseOutput {
    /// Plain tokens no positional specification claimed.
    pub trailing: Vec<String>,
    /// Tokens attributed to an option occurrence or a plain slot.
    pub consumed: usize,
}

/// How a raw token is read before consumption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    /// The literal `--`.
    Delimiter,
    /// Dash-prefixed; carries the name with up to two dashes stripped.
    Option(&'a str),
    /// Anything else.
    Plain(&'a str),
}

fn classify(token: &str) -> Token<'_> {
    if token == DELIMITER {
        Token::Delimiter
    } else if token.starts_with('-') {
        Token::Option(strip_dashes(token))
    } else {
        Token::Plain(token)
    }
}

/// Strip at most two leading dashes.
fn strip_dashes(token: &str) -> &str {
    let once = token.strip_prefix('-').unwrap_or(token);
    once.strip_prefix('-').unwrap_or(once)
}

/// State of a single pass.
struct Pass<'s> {
    specs: &'s mut [ArgumentSpec],
    positional: Vec<usize>,
    next_positional: usize,
    output: ParseOutput,
}

impl Pass<'_> {
    fn plain(&mut self, token: &str) -> Result<()> {
        match self.positional.get(self.next_positional) {
            Some(&id) => {
                tracing::trace!(token, id, "positional");
                self.specs[id].assign(token)?;
                self.next_positional += 1;
            }
            None => {
                tracing::trace!(token, "trailing");
                self.output.trailing.push(token.to_string());
            }
        }
        self.output.consumed += 1;
        Ok(())
    }

    fn find_named(&self, name: &str, token: &str) -> Result<usize> {
        self.specs
            .iter()
            .position(|spec| !spec.is_positional() && spec.answers_to(name))
            .ok_or_else(|| ArgumentError::UnknownOption {
                token: token.to_string(),
            })
    }

    /// Resolve the option at `index` and return how many tokens it used.
    fn option(&mut self, tokens: &[String], index: usize, name: &str) -> Result<usize> {
        let token = &tokens[index];
        let id = self.find_named(name, token)?;
        let spec = &mut self.specs[id];

        let used = if spec.kind.expects_value() {
            let value = tokens
                .get(index + 1)
                .ok_or_else(|| ArgumentError::MissingParameter {
                    token: token.clone(),
                })?;
            tracing::trace!(token = %token, value = %value, id, "option with value");
            spec.assign(value)?;
            2
        } else {
            tracing::trace!(token = %token, id, "flag");
            spec.mark_present();
            1
        };

        self.output.consumed += 1;
        Ok(used)
    }

    fn check_required(&self) -> Result<()> {
        for (id, spec) in self.specs.iter().enumerate() {
            if spec.required && !spec.is_set() {
                let argument = if spec.is_positional() {
                    let slot = self.positional.iter().position(|&p| p == id).unwrap_or(0);
                    format!("<positional #{}>", slot + 1)
                } else {
                    spec.display_names()
                };
                return Err(ArgumentError::MissingRequiredArgument { argument });
            }
        }
        Ok(())
    }
}

/// Run the single parse pass over `tokens`.
///
/// On failure, specifications already assigned keep whatever they received;
/// callers treat the whole pass as unusable.
pub(crate) fn parse(specs: &mut [ArgumentSpec], tokens: &[String]) -> Result<ParseOutput> {
    let positional: Vec<usize> = specs
        .iter()
        .enumerate()
        .filter(|(_, spec)| spec.is_positional())
        .map(|(id, _)| id)
        .collect();

    tracing::debug!(
        tokens = tokens.len(),
        named = specs.len() - positional.len(),
        positional = positional.len(),
        "parsing arguments"
    );

    let mut pass = Pass {
        specs,
        positional,
        next_positional: 0,
        output: ParseOutput::default(),
    };

    let mut index = 0;
    while index < tokens.len() {
        match classify(&tokens[index]) {
            Token::Delimiter => {
                for token in &tokens[index + 1..] {
                    pass.plain(token)?;
                }
                break;
            }
            Token::Option(name) => {
                index += pass.option(tokens, index, name)?;
            }
            Token::Plain(token) => {
                pass.plain(token)?;
                index += 1;
            }
        }
    }

    pass.check_required()?;

    tracing::debug!(
        consumed = pass.output.consumed,
        trailing = pass.output.trailing.len(),
        "arguments parsed"
    );
    Ok(pass.output)
}
