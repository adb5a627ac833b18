//! Argument templates.
//!
//! A template is a program and a list of argument words. A word may embed
//! `{name}` placeholders which are substituted with the current value of the
//! axis called `name`; `{{` and `}}` stand for literal braces. A template
//! without any placeholders is positional: the axis values are appended after
//! the words, in axis order.

use crate::axis::{is_valid_name, Axis};
use crate::error::SweepError;
use std::{iter, mem};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Piece {
    Literal(String),
    Placeholder(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Word(Vec<Piece>);

impl Word {
    fn literal(text: &str) -> Self {
        Self(vec![Piece::Literal(text.to_string())])
    }

    fn parse(text: &str) -> Result<Self, SweepError> {
        let malformed = || SweepError::MalformedTemplate(text.to_string());
        let mut pieces = Vec::new();
        let mut literal = String::new();
        let mut chars = text.chars().peekable();
        while let Some(c) = chars.next() {
            match c {
                '{' if chars.peek() == Some(&'{') => {
                    chars.next();
                    literal.push('{');
                }
                '}' if chars.peek() == Some(&'}') => {
                    chars.next();
                    literal.push('}');
                }
                '{' => {
                    let mut name = String::new();
                    loop {
                        match chars.next() {
                            Some('}') => break,
                            Some(c) => name.push(c),
                            None => return Err(malformed()),
                        }
                    }
                    if !is_valid_name(&name) {
                        return Err(malformed());
                    }
                    if !literal.is_empty() {
                        pieces.push(Piece::Literal(mem::take(&mut literal)));
                    }
                    pieces.push(Piece::Placeholder(name));
                }
                '}' => return Err(malformed()),
                c => literal.push(c),
            }
        }
        if !literal.is_empty() || pieces.is_empty() {
            pieces.push(Piece::Literal(literal));
        }
        Ok(Self(pieces))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    program: String,
    words: Vec<Word>,
}

impl Template {
    pub fn new<P, I, S>(program: P, args: I) -> Result<Self, SweepError>
    where
        P: Into<String>,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let program = program.into();
        if program.is_empty() {
            return Err(SweepError::EmptyProgram);
        }
        let words = args
            .into_iter()
            .map(|arg| Word::parse(arg.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { program, words })
    }

    #[inline]
    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn is_positional(&self) -> bool {
        self.placeholders().next().is_none()
    }

    pub fn placeholders(&self) -> impl Iterator<Item = &str> + '_ {
        self.words
            .iter()
            .flat_map(|word| word.0.iter())
            .filter_map(|piece| match piece {
                Piece::Placeholder(name) => Some(name.as_str()),
                Piece::Literal(_) => None,
            })
    }

    /// Returns a template that runs `program` with `flags`, followed by this
    /// template's program and words. The prefix is taken literally.
    pub fn prefixed<S: AsRef<str>>(&self, program: &str, flags: &[S]) -> Self {
        let words = flags
            .iter()
            .map(|flag| Word::literal(flag.as_ref()))
            .chain(iter::once(Word::literal(&self.program)))
            .chain(self.words.iter().cloned())
            .collect();
        Self {
            program: program.to_string(),
            words,
        }
    }

    pub(crate) fn bind(&self, axes: &[Axis]) -> Result<Binding, SweepError> {
        let words = self
            .words
            .iter()
            .map(|word| {
                word.0
                    .iter()
                    .map(|piece| match piece {
                        Piece::Literal(text) => Ok(Slot::Literal(text.clone())),
                        Piece::Placeholder(name) => axes
                            .iter()
                            .position(|axis| axis.name() == name)
                            .map(Slot::Axis)
                            .ok_or_else(|| SweepError::UnknownPlaceholder(name.clone())),
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Binding {
            program: self.program.clone(),
            words,
            positional: self.is_positional(),
        })
    }
}

/// Escapes braces so that `text` is taken literally by [`Template::new`].
pub fn escape(text: &str) -> String {
    text.replace('{', "{{").replace('}', "}}")
}

#[derive(Debug, Clone)]
enum Slot {
    Literal(String),
    Axis(usize),
}

/// A template whose placeholders have been resolved to axis positions.
#[derive(Debug, Clone)]
pub(crate) struct Binding {
    program: String,
    words: Vec<Vec<Slot>>,
    positional: bool,
}

impl Binding {
    #[inline]
    pub(crate) fn program(&self) -> &str {
        &self.program
    }

    /// `coordinates[i]` indexes into the values of `axes[i]`.
    pub(crate) fn render(&self, axes: &[Axis], coordinates: &[usize]) -> Vec<String> {
        let value = |axis: usize| axes[axis].values()[coordinates[axis]].as_str();
        let mut args = self
            .words
            .iter()
            .map(|slots| {
                slots
                    .iter()
                    .map(|slot| match slot {
                        Slot::Literal(text) => text.as_str(),
                        Slot::Axis(axis) => value(*axis),
                    })
                    .collect::<String>()
            })
            .collect::<Vec<_>>();
        if self.positional {
            args.extend((0..axes.len()).map(|axis| value(axis).to_string()));
        }
        args
    }
}
