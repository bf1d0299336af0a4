//! Whitespace-separated integer input.
//!
//! Every exercise reads the same course format: counts and values separated
//! by arbitrary whitespace, line breaks carrying no meaning. The whole input
//! is read up front so that solvers stay object safe, then walked lazily.

use std::io::Read;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Token stream over a fully-read input.
///
/// Tokens are borrowed from the one input buffer as they are parsed; only a
/// byte cursor moves forward.
#[derive(Debug, Clone)]
pub struct Tokens {
    input: String,
    cursor: usize,
}

impl Tokens {
    /// Read all of `reader` into the token buffer.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut input = String::new();
        reader.read_to_string(&mut input)?;
        Ok(Self { input, cursor: 0 })
    }

    /// Tokenize an in-memory string.
    pub fn parse(input: &str) -> Self {
        Self {
            input: input.to_owned(),
            cursor: 0,
        }
    }

    /// The next token and the cursor position just past it.
    fn peek(&self) -> Option<(&str, usize)> {
        let rest = &self.input[self.cursor..];
        let trimmed = rest.trim_start_matches(|c: char| c.is_ascii_whitespace());
        if trimmed.is_empty() {
            return None;
        }
        let len = trimmed
            .find(|c: char| c.is_ascii_whitespace())
            .unwrap_or(trimmed.len());
        let end = self.cursor + (rest.len() - trimmed.len()) + len;
        Some((&trimmed[..len], end))
    }

    /// Parse the next token as `T`.
    pub fn next<T: FromStr>(&mut self, field: &'static str) -> Result<T> {
        let (token, end) = self
            .peek()
            .ok_or(Error::UnexpectedEof { expected: field })?;
        let value = token.parse().map_err(|_| Error::InvalidInteger {
            field,
            token: token.to_owned(),
        })?;
        self.cursor = end;
        Ok(value)
    }

    /// Parse the next token and check it lies in `min..=max`.
    pub fn next_bounded<T>(&mut self, field: &'static str, min: T, max: T) -> Result<T>
    where
        T: FromStr + PartialOrd + Copy + Into<i128>,
    {
        let value = self.next(field)?;
        ensure_range(field, value, min, max)
    }

    /// Parse a count that is then used to read that many values.
    pub fn next_count(&mut self, field: &'static str, min: u64, max: u64) -> Result<usize> {
        let count = self.next_bounded(field, min, max)?;
        usize::try_from(count).map_err(|_| Error::OutOfRange {
            field,
            value: count.into(),
            min: min.into(),
            max: usize::MAX as i128,
        })
    }

    /// Parse the next `count` tokens as `T`.
    pub fn next_vec<T: FromStr>(&mut self, count: usize, field: &'static str) -> Result<Vec<T>> {
        (0..count).map(|_| self.next(field)).collect()
    }

    /// Fail if any token is left unread.
    pub fn finish(&self) -> Result<()> {
        match self.peek() {
            Some((token, _)) => Err(Error::TrailingInput {
                token: token.to_owned(),
            }),
            None => Ok(()),
        }
    }

    /// Number of tokens not yet consumed.
    pub fn remaining(&self) -> usize {
        self.input[self.cursor..].split_ascii_whitespace().count()
    }
}

/// Check that `value` lies in `min..=max`.
pub fn ensure_range<T>(field: &'static str, value: T, min: T, max: T) -> Result<T>
where
    T: PartialOrd + Copy + Into<i128>,
{
    if value < min || value > max {
        return Err(Error::OutOfRange {
            field,
            value: value.into(),
            min: min.into(),
            max: max.into(),
        });
    }
    Ok(value)
}

/// Check that every value is greater than the one before it.
pub fn ensure_strictly_increasing<T>(field: &'static str, values: &[T]) -> Result<()>
where
    T: PartialOrd + Copy + Into<i128>,
{
    match values.windows(2).position(|pair| pair[0] >= pair[1]) {
        Some(i) => Err(Error::NotIncreasing {
            field,
            index: i + 1,
            previous: values[i].into(),
            value: values[i + 1].into(),
        }),
        None => Ok(()),
    }
}

/// Check that no value is smaller than the one before it.
pub fn ensure_non_decreasing<T>(field: &'static str, values: &[T]) -> Result<()>
where
    T: PartialOrd + Copy + Into<i128>,
{
    match values.windows(2).position(|pair| pair[0] > pair[1]) {
        Some(i) => Err(Error::NotSorted {
            field,
            index: i + 1,
            previous: values[i].into(),
            value: values[i + 1].into(),
        }),
        None => Ok(()),
    }
}
