//! Record parser: text buffer → ordered token list.
//!
//! Each line is one record: `x, y, DIRECTION[, free text]`. Lines that do not
//! match are skipped without any report, but still count toward the line
//! numbering of the lines after them. Everything after the third comma is an
//! opaque tail that the parser ignores.

use crate::id::LineId;
use crate::model::{Direction, Token};
use smallvec::SmallVec;
use winnow::ascii::digit1;
use winnow::combinator::opt;
use winnow::prelude::*;
use winnow::token::one_of;

/// One valid line, borrowed from the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record<'a> {
    pub x: u32,
    pub y: u32,
    pub direction: Direction,
    /// Raw text after the third comma, untrimmed. `None` when the line has
    /// fewer than three commas.
    pub tail: Option<&'a str>,
}

/// Parse a whole buffer into tokens, in file order.
#[must_use = "parsing result should be used"]
pub fn parse_tokens(text: &str) -> Vec<Token> {
    text.split('\n')
        .enumerate()
        .filter_map(|(index, line)| {
            let record = parse_record(line)?;
            Some(Token::new(
                record.x,
                record.y,
                record.direction,
                LineId::from_index(index),
            ))
        })
        .collect()
}

/// Parse a single line. Returns `None` for anything that is not a record.
pub fn parse_record(line: &str) -> Option<Record<'_>> {
    let fields = split_fields(line);
    if fields.len() < 3 {
        return None;
    }

    let x = parse_coordinate(fields[0])?;
    let y = parse_coordinate(fields[1])?;
    let direction = Direction::from_label(fields[2].trim())?;

    Some(Record {
        x,
        y,
        direction,
        tail: fields.get(3).copied(),
    })
}

/// Text after the third comma, untrimmed. `None` when the line has fewer
/// than three commas.
pub fn record_tail(line: &str) -> Option<&str> {
    split_fields(line).get(3).copied()
}

/// `x`, `y`, direction, then everything else as one field.
fn split_fields(line: &str) -> SmallVec<[&str; 4]> {
    line.splitn(4, ',').collect()
}

/// Read a non-negative coordinate.
///
/// Accepts an optional sign followed by a digit run and ignores whatever
/// follows the digits (`"12px"` reads as 12). Negative values and values that
/// overflow `u32` are rejected.
fn parse_coordinate(field: &str) -> Option<u32> {
    let mut input = field.trim();
    let (negative, digits) = signed_digits.parse_next(&mut input).ok()?;
    let value: u32 = digits.parse().ok()?;
    if negative && value != 0 {
        return None;
    }
    Some(value)
}

fn signed_digits<'a>(input: &mut &'a str) -> ModalResult<(bool, &'a str)> {
    (opt(one_of(['+', '-'])), digit1)
        .map(|(sign, digits): (Option<char>, &'a str)| (sign == Some('-'), digits))
        .parse_next(input)
}
