//! Line-oriented manifest parser
//!
//! A single forward pass over the input lines. Each line is classified,
//! then folded into an [`Accumulator`] that holds the current group and the
//! record under construction. A record is committed to the current group
//! on a blank line, a group-code line, the next record-start line, or at
//! end of input. Lines that cannot be classified are skipped; parsing
//! never fails.

use crate::record::{GroupedData, PersonRecord, DEFAULT_GROUP};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// `09` plus two digits at a word boundary (next char is not [0-9A-Za-z_])
    static ref GROUP_CODE: Regex =
        Regex::new(r"^(09[0-9]{2})(?:[^0-9A-Za-z_]|$)").expect("group code pattern");

    /// Digit run followed by whitespace
    static ref RECORD_START: Regex = Regex::new(r"^([0-9]+)\s").expect("record start pattern");

    /// Digits immediately followed by exactly one letter, e.g. `17B`
    static ref SEAT: Regex = Regex::new(r"^[0-9]+[A-Za-z]$").expect("seat pattern");
}

/// Classification of one physical input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Whitespace only; terminates the record under construction
    Blank,

    /// Flight code line; anything after the code is ignored
    GroupCode(&'a str),

    /// Start of a new record
    RecordStart { number: &'a str, data: &'a str },

    /// Anything else, appended to the record under construction if there is one
    Continuation(&'a str),
}

/// Classify a line. The group-code check wins over the record-start check.
pub fn classify(line: &str) -> LineKind<'_> {
    let line = line.trim();
    if line.is_empty() {
        return LineKind::Blank;
    }

    if let Some(code) = GROUP_CODE.captures(line).and_then(|caps| caps.get(1)) {
        return LineKind::GroupCode(code.as_str());
    }

    if let Some(caps) = RECORD_START.captures(line) {
        if let (Some(prefix), Some(number)) = (caps.get(0), caps.get(1)) {
            return LineKind::RecordStart {
                number: number.as_str(),
                data: line[prefix.end()..].trim(),
            };
        }
    }

    LineKind::Continuation(line)
}

/// Record whose detail lines are still being read
#[derive(Debug)]
struct PendingRecord {
    number: String,
    data: String,
}

/// Fold state threaded through the line sequence
#[derive(Debug)]
struct Accumulator {
    current_group: String,
    pending: Option<PendingRecord>,
    groups: GroupedData,
}

impl Accumulator {
    fn new() -> Self {
        Self {
            current_group: DEFAULT_GROUP.to_string(),
            pending: None,
            groups: GroupedData::new(),
        }
    }

    fn step(mut self, line: &str) -> Self {
        match classify(line) {
            LineKind::Blank => self.commit(),
            LineKind::GroupCode(code) => {
                self.commit();
                self.current_group = code.to_string();
            }
            LineKind::RecordStart { number, data } => {
                self.commit();
                self.pending = Some(PendingRecord {
                    number: number.to_string(),
                    data: data.to_string(),
                });
            }
            LineKind::Continuation(text) => {
                if let Some(pending) = self.pending.as_mut() {
                    pending.data.push(' ');
                    pending.data.push_str(text);
                }
            }
        }
        self
    }

    fn commit(&mut self) {
        if let Some(pending) = self.pending.take() {
            let record = extract_fields(&pending.number, &pending.data, &self.current_group);
            self.groups.push(&self.current_group, record);
        }
    }

    fn finish(mut self) -> GroupedData {
        self.commit();
        self.groups
    }
}

/// Parse raw manifest text into records grouped by flight code
///
/// Pure function of its input: the same text always yields the same groups.
pub fn parse(raw: &str) -> GroupedData {
    raw.lines()
        .fold(Accumulator::new(), Accumulator::step)
        .finish()
}

/// Split detail data on runs of commas and spaces, dropping blank tokens
pub fn tokenize(data: &str) -> Vec<&str> {
    data.split([',', ' '])
        .filter(|part| !part.trim().is_empty())
        .collect()
}

/// Index of the first seat-shaped token, scanning left to right
pub fn find_seat(tokens: &[&str]) -> Option<usize> {
    tokens.iter().position(|token| SEAT.is_match(token))
}

/// Build a record from its number, accumulated detail data and group
///
/// The seat token is pulled out first; the remaining tokens map by
/// position to surname, given name and class, and the rest become `other`.
pub fn extract_fields(number: &str, data: &str, group: &str) -> PersonRecord {
    let mut tokens = tokenize(data);
    let seat = find_seat(&tokens)
        .map(|index| tokens.remove(index))
        .unwrap_or_default();

    let mut rest = tokens.into_iter();
    let surname = rest.next().unwrap_or_default();
    let given_name = rest.next().unwrap_or_default();
    let class = rest.next().unwrap_or_default();
    let other = rest.collect::<Vec<_>>().join(" ");

    PersonRecord {
        number: number.to_string(),
        surname: surname.to_string(),
        given_name: given_name.to_string(),
        class: class.to_string(),
        seat: seat.to_string(),
        other,
        group: group.to_string(),
    }
}
