//! Path patterns and segment matching.
//!
//! A pattern such as `/todos/{id}` is split on `/` into segments. A segment
//! wrapped in braces is a capture; every other segment is a literal compared
//! byte-for-byte. Leading and trailing slashes are ignored on both sides, and a
//! pattern only ever matches a path with the same number of segments.
//!
//! Patterns are not validated. An unbalanced segment like `{id` is literal text.

use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Capture(String),
}

impl Segment {
    fn parse(s: &str) -> Self {
        match s.strip_prefix('{').and_then(|rest| rest.strip_suffix('}')) {
            Some(name) => Self::Capture(name.to_owned()),
            None => Self::Literal(s.to_owned()),
        }
    }
}

/// A registered path template.
#[derive(Debug, Clone)]
pub(crate) struct Pattern {
    raw: String,
    segments: Vec<Segment>,
}

impl Pattern {
    pub(crate) fn parse(raw: &str) -> Self {
        Self {
            raw: raw.to_owned(),
            segments: split(raw).map(Segment::parse).collect(),
        }
    }

    /// The pattern exactly as it was registered.
    pub(crate) fn as_str(&self) -> &str {
        &self.raw
    }

    /// `true` when the pattern has no capture segments.
    pub(crate) fn is_literal(&self) -> bool {
        self.segments.iter().all(|s| matches!(s, Segment::Literal(_)))
    }

    /// Matches `path` against this pattern, returning the captured values.
    ///
    /// Captures bind exactly one non-empty segment; `/todos//` does not match
    /// `/todos/{id}`.
    pub(crate) fn matches(&self, path: &str) -> Option<Params> {
        let parts: Vec<&str> = split(path).collect();
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = Params::default();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Literal(lit) if lit == part => {}
                Segment::Literal(_) => return None,
                Segment::Capture(_) if part.is_empty() => return None,
                Segment::Capture(name) => params.insert(name, part),
            }
        }
        Some(params)
    }
}

fn split(path: &str) -> std::str::Split<'_, char> {
    path.trim_matches('/').split('/')
}

/// Named path parameters extracted for one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(HashMap<String, String>);

impl Params {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn insert(&mut self, name: &str, value: &str) {
        self.0.insert(name.to_owned(), value.to_owned());
    }
}
