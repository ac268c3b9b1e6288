//! Route matching logic.
//!
//! # Responsibilities
//! - Match the request method against an allowed set
//! - Match the path shape: segment count plus literal segments
//! - Combine conditions with AND semantics
//!
//! # Design Decisions
//! - Paths are split on `/` with no trailing-slash normalization
//! - Literal segments are case-sensitive
//! - An `:id` segment matches only an unsigned decimal integer

use axum::http::Method;

/// Trait for matching requests against conditions.
pub trait Matcher: Send + Sync + std::fmt::Debug {
    /// Returns true if the method and path segments match this condition.
    fn matches(&self, method: &Method, segments: &[&str]) -> bool;
}

/// Split a request path the way route patterns are split.
///
/// `"/artists/1"` becomes `["", "artists", "1"]`.
pub fn split_path(path: &str) -> Vec<&str> {
    path.split('/').collect()
}

/// Matches one of a fixed set of methods.
#[derive(Debug, Clone)]
pub struct MethodMatcher {
    methods: Vec<Method>,
}

impl MethodMatcher {
    pub fn new(methods: impl IntoIterator<Item = Method>) -> Self {
        Self {
            methods: methods.into_iter().collect(),
        }
    }
}

impl Matcher for MethodMatcher {
    fn matches(&self, method: &Method, _segments: &[&str]) -> bool {
        self.methods.contains(method)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Id,
}

/// Matches a path shape such as `/artists/:id/albums`.
#[derive(Debug, Clone)]
pub struct PathPattern {
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Compile a pattern. Any segment starting with `:` captures an ID.
    pub fn new(pattern: &str) -> Self {
        let segments = split_path(pattern)
            .into_iter()
            .map(|s| {
                if s.starts_with(':') {
                    Segment::Id
                } else {
                    Segment::Literal(s.to_string())
                }
            })
            .collect();
        Self { segments }
    }

    /// The value of the first `:id` segment, once the pattern has matched.
    pub fn capture(&self, segments: &[&str]) -> Option<u64> {
        self.segments
            .iter()
            .zip(segments)
            .find(|(pattern, _)| **pattern == Segment::Id)
            .and_then(|(_, raw)| parse_id(raw))
    }
}

impl Matcher for PathPattern {
    fn matches(&self, _method: &Method, segments: &[&str]) -> bool {
        self.segments.len() == segments.len()
            && self.segments.iter().zip(segments).all(|(pattern, raw)| match pattern {
                Segment::Literal(literal) => literal == raw,
                Segment::Id => parse_id(raw).is_some(),
            })
    }
}

/// Parse an ID segment. Signs, whitespace and empty segments are rejected.
pub fn parse_id(raw: &str) -> Option<u64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

/// Combines multiple matchers with AND semantics.
#[derive(Debug)]
pub struct AndMatcher {
    matchers: Vec<Box<dyn Matcher>>,
}

impl AndMatcher {
    pub fn new(matchers: Vec<Box<dyn Matcher>>) -> Self {
        Self { matchers }
    }
}

impl Matcher for AndMatcher {
    fn matches(&self, method: &Method, segments: &[&str]) -> bool {
        // All matchers must pass (AND)
        self.matchers.iter().all(|m| m.matches(method, segments))
    }
}
