//! Path pattern matching.
//!
//! # Responsibilities
//! - Parse route patterns (`/`, `/about`, `/:name`, `/users/:id/posts`)
//! - Match a request path segment by segment
//! - Bind named parameters to the segments they matched
//!
//! # Design Decisions
//! - Literal segments are case-sensitive
//! - A parameter matches exactly one non-empty segment
//! - Empty segments are ignored, so trailing slashes are insignificant
//! - Path segments are percent-decoded before comparison
//! - No regex, no wildcards: O(segments) matching

use std::collections::BTreeMap;
use std::fmt;

use crate::routing::RoutingError;

/// Marker that introduces a named parameter segment.
pub const PARAM_MARKER: char = ':';

/// Parameters bound while matching, ordered by name.
pub type Params = BTreeMap<String, String>;

/// A single pattern segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Must equal the path segment exactly.
    Literal(String),
    /// Matches any non-empty path segment and binds it under this name.
    Param(String),
}

/// A compiled route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    source: String,
    segments: Vec<Segment>,
}

impl RoutePattern {
    /// Parse a pattern such as `/:name`.
    pub fn parse(pattern: &str) -> Result<Self, RoutingError> {
        if !pattern.starts_with('/') {
            return Err(RoutingError::InvalidPattern {
                pattern: pattern.to_string(),
                reason: "pattern must start with '/'".to_string(),
            });
        }

        let mut segments = Vec::new();
        for raw in split_segments(pattern) {
            match raw.strip_prefix(PARAM_MARKER) {
                Some("") => {
                    return Err(RoutingError::InvalidPattern {
                        pattern: pattern.to_string(),
                        reason: "parameter name is empty".to_string(),
                    });
                }
                Some(name) => {
                    let duplicate = segments
                        .iter()
                        .any(|s| matches!(s, Segment::Param(existing) if existing == name));
                    if duplicate {
                        return Err(RoutingError::InvalidPattern {
                            pattern: pattern.to_string(),
                            reason: format!("parameter '{}' declared twice", name),
                        });
                    }
                    segments.push(Segment::Param(name.to_string()));
                }
                None => segments.push(Segment::Literal(raw.to_string())),
            }
        }

        Ok(Self {
            source: pattern.to_string(),
            segments,
        })
    }

    /// Returns true if the pattern has no parameter segments.
    pub fn is_literal(&self) -> bool {
        self.segments
            .iter()
            .all(|s| matches!(s, Segment::Literal(_)))
    }

    /// Names of the parameters in declaration order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// The pattern as written.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Match a request path, returning the bound parameters on success.
    pub fn matches(&self, path: &str) -> Option<Params> {
        let mut params = Params::new();
        let mut parts = split_segments(path);

        for segment in &self.segments {
            let part = percent_decode(parts.next()?);
            match segment {
                Segment::Literal(expected) => {
                    if *expected != part {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    params.insert(name.clone(), part);
                }
            }
        }

        // Leftover path segments mean the path is longer than the pattern
        if parts.next().is_some() {
            return None;
        }
        Some(params)
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

fn split_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// Decode `%XX` escapes. Malformed escapes or non-UTF-8 results leave the segment untouched.
pub fn percent_decode(segment: &str) -> String {
    if !segment.contains('%') {
        return segment.to_string();
    }

    let bytes = segment.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hex = bytes
                .get(i + 1..i + 3)
                .filter(|h| h.iter().all(u8::is_ascii_hexdigit))
                .and_then(|h| std::str::from_utf8(h).ok())
                .and_then(|h| u8::from_str_radix(h, 16).ok());
            match hex {
                Some(byte) => {
                    decoded.push(byte);
                    i += 3;
                    continue;
                }
                None => return segment.to_string(),
            }
        }
        decoded.push(bytes[i]);
        i += 1;
    }

    String::from_utf8(decoded).unwrap_or_else(|_| segment.to_string())
}
