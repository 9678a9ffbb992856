// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Destination grammar: in-page anchors and standalone page paths.
//!
//! ## Grammar
//!
//! ```text
//! destination := path | path "#" fragment
//! path        := "/" | ("/" segment)+
//! segment     := [A-Za-z0-9-._~]+
//! fragment    := [A-Za-z] [A-Za-z0-9_-]*
//! ```
//!
//! Destinations are parsed once, when a registry is built, so a malformed
//! entry fails during configuration rather than when a user clicks it.
//!
//! ## Minimal example
//!
//! ```
//! use folio_sections::destination::Destination;
//!
//! let d: Destination = "/#about".parse().unwrap();
//! assert_eq!(d.path(), "/");
//! assert_eq!(d.fragment(), Some("about"));
//! assert_eq!(d.to_string(), "/#about");
//! ```

use alloc::borrow::ToOwned;
use alloc::string::String;
use core::fmt;
use core::str::FromStr;

/// Path of the single-page home view that hosts the scroll-tracked sections.
pub const ROOT_PATH: &str = "/";

/// Errors produced while parsing a [`Destination`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DestinationError {
    /// The destination string was empty.
    #[error("destination is empty")]
    Empty,
    /// The destination did not begin with `/`.
    #[error("destination `{0}` must start with `/`")]
    MissingLeadingSlash(String),
    /// The path contained `//` or a trailing `/`.
    #[error("destination `{0}` contains an empty path segment")]
    EmptySegment(String),
    /// A path segment contained a character outside the unreserved set.
    #[error("invalid character {ch:?} in the path of `{href}`")]
    InvalidPathChar {
        /// The offending destination.
        href: String,
        /// The first character that failed validation.
        ch: char,
    },
    /// The destination ended in a bare `#`.
    #[error("destination `{0}` has an empty fragment")]
    EmptyFragment(String),
    /// The fragment was not an identifier.
    #[error("fragment `{0}` is not an identifier")]
    InvalidFragment(String),
}

/// A parsed navigation destination: a page path with an optional fragment.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Destination {
    path: String,
    fragment: Option<String>,
}

impl Destination {
    /// Parse and validate a destination such as `/`, `/professional` or `/#about`.
    pub fn parse(href: &str) -> Result<Self, DestinationError> {
        if href.is_empty() {
            return Err(DestinationError::Empty);
        }
        if !href.starts_with('/') {
            return Err(DestinationError::MissingLeadingSlash(href.to_owned()));
        }

        let (path, fragment) = match href.split_once('#') {
            Some((path, fragment)) => (path, Some(fragment)),
            None => (href, None),
        };

        if path != ROOT_PATH {
            // Skip the leading slash; every remaining segment must be non-empty.
            for segment in path[1..].split('/') {
                if segment.is_empty() {
                    return Err(DestinationError::EmptySegment(href.to_owned()));
                }
                if let Some(ch) = segment.chars().find(|c| !is_segment_char(*c)) {
                    return Err(DestinationError::InvalidPathChar {
                        href: href.to_owned(),
                        ch,
                    });
                }
            }
        }

        let fragment = match fragment {
            None => None,
            Some("") => return Err(DestinationError::EmptyFragment(href.to_owned())),
            Some(f) if is_identifier(f) => Some(f.to_owned()),
            Some(f) => return Err(DestinationError::InvalidFragment(f.to_owned())),
        };

        Ok(Self {
            path: path.to_owned(),
            fragment,
        })
    }

    /// The page path, without any fragment.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The in-page anchor name, if this destination targets one.
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// Returns `true` if the path is the home route.
    pub fn is_root(&self) -> bool {
        self.path == ROOT_PATH
    }

    /// Returns `true` if this destination names an in-page anchor.
    pub fn is_anchor(&self) -> bool {
        self.fragment.is_some()
    }
}

impl FromStr for Destination {
    type Err = DestinationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)?;
        if let Some(fragment) = &self.fragment {
            write!(f, "#{fragment}")?;
        }
        Ok(())
    }
}

/// Reduce a browser location to the fragment-independent route it names.
///
/// Strips any `#fragment` and `?query` suffix. An empty remainder is the home route.
///
/// ```
/// use folio_sections::destination::route_of;
///
/// assert_eq!(route_of("/#about"), "/");
/// assert_eq!(route_of("/professional?tab=cv#resume"), "/professional");
/// assert_eq!(route_of(""), "/");
/// ```
pub fn route_of(location: &str) -> &str {
    let end = location.find(['#', '?']).unwrap_or(location.len());
    match &location[..end] {
        "" => ROOT_PATH,
        route => route,
    }
}

fn is_segment_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_' | '~')
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn parses_root_and_pages() {
        let root = Destination::parse("/").unwrap();
        assert!(root.is_root());
        assert!(!root.is_anchor());

        let page = Destination::parse("/professional").unwrap();
        assert_eq!(page.path(), "/professional");
        assert_eq!(page.fragment(), None);

        let nested = Destination::parse("/blog/building-a-portfolio").unwrap();
        assert_eq!(nested.path(), "/blog/building-a-portfolio");
    }

    #[test]
    fn parses_anchor_destinations() {
        let d = Destination::parse("/professional#resume").unwrap();
        assert_eq!(d.path(), "/professional");
        assert_eq!(d.fragment(), Some("resume"));
        assert!(!d.is_root());
        assert_eq!(d.to_string(), "/professional#resume");
    }

    #[test]
    fn rejects_malformed_paths() {
        assert_eq!(Destination::parse(""), Err(DestinationError::Empty));
        assert_eq!(
            Destination::parse("about"),
            Err(DestinationError::MissingLeadingSlash("about".to_string()))
        );
        assert_eq!(
            Destination::parse("/blog/"),
            Err(DestinationError::EmptySegment("/blog/".to_string()))
        );
        assert_eq!(
            Destination::parse("//blog"),
            Err(DestinationError::EmptySegment("//blog".to_string()))
        );
        assert_eq!(
            Destination::parse("/a b"),
            Err(DestinationError::InvalidPathChar {
                href: "/a b".to_string(),
                ch: ' ',
            })
        );
        // A query string is not part of a registry destination.
        assert!(matches!(
            Destination::parse("/blog?page=2"),
            Err(DestinationError::InvalidPathChar { ch: '?', .. })
        ));
    }

    #[test]
    fn rejects_malformed_fragments() {
        assert_eq!(
            Destination::parse("/#"),
            Err(DestinationError::EmptyFragment("/#".to_string()))
        );
        assert_eq!(
            Destination::parse("/#1st"),
            Err(DestinationError::InvalidFragment("1st".to_string()))
        );
        assert_eq!(
            Destination::parse("/#a#b"),
            Err(DestinationError::InvalidFragment("a#b".to_string()))
        );
    }

    #[test]
    fn route_of_strips_fragment_and_query() {
        assert_eq!(route_of("/"), "/");
        assert_eq!(route_of("/#contact"), "/");
        assert_eq!(route_of("?x=1"), "/");
        assert_eq!(route_of("/professional"), "/professional");
        assert_eq!(route_of("/professional#education"), "/professional");
        assert_eq!(route_of("/blog/post?ref=nav"), "/blog/post");
    }
}
