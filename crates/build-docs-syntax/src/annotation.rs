//! Single-line `@` annotation parser.
//!
//! Recognizes `@name`, `@param` and `@throws`. Other tags parse to
//! [`Annotation::Other`] and are ignored by the record assembler. A line that
//! looks like a known tag but does not fit its grammar yields `None`.

use crate::model::{ParamType, ThrowsDescriptor};
use regex::Regex;
use std::sync::LazyLock;

// -- Regex patterns -----------------------------------------------------------

static RE_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^@([A-Za-z]+)").unwrap());

static RE_NAME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^@name\s+(\S.*)$").unwrap());

// @param {Type} path description
static RE_PARAM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^@param(?:\s*\{([^}]*)\})?\s+(\S+)(?:\s+(.*))?$").unwrap()
});

// @throws {Type} description, either part optional
static RE_THROWS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^@throws(?:\s*\{([^}]*)\})?(?:\s+(.*))?$").unwrap()
});

static RE_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*(?:\[\])?(?:\.[A-Za-z_$][A-Za-z0-9_$]*(?:\[\])?)*$")
        .unwrap()
});

// Array.<X> and Array<X>
static RE_GENERIC_ARRAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Array\.?<\s*(.*?)\s*>$").unwrap());

// -- Types --------------------------------------------------------------------

/// A parsed annotation line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Annotation {
    Name(String),
    Param(ParamLine),
    Throws(ThrowsDescriptor),
    /// Any other tag, e.g. `@returns`; carries the tag name
    Other(String),
}

/// A parsed `@param` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamLine {
    /// Bracketed type, if the line had one
    pub ty: Option<TypeExpr>,
    pub path: ParamPath,
    pub description: String,
}

/// Type expression from a `{...}` annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    Named(ParamType),
    /// Array with an optional element type (`Array` alone has none)
    Array(Option<Box<TypeExpr>>),
}

impl TypeExpr {
    /// Map annotation type text: `Object` → object, `X[]` / `Array.<X>` →
    /// array of X, anything else → the lower-cased name.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if let Some(element) = raw.strip_suffix("[]") {
            return TypeExpr::array_of(element);
        }
        if let Some(caps) = RE_GENERIC_ARRAY.captures(raw) {
            return TypeExpr::array_of(&caps[1]);
        }
        match ParamType::from_name(raw) {
            ParamType::Array => TypeExpr::Array(None),
            ty => TypeExpr::Named(ty),
        }
    }

    /// `[]` and `Array<>` name no element type.
    fn array_of(element: &str) -> Self {
        if element.trim().is_empty() {
            return TypeExpr::Array(None);
        }
        TypeExpr::Array(Some(Box::new(TypeExpr::parse(element))))
    }
}

impl Default for TypeExpr {
    fn default() -> Self {
        TypeExpr::Named(ParamType::String)
    }
}

/// Dotted parameter path, e.g. `favouriteFoods[].cuisine`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamPath {
    segments: Vec<PathSegment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSegment {
    /// Identifier without the `[]` marker
    pub name: String,
    /// Segment ended in `[]`: deeper segments describe its items
    pub is_array: bool,
}

impl ParamPath {
    /// Parse a path token. Returns `None` when the token is not a valid
    /// identifier chain.
    pub fn parse(token: &str) -> Option<Self> {
        if !RE_PATH.is_match(token) {
            return None;
        }
        let segments = token
            .split('.')
            .map(|seg| match seg.strip_suffix("[]") {
                Some(name) => PathSegment {
                    name: name.to_string(),
                    is_array: true,
                },
                None => PathSegment {
                    name: seg.to_string(),
                    is_array: false,
                },
            })
            .collect();
        Some(ParamPath { segments })
    }

    /// Never empty.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }
}

// -- Public API ---------------------------------------------------------------

/// Parse one logical annotation line (starting with `@`).
pub fn parse_annotation(line: &str) -> Option<Annotation> {
    let caps = RE_TAG.captures(line)?;
    match &caps[1] {
        "name" => parse_name(line),
        "param" => parse_param(line).map(Annotation::Param),
        "throws" => parse_throws(line).map(Annotation::Throws),
        other => Some(Annotation::Other(other.to_string())),
    }
}

fn parse_name(line: &str) -> Option<Annotation> {
    let caps = RE_NAME.captures(line)?;
    Some(Annotation::Name(caps[1].trim_end().to_string()))
}

/// Parse a `@param` line. Type defaults to `string` later, in the tree builder.
pub fn parse_param(line: &str) -> Option<ParamLine> {
    let caps = RE_PARAM.captures(line)?;
    let path = ParamPath::parse(&caps[2])?;
    let ty = caps
        .get(1)
        .map(|m| m.as_str().trim())
        .filter(|t| !t.is_empty())
        .map(TypeExpr::parse);
    let description = caps
        .get(3)
        .map(|m| m.as_str().trim_end().to_string())
        .unwrap_or_default();
    Some(ParamLine {
        ty,
        path,
        description,
    })
}

/// Parse a `@throws` line. A line with neither type nor description is
/// malformed.
pub fn parse_throws(line: &str) -> Option<ThrowsDescriptor> {
    let caps = RE_THROWS.captures(line)?;
    let ty = non_empty(caps.get(1).map(|m| m.as_str()));
    let description = non_empty(caps.get(2).map(|m| m.as_str()));
    if ty.is_none() && description.is_none() {
        return None;
    }
    Some(ThrowsDescriptor { ty, description })
}

fn non_empty(text: Option<&str>) -> Option<String> {
    text.map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}
