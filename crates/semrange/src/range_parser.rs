//! Range expression parsing and shorthand expansion

use lazy_static::lazy_static;
use regex::Regex;

use crate::classify::is_alpha;
use crate::error::{Error, ParseFailure, Result};
use crate::range::{Comparator, ComparatorSet, Range, RangeOperator};
use crate::version::{Precision, Version};
use crate::version_parser::parse_version;

lazy_static! {
    // OR splitter
    static ref OR_RE: Regex = Regex::new(r"\s*\|\|\s*").unwrap();

    // Hyphen range: both sides are bare versions
    static ref HYPHEN_RE: Regex = Regex::new(r"^(?P<from>\S+)\s+-\s+(?P<to>\S+)$").unwrap();

    // One comparator term, or an operator with nothing after it
    static ref TERM_RE: Regex = Regex::new(
        r"(?P<prefix>[=<>]+|[~^])?\s*(?P<literal>[^\s=<>~^]+)|(?P<dangling>[=<>]+|[~^])"
    ).unwrap();
}

/// What was written in front of a version literal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Prefix {
    None,
    Operator(RangeOperator),
    Tilde,
    Caret,
}

impl Prefix {
    fn from_token(token: &str) -> Self {
        match token {
            "" => Prefix::None,
            "~" => Prefix::Tilde,
            "^" => Prefix::Caret,
            op => Prefix::Operator(RangeOperator::from_token(op)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Term<'a> {
    prefix: Prefix,
    literal: &'a str,
}

/// Parse a range expression such as `>=1.2.3 <2`, `^1.2 || ~0.3` or `1 - 2.3`.
///
/// The empty string matches every version.
pub fn parse_range(input: &str) -> Result<Range> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(Range::new(vec![match_any()]));
    }

    let sets = OR_RE
        .split(trimmed)
        .map(|segment| parse_segment(segment.trim(), input))
        .collect::<Result<Vec<_>>>()?;

    Ok(Range::new(sets))
}

fn parse_segment(segment: &str, input: &str) -> Result<ComparatorSet> {
    if segment.is_empty() {
        return Ok(match_any());
    }

    if let Some(caps) = HYPHEN_RE.captures(segment) {
        let from = caps.name("from").map_or("", |m| m.as_str());
        let to = caps.name("to").map_or("", |m| m.as_str());
        let set = parse_hyphen(from, to, input)?;
        log::trace!("hyphen range {segment:?} expanded to {set}");
        return Ok(set);
    }
    if segment.contains(" - ") {
        return Err(Error::comparator_set(segment, "malformed hyphen range"));
    }

    let terms = lex_terms(segment)?;
    match terms.as_slice() {
        [term] => {
            let set = parse_single(*term, input)?;
            log::trace!("comparator {segment:?} expanded to {set}");
            Ok(set)
        }
        [lower, upper] => Ok(ComparatorSet::Bounded(
            parse_plain(*lower, segment, input)?,
            parse_plain(*upper, segment, input)?,
        )),
        _ => Err(Error::comparator_set(
            segment,
            format!("expected one or two comparators, found {}", terms.len()),
        )),
    }
}

fn lex_terms(segment: &str) -> Result<Vec<Term<'_>>> {
    TERM_RE
        .captures_iter(segment)
        .map(|caps| {
            if let Some(dangling) = caps.name("dangling") {
                return Err(Error::comparator_set(
                    segment,
                    format!("operator `{}` is not followed by a version", dangling.as_str()),
                ));
            }
            Ok(Term {
                prefix: Prefix::from_token(caps.name("prefix").map_or("", |m| m.as_str())),
                literal: caps.name("literal").map_or("", |m| m.as_str()),
            })
        })
        .collect()
}

/// Parse a version literal, reporting stray letters against the whole range
fn parse_literal(literal: &str, input: &str) -> Result<Version> {
    parse_version(literal).map_err(|err| match err {
        Error::VersionParseFailure {
            reason: ParseFailure::UnexpectedCharacter { character, .. },
            ..
        } if character.is_ascii() && is_alpha(character as u8) => {
            Error::AlphaCharacterInRange(input.to_string())
        }
        other => other,
    })
}

fn parse_hyphen(from: &str, to: &str, input: &str) -> Result<ComparatorSet> {
    let from = parse_literal(from, input)?;
    let to = parse_literal(to, input)?;
    let lower = Comparator::implied(RangeOperator::GreaterThanOrEqual, from);

    if to.precision() == Precision::Full {
        return Ok(ComparatorSet::Bounded(
            lower,
            Comparator::implied(RangeOperator::LessThanOrEqual, to),
        ));
    }

    Ok(match tilde_ceiling(&to)? {
        Some(ceiling) => ComparatorSet::Bounded(
            lower,
            Comparator::implied(RangeOperator::LessThan, ceiling),
        ),
        None => ComparatorSet::Single(lower),
    })
}

fn parse_single(term: Term<'_>, input: &str) -> Result<ComparatorSet> {
    let version = parse_literal(term.literal, input)?;

    let ceiling = match term.prefix {
        Prefix::Operator(op) => return Ok(ComparatorSet::Single(Comparator::new(op, version))),
        Prefix::Tilde => tilde_ceiling(&version)?,
        Prefix::Caret => caret_ceiling(&version)?,
        Prefix::None => match version.precision() {
            Precision::Full => {
                return Ok(ComparatorSet::Single(Comparator::implied(
                    RangeOperator::Equal,
                    version,
                )));
            }
            Precision::Partial(_) => tilde_ceiling(&version)?,
        },
    };

    Ok(floor_with_ceiling(version, ceiling))
}

/// A comparator inside an explicit pair; written as-is, never expanded
fn parse_plain(term: Term<'_>, segment: &str, input: &str) -> Result<Comparator> {
    let version = parse_literal(term.literal, input)?;
    match term.prefix {
        Prefix::Operator(op) => Ok(Comparator::new(op, version)),
        Prefix::None => Ok(Comparator::implied(RangeOperator::Equal, version)),
        Prefix::Tilde | Prefix::Caret => Err(Error::comparator_set(
            segment,
            format!("shorthand `{}` cannot be paired with another comparator", term.literal),
        )),
    }
}

fn floor_with_ceiling(version: Version, ceiling: Option<Version>) -> ComparatorSet {
    let floor = Comparator::implied(RangeOperator::GreaterThanOrEqual, version);
    match ceiling {
        Some(ceiling) => ComparatorSet::Bounded(
            floor,
            Comparator::implied(RangeOperator::LessThan, ceiling),
        ),
        None => ComparatorSet::Single(floor),
    }
}

fn match_any() -> ComparatorSet {
    ComparatorSet::Single(Comparator::implied(
        RangeOperator::GreaterThanOrEqual,
        Version::new(0, 0, 0),
    ))
}

/// Ceiling one step above the most specific component: next minor when the
/// minor was given, otherwise next major. `None` when nothing was given.
fn tilde_ceiling(version: &Version) -> Result<Option<Version>> {
    if version.minor_parsed() {
        next_minor(version).map(Some)
    } else if version.major_parsed() {
        next_major(version).map(Some)
    } else {
        Ok(None)
    }
}

/// Ceiling that keeps the leftmost non-zero component fixed
fn caret_ceiling(version: &Version) -> Result<Option<Version>> {
    if !version.major_parsed() {
        return Ok(None);
    }
    // Unparsed fields read as 0
    if version.major() > 0 {
        return next_major(version).map(Some);
    }
    if version.minor() > 0 {
        return next_minor(version).map(Some);
    }
    next_patch(version).map(Some)
}

fn bump(version: &Version, value: u64) -> Result<u64> {
    value
        .checked_add(1)
        .ok_or_else(|| Error::version(version.to_string().as_bytes(), ParseFailure::Overflow))
}

fn next_major(version: &Version) -> Result<Version> {
    Ok(Version::new(bump(version, version.major())?, 0, 0))
}

fn next_minor(version: &Version) -> Result<Version> {
    Ok(Version::new(version.major(), bump(version, version.minor())?, 0))
}

fn next_patch(version: &Version) -> Result<Version> {
    Ok(Version::new(version.major(), version.minor(), bump(version, version.patch())?))
}
