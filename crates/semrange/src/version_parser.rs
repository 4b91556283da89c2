//! Version parsing driven by an explicit scan state machine

use crate::classify::{is_alpha, is_digit, is_wildcard};
use crate::error::{Error, ParseFailure, Result};
use crate::version::Version;

/// Which part of the version the scanner is currently reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Major,
    Minor,
    Patch,
    /// A wildcard consumed every remaining numeric component
    Wildcarded,
    PreRelease,
    Build,
}

impl Phase {
    fn field(self) -> Option<usize> {
        match self {
            Phase::Major => Some(0),
            Phase::Minor => Some(1),
            Phase::Patch => Some(2),
            Phase::Wildcarded | Phase::PreRelease | Phase::Build => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    /// Append a digit to the current numeric component
    Digit,
    /// Finish the current numeric component
    CloseField,
    /// Leave the current and all following numeric components unparsed
    Wildcard,
    /// Separator that carries no information (`.x` after a wildcard)
    Ignore,
    StartPreRelease,
    PushPreRelease,
    /// Everything after this byte is build metadata
    StartBuild,
    Reject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Step {
    next: Phase,
    action: Action,
}

const fn step(next: Phase, action: Action) -> Step {
    Step { next, action }
}

/// Pure transition function of the version scanner
fn transition(phase: Phase, b: u8) -> Step {
    match phase {
        Phase::Major | Phase::Minor | Phase::Patch => match b {
            _ if is_digit(b) => step(phase, Action::Digit),
            _ if is_wildcard(b) => step(Phase::Wildcarded, Action::Wildcard),
            b'.' => match phase {
                Phase::Major => step(Phase::Minor, Action::CloseField),
                Phase::Minor => step(Phase::Patch, Action::CloseField),
                _ => step(phase, Action::Reject),
            },
            b'-' => step(Phase::PreRelease, Action::StartPreRelease),
            b'+' => step(Phase::Build, Action::StartBuild),
            _ => step(phase, Action::Reject),
        },
        Phase::Wildcarded => match b {
            b'.' => step(phase, Action::Ignore),
            _ if is_wildcard(b) => step(phase, Action::Ignore),
            b'-' => step(Phase::PreRelease, Action::StartPreRelease),
            b'+' => step(Phase::Build, Action::StartBuild),
            _ => step(phase, Action::Reject),
        },
        Phase::PreRelease => match b {
            b'+' => step(Phase::Build, Action::StartBuild),
            b'.' | b'-' => step(phase, Action::PushPreRelease),
            _ if is_digit(b) || is_alpha(b) => step(phase, Action::PushPreRelease),
            _ => step(phase, Action::Reject),
        },
        // The driver stops at `StartBuild`; this arm keeps the function total.
        Phase::Build => step(phase, Action::StartBuild),
    }
}

/// Scratch state for a single parse; never escapes `parse_version`.
struct Scanner<'a> {
    input: &'a str,
    phase: Phase,
    fields: [Option<u64>; 3],
    current: Option<u64>,
    pre: String,
    build: String,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Scanner {
            input,
            phase: Phase::Major,
            fields: [None; 3],
            current: None,
            pre: String::new(),
            build: String::new(),
        }
    }

    fn fail(&self, reason: ParseFailure) -> Error {
        Error::version(self.input.as_bytes(), reason)
    }

    /// Scanning stops on the first rejected byte, which always starts a
    /// character since everything before it is ASCII.
    fn unexpected(&self, b: u8, offset: usize) -> Error {
        let character = self
            .input
            .get(offset..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or(b as char);
        self.fail(ParseFailure::UnexpectedCharacter { character, offset })
    }

    /// Store the pending numeric component, which must not be empty
    fn close_field(&mut self) -> Result<()> {
        let Some(index) = self.phase.field() else {
            return Ok(());
        };
        match self.current.take() {
            Some(value) => {
                self.fields[index] = Some(value);
                Ok(())
            }
            None => Err(self.fail(ParseFailure::EmptyComponent)),
        }
    }

    fn run(mut self) -> Result<Version> {
        let bytes = self.input.as_bytes();
        let start = usize::from(matches!(bytes.first(), Some(b'v' | b'V')));

        for (offset, &b) in bytes.iter().enumerate().skip(start) {
            let Step { next, action } = transition(self.phase, b);
            match action {
                Action::Digit => {
                    let digit = u64::from(b - b'0');
                    let value = self
                        .current
                        .unwrap_or(0)
                        .checked_mul(10)
                        .and_then(|v| v.checked_add(digit))
                        .ok_or_else(|| self.fail(ParseFailure::Overflow))?;
                    self.current = Some(value);
                }
                Action::CloseField | Action::StartPreRelease => self.close_field()?,
                Action::Wildcard => {
                    if self.current.is_some() {
                        return Err(self.unexpected(b, offset));
                    }
                }
                Action::Ignore => {}
                Action::PushPreRelease => self.pre.push(b as char),
                Action::StartBuild => {
                    self.close_field()?;
                    self.build = self.input[offset + 1..].to_string();
                    self.phase = next;
                    break;
                }
                Action::Reject => return Err(self.unexpected(b, offset)),
            }
            self.phase = next;
        }

        if self.phase.field().is_some() {
            self.close_field()?;
        }

        Ok(Version::from_parts(self.fields, self.pre, self.build))
    }
}

/// Parse a version string such as `1.2.3`, `v1.2`, `1.x` or `1.0.0-beta+build`.
///
/// Surrounding whitespace is ignored. The empty string and `*` both produce
/// the fully partial "any" version.
pub fn parse_version(input: &str) -> Result<Version> {
    let input = input.trim();
    if input.is_empty() || input == "*" {
        return Ok(Version::any());
    }

    Scanner::new(input).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::{KnownPrefix, Precision};

    fn parse(input: &str) -> Version {
        parse_version(input).unwrap()
    }

    #[test]
    fn test_transition_numeric_phases() {
        assert_eq!(transition(Phase::Major, b'7'), step(Phase::Major, Action::Digit));
        assert_eq!(transition(Phase::Major, b'.'), step(Phase::Minor, Action::CloseField));
        assert_eq!(transition(Phase::Minor, b'.'), step(Phase::Patch, Action::CloseField));
        assert_eq!(transition(Phase::Patch, b'.'), step(Phase::Patch, Action::Reject));
        assert_eq!(transition(Phase::Minor, b'x'), step(Phase::Wildcarded, Action::Wildcard));
        assert_eq!(
            transition(Phase::Patch, b'-'),
            step(Phase::PreRelease, Action::StartPreRelease)
        );
        assert_eq!(transition(Phase::Patch, b'+'), step(Phase::Build, Action::StartBuild));
        assert_eq!(transition(Phase::Major, b'A'), step(Phase::Major, Action::Reject));
    }

    #[test]
    fn test_transition_label_phases() {
        assert_eq!(
            transition(Phase::PreRelease, b'-'),
            step(Phase::PreRelease, Action::PushPreRelease)
        );
        assert_eq!(
            transition(Phase::PreRelease, b'Z'),
            step(Phase::PreRelease, Action::PushPreRelease)
        );
        assert_eq!(transition(Phase::PreRelease, b'+'), step(Phase::Build, Action::StartBuild));
        assert_eq!(transition(Phase::PreRelease, b'_'), step(Phase::PreRelease, Action::Reject));
        assert_eq!(transition(Phase::Wildcarded, b'.'), step(Phase::Wildcarded, Action::Ignore));
        assert_eq!(transition(Phase::Wildcarded, b'*'), step(Phase::Wildcarded, Action::Ignore));
        assert_eq!(transition(Phase::Wildcarded, b'3'), step(Phase::Wildcarded, Action::Reject));
    }

    #[test]
    fn test_parse_any_version() {
        for input in ["", " * ", "*", "x", "X", "*.*.*", "x.x"] {
            let version = parse(input);
            assert_eq!(version, Version::any(), "input {input:?}");
            assert_eq!(version.precision(), Precision::Partial(KnownPrefix::None));
        }
    }

    #[test]
    fn test_parse_full_versions() {
        let version = parse("1.2.3-alpha.1+build.2  ");
        assert_eq!((version.major(), version.minor(), version.patch()), (1, 2, 3));
        assert_eq!(version.pre_release(), "alpha.1");
        assert_eq!(version.build(), "build.2");
        assert!(!version.is_partial());

        let version = parse("42.24.9");
        assert_eq!((version.major(), version.minor(), version.patch()), (42, 24, 9));
        assert_eq!(version.precision(), Precision::Full);

        assert_eq!(parse("v1.2.3"), Version::new(1, 2, 3));
        assert_eq!(parse("V1.2.3"), Version::new(1, 2, 3));
    }

    #[test]
    fn test_parse_partial_versions() {
        let version = parse("42");
        assert_eq!(version.major(), 42);
        assert_eq!(version.precision(), Precision::Partial(KnownPrefix::Major));

        let version = parse("42.24");
        assert_eq!((version.major(), version.minor()), (42, 24));
        assert_eq!(version.precision(), Precision::Partial(KnownPrefix::MajorMinor));

        let version = parse("1-pre.1");
        assert_eq!(version.major(), 1);
        assert_eq!(version.pre_release(), "pre.1");
        assert_eq!(version.precision(), Precision::Partial(KnownPrefix::Major));
    }

    #[test]
    fn test_parse_x_ranges() {
        let version = parse("1.1.x");
        assert_eq!((version.major(), version.minor(), version.patch()), (1, 1, 0));
        assert!(version.minor_parsed());
        assert!(!version.patch_parsed());
        assert!(version.is_partial());

        let version = parse("1.x");
        assert_eq!(version.precision(), Precision::Partial(KnownPrefix::Major));
        assert_eq!(parse("1.x.x"), version);
        assert_eq!(parse("1.*.*"), version);
        assert_eq!(parse("1.X"), version);

        let version = parse("1.2.x-beta");
        assert_eq!(version.precision(), Precision::Partial(KnownPrefix::MajorMinor));
        assert_eq!(version.pre_release(), "beta");

        let version = parse("1.x+meta");
        assert_eq!(version.build(), "meta");
    }

    #[test]
    fn test_parse_pre_release_identifiers() {
        assert_eq!(parse("1.0.0-alpha").pre_release(), "alpha");
        assert_eq!(parse("1.0.0-alpha.1").pre_release(), "alpha.1");
        assert_eq!(parse("1.0.0-0.3.7").pre_release(), "0.3.7");
        assert_eq!(parse("1.0.0-x.7.z.92").pre_release(), "x.7.z.92");
        assert_eq!(parse("1.0.0-x-y-z.--").pre_release(), "x-y-z.--");
    }

    #[test]
    fn test_parse_build_metadata() {
        let version = parse("1.0.0+alpha+001");
        assert_eq!(version.build(), "alpha+001");
        assert_eq!(version.pre_release(), "");

        assert_eq!(parse("1.0.0+20130313144700").build(), "20130313144700");
        assert_eq!(parse("1.0.0+21AF26D3----117B344092BD").build(), "21AF26D3----117B344092BD");

        let version = parse("1.0.0-beta+exp.sha.5114f85");
        assert_eq!(version.pre_release(), "beta");
        assert_eq!(version.build(), "exp.sha.5114f85");
    }

    #[test]
    fn test_parse_rejects_malformed_numbers() {
        let err = parse_version("1.0.0beta").unwrap_err();
        assert_eq!(
            err,
            Error::VersionParseFailure {
                input: "1.0.0beta".to_string(),
                reason: ParseFailure::UnexpectedCharacter { character: 'b', offset: 5 },
            }
        );

        for input in ["1.", "1..2", ".1", "v", "-1", "1.2.3.4", "1.2.3 4"] {
            assert!(parse_version(input).is_err(), "input {input:?} should fail");
        }

        assert!(matches!(
            parse_version("1.2x"),
            Err(Error::VersionParseFailure {
                reason: ParseFailure::UnexpectedCharacter { character: 'x', .. },
                ..
            })
        ));
        assert!(matches!(
            parse_version("1.x.3"),
            Err(Error::VersionParseFailure { .. })
        ));
        assert!(matches!(
            parse_version("1.0.0-beta_1"),
            Err(Error::VersionParseFailure { .. })
        ));
    }

    #[test]
    fn test_parse_reports_non_ascii_character() {
        for (input, offset) in [("1.2.é", 4), ("1.0.0-bêta", 7), ("ü1", 0)] {
            let err = parse_version(input).unwrap_err();
            let expected_char = input[offset..].chars().next().unwrap();
            assert_eq!(
                err,
                Error::VersionParseFailure {
                    input: input.to_string(),
                    reason: ParseFailure::UnexpectedCharacter {
                        character: expected_char,
                        offset,
                    },
                },
                "input {input:?}"
            );
        }
    }

    #[test]
    fn test_parse_overflow() {
        let err = parse_version("18446744073709551616.0.0").unwrap_err();
        assert!(matches!(
            err,
            Error::VersionParseFailure { reason: ParseFailure::Overflow, .. }
        ));
        assert_eq!(parse("18446744073709551615.0.0").major(), u64::MAX);
    }

    #[test]
    fn test_parse_leading_zeros_are_numeric() {
        assert_eq!(parse("01.002.0003"), Version::new(1, 2, 3));
    }
}
