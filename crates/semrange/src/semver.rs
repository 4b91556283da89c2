//! Semver facade providing high-level version operations on strings

use std::cmp::Ordering;

use crate::compare::compare;
use crate::range::Range;
use crate::version::Version;

/// Main facade for semantic versioning operations
pub struct Semver;

impl Semver {
    /// Check if a version satisfies a range. Unparseable input never matches.
    pub fn satisfies(version: &str, range: &str) -> bool {
        let Some(version) = parse_version_logged(version) else {
            return false;
        };
        let Some(range) = parse_range_logged(range) else {
            return false;
        };
        range.satisfies(&version)
    }

    /// Return all versions that satisfy the given range, in input order
    pub fn satisfied_by(versions: &[&str], range: &str) -> Vec<String> {
        let Some(range) = parse_range_logged(range) else {
            return Vec::new();
        };

        Self::matching(versions, &range)
            .map(|(original, _)| original.to_string())
            .collect()
    }

    /// Return the highest version that satisfies the range
    pub fn max_satisfying(versions: &[&str], range: &str) -> Option<String> {
        let range = parse_range_logged(range)?;
        Self::matching(versions, &range)
            .fold(None, |best: Option<(&str, Version)>, candidate| match best {
                Some(current) if compare(&candidate.1, &current.1) != Ordering::Greater => {
                    Some(current)
                }
                _ => Some(candidate),
            })
            .map(|(original, _)| original.to_string())
    }

    /// Return the lowest version that satisfies the range
    pub fn min_satisfying(versions: &[&str], range: &str) -> Option<String> {
        let range = parse_range_logged(range)?;
        Self::matching(versions, &range)
            .fold(None, |best: Option<(&str, Version)>, candidate| match best {
                Some(current) if compare(&candidate.1, &current.1) != Ordering::Less => {
                    Some(current)
                }
                _ => Some(candidate),
            })
            .map(|(original, _)| original.to_string())
    }

    /// Sort versions in ascending order
    pub fn sort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, true)
    }

    /// Sort versions in descending order (reverse sort)
    pub fn rsort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, false)
    }

    fn matching<'a, 'r>(
        versions: &'r [&'a str],
        range: &'r Range,
    ) -> impl Iterator<Item = (&'a str, Version)> + 'r
    where
        'a: 'r,
    {
        versions.iter().filter_map(move |original| {
            let version = parse_version_logged(original)?;
            range.satisfies(&version).then_some((*original, version))
        })
    }

    fn usort(versions: &[&str], ascending: bool) -> Vec<String> {
        // Unparseable versions are dropped
        let mut parsed: Vec<(Version, usize)> = versions
            .iter()
            .enumerate()
            .filter_map(|(i, v)| Some((parse_version_logged(v)?, i)))
            .collect();

        // Stable sort: versions equal by major/minor/patch keep their input order
        parsed.sort_by(|(a, _), (b, _)| {
            let cmp = compare(a, b);
            if ascending {
                cmp
            } else {
                cmp.reverse()
            }
        });

        parsed
            .into_iter()
            .map(|(_, i)| versions[i].to_string())
            .collect()
    }
}

fn parse_version_logged(input: &str) -> Option<Version> {
    match Version::parse(input) {
        Ok(version) => Some(version),
        Err(err) => {
            log::debug!("Ignoring version {input:?}: {err}");
            None
        }
    }
}

fn parse_range_logged(input: &str) -> Option<Range> {
    match Range::parse(input) {
        Ok(range) => Some(range),
        Err(err) => {
            log::debug!("Ignoring range {input:?}: {err}");
            None
        }
    }
}
