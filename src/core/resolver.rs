//! Path resolution against a [`RouteTable`].
//!
//! Static patterns are tried first, then parameterized ones, then the
//! wildcard. The order is fixed here and does not depend on the order of
//! entries in the table, so the wildcard can never shadow a real page.

use crate::core::routes::{PatternKind, RouteTable, WILDCARD_PATTERN};
use crate::domain::model::{PageKey, ResolvedRoute};
use std::collections::BTreeMap;

pub fn resolve(path: &str, table: &RouteTable) -> ResolvedRoute {
    let segments = path_segments(path);

    for kind in [PatternKind::Static, PatternKind::Parameterized] {
        for entry in table
            .entries()
            .iter()
            .filter(|entry| PatternKind::of(&entry.path_pattern) == kind)
        {
            if let Some(params) = match_pattern(&entry.path_pattern, &segments) {
                return ResolvedRoute {
                    page: entry.key,
                    matched_pattern: entry.path_pattern.clone(),
                    params,
                };
            }
        }
    }

    not_found(table)
}

/// The wildcard resolution, used when nothing else matches.
pub fn not_found(table: &RouteTable) -> ResolvedRoute {
    let (page, matched_pattern) = match table.wildcard() {
        Some(entry) => (entry.key, entry.path_pattern.clone()),
        None => (PageKey::NotFound, WILDCARD_PATTERN.to_string()),
    };
    ResolvedRoute {
        page,
        matched_pattern,
        params: BTreeMap::new(),
    }
}

/// Splits a request path into segments, ignoring query, fragment and
/// trailing slashes. The root path has no segments.
fn path_segments(path: &str) -> Vec<&str> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_start_matches('/').trim_end_matches('/');
    if trimmed.is_empty() {
        Vec::new()
    } else {
        trimmed.split('/').collect()
    }
}

fn match_pattern(pattern: &str, segments: &[&str]) -> Option<BTreeMap<String, String>> {
    let expected = path_segments(pattern);
    if expected.len() != segments.len() {
        return None;
    }

    let mut params = BTreeMap::new();
    for (want, got) in expected.iter().zip(segments) {
        match want.strip_prefix(':') {
            Some(name) => {
                if got.is_empty() {
                    return None;
                }
                params.insert(name.to_string(), (*got).to_string());
            }
            None if want == got => {}
            None => return None,
        }
    }
    Some(params)
}
