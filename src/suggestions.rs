//! # Error Suggestions
//!
//! Helper functions for CLI error messages that say what went wrong AND how
//! to fix it.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use selector_clusters::suggestions;
//!
//! return Err(suggestions::config_not_found(path));
//! ```

use std::path::Path;

/// Generate an error for when the configuration file is not found.
///
/// Includes hints about:
/// - Creating a new config file
/// - Using the -c/--config flag
/// - Using the SELECTOR_CLUSTERS_CONFIG environment variable
pub fn config_not_found(path: &Path) -> anyhow::Error {
    anyhow::anyhow!(
        "Configuration file not found: {path}\n\n\
         hint: Create a selectors.yaml file in the current directory\n\
         hint: Use -c/--config to specify a different path\n\
         hint: Set SELECTOR_CLUSTERS_CONFIG environment variable",
        path = path.display()
    )
}

/// Generate an error for a cluster name that was never declared.
///
/// Suggests a close match among the declared clusters when there is one.
pub fn unknown_cluster(name: &str, declared: &[&str]) -> anyhow::Error {
    let did_you_mean = find_similar(name, declared)
        .map(|s| format!("\nhint: Did you mean '{s}'?"))
        .unwrap_or_default();
    let available = if declared.is_empty() {
        "(none)".to_string()
    } else {
        declared.join(", ")
    };

    anyhow::anyhow!(
        "Unknown cluster: {name}{did_you_mean}\n\n\
         Declared clusters are: {available}\n\
         hint: Run 'selector-clusters ls' to see every cluster and its selectors"
    )
}

/// Generate an error for a token missing from a cluster.
pub fn unknown_token(cluster: &str, token: &str) -> anyhow::Error {
    anyhow::anyhow!(
        "Cluster '{cluster}' has no selector with token '{token}'\n\n\
         hint: Run 'selector-clusters ls --cluster {cluster}' to list its tokens"
    )
}

/// Find a similar string from a list of candidates using edit distance.
///
/// Returns Some(candidate) if a close match is found (edit distance <= 2).
fn find_similar<'a>(input: &str, candidates: &[&'a str]) -> Option<&'a str> {
    candidates
        .iter()
        .filter_map(|&candidate| {
            let distance = edit_distance(input, candidate);
            if distance <= 2 && distance < input.len() {
                Some((candidate, distance))
            } else {
                None
            }
        })
        .min_by_key(|(_, distance)| *distance)
        .map(|(candidate, _)| candidate)
}

/// Calculate the Levenshtein edit distance between two strings.
fn edit_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    if a_chars.is_empty() {
        return b_chars.len();
    }
    if b_chars.is_empty() {
        return a_chars.len();
    }

    let mut previous: Vec<usize> = (0..=b_chars.len()).collect();
    let mut current = vec![0usize; b_chars.len() + 1];

    for (i, a_char) in a_chars.iter().enumerate() {
        current[0] = i + 1;
        for (j, b_char) in b_chars.iter().enumerate() {
            let cost = usize::from(a_char != b_char);
            current[j + 1] = (previous[j + 1] + 1)
                .min(current[j] + 1)
                .min(previous[j] + cost);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[b_chars.len()]
}
