use anyhow::{anyhow, Result};

/// Resolves `key` against `candidates`: an exact match wins, otherwise the
/// key must be the prefix of exactly one candidate.
pub fn expand_key<'a>(key: &str, candidates: &[&'a str]) -> Result<&'a str> {
    // 1. Exact match
    if let Some(&exact) = candidates.iter().find(|&&c| c == key) {
        return Ok(exact);
    }

    if key.is_empty() {
        return Err(anyhow!("Empty key"));
    }

    // 2. Prefix match
    let matches: Vec<&'a str> = candidates
        .iter()
        .filter(|&&c| c.starts_with(key))
        .copied()
        .collect();

    match matches.len() {
        1 => Ok(matches[0]),
        0 => Err(anyhow!("Unknown key: '{}'", key)),
        _ => Err(anyhow!("Ambiguous key: '{}' matches {:?}", key, matches)),
    }
}
