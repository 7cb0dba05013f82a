//! Attribute name suggestions.

/// The candidate sharing the longest common prefix with `input`.
///
/// Ties keep the earliest candidate; with no shared prefix the first
/// candidate is returned.
pub fn closest_by_prefix<'a>(input: &str, candidates: &[&'a str]) -> Option<&'a str> {
    let mut best: Option<(&'a str, usize)> = None;
    for candidate in candidates {
        let shared = common_prefix_len(input, candidate);
        if best.is_none_or(|(_, len)| shared > len) {
            best = Some((*candidate, shared));
        }
    }
    best.map(|(candidate, _)| candidate)
}

fn common_prefix_len(a: &str, b: &str) -> usize {
    a.chars().zip(b.chars()).take_while(|(x, y)| x == y).count()
}
