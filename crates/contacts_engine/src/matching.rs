//! Fuzzy ranking used to filter contacts by name.
//!
//! A candidate matches when any rank applies; the weakest rank accepted is
//! [`MatchRank::Matches`] (query characters appear in order).

/// Match quality, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchRank {
    Matches,
    Acronym,
    Contains,
    WordStartsWith,
    StartsWith,
    Equal,
    CaseSensitiveEqual,
}

/// Ranks `candidate` against `query`; `None` means no match.
pub fn rank(candidate: &str, query: &str) -> Option<MatchRank> {
    if query.is_empty() {
        return None;
    }
    if candidate == query {
        return Some(MatchRank::CaseSensitiveEqual);
    }

    let candidate = candidate.to_lowercase();
    let query = query.to_lowercase();

    if candidate == query {
        return Some(MatchRank::Equal);
    }
    if candidate.starts_with(&query) {
        return Some(MatchRank::StartsWith);
    }
    if candidate.contains(&format!(" {query}")) {
        return Some(MatchRank::WordStartsWith);
    }
    if candidate.contains(&query) {
        return Some(MatchRank::Contains);
    }
    if query.chars().count() == 1 {
        return None;
    }
    if acronym(&candidate).contains(&query) {
        return Some(MatchRank::Acronym);
    }
    if is_subsequence(&query, &candidate) {
        return Some(MatchRank::Matches);
    }
    None
}

fn acronym(text: &str) -> String {
    text.split([' ', '-'])
        .filter_map(|word| word.chars().next())
        .collect()
}

fn is_subsequence(needle: &str, haystack: &str) -> bool {
    let mut remaining = haystack.chars();
    needle
        .chars()
        .all(|wanted| remaining.by_ref().any(|c| c == wanted))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_from_strongest_to_weakest() {
        assert_eq!(rank("Ryan", "Ryan"), Some(MatchRank::CaseSensitiveEqual));
        assert_eq!(rank("Ryan", "ryan"), Some(MatchRank::Equal));
        assert_eq!(rank("Ryan", "ry"), Some(MatchRank::StartsWith));
        assert_eq!(rank("Kent C. Dodds", "dod"), Some(MatchRank::WordStartsWith));
        assert_eq!(rank("Florence", "ren"), Some(MatchRank::Contains));
        assert_eq!(rank("Jean-Luc Picard", "jlp"), Some(MatchRank::Acronym));
        assert_eq!(rank("Florence", "fnc"), Some(MatchRank::Matches));
    }

    #[test]
    fn rejects_non_matches() {
        assert_eq!(rank("Florence", "z"), None);
        assert_eq!(rank("Florence", "ecnerolf"), None);
        assert_eq!(rank("Florence", ""), None);
    }

    #[test]
    fn ranks_order_weakest_first() {
        assert!(MatchRank::Matches < MatchRank::Contains);
        assert!(MatchRank::StartsWith < MatchRank::CaseSensitiveEqual);
    }
}
