use std::cmp::Ordering;
use strsim::jaro_winkler;

use crate::config::settings::SuggestSettings;

/// A store name that may be what an unresolved export name meant
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub name: String,
    pub similarity: f64,
}

/// Rank store names that look like `name`.
///
/// A candidate qualifies when one lowercased name contains the other or the
/// Jaro-Winkler similarity reaches the configured threshold. Advisory only.
pub fn suggest<'a>(
    name: &str,
    candidates: impl IntoIterator<Item = &'a str>,
    settings: &SuggestSettings,
) -> Vec<Suggestion> {
    let needle = name.to_lowercase();

    let mut matches: Vec<Suggestion> = candidates
        .into_iter()
        .filter(|candidate| !candidate.is_empty())
        .filter_map(|candidate| {
            let hay = candidate.to_lowercase();
            let similarity = jaro_winkler(&needle, &hay);
            let contained = hay.contains(&needle) || needle.contains(&hay);

            (contained || similarity >= settings.min_similarity).then(|| Suggestion {
                name: candidate.to_string(),
                similarity,
            })
        })
        .collect();

    matches.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.name.cmp(&b.name))
    });
    matches.truncate(settings.max_suggestions);
    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_containment_matches_short_player_names() {
        let found = suggest("Trevor Paulsen", ["Trevor", "Tyson", "Kip"], &SuggestSettings::default());
        assert_eq!(found[0].name, "Trevor");
        assert!(found.iter().all(|s| s.name != "Kip"));
    }

    #[test]
    fn test_similar_spelling_is_suggested() {
        let found = suggest(
            "Master Labyrinth",
            ["Master Labrynth", "Scythe", "Root"],
            &SuggestSettings::default(),
        );
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Master Labrynth");
    }

    #[test]
    fn test_suggestions_are_capped() {
        let candidates = ["Catan", "Catan Junior", "Catan Seafarers", "Catan Cities"];
        let found = suggest("Catan", candidates, &SuggestSettings::default());
        assert_eq!(found.len(), 3);
        assert_eq!(found[0].name, "Catan");
    }

    #[test]
    fn test_unrelated_names_yield_nothing() {
        assert!(suggest("Scythe", ["Bohnanza", "Gemblo"], &SuggestSettings::default()).is_empty());
    }
}
