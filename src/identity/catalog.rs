use std::collections::HashMap;

use crate::domain::{DocumentId, GameDocument, PlayerDocument};

/// Read-only name → identifier snapshot of one store collection.
///
/// Documents with an empty name are ignored. When two documents share a
/// name the later one in store order wins.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    ids: HashMap<String, DocumentId>,
}

impl Catalog {
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let ids = entries
            .into_iter()
            .filter(|(name, _)| !name.is_empty())
            .map(|(name, id)| (name.to_string(), id.to_string()))
            .collect();
        Self { ids }
    }

    pub fn from_games(games: &[GameDocument]) -> Self {
        Self::from_entries(games.iter().map(|g| (g.name.as_str(), g.id.as_str())))
    }

    pub fn from_players(players: &[PlayerDocument]) -> Self {
        Self::from_entries(players.iter().map(|p| (p.name.as_str(), p.id.as_str())))
    }

    pub fn lookup(&self, name: &str) -> Option<&DocumentId> {
        self.ids.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.ids.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_later_duplicate_wins() {
        let catalog = Catalog::from_entries([("Catan", "first"), ("Root", "r"), ("Catan", "second")]);
        assert_eq!(catalog.lookup("Catan").map(String::as_str), Some("second"));
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_empty_names_ignored() {
        let catalog = Catalog::from_entries([("", "blank"), ("Kip", "k")]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.lookup(""), None);
    }
}
