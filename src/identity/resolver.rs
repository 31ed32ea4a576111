use log::warn;
use std::collections::BTreeSet;

use super::catalog::Catalog;
use crate::config::NameMappings;
use crate::domain::{DocumentId, PlayLine, PlayerLine};
use crate::errors::SkipReason;

/// Names that failed to resolve during a run, kept sorted for reporting
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnresolvedNames {
    pub games: BTreeSet<String>,
    pub players: BTreeSet<String>,
}

impl UnresolvedNames {
    pub fn is_empty(&self) -> bool {
        self.games.is_empty() && self.players.is_empty()
    }
}

/// Maps export names to store identifiers.
///
/// An exact catalog match wins; otherwise the override table gives a store
/// name which is looked up in the catalog. There is no fuzzy matching here.
pub struct IdentityResolver {
    games: Catalog,
    players: Catalog,
    mappings: NameMappings,
    unresolved: UnresolvedNames,
}

impl IdentityResolver {
    pub fn new(games: Catalog, players: Catalog, mappings: NameMappings) -> Self {
        Self {
            games,
            players,
            mappings,
            unresolved: UnresolvedNames::default(),
        }
    }

    pub fn resolve_game(&self, name: &str) -> Option<&DocumentId> {
        self.games
            .lookup(name)
            .or_else(|| self.mappings.game(name).and_then(|mapped| self.games.lookup(mapped)))
    }

    pub fn resolve_player(&self, name: &str) -> Option<&DocumentId> {
        self.players
            .lookup(name)
            .or_else(|| self.mappings.player(name).and_then(|mapped| self.players.lookup(mapped)))
    }

    /// Replace every name in the play with its identifier.
    ///
    /// The play is rejected if its game or any of its players is unknown.
    /// All unknown names in the play are remembered, not just the first.
    pub fn resolve_play(&mut self, line: &PlayLine) -> Result<PlayLine, SkipReason> {
        let game = self.resolve_game(&line.game).cloned();
        if game.is_none() {
            warn!("Game '{}' not found in store", line.game);
            self.unresolved.games.insert(line.game.clone());
        }

        let mut players = Vec::with_capacity(line.players.len());
        let mut first_unknown = None;
        for entry in &line.players {
            match self.resolve_player(&entry.player).cloned() {
                Some(id) => players.push(PlayerLine {
                    player: id,
                    score: entry.score.clone(),
                }),
                None => {
                    self.unresolved.players.insert(entry.player.clone());
                    first_unknown.get_or_insert_with(|| entry.player.clone());
                }
            }
        }

        let game = game.ok_or_else(|| SkipReason::UnknownGame(line.game.clone()))?;
        if let Some(player) = first_unknown {
            return Err(SkipReason::UnknownPlayer(player));
        }

        Ok(PlayLine {
            date_time: line.date_time.clone(),
            game,
            players,
        })
    }

    pub fn unresolved(&self) -> &UnresolvedNames {
        &self.unresolved
    }

    pub fn games(&self) -> &Catalog {
        &self.games
    }

    pub fn players(&self) -> &Catalog {
        &self.players
    }
}
