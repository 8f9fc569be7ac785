//! Name to player-ID lookup.

use std::collections::{HashMap, HashSet};

use crate::{
    cli::types::{PlayerId, Position},
    sleeper::PlayerRecord,
};

/// Normalized form used for both keys and lookups: trimmed, lowercased.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Immutable map from normalized full name to player ID, restricted to
/// eligible positions.
///
/// Two players sharing a normalized name collapse to the one seen last, so
/// callers pass records in the provider's response order.
///
/// # Examples
///
/// ```rust
/// use ffl_playoffs::{scoring::PlayerDirectory, sleeper::PlayerRecord, PlayerId, Position};
///
/// let records = vec![PlayerRecord {
///     id: PlayerId::new("4984"),
///     first_name: "Josh".to_string(),
///     last_name: "Allen".to_string(),
///     position: Some(Position::QB),
///     team: Some("BUF".to_string()),
/// }];
/// let directory = PlayerDirectory::build(&records, &[Position::QB]);
///
/// assert_eq!(directory.lookup("  JOSH ALLEN "), Some(&PlayerId::new("4984")));
/// assert_eq!(directory.lookup("Josh Allen Jr."), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerDirectory {
    ids: HashMap<String, PlayerId>,
}

impl PlayerDirectory {
    pub fn build<'a>(
        records: impl IntoIterator<Item = &'a PlayerRecord>,
        eligible: &[Position],
    ) -> Self {
        let eligible: HashSet<Position> = eligible.iter().copied().collect();
        let mut ids = HashMap::new();

        for record in records {
            let Some(position) = record.position else {
                continue;
            };
            if !eligible.contains(&position) {
                continue;
            }
            let name = normalize_name(&record.full_name());
            if name.is_empty() {
                continue;
            }
            ids.insert(name, record.id.clone());
        }

        Self { ids }
    }

    pub fn lookup(&self, name: &str) -> Option<&PlayerId> {
        self.ids.get(&normalize_name(name))
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
