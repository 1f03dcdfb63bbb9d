//! The fixed set of database partitions that make up a full backup set.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the seven named database partitions.
///
/// The set is closed: every backup listing addresses exactly these seven,
/// in the order of [`Shard::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shard {
    Shared,
    Cashbook,
    Materials,
    Project,
    Inventory,
    Purchase,
    Sales,
}

impl Shard {
    /// All shards in display order.
    pub const ALL: [Shard; 7] = [
        Shard::Shared,
        Shard::Cashbook,
        Shard::Materials,
        Shard::Project,
        Shard::Inventory,
        Shard::Purchase,
        Shard::Sales,
    ];

    /// Name used in download URLs (`db=<name>`).
    pub fn name(self) -> &'static str {
        match self {
            Shard::Shared => "shared",
            Shard::Cashbook => "cashbook",
            Shard::Materials => "materials",
            Shard::Project => "project",
            Shard::Inventory => "inventory",
            Shard::Purchase => "purchase",
            Shard::Sales => "sales",
        }
    }

    /// Archive name shown as the link label.
    pub fn archive_name(self) -> String {
        format!("{}.zip", self.name())
    }

    /// Position of this shard in [`Shard::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_name(name: &str) -> Option<Shard> {
        Shard::ALL.into_iter().find(|shard| shard.name() == name)
    }
}

impl fmt::Display for Shard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_order() {
        for (position, shard) in Shard::ALL.iter().enumerate() {
            assert_eq!(shard.index(), position);
        }
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Shard::from_name("inventory"), Some(Shard::Inventory));
        assert_eq!(Shard::from_name("Inventory"), None);
        assert_eq!(Shard::from_name("ledger"), None);
    }
}
