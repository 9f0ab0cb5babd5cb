//! Typed commands produced by translation and consumed by the dispatcher.

/// Rarity/power classification for grantable items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemTier {
    Tier1,
    Tier2,
    Tier3,
    Boss,
}

impl ItemTier {
    /// Resolve a tier from its wire label.
    ///
    /// `Tier4` is the wire name for the boss tier. Unrecognized labels fall
    /// back to `Tier1` rather than erroring.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Tier2" => ItemTier::Tier2,
            "Tier3" => ItemTier::Tier3,
            "Tier4" => ItemTier::Boss,
            _ => ItemTier::Tier1,
        }
    }
}

/// One unit of work for the dispatcher.
///
/// Immutable once constructed; carries no timestamp — ordering is queue
/// position only. `SpawnEntity` is never constructed with an empty template
/// name (the translator discards such records instead).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Spawn an adversarial entity above the active player.
    SpawnEntity { template_name: String },
    /// Grant the active player a random item of the given tier.
    GiveItem { tier: ItemTier },
}
