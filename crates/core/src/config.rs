/// Combat model constants.
pub struct CombatConfig;

impl CombatConfig {
    /// Health every character spawns with.
    pub const SPAWN_HEALTH: u32 = 1000;

    /// Level every character spawns at.
    pub const SPAWN_LEVEL: u32 = 1;
}
