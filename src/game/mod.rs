// Catch game rules: cooldown policy, selection strategy, flavor data
pub mod cooldown;
pub mod pokeball;
pub mod rarity;
pub mod selection;
