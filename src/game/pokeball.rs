// Pokeball flavor text attached to catch results

/// Cosmetic container flavor, drawn uniformly at random per catch.
pub const POKEBALL_LIST: &[&str] = &[
    "with a **Poke Ball**",
    "with a **Great Ball**",
    "with an **Ultra Ball**",
    "with a **Premier Ball**",
    "with a **Luxury Ball**",
    "with a **Dive Ball**",
    "with a **Nest Ball**",
    "with a **Timer Ball**",
    "with a **Quick Ball**",
    "with a **Dusk Ball**",
];
