// Rare-tier pokemon and the sprite URLs used in their announcements

/// Legendary tier: catches of these are cross-posted to the rare channel.
pub const LEGENDARY_PKMN: &[&str] = &[
    "articuno",
    "zapdos",
    "moltres",
    "mewtwo",
    "mew",
    "raikou",
    "entei",
    "suicune",
    "lugia",
    "ho_oh",
    "celebi",
    "regirock",
    "regice",
    "registeel",
    "latias",
    "latios",
    "kyogre",
    "groudon",
    "rayquaza",
    "jirachi",
    "deoxys",
    "uxie",
    "mesprit",
    "azelf",
    "dialga",
    "palkia",
    "heatran",
    "regigigas",
    "giratina",
    "cresselia",
    "phione",
    "manaphy",
    "darkrai",
    "shaymin",
    "arceus",
    "victini",
    "cobalion",
    "terrakion",
    "virizion",
    "tornadus",
    "thundurus",
    "reshiram",
    "zekrom",
    "landorus",
    "kyurem",
    "keldeo",
    "meloetta",
    "genesect",
    "xerneas",
    "yveltal",
    "zygarde",
    "diancie",
    "hoopa",
    "volcanion",
    "cosmog",
    "cosmoem",
    "solgaleo",
    "lunala",
    "necrozma",
    "magearna",
    "marshadow",
    "tapu_koko",
    "tapu_lele",
    "tapu_bulu",
    "tapu_fini",
];

/// Ultra tier: announced the same way as legendaries.
pub const ULTRA_PKMN: &[&str] = &[
    "nihilego",
    "buzzwole",
    "pheromosa",
    "xurkitree",
    "celesteela",
    "kartana",
    "guzzlord",
    "poipole",
    "naganadel",
    "stakataka",
    "blacephalon",
];

pub fn is_rare(name: &str) -> bool {
    LEGENDARY_PKMN.contains(&name) || ULTRA_PKMN.contains(&name)
}

/// Small static sprite for the announcement embed thumbnail.
pub fn sprite_thumbnail_url(name: &str) -> String {
    format!(
        "https://raw.githubusercontent.com/msikma/pokesprite/master/icons/pokemon/regular/{}.png",
        name.replace('_', "-")
    )
}

/// Animated battle sprite for the announcement embed body.
pub fn animated_sprite_url(name: &str) -> String {
    format!(
        "https://play.pokemonshowdown.com/sprites/xyani/{}.gif",
        name.replace('_', "")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rare_tiers_are_detected() {
        assert!(is_rare("mewtwo"));
        assert!(is_rare("tapu_koko"));
        assert!(is_rare("kartana"));
        assert!(!is_rare("pidgey"));
    }

    #[test]
    fn test_sprite_urls_normalize_underscores() {
        assert_eq!(
            sprite_thumbnail_url("tapu_koko"),
            "https://raw.githubusercontent.com/msikma/pokesprite/master/icons/pokemon/regular/tapu-koko.png"
        );
        assert_eq!(
            animated_sprite_url("tapu_koko"),
            "https://play.pokemonshowdown.com/sprites/xyani/tapukoko.gif"
        );
    }
}
