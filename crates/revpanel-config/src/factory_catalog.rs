//! Factory catalog bundled with the library.
//!
//! Always available without external files, and used as the fallback when a
//! user catalog is missing or fails to load.

use crate::Catalog;

/// Embedded TOML for the factory catalog.
pub const FACTORY_CATALOG_TOML: &str = r#"
[[categories]]
id = "halls"
name = "Halls"

[[categories]]
id = "rooms"
name = "Rooms"

[[categories]]
id = "plates"
name = "Plates"

[[categories]]
id = "ambient"
name = "Ambient"

[[categories]]
id = "special"
name = "Special"

[[presets]]
id = "cathedral"
name = "Cathedral"
category = "halls"
tags = ["long", "dark", "vocal"]
description = "Stone nave with a slow, dark tail"

[[presets]]
id = "concert-hall"
name = "Concert Hall"
category = "halls"
tags = ["natural", "wide"]
description = "Balanced orchestral hall with early reflections up front"

[[presets]]
id = "vocal-hall"
name = "Vocal Hall"
category = "halls"
tags = ["bright", "vocal"]
description = "Smooth hall tuned to sit behind a lead vocal"

[[presets]]
id = "small-room"
name = "Small Room"
category = "rooms"
tags = ["short", "natural"]
description = "Tight room for drums and percussion"

[[presets]]
id = "live-room"
name = "Live Room"
category = "rooms"
tags = ["natural", "drums"]
description = "Wood-panelled tracking room"

[[presets]]
id = "studio-booth"
name = "Studio Booth"
category = "rooms"
tags = ["short", "dry"]
description = "Barely-there ambience for spoken word"

[[presets]]
id = "gold-plate"
name = "Gold Plate"
category = "plates"
tags = ["bright", "vintage"]
description = "Classic bright plate for snares and vocals"

[[presets]]
id = "dark-plate"
name = "Dark Plate"
category = "plates"
tags = ["dark", "vintage"]
description = "Damped plate with a rolled-off top end"

[[presets]]
id = "endless-drift"
name = "Endless Drift"
category = "ambient"
tags = ["long", "shimmer", "pad"]
description = "Near-infinite wash with octave shimmer"

[[presets]]
id = "frozen-lake"
name = "Frozen Lake"
category = "ambient"
tags = ["long", "wide"]
description = "Wide, glassy tail for pads and guitars"

[[presets]]
id = "cloud-bank"
name = "Cloud Bank"
category = "ambient"
tags = ["modulated", "pad"]
description = "Soft modulated bloom with slow attack"

[[presets]]
id = "reverse-swell"
name = "Reverse Swell"
category = "special"
tags = ["reverse", "fx"]
description = "Reverse tail that swells into each note"

[[presets]]
id = "gated-snare"
name = "Gated Snare"
category = "special"
tags = ["gate", "drums", "80s"]
description = "Big room cut short by a hard gate"

[[presets]]
id = "chorus-space"
name = "Chorus Space"
category = "special"
tags = ["chorus", "wide"]
description = "Chorused reverb for clean guitars"
"#;

/// Parse the factory catalog.
///
/// The embedded TOML is checked by tests, so this never returns an empty
/// catalog in practice.
pub fn factory_catalog() -> Catalog {
    Catalog::from_toml(FACTORY_CATALOG_TOML).unwrap_or_default()
}

/// Ids of every factory preset, in catalog order.
pub fn factory_preset_ids() -> Vec<String> {
    factory_catalog().presets.into_iter().map(|p| p.id).collect()
}

/// Check whether an id names a factory preset.
pub fn is_factory_preset(id: &str) -> bool {
    factory_catalog().contains_preset(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_toml_is_valid() {
        let catalog = Catalog::from_toml(FACTORY_CATALOG_TOML).expect("factory catalog parses");
        assert_eq!(catalog.categories.len(), 5);
        assert_eq!(catalog.len(), 14);
    }

    #[test]
    fn every_category_has_presets() {
        let catalog = factory_catalog();
        for category in &catalog.categories {
            assert!(
                catalog.presets_in(&category.id).count() > 0,
                "category '{}' is empty",
                category.id
            );
        }
    }

    #[test]
    fn every_preset_has_description_and_tags() {
        for preset in factory_catalog().presets {
            assert!(!preset.description.is_empty(), "{}", preset.id);
            assert!(!preset.tags.is_empty(), "{}", preset.id);
        }
    }

    #[test]
    fn factory_ids() {
        let ids = factory_preset_ids();
        assert_eq!(ids.first().map(String::as_str), Some("cathedral"));
        assert!(is_factory_preset("gated-snare"));
        assert!(!is_factory_preset("nonexistent"));
    }
}
