//! Named bundles of categorical card attributes.
//!
//! Presets are switched without smoothing: applying one replaces the rarity,
//! supertype, subtypes and gallery flag outright and never touches the
//! channel vectors.

use fnv::FnvHashMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("duplicate preset id `{0}`")]
    DuplicateId(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PresetDescriptor {
    pub id: &'static str,
    pub label: &'static str,
    pub rarity: &'static str,
    pub supertype: &'static str,
    pub subtypes: &'static [&'static str],
    pub gallery: bool,
}

/// Categorical attributes currently applied to the card.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CardAttributes {
    pub rarity: String,
    pub supertype: String,
    pub subtypes: Vec<String>,
    pub gallery: bool,
}

impl CardAttributes {
    /// Attribute name/value pairs as written onto the card element.
    pub fn data_attributes(&self) -> [(&'static str, String); 4] {
        [
            ("data-rarity", self.rarity.clone()),
            ("data-supertype", self.supertype.clone()),
            ("data-subtypes", self.subtypes.join(" ")),
            ("data-gallery", self.gallery.to_string()),
        ]
    }
}

impl From<&PresetDescriptor> for CardAttributes {
    fn from(d: &PresetDescriptor) -> Self {
        Self {
            rarity: d.rarity.to_string(),
            supertype: d.supertype.to_string(),
            subtypes: d.subtypes.iter().map(|s| s.to_string()).collect(),
            gallery: d.gallery,
        }
    }
}

pub const BUILTIN_PRESETS: &[PresetDescriptor] = &[
    PresetDescriptor {
        id: "common",
        label: "Common",
        rarity: "common",
        supertype: "pokémon",
        subtypes: &["basic"],
        gallery: false,
    },
    PresetDescriptor {
        id: "reverse-holo",
        label: "Reverse Holo",
        rarity: "reverse holo",
        supertype: "pokémon",
        subtypes: &["stage 1"],
        gallery: false,
    },
    PresetDescriptor {
        id: "rare-holo",
        label: "Rare Holo",
        rarity: "rare holo",
        supertype: "pokémon",
        subtypes: &["basic"],
        gallery: false,
    },
    PresetDescriptor {
        id: "rare-holo-cosmos",
        label: "Rare Holo (Cosmos)",
        rarity: "rare holo cosmos",
        supertype: "pokémon",
        subtypes: &["basic"],
        gallery: false,
    },
    PresetDescriptor {
        id: "rare-holo-v",
        label: "Rare Holo V",
        rarity: "rare holo v",
        supertype: "pokémon",
        subtypes: &["basic", "v"],
        gallery: false,
    },
    PresetDescriptor {
        id: "rare-holo-vmax",
        label: "Rare Holo VMAX",
        rarity: "rare holo vmax",
        supertype: "pokémon",
        subtypes: &["vmax"],
        gallery: false,
    },
    PresetDescriptor {
        id: "rare-holo-vstar",
        label: "Rare Holo VSTAR",
        rarity: "rare holo vstar",
        supertype: "pokémon",
        subtypes: &["vstar"],
        gallery: false,
    },
    PresetDescriptor {
        id: "rare-ultra",
        label: "Rare Ultra (Full Art)",
        rarity: "rare ultra",
        supertype: "pokémon",
        subtypes: &["basic", "v"],
        gallery: false,
    },
    PresetDescriptor {
        id: "rare-ultra-trainer",
        label: "Rare Ultra (Trainer)",
        rarity: "rare ultra",
        supertype: "trainer",
        subtypes: &["supporter"],
        gallery: false,
    },
    PresetDescriptor {
        id: "rare-rainbow",
        label: "Rare Rainbow",
        rarity: "rare rainbow",
        supertype: "pokémon",
        subtypes: &["vmax"],
        gallery: false,
    },
    PresetDescriptor {
        id: "rare-rainbow-alt",
        label: "Rare Rainbow (Alt)",
        rarity: "rare rainbow alt",
        supertype: "pokémon",
        subtypes: &["basic", "v"],
        gallery: false,
    },
    PresetDescriptor {
        id: "rare-secret",
        label: "Rare Secret",
        rarity: "rare secret",
        supertype: "trainer",
        subtypes: &["item"],
        gallery: false,
    },
    PresetDescriptor {
        id: "rare-shiny",
        label: "Rare Shiny",
        rarity: "rare shiny",
        supertype: "pokémon",
        subtypes: &["basic"],
        gallery: false,
    },
    PresetDescriptor {
        id: "radiant",
        label: "Radiant Rare",
        rarity: "radiant rare",
        supertype: "pokémon",
        subtypes: &["basic", "radiant"],
        gallery: false,
    },
    PresetDescriptor {
        id: "amazing",
        label: "Amazing Rare",
        rarity: "amazing rare",
        supertype: "pokémon",
        subtypes: &["basic"],
        gallery: false,
    },
    PresetDescriptor {
        id: "trainer-gallery-holo",
        label: "Trainer Gallery Holo",
        rarity: "rare holo",
        supertype: "pokémon",
        subtypes: &["basic"],
        gallery: true,
    },
    PresetDescriptor {
        id: "trainer-gallery-v",
        label: "Trainer Gallery V",
        rarity: "rare ultra",
        supertype: "pokémon",
        subtypes: &["basic", "v"],
        gallery: true,
    },
];

/// Index `presets` by id; the first occurrence wins and later ones are
/// returned as duplicates.
fn index_presets(
    presets: &'static [PresetDescriptor],
) -> (FnvHashMap<&'static str, usize>, Vec<&'static str>) {
    let mut index = FnvHashMap::default();
    let mut duplicates = Vec::new();
    for (i, p) in presets.iter().enumerate() {
        if index.contains_key(p.id) {
            duplicates.push(p.id);
        } else {
            index.insert(p.id, i);
        }
    }
    (index, duplicates)
}

/// Ordered catalogue of presets with an id index.
#[derive(Clone, Debug)]
pub struct PresetRegistry {
    presets: &'static [PresetDescriptor],
    index: FnvHashMap<&'static str, usize>,
}

impl PresetRegistry {
    pub fn new(presets: &'static [PresetDescriptor]) -> Result<Self, RegistryError> {
        let (index, duplicates) = index_presets(presets);
        if let Some(&id) = duplicates.first() {
            return Err(RegistryError::DuplicateId(id));
        }
        Ok(Self { presets, index })
    }

    /// The shipped catalogue. A repeated id keeps its first entry and is
    /// logged, so lookups agree with `new` on which descriptor an id names.
    pub fn builtin() -> Self {
        let (index, duplicates) = index_presets(BUILTIN_PRESETS);
        for id in duplicates {
            log::error!("[preset] {}", RegistryError::DuplicateId(id));
        }
        Self {
            presets: BUILTIN_PRESETS,
            index,
        }
    }

    pub fn get(&self, id: &str) -> Option<&'static PresetDescriptor> {
        let presets = self.presets;
        self.index.get(id).map(|&i| &presets[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static PresetDescriptor> {
        self.presets.iter()
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

impl Default for PresetRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
