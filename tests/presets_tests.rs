// Host-side tests for the preset catalogue and settings parsing.

use card_core::*;

static DUPLICATED: &[PresetDescriptor] = &[
    PresetDescriptor {
        id: "holo",
        label: "Holo",
        rarity: "rare holo",
        supertype: "pokémon",
        subtypes: &[],
        gallery: false,
    },
    PresetDescriptor {
        id: "holo",
        label: "Holo again",
        rarity: "rare holo",
        supertype: "trainer",
        subtypes: &[],
        gallery: true,
    },
];

#[test]
fn builtin_ids_are_unique() {
    let registry = PresetRegistry::new(BUILTIN_PRESETS).expect("builtin presets must be unique");
    assert_eq!(registry.len(), BUILTIN_PRESETS.len());
    assert!(!registry.is_empty());

    let builtin = PresetRegistry::builtin();
    for descriptor in BUILTIN_PRESETS {
        assert_eq!(builtin.get(descriptor.id), Some(descriptor));
        assert_eq!(registry.get(descriptor.id), builtin.get(descriptor.id));
    }
}

#[test]
fn cosmos_preset_is_named_consistently() {
    let registry = PresetRegistry::builtin();
    let cosmos = registry.get("rare-holo-cosmos").expect("cosmos preset");
    assert_eq!(cosmos.rarity, "rare holo cosmos");
    assert!(cosmos.label.contains("Cosmos"));
    assert!(registry.get("rare-holo-galaxy").is_none());
}

#[test]
fn duplicate_ids_are_rejected() {
    let err = PresetRegistry::new(DUPLICATED).unwrap_err();
    assert_eq!(err, RegistryError::DuplicateId("holo"));
}

#[test]
fn registry_keeps_declaration_order() {
    let registry = PresetRegistry::builtin();
    let ids: Vec<&str> = registry.iter().map(|p| p.id).collect();
    let declared: Vec<&str> = BUILTIN_PRESETS.iter().map(|p| p.id).collect();
    assert_eq!(ids, declared);
    assert_eq!(ids[0], "common");
}

#[test]
fn lookup_by_id() {
    let registry = PresetRegistry::builtin();
    let vmax = registry.get("rare-holo-vmax").expect("vmax preset");
    assert_eq!(vmax.label, "Rare Holo VMAX");
    assert_eq!(vmax.rarity, "rare holo vmax");
    assert!(!vmax.gallery);
    assert!(registry.get("does-not-exist").is_none());
    assert!(registry.get("").is_none());
}

#[test]
fn attributes_render_as_data_attributes() {
    let registry = PresetRegistry::builtin();
    let attrs = CardAttributes::from(registry.get("trainer-gallery-v").unwrap());
    let rendered = attrs.data_attributes();
    assert_eq!(rendered[0], ("data-rarity", "rare ultra".to_string()));
    assert_eq!(rendered[2], ("data-subtypes", "basic v".to_string()));
    assert_eq!(rendered[3], ("data-gallery", "true".to_string()));
}

#[test]
fn setting_fields_parse_from_panel_keys_and_attribute_names() {
    assert_eq!("tiltX".parse::<SettingField>(), Ok(SettingField::TiltX));
    assert_eq!("prism-density".parse::<SettingField>(), Ok(SettingField::PrismDensity));
    assert_eq!(
        "bogus".parse::<SettingField>(),
        Err(SettingsError::UnknownField("bogus".into()))
    );
    for field in SettingField::ALL {
        assert_eq!(field.key().parse::<SettingField>(), Ok(field));
    }
}

#[test]
fn looks_parse_case_insensitively() {
    assert_eq!("HYBRID".parse::<Look>(), Ok(Look::Hybrid));
    assert_eq!(" parallel ".parse::<Look>(), Ok(Look::Parallel));
    assert!(matches!("foil".parse::<Look>(), Err(SettingsError::UnknownLook(_))));
    assert!(Look::Parallel.prism_enabled() && !Look::Parallel.holo_enabled());
    assert!(Look::Holo.holo_enabled() && !Look::Holo.prism_enabled());
    assert!(!Look::Standard.holo_enabled() && !Look::Standard.prism_enabled());
}

#[test]
fn values_clamp_to_panel_ranges() {
    let mut settings = Settings::default();
    assert_eq!(settings.set(SettingField::TiltX, 100.0), Ok(24.0));
    assert_eq!(settings.set(SettingField::PrismDensity, 1.0), Ok(6.0));
    assert_eq!(settings.set(SettingField::ShineMax, 0.4), Ok(0.4));
    assert_eq!(settings.get(SettingField::TiltX), 24.0);
    assert!(settings.set(SettingField::FoilMax, f32::INFINITY).is_err());
    assert_eq!(settings.foil_max, 0.08);

    for field in SettingField::ALL {
        let (lo, hi) = field.range();
        assert!(lo < hi);
        let default = Settings::default().get(field);
        assert!((lo..=hi).contains(&default), "{field:?} default out of range");
    }
}

#[test]
fn raw_values_parse_or_report() {
    assert_eq!(SettingField::TiltY.parse_value(" 16.5 "), Ok(16.5));
    assert!(matches!(
        SettingField::TiltY.parse_value("steep"),
        Err(SettingsError::NotANumber { field: "tiltY", .. })
    ));
}

#[test]
fn settings_properties_use_fixed_precision() {
    let settings = Settings::default();
    let props = settings.properties();
    assert_eq!(props[0], ("--tilt-x-max", "12.00".to_string()));
    assert_eq!(props[1], ("--tilt-y-max", "14.00".to_string()));
    assert_eq!(props[2], ("--shine-max", "0.350".to_string()));
    assert_eq!(props[3], ("--foil-max", "0.080".to_string()));
    assert_eq!(props[5], ("--holo-strength", "0.65".to_string()));
    assert_eq!(props[7], ("--prism-density", "6.0".to_string()));
}

#[test]
fn default_preset_exists() {
    let settings = Settings::default();
    assert!(PresetRegistry::builtin().get(&settings.preset_id).is_some());
}
