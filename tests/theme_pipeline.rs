//! End-to-end tests for the theme pipeline
//!
//! Exercises the public surface the way an application would: generate
//! themes from configurations, run a store against a real on-disk
//! database, and verify the published guarantees around contrast,
//! persistence, and atomicity.

use std::sync::Arc;

use huecraft::{
    contrast_ratio, generate_scale, generate_theme, generate_theme_with_report, KvConfig,
    KvStore, MemoryBinding, ThemeConfig, ThemeConfigPatch, ThemeMode, ThemeStore, AA_NORMAL,
};

#[test]
fn light_theme_has_documented_backgrounds() {
    let theme = generate_theme(&ThemeConfig::new("#3b82f6", ThemeMode::Light)).unwrap();

    assert_eq!(theme.colors.background, "#ffffff");
    assert_eq!(theme.colors.foreground, "#111827");
    assert_eq!(theme.colors.primary, "#3b82f6");
}

#[test]
fn dark_theme_has_documented_backgrounds() {
    let theme = generate_theme(&ThemeConfig::new("#3b82f6", ThemeMode::Dark)).unwrap();

    assert_eq!(theme.colors.background, "#111827");
    assert_eq!(theme.colors.primary, "#3b82f6");
}

#[test]
fn scale_anchors_seed_at_500() {
    let scale = generate_scale("#9d4edd").unwrap();
    assert_eq!(scale.s500, "#9d4edd");

    let theme = generate_theme(&ThemeConfig::new("#9d4edd", ThemeMode::Light)).unwrap();
    assert_eq!(theme.colors.primary_scale.s500, "#9d4edd");
}

#[test]
fn every_checked_pairing_meets_aa() {
    let seeds = ["#3b82f6", "#ef4444", "#fde047", "#111827", "#f9fafb", "#64748b"];

    for mode in [ThemeMode::Light, ThemeMode::Dark] {
        for seed in seeds {
            let (theme, warnings) =
                generate_theme_with_report(&ThemeConfig::new(seed, mode)).unwrap();
            assert!(warnings.is_empty(), "{seed} in {mode} left warnings: {warnings:?}");

            let pairs = [
                (&theme.colors.background, &theme.colors.foreground),
                (&theme.colors.primary, &theme.colors.primary_foreground),
                (&theme.colors.secondary, &theme.colors.secondary_foreground),
                (&theme.colors.destructive, &theme.colors.destructive_foreground),
                (&theme.colors.success, &theme.colors.success_foreground),
                (&theme.colors.warning, &theme.colors.warning_foreground),
                (&theme.colors.info, &theme.colors.info_foreground),
            ];
            for (bg, fg) in pairs {
                let ratio = contrast_ratio(bg, fg).unwrap();
                assert!(
                    ratio >= AA_NORMAL,
                    "{fg} on {bg} is {ratio:.2} for seed {seed} in {mode}"
                );
            }
        }
    }
}

#[test]
fn generation_is_deterministic() {
    let config = ThemeConfig {
        primary_color: "#d97706".to_string(),
        secondary_color: Some("#0ea5e9".to_string()),
        accent_color: Some("#9d4edd".to_string()),
        mode: ThemeMode::Dark,
        font_family: Some("Menlo, monospace".to_string()),
        base_spacing: Some(6.0),
        base_radius: Some(4.0),
    };

    assert_eq!(generate_theme(&config).unwrap(), generate_theme(&config).unwrap());
}

#[test]
fn store_round_trips_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("themes.db").to_string_lossy().to_string();

    {
        let kv = KvStore::open(KvConfig::new(&path)).unwrap();
        let store = ThemeStore::new(kv, Box::new(MemoryBinding::new())).unwrap();
        store.set_primary_color("#9d4edd").unwrap();
        store.set_mode(ThemeMode::Dark).unwrap();
        store.flush().unwrap();
    }

    let kv = KvStore::open(KvConfig::new(&path)).unwrap();
    let store = ThemeStore::new(kv, Box::new(MemoryBinding::new())).unwrap();

    assert_eq!(store.config().primary_color, "#9d4edd");
    assert_eq!(store.config().mode, ThemeMode::Dark);
    assert_eq!(store.current_theme().colors.background, "#111827");
}

#[test]
fn persisted_record_is_versioned_camel_case_json() {
    let kv = KvStore::in_memory().unwrap();
    let store = ThemeStore::new(kv.clone(), Box::new(MemoryBinding::new())).unwrap();

    store.set_primary_color("#9d4edd").unwrap();
    store.set_mode(ThemeMode::Dark).unwrap();

    // Two writes under a version envelope, camelCase field names
    let record: serde_json::Value = kv.get("theme:config").unwrap().unwrap();
    assert_eq!(record["version"], 2);
    assert_eq!(record["data"]["primaryColor"], "#9d4edd");
    assert_eq!(record["data"]["mode"], "dark");
}

#[test]
fn toggle_dark_mode_round_trips() {
    let kv = KvStore::in_memory().unwrap();
    let store = ThemeStore::new(kv, Box::new(MemoryBinding::new())).unwrap();
    store.set_primary_color("#16a34a").unwrap();

    let before = store.config();
    store.toggle_dark_mode().unwrap();
    store.toggle_dark_mode().unwrap();

    assert_eq!(store.config(), before);
}

#[test]
fn invalid_update_leaves_no_partial_state() {
    let kv = KvStore::in_memory().unwrap();
    let binding = Arc::new(parking_lot_binding());
    let store = ThemeStore::new(kv, Box::new(Arc::clone(&binding))).unwrap();
    store.set_primary_color("#9d4edd").unwrap();

    let config = store.config();
    let theme = store.current_theme();
    let generation = binding.lock().generation();

    let result = store.update_config(
        ThemeConfigPatch::default()
            .primary_color("definitely-not-a-color")
            .mode(ThemeMode::Dark),
    );
    assert!(result.is_err());

    // Nothing moved: not the config, not the theme, not the binding
    assert_eq!(store.config(), config);
    assert_eq!(store.current_theme(), theme);
    assert_eq!(binding.lock().generation(), generation);
}

#[test]
fn binding_receives_full_variable_set() {
    let kv = KvStore::in_memory().unwrap();
    let binding = Arc::new(parking_lot_binding());
    let store = ThemeStore::new(kv, Box::new(Arc::clone(&binding))).unwrap();

    store.set_primary_color("#9d4edd").unwrap();

    let binding = binding.lock();
    assert_eq!(binding.get("primary"), Some("#9d4edd"));
    assert_eq!(binding.get("primary-500"), Some("#9d4edd"));
    assert_eq!(binding.get("background"), Some("#ffffff"));
    assert_eq!(binding.get("nav-active"), Some("#9d4edd"));
    // 31 roles and three 11-step scales
    assert_eq!(binding.len(), 31 + 33);
}

#[test]
fn subscribers_observe_every_applied_change() {
    let kv = KvStore::in_memory().unwrap();
    let store = Arc::new(ThemeStore::new(kv, Box::new(MemoryBinding::new())).unwrap());

    let names: Arc<parking_lot::Mutex<Vec<String>>> =
        Arc::new(parking_lot::Mutex::new(Vec::new()));
    let sink = Arc::clone(&names);
    store.subscribe(move |theme| sink.lock().push(theme.name.clone()));

    store.set_primary_color("#9d4edd").unwrap();
    store.toggle_dark_mode().unwrap();
    assert!(store.set_primary_color("bogus").is_err());
    store.reset_theme().unwrap();

    assert_eq!(
        *names.lock(),
        vec!["9d4edd-light", "9d4edd-dark", "3b82f6-light"]
    );
}

fn parking_lot_binding() -> parking_lot::Mutex<MemoryBinding> {
    parking_lot::Mutex::new(MemoryBinding::new())
}
