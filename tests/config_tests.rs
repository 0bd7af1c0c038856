use kanban_tui::config::{ConfigError, GlobalConfig, LogConfig, ThemeConfig};

// === ThemeConfig Tests ===

#[test]
fn test_parse_hex_valid() {
    assert_eq!(ThemeConfig::parse_hex("#FFFFFF"), Some((255, 255, 255)));
    assert_eq!(ThemeConfig::parse_hex("#000000"), Some((0, 0, 0)));
    assert_eq!(ThemeConfig::parse_hex("#5f5fd7"), Some((95, 95, 215)));
    assert_eq!(ThemeConfig::parse_hex("#626262"), Some((98, 98, 98)));
}

#[test]
fn test_parse_hex_without_hash() {
    assert_eq!(ThemeConfig::parse_hex("FFFFFF"), Some((255, 255, 255)));
}

#[test]
fn test_parse_hex_invalid() {
    assert_eq!(ThemeConfig::parse_hex("#FFF"), None); // Too short
    assert_eq!(ThemeConfig::parse_hex("#FFFFFFF"), None); // Too long
    assert_eq!(ThemeConfig::parse_hex("#GGGGGG"), None); // Invalid hex chars
    assert_eq!(ThemeConfig::parse_hex("#ééé"), None); // Non-ASCII
    assert_eq!(ThemeConfig::parse_hex(""), None); // Empty
}

#[test]
fn test_theme_config_default() {
    let theme = ThemeConfig::default();

    // Verify all default colors are valid hex
    assert!(ThemeConfig::parse_hex(&theme.color_focused_border).is_some());
    assert!(ThemeConfig::parse_hex(&theme.color_title).is_some());
    assert!(ThemeConfig::parse_hex(&theme.color_description).is_some());
    assert!(ThemeConfig::parse_hex(&theme.color_selected).is_some());
    assert!(ThemeConfig::parse_hex(&theme.color_help).is_some());
}

// === GlobalConfig Tests ===

#[test]
fn test_global_config_default() {
    let config = GlobalConfig::default();

    assert_eq!(config.log.level, "info");
    assert!(!config.log.json);
    assert_eq!(config.theme.color_focused_border, "#5f5fd7");
}

#[test]
fn test_load_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = GlobalConfig::load_from(&dir.path().join("missing.toml")).unwrap();
    assert_eq!(config.log.level, "info");
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[theme]\ncolor_help = \"#123456\"\n\n[log]\njson = true\n").unwrap();

    let config = GlobalConfig::load_from(&path).unwrap();
    assert_eq!(config.theme.color_help, "#123456");
    assert_eq!(config.theme.color_focused_border, "#5f5fd7");
    assert!(config.log.json);
    assert_eq!(config.log.level, "info");
}

#[test]
fn test_save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut config = GlobalConfig::default();
    config.log = LogConfig {
        level: "debug".to_string(),
        json: true,
    };
    config.theme.color_selected = "#abcdef".to_string();
    config.save_to(&path).unwrap();

    let loaded = GlobalConfig::load_from(&path).unwrap();
    assert_eq!(loaded.log.level, "debug");
    assert!(loaded.log.json);
    assert_eq!(loaded.theme.color_selected, "#abcdef");
}

#[test]
fn test_invalid_file_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[log\nlevel = ").unwrap();

    let err = GlobalConfig::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("failed to parse config"));
}
