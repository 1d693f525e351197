use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_config_matches_site_constants() {
    let config = SiteConfig::default();
    assert_eq!(config.default_page, PageId::Home);
    assert_eq!(config.glass_ball_count, 8);
    assert_eq!(config.reveal_delay_ms, 400);
    assert!((config.reveal_threshold - 0.1).abs() < f64::EPSILON);
    assert_eq!(config.log_level, LevelFilter::Info);
}

#[test]
fn from_values_without_overrides_is_default() {
    assert_eq!(SiteConfig::from_values(None, None, None), SiteConfig::default());
}

// =============================================================
// Log level
// =============================================================

#[test]
fn parse_log_level_accepts_known_levels_case_insensitively() {
    assert_eq!(parse_log_level(Some("DEBUG")), Ok(LevelFilter::Debug));
    assert_eq!(parse_log_level(Some(" warn ")), Ok(LevelFilter::Warn));
    assert_eq!(parse_log_level(Some("off")), Ok(LevelFilter::Off));
}

#[test]
fn parse_log_level_blank_means_default() {
    assert_eq!(parse_log_level(None), Ok(LevelFilter::Info));
    assert_eq!(parse_log_level(Some("  ")), Ok(LevelFilter::Info));
}

#[test]
fn parse_log_level_rejects_unknown_level() {
    assert_eq!(
        parse_log_level(Some("verbose")),
        Err(ConfigError::InvalidLogLevel("verbose".into()))
    );
}

// =============================================================
// Reveal delay
// =============================================================

#[test]
fn parse_reveal_delay_accepts_milliseconds() {
    assert_eq!(parse_reveal_delay(Some("250")), Ok(250));
    assert_eq!(parse_reveal_delay(None), Ok(DEFAULT_REVEAL_DELAY_MS));
}

#[test]
fn parse_reveal_delay_rejects_negative_and_text() {
    assert!(matches!(parse_reveal_delay(Some("-5")), Err(ConfigError::InvalidRevealDelay(_))));
    assert!(matches!(parse_reveal_delay(Some("soon")), Err(ConfigError::InvalidRevealDelay(_))));
}

#[test]
fn invalid_overrides_fall_back_per_field() {
    let config = SiteConfig::from_values(Some("loud"), Some("120"), Some("  "));
    assert_eq!(config.log_level, LevelFilter::Info);
    assert_eq!(config.reveal_delay_ms, 120);
    assert_eq!(config.owner_name, DEFAULT_OWNER_NAME);
}

#[test]
fn owner_name_override_is_trimmed() {
    let config = SiteConfig::from_values(None, None, Some("  Ada Lovelace "));
    assert_eq!(config.owner_name, "Ada Lovelace");
}
