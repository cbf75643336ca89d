// Host-side tests for strip attribute parsing.

use folio_core::constants::DEFAULT_BASE_SPEED;
use folio_core::{parse_direction, parse_speed, ConfigError, Direction, MarqueeConfig};

#[test]
fn defaults_when_attributes_absent() {
    let cfg = MarqueeConfig::from_attributes(None, None);
    assert_eq!(cfg.base_speed, DEFAULT_BASE_SPEED);
    assert_eq!(cfg.direction, Direction::Forward);
}

#[test]
fn attributes_override_defaults() {
    let cfg = MarqueeConfig::from_attributes(Some(" 1.25 "), Some("-1"));
    assert_eq!(cfg.base_speed, 1.25);
    assert_eq!(cfg.direction, Direction::Reverse);
    assert_eq!(cfg.direction.sign(), -1.0);
}

#[test]
fn malformed_attributes_fall_back() {
    let cfg = MarqueeConfig::from_attributes(Some("fast"), Some("0"));
    assert_eq!(cfg.base_speed, DEFAULT_BASE_SPEED);
    assert_eq!(cfg.direction, Direction::Forward);
    let cfg = MarqueeConfig::from_attributes(Some("-3"), Some("left"));
    assert_eq!(cfg.base_speed, DEFAULT_BASE_SPEED);
    assert_eq!(cfg.direction, Direction::Forward);
}

#[test]
fn strict_parsers_report_errors() {
    assert_eq!(
        parse_speed("abc"),
        Err(ConfigError::NotANumber("abc".to_string()))
    );
    assert_eq!(parse_speed("0"), Err(ConfigError::InvalidSpeed(0.0)));
    assert!(matches!(parse_speed("inf"), Err(ConfigError::InvalidSpeed(_))));
    assert_eq!(parse_direction("0"), Err(ConfigError::ZeroDirection(0.0)));
    assert_eq!(parse_direction("2.5"), Ok(Direction::Forward));
    assert_eq!(parse_direction("-0.1"), Ok(Direction::Reverse));
}

#[test]
fn error_messages_name_the_problem() {
    let msg = ConfigError::InvalidSpeed(-2.0).to_string();
    assert!(msg.contains("-2"), "{}", msg);
    assert!(ConfigError::NotANumber("x".into()).to_string().contains("`x`"));
}
