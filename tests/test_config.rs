use clap::Parser;
use staticd::config::Config;

#[test]
fn test_config_requires_base_dir() {
    let result = Config::try_parse_from(["staticd"]);
    assert!(result.is_err());
}

#[test]
fn test_config_base_dir_positional() {
    let cfg = Config::try_parse_from(["staticd", "/public"]).unwrap();
    assert_eq!(cfg.base_dir, "/public");
}

#[test]
fn test_config_default_port() {
    let cfg = Config::try_parse_from(["staticd", "/public"]).unwrap();
    assert_eq!(cfg.port, 8080);
}

#[test]
fn test_config_explicit_port() {
    let cfg = Config::try_parse_from(["staticd", "/public", "9000"]).unwrap();
    assert_eq!(cfg.port, 9000);
}

#[test]
fn test_config_rejects_non_numeric_port() {
    let result = Config::try_parse_from(["staticd", "/public", "not-a-port"]);
    assert!(result.is_err());
}

#[test]
fn test_config_clone() {
    let cfg1 = Config::try_parse_from(["staticd", "/public"]).unwrap();
    let cfg2 = cfg1.clone();
    assert_eq!(cfg1.base_dir, cfg2.base_dir);
}
