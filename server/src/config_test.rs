use std::collections::HashMap;

use super::*;
use crate::error::ErrorCode;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

// =============================================================================
// RelayConfig
// =============================================================================

#[test]
fn from_lookup_applies_defaults() {
    let cfg = RelayConfig::from_lookup(lookup(&[("WALLET_RPC_URL", "https://wallet.example/v2/")])).unwrap();
    assert_eq!(cfg.rpc_url, "https://wallet.example/v2");
    assert_eq!(cfg.api_key, None);
    assert_eq!(cfg.chain_id, DEFAULT_CHAIN_ID);
    assert_eq!(cfg.policy_id, None);
    assert_eq!(
        cfg.timeouts,
        RelayTimeouts { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    );
}

#[test]
fn from_lookup_reads_default_key_var() {
    let cfg = RelayConfig::from_lookup(lookup(&[
        ("WALLET_RPC_URL", "https://wallet.example"),
        ("WALLET_API_KEY", "secret"),
    ]))
    .unwrap();
    assert_eq!(cfg.api_key.as_deref(), Some("secret"));
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = RelayConfig::from_lookup(lookup(&[
        ("WALLET_RPC_URL", "https://wallet.example"),
        ("WALLET_API_KEY_ENV", "ALCHEMY_KEY"),
        ("ALCHEMY_KEY", "alk_123"),
        ("WALLET_CHAIN_ID", "0x2105"),
        ("WALLET_POLICY_ID", "policy-abc"),
        ("WALLET_REQUEST_TIMEOUT_SECS", "42"),
        ("WALLET_CONNECT_TIMEOUT_SECS", "7"),
    ]))
    .unwrap();
    assert_eq!(cfg.api_key.as_deref(), Some("alk_123"));
    assert_eq!(cfg.chain_id, 8453);
    assert_eq!(cfg.policy_id.as_deref(), Some("policy-abc"));
    assert_eq!(cfg.timeouts, RelayTimeouts { request_secs: 42, connect_secs: 7 });
}

#[test]
fn from_lookup_requires_rpc_url() {
    let err = RelayConfig::from_lookup(lookup(&[("WALLET_API_KEY", "secret")])).unwrap_err();
    assert!(matches!(err, ConfigError::Missing { ref var } if var == "WALLET_RPC_URL"));
    assert_eq!(err.error_code(), "E_CONFIG_MISSING");
}

#[test]
fn from_lookup_named_key_var_must_exist() {
    let err = RelayConfig::from_lookup(lookup(&[
        ("WALLET_RPC_URL", "https://wallet.example"),
        ("WALLET_API_KEY_ENV", "MISSING_KEY"),
    ]))
    .unwrap_err();
    assert!(err.to_string().contains("MISSING_KEY"));
}

#[test]
fn from_lookup_bad_timeouts_fall_back_to_defaults() {
    let cfg = RelayConfig::from_lookup(lookup(&[
        ("WALLET_RPC_URL", "https://wallet.example"),
        ("WALLET_REQUEST_TIMEOUT_SECS", "soon"),
    ]))
    .unwrap();
    assert_eq!(cfg.timeouts.request_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
}

// =============================================================================
// parse helpers
// =============================================================================

#[test]
fn parse_chain_id_accepts_decimal_and_hex() {
    assert_eq!(parse_chain_id(Some("1")).unwrap(), 1);
    assert_eq!(parse_chain_id(Some("0xaa36a7")).unwrap(), 11_155_111);
    assert_eq!(parse_chain_id(None).unwrap(), DEFAULT_CHAIN_ID);
    assert_eq!(parse_chain_id(Some("  ")).unwrap(), DEFAULT_CHAIN_ID);
}

#[test]
fn parse_chain_id_rejects_garbage() {
    let err = parse_chain_id(Some("mainnet")).unwrap_err();
    assert!(err.to_string().contains("invalid WALLET_CHAIN_ID"));
    assert_eq!(err.error_code(), "E_CONFIG_PARSE");
}

#[test]
fn parse_port_defaults_and_validates() {
    assert_eq!(parse_port(None).unwrap(), DEFAULT_PORT);
    assert_eq!(parse_port(Some("8080")).unwrap(), 8080);
    assert!(parse_port(Some("99999")).is_err());
}
