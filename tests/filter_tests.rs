//! Integration tests for filtering and selection over a recorded snapshot.

use hue_config_browser::filter::{filter_config, FilterQuery};
use hue_config_browser::model::{ConfigNode, HueConfigSnapshot};
use hue_config_browser::state::{reduce, DisplayDirective, Event, ViewState};
use std::path::Path;
use std::sync::Arc;

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn load_fixture() -> HueConfigSnapshot {
    let content = std::fs::read_to_string(Path::new(FIXTURES_DIR).join("hue-config.json"))
        .expect("read fixture");
    HueConfigSnapshot::from_json(&content).expect("decode fixture")
}

fn child_keys(node: &ConfigNode) -> Vec<&str> {
    node.children()
        .unwrap_or_default()
        .iter()
        .map(|c| c.key.as_str())
        .collect()
}

fn loaded_state() -> ViewState {
    let state = reduce(ViewState::default(), Event::FetchStarted);
    reduce(state, Event::FetchSucceeded(Arc::new(load_fixture())))
}

#[test]
fn test_fixture_decodes() {
    let snapshot = load_fixture();
    assert_eq!(snapshot.apps.len(), 4);
    assert_eq!(snapshot.config.len(), 3);
    assert_eq!(snapshot.conf_dir, "/etc/hue/conf");
    assert!(snapshot.check_unique_roots().is_ok());

    let missing: Vec<&str> = snapshot
        .apps_without_config()
        .map(|a| a.name.as_str())
        .collect();
    assert_eq!(missing, vec!["about"]);
}

#[test]
fn test_non_string_values_become_strings() {
    let snapshot = load_fixture();
    let database = snapshot.root_for("desktop").unwrap().children().unwrap()[5].clone();
    assert_eq!(database.key, "database");
    let port = &database.children().unwrap()[1];
    assert_eq!(port.value(), Some("0"));
    assert_eq!(port.default_value(), Some("0"));
}

#[test]
fn test_group_match_keeps_whole_subtree() {
    let snapshot = load_fixture();
    let filtered = filter_config(&snapshot.config, FilterQuery::new("ldap").as_str());

    assert_eq!(filtered.len(), 1);
    let desktop = &filtered[0];
    assert_eq!(child_keys(desktop), vec!["ldap"]);

    let original_ldap = &snapshot.root_for("desktop").unwrap().children().unwrap()[4];
    assert_eq!(&desktop.children().unwrap()[0], original_ldap);
}

#[test]
fn test_descendant_matches_prune_siblings() {
    let snapshot = load_fixture();
    let filtered = filter_config(&snapshot.config, "port");

    let keys: Vec<&str> = filtered.iter().map(|r| r.key.as_str()).collect();
    assert_eq!(keys, vec!["desktop", "beeswax"]);
    assert_eq!(child_keys(&filtered[0]), vec!["http_port", "database"]);
    assert_eq!(child_keys(&filtered[0].children().unwrap()[1]), vec!["port"]);
    assert_eq!(child_keys(&filtered[1]), vec!["hive_server_port"]);
}

#[test]
fn test_match_through_anonymous_section() {
    let snapshot = load_fixture();
    let filtered = filter_config(&snapshot.config, FilterQuery::new("StartTLS").as_str());

    let ldap = &filtered[0].children().unwrap()[0];
    let servers = &ldap.children().unwrap()[0];
    let section = &servers.children().unwrap()[0];
    assert!(section.is_anonymous);
    assert_eq!(section.display_label(), "Default section");
    assert_eq!(child_keys(section), vec!["use_start_tls"]);
}

#[test]
fn test_filter_is_case_insensitive_on_help() {
    let snapshot = load_fixture();
    let filtered = filter_config(&snapshot.config, FilterQuery::new("HIVESERVER2").as_str());
    assert_eq!(filtered.len(), 1);
    assert_eq!(
        child_keys(&filtered[0]),
        vec!["hive_server_host", "hive_server_port"]
    );
}

#[test]
fn test_filter_leaves_snapshot_untouched() {
    let snapshot = load_fixture();
    let before = snapshot.clone();
    let _ = filter_config(&snapshot.config, "ldap");
    let _ = filter_config(&snapshot.config, "zzz");
    assert_eq!(snapshot, before);
}

#[test]
fn test_desktop_selected_and_shown() {
    let state = loaded_state();
    assert_eq!(state.selected_app(), "desktop");
    match state.display() {
        DisplayDirective::Tree(root) => assert_eq!(root.key, "desktop"),
        other => panic!("unexpected directive: {other:?}"),
    }
}

#[test]
fn test_app_with_empty_root_is_empty_section() {
    let state = reduce(loaded_state(), Event::AppSelected("impala".into()));
    assert!(matches!(state.display(), DisplayDirective::EmptySection(root) if root.key == "impala"));
}

#[test]
fn test_app_without_root_shows_nothing() {
    let state = reduce(loaded_state(), Event::AppSelected("about".into()));
    assert!(state.selected_config().is_none());
    assert!(state.display().is_nothing());
    assert!(state.error().is_none());
}

#[test]
fn test_filter_then_switch_app() {
    let state = reduce(loaded_state(), Event::FilterChanged("Port".into()));
    assert_eq!(state.filter_text(), "Port");
    assert_eq!(state.filtered_config().len(), 2);

    let state = reduce(state, Event::AppSelected("beeswax".into()));
    assert_eq!(child_keys(state.selected_config().unwrap()), vec!["hive_server_port"]);

    let state = reduce(state, Event::AppSelected("impala".into()));
    assert!(state.display().is_nothing());
}
