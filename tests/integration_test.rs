//! Library-level integration tests for complete configuration loads.

mod common;

use common::configs;
use selector_clusters::actions::ConfigContext;
use selector_clusters::config::Format;
use selector_clusters::error::Error;
use selector_clusters::loader;
use selector_clusters::registry::ClusterRegistry;
use selector_clusters::selector::SelectorValue;

#[test]
fn test_nested_cluster_end_to_end() {
    let mut registry = ClusterRegistry::new();
    loader::load_str(configs::SITEVIDS, Format::Yaml, &mut registry).unwrap();

    let cluster = registry.resolve_vocabulary("sitevids").unwrap();
    let entries: Vec<(String, String)> = cluster
        .iter()
        .map(|s| (s.value().to_string(), s.title().to_string()))
        .collect();
    assert_eq!(
        entries,
        vec![
            ("/delta/".to_string(), "Delta Path".to_string()),
            ("/omega/".to_string(), "Omega Path".to_string()),
        ]
    );
    assert_eq!(
        cluster.get_by_token("/delta/").unwrap(),
        &cluster.entries()[0]
    );
}

#[test]
fn test_xml_and_yaml_produce_the_same_cluster() {
    let mut from_yaml = ClusterRegistry::new();
    loader::load_str(configs::SITEVIDS, Format::Yaml, &mut from_yaml).unwrap();
    let mut from_xml = ClusterRegistry::new();
    loader::load_str(configs::SITEVIDS_XML, Format::Xml, &mut from_xml).unwrap();

    assert_eq!(
        from_yaml.get("sitevids").unwrap().entries(),
        from_xml.get("sitevids").unwrap().entries()
    );
}

#[test]
fn test_flat_declarations_end_to_end() {
    let mut registry = ClusterRegistry::new();
    let report = loader::load_str(configs::DOCFOLDERS, Format::Yaml, &mut registry).unwrap();

    assert_eq!(report.clusters_created, 1);
    assert_eq!(report.entries_registered, 2);
    let cluster = registry.get("docfolders").unwrap();
    let photos = cluster
        .get_by_value(&SelectorValue::from("/home/jeff/photos/"))
        .unwrap();
    assert_eq!(photos.title(), "Personal Photos");
    assert_eq!(cluster.get_by_token("/other/").unwrap().title(), "/other/");
}

#[test]
fn test_conflicting_declarations_leave_registry_untouched() {
    let mut registry = ClusterRegistry::new();
    let err = loader::load_str(configs::CONFLICTING, Format::Yaml, &mut registry).unwrap_err();

    assert!(matches!(err, Error::DuplicateDeclaration { .. }));
    assert!(err.to_string().contains("selectorstring"));
    assert!(registry.is_empty());
}

#[test]
fn test_conflict_is_visible_before_execution() {
    let mut ctx = ConfigContext::new();
    loader::schedule_str(configs::CONFLICTING, Format::Yaml, &mut ctx).unwrap();
    assert_eq!(ctx.len(), 2);
    assert!(ctx.check_conflicts().is_err());
}

#[test]
fn test_duplicate_value_fails_the_load() {
    let mut registry = ClusterRegistry::new();
    let err =
        loader::load_str(configs::DUPLICATE_VALUE, Format::Yaml, &mut registry).unwrap_err();

    match err {
        Error::DuplicateEntry {
            cluster,
            value,
            label,
        } => {
            assert_eq!(cluster, "docfolders");
            assert_eq!(value, "/a/");
            assert_eq!(label.as_deref(), Some("B"));
        }
        other => panic!("Expected DuplicateEntry, got {:?}", other),
    }
}

#[test]
fn test_duplicate_cluster_declarations_conflict() {
    let yaml = r#"
- selectorcluster: { name: sitevids }
- selectorcluster: { name: sitevids }
"#;
    let mut registry = ClusterRegistry::new();
    let err = loader::load_str(yaml, Format::Yaml, &mut registry).unwrap_err();
    assert!(matches!(err, Error::DuplicateDeclaration { .. }));
}

#[test]
fn test_clusters_listed_in_creation_order() {
    let yaml = r#"
- selectorstring: { cluster: zeta, value: /z/ }
- selectorcluster:
    name: alpha
    selectors:
      - value: /a/
- selectorstring: { cluster: zeta, value: /y/ }
"#;
    let mut registry = ClusterRegistry::new();
    loader::load_str(yaml, Format::Yaml, &mut registry).unwrap();

    let names: Vec<&str> = registry.names().collect();
    assert_eq!(names, vec!["zeta", "alpha"]);
    let zeta: Vec<&str> = registry.get("zeta").unwrap().titles().collect();
    assert_eq!(zeta, vec!["/z/", "/y/"]);
}
