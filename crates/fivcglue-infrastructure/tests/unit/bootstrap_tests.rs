//! Bootstrap tests

use fivcglue_domain::Error;
use fivcglue_domain::constants::{
    CACHE_INTERFACE, HEALTH_CHECK_INTERFACE, LOCK_INTERFACE, LOGGER_INTERFACE,
};
use fivcglue_domain::ports::{CacheProvider, LockProvider, LoggerProvider};
use fivcglue_domain::value_objects::{ComponentBinding, ComponentSpec};
use fivcglue_infrastructure::bootstrap::{bootstrap, default_builder};
use fivcglue_infrastructure::config::ConfigBuilder;
use std::time::Duration;

#[test]
fn test_default_builder_has_provider_factories() {
    let builder = default_builder();

    for class in [
        "caches.memory",
        "caches.null",
        "configs.file",
        "loggers.tracing",
        "mutexes.local",
    ] {
        assert!(builder.factory(class).is_some(), "missing factory {class}");
    }
}

#[test]
fn test_bootstrap_builds_configured_components() {
    let config = ConfigBuilder::new()
        .with_component(
            ComponentSpec::new("loggers.tracing")
                .with_entry(ComponentBinding::new(LOGGER_INTERFACE)),
        )
        .with_component(
            ComponentSpec::new("caches.memory")
                .with_entry(ComponentBinding::named(CACHE_INTERFACE, "memory"))
                .with_entry(ComponentBinding::new(HEALTH_CHECK_INTERFACE)),
        )
        .with_component(
            ComponentSpec::new("mutexes.local").with_entry(ComponentBinding::new(LOCK_INTERFACE)),
        )
        .build();

    let site = bootstrap(&config).unwrap();

    assert_eq!(site.len(), 4);
    let cache = site.get_component::<dyn CacheProvider>(Some("memory")).unwrap();
    cache
        .set_value("greeting", Some(b"hello"), Duration::from_secs(60))
        .unwrap();
    assert_eq!(cache.get_value("greeting").unwrap(), Some(b"hello".to_vec()));

    assert!(site.get_component::<dyn LockProvider>(None).is_ok());
    assert_eq!(
        site.get_component::<dyn LoggerProvider>(None)
            .unwrap()
            .get_logger("app")
            .topic(),
        "app"
    );

    // Only the named binding exists.
    assert!(site.get_component::<dyn CacheProvider>(None).is_err());
}

#[test]
fn test_bootstrap_empty_config_gives_empty_site() {
    let site = bootstrap(&ConfigBuilder::new().build()).unwrap();
    assert!(site.is_empty());
}

#[test]
fn test_bootstrap_unknown_class_fails() {
    let config = ConfigBuilder::new()
        .with_component(
            ComponentSpec::new("caches.redis").with_entry(ComponentBinding::new(CACHE_INTERFACE)),
        )
        .build();

    let err = bootstrap(&config).unwrap_err();
    assert!(matches!(err, Error::Build { .. }));
    assert!(err.to_string().contains("caches.redis"));
}
