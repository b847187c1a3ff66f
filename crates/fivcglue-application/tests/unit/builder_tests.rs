//! Component site builder tests

use fivcglue_application::{ComponentFactory, ComponentSite, ComponentSiteBuilder};
use fivcglue_domain::Error;
use fivcglue_domain::value_objects::{ComponentBinding, ComponentSpec};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

trait Greeter: Send + Sync {
    fn greet(&self) -> String;
}

trait Describe: Send + Sync {
    fn describe(&self) -> String;
}

struct Greeting {
    text: String,
}

impl Greeter for Greeting {
    fn greet(&self) -> String {
        self.text.clone()
    }
}

impl Describe for Greeting {
    fn describe(&self) -> String {
        format!("greeting({})", self.text)
    }
}

/// Depends on whatever `Greeter` was registered before it
struct Loud {
    inner: Arc<dyn Greeter>,
}

impl Greeter for Loud {
    fn greet(&self) -> String {
        self.inner.greet().to_uppercase()
    }
}

fn greeting_factory(counter: Arc<AtomicUsize>) -> ComponentFactory {
    ComponentFactory::builder("greetings.plain", move |_site, args| {
        counter.fetch_add(1, Ordering::SeqCst);
        Ok(Greeting {
            text: args.get_or("text", "hello".to_string())?,
        })
    })
    .description("Plain greeting")
    .provides::<dyn Greeter>("Greeter", |greeting| greeting)
    .provides::<dyn Describe>("Describe", |greeting| greeting)
    .build()
}

fn loud_factory() -> ComponentFactory {
    ComponentFactory::builder("greetings.loud", |site, _args| {
        Ok(Loud {
            inner: site.get_component::<dyn Greeter>(None)?,
        })
    })
    .provides::<dyn Greeter>("Greeter", |loud| loud)
    .build()
}

fn failing_factory() -> ComponentFactory {
    ComponentFactory::builder("greetings.broken", |_site, _args| -> fivcglue_domain::Result<Greeting> {
        Err(Error::invalid_argument("broken on purpose"))
    })
    .provides::<dyn Greeter>("Greeter", |greeting| greeting)
    .build()
}

fn builder(counter: Arc<AtomicUsize>) -> ComponentSiteBuilder {
    ComponentSiteBuilder::new()
        .with_factory(greeting_factory(counter))
        .with_factory(loud_factory())
        .with_factory(failing_factory())
}

#[test]
fn test_build_resolves_earlier_components() {
    let specs = vec![
        ComponentSpec::new("greetings.plain")
            .with_arg("text", "hi there")
            .with_entry(ComponentBinding::named("Greeter", "plain")),
        ComponentSpec::new("greetings.loud")
            .with_entry(ComponentBinding::named("Greeter", "loud")),
    ];

    let site = builder(Arc::new(AtomicUsize::new(0))).build(&specs).unwrap();

    let plain = site.get_component::<dyn Greeter>(Some("plain")).unwrap();
    let loud = site.get_component::<dyn Greeter>(Some("loud")).unwrap();
    assert_eq!(plain.greet(), "hi there");
    assert_eq!(loud.greet(), "HI THERE");

    // loud was registered last, so it wins the unnamed lookup
    assert_eq!(site.get_component::<dyn Greeter>(None).unwrap().greet(), "HI THERE");
}

#[test]
fn test_dependency_declared_later_fails() {
    let specs = vec![
        ComponentSpec::new("greetings.loud").with_entry(ComponentBinding::new("Greeter")),
        ComponentSpec::new("greetings.plain").with_entry(ComponentBinding::new("Greeter")),
    ];

    let result = builder(Arc::new(AtomicUsize::new(0))).build(&specs);
    assert!(matches!(result, Err(Error::ComponentNotFound { .. })));
}

#[test]
fn test_one_instance_for_many_bindings() {
    let counter = Arc::new(AtomicUsize::new(0));
    let specs = vec![
        ComponentSpec::new("greetings.plain")
            .with_arg("text", "shared")
            .with_entry(ComponentBinding::named("Greeter", "a"))
            .with_entry(ComponentBinding::named("Greeter", "b"))
            .with_entry(ComponentBinding::new("Describe")),
    ];

    let site = builder(counter.clone()).build(&specs).unwrap();

    assert_eq!(counter.load(Ordering::SeqCst), 1);
    assert_eq!(site.len(), 3);
    assert_eq!(site.query_components::<dyn Greeter>().len(), 2);
    assert_eq!(
        site.get_component::<dyn Describe>(None).unwrap().describe(),
        "greeting(shared)"
    );
}

#[test]
fn test_constructor_error_propagates_unchanged() {
    let specs = vec![
        ComponentSpec::new("greetings.plain").with_entry(ComponentBinding::new("Greeter")),
        ComponentSpec::new("greetings.broken").with_entry(ComponentBinding::new("Greeter")),
    ];

    let result = builder(Arc::new(AtomicUsize::new(0))).build(&specs);
    match result {
        Err(Error::InvalidArgument { message }) => assert_eq!(message, "broken on purpose"),
        other => panic!("expected the constructor's error, got {other:?}"),
    }
}

#[test]
fn test_unknown_class_fails() {
    let specs = vec![ComponentSpec::new("greetings.missing").with_entry(ComponentBinding::new("Greeter"))];

    let err = builder(Arc::new(AtomicUsize::new(0))).build(&specs).unwrap_err();
    assert!(matches!(err, Error::Build { .. }));
    assert!(err.to_string().contains("greetings.missing"));
}

#[test]
fn test_unprovided_interface_fails_before_construction() {
    let counter = Arc::new(AtomicUsize::new(0));
    let specs = vec![
        ComponentSpec::new("greetings.plain")
            .with_entry(ComponentBinding::new("Greeter"))
            .with_entry(ComponentBinding::new("CacheProvider")),
    ];

    let err = builder(counter.clone()).build(&specs).unwrap_err();
    assert!(matches!(err, Error::Build { .. }));
    assert_eq!(counter.load(Ordering::SeqCst), 0);
}

#[test]
fn test_spec_without_entries_fails() {
    let counter = Arc::new(AtomicUsize::new(0));
    let specs = vec![ComponentSpec::new("greetings.plain")];

    let err = builder(counter.clone()).build(&specs).unwrap_err();
    assert!(matches!(err, Error::Build { .. }));
    assert_eq!(counter.load(Ordering::SeqCst), 0);
}

#[test]
fn test_bad_argument_fails() {
    let specs = vec![
        ComponentSpec::new("greetings.plain")
            .with_arg("text", 42)
            .with_entry(ComponentBinding::new("Greeter")),
    ];

    let err = builder(Arc::new(AtomicUsize::new(0))).build(&specs).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));
}

#[test]
fn test_build_on_seeded_site() {
    let site = ComponentSite::new();
    let seed: Arc<dyn Greeter> = Arc::new(Greeting {
        text: "seeded".to_string(),
    });
    site.register_component(seed, None);

    let specs = vec![ComponentSpec::new("greetings.loud").with_entry(ComponentBinding::new("Greeter"))];
    let site = builder(Arc::new(AtomicUsize::new(0)))
        .build_on(site, &specs)
        .unwrap();

    assert_eq!(site.get_component::<dyn Greeter>(None).unwrap().greet(), "SEEDED");
    assert_eq!(site.query_components::<dyn Greeter>().len(), 2);
}

#[test]
fn test_specs_from_json() {
    let specs: Vec<ComponentSpec> = serde_json::from_str(
        r#"[
            { "class": "greetings.plain", "text": "json", "entries": [{ "interface": "Greeter", "name": "" }] },
            { "class": "greetings.loud", "entries": [{ "interface": "Greeter", "name": "loud" }] }
        ]"#,
    )
    .unwrap();

    let site = builder(Arc::new(AtomicUsize::new(0))).build(&specs).unwrap();
    let infos = site.registrations();

    assert_eq!(infos[0].name, None, "empty names register unnamed");
    assert_eq!(site.get_component::<dyn Greeter>(Some("loud")).unwrap().greet(), "JSON");
}

#[test]
fn test_factory_table() {
    let mut builder = ComponentSiteBuilder::new();
    builder.register_factory(loud_factory());
    builder.register_factory(greeting_factory(Arc::new(AtomicUsize::new(0))));

    let listed = builder.factories();
    assert_eq!(
        listed,
        vec![("greetings.loud", ""), ("greetings.plain", "Plain greeting")]
    );

    let factory = builder.factory("greetings.plain").unwrap();
    assert!(factory.provides("Greeter"));
    assert!(factory.provides("Describe"));
    assert!(!factory.provides("CacheProvider"));
    assert_eq!(factory.interfaces().collect::<Vec<_>>(), vec!["Describe", "Greeter"]);

    // re-registering a name replaces the factory
    builder.register_factory(
        ComponentFactory::builder("greetings.loud", |_site, _args| {
            Ok(Greeting {
                text: "replaced".to_string(),
            })
        })
        .provides::<dyn Greeter>("Greeter", |greeting| greeting)
        .build(),
    );
    let site = builder
        .build(&[ComponentSpec::new("greetings.loud").with_entry(ComponentBinding::new("Greeter"))])
        .unwrap();
    assert_eq!(site.get_component::<dyn Greeter>(None).unwrap().greet(), "replaced");
}
