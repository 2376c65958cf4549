use super::faker_provider::FakerProvider;
use crate::domain::{FakeValueProvider, Locale, ResolutionError};
use serde_json::json;

#[test]
fn test_default_locale_is_english() {
    assert_eq!(FakerProvider::default().locale(), Locale::En);
}

#[test]
fn test_from_tag() {
    assert_eq!(FakerProvider::from_tag("pt-BR").locale(), Locale::PtBr);
    assert_eq!(FakerProvider::from_tag("fr_FR.UTF-8").locale(), Locale::FrFr);
    // unsupported locales fall back to English
    assert_eq!(FakerProvider::from_tag("xx_YY").locale(), Locale::En);
}

#[test]
fn test_call_known_generator() {
    let provider = FakerProvider::new(Locale::En);
    let result = provider.call("name", "firstName", &[]);
    assert!(result.is_ok());
    let value = result.unwrap();
    assert!(value.is_string());
    assert!(!value.as_str().unwrap().is_empty());
}

#[test]
fn test_call_unknown_generator() {
    let provider = FakerProvider::new(Locale::En);
    let result = provider.call("name", "doesNotExist", &[]);
    assert_eq!(
        result,
        Err(ResolutionError::UnknownGenerator("name.doesNotExist".to_string()))
    );
}

#[test]
fn test_call_rejects_bad_arguments() {
    let provider = FakerProvider::new(Locale::En);
    let result = provider.call("datatype", "number", &[json!({"min": 10, "max": 1})]);
    assert!(matches!(
        result,
        Err(ResolutionError::InvalidGeneratorArguments { ref generator, .. }) if generator == "datatype.number"
    ));
}

#[test]
fn test_call_with_arguments() {
    let provider = FakerProvider::new(Locale::En);
    let value = provider.call("lorem", "words", &[json!(5)]).unwrap();
    assert_eq!(value.as_str().unwrap().split_whitespace().count(), 5);

    let value = provider
        .call("random", "arrayElement", &[json!(["only"])])
        .unwrap();
    assert_eq!(value, json!("only"));
}

#[test]
fn test_render_template() {
    let provider = FakerProvider::new(Locale::En);
    let rendered = provider
        .render_template("Dear {{name.firstName}}, your code is {{random.arrayElement([42])}}.")
        .unwrap();
    assert!(rendered.starts_with("Dear "));
    assert!(rendered.ends_with(", your code is 42."));
    assert!(!rendered.contains("{{"));
}

#[test]
fn test_render_template_unknown_placeholder() {
    let provider = FakerProvider::new(Locale::En);
    let result = provider.render_template("Hello {{name.nope}}");
    assert_eq!(result, Err(ResolutionError::UnknownGenerator("name.nope".to_string())));
}

#[test]
fn test_localized_generation() {
    for locale in Locale::ALL {
        let provider = FakerProvider::new(locale);
        let value = provider.call("name", "lastName", &[]).unwrap();
        assert!(!value.as_str().unwrap().is_empty(), "empty last name for {locale}");
    }
}

#[test]
fn test_generator_names_are_listed() {
    let names: Vec<&str> = FakerProvider::generator_names().collect();
    assert!(names.contains(&"name.firstName"));
    assert!(names.contains(&"datatype.uuid"));
    assert!(names.contains(&"date.past"));
}
