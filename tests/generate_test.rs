use exemplar::adapters::response_generator::ResponseGenerator;
use exemplar::document;
use exemplar::domain::{Locale, ResolutionError};
use serde_json::json;
use std::path::Path;

const PETSTORE: &str = r##"
openapi: 3.0.3
info:
  title: Petstore
  version: 1.0.0
paths:
  /pets:
    get:
      responses:
        "200":
          description: A list of pets
          content:
            application/json:
              schema:
                type: array
                x-count: 2
                items:
                  $ref: "#/components/schemas/Pet"
        "404":
          description: Not found
          content:
            application/json:
              examples:
                missing:
                  value: {code: 404, message: Pet not found}
                gone:
                  value: {code: 410, message: Pet is gone}
components:
  schemas:
    Pet:
      allOf:
        - type: object
          properties:
            id: {type: integer}
            name: {type: string, x-faker: "name.firstName"}
        - type: object
          properties:
            status:
              type: string
              enum: [available, pending, sold]
            tags:
              type: array
              items: {type: string}
            vaccinated: {type: boolean, example: false}
"##;

fn petstore() -> serde_json::Value {
    document::parse(PETSTORE, Some(Path::new("petstore.yaml"))).unwrap()
}

#[test]
fn test_component_schema() {
    let document = petstore();
    let schema = document::select(&document, Some("/components/schemas/Pet")).unwrap();

    let generator = ResponseGenerator::with_locale(Locale::En);
    let value = generator.generate(schema, None, "/components/schemas/Pet").unwrap();

    let pet = value.as_object().unwrap();
    let keys: Vec<&str> = pet.keys().map(String::as_str).collect();
    assert_eq!(keys, ["id", "name", "status", "tags", "vaccinated"]);
    assert_eq!(pet["id"], json!(1));
    assert!(!pet["name"].as_str().unwrap().is_empty());
    assert_eq!(pet["status"], json!("available"));
    assert_eq!(pet["tags"], json!(["string"]));
    assert_eq!(pet["vaccinated"], json!(false));
}

#[test]
fn test_named_examples_in_media_type() {
    let document = petstore();
    let media = document::select(
        &document,
        Some("/paths/~1pets/get/responses/404/content/application~1json"),
    )
    .unwrap();

    let generator = ResponseGenerator::default();
    assert_eq!(
        generator.generate(media, None, "/pets").unwrap(),
        json!({"code": 404, "message": "Pet not found"})
    );
    assert_eq!(
        generator.generate(media, Some("gone"), "/pets").unwrap(),
        json!({"code": 410, "message": "Pet is gone"})
    );
}

#[test]
fn test_unresolved_reference_is_reported() {
    let document = petstore();
    let media = document::select(
        &document,
        Some("/paths/~1pets/get/responses/200/content/application~1json"),
    )
    .unwrap();

    // $ref is not followed, so the array items have nothing to resolve
    let result = ResponseGenerator::default().generate(media, None, "/pets");
    assert_eq!(result, Err(ResolutionError::UnresolvableSchema));
}

#[test]
fn test_crate_level_generate() {
    let schema = json!({
        "schema": {
            "type": "array",
            "x-count": "3",
            "items": {"oneOf": [{"type": "number"}, {"type": "string"}]}
        }
    });
    assert_eq!(exemplar::generate(&schema, None, "").unwrap(), json!([1, 1, 1]));
}

#[test]
fn test_localized_faker_values() {
    let schema = json!({
        "type": "object",
        "properties": {
            "city": {"type": "string", "x-faker": "address.city"},
            "greeting": {"type": "string", "x-faker": "Bonjour {{name.firstName}}"}
        }
    });

    let generator = ResponseGenerator::with_locale(Locale::FrFr);
    let value = generator.generate(&schema, None, "").unwrap();
    assert!(!value["city"].as_str().unwrap().is_empty());
    assert!(value["greeting"].as_str().unwrap().starts_with("Bonjour "));
}
