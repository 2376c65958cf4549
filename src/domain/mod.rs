use serde_json::Value;

pub mod directive;
pub mod error;
pub mod examples;
pub mod locale;
pub mod schema;

pub use directive::{CallDirective, FakerDirective};
pub use error::ResolutionError;
pub use examples::Examples;
pub use locale::Locale;
pub use schema::SchemaType;

/// Source of realistic fake values for `x-faker` directives.
///
/// The locale is fixed when the provider is built; generation itself only
/// reads shared state, so one provider can serve concurrent callers.
pub trait FakeValueProvider: Send + Sync {
    fn locale(&self) -> Locale;

    /// Invoke the generator registered as `namespace.method`.
    fn call(&self, namespace: &str, method: &str, args: &[Value]) -> Result<Value, ResolutionError>;

    /// Resolve every `{{namespace.method(args)}}` placeholder in `template`.
    fn render_template(&self, template: &str) -> Result<String, ResolutionError> {
        directive::render_template(template, |call| {
            self.call(&call.namespace, &call.method, &call.args)
        })
    }
}
