pub mod faker_generators;
pub mod faker_provider;
pub mod response_generator;

#[cfg(test)]
mod faker_provider_test;
