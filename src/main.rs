use anyhow::Context;
use clap::Parser;
use exemplar::adapters::faker_provider::FakerProvider;
use exemplar::adapters::response_generator::ResponseGenerator;
use exemplar::cli::Cli;
use exemplar::config::Settings;
use exemplar::document;
use exemplar::domain::FakeValueProvider;
use std::sync::Arc;
use tracing::{debug, info};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout only carries the generated value
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();

    if cli.list_generators {
        for name in FakerProvider::generator_names() {
            println!("{}", name);
        }
        return Ok(());
    }

    let settings = Settings::new_with_cli(&cli)?;
    let provider = FakerProvider::from_tag(&settings.locale_tag());
    info!("Generating example with locale {}", provider.locale());

    let document = document::load(cli.schema_path().map(|p| p.as_path()))?;
    let schema = document::select(&document, cli.pointer.as_deref())?;
    let path = cli.pointer.clone().unwrap_or_default();
    debug!("Resolving schema at '{}'", path);

    let generator = ResponseGenerator::new(Arc::new(provider));
    let value = generator
        .generate(schema, settings.generator.preferred_example.as_deref(), &path)
        .context("Failed to generate example")?;

    let output = if settings.output.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    println!("{}", output);

    Ok(())
}
