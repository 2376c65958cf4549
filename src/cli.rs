use clap::Parser;
use std::path::PathBuf;

/// Generate one example value from an OpenAPI / JSON Schema descriptor
#[derive(Parser, Debug, Clone)]
#[command(name = "exemplar", version, about, long_about = None)]
pub struct Cli {
    /// Schema document (JSON or YAML); reads stdin when omitted or "-"
    pub schema: Option<PathBuf>,

    /// Path to the configuration file
    #[arg(short, long, env = "EXEMPLAR_CONFIG", default_value = "exemplar.toml")]
    pub config: PathBuf,

    /// JSON pointer selecting the schema node inside the document
    /// (e.g. "/components/schemas/Pet")
    #[arg(short, long)]
    pub pointer: Option<String>,

    /// Name of the preferred entry in an `examples` mapping
    #[arg(short, long, env = "EXEMPLAR_EXAMPLE")]
    pub example: Option<String>,

    /// Locale used by x-faker generators (e.g. en, fr_FR, pt-BR)
    #[arg(short, long, env = "EXEMPLAR_LOCALE")]
    pub locale: Option<String>,

    /// Print the generated value on a single line
    #[arg(long)]
    pub compact: bool,

    /// List the available x-faker generators and exit
    #[arg(long)]
    pub list_generators: bool,
}

impl Cli {
    /// Schema path to read, `None` meaning stdin
    pub fn schema_path(&self) -> Option<&PathBuf> {
        self.schema.as_ref().filter(|path| path.as_os_str() != "-")
    }
}
