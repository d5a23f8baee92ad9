use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(
    name = "openapi-sample-annotator",
    about = "Embed generated request samples into an OpenAPI/Swagger specification",
    version
)]
pub struct Args {
    /// Path to the Swagger/OpenAPI specification file (YAML or JSON)
    #[clap(value_name = "SPEC")]
    pub input: PathBuf,
}
