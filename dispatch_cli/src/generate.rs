use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum GenerateSubcommands {
    /// JSON schema of the batch input
    JsonSchema {
        #[arg(long, short = 'o')]
        out: PathBuf,
    },
    /// JSON schema of the assignment results
    OutcomeJsonSchema {
        #[arg(long, short = 'o')]
        out: PathBuf,
    },
}

pub fn run(subcommand: GenerateSubcommands) -> Result<(), anyhow::Error> {
    let (schema, out) = match subcommand {
        GenerateSubcommands::JsonSchema { out } => {
            (dispatch_engine::json::schema::generate_json_schema()?, out)
        }
        GenerateSubcommands::OutcomeJsonSchema { out } => (
            dispatch_engine::json::schema::generate_outcome_json_schema()?,
            out,
        ),
    };

    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)?;
    }

    std::fs::write(out, schema)?;

    Ok(())
}
