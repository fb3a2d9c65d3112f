use anyhow::Result;
use serde::Serialize;
use textproc_config as cli;
use textproc_types::{SCHEMA_VERSION, ToolInfo};

#[derive(Serialize)]
struct VersionInfo {
    #[serde(flatten)]
    tool: ToolInfo,
    schema_version: u32,
}

pub(crate) fn handle(global: &cli::GlobalArgs) -> Result<()> {
    let tool = ToolInfo::current();
    match global.format {
        cli::OutputFormat::Json => crate::output::print_json(&VersionInfo {
            tool,
            schema_version: SCHEMA_VERSION,
        })?,
        cli::OutputFormat::Md => {
            println!("{} {} (schema {})", tool.name, tool.version, SCHEMA_VERSION)
        }
    }
    Ok(())
}
