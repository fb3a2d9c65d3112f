use std::io::Read;

use anyhow::{Context, Result};

use textproc_config::InputArgs;

/// Input text from `--text`, a file, or stdin, in that order.
pub(crate) fn read_input(args: &InputArgs) -> Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }
    if let Some(path) = &args.file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display()));
    }
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("Failed to read stdin")?;
    Ok(buf)
}
