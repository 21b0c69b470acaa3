//! Convert command: hex colors to asset catalog sRGB components.

use crate::cli::common::{CliError, CliResult};
use crate::models::{hex_to_srgb, SrgbComponents};
use clap::Args;
use serde::Serialize;

/// Convert #RRGGBB values to normalized sRGB component strings
#[derive(Debug, Clone, Args)]
pub struct ConvertArgs {
    /// Hex colors in #RRGGBB form
    #[arg(value_name = "HEX", required = true)]
    pub hex: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize, Debug)]
struct ConvertOutput<'a> {
    hex: &'a str,
    components: SrgbComponents,
}

impl ConvertArgs {
    /// Execute the convert command
    pub fn execute(&self) -> CliResult<()> {
        // Convert everything first so a bad value prints nothing
        let converted = self
            .hex
            .iter()
            .map(|hex| {
                hex_to_srgb(hex)
                    .map(|components| ConvertOutput {
                        hex: hex.as_str(),
                        components,
                    })
                    .map_err(|e| CliError::validation(e.to_string()))
            })
            .collect::<CliResult<Vec<_>>>()?;

        if self.json {
            let json = serde_json::to_string_pretty(&converted)
                .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
            println!("{json}");
        } else {
            for item in &converted {
                let c = &item.components;
                println!(
                    "{}  red {}  green {}  blue {}  alpha {}",
                    item.hex, c.red, c.green, c.blue, c.alpha
                );
            }
        }

        Ok(())
    }
}
