//! List command implementation

use crate::output::OutputFormat;
use addrtail_core::{FormatTag, RULES};
use anyhow::Result;
use clap::Subcommand;
use std::io::{self, Write};

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,

    /// List format tags and the rules that assign them
    Tags,
}

impl ListCommands {
    /// Execute the list command
    pub fn execute(&self) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.render(&mut out)
    }

    fn render<W: Write>(&self, out: &mut W) -> Result<()> {
        match self {
            ListCommands::Formats => {
                writeln!(out, "Available output formats:")?;
                for format in OutputFormat::ALL {
                    writeln!(out, "  {:<10} {}", format.name(), format.description())?;
                }
            }
            ListCommands::Tags => {
                writeln!(out, "Format tags (detection rules apply in this order):")?;
                for tag in FormatTag::ALL {
                    writeln!(out, "  {:<14} {}", tag.as_str(), tag.description())?;
                    if let Some(rule) = RULES.iter().find(|rule| rule.tag == tag) {
                        writeln!(out, "  {:<14} rule: {}", "", rule.summary)?;
                    }
                }
            }
        }
        Ok(())
    }
}
