//! Parse command implementation

use addrtail_core::{
    parse_address_tail, tokenize, AddressComponents, FormatDetector, FormatTag, FIELD_NAMES,
};
use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use std::io::{self, BufRead, Write};

/// Arguments for the parse command
#[derive(Debug, Args)]
pub struct ParseArgs {
    /// Address tails to parse (one per line from stdin when omitted)
    #[arg(value_name = "TEXT")]
    pub text: Vec<String>,

    /// Print one JSON object per input
    #[arg(long)]
    pub json: bool,

    /// Also list every detection rule the tokens satisfy
    #[arg(long)]
    pub explain: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Serialize)]
struct ParsedTail<'a> {
    input: &'a str,
    #[serde(flatten)]
    components: &'a AddressComponents,
    #[serde(skip_serializing_if = "Option::is_none")]
    matched_rules: Option<Vec<FormatTag>>,
}

impl ParseArgs {
    /// Execute the parse command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.verbose, false);

        let inputs = if self.text.is_empty() {
            io::stdin()
                .lock()
                .lines()
                .collect::<io::Result<Vec<_>>>()
                .context("Failed to read standard input")?
        } else {
            self.text.clone()
        };

        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.render(&inputs, &mut out)
    }

    fn render<W: Write>(&self, inputs: &[String], out: &mut W) -> Result<()> {
        for input in inputs {
            let components = parse_address_tail(Some(input));
            let matched_rules = self.explain.then(|| {
                let tokens = tokenize(input);
                FormatDetector::matching_rules(&tokens)
                    .iter()
                    .map(|rule| rule.tag)
                    .collect::<Vec<_>>()
            });

            if self.json {
                let parsed = ParsedTail {
                    input,
                    components: &components,
                    matched_rules,
                };
                writeln!(out, "{}", serde_json::to_string(&parsed)?)?;
                continue;
            }

            writeln!(out, "{input}")?;
            for (name, value) in FIELD_NAMES.iter().zip(components.values()) {
                writeln!(out, "  {name:<8} {value}")?;
            }
            if let Some(tags) = matched_rules {
                let names: Vec<&str> = tags.iter().map(|tag| tag.as_str()).collect();
                let names = if names.is_empty() {
                    "none".to_string()
                } else {
                    names.join(", ")
                };
                writeln!(out, "  {:<8} {names}", "RULES")?;
            }
        }
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(json: bool, explain: bool) -> ParseArgs {
        ParseArgs {
            text: Vec::new(),
            json,
            explain,
            verbose: 0,
        }
    }

    fn render(args: &ParseArgs, inputs: &[&str]) -> String {
        let inputs: Vec<String> = inputs.iter().map(|s| s.to_string()).collect();
        let mut buffer = Vec::new();
        args.render(&inputs, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_text_output() {
        let text = render(&args(false, false), &["RALEIGH NC 27601"]);
        assert_eq!(
            text,
            "RALEIGH NC 27601\n  CITY     RALEIGH\n  STATE    NC\n  ZIPCODE  27601\n  COUNTRY  USA\n  FORMAT   us_standard\n"
        );
    }

    #[test]
    fn test_json_output() {
        let text = render(&args(true, false), &["09774 DPO AE", ""]);
        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["input"], "09774 DPO AE");
        assert_eq!(lines[0]["ZIPCODE"], "09774");
        assert_eq!(lines[0]["FORMAT"], "us_military");
        assert!(lines[0].get("matched_rules").is_none());
        assert_eq!(lines[1]["FORMAT"], "empty");
    }

    #[test]
    fn test_explain_lists_overlapping_rules() {
        let text = render(&args(true, true), &["27601 DURHAM 27701-1234"]);
        let value: serde_json::Value = serde_json::from_str(text.trim()).unwrap();
        assert_eq!(value["FORMAT"], "international");
        assert_eq!(
            value["matched_rules"],
            serde_json::json!(["international", "us_standard"])
        );

        let text = render(&args(false, true), &["RETURNED"]);
        assert!(text.contains("RULES    none"));
    }
}
