//! Validation-only command.

use txguard::validation::{ValidationVerdict, validate};

use crate::cli::CheckArgs;
use crate::output::OutputFormat;

/// Run the `check` command
pub fn run(args: &CheckArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let verdict = validate(&args.input);

    match format {
        OutputFormat::Human => match verdict {
            ValidationVerdict::Malicious(signature) => {
                println!("malicious: {} ({})", signature.description, signature.name)
            }
            ValidationVerdict::Malformed => println!("malformed"),
            ValidationVerdict::Valid(id) => println!("valid: {id}"),
        },
        OutputFormat::Json => {
            let value = match verdict {
                ValidationVerdict::Malicious(signature) => serde_json::json!({
                    "verdict": "malicious",
                    "signature": signature.name,
                    "description": signature.description,
                }),
                ValidationVerdict::Malformed => serde_json::json!({ "verdict": "malformed" }),
                ValidationVerdict::Valid(id) => serde_json::json!({
                    "verdict": "valid",
                    "requestedId": id.as_str(),
                }),
            };
            println!("{}", serde_json::to_string(&value)?);
        }
    }
    Ok(())
}
