//! Tool invocation commands: `call` and `tools`.

use std::sync::Arc;

use txguard::{
    CallerIdentity, OwnerId, Outcome,
    identity::SessionStore,
    store::InMemory,
    tools::{Tool, ToolBox},
};

use crate::cli::CallArgs;
use crate::output::{OutputFormat, print_table};

/// Build the tool box for a session logged in as `user`.
fn session_tools(
    store: InMemory,
    user: u64,
) -> Result<(ToolBox, CallerIdentity), Box<dyn std::error::Error>> {
    let sessions = SessionStore::new();
    let caller = sessions.create_session(OwnerId::new(user))?;
    let tools = ToolBox::new(Arc::new(sessions), Arc::new(store));
    Ok((tools, caller))
}

/// Run the `call` command
pub fn run(
    args: &CallArgs,
    store: InMemory,
    user: u64,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let (tools, caller) = session_tools(store, user)?;

    if format == OutputFormat::Json {
        println!("{}", tools.invoke(&args.tool, &args.input, &caller)?);
        return Ok(());
    }

    match args.tool.parse::<Tool>()? {
        Tool::GetCurrentUser => {
            let user = tools.current_user(&caller)?;
            print_table(
                &["USER ID", "USERNAME"],
                &[vec![user.user_id.to_string(), user.username]],
            );
        }
        Tool::GetUserTransactions => match tools.gate().handle_request(&args.input, &caller) {
            Outcome::Success(records) if records.is_empty() => {
                println!("No transactions.");
            }
            Outcome::Success(records) => {
                let rows: Vec<_> = records
                    .iter()
                    .map(|r| {
                        vec![
                            r.transaction_id.to_string(),
                            r.reference.clone(),
                            r.recipient.clone(),
                            format!("{:.2}", r.amount),
                        ]
                    })
                    .collect();
                print_table(&["ID", "REFERENCE", "RECIPIENT", "AMOUNT"], &rows);
            }
            Outcome::Failure(failure) => {
                println!("{}: {}", failure.kind, failure.message);
            }
        },
    }
    Ok(())
}

/// Run the `tools` command
pub fn list(format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let specs = ToolBox::specs();

    match format {
        OutputFormat::Human => {
            let rows: Vec<_> = specs
                .iter()
                .map(|spec| vec![spec.name.to_string(), spec.description.to_string()])
                .collect();
            print_table(&["TOOL", "DESCRIPTION"], &rows);
        }
        OutputFormat::Json => println!("{}", serde_json::to_string(&specs)?),
    }
    Ok(())
}
