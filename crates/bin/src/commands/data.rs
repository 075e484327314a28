//! Store inspection and seeding commands: `users` and `init-data`.

use txguard::store::InMemory;

use crate::cli::InitDataArgs;
use crate::output::{OutputFormat, print_table};

/// Run the `users` command
pub fn users(store: &InMemory, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let users = store.list_users()?;

    match format {
        OutputFormat::Human => {
            if users.is_empty() {
                println!("No users found.");
                return Ok(());
            }
            let rows: Vec<_> = users
                .iter()
                .map(|u| vec![u.user_id.to_string(), u.username.clone()])
                .collect();
            print_table(&["USER ID", "USERNAME"], &rows);
        }
        OutputFormat::Json => println!("{}", serde_json::to_string(&users)?),
    }
    Ok(())
}

/// Run the `init-data` command
pub fn init(args: &InitDataArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.path.exists() && !args.force {
        return Err(format!(
            "{} already exists (use --force to overwrite)",
            args.path.display()
        )
        .into());
    }

    InMemory::with_sample_data()?.save_to_file(&args.path)?;
    println!("Wrote sample bank to {}", args.path.display());
    Ok(())
}
