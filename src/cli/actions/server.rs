use crate::cli::{actions::Action, globals::GlobalArgs};
use crate::portiere::new;
use anyhow::Result;
use url::Url;

/// Handle the server action
/// # Errors
/// Returns an error if the DSN is malformed or the server fails to start
pub async fn handle(action: Action, globals: &GlobalArgs) -> Result<()> {
    match action {
        Action::Server { port, dsn } => {
            // Reject an unparseable DSN before touching the pool
            let dsn = Url::parse(&dsn)?;

            new(port, dsn.to_string(), globals).await?;
        }
    }

    Ok(())
}
