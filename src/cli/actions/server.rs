use crate::{
    api,
    cli::{actions::Action, globals::GlobalArgs},
};
use anyhow::{Context, Result};
use url::Url;

/// Handle the server action
pub async fn handle(action: Action, globals: &GlobalArgs) -> Result<()> {
    match action {
        Action::Server { port } => {
            // Fail early on an unusable backend endpoint
            Url::parse(&globals.endpoint)
                .with_context(|| format!("Invalid backend endpoint: {}", globals.endpoint))?;

            api::new(port, globals).await?;
        }
    }

    Ok(())
}
