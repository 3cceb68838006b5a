use crate::cli::{actions::Action, globals::GlobalArgs};
use anyhow::{anyhow, Result};
use secrecy::SecretString;

pub fn handler(matches: &clap::ArgMatches) -> Result<(Action, GlobalArgs)> {
    // Closure to return a required string argument
    let required = |name: &str| -> Result<String> {
        matches
            .get_one::<String>(name)
            .map(String::to_string)
            .ok_or_else(|| anyhow!("missing required argument: --{name}"))
    };

    let globals = GlobalArgs {
        endpoint: required("endpoint")?,
        project_id: required("project-id")?,
        api_key: SecretString::from(required("api-key")?),
        database_id: required("database-id")?,
        users_collection_id: required("users-collection-id")?,
        default_avatar_url: required("avatar-url")?,
        frontend_url: required("frontend-url")?,
    };

    let action = Action::Server {
        port: matches.get_one::<u16>("port").copied().unwrap_or(8080),
    };

    Ok((action, globals))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands;
    use secrecy::ExposeSecret;

    #[test]
    fn handler_builds_action_and_globals() -> Result<()> {
        let matches = commands::new().get_matches_from(vec![
            "armadio",
            "--port",
            "9090",
            "--endpoint",
            "https://backend.armadio.dev",
            "--project-id",
            "armadio",
            "--api-key",
            "secret-key",
            "--database-id",
            "main",
            "--users-collection-id",
            "users",
        ]);

        let (action, globals) = handler(&matches)?;

        let Action::Server { port } = action;
        assert_eq!(port, 9090);
        assert_eq!(globals.endpoint, "https://backend.armadio.dev");
        assert_eq!(globals.project_id, "armadio");
        assert_eq!(globals.api_key.expose_secret(), "secret-key");
        assert_eq!(globals.database_id, "main");
        assert_eq!(globals.users_collection_id, "users");
        assert_eq!(globals.frontend_url, "http://localhost:3000");
        Ok(())
    }
}
