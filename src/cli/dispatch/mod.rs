use crate::cli::{actions::Action, globals::GlobalArgs};
use anyhow::Result;
use secrecy::SecretString;

pub fn handler(matches: &clap::ArgMatches) -> Result<(Action, GlobalArgs)> {
    let action = Action::Server {
        port: matches.get_one::<u16>("port").copied().unwrap_or(8080),
        dsn: matches
            .get_one("dsn")
            .map(|s: &String| s.to_string())
            .ok_or_else(|| anyhow::anyhow!("missing required argument: --dsn"))?,
    };

    let secret = matches
        .get_one("secret")
        .map(|s: &String| SecretString::from(s.clone()))
        .ok_or_else(|| anyhow::anyhow!("missing required argument: --secret"))?;

    let mut globals = GlobalArgs::new(secret);

    if let Some(ttl) = matches.get_one::<i64>("token-ttl").copied() {
        globals.set_token_ttl(ttl);
    }

    Ok((action, globals))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands;
    use secrecy::ExposeSecret;

    #[test]
    fn test_handler_builds_action_and_globals() {
        let matches = commands::new().get_matches_from(vec![
            "portiere",
            "--port",
            "9090",
            "--dsn",
            "postgres://localhost:5432/portiere",
            "--secret",
            "sup3rs3cret",
            "--token-ttl",
            "120",
        ]);

        let (action, globals) = handler(&matches).unwrap();

        let Action::Server { port, dsn } = action;
        assert_eq!(port, 9090);
        assert_eq!(dsn, "postgres://localhost:5432/portiere");
        assert_eq!(globals.secret.expose_secret(), "sup3rs3cret");
        assert_eq!(globals.token_ttl, 120);
    }
}
