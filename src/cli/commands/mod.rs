use crate::account::DEFAULT_AVATAR_URL;
use clap::{
    builder::{
        styling::{AnsiColor, Effects, Styles},
        ValueParser,
    },
    Arg, ColorChoice, Command,
};

pub fn validator_log_level() -> ValueParser {
    ValueParser::from(move |level: &str| -> std::result::Result<u8, String> {
        if let Ok(parsed) = level.parse::<u8>() {
            // Successfully parsed as a number
            if parsed <= 5 {
                return Ok(parsed);
            }
        }

        match level.to_lowercase().as_str() {
            "error" => Ok(0),
            "warn" => Ok(1),
            "info" => Ok(2),
            "debug" => Ok(3),
            "trace" => Ok(4),
            _ => Err("invalid log level".to_string()),
        }
    })
}

pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    Command::new("armadio")
        .about("Account onboarding and OTP sign-in")
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .styles(styles)
        .arg(
            Arg::new("port")
                .short('p')
                .long("port")
                .help("Port to listen on")
                .default_value("8080")
                .env("ARMADIO_PORT")
                .value_parser(clap::value_parser!(u16)),
        )
        .arg(
            Arg::new("endpoint")
                .short('e')
                .long("endpoint")
                .help("Backend base URL, example: https://backend.armadio.dev")
                .env("ARMADIO_ENDPOINT")
                .required(true),
        )
        .arg(
            Arg::new("project-id")
                .long("project-id")
                .help("Backend project identifier")
                .env("ARMADIO_PROJECT_ID")
                .required(true),
        )
        .arg(
            Arg::new("api-key")
                .long("api-key")
                .help("Backend server API key")
                .env("ARMADIO_API_KEY")
                .required(true),
        )
        .arg(
            Arg::new("database-id")
                .long("database-id")
                .help("Backend database identifier")
                .env("ARMADIO_DATABASE_ID")
                .required(true),
        )
        .arg(
            Arg::new("users-collection-id")
                .long("users-collection-id")
                .help("Identifier of the users collection")
                .env("ARMADIO_USERS_COLLECTION_ID")
                .required(true),
        )
        .arg(
            Arg::new("frontend-url")
                .long("frontend-url")
                .help("Origin allowed to call the API from a browser")
                .default_value("http://localhost:3000")
                .env("ARMADIO_FRONTEND_URL"),
        )
        .arg(
            Arg::new("avatar-url")
                .long("avatar-url")
                .help("Avatar URL assigned to newly created users")
                .default_value(DEFAULT_AVATAR_URL)
                .env("ARMADIO_AVATAR_URL"),
        )
        .arg(
            Arg::new("verbosity")
                .short('v')
                .long("verbose")
                .help("Verbosity level: ERROR, WARN, INFO, DEBUG, TRACE (default: ERROR)")
                .env("ARMADIO_LOG_LEVEL")
                .global(true)
                .action(clap::ArgAction::Count)
                .value_parser(validator_log_level()),
        )
}
