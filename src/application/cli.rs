use std::io;
use std::path;

use anyhow::bail;
use anyhow::Result;
use clap::value_parser;
use clap::Arg;
use clap::ArgAction;
use clap::Command;
use clap_complete::generate;
use clap_complete::Generator;
use clap_complete::Shell;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::services::actions::help_text;
use crate::infrastructure::backends::BackendManager;

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
}

async fn print_sessions_list() -> Result<()> {
    let backend = BackendManager::get()?;
    let histories = backend
        .list_histories(&Config::get(ConfigKey::Username))
        .await?;

    if histories.is_empty() {
        println!("There are no sessions available. You should start your first one!");
        return Ok(());
    }

    let lines = histories
        .iter()
        .map(|entry| {
            return format!("- (ID: {}) {}", entry.id, entry.title);
        })
        .collect::<Vec<String>>();

    println!("{}", lines.join("\n"));
    return Ok(());
}

async fn create_config_file() -> Result<()> {
    let config_file_path_str = Config::default(ConfigKey::ConfigFile);
    let config_file_path = path::PathBuf::from(&config_file_path_str);
    if config_file_path.exists() {
        bail!(format!(
            "Config file already exists at {config_file_path_str}"
        ));
    }

    if !config_file_path.parent().unwrap().exists() {
        fs::create_dir_all(config_file_path.parent().unwrap()).await?;
    }

    let mut file = fs::File::create(config_file_path.clone()).await?;
    file.write_all(Config::serialize_default(build()).as_bytes())
        .await?;

    let config_path_display = config_file_path.as_os_str().to_str().unwrap();
    println!("Created default config file at {config_path_display}");
    return Ok(());
}

fn subcommand_completions() -> Command {
    return Command::new("completions")
        .about("Generates shell completions.")
        .arg(
            Arg::new("shell")
                .short('s')
                .long("shell")
                .help("Which shell to generate completions for.")
                .action(ArgAction::Set)
                .value_parser(value_parser!(Shell))
                .required(true),
        );
}

fn subcommand_config() -> Command {
    return Command::new("config")
        .about("Configuration file options.")
        .subcommand(
            Command::new("create").about("Saves the default config file to the configuration file path. This command will fail if the file exists already.")
        )
        .subcommand(
            Command::new("default").about("Outputs the default configuration file to stdout.")
        )
        .subcommand(
            Command::new("path").about("Returns the default path for the configuration file.")
        );
}

fn subcommand_sessions() -> Command {
    return Command::new("sessions")
        .about("Manage past search sessions.")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("list").about("List all previous sessions with their ids and titles."),
        );
}

fn arg_backend_url() -> Arg {
    return Arg::new(ConfigKey::BackendURL.to_string())
        .short('b')
        .long(ConfigKey::BackendURL.to_string())
        .env("SIMPAI_BACKEND_URL")
        .num_args(1)
        .help(format!(
            "URL of the analysis service. [default: {}]",
            Config::default(ConfigKey::BackendURL)
        ));
}

fn arg_username() -> Arg {
    return Arg::new(ConfigKey::Username.to_string())
        .short('u')
        .long(ConfigKey::Username.to_string())
        .env("SIMPAI_USERNAME")
        .num_args(1)
        .help("The email identifying your sessions on the analysis service. Defaults to your system username.");
}

fn arg_zillow_url() -> Arg {
    return Arg::new(ConfigKey::ZillowURL.to_string())
        .long(ConfigKey::ZillowURL.to_string())
        .env("SIMPAI_ZILLOW_URL")
        .num_args(1)
        .help(format!(
            "URL of the property detail provider. [default: {}]",
            Config::default(ConfigKey::ZillowURL)
        ));
}

fn arg_zillow_api_key() -> Arg {
    return Arg::new(ConfigKey::ZillowApiKey.to_string())
        .long(ConfigKey::ZillowApiKey.to_string())
        .env("ZILLOW_API_KEY")
        .num_args(1)
        .help("API key for the property detail provider.");
}

fn arg_maps_url() -> Arg {
    return Arg::new(ConfigKey::MapsURL.to_string())
        .long(ConfigKey::MapsURL.to_string())
        .env("SIMPAI_MAPS_URL")
        .num_args(1)
        .help(format!(
            "URL of the street view imagery provider. [default: {}]",
            Config::default(ConfigKey::MapsURL)
        ));
}

fn arg_maps_api_key() -> Arg {
    return Arg::new(ConfigKey::MapsApiKey.to_string())
        .long(ConfigKey::MapsApiKey.to_string())
        .env("GOOGLE_MAPS_API_KEY")
        .num_args(1)
        .help("API key for the street view imagery provider.");
}

fn arg_session_id() -> Arg {
    return Arg::new(ConfigKey::SessionID.to_string())
        .short('i')
        .long(ConfigKey::SessionID.to_string())
        .env("SIMPAI_SESSION_ID")
        .num_args(1)
        .help("A previous session id to resume at startup.");
}

fn arg_config_file() -> Arg {
    return Arg::new(ConfigKey::ConfigFile.to_string())
        .short('c')
        .long(ConfigKey::ConfigFile.to_string())
        .env("SIMPAI_CONFIG_FILE")
        .num_args(1)
        .help(format!(
            "Path to configuration file. [default: {}]",
            Config::default(ConfigKey::ConfigFile)
        ));
}

pub fn build() -> Command {
    let about = format!(
        "{}\n\nVersion: {}",
        env!("CARGO_PKG_DESCRIPTION"),
        env!("CARGO_PKG_VERSION")
    );

    return Command::new("simpai")
        .about(about)
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .after_help(help_text())
        .arg_required_else_help(false)
        .subcommand(subcommand_completions())
        .subcommand(subcommand_config())
        .subcommand(subcommand_sessions())
        .arg(arg_backend_url())
        .arg(arg_username())
        .arg(arg_zillow_url())
        .arg(arg_zillow_api_key())
        .arg(arg_maps_url())
        .arg(arg_maps_api_key())
        .arg(arg_session_id())
        .arg(arg_config_file());
}

/// Returns true when the interactive chat should start, false when a
/// subcommand already handled the invocation.
pub async fn parse() -> Result<bool> {
    let matches = build().get_matches();

    if let Some(("completions", sub_matches)) = matches.subcommand() {
        let shell = sub_matches.get_one::<Shell>("shell").unwrap();
        print_completions(*shell, &mut build());
        return Ok(false);
    }

    if let Some(("config", sub_matches)) = matches.subcommand() {
        match sub_matches.subcommand_name() {
            Some("create") => create_config_file().await?,
            Some("default") => print!("{}", Config::serialize_default(build())),
            Some("path") => println!("{}", Config::default(ConfigKey::ConfigFile)),
            _ => {}
        }
        return Ok(false);
    }

    if let Some(("sessions", sub_matches)) = matches.subcommand() {
        Config::load(vec![&matches]).await?;
        if sub_matches.subcommand_matches("list").is_some() {
            print_sessions_list().await?;
        }
        return Ok(false);
    }

    Config::load(vec![&matches]).await?;
    return Ok(true);
}
