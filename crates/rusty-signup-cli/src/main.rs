mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rusty_signup::config::CONFIG_FILE;
use rusty_signup::{LoginForm, RegistrationForm, SignupConfig};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rusty-signup")]
#[command(version, about = "Register and log in against a local credential store", long_about = None)]
struct Cli {
    /// Path to the configuration file
    #[arg(long, global = true, default_value = CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a registration form and store the account
    Register {
        #[arg(short, long, default_value = "")]
        username: String,

        #[arg(short, long, default_value = "")]
        email: String,

        #[arg(short, long, default_value = "")]
        password: String,

        /// Password confirmation, must match --password
        #[arg(short = 'c', long, default_value = "")]
        confirm: String,

        /// Accept the terms and conditions
        #[arg(long)]
        accept_terms: bool,
    },

    /// Check a username and password against the store
    Login {
        #[arg(short, long, default_value = "")]
        username: String,

        #[arg(short, long, default_value = "")]
        password: String,

        /// Remain signed in
        #[arg(short, long)]
        remember: bool,
    },

    /// List registered usernames
    Users,
}

fn init_tracing(level: &str) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<ExitCode> {
    // Parse CLI arguments
    let cli = Cli::parse();

    let config = SignupConfig::load(&cli.config)?;
    init_tracing(&config.logging.level);

    let store = config.file_store();
    tracing::debug!(dir = ?config.storage.dir, key = %config.storage.key, "Using credential store");

    // Execute command
    let ok = match cli.command {
        Commands::Register {
            username,
            email,
            password,
            confirm,
            accept_terms,
        } => commands::register::execute(
            &store,
            &RegistrationForm {
                username,
                email,
                password,
                password_confirm: confirm,
                terms_accepted: accept_terms,
            },
        ),
        Commands::Login {
            username,
            password,
            remember,
        } => commands::login::execute(
            &store,
            &LoginForm {
                username,
                password,
                remember,
            },
        ),
        Commands::Users => commands::users::execute(&store),
    };

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
