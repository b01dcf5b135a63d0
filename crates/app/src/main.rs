//! Libris admin client - command-line entry point
//!
//! Configuration comes from `libris.toml` and `LIBRIS_*` variables.

use clap::{Parser, Subcommand};
use libris::AppShell;
use libris_domain::LoginForm;
use libris_infrastructure::AppConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(
    name = "libris",
    version,
    about = "Restore the Libris admin session and report it"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    /// Sign in, then show the profile.
    Login {
        /// Account email.
        email: String,
        /// Account password.
        #[arg(env = "LIBRIS_PASSWORD", hide_env_values = true)]
        password: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Libris admin client v{}", env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    let shell = AppShell::build(config)?;
    shell.start().await;

    if let Some(Command::Login { email, password }) = &cli.command
        && let Err(error) = shell
            .login_user()
            .execute(&LoginForm::new(email.as_str(), password.as_str()))
            .await
    {
        warn!(%error, "login failed");
    }

    if shell.status().is_signed_in() {
        match shell.profile().fetch().await {
            Ok(profile) => info!(
                name = %format!("{} {}", profile.first_name, profile.last_name),
                email = %profile.email,
                role = %profile.role,
                "signed in"
            ),
            Err(error) => warn!(%error, "could not load profile"),
        }
    }

    info!(
        status = ?shell.status(),
        path = %shell.current_path(),
        decision = ?shell.decision(),
        "session"
    );

    Ok(())
}
