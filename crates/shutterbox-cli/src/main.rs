//! Shutterbox CLI - a terminal front end for the session core.
//!
//! Drives the session manager the way the app's screens do: restore the
//! saved session on start, then run one command against the same persisted
//! slot the app uses.

use std::io::{self, Write};

use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use shutterbox_core::{Config, FileStore, SessionManager};

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn print_usage() {
    eprintln!("Usage: shutterbox <command>");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  login [email]     Sign in to an account");
    eprintln!("  register <email>  Create a new account and sign in");
    eprintln!("  logout            Sign out and clear the saved session");
    eprintln!("  status            Show the current session");
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    init_tracing();
    info!("Shutterbox CLI starting");

    let args: Vec<String> = std::env::args().collect();
    let Some(command) = args.get(1) else {
        print_usage();
        return Ok(());
    };

    let mut config = Config::load()?;
    let store = FileStore::new(config.data_dir()?)?;
    let mut manager = SessionManager::new(store);

    // Restore the saved session before any command runs
    manager.restore().await;

    match command.as_str() {
        "login" => login(&mut manager, &mut config, args.get(2).cloned()).await,
        "register" => match args.get(2).cloned() {
            Some(email) => register(&mut manager, &mut config, &email).await,
            None => {
                print_usage();
                Ok(())
            }
        },
        "logout" => {
            manager.logout().await;
            println!("Signed out.");
            Ok(())
        }
        "status" => {
            status(&manager);
            Ok(())
        }
        _ => {
            print_usage();
            Ok(())
        }
    }
}

async fn login(
    manager: &mut SessionManager<FileStore>,
    config: &mut Config,
    email_arg: Option<String>,
) -> Result<()> {
    let email = match email_arg.or_else(|| std::env::var("SHUTTERBOX_EMAIL").ok()) {
        Some(email) => email,
        None => prompt_with_default("Email", config.last_email.as_deref())?,
    };

    let secret = match std::env::var("SHUTTERBOX_PASSWORD") {
        Ok(secret) => secret,
        Err(_) => rpassword::prompt_password("Password: ")?,
    };

    println!("Signing in...");
    let identity = manager.login(&email, &secret).await?;

    config.last_email = Some(identity.email.clone());
    if let Err(e) = config.save() {
        warn!(error = %e, "Failed to save config");
    }

    println!("Signed in as {} <{}>", identity.name, identity.email);
    Ok(())
}

async fn register(
    manager: &mut SessionManager<FileStore>,
    config: &mut Config,
    email: &str,
) -> Result<()> {
    let name = prompt("Full name: ")?;
    let secret = rpassword::prompt_password("Password: ")?;

    println!("Creating account...");
    let identity = manager.register(email, &secret, &name).await?;

    config.last_email = Some(identity.email.clone());
    if let Err(e) = config.save() {
        warn!(error = %e, "Failed to save config");
    }

    println!("Welcome, {}! You are signed in as {}", identity.name, identity.email);
    Ok(())
}

fn status(manager: &SessionManager<FileStore>) {
    match manager.current_session() {
        Some(identity) => {
            println!("Signed in as {} <{}>", identity.name, identity.email);
            println!("Account id: {}", identity.id);
        }
        None => println!("Not signed in."),
    }
}

fn prompt(label: &str) -> Result<String> {
    print!("{}", label);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

fn prompt_with_default(label: &str, default: Option<&str>) -> Result<String> {
    let Some(default) = default else {
        return prompt(&format!("{}: ", label));
    };

    print!("{} [{}]: ", label, default);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    let input = input.trim();

    if input.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(input.to_string())
    }
}
