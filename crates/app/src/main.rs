//! Showroom - Main Entry Point
//!
//! Loads settings, initializes logging, wires the stores and runs a
//! line-oriented session on stdin.

use std::io::Write as _;
use std::sync::Arc;

use showroom::{Command, Session};
use showroom_application::{AuthStore, CatalogStore, CredentialStore};
use showroom_infrastructure::{FileCredentialStore, ReqwestTransport, SettingsRepository};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so they never interleave with command output
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let settings = SettingsRepository::new().load_effective().await?;
    tracing::info!(
        api_url = %settings.api_url,
        "Starting Showroom v{}",
        env!("CARGO_PKG_VERSION")
    );

    let credentials: Arc<dyn CredentialStore> = Arc::new(FileCredentialStore::in_config_dir(
        settings.credential_key.clone(),
    )?);
    let transport = Arc::new(ReqwestTransport::new(&settings, Arc::clone(&credentials))?);
    let auth = Arc::new(AuthStore::new(Arc::clone(&transport), Arc::clone(&credentials)));
    let catalog = Arc::new(CatalogStore::new(transport));
    let mut session = Session::new(auth, &catalog);

    if credentials.get().await?.is_some() {
        println!("{}", session.resume().await);
    } else {
        println!("Type `help` for commands.");
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("{}> ", session.route());
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(command) => {
                let output = session.execute(command).await;
                if !output.is_empty() {
                    println!("{output}");
                }
            }
            Err(error) => println!("{error}"),
        }
    }

    Ok(())
}
