use anyhow::Result;
use clap::Parser;

use ventas_console::cli::{Args, Command};
use ventas_console::config::Config;
use ventas_console::data::types::SaleRecord;
use ventas_console::panel::{AprioriPanel, KmeansPanel, Outcome};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let config = Config::load(&args.config)?;

    tracing::info!("🛒 Consola de analítica de ventas");
    tracing::info!("API base: {}", config.api.base_url);

    let outcome = match args.command {
        Command::Guardar { url, datos } => {
            let url = url.unwrap_or_else(|| config.guardar_url());
            let datos = match datos {
                Some(datos) => datos,
                None => serde_json::to_string_pretty(&SaleRecord::sample())?,
            };
            KmeansPanel::new().save_sale(&url, &datos).await
        }
        Command::Clusterizados { url } => {
            let url = url.unwrap_or_else(|| config.clusterizados_url());
            KmeansPanel::new().fetch_clustered(&url).await
        }
        Command::Reglas { url } => {
            let url = url.unwrap_or_else(|| config.reglas_url());
            AprioriPanel::new().fetch_rules(&url).await
        }
    };

    match outcome {
        Outcome::Success { status, body } => {
            println!("{}", status);
            println!();
            print!("{}", body);
            Ok(())
        }
        Outcome::Failure { message } => {
            eprintln!("❌ {}", message);
            std::process::exit(1);
        }
    }
}
