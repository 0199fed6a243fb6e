//! Command-line interface definitions and argument parsing

use clap::{Parser, Subcommand};

/// Console client for the k-means and Apriori sales-analytics services
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Save a sale record (POST to the clustering service)
    Guardar {
        /// Endpoint URL; defaults to <base_url>/kmeans/guardar
        #[arg(long)]
        url: Option<String>,

        /// Sale record as inline JSON; defaults to a sample record
        #[arg(long)]
        datos: Option<String>,
    },

    /// Fetch clustered sales (GET from the clustering service)
    Clusterizados {
        /// Endpoint URL; defaults to <base_url>/kmeans/clusterizados
        #[arg(long)]
        url: Option<String>,
    },

    /// Fetch association rules (GET from the Apriori service)
    Reglas {
        /// Endpoint URL; defaults to <base_url>/apriori/reglas
        #[arg(long)]
        url: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_guardar_with_defaults() {
        let args = Args::try_parse_from(["ventas-console", "guardar"]).unwrap();
        match args.command {
            Command::Guardar { url, datos } => {
                assert!(url.is_none());
                assert!(datos.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert_eq!(args.config, "config.toml");
    }

    #[test]
    fn test_parse_reglas_with_url() {
        let args = Args::try_parse_from([
            "ventas-console",
            "reglas",
            "--url",
            "http://localhost:8000/apriori/reglas",
        ])
        .unwrap();

        match args.command {
            Command::Reglas { url } => {
                assert_eq!(url.as_deref(), Some("http://localhost:8000/apriori/reglas"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_subcommand_is_required() {
        assert!(Args::try_parse_from(["ventas-console"]).is_err());
    }
}
