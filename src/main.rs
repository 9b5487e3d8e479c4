use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use cookie_jar::config::{ServerConfig, DEFAULT_HOST, DEFAULT_PORT};
use cookie_jar::demo::{insert_remove_demo, transfer_demo, DEFAULT_FILL};
use cookie_jar::jar::CookieFlavor;
use cookie_jar::router::run_server;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Cookie Jar - put cookies in, take cookies out
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the jar walkthroughs and print what happens
    Demo {
        /// Which walkthrough to run
        #[arg(short, long, value_enum, default_value_t = Walkthrough::Transfer)]
        walkthrough: Walkthrough,

        /// Flavors to fill the first jar with in the transfer walkthrough,
        /// comma separated (e.g. `chocolateChip,fortune`)
        #[arg(short, long = "flavor", value_delimiter = ',')]
        flavors: Vec<CookieFlavor>,
    },
    /// Serve jars over HTTP
    Serve {
        /// Host to bind to
        #[arg(long, default_value = DEFAULT_HOST)]
        host: String,

        /// Port to listen on
        #[arg(short, long, default_value_t = DEFAULT_PORT)]
        port: u16,

        /// Enable verbose logging
        #[arg(short, long)]
        verbose: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Walkthrough {
    /// Fill one jar and empty it into another
    Transfer,
    /// Move a single cookie between two jars
    InsertRemove,
    /// Both walkthroughs
    All,
}

fn init_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Demo {
            walkthrough,
            flavors,
        } => {
            init_tracing("warn");

            if matches!(walkthrough, Walkthrough::Transfer | Walkthrough::All) {
                let fill_with = if flavors.is_empty() {
                    &DEFAULT_FILL[..]
                } else {
                    &flavors[..]
                };
                println!("{}", transfer_demo(fill_with)?);
            }
            if walkthrough == Walkthrough::All {
                println!();
            }
            if matches!(walkthrough, Walkthrough::InsertRemove | Walkthrough::All) {
                println!("{}", insert_remove_demo()?);
            }
            Ok(())
        }
        Command::Serve {
            host,
            port,
            verbose,
        } => {
            let config = ServerConfig {
                host,
                port,
                verbose,
            };
            init_tracing(config.log_filter());
            run_server(&config).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_serve_defaults() {
        let cli = Cli::try_parse_from(["cookie-jar", "serve"]).unwrap();
        match cli.command {
            Command::Serve {
                host,
                port,
                verbose,
            } => {
                assert_eq!(host, "127.0.0.1");
                assert_eq!(port, 8000);
                assert!(!verbose);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_cli_parses_walkthrough() {
        let cli = Cli::try_parse_from(["cookie-jar", "demo", "--walkthrough", "insert-remove"])
            .unwrap();
        match cli.command {
            Command::Demo {
                walkthrough,
                flavors,
            } => {
                assert_eq!(walkthrough, Walkthrough::InsertRemove);
                assert!(flavors.is_empty());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_cli_parses_flavor_list() {
        let cli = Cli::try_parse_from(["cookie-jar", "demo", "--flavor", "fortune,Chocolate Chip"])
            .unwrap();
        match cli.command {
            Command::Demo { flavors, .. } => assert_eq!(
                flavors,
                vec![CookieFlavor::Fortune, CookieFlavor::ChocolateChip]
            ),
            other => panic!("unexpected command: {:?}", other),
        }

        assert!(Cli::try_parse_from(["cookie-jar", "demo", "-f", "oatmeal"]).is_err());
    }

    #[test]
    fn test_cli_rejects_unknown_walkthrough() {
        assert!(Cli::try_parse_from(["cookie-jar", "demo", "-w", "bake"]).is_err());
    }
}
