//! The `nodeview` crate provides a Command Line Interface (CLI) for
//! inspecting a Kubernetes cluster's scheduling state.
//!
//! It lists the nodes of a cluster together with the pods placed on each, and
//! resolves which node currently hosts a named pod.
//!
//! # Examples
//!
//! ```bash
//! # List every node and the pods scheduled to it
//! nodeview list
//!
//! # Show one node, including each pod's containers
//! nodeview list --nodename worker-0 --verbose
//!
//! # Report the node hosting a pod
//! nodeview findpod my-pod-name
//! ```

pub mod error;
mod findpod;
mod list;

use std::{io::Write, path::PathBuf};

use clap::{CommandFactory, Parser, Subcommand};
use snafu::ResultExt;
use tokio::runtime::Runtime;

pub use self::error::Error;
use self::{findpod::FindPodCommand, list::ListCommand};
use crate::{client::ClusterClient, config::Config, shadow};

/// `Cli` is the main entry point for the nodeview Command Line Interface.
///
/// It parses command-line arguments and dispatches to the appropriate
/// subcommand.
#[derive(Parser)]
#[command(
    name = nodeview_base::CLI_PROGRAM_NAME,
    author,
    version,
    long_version = shadow::CLAP_LONG_VERSION,
    about = "nodeview: inspect node/pod placement in a Kubernetes cluster.",
    long_about = "nodeview is a read-only operator tool for inspecting a Kubernetes cluster's \
                  scheduling state. It lists nodes and the pods placed on each, and resolves \
                  which node currently hosts a named pod."
)]
pub struct Cli {
    /// The subcommand to execute.
    #[clap(subcommand)]
    commands: Option<Commands>,

    /// Path to the configuration file.
    #[clap(
        long = "config",
        short = 'c',
        env = "NODEVIEW_CONFIG_FILE_PATH",
        help = "Specify a configuration file. Defaults to ~/.config/nodeview/config.yaml or \
                NODEVIEW_CONFIG_FILE_PATH env var."
    )]
    config_file: Option<PathBuf>,

    /// Path to the kubeconfig file used to reach the cluster.
    #[clap(
        long = "kubeconfig",
        env = "NODEVIEW_KUBECONFIG",
        help = "Specify a kubeconfig file. Defaults to the standard discovery chain \
                ($KUBECONFIG, ~/.kube/config, in-cluster)."
    )]
    kubeconfig: Option<PathBuf>,

    /// Sets the logging level for the application.
    #[clap(
        long = "log-level",
        env = "NODEVIEW_LOG_LEVEL",
        help = "Set the logging level (e.g., info, debug, trace)."
    )]
    log_level: Option<tracing::Level>,
}

/// `Commands` enumerates the available subcommands for the nodeview CLI.
#[derive(Clone, Subcommand)]
pub enum Commands {
    /// Displays client and server version information.
    #[command(about = "Display client and server version information")]
    Version {
        /// If true, shows only the client version and does not require a
        /// server connection.
        #[clap(long = "client", help = "If true, shows client version only (no server required).")]
        client: bool,
    },

    /// Generates a shell completion script for the specified shell.
    #[command(about = "Generate shell completion script for the specified shell (bash, zsh, fish)")]
    Completions { shell: clap_complete::Shell },

    /// Outputs the default configuration in YAML format to standard output.
    #[command(about = "Output the default configuration in YAML format")]
    DefaultConfig,

    /// Lists the nodes of the cluster and the pods placed on each.
    #[command(alias = "l", about = "List nodes and the pods scheduled to each of them")]
    List(ListCommand),

    /// Reports which node currently hosts the named pod.
    #[command(name = "findpod", alias = "f", about = "Report the node hosting the named pod")]
    Findpod(FindPodCommand),
}

impl Default for Cli {
    fn default() -> Self { Self::parse() }
}

impl Cli {
    /// Loads the application configuration, applying any overrides from CLI
    /// arguments.
    fn load_config(&self) -> Result<Config, Error> {
        let mut config =
            Config::load(self.config_file.clone().unwrap_or_else(Config::search_config_file_path))?;

        if let Some(log_level) = self.log_level {
            config.log.level = log_level;
        }
        if let Some(kubeconfig) = &self.kubeconfig {
            config.kubeconfig = Some(kubeconfig.clone());
        }

        Ok(config)
    }

    /// Executes the CLI based on the parsed command and arguments.
    ///
    /// Subcommands that need no cluster connection (`completions`,
    /// `default-config`, `version --client`) are handled before the client is
    /// built. Running with no subcommand prints the long help to standard
    /// error and yields the usage exit code.
    ///
    /// # Returns
    ///
    /// The process exit code: `0` on success, `2` for a missing subcommand.
    /// Query failures surface as an `Error`, which the caller reports with
    /// exit code `1`.
    ///
    /// # Errors
    ///
    /// Returns an `Error` if the configuration cannot be loaded, the
    /// Kubernetes client cannot be initialized, the tokio runtime fails to
    /// start, or a subcommand fails.
    ///
    /// # Panics
    ///
    /// This method `expect`s on writes to stdout/stderr, which are assumed to
    /// succeed in a CLI environment.
    pub fn run(self) -> Result<i32, Error> {
        let client_version = Self::command().get_version().unwrap_or_default().to_string();
        match self.commands {
            Some(Commands::Version { client }) if client => {
                std::io::stdout()
                    .write_all(Self::command().render_long_version().as_bytes())
                    .expect("Failed to write to stdout");
                std::io::stdout()
                    .write_all(format!("Client Version: {client_version}\n").as_bytes())
                    .expect("Failed to write to stdout");

                return Ok(0);
            }
            Some(Commands::Completions { shell }) => {
                let mut app = Self::command();
                let bin_name = app.get_name().to_string();
                clap_complete::generate(shell, &mut app, bin_name, &mut std::io::stdout());
                return Ok(0);
            }
            Some(Commands::DefaultConfig) => {
                std::io::stdout()
                    .write_all(Config::template_basic().as_slice())
                    .expect("Failed to write to stdout");
                return Ok(0);
            }
            None => {
                let help = Self::command().render_long_help().ansi().to_string();
                std::io::stderr().write_all(help.as_bytes()).expect("Failed to write to stderr");
                return Ok(2);
            }
            _ => {}
        }

        let config = self.load_config()?;
        config.log.registry();

        let fut = async move {
            let client = ClusterClient::connect(config.kubeconfig.clone()).await?;
            match self.commands {
                Some(Commands::Version { .. }) => {
                    let server_version = client.server_version().await;
                    let info = format!(
                        "Client Version: {client_version}\nServer Version: {server_version}\n",
                    );
                    std::io::stdout()
                        .write_all(Self::command().render_long_version().as_bytes())
                        .expect("Failed to write to stdout");
                    std::io::stdout()
                        .write_all(info.as_bytes())
                        .expect("Failed to write to stdout");

                    return Ok(0);
                }
                Some(Commands::List(cmd)) => cmd.run(client).await?,
                Some(Commands::Findpod(cmd)) => cmd.run(client).await?,
                _ => unreachable!("remaining commands are handled before connecting"),
            }

            Ok(0)
        };

        Runtime::new().context(error::InitializeTokioRuntimeSnafu)?.block_on(fut)
    }
}
