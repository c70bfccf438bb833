//! Command-line interface

use std::net::IpAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::ConfigOverrides;

/// Warp Account Manager: serve the management page or print a single console command.
#[derive(Debug, Parser)]
#[command(name = "warp-manager", version, about)]
pub struct Cli {
    /// Loopback address to listen on
    #[arg(long, global = true)]
    pub host: Option<IpAddr>,

    /// Port to listen on (default 8080)
    #[arg(long, short, global = true)]
    pub port: Option<u16>,

    /// TOML config file
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Do not open the page in a browser
    #[arg(long, global = true)]
    pub no_browser: bool,

    /// Print a command instead of serving the page
    #[command(subcommand)]
    pub command: Option<RenderCommand>,
}

impl Cli {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            host: self.host,
            port: self.port,
            no_browser: self.no_browser,
        }
    }
}

/// Commands rendered straight to stdout.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum RenderCommand {
    /// Validate a credential record and print `accountManager.addAccount(...)`
    AddAccount {
        /// Record file; stdin when omitted
        #[arg(long, short)]
        file: Option<PathBuf>,
    },
    /// Print `accountManager.getAccountList()`
    List,
    /// Print `accountManager.getActiveAccount()`
    Active,
    /// Print `accountManager.setActiveAccount("<email>")`
    Switch { email: Option<String> },
    /// Print `accountManager.deleteAccount("<email>")`
    Delete { email: Option<String> },
    /// Print `persistenceManager.backupData()`
    Backup,
    /// Print `persistenceManager.getStorageStats()`
    Stats,
    /// Print `persistenceManager.clearAllData()`
    Clear,
    /// Print the diagnostic console script
    SystemTest,
    /// Print an example credential record
    Example,
}
