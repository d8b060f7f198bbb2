//! CLI argument definitions.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use vetclinic_core::{ApiUrl, Locale};
use vetclinic_http::{ClientConfig, PaginationMode};

use crate::commands::{dashboard, login, logout, menu, register, resource, whoami};

/// Veterinary clinic command-line client.
#[derive(Parser, Debug)]
#[command(name = "vetclinic")]
#[command(author, version = env!("VETCLINIC_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Settings shared by every command.
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Clinic API base URL (defaults to the session's, then localhost)
    #[arg(long, env = "VETCLINIC_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Message language: es or en
    #[arg(long, env = "VETCLINIC_LOCALE", default_value = "es", global = true)]
    pub locale: Locale,

    /// Records per page
    #[arg(
        long,
        env = "VETCLINIC_PAGE_SIZE",
        default_value_t = 10,
        value_parser = clap::value_parser!(u32).range(1..),
        global = true
    )]
    pub page_size: u32,

    /// Per-request timeout in seconds
    #[arg(long, env = "VETCLINIC_TIMEOUT_SECS", global = true)]
    pub timeout_secs: Option<u64>,

    /// Refuse list answers without a server-reported total
    #[arg(long, global = true)]
    pub strict_pagination: bool,

    /// Print records as JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,
}

/// Used when neither the flag, the environment nor a session names an API.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

impl GlobalArgs {
    /// Build the HTTP client configuration.
    ///
    /// `session_api` is the URL stored at login; an explicit flag wins.
    pub fn client_config(&self, session_api: Option<&str>, token: Option<String>) -> Result<ClientConfig> {
        let raw = self
            .api_url
            .as_deref()
            .or(session_api)
            .unwrap_or(DEFAULT_API_URL);
        let api = ApiUrl::new(raw).with_context(|| format!("Invalid API URL '{raw}'"))?;

        let pagination = if self.strict_pagination {
            PaginationMode::Strict
        } else {
            PaginationMode::Lenient
        };

        Ok(ClientConfig::new(api)
            .locale(self.locale)
            .pagination(pagination)
            .token(token)
            .timeout(self.timeout_secs.map(Duration::from_secs)))
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create your own clinic user (role 'cliente' unless set)
    Register(register::RegisterArgs),

    /// Start a session as a clinic user
    Login(login::LoginArgs),

    /// End the current session
    Logout(logout::LogoutArgs),

    /// Display the current session
    Whoami(whoami::WhoamiArgs),

    /// Show the screens available to the current user
    Menu(menu::MenuArgs),

    /// Appointments over the last three months
    Dashboard(dashboard::DashboardArgs),

    /// Patients
    Animales(resource::ResourceCommand),

    /// Appointments
    Citas(resource::ResourceCommand),

    /// Invoices
    Facturas(resource::ResourceCommand),

    /// Owners
    Propietarios(resource::ResourceCommand),

    /// System users (admin only)
    Usuarios(resource::ResourceCommand),

    /// Vaccines
    Vacunas(resource::ResourceCommand),

    /// Veterinarians
    Veterinarios(resource::ResourceCommand),
}
