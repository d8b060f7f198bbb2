//! Subcommand implementations.

pub mod dashboard;
pub mod login;
pub mod logout;
pub mod menu;
pub mod register;
pub mod resource;
pub mod whoami;

use anyhow::{Context, Result, bail};

use vetclinic_core::models::{Animal, Cita, Factura, Propietario, Usuario, Vacuna, Veterinario};
use vetclinic_core::nav::{AuthService, DenyReason, Route, guard};
use vetclinic_http::HttpClient;
use vetclinic_screen::ScreenConfig;

use crate::cli::{Cli, Commands, GlobalArgs};
use crate::session::{CliAuth, storage};

pub async fn handle(cli: Cli) -> Result<()> {
    let global = cli.global;
    match cli.command {
        Commands::Register(args) => register::run(&global, args).await,
        Commands::Login(args) => login::run(&global, args).await,
        Commands::Logout(args) => logout::run(args),
        Commands::Whoami(args) => whoami::run(&global, args),
        Commands::Menu(args) => menu::run(&global, args),
        Commands::Dashboard(args) => dashboard::run(&global, args).await,
        Commands::Animales(cmd) => resource::handle::<Animal>(&global, cmd).await,
        Commands::Citas(cmd) => resource::handle::<Cita>(&global, cmd).await,
        Commands::Facturas(cmd) => resource::handle::<Factura>(&global, cmd).await,
        Commands::Propietarios(cmd) => resource::handle::<Propietario>(&global, cmd).await,
        Commands::Usuarios(cmd) => resource::handle::<Usuario>(&global, cmd).await,
        Commands::Vacunas(cmd) => resource::handle::<Vacuna>(&global, cmd).await,
        Commands::Veterinarios(cmd) => resource::handle::<Veterinario>(&global, cmd).await,
    }
}

/// The stored session and an API client configured from it.
pub struct Session {
    pub auth: CliAuth,
    pub http: HttpClient,
}

impl Session {
    /// Load the session and enter `route`, failing if the guard refuses.
    pub fn enter(global: &GlobalArgs, route: Route) -> Result<Self> {
        let stored = storage::load_session().context("Failed to load session")?;
        let auth = CliAuth::new(stored);

        if let Err(redirect) = guard(route, &auth) {
            match redirect.reason {
                DenyReason::NotAuthenticated => {
                    bail!("No active session. Run 'vetclinic login' first.")
                }
                DenyReason::MissingRole => bail!(
                    "Role '{}' may not open {}",
                    auth.user_role().unwrap_or_default(),
                    route
                ),
            }
        }

        let (api, token) = match auth.session() {
            Some(s) => (Some(s.api_url.as_str()), s.token.clone()),
            None => (None, None),
        };
        let config = global.client_config(api, token)?;
        let http = HttpClient::new(config).context("Failed to create HTTP client")?;

        Ok(Self { auth, http })
    }

    /// Screen settings for the signed-in user.
    pub fn screen_config(&self, global: &GlobalArgs) -> ScreenConfig {
        ScreenConfig::default()
            .page_size(global.page_size)
            .locale(global.locale)
            .acting_user(self.auth.user_id().map(str::to_string))
    }
}
