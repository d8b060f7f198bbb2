//! Register command implementation.

use anyhow::{Context, Result};
use clap::Args;

use vetclinic_core::models::Usuario;
use vetclinic_core::nav::Route;
use vetclinic_core::{Form, Locale, Resource, ResourceClient};

use super::Session;
use super::resource::parse_assignment;
use crate::cli::GlobalArgs;
use crate::output;

/// Role given to self-registered users unless one is set explicitly.
pub const DEFAULT_ROLE: &str = "cliente";

#[derive(Args, Debug)]
pub struct RegisterArgs {
    /// User field as field=value (repeatable), e.g. nombre_usuario=lgomez
    #[arg(long = "set", value_parser = parse_assignment, required = true)]
    pub values: Vec<(String, String)>,
}

pub async fn run(global: &GlobalArgs, args: RegisterArgs) -> Result<()> {
    let session = Session::enter(global, Route::Register)?;

    let mut form = Form::for_create::<Usuario>(None);
    form.set("rol_usuario", DEFAULT_ROLE)?;
    for (field, value) in args.values {
        form.set(&field, value)?;
    }
    let payload = form
        .create_payload(Usuario::AUDITED)
        .context("Failed to register user")?;

    let usuario = session
        .http
        .resource::<Usuario>()
        .create(&payload)
        .await
        .context("Failed to register user")?;

    if global.json {
        return output::json_pretty(&usuario);
    }

    let message = match global.locale {
        Locale::Es => "Usuario registrado exitosamente",
        Locale::En => "User registered successfully",
    };
    output::success(message);
    println!();
    output::field("User ID", usuario.id_usuario.as_str());
    output::field("User", &usuario.nombre_usuario);
    output::field("Role", &usuario.rol_usuario);
    output::info(&format!(
        "Run 'vetclinic login --user-id {}' to start a session.",
        usuario.id_usuario
    ));

    Ok(())
}
