//! CLI integration tests against a mock clinic API.
//!
//! Each test gets its own HOME so sessions never leak between tests or
//! into the developer's real data directory.

mod common;

use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{
    api_url, login_as, run_cli_with_env, run_cli_with_env_failure, run_cli_with_env_success,
};

fn animal(id: &str, name: &str) -> serde_json::Value {
    json!({
        "id_animal": id,
        "nombre_animal": name,
        "especie_animal": "Perro",
        "fecha_nacimiento_animal": "2020-05-01T00:00:00Z",
        "propietario_id": "p1",
        "categoria_id": "c1",
        "propietario": {"id_propietario": "p1", "nombre_completo": "Ana Ruiz"}
    })
}

// ============================================================================
// Session
// ============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn test_login_whoami_logout() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();
    let url = api_url(&server);

    login_as(home.path(), &url, "veterinario");

    let stdout = run_cli_with_env_success(&["whoami"], home.path(), &url);
    assert!(stdout.contains("lgomez"));
    assert!(stdout.contains("veterinario"));

    let stdout = run_cli_with_env_success(&["logout"], home.path(), &url);
    assert!(stdout.contains("Logged out"));

    let stderr = run_cli_with_env_failure(&["whoami"], home.path(), &url);
    assert!(stderr.contains("No active session"));
}

#[cfg(unix)]
#[tokio::test(flavor = "multi_thread")]
async fn test_session_file_is_private() {
    use std::os::unix::fs::PermissionsExt;

    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();
    login_as(home.path(), &api_url(&server), "admin");

    let file = home.path().join("data").join("vetclinic").join("session.json");
    let mode = std::fs::metadata(&file).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_login_looks_up_user() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/usuarios/u1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id_usuario": "u1",
            "primer_nombre_usuario": "Laura",
            "primer_apellido_usuario": "Gómez",
            "rol_usuario": "admin",
            "nombre_usuario": "lgomez"
        })))
        .expect(1)
        .mount(&server)
        .await;
    let home = TempDir::new().unwrap();
    let url = api_url(&server);

    run_cli_with_env_success(&["login", "--user-id", "u1"], home.path(), &url);

    let stdout = run_cli_with_env_success(&["--json", "whoami"], home.path(), &url);
    let session: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(session["role"], "admin");
    assert_eq!(session["username"], "lgomez");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_login_with_unknown_user_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/usuarios/nobody"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "Usuario no encontrado"})))
        .mount(&server)
        .await;
    let home = TempDir::new().unwrap();
    let url = api_url(&server);

    let stderr = run_cli_with_env_failure(&["login", "--user-id", "nobody"], home.path(), &url);
    assert!(stderr.contains("not found"));
}

// ============================================================================
// Navigation
// ============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn test_commands_need_a_session() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();

    let stderr = run_cli_with_env_failure(&["animales", "list"], home.path(), &api_url(&server));
    assert!(stderr.contains("vetclinic login"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_users_screen_is_admin_only() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();
    let url = api_url(&server);
    login_as(home.path(), &url, "veterinario");

    let stderr = run_cli_with_env_failure(&["usuarios", "list"], home.path(), &url);
    assert!(stderr.contains("/usuarios"));

    let stdout = run_cli_with_env_success(&["menu"], home.path(), &url);
    assert!(stdout.contains("Animales"));
    assert!(!stdout.contains("Usuarios"));
}

// ============================================================================
// Records
// ============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn test_list_prints_table_and_estimated_pages() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/animales"))
        .and(query_param("skip", "0"))
        .and(query_param("limit", "10"))
        .and(query_param("especie_animal", "Perro"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([animal("a1", "Firulais"), animal("a2", "Luna")])),
        )
        .expect(1)
        .mount(&server)
        .await;
    let home = TempDir::new().unwrap();
    let url = api_url(&server);
    login_as(home.path(), &url, "veterinario");

    let output = run_cli_with_env(
        &["animales", "list", "--filter", "especie_animal=Perro"],
        home.path(),
        &url,
    );
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("NOMBRE"));
    assert!(stdout.contains("Firulais"));
    assert!(stdout.contains("Ana Ruiz"));
    assert!(stdout.contains("2020-05-01"));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Page 1 of 1 (estimated)"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_json_output() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/animales"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [animal("a1", "Firulais")],
            "total": 1,
            "totalPages": 1
        })))
        .mount(&server)
        .await;
    let home = TempDir::new().unwrap();
    let url = api_url(&server);
    login_as(home.path(), &url, "veterinario");

    let stdout = run_cli_with_env_success(&["--json", "animales", "list"], home.path(), &url);

    let records: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(records[0]["id_animal"], "a1");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_create_with_missing_fields_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/animales"))
        .respond_with(ResponseTemplate::new(201).set_body_json(animal("a9", "Max")))
        .expect(0)
        .mount(&server)
        .await;
    let home = TempDir::new().unwrap();
    let url = api_url(&server);
    login_as(home.path(), &url, "veterinario");

    let stderr = run_cli_with_env_failure(
        &["animales", "create", "--set", "nombre_animal=Max"],
        home.path(),
        &url,
    );
    assert!(stderr.contains("especie_animal"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_create_records_the_acting_user() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/animales"))
        .and(wiremock::matchers::body_partial_json(json!({
            "nombre_animal": "Max",
            "usuario_id_creacion": "u1"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(animal("a9", "Max")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/animales"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([animal("a9", "Max")])))
        .mount(&server)
        .await;
    let home = TempDir::new().unwrap();
    let url = api_url(&server);
    login_as(home.path(), &url, "veterinario");

    let stdout = run_cli_with_env_success(
        &[
            "animales",
            "create",
            "--set",
            "nombre_animal=Max",
            "--set",
            "especie_animal=Perro",
            "--set",
            "fecha_nacimiento_animal=2021-01-01",
            "--set",
            "propietario_id=p1",
            "--set",
            "categoria_id=c1",
        ],
        home.path(),
        &url,
    );
    assert!(stdout.contains("Animal creado exitosamente"));
    assert!(stdout.contains("a9"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_get_missing_record_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/vacunas/zz"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    let home = TempDir::new().unwrap();
    let url = api_url(&server);
    login_as(home.path(), &url, "veterinario");

    let stderr = run_cli_with_env_failure(&["vacunas", "get", "zz"], home.path(), &url);
    assert!(stderr.contains("not found"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_forced_delete() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/citas/c1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id_cita": "c1",
            "fecha_inicio_cita": "2024-03-01T10:00:00",
            "fecha_final_cita": "2024-03-01T10:30:00",
            "motivo_cita": "Control",
            "animal_id": "a1",
            "veterinario_id": "v1"
        })))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/citas/c1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "mensaje": "Cita eliminada",
            "exito": true
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/citas"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    let home = TempDir::new().unwrap();
    let url = api_url(&server);
    login_as(home.path(), &url, "veterinario");

    let stdout =
        run_cli_with_env_success(&["citas", "delete", "c1", "--force"], home.path(), &url);
    assert!(stdout.contains("Cita eliminada"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_related_lists_by_foreign_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/facturas"))
        .and(query_param("cita_id", "c1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id_factura": 3,
            "monto_factura": 80000,
            "descripcion_factura": "Consulta general",
            "cita_id": "c1"
        }])))
        .expect(1)
        .mount(&server)
        .await;
    let home = TempDir::new().unwrap();
    let url = api_url(&server);
    login_as(home.path(), &url, "veterinario");

    let stdout = run_cli_with_env_success(
        &["facturas", "related", "--by", "cita_id", "c1"],
        home.path(),
        &url,
    );
    assert!(stdout.contains("Consulta general"));
    assert!(stdout.contains("80000.00"));

    let stderr = run_cli_with_env_failure(
        &["facturas", "related", "--by", "nope", "c1"],
        home.path(),
        &url,
    );
    assert!(stderr.contains("no field 'nope'"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_by_unknown_id_shows_no_records() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/citas/zz"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    let home = TempDir::new().unwrap();
    let url = api_url(&server);
    login_as(home.path(), &url, "veterinario");

    let output = run_cli_with_env(&["citas", "list", "--id", "zz"], home.path(), &url);

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No records found."));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_refused_delete_reports_the_reason() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/animales/a1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(animal("a1", "Firulais")))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/animales/a1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "mensaje": "El animal tiene citas registradas",
            "exito": false
        })))
        .expect(1)
        .mount(&server)
        .await;
    let home = TempDir::new().unwrap();
    let url = api_url(&server);
    login_as(home.path(), &url, "veterinario");

    let stderr = run_cli_with_env_failure(
        &["animales", "delete", "a1", "--force"],
        home.path(),
        &url,
    );
    assert!(stderr.contains("was not deleted"));
    assert!(stderr.contains("El animal tiene citas registradas"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_zero_page_size_is_rejected() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();

    let output = run_cli_with_env(
        &["--page-size", "0", "animales", "list"],
        home.path(),
        &api_url(&server),
    );

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--page-size"));
}

// ============================================================================
// Registration
// ============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn test_register_without_session_creates_a_client_user() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/usuarios"))
        .and(wiremock::matchers::body_partial_json(json!({
            "primer_nombre_usuario": "Laura",
            "primer_apellido_usuario": "Gómez",
            "nombre_usuario": "lgomez",
            "password": "s3creta",
            "rol_usuario": "cliente"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id_usuario": "u7",
            "primer_nombre_usuario": "Laura",
            "primer_apellido_usuario": "Gómez",
            "rol_usuario": "cliente",
            "nombre_usuario": "lgomez"
        })))
        .expect(1)
        .mount(&server)
        .await;
    let home = TempDir::new().unwrap();
    let url = api_url(&server);

    let output = run_cli_with_env(
        &[
            "register",
            "--set",
            "primer_nombre_usuario=Laura",
            "--set",
            "primer_apellido_usuario=Gómez",
            "--set",
            "nombre_usuario=lgomez",
            "--set",
            "password=s3creta",
        ],
        home.path(),
        &url,
    );

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usuario registrado exitosamente"));
    assert!(stdout.contains("cliente"));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("vetclinic login --user-id u7"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_register_without_password_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/usuarios"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;
    let home = TempDir::new().unwrap();

    let stderr = run_cli_with_env_failure(
        &[
            "register",
            "--set",
            "primer_nombre_usuario=Laura",
            "--set",
            "primer_apellido_usuario=Gómez",
            "--set",
            "nombre_usuario=lgomez",
        ],
        home.path(),
        &api_url(&server),
    );
    assert!(stderr.contains("password"));
}
