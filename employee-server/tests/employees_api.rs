mod common;

use axum::http::{Method, StatusCode};
use serde_json::{Value, json};

use common::{call, send_raw, json_body, test_app};

fn ana() -> Value {
    json!({
        "nombre": "Ana",
        "apellidoPaterno": "López",
        "apellidoMaterno": "Ruiz",
        "curp": "LORA900101MDFXXX01",
        "telefono": "5551234567",
        "sexo": "F",
        "estatus": 1
    })
}

#[tokio::test]
async fn create_get_delete_list_flow() {
    let app = test_app().await;

    let (status, body) = call(&app, Method::POST, "/api/empleados", Some(ana())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["statusCode"], 1);
    assert_eq!(body["message"], "Empleado guardado con éxito");
    assert_eq!(body["info"]["nombre"], "Ana");
    assert_eq!(body["info"]["apellidoPaterno"], "López");
    let id = body["info"]["id"].as_i64().unwrap();
    assert!(id > 0);

    let (status, body) = call(&app, Method::GET, "/api/empleados", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Proceso Exitoso");
    assert_eq!(body["info"].as_array().unwrap().len(), 1);

    let (status, body) = call(&app, Method::GET, &format!("/api/empleados/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["statusCode"], 1);
    assert_eq!(body["info"]["curp"], "LORA900101MDFXXX01");

    let (status, body) = call(&app, Method::DELETE, &format!("/api/empleados/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["statusCode"], 1);
    assert_eq!(body["message"], "Empleado eliminado con éxito");
    assert!(body["info"].is_null());

    // Soft-deleted rows drop out of the list but stay readable by id
    let (_, body) = call(&app, Method::GET, "/api/empleados", None).await;
    assert!(body["info"].as_array().unwrap().is_empty());

    let (status, body) = call(&app, Method::GET, &format!("/api/empleados/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["statusCode"], 1);
    assert_eq!(body["info"]["estatus"], 0);
}

#[tokio::test]
async fn every_envelope_has_a_fresh_uuid() {
    let app = test_app().await;

    let (_, first) = call(&app, Method::GET, "/api/empleados", None).await;
    let (_, second) = call(&app, Method::GET, "/api/empleados", None).await;

    let first = first["uuid"].as_str().unwrap();
    let second = second["uuid"].as_str().unwrap();
    assert_eq!(first.len(), 36);
    assert_ne!(first, second);
}

#[tokio::test]
async fn create_with_zero_id_inserts_new_row() {
    let app = test_app().await;

    let mut payload = ana();
    payload["id"] = json!(0);
    let (_, first) = call(&app, Method::POST, "/api/empleados", Some(payload.clone())).await;
    let (_, second) = call(&app, Method::POST, "/api/empleados", Some(payload)).await;

    let first_id = first["info"]["id"].as_i64().unwrap();
    let second_id = second["info"]["id"].as_i64().unwrap();
    assert!(first_id > 0);
    assert_ne!(first_id, second_id);
}

#[tokio::test]
async fn create_with_existing_id_overwrites() {
    let app = test_app().await;

    let (_, created) = call(&app, Method::POST, "/api/empleados", Some(ana())).await;
    let id = created["info"]["id"].as_i64().unwrap();

    let mut payload = ana();
    payload["id"] = json!(id);
    payload["telefono"] = json!("5550000000");
    let (status, body) = call(&app, Method::POST, "/api/empleados", Some(payload)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["info"]["id"], id);
    assert_eq!(body["info"]["telefono"], "5550000000");

    let (_, list) = call(&app, Method::GET, "/api/empleados", None).await;
    assert_eq!(list["info"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn create_without_status_defaults_to_zero() {
    let app = test_app().await;

    let (status, body) = call(
        &app,
        Method::POST,
        "/api/empleados",
        Some(json!({ "nombre": "Luis" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["info"]["estatus"], 0);
    assert!(body["info"]["curp"].is_null());

    // Not active, so not listed
    let (_, list) = call(&app, Method::GET, "/api/empleados", None).await;
    assert!(list["info"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn get_missing_employee_is_soft_not_found() {
    let app = test_app().await;

    let (status, body) = call(&app, Method::GET, "/api/empleados/999", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["statusCode"], 0);
    assert_eq!(body["message"], "Empleado no encontrado");
    assert!(body["info"].is_null());
}

#[tokio::test]
async fn update_uses_path_id() {
    let app = test_app().await;

    let (_, created) = call(&app, Method::POST, "/api/empleados", Some(ana())).await;
    let id = created["info"]["id"].as_i64().unwrap();

    let mut payload = ana();
    payload["id"] = json!(id + 100);
    payload["nombre"] = json!("Ana María");
    let (status, body) = call(&app, Method::PUT, &format!("/api/empleados/{id}"), Some(payload)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["statusCode"], 1);
    assert_eq!(body["message"], "Empleado actualizado con éxito");
    assert_eq!(body["info"]["id"], id);
    assert_eq!(body["info"]["nombre"], "Ana María");

    // The body id was ignored: no new row appeared
    let (_, stray) = call(&app, Method::GET, &format!("/api/empleados/{}", id + 100), None).await;
    assert_eq!(stray["statusCode"], 0);
}

#[tokio::test]
async fn update_rejects_non_positive_id() {
    let app = test_app().await;

    for id in ["0", "-1"] {
        let (status, body) =
            call(&app, Method::PUT, &format!("/api/empleados/{id}"), Some(ana())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["statusCode"], 0);
        assert_eq!(body["message"], "Error: El ID del empleado es inválido");
    }
}

#[tokio::test]
async fn update_missing_employee_is_404() {
    let app = test_app().await;

    let (status, body) = call(&app, Method::PUT, "/api/empleados/99", Some(ana())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["statusCode"], 0);
    assert_eq!(body["message"], "Error: Empleado con ID 99 no encontrado");
    assert!(body["info"].is_null());

    // Nothing was created
    let (_, list) = call(&app, Method::GET, "/api/empleados", None).await;
    assert!(list["info"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn delete_missing_employee_is_400() {
    let app = test_app().await;

    let (status, body) = call(&app, Method::DELETE, "/api/empleados/42", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["statusCode"], 0);
    assert_eq!(body["message"], "Error: Empleado no encontrado con ID: 42");
}

#[tokio::test]
async fn delete_twice_keeps_row_deleted() {
    let app = test_app().await;

    let (_, created) = call(&app, Method::POST, "/api/empleados", Some(ana())).await;
    let id = created["info"]["id"].as_i64().unwrap();

    for _ in 0..2 {
        let (status, _) = call(&app, Method::DELETE, &format!("/api/empleados/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, body) = call(&app, Method::GET, &format!("/api/empleados/{id}"), None).await;
    assert_eq!(body["info"]["estatus"], 0);
}

#[tokio::test]
async fn malformed_path_id_is_400_envelope() {
    let app = test_app().await;

    let (status, body) = call(&app, Method::GET, "/api/empleados/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["statusCode"], 0);
    assert!(body["message"].as_str().unwrap().starts_with("Error: "));
}

#[tokio::test]
async fn malformed_body_is_400_envelope() {
    let app = test_app().await;

    let response = send_raw(&app, Method::POST, "/api/empleados", "{\"nombre\": ").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response).await;
    assert_eq!(body["statusCode"], 0);
    assert!(body["message"].as_str().unwrap().starts_with("Error: "));
}

#[tokio::test]
async fn unknown_route_is_404_envelope() {
    let app = test_app().await;

    let (status, body) = call(&app, Method::GET, "/api/desconocido", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["statusCode"], 0);
}

#[tokio::test]
async fn unsupported_method_is_405_envelope() {
    let app = test_app().await;

    let (status, body) = call(&app, Method::PATCH, "/api/empleados/1", Some(ana())).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["statusCode"], 0);
    assert_eq!(
        body["message"],
        "Error: Método no permitido PATCH /api/empleados/1"
    );
    assert!(body["info"].is_null());
    assert_eq!(body["uuid"].as_str().unwrap().len(), 36);
}

#[tokio::test]
async fn create_with_null_status_defaults_to_zero() {
    let app = test_app().await;

    let (status, body) = call(
        &app,
        Method::POST,
        "/api/empleados",
        Some(json!({ "nombre": "Ana", "estatus": null })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["statusCode"], 1);
    assert_eq!(body["info"]["estatus"], 0);
}

#[tokio::test]
async fn negative_id_is_stored_by_create_but_refused_by_update() {
    let app = test_app().await;

    // Create only drops an id of 0; a negative id is kept as given
    let mut payload = ana();
    payload["id"] = json!(-5);
    let (status, body) = call(&app, Method::POST, "/api/empleados", Some(payload)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["info"]["id"], -5);

    let (status, body) = call(&app, Method::GET, "/api/empleados/-5", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["statusCode"], 1);
    assert_eq!(body["info"]["nombre"], "Ana");

    // Update rejects the id before looking the row up
    let (status, body) = call(&app, Method::PUT, "/api/empleados/-5", Some(ana())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Error: El ID del empleado es inválido");

    // Delete has no id check and soft-deletes it
    let (status, _) = call(&app, Method::DELETE, "/api/empleados/-5", None).await;
    assert_eq!(status, StatusCode::OK);
}
