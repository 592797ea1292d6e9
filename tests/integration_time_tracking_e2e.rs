use std::time::{SystemTime, UNIX_EPOCH};
use once_cell::sync::Lazy;
use serde_json::json;

// Shared test context
struct TestContext {
    client: reqwest::Client,
    base_url: String,
}

static BASE_URL: Lazy<String> = Lazy::new(|| {
    std::env::var("TEST_BASE_URL").unwrap_or_else(|_| "http://127.0.0.1:3000".to_string())
});

impl TestContext {
    fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: BASE_URL.clone(),
        }
    }

    fn get_timestamp() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs()
    }

    async fn login(&self, nombre: &str) -> serde_json::Value {
        let response = self
            .client
            .post(format!("{}/login", self.base_url))
            .json(&json!({ "nombre": nombre }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 200, "Login failed");
        response.json().await.unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[tokio::test]
    #[ignore = "requires a running server and PostgreSQL"]
    async fn test_login_is_idempotent_by_name() {
        let context = TestContext::new();
        let nombre = format!("ana_{}", TestContext::get_timestamp());

        let first = context.login(&nombre).await;
        let second = context.login(&nombre).await;

        assert_eq!(first["nombre"], nombre);
        assert_eq!(first["id"], second["id"], "Login created a duplicate user");
    }

    #[tokio::test]
    #[ignore = "requires a running server and PostgreSQL"]
    async fn test_login_requires_a_name() {
        let context = TestContext::new();

        let response = context
            .client
            .post(format!("{}/login", context.base_url))
            .json(&json!({}))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status().as_u16(), 400);
    }

    #[tokio::test]
    #[ignore = "requires a running server and PostgreSQL"]
    async fn test_clock_in_and_out_flow() {
        let context = TestContext::new();
        let nombre = format!("turnos_{}", TestContext::get_timestamp());
        let user = context.login(&nombre).await;
        let user_id = user["id"].as_str().unwrap().to_string();

        // Clock in
        let entrada = context
            .client
            .post(format!("{}/entrada", context.base_url))
            .json(&json!({ "userId": user_id }))
            .send()
            .await
            .unwrap();
        assert_eq!(entrada.status().as_u16(), 200, "Clock-in failed");
        let entrada_body: Value = entrada.json().await.unwrap();
        assert_eq!(entrada_body["success"], true);
        assert!(entrada_body["registro"]["salida"].is_null());

        // A second clock-in with the shift still open is rejected
        let doble = context
            .client
            .post(format!("{}/entrada", context.base_url))
            .json(&json!({ "userId": user_id }))
            .send()
            .await
            .unwrap();
        assert_eq!(doble.status().as_u16(), 400, "Second clock-in was allowed");

        // Clock out
        let salida = context
            .client
            .post(format!("{}/salida", context.base_url))
            .json(&json!({ "userId": user_id }))
            .send()
            .await
            .unwrap();
        assert_eq!(salida.status().as_u16(), 200, "Clock-out failed");
        let salida_body: Value = salida.json().await.unwrap();
        assert_eq!(salida_body["success"], true);
        assert!(!salida_body["registro"]["salida"].is_null());
        assert!(salida_body["minutos"].as_i64().unwrap() >= 0);

        // No open shift remains
        let sin_turno = context
            .client
            .post(format!("{}/salida", context.base_url))
            .json(&json!({ "userId": user_id }))
            .send()
            .await
            .unwrap();
        assert_eq!(sin_turno.status().as_u16(), 400);
        let error_body: Value = sin_turno.json().await.unwrap();
        assert_eq!(error_body["error"], "No hay turno activo");
    }

    #[tokio::test]
    #[ignore = "requires a running server and PostgreSQL"]
    async fn test_clock_out_without_clock_in_fails() {
        let context = TestContext::new();
        let nombre = format!("sin_turno_{}", TestContext::get_timestamp());
        let user = context.login(&nombre).await;
        let user_id = user["id"].as_str().unwrap().to_string();

        let response = context
            .client
            .post(format!("{}/salida", context.base_url))
            .json(&json!({ "userId": user_id }))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status().as_u16(), 400);
    }

    #[tokio::test]
    #[ignore = "requires a running server and PostgreSQL"]
    async fn test_weekly_counter_reports_two_decimal_hours() {
        let context = TestContext::new();
        let nombre = format!("contador_{}", TestContext::get_timestamp());
        let user = context.login(&nombre).await;
        let user_id = user["id"].as_str().unwrap().to_string();

        for _ in 0..2 {
            let entrada = context
                .client
                .post(format!("{}/entrada", context.base_url))
                .json(&json!({ "userId": user_id }))
                .send()
                .await
                .unwrap();
            assert_eq!(entrada.status().as_u16(), 200);

            let salida = context
                .client
                .post(format!("{}/salida", context.base_url))
                .json(&json!({ "userId": user_id }))
                .send()
                .await
                .unwrap();
            assert_eq!(salida.status().as_u16(), 200);
        }

        let counter = context
            .client
            .get(format!("{}/contador-semanal/{}", context.base_url, user_id))
            .send()
            .await
            .unwrap();
        assert_eq!(counter.status().as_u16(), 200);

        let body: Value = counter.json().await.unwrap();
        assert_eq!(body["userId"].as_str().unwrap(), user_id);

        let horas = body["horas"].as_str().unwrap();
        let (whole, decimals) = horas.split_once('.').expect("horas has two decimals");
        assert!(whole.parse::<u64>().is_ok());
        assert_eq!(decimals.len(), 2);
    }

    #[tokio::test]
    #[ignore = "requires a running server and PostgreSQL"]
    async fn test_invalid_user_id_is_rejected() {
        let context = TestContext::new();

        let response = context
            .client
            .get(format!("{}/contador-mensual/not-a-uuid", context.base_url))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 400);

        let response = context
            .client
            .post(format!("{}/entrada", context.base_url))
            .json(&json!({}))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 400);
    }
}
