use actix_web::{http::StatusCode, web, web::ServiceConfig};
use payment_gateway_engine::{
    db_types::{Merchant, MerchantSettings},
    traits::MerchantApiError,
    MerchantApi,
};
use serde_json::json;

use super::helpers::post_request;
use crate::{
    endpoint_tests::mocks::MockGatewayDb,
    routes::{CreateMerchantRoute, LinkMerchantsRoute},
};

#[actix_web::test]
async fn create_merchant_assigns_an_id() {
    let _ = env_logger::try_init().ok();
    let (status, body) =
        post_request("/merchants", &json!({"name": "Acme"}), configure_happy_path).await.expect("Request failed");
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, r#"{"id":1,"name":"Acme"}"#);
}

#[actix_web::test]
async fn create_merchant_with_empty_name_is_a_bad_request() {
    let _ = env_logger::try_init().ok();
    // No expectations are set on the mock: reaching the engine would fail the test.
    let (status, body) =
        post_request("/merchants", &json!({"name": ""}), configure_untouched).await.expect("Request failed");
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, r#"{"message":"Bad request param"}"#);
}

#[actix_web::test]
async fn merchant_store_failure_is_a_generic_500() {
    let _ = env_logger::try_init().ok();
    let (status, body) =
        post_request("/merchants", &json!({"name": "Acme"}), configure_insert_fails).await.expect("Request failed");
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, r#"{"message":"Failed to proceed"}"#);
}

#[actix_web::test]
async fn settings_failure_after_merchant_insert_is_surfaced() {
    let _ = env_logger::try_init().ok();
    let (status, body) =
        post_request("/merchants", &json!({"name": "Acme"}), configure_settings_fail).await.expect("Request failed");
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, r#"{"message":"Failed to proceed"}"#);
}

#[actix_web::test]
async fn link_merchants_creates_an_edge() {
    let _ = env_logger::try_init().ok();
    let (status, body) =
        post_request("/merchants/set_child", &json!({"parentMerchantId": 1, "childMerchantId": 2}), configure_happy_path)
            .await
            .expect("Request failed");
    assert_eq!(status, StatusCode::CREATED);
    assert!(body.contains(r#""success":true"#));
}

#[actix_web::test]
async fn link_merchants_rejects_zero_ids() {
    let _ = env_logger::try_init().ok();
    let (status, body) =
        post_request("/merchants/set_child", &json!({"parentMerchantId": 0, "childMerchantId": 2}), configure_untouched)
            .await
            .expect("Request failed");
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, r#"{"message":"Bad request param"}"#);
}

fn configure_happy_path(cfg: &mut ServiceConfig) {
    let mut db = MockGatewayDb::new();
    db.expect_insert_merchant().returning(|m| Ok(Merchant { id: 1, name: m.name }));
    db.expect_init_settings().returning(|id| Ok(MerchantSettings::default_for(id)));
    db.expect_link_child().returning(|_| Ok(()));
    register(cfg, db);
}

fn configure_untouched(cfg: &mut ServiceConfig) {
    register(cfg, MockGatewayDb::new());
}

fn configure_insert_fails(cfg: &mut ServiceConfig) {
    let mut db = MockGatewayDb::new();
    db.expect_insert_merchant().returning(|_| Err(MerchantApiError::DatabaseError("no connection".into())));
    register(cfg, db);
}

fn configure_settings_fail(cfg: &mut ServiceConfig) {
    let mut db = MockGatewayDb::new();
    db.expect_insert_merchant().returning(|m| Ok(Merchant { id: 1, name: m.name }));
    db.expect_init_settings().returning(|_| Err(MerchantApiError::DatabaseError("constraint violation".into())));
    register(cfg, db);
}

fn register(cfg: &mut ServiceConfig, db: MockGatewayDb) {
    let api = MerchantApi::new(db);
    cfg.service(CreateMerchantRoute::<MockGatewayDb>::new())
        .service(LinkMerchantsRoute::<MockGatewayDb>::new())
        .app_data(web::Data::new(api));
}
