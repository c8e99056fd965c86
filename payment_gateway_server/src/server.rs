use std::time::Duration;

use actix_web::{dev::Server, http::KeepAlive, middleware::Logger, web, App, HttpServer};
use payment_gateway_engine::{MerchantApi, SqliteDatabase, TransactionApi};

use crate::{
    config::ServerConfig,
    errors::ServerError,
    routes::{
        health,
        CreateMerchantRoute,
        CreateTransactionRoute,
        GetTransactionRoute,
        LinkMerchantsRoute,
        UpdateTransactionRoute,
    },
};

pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    let db = SqliteDatabase::new_with_url(&config.database_url, 25)
        .await
        .map_err(|e| ServerError::InitializeError(e.to_string()))?;
    let srv = create_server_instance(config, db)?;
    srv.await.map_err(|e| ServerError::Unspecified(e.to_string()))
}

pub fn create_server_instance(config: ServerConfig, db: SqliteDatabase) -> Result<Server, ServerError> {
    let srv = HttpServer::new(move || {
        let merchants_api = MerchantApi::new(db.clone());
        let transactions_api = TransactionApi::new(db.clone());
        App::new()
            .wrap(Logger::new("%t (%D ms) %s %a %{Host}i %U").log_target("pgw::access_log"))
            .app_data(web::Data::new(merchants_api))
            .app_data(web::Data::new(transactions_api))
            .service(health)
            .service(CreateMerchantRoute::<SqliteDatabase>::new())
            .service(LinkMerchantsRoute::<SqliteDatabase>::new())
            .service(CreateTransactionRoute::<SqliteDatabase>::new())
            .service(UpdateTransactionRoute::<SqliteDatabase>::new())
            .service(GetTransactionRoute::<SqliteDatabase>::new())
    })
    .keep_alive(KeepAlive::Timeout(Duration::from_secs(600)))
    .bind((config.host.as_str(), config.port))?
    .run();
    Ok(srv)
}
