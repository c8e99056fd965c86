//! Request handler definitions
//!
//! Define each route and its handler here.
//! Handlers that are more than a line or two MUST go into a separate module. Keep this module neat and tidy 🙏
//!
//! Handlers perform the boundary validation (presence and non-zero checks of required fields) and hand off to the
//! engine APIs. Anything long-running is expressed as a future so that worker threads are never blocked.
use actix_web::{get, web, HttpResponse, Responder};
use log::*;
use payment_gateway_engine::{
    db_types::{MerchantGroup, NewMerchant, NewTransaction, Transaction},
    traits::{MerchantManagement, TransactionManagement},
    MerchantApi,
    TransactionApi,
};

use crate::{data_objects::JsonResponse, errors::ServerError};

// Actix cannot handle generics in handlers, so the service registration is implemented manually using the `route!`
// macro. `route!(foo => Post "/foo" impl SomeTrait)` emits a `FooRoute<A>` unit struct whose `HttpServiceFactory`
// implementation registers the generic handler `foo::<A>`.
#[macro_export]
macro_rules! route {
    ($name:ident => $method:ident $path:literal impl $($bounds:ty),+) => {
        paste::paste! { pub struct [<$name:camel Route>]<A>(core::marker::PhantomData<fn() -> A>);}
        paste::paste! { impl<A> [<$name:camel Route>]<A> {
            #[allow(clippy::new_without_default)]
            pub fn new() -> Self {
                Self(core::marker::PhantomData)
            }
        }}
        paste::paste! { impl<A> actix_web::dev::HttpServiceFactory for [<$name:camel Route>]<A>
        where
            A: $($bounds +)+ 'static,
        {
            fn register(self, config: &mut actix_web::dev::AppService) {
                let res = actix_web::Resource::new($path)
                    .name(stringify!($name))
                    .guard(actix_web::guard::$method())
                    .to($name::<A>);
                actix_web::dev::HttpServiceFactory::register(res, config);
            }
        }}
    };
}

// ----------------------------------------------   Health  ----------------------------------------------------
#[get("/health")]
pub async fn health() -> impl Responder {
    trace!("💻️ Received health check request");
    HttpResponse::Ok().body("👍️\n")
}

//----------------------------------------------  Merchants  ---------------------------------------------------
route!(create_merchant => Post "/merchants" impl MerchantManagement);
/// Route handler for merchant registration.
///
/// A successful registration writes the merchant row plus its default settings row and returns the stored merchant,
/// including the assigned id, with a 201 status.
pub async fn create_merchant<B: MerchantManagement>(
    body: web::Json<NewMerchant>,
    api: web::Data<MerchantApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let merchant = body.into_inner();
    if merchant.name.is_empty() {
        return Err(ServerError::InvalidRequestBody("merchant name must not be empty".to_string()));
    }
    debug!("💻️ POST merchant [{}]", merchant.name);
    let merchant = api.register_merchant(merchant).await?;
    Ok(HttpResponse::Created().json(merchant))
}

route!(link_merchants => Post "/merchants/set_child" impl MerchantManagement);
/// Route handler for linking a merchant as an authorized child of a parent.
///
/// No authorization pre-check happens here; the edge is consulted when child-owned transactions are submitted.
pub async fn link_merchants<B: MerchantManagement>(
    body: web::Json<MerchantGroup>,
    api: web::Data<MerchantApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let group = body.into_inner();
    if group.parent_merchant_id == 0 || group.child_merchant_id == 0 {
        return Err(ServerError::InvalidRequestBody("merchant ids must be non-zero".to_string()));
    }
    debug!("💻️ POST merchant link [{group}]");
    api.link_merchants(group).await?;
    Ok(HttpResponse::Created().json(JsonResponse::success(format!("linked {group}"))))
}

//---------------------------------------------- Transactions --------------------------------------------------
route!(create_transaction => Post "/transactions" impl MerchantManagement, TransactionManagement);
/// Route handler for transaction submission.
///
/// Child-owned submissions are gated on an authorization edge; a missing edge maps to a 401 response.
pub async fn create_transaction<B: MerchantManagement + TransactionManagement>(
    body: web::Json<NewTransaction>,
    api: web::Data<TransactionApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let transaction = body.into_inner();
    if transaction.merchant_id == 0 || transaction.setting_id == 0 {
        return Err(ServerError::InvalidRequestBody("merchant id and setting id must be non-zero".to_string()));
    }
    debug!("💻️ POST transaction for merchant {}", transaction.merchant_id);
    let transaction = api.store_transaction(transaction).await?;
    Ok(HttpResponse::Created().json(transaction))
}

route!(update_transaction => Put "/transactions/{id}" impl MerchantManagement, TransactionManagement);
/// Route handler for overwriting a transaction.
///
/// The path id wins over any id present in the body. No re-authorization is performed on update.
pub async fn update_transaction<B: MerchantManagement + TransactionManagement>(
    path: web::Path<String>,
    body: web::Json<NewTransaction>,
    api: web::Data<TransactionApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let id = parse_transaction_id(&path.into_inner())?;
    let fields = body.into_inner();
    if id == 0 || fields.merchant_id == 0 || fields.setting_id == 0 {
        return Err(ServerError::InvalidRequestBody("transaction, merchant and setting ids must be non-zero".to_string()));
    }
    let transaction = Transaction {
        id,
        merchant_id: fields.merchant_id,
        parent_merchant_id: fields.parent_merchant_id,
        setting_id: fields.setting_id,
        status: fields.status,
    };
    debug!("💻️ PUT transaction {id}");
    api.update_transaction(&transaction).await?;
    Ok(HttpResponse::Ok().json(JsonResponse::success(format!("transaction {id} updated"))))
}

route!(get_transaction => Get "/transactions/{id}" impl MerchantManagement, TransactionManagement);
/// Route handler for fetching a transaction by id. A missing row maps to a 404 response.
pub async fn get_transaction<B: MerchantManagement + TransactionManagement>(
    path: web::Path<String>,
    api: web::Data<TransactionApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let id = parse_transaction_id(&path.into_inner())?;
    debug!("💻️ GET transaction {id}");
    let transaction = api.fetch_transaction(id).await?;
    Ok(HttpResponse::Ok().json(transaction))
}

// A malformed path id is indistinguishable from a path that matches no resource, so it maps to 404, not 400.
fn parse_transaction_id(raw: &str) -> Result<i64, ServerError> {
    raw.parse::<i64>().map_err(|_| ServerError::NoRecordFound(format!("transaction {raw}")))
}
