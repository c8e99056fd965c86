use mockall::mock;
use payment_gateway_engine::{
    db_types::{Merchant, MerchantGroup, MerchantSettings, NewMerchant, NewTransaction, Transaction},
    traits::{MerchantApiError, MerchantManagement, TransactionApiError, TransactionManagement},
};

mock! {
    pub GatewayDb {}
    impl MerchantManagement for GatewayDb {
        async fn insert_merchant(&self, merchant: NewMerchant) -> Result<Merchant, MerchantApiError>;
        async fn init_settings(&self, merchant_id: i64) -> Result<MerchantSettings, MerchantApiError>;
        async fn fetch_settings(&self, merchant_id: i64) -> Result<Option<MerchantSettings>, MerchantApiError>;
        async fn link_child(&self, group: MerchantGroup) -> Result<(), MerchantApiError>;
        async fn is_authorized_parent(&self, group: &MerchantGroup) -> Result<bool, MerchantApiError>;
    }
    impl TransactionManagement for GatewayDb {
        async fn fetch_transaction_by_id(&self, id: i64) -> Result<Option<Transaction>, TransactionApiError>;
        async fn insert_transaction(&self, transaction: NewTransaction) -> Result<Transaction, TransactionApiError>;
        async fn update_transaction(&self, transaction: &Transaction) -> Result<(), TransactionApiError>;
    }
}
