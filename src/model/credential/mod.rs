pub mod materialized_credential;
pub mod service_account_key;
