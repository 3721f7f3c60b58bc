pub mod auth_service_impl;
pub mod chart_service_impl;
pub mod credential_service_impl;
