use crate::common::*;

use crate::dto::access_token::*;
use crate::model::credential::materialized_credential::*;

#[async_trait]
pub trait AuthService: Send + Sync {
    #[doc = "
        Exchange a signed JWT assertion for an OAuth2 access token
        # Arguments
        * `credential` - Materialized service-account credential
        * `impersonate_subject` - Optional delegated-subject email
    "]
    async fn issue_access_token(
        &self,
        credential: &MaterializedCredential,
        impersonate_subject: Option<&str>,
    ) -> anyhow::Result<AccessToken>;
}
