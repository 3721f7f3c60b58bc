use crate::common::*;

use crate::env_configuration::env_config::*;
use crate::model::credential::materialized_credential::*;

#[async_trait]
pub trait CredentialService: Send + Sync {
    #[doc = "
        Turn the configured credential source into a loadable service-account key.
        The base64 variant is decoded into a scoped temporary JSON file first.
    "]
    async fn materialize_credential(
        &self,
        credential_env: &CredentialEnv,
    ) -> anyhow::Result<MaterializedCredential>;
}
