use crate::common::*;

use crate::dto::{access_token::*, drive_file_meta::*, uploaded_file_info::*};

#[async_trait]
pub trait DriveRepository: Send + Sync {
    #[doc = "
        Upload a local file in one file-create call
        # Arguments
        * `access_token` - Bearer token for the call
        * `file_meta` - Display name and optional parent folder
        * `file_path` - Local path of the artifact to upload
    "]
    async fn upload_file(
        &self,
        access_token: &AccessToken,
        file_meta: &DriveFileMeta,
        file_path: &Path,
    ) -> anyhow::Result<UploadedFileInfo>;
}
