use crate::common::*;

use crate::dto::{access_token::*, drive_file_meta::*, uploaded_file_info::*};

use crate::traits::repository_traits::drive_repository::*;

use crate::utils_modules::io_utils::*;

pub const DRIVE_UPLOAD_ENDPOINT: &str = "https://www.googleapis.com/upload/drive/v3/files";

/* 응답 projection - 필요한 필드만 받아온다. */
const UPLOAD_RESPONSE_FIELDS: &str = "id, name, webViewLink";

#[derive(Debug, Clone, new)]
pub struct DriveRepositoryImpl {
    http_client: Client,
}

#[doc = "업로드 아티팩트의 확장자로부터 media part 의 MIME 타입을 정하는 함수"]
fn media_mime_type(file_path: &Path) -> &'static str {
    match file_path.extension().and_then(|ext| ext.to_str()) {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

#[async_trait]
impl DriveRepository for DriveRepositoryImpl {
    #[doc = "Function that EXECUTES the file-create upload call"]
    async fn upload_file(
        &self,
        access_token: &AccessToken,
        file_meta: &DriveFileMeta,
        file_path: &Path,
    ) -> anyhow::Result<UploadedFileInfo> {
        let meta_json: Value = convert_json_from_struct(file_meta)?;
        let meta_bytes: Vec<u8> = serde_json::to_vec(&meta_json)?;

        let media_bytes: Vec<u8> = tokio::fs::read(file_path).await.map_err(|e| {
            anyhow!(
                "[DriveRepositoryImpl->upload_file] Failed to read the upload artifact {:?}: {:?}",
                file_path,
                e
            )
        })?;

        let form: reqwest::multipart::Form = reqwest::multipart::Form::new()
            .part(
                "metadata",
                reqwest::multipart::Part::bytes(meta_bytes).mime_str("application/json")?,
            )
            .part(
                "media",
                reqwest::multipart::Part::bytes(media_bytes)
                    .mime_str(media_mime_type(file_path))?,
            );

        let response = self
            .http_client
            .post(DRIVE_UPLOAD_ENDPOINT)
            .query(&[
                ("uploadType", "multipart"),
                ("fields", UPLOAD_RESPONSE_FIELDS),
            ])
            .bearer_auth(access_token.value())
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                anyhow!(
                    "[DriveRepositoryImpl->upload_file] Unable to make request to the upload endpoint: {:?}",
                    e
                )
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body: String = response.text().await.unwrap_or_default();
            return Err(anyhow!(
                "[DriveRepositoryImpl->upload_file] Upload request failed with status {}: {}",
                status,
                error_body
            ));
        }

        let uploaded: UploadedFileInfo = response.json().await.map_err(|e| {
            anyhow!(
                "[DriveRepositoryImpl->upload_file] Failed to parse the upload response: {:?}",
                e
            )
        })?;

        Ok(uploaded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_mime_type_maps_known_extensions() {
        assert_eq!(media_mime_type(Path::new("simple_plot.png")), "image/png");
        assert_eq!(media_mime_type(Path::new("photo.jpeg")), "image/jpeg");
        assert_eq!(
            media_mime_type(Path::new("artifact.bin")),
            "application/octet-stream"
        );
        assert_eq!(
            media_mime_type(Path::new("no_extension")),
            "application/octet-stream"
        );
    }
}
