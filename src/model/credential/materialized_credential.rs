use crate::common::*;

use crate::model::credential::service_account_key::*;

#[doc = r#"
    인증 호출에 사용할 준비가 끝난 서비스 계정 인증 정보.

    base64 환경변수로부터 디코딩된 경우에는 임시 JSON 파일을 함께 소유하며,
    이 구조체가 drop 되는 시점에 임시 파일이 정확히 한 번 삭제된다.
    삭제 실패는 경고 로그만 남기고 무시한다.
"#]
#[derive(Debug)]
pub struct MaterializedCredential {
    key: ServiceAccountKey,
    temp_file: Option<NamedTempFile>,
}

impl MaterializedCredential {
    #[doc = "파일 경로에서 직접 읽어온 경우 - 임시 파일 없음"]
    pub fn from_key_file(key: ServiceAccountKey) -> Self {
        MaterializedCredential {
            key,
            temp_file: None,
        }
    }

    #[doc = "base64 디코딩 결과를 임시 파일로 구체화한 경우"]
    pub fn with_temp_file(key: ServiceAccountKey, temp_file: NamedTempFile) -> Self {
        MaterializedCredential {
            key,
            temp_file: Some(temp_file),
        }
    }

    pub fn key(&self) -> &ServiceAccountKey {
        &self.key
    }

    pub fn temp_path(&self) -> Option<&Path> {
        self.temp_file.as_ref().map(|temp_file| temp_file.path())
    }
}

impl Drop for MaterializedCredential {
    fn drop(&mut self) {
        if let Some(temp_file) = self.temp_file.take() {
            let temp_path: PathBuf = temp_file.path().to_path_buf();

            if let Err(e) = temp_file.close() {
                warn!(
                    "[MaterializedCredential->drop] Failed to delete temp credential file {:?}: {:?}",
                    temp_path, e
                );
            }
        }
    }
}
