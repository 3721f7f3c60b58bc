use crate::common::*;

pub const ENV_CREDENTIALS_BASE64: &str = "GOOGLE_CREDENTIALS_BASE64";
pub const ENV_CREDENTIALS_FILE: &str = "GOOGLE_APPLICATION_CREDENTIALS";
pub const ENV_PARENT_FOLDER_ID: &str = "PARENT_FOLDER_ID";
pub const ENV_IMPERSONATE_SUBJECT: &str = "GOOGLE_IMPERSONATE_SUBJECT";

#[doc = r#"
    서버 설정 TOML 파일의 경로를 환경변수에서 읽어와 전역 변수로 초기화.

    `SERVER_CONFIG_PATH` 환경변수를 통해 TOML 형식의 설정 파일 경로를 지정받는다.
    이 파일에는 차트 설정(제목, 출력 경로, 크기 등)과 시스템 설정(HTTP 타임아웃)이 포함되어 있다.
    환경변수가 없으면 기본 경로 `config/server_config.toml` 을 사용한다.
"#]
pub static SERVER_CONFIG_PATH: once_lazy<String> = once_lazy::new(|| {
    env::var("SERVER_CONFIG_PATH").unwrap_or_else(|_| String::from("config/server_config.toml"))
});

#[doc = "서비스 계정 인증 정보의 출처 - base64 환경변수 혹은 파일 경로"]
#[derive(Debug, Clone)]
pub enum CredentialSource {
    EncodedBase64(String),
    FilePath(String),
}

#[doc = r#"
    업로드에 필요한 환경변수 묶음.

    인증에 쓰이는 값들은 비밀값이므로 TOML 설정 파일이 아닌 환경변수로만 주입받는다.
    필수값 누락/형식 오류는 네트워크 작업 이전에 `from_env()` 에서 전부 검증한다.
"#]
#[derive(Debug, Clone, Getters)]
#[getset(get = "pub")]
pub struct CredentialEnv {
    pub credential_source: CredentialSource,
    pub parent_folder_id: Option<String>,
    pub impersonate_subject: Option<String>,
}

#[doc = "환경변수를 읽어서 공백을 제거하고, 비어있으면 없는 것으로 취급하는 함수"]
fn optional_env(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}

impl CredentialEnv {
    #[doc = r#"
        환경변수로부터 인증 설정을 읽어와 검증까지 마친 뒤 반환하는 함수.

        1. `GOOGLE_CREDENTIALS_BASE64` 가 있으면 base64 인코딩된 서비스 계정 JSON 으로 사용
        2. 없으면 `GOOGLE_APPLICATION_CREDENTIALS` 경로를 사용
        3. 둘 다 없으면 즉시 오류 반환 (네트워크 작업 이전에 실패)
        4. `GOOGLE_IMPERSONATE_SUBJECT` 가 지정된 경우 이메일 형식인지 확인

        # Returns
        * Result<CredentialEnv, anyhow::Error>
    "#]
    pub fn from_env() -> Result<CredentialEnv, anyhow::Error> {
        let credential_source: CredentialSource =
            if let Some(encoded) = optional_env(ENV_CREDENTIALS_BASE64) {
                CredentialSource::EncodedBase64(encoded)
            } else if let Some(file_path) = optional_env(ENV_CREDENTIALS_FILE) {
                CredentialSource::FilePath(file_path)
            } else {
                return Err(anyhow!(
                    "[CredentialEnv->from_env] '{}' (base64-encoded service-account JSON) or '{}' (path to the JSON file) must be set.",
                    ENV_CREDENTIALS_BASE64,
                    ENV_CREDENTIALS_FILE
                ));
            };

        let impersonate_subject: Option<String> = optional_env(ENV_IMPERSONATE_SUBJECT);

        if let Some(subject) = &impersonate_subject {
            if !subject.contains('@') {
                return Err(anyhow!(
                    "[CredentialEnv->from_env] '{}' must be an email address: {}",
                    ENV_IMPERSONATE_SUBJECT,
                    subject
                ));
            }
        }

        Ok(CredentialEnv {
            credential_source,
            parent_folder_id: optional_env(ENV_PARENT_FOLDER_ID),
            impersonate_subject,
        })
    }
}
