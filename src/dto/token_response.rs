use crate::common::*;

#[doc = "OAuth2 토큰 엔드포인트의 응답 바디"]
#[derive(Debug, Clone, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}
