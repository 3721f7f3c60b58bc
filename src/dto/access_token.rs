use crate::common::*;

#[doc = "토큰 교환 결과로 발급된 액세스 토큰"]
#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct AccessToken {
    pub value: String,
    pub expires_at: DateTime<Utc>,
}
