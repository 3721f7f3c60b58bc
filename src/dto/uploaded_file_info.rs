use crate::common::*;

#[doc = "파일 생성 호출의 응답 projection - id, name, webViewLink"]
#[derive(Debug, Clone, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct UploadedFileInfo {
    pub id: String,
    pub name: String,
    #[serde(rename = "webViewLink", default)]
    pub web_view_link: Option<String>,
}
