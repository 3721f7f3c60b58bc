use crate::common::*;

#[doc = r#"
    업로드 파일 생성 요청의 메타데이터.

    대상 폴더가 지정되지 않은 경우 `parents` 필드 자체를 직렬화에서 제외하여
    드라이브 루트(마이 드라이브)에 업로드되도록 한다.
"#]
#[derive(Debug, Clone, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct DriveFileMeta {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parents: Option<Vec<String>>,
}

impl DriveFileMeta {
    #[doc = "아티팩트 파일명과 선택적 부모 폴더 ID 로부터 메타데이터를 구성하는 함수"]
    pub fn from_artifact(file_name: String, parent_folder_id: Option<String>) -> Self {
        DriveFileMeta::new(file_name, parent_folder_id.map(|folder_id| vec![folder_id]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parents_field_is_omitted_when_no_folder_is_given() {
        let file_meta = DriveFileMeta::from_artifact(String::from("simple_plot.png"), None);

        let serialized: Value = serde_json::to_value(&file_meta).unwrap();
        assert_eq!(serialized, json!({ "name": "simple_plot.png" }));
        assert!(serialized.get("parents").is_none());
    }

    #[test]
    fn parents_field_holds_exactly_one_entry_when_folder_is_given() {
        let file_meta = DriveFileMeta::from_artifact(
            String::from("simple_plot.png"),
            Some(String::from("folder-123")),
        );

        let serialized: Value = serde_json::to_value(&file_meta).unwrap();
        assert_eq!(
            serialized,
            json!({ "name": "simple_plot.png", "parents": ["folder-123"] })
        );
        assert_eq!(serialized["parents"].as_array().unwrap().len(), 1);
    }
}
