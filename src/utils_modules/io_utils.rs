use crate::common::*;

#[doc = r#"
    TOML 형식의 설정 파일을 읽어와서 지정된 구조체 타입으로 역직렬화하는 제네릭 함수.

    애플리케이션의 설정 파일(차트 설정, 시스템 설정 등)을 TOML 형식으로 관리하며,
    이 함수를 통해 타입 안전하게 구조체로 변환한다.

    1. 지정된 경로의 TOML 파일을 문자열로 읽어온다
    2. `toml::from_str()`을 사용하여 TOML 문자열을 제네릭 타입 T로 파싱
    3. 파일 읽기나 파싱 실패 시 적절한 오류 반환

    # Type Parameters
    * `T` - `DeserializeOwned` 트레이트를 구현한 구조체 타입

    # Arguments
    * `file_path` - 읽을 TOML 파일의 절대 경로 또는 상대 경로

    # Returns
    * `Result<T, anyhow::Error>` - 성공 시 파싱된 구조체, 실패 시 오류
"#]
pub fn read_toml_from_file<T: DeserializeOwned>(file_path: &str) -> Result<T, anyhow::Error> {
    let toml_content = std::fs::read_to_string(file_path)?;
    let toml: T = toml::from_str(&toml_content)?;

    Ok(toml)
}

#[doc = r#"
    구조체를 JSON Value 객체로 변환하는 제네릭 유틸리티 함수.

    업로드 메타데이터 등 API 요청 페이로드를 serde_json::Value 형태로 변환할 때 사용한다.

    # Arguments
    * `input_struct` - json 으로 변환할 구조체

    # Returns
    * `Result<Value, anyhow::Error>`
"#]
pub fn convert_json_from_struct<T: Serialize>(input_struct: &T) -> Result<Value, anyhow::Error> {
    serde_json::to_value(input_struct).map_err(|err| {
        anyhow!(
            "[Error][convert_json_from_struct()] Failed to serialize struct to JSON: {}",
            err
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct SampleConfig {
        name: String,
        count: usize,
    }

    #[test]
    fn read_toml_from_file_parses_valid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("sample.toml");
        fs::write(&file_path, "name = \"demo\"\ncount = 3\n").unwrap();

        let parsed: SampleConfig =
            read_toml_from_file(file_path.to_str().unwrap()).unwrap();
        assert_eq!(
            parsed,
            SampleConfig {
                name: String::from("demo"),
                count: 3
            }
        );
    }

    #[test]
    fn read_toml_from_file_fails_on_missing_file() {
        let result: Result<SampleConfig, anyhow::Error> =
            read_toml_from_file("no_such_config.toml");
        assert!(result.is_err());
    }
}
