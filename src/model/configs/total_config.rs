use crate::common::*;

use crate::model::configs::{chart_config::*, system_config::*};

use crate::utils_modules::io_utils::*;

use crate::env_configuration::env_config::*;

#[derive(Debug, Clone, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct TotalConfig {
    pub chart: ChartConfig,
    pub system: SystemConfig,
}

impl TotalConfig {
    #[doc = r#"
        `SERVER_CONFIG_PATH` 가 가리키는 TOML 파일을 읽어서 설정 구조체로 변환해주는 함수.

        설정 파일이 없거나 형식이 잘못된 경우 즉시 오류를 반환하며,
        호출 측(main)에서 치명적 오류로 처리한다.

        # Returns
        * Result<TotalConfig, anyhow::Error>
    "#]
    pub fn load() -> Result<TotalConfig, anyhow::Error> {
        read_toml_from_file::<TotalConfig>(&SERVER_CONFIG_PATH).map_err(|e| {
            anyhow!(
                "[TotalConfig->load] Failed to convert the data from '{}' into the TotalConfig structure: {:?}",
                &*SERVER_CONFIG_PATH,
                e
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_config_parses_sample_layout() {
        let toml_content = r#"
            [chart]
            title = "Damped Sine Demo"
            output_path = "simple_plot.png"
            width = 1200
            height = 600
            x_label = "x"
            y_label = "y"
            sample_count = 200

            [system]
            http_timeout_sec = 30
        "#;

        let total_config: TotalConfig = toml::from_str(toml_content).unwrap();
        assert_eq!(total_config.chart().title(), "Damped Sine Demo");
        assert_eq!(*total_config.chart().sample_count(), 200usize);
        assert_eq!(*total_config.system().http_timeout_sec(), 30u64);
    }
}
