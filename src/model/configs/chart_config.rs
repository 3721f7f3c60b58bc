use crate::common::*;

#[doc = "차트 생성 설정 정보"]
#[derive(Debug, Clone, Deserialize, Serialize, Getters)]
#[getset(get = "pub")]
pub struct ChartConfig {
    pub title: String,
    pub output_path: String,
    pub width: u32,
    pub height: u32,
    pub x_label: String,
    pub y_label: String,
    pub sample_count: usize,
}
