use crate::common::*;

use crate::model::configs::chart_config::*;

#[async_trait]
pub trait ChartService: Send + Sync {
    #[doc = "
        Synthesize the damped sine series and render it as a PNG image file
        # Arguments
        * `chart_config` - Chart title, output path, dimensions and labels

        # Returns
        * Path of the rendered image file
    "]
    async fn render_damped_sine_chart(
        &self,
        chart_config: &ChartConfig,
    ) -> anyhow::Result<PathBuf>;
}
