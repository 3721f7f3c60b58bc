use crate::common::*;
use crate::model::configs::chart_config::*;
use crate::traits::service_traits::chart_service::*;
use plotters::prelude::*;

/* 합성 데이터 구간: x ∈ [0, 10], y = sin(x) * exp(-x/5) */
const X_RANGE_END: f64 = 10.0;
const DAMPING_DIVISOR: f64 = 5.0;
const SERIES_LABEL: &str = "Damped sine";

#[derive(Debug, Clone, new)]
pub struct ChartServiceImpl;

impl ChartServiceImpl {
    #[doc = "감쇠 사인 곡선의 데이터 포인트를 합성해주는 함수"]
    fn synthesize_damped_sine(&self, sample_count: usize) -> Vec<(f64, f64)> {
        (0..sample_count)
            .map(|i| {
                let x: f64 = X_RANGE_END * i as f64 / (sample_count - 1) as f64;
                (x, x.sin() * (-x / DAMPING_DIVISOR).exp())
            })
            .collect()
    }

    #[doc = "Helper function to determine Y-axis range with padding"]
    fn calculate_y_range(&self, values: &[f64]) -> (f64, f64) {
        if values.is_empty() {
            return (-1.0, 1.0);
        }

        let min_val: f64 = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max_val: f64 = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let padding: f64 = ((max_val - min_val) * 0.1).max(0.05);

        (min_val - padding, max_val + padding)
    }
}

#[async_trait]
impl ChartService for ChartServiceImpl {
    async fn render_damped_sine_chart(
        &self,
        chart_config: &ChartConfig,
    ) -> anyhow::Result<PathBuf> {
        let sample_count: usize = *chart_config.sample_count();

        if sample_count < 2 {
            return Err(anyhow!(
                "[ChartServiceImpl->render_damped_sine_chart] sample_count must be at least 2: {}",
                sample_count
            ));
        }

        let output_path: PathBuf = PathBuf::from(chart_config.output_path());

        /* Create parent directory if it doesn't exist */
        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let points: Vec<(f64, f64)> = self.synthesize_damped_sine(sample_count);
        let y_values: Vec<f64> = points.iter().map(|(_, y)| *y).collect();
        let (y_min, y_max) = self.calculate_y_range(&y_values);

        let output_path_str: String = output_path.to_string_lossy().to_string();
        let title: String = chart_config.title().to_string();
        let x_label: String = chart_config.x_label().to_string();
        let y_label: String = chart_config.y_label().to_string();
        let width: u32 = *chart_config.width();
        let height: u32 = *chart_config.height();

        let handle: tokio::task::JoinHandle<Result<(), anyhow::Error>> =
            tokio::task::spawn_blocking(move || {
                /* ---- 여기부터는 동기 코드 (plotters) ---- */
                let root = BitMapBackend::new(&output_path_str, (width, height)).into_drawing_area();
                root.fill(&WHITE)?;

                let mut chart = ChartBuilder::on(&root)
                    .caption(&title, ("sans-serif", 32).into_font())
                    .margin(20)
                    .x_label_area_size(50)
                    .y_label_area_size(60)
                    .build_cartesian_2d(0f64..X_RANGE_END, y_min..y_max)?;

                chart
                    .configure_mesh()
                    .x_desc(&x_label)
                    .y_desc(&y_label)
                    .draw()?;

                chart
                    .draw_series(LineSeries::new(
                        points,
                        ShapeStyle::from(&BLUE).stroke_width(2),
                    ))?
                    .label(SERIES_LABEL)
                    .legend(|(x, y)| {
                        PathElement::new(vec![(x, y), (x + 20, y)], &BLUE)
                    });

                chart
                    .configure_series_labels()
                    .background_style(&WHITE.mix(0.8))
                    .border_style(&BLACK)
                    .draw()?;

                root.present()?;
                Ok(())
            });

        let drawing_result: Result<(), anyhow::Error> = handle.await.context(
            "[ChartServiceImpl->render_damped_sine_chart] blocking task join failed (panic/cancelled)",
        )?;

        drawing_result
            .context("[ChartServiceImpl->render_damped_sine_chart] drawing/present failed")?;

        info!("Chart image generated successfully: {:?}", output_path);

        Ok(output_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_chart_config(output_path: &Path) -> ChartConfig {
        ChartConfig {
            title: String::from("Damped Sine Demo"),
            output_path: output_path.to_string_lossy().to_string(),
            width: 640,
            height: 320,
            x_label: String::from("x"),
            y_label: String::from("y"),
            sample_count: 200,
        }
    }

    #[test]
    fn damped_sine_starts_at_zero_and_decays() {
        let chart_service = ChartServiceImpl::new();
        let points = chart_service.synthesize_damped_sine(200);

        assert_eq!(points.len(), 200);
        assert!(points[0].1.abs() < 1e-9);
        assert!((points[199].0 - 10.0).abs() < 1e-9);

        /* 감쇠 곡선이므로 마지막 포인트의 진폭은 최대 진폭보다 작아야 한다 */
        let max_amplitude: f64 = points.iter().map(|(_, y)| y.abs()).fold(0.0, f64::max);
        assert!(points[199].1.abs() < max_amplitude);
    }

    #[test]
    fn y_range_is_padded_around_the_series() {
        let chart_service = ChartServiceImpl::new();
        let (y_min, y_max) = chart_service.calculate_y_range(&[-0.5, 0.0, 1.0]);

        assert!(y_min < -0.5);
        assert!(y_max > 1.0);
    }

    #[tokio::test]
    async fn render_rejects_too_few_samples() {
        let chart_service = ChartServiceImpl::new();
        let dir = tempfile::tempdir().unwrap();
        let mut chart_config = test_chart_config(&dir.path().join("plot.png"));
        chart_config.sample_count = 1;

        let result = chart_service.render_damped_sine_chart(&chart_config).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn render_produces_exactly_one_image_at_the_configured_path() {
        let chart_service = ChartServiceImpl::new();
        let dir = tempfile::tempdir().unwrap();
        let output_path = dir.path().join("charts").join("plot.png");
        let chart_config = test_chart_config(&output_path);

        let rendered_path = chart_service
            .render_damped_sine_chart(&chart_config)
            .await
            .unwrap();

        assert_eq!(rendered_path, output_path);
        assert!(output_path.exists());
        assert!(fs::metadata(&output_path).unwrap().len() > 0);

        let entries: Vec<_> = fs::read_dir(output_path.parent().unwrap())
            .unwrap()
            .collect();
        assert_eq!(entries.len(), 1);
    }
}
