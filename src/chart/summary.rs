//! Human-readable property listing.

use super::TrajectoryChart;
use crate::surface::DrawingSurface;
use ndarray::Array1;
use std::fmt;

fn describe(values: &Array1<f64>) -> String {
    format!("[1x{} f64]", values.len())
}

fn quoted(text: &str) -> String {
    format!("'{}'", text)
}

impl<S: DrawingSurface> TrajectoryChart<S> {
    /// Properties worth showing, in display order.
    ///
    /// Titles appear only when set. Color-data charts list the color series,
    /// limits and label; index-colored charts list their coordinates instead.
    pub fn summary(&self) -> Vec<(&'static str, String)> {
        let mut props = Vec::new();

        if !self.title.is_empty() {
            props.push(("TitleText", quoted(&self.title)));
        }
        if !self.subtitle.is_empty() {
            props.push(("SubtitleText", quoted(&self.subtitle)));
        }

        if self.c.is_empty() {
            props.push(("XData", describe(&self.x)));
            props.push(("YData", describe(&self.y)));
        } else {
            props.push(("ColorData", describe(&self.c)));
            props.push(("ColorLimits", self.color_limits().to_string()));
            props.push(("ColorbarLabel", quoted(&self.colorbar_label)));
        }

        props
    }
}

impl<S: DrawingSurface> fmt::Display for TrajectoryChart<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let props = self.summary();
        let width = props.iter().map(|(name, _)| name.len()).max().unwrap_or(0);

        writeln!(f, "TrajectoryChart with properties:")?;
        writeln!(f)?;
        for (name, value) in props {
            writeln!(f, "    {:>width$}: {}", name, value, width = width)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::chart::TrajectoryChart;
    use crate::colormap::Colormap;
    use crate::surface::CanvasSurface;

    fn names(props: &[(&'static str, String)]) -> Vec<&'static str> {
        props.iter().map(|(n, _)| *n).collect()
    }

    #[test]
    fn index_colored_lists_coordinates() {
        let chart =
            TrajectoryChart::<CanvasSurface>::from_xy(vec![1.0, 2.0], vec![3.0, 4.0]).unwrap();
        assert_eq!(names(&chart.summary()), vec!["XData", "YData"]);
    }

    #[test]
    fn color_data_lists_color_properties() {
        let mut chart = TrajectoryChart::builder()
            .data(crate::chart::ChartData::xyc(
                vec![1.0, 2.0],
                vec![3.0, 4.0],
                vec![0.25, 0.75],
            ))
            .title("Walk")
            .colorbar_label("heat")
            .build()
            .unwrap();
        chart.attach(CanvasSurface::new(Colormap::viridis()));

        let props = chart.summary();
        assert_eq!(
            names(&props),
            vec!["TitleText", "ColorData", "ColorLimits", "ColorbarLabel"]
        );
        assert_eq!(props[2].1, "[0.25 0.75]");

        let text = chart.to_string();
        assert!(text.contains("    TitleText: 'Walk'"));
        assert!(!text.contains("XData"));
    }
}
