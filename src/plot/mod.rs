use tracing::debug;

/// Base style activated before the per-parameter dark overrides.
pub const DARK_PLOT_STYLE: &str = "dark_background";

/// Axes frame color for dark plots.
pub const DARK_AXES_EDGE_COLOR: PlotRgb = PlotRgb::new(0.4, 0.4, 0.4);
/// Tick label color for dark plots, both axes.
pub const DARK_TICK_LABEL_COLOR: PlotRgb = PlotRgb::new(0.56, 0.56, 0.56);

/// A plot color with channels in the 0.0 to 1.0 range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotRgb {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl PlotRgb {
    pub const fn new(red: f64, green: f64, blue: f64) -> Self {
        Self { red, green, blue }
    }
}

/// Surface a plotting backend exposes: a named base style plus keyed
/// color parameters layered on top of it.
pub trait PlotTarget {
    fn use_style(&mut self, name: &str);
    fn set_color_param(&mut self, key: &str, color: PlotRgb);
}

/// Restyle `target` for dark rendering: activate the dark base style,
/// then soften the axes frame and tick labels.
pub fn apply_dark_plot_style(target: &mut impl PlotTarget) {
    target.use_style(DARK_PLOT_STYLE);
    target.set_color_param("axes.edgecolor", DARK_AXES_EDGE_COLOR);
    target.set_color_param("xtick.color", DARK_TICK_LABEL_COLOR);
    target.set_color_param("ytick.color", DARK_TICK_LABEL_COLOR);
    debug!(style = DARK_PLOT_STYLE, "applied dark plot style");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum PlotCall {
        Style(String),
        ColorParam(String, PlotRgb),
    }

    #[derive(Default)]
    struct RecordingPlot {
        calls: Vec<PlotCall>,
    }

    impl PlotTarget for RecordingPlot {
        fn use_style(&mut self, name: &str) {
            self.calls.push(PlotCall::Style(name.to_string()));
        }

        fn set_color_param(&mut self, key: &str, color: PlotRgb) {
            self.calls.push(PlotCall::ColorParam(key.to_string(), color));
        }
    }

    #[test]
    fn dark_plot_style_activates_base_style_before_overrides() {
        let mut plot = RecordingPlot::default();
        apply_dark_plot_style(&mut plot);

        assert_eq!(
            plot.calls,
            vec![
                PlotCall::Style("dark_background".to_string()),
                PlotCall::ColorParam("axes.edgecolor".to_string(), PlotRgb::new(0.4, 0.4, 0.4)),
                PlotCall::ColorParam("xtick.color".to_string(), PlotRgb::new(0.56, 0.56, 0.56)),
                PlotCall::ColorParam("ytick.color".to_string(), PlotRgb::new(0.56, 0.56, 0.56)),
            ]
        );
    }

    #[test]
    fn tick_labels_share_one_color_on_both_axes() {
        let mut plot = RecordingPlot::default();
        apply_dark_plot_style(&mut plot);

        let tick_colors: Vec<&PlotRgb> = plot
            .calls
            .iter()
            .filter_map(|call| match call {
                PlotCall::ColorParam(key, color) if key.ends_with("tick.color") => Some(color),
                _ => None,
            })
            .collect();
        assert_eq!(tick_colors.len(), 2);
        assert_eq!(tick_colors[0], tick_colors[1]);
    }
}
