use crate::sampler::Sample;

/// One point series per finite segment, so undefined values show up as gaps
/// instead of being drawn.
pub fn segment_points(sample: &Sample<f64>) -> Vec<egui_plot::PlotPoints<'static>> {
    sample
        .finite_segments()
        .into_iter()
        .map(|segment| {
            egui_plot::PlotPoints::from(segment.iter().map(|(x, y)| [*x, *y]).collect::<Vec<_>>())
        })
        .collect()
}
