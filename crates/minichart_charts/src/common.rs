use minichart_core::Color;

/// Fallback slice color by index, for slices without an explicit color.
pub(crate) fn slice_color(i: usize) -> Color {
    let hues = [
        (0.35, 0.65, 1.0),
        (0.95, 0.55, 0.35),
        (0.40, 0.85, 0.55),
        (0.90, 0.75, 0.25),
        (0.75, 0.55, 0.95),
        (0.25, 0.80, 0.85),
    ];
    let (r, g, b) = hues[i % hues.len()];
    Color::rgb(r, g, b)
}
