//! Chart color assignment.
//!
//! Colors are picked by position, so the same series always gets the same
//! color no matter how often or in which order charts are rendered.

/// Colors used for chart series, in assignment order.
pub const CHART_COLORS: [&str; 10] = [
    "#3B82F6", // blue
    "#10B981", // emerald
    "#F59E0B", // amber
    "#EF4444", // red
    "#8B5CF6", // violet
    "#EC4899", // pink
    "#14B8A6", // teal
    "#F97316", // orange
    "#6366F1", // indigo
    "#84CC16", // lime
];

/// Returns the chart color for the series at `index`, wrapping around.
///
/// # Example
///
/// ```
/// use timesheet_lib::palette::{CHART_COLORS, chart_color};
///
/// assert_eq!(chart_color(0), CHART_COLORS[0]);
/// assert_eq!(chart_color(CHART_COLORS.len() + 2), CHART_COLORS[2]);
/// ```
pub fn chart_color(index: usize) -> &'static str {
    CHART_COLORS[index % CHART_COLORS.len()]
}

/// Pairs each label with the color of its position.
pub fn assign_colors<'a, I>(labels: I) -> Vec<(&'a str, &'static str)>
where
    I: IntoIterator<Item = &'a str>,
{
    labels
        .into_iter()
        .enumerate()
        .map(|(i, label)| (label, chart_color(i)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assignment_is_stable() {
        let first = assign_colors(["Website", "Mobile App", "Internal"]);
        let second = assign_colors(["Website", "Mobile App", "Internal"]);
        assert_eq!(first, second);
        assert_eq!(first[1], ("Mobile App", CHART_COLORS[1]));
    }

    #[test]
    fn test_wraps() {
        for i in 0..CHART_COLORS.len() {
            assert_eq!(chart_color(i), chart_color(i + CHART_COLORS.len()));
        }
    }
}
