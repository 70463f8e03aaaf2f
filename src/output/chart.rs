// Pie chart — SVG wedges for the real / suspicious / inactive breakdown.

use crate::scoring::Breakdown;

const CENTER_X: f64 = 100.0;
const CENTER_Y: f64 = 100.0;
const RADIUS: f64 = 80.0;
/// Wedges start at 12 o'clock.
const START_ANGLE: f64 = -90.0;

pub const REAL_COLOR: &str = "#10b981";
pub const SUSPICIOUS_COLOR: &str = "#f59e0b";
pub const INACTIVE_COLOR: &str = "#ef4444";

/// One wedge of the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSegment {
    pub value: u32,
    pub color: &'static str,
    /// SVG path data ("M cx cy L x1 y1 A r r 0 large 1 x2 y2 Z")
    pub path: String,
}

/// Build the wedges in order real, suspicious, inactive. Empty shares are
/// skipped.
pub fn pie_segments(breakdown: &Breakdown) -> Vec<PieSegment> {
    let data = [
        (breakdown.real, REAL_COLOR),
        (breakdown.suspicious, SUSPICIOUS_COLOR),
        (breakdown.inactive, INACTIVE_COLOR),
    ];

    let mut segments = Vec::new();
    let mut current_angle = START_ANGLE;

    for (value, color) in data {
        if value == 0 {
            continue;
        }

        let angle = f64::from(value) / 100.0 * 360.0;
        let end_angle = current_angle + angle;

        let (x1, y1) = point_on_circle(current_angle);
        let (x2, y2) = point_on_circle(end_angle);
        let large_arc = if angle > 180.0 { 1 } else { 0 };

        segments.push(PieSegment {
            value,
            color,
            path: format!(
                "M {CENTER_X} {CENTER_Y} L {x1} {y1} A {RADIUS} {RADIUS} 0 {large_arc} 1 {x2} {y2} Z"
            ),
        });

        current_angle = end_angle;
    }

    segments
}

/// Render the breakdown as a standalone SVG document.
pub fn render_svg(breakdown: &Breakdown) -> String {
    let mut svg = String::from(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"200\" height=\"200\" viewBox=\"0 0 200 200\">\n",
    );
    for segment in pie_segments(breakdown) {
        svg.push_str(&format!(
            "  <path d=\"{}\" fill=\"{}\" stroke=\"#fff\" stroke-width=\"2\"/>\n",
            segment.path, segment.color
        ));
    }
    svg.push_str("</svg>\n");
    svg
}

fn point_on_circle(degrees: f64) -> (f64, f64) {
    let radians = degrees.to_radians();
    (
        CENTER_X + RADIUS * radians.cos(),
        CENTER_Y + RADIUS * radians.sin(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_wedge_starts_at_top() {
        let segments = pie_segments(&Breakdown {
            real: 50,
            suspicious: 20,
            inactive: 30,
        });
        assert_eq!(segments.len(), 3);
        assert!(segments[0].path.starts_with("M 100 100 L 100 20 A 80 80 0 0 1 "));
    }

    #[test]
    fn test_zero_shares_are_skipped() {
        let segments = pie_segments(&Breakdown {
            real: 100,
            suspicious: 0,
            inactive: 0,
        });
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].color, REAL_COLOR);
        assert!(segments[0].path.contains(" 0 1 1 "), "full circle uses large arc");
    }
}
