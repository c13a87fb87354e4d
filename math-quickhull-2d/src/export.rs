//! Export functions for convex hulls

use crate::types::ConvexHull2D;
use plotly::{
    Layout, Plot, Scatter,
    common::{Line, Marker, MarkerSymbol, Mode, Title},
    layout::Axis,
};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Colours cycled over the input points
const POINT_PALETTE: [&str; 5] = ["magenta", "green", "blue", "gold", "black"];

const HULL_COLOR: &str = "red";

/// Build a Plotly figure of the input points and the closed hull boundary
pub fn hull_plot(hull: &ConvexHull2D, title: &str) -> Plot {
    let mut plot = Plot::new();

    let x_points: Vec<f64> = hull.points().iter().map(|p| p.x).collect();
    let y_points: Vec<f64> = hull.points().iter().map(|p| p.y).collect();
    let colors: Vec<&str> = (0..x_points.len())
        .map(|i| POINT_PALETTE[i % POINT_PALETTE.len()])
        .collect();

    let points_trace = Scatter::new(x_points, y_points)
        .mode(Mode::Markers)
        .name("Points")
        .marker(
            Marker::new()
                .color_array(colors)
                .size(6)
                .symbol(MarkerSymbol::Circle),
        );
    plot.add_trace(points_trace);

    // Close the polygon by joining the last vertex back to the first
    let mut boundary = hull.vertices().to_vec();
    if let Some(first) = hull.vertices().first() {
        boundary.push(*first);
    }
    let x_hull: Vec<f64> = boundary.iter().map(|p| p.x).collect();
    let y_hull: Vec<f64> = boundary.iter().map(|p| p.y).collect();

    let hull_name = format!("Hull ({} vertices)", hull.num_vertices());
    let hull_trace = Scatter::new(x_hull, y_hull)
        .mode(Mode::LinesMarkers)
        .name(hull_name.as_str())
        .line(Line::new().color(HULL_COLOR).width(2.0))
        .marker(Marker::new().color(HULL_COLOR).size(8));
    plot.add_trace(hull_trace);

    let layout = Layout::new()
        .title(Title::with_text(format!(
            "{} (area {:.3}, perimeter {:.3})",
            title,
            hull.area(),
            hull.perimeter()
        )))
        .x_axis(
            Axis::new()
                .title(Title::with_text("X"))
                .show_grid(true)
                .grid_color("lightgray"),
        )
        .y_axis(
            Axis::new()
                .title(Title::with_text("Y"))
                .show_grid(true)
                .grid_color("lightgray"),
        );
    plot.set_layout(layout);

    plot
}

/// Export a convex hull to a standalone HTML page with a Plotly chart
pub fn export_html<P: AsRef<Path>>(
    hull: &ConvexHull2D,
    path: P,
    title: &str,
) -> std::io::Result<()> {
    let plot = hull_plot(hull, title);
    fs::write(path, plot.to_html())
}

/// Export the input points and hull vertices to JSON
pub fn export_json<P: AsRef<Path>>(hull: &ConvexHull2D, path: P) -> crate::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, hull)?;
    writer.flush()?;
    Ok(())
}
