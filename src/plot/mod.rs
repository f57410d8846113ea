// src/plot/mod.rs

//! SVG rendering of frequency tables.
//!
//! Figures are written to disk; there is no interactive display.

use plotters::prelude::*;
use std::path::Path;
use tracing::info;

use crate::core::WalkError;
use crate::simulation::FrequencyTable;

/// Line colours for successive panels.
const PANEL_COLORS: [RGBColor; 9] = [
    RGBColor(178, 34, 34),   // firebrick
    RGBColor(255, 69, 0),    // orangered
    RGBColor(255, 215, 0),   // gold
    RGBColor(50, 205, 50),   // limegreen
    RGBColor(0, 128, 128),   // teal
    RGBColor(0, 0, 205),     // mediumblue
    RGBColor(75, 0, 130),    // indigo
    RGBColor(199, 21, 133),  // mediumvioletred
    RGBColor(220, 20, 60),   // crimson
];

const PANEL_SIZE: (u32, u32) = (320, 300);
const TITLE_HEIGHT: u32 = 50;

/// Grid of subplots: two rows, as many columns as needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub cols: usize,
}

impl GridLayout {
    /// Layout for `panels` subplots: 2 rows × ⌈panels/2⌉ columns. A single
    /// panel gets a 1×1 grid.
    pub fn for_panels(panels: usize) -> Self {
        if panels <= 1 {
            return Self { rows: 1, cols: 1 };
        }
        Self { rows: 2, cols: panels.div_ceil(2) }
    }

    /// `(row, col)` of panel `index`, filling the top row first.
    pub fn position(&self, index: usize) -> (usize, usize) {
        (index / self.cols, index % self.cols)
    }

    /// Whether panels in `row` carry the shared x label.
    pub fn is_bottom_row(&self, row: usize) -> bool {
        row + 1 == self.rows
    }

    /// Colour of panel `index`.
    pub fn color(index: usize) -> RGBColor {
        PANEL_COLORS[index % PANEL_COLORS.len()]
    }
}

fn render_err<E: std::fmt::Display>(e: E) -> WalkError {
    WalkError::Render { message: e.to_string() }
}

/// One line subplot per step count, on shared axes.
pub fn render_time_grid(table: &FrequencyTable, path: &Path, title: &str) -> Result<(), WalkError> {
    if table.is_empty() {
        return Err(WalkError::Render { message: "Frequency table has no rows to plot".to_string() });
    }
    let layout = GridLayout::for_panels(table.len());
    let size = (
        PANEL_SIZE.0 * layout.cols as u32,
        PANEL_SIZE.1 * layout.rows as u32 + TITLE_HEIGHT,
    );
    let x_max = table.outcomes().saturating_sub(1).max(1) as f64;
    let y_max = (table.max_frequency() * 1.1).max(1e-3);

    let root = SVGBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;
    let body = root.titled(title, ("sans-serif", 24)).map_err(render_err)?;
    let panels = body.split_evenly((layout.rows, layout.cols));
    let position_label = |x: &f64| format!("{:.0}", x);

    for (index, (time, freqs)) in table.iter().enumerate() {
        let (row, col) = layout.position(index);
        let mut chart = ChartBuilder::on(&panels[index])
            .caption(format!("t={}", time), ("sans-serif", 16))
            .margin(8)
            .x_label_area_size(30)
            .y_label_area_size(45)
            .build_cartesian_2d(0f64..x_max, 0f64..y_max)
            .map_err(render_err)?;

        {
            let mut mesh = chart.configure_mesh();
            mesh.x_labels(table.outcomes()).x_label_formatter(&position_label);
            if layout.is_bottom_row(row) {
                mesh.x_desc("Position");
            }
            if col == 0 {
                mesh.y_desc("Frequency");
            }
            mesh.draw().map_err(render_err)?;
        }

        let color = GridLayout::color(index);
        chart
            .draw_series(LineSeries::new(
                freqs.iter().enumerate().map(|(i, p)| (i as f64, *p)),
                &color,
            ))
            .map_err(render_err)?;
    }

    root.present().map_err(render_err)?;
    info!(path = %path.display(), panels = table.len(), "rendered frequency grid");
    Ok(())
}

/// Single bar chart of one frequency row.
pub fn render_bar_chart(frequencies: &[f64], path: &Path, title: &str) -> Result<(), WalkError> {
    if frequencies.is_empty() {
        return Err(WalkError::Render { message: "No frequencies to plot".to_string() });
    }
    let y_max = (frequencies.iter().copied().fold(0.0, f64::max) * 1.1).max(1e-3);

    let root = SVGBackend::new(path, (800, 500)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 22))
        .margin(12)
        .x_label_area_size(40)
        .y_label_area_size(55)
        .build_cartesian_2d((0usize..frequencies.len() - 1).into_segmented(), 0f64..y_max)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Bit position")
        .y_desc("Frequency")
        .draw()
        .map_err(render_err)?;

    chart
        .draw_series(
            Histogram::vertical(&chart)
                .style(GridLayout::color(5).filled())
                .margin(4)
                .data(frequencies.iter().enumerate().map(|(i, p)| (i, *p))),
        )
        .map_err(render_err)?;

    root.present().map_err(render_err)?;
    info!(path = %path.display(), bars = frequencies.len(), "rendered bar chart");
    Ok(())
}
