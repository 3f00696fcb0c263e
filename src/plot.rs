//! Bar chart rendering.
//!
//! Chart contents are built as plain data ([`BarChart`]) and handed to a
//! [`Plotter`], which decides where, and whether, they are drawn.

use crate::error::{PeptideError, Result};
use crate::types::{CodonCount, HydropathyScores};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::fs;
use std::path::PathBuf;

const WIDTH: u32 = 1200;
const HEIGHT: u32 = 600;

/// Data for a single vertical bar chart
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub title: String,
    pub x_desc: String,
    pub y_desc: String,
    pub labels: Vec<String>,
    pub values: Vec<u32>,
    /// Turn x labels sideways so long or dense labels stay readable
    pub rotate_labels: bool,
}

impl BarChart {
    /// Bar chart of codon frequencies, one bar per distinct codon in first-seen order
    pub fn codon_usage(codons: &CodonCount) -> Self {
        BarChart {
            title: "Codon Usage Frequencies".into(),
            x_desc: "Codon".into(),
            y_desc: "Frequency".into(),
            labels: codons.codons().map(String::from).collect(),
            values: codons.iter().map(|(_, count)| count).collect(),
            rotate_labels: true,
        }
    }

    /// Bar chart of per-residue hydropathy scores, labelled `<residue><position>`
    pub fn hydropathy(sequence: &str, scores: &HydropathyScores) -> Self {
        BarChart {
            title: "Hydropathy Scores".into(),
            x_desc: "Residue".into(),
            y_desc: "Hydropathy Score".into(),
            labels: sequence
                .chars()
                .enumerate()
                .map(|(idx, residue)| format!("{}{}", residue, idx + 1))
                .collect(),
            values: scores.clone(),
            rotate_labels: true,
        }
    }
}

/// A rendering target for bar charts
pub trait Plotter {
    /// Renders `chart`. `name` identifies the chart to the target, e.g. as a file stem.
    fn plot(&mut self, name: &str, chart: &BarChart) -> Result<()>;
}

/// Discards every chart
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopPlotter;

impl Plotter for NoopPlotter {
    fn plot(&mut self, _name: &str, _chart: &BarChart) -> Result<()> {
        Ok(())
    }
}

/// Image file format written by [`FilePlotter`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ImageFormat {
    Png,
    Svg,
}

impl ImageFormat {
    /// File extension for this format, without the leading dot
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Svg => "svg",
        }
    }
}

/// Writes each chart to `<dir>/<name>.<format>`
#[derive(Debug, Clone)]
pub struct FilePlotter {
    dir: PathBuf,
    format: ImageFormat,
}

impl FilePlotter {
    pub fn new(dir: impl Into<PathBuf>, format: ImageFormat) -> Self {
        FilePlotter {
            dir: dir.into(),
            format,
        }
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", name, self.format.extension()))
    }
}

impl Plotter for FilePlotter {
    fn plot(&mut self, name: &str, chart: &BarChart) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(name);

        match self.format {
            ImageFormat::Png => {
                let root = BitMapBackend::new(&path, (WIDTH, HEIGHT)).into_drawing_area();
                draw_bar_chart(&root, chart)?;
            }
            ImageFormat::Svg => {
                let root = SVGBackend::new(&path, (WIDTH, HEIGHT)).into_drawing_area();
                draw_bar_chart(&root, chart)?;
            }
        }

        eprintln!("Wrote {}", path.display());
        Ok(())
    }
}

/// Upper bound of the value axis, leaving headroom above the tallest bar
fn value_axis_max(values: &[u32]) -> u32 {
    values.iter().copied().max().unwrap_or(0) + 1
}

fn draw_bar_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    chart: &BarChart,
) -> Result<()> {
    root.fill(&WHITE).map_err(PeptideError::plot)?;

    // a single empty slot keeps the segmented axis well-formed
    let slots = chart.values.len().max(1) as u32;
    let y_max = value_axis_max(&chart.values);

    let mut ctx = ChartBuilder::on(root)
        .caption(&chart.title, ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(80)
        .y_label_area_size(60)
        .build_cartesian_2d((0u32..slots).into_segmented(), 0u32..y_max)
        .map_err(PeptideError::plot)?;

    let label_font = ("sans-serif", 14).into_font();
    let label_style = if chart.rotate_labels {
        // plotters only rotates text by right angles
        label_font.transform(FontTransform::Rotate90)
    } else {
        label_font
    };

    let labels = &chart.labels;
    let formatter = |value: &SegmentValue<u32>| match value {
        SegmentValue::CenterOf(idx) => labels.get(*idx as usize).cloned().unwrap_or_default(),
        _ => String::new(),
    };

    ctx.configure_mesh()
        .disable_x_mesh()
        .x_labels(slots as usize)
        .x_label_style(label_style)
        .x_label_formatter(&formatter)
        .x_desc(chart.x_desc.as_str())
        .y_desc(chart.y_desc.as_str())
        .draw()
        .map_err(PeptideError::plot)?;

    ctx.draw_series(
        Histogram::vertical(&ctx)
            .style(BLUE.filled())
            .margin(4)
            .data(
                chart
                    .values
                    .iter()
                    .enumerate()
                    .map(|(idx, value)| (idx as u32, *value)),
            ),
    )
    .map_err(PeptideError::plot)?;

    root.present().map_err(PeptideError::plot)?;
    Ok(())
}
