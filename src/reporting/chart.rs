//! # Chart Rendering Module / 图表渲染模块
//!
//! Draws one SVG line chart per input file: support threshold on the x-axis,
//! elapsed milliseconds on the y-axis, one line per algorithm. Only recorded
//! measurements are plotted, each at its own threshold, so a skipped cell
//! leaves a gap instead of shifting the rest of the line.
//!
//! 为每个输入文件绘制一张 SVG 折线图：x 轴为支持度阈值，y 轴为耗时毫秒数，
//! 每个算法一条线。只绘制已记录的测量值，且每个都位于其自身的阈值处，
//! 因此被跳过的单元只会留下空缺，而不会使线上其余点发生错位。

use anyhow::{Context, Result};
use plotters::prelude::*;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::config::SupportThreshold;
use crate::core::models::{FileResults, ResultsTable};
use crate::infra::t;

const CHART_SIZE: (u32, u32) = (1000, 600);

/// Renders a chart for every input file of `table` into `out_dir`.
///
/// # Returns
/// The paths of the written SVG files, in input file order.
///
/// 将 `table` 中每个输入文件的图表渲染到 `out_dir`。
///
/// # Returns
/// 已写出的 SVG 文件路径，按输入文件顺序排列。
pub fn render_charts(table: &ResultsTable, out_dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)
        .with_context(|| t!("chart.create_dir_failed", path = out_dir.display()).to_string())?;

    let mut used_names = HashSet::new();
    let mut written = Vec::with_capacity(table.files().len());

    for (index, file) in table.files().iter().enumerate() {
        let stem = chart_stem(&file.input_path);
        let mut name = stem.clone();
        let mut suffix = index + 1;
        while !used_names.insert(name.clone()) {
            name = format!("{stem}-{suffix}");
            suffix += 1;
        }

        let path = out_dir.join(format!("{name}.svg"));
        render_file_chart(file, table.thresholds(), &path)
            .with_context(|| t!("chart.render_failed", path = path.display()).to_string())?;
        written.push(path);
    }

    Ok(written)
}

fn render_file_chart(file: &FileResults, thresholds: &[SupportThreshold], path: &Path) -> Result<()> {
    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let x_max = thresholds
        .iter()
        .map(|s| s.percent())
        .fold(0.0_f64, f64::max);
    let y_max = file
        .series
        .iter()
        .flat_map(|s| s.elapsed_millis())
        .max()
        .unwrap_or(0);

    // Leave headroom so the highest point is not drawn on the frame.
    let x_range = 0.0..(x_max * 1.05).max(1.0);
    let y_range = 0.0..((y_max as f64) * 1.1).max(1.0);

    let mut chart = ChartBuilder::on(&root)
        .caption(
            t!("chart.title", path = file.input_path.display()).to_string(),
            ("sans-serif", 22),
        )
        .margin(20)
        .x_label_area_size(45)
        .y_label_area_size(70)
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .x_desc(t!("chart.x_axis"))
        .y_desc(t!("chart.y_axis"))
        .draw()?;

    for (index, series) in file.series.iter().enumerate() {
        let color = Palette99::pick(index).mix(0.9);
        let points: Vec<(f64, f64)> = series
            .measurements
            .iter()
            .filter_map(|m| {
                m.result
                    .elapsed_millis
                    .map(|ms| (m.support.percent(), ms as f64))
            })
            .collect();

        chart
            .draw_series(LineSeries::new(points.clone(), color.stroke_width(2)))?
            .label(series.algorithm.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
        chart.draw_series(points.into_iter().map(|p| Circle::new(p, 4, color.filled())))?;
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

fn chart_stem(input_path: &Path) -> String {
    let stem = input_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "input".to_string());

    stem.chars()
        .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect()
}
