//! SVG bar chart generation.
//!
//! Charts are assembled as plain SVG strings: horizontal bars, category
//! labels on the left, value labels at the bar ends. The economic chart is a
//! grouped variant with one Property and one Crop bar per category and a
//! small legend.

use crate::utils::error::ChartError;
use log::{debug, info};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Chart configuration
#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub title: String,
    /// Caption for the value axis (e.g. "Fatalities")
    pub value_label: String,
    pub width: usize,
    /// Decimal places shown on value labels
    pub precision: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: "Storm Impact".to_string(),
            value_label: String::new(),
            width: 900,
            precision: 0,
        }
    }
}

impl ChartConfig {
    pub fn new(title: impl Into<String>, value_label: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value_label: value_label.into(),
            ..Self::default()
        }
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }
}

// Layout constants shared by both chart variants
const LABEL_COLUMN: usize = 280;
const VALUE_GUTTER: usize = 110;
const ROW_HEIGHT: usize = 24;
const BAR_HEIGHT: usize = 16;
const HEADER_HEIGHT: usize = 40;
const FOOTER_HEIGHT: usize = 36;

const COUNT_COLOR: &str = "rgb(70, 130, 180)"; // Steel Blue
const PROPERTY_COLOR: &str = "rgb(70, 130, 180)"; // Steel Blue
const CROP_COLOR: &str = "rgb(34, 139, 34)"; // Forest Green

/// Generate a horizontal bar chart for (category, value) rows
///
/// **Public** - used for the fatalities and injuries charts
///
/// # Errors
/// * `ChartError::EmptyData` - no rows to draw
pub fn generate_bar_chart(rows: &[(String, f64)], config: &ChartConfig) -> Result<String, ChartError> {
    if rows.is_empty() {
        return Err(ChartError::EmptyData);
    }

    info!("Generating bar chart \"{}\" with {} rows", config.title, rows.len());

    let max_value = rows.iter().map(|(_, v)| *v).fold(0.0f64, f64::max).max(1.0);
    let bar_area = config.width.saturating_sub(LABEL_COLUMN + VALUE_GUTTER) as f64;
    let height = HEADER_HEIGHT + rows.len() * ROW_HEIGHT + FOOTER_HEIGHT;

    let mut svg = svg_header(config.width, height, &config.title);

    for (i, (category, value)) in rows.iter().enumerate() {
        let y = HEADER_HEIGHT + i * ROW_HEIGHT;
        render_bar(
            &mut svg,
            category,
            *value,
            max_value,
            y,
            bar_area,
            COUNT_COLOR,
            config.precision,
        );
    }

    render_axis_caption(&mut svg, config, height);

    svg.push_str("</svg>");

    debug!("Chart generated ({} bytes)", svg.len());
    Ok(svg)
}

/// Generate a grouped bar chart with two series per category
///
/// **Public** - used for the economic damage chart; `rows` carries
/// (category, first-series value, second-series value) and `series` the
/// legend labels for the two fills
pub fn generate_grouped_bar_chart(
    rows: &[(String, f64, f64)],
    series: (&str, &str),
    config: &ChartConfig,
) -> Result<String, ChartError> {
    if rows.is_empty() {
        return Err(ChartError::EmptyData);
    }

    info!(
        "Generating grouped bar chart \"{}\" with {} categories",
        config.title,
        rows.len()
    );

    let max_value = rows
        .iter()
        .flat_map(|(_, a, b)| [*a, *b])
        .fold(0.0f64, f64::max)
        .max(1.0);
    let bar_area = config.width.saturating_sub(LABEL_COLUMN + VALUE_GUTTER) as f64;
    // Two bars per category plus the legend row
    let height = HEADER_HEIGHT + rows.len() * ROW_HEIGHT * 2 + FOOTER_HEIGHT + ROW_HEIGHT;

    let mut svg = svg_header(config.width, height, &config.title);

    for (i, (category, first, second)) in rows.iter().enumerate() {
        let y = HEADER_HEIGHT + i * ROW_HEIGHT * 2;
        render_bar(
            &mut svg,
            category,
            *first,
            max_value,
            y,
            bar_area,
            PROPERTY_COLOR,
            config.precision,
        );
        // Second series row omits the category label
        render_bar(
            &mut svg,
            "",
            *second,
            max_value,
            y + ROW_HEIGHT,
            bar_area,
            CROP_COLOR,
            config.precision,
        );
    }

    render_legend(
        &mut svg,
        &[(series.0, PROPERTY_COLOR), (series.1, CROP_COLOR)],
        HEADER_HEIGHT + rows.len() * ROW_HEIGHT * 2 + 8,
    );
    render_axis_caption(&mut svg, config, height);

    svg.push_str("</svg>");

    debug!("Grouped chart generated ({} bytes)", svg.len());
    Ok(svg)
}

/// Write SVG content to a file
///
/// **Public** - shared by all chart outputs
///
/// # Errors
/// * `ChartError::IoError` - I/O error during write or directory creation
pub fn write_svg(svg_content: &str, output_path: impl AsRef<Path>) -> Result<(), ChartError> {
    let output_path = output_path.as_ref();

    info!("Writing SVG to: {}", output_path.display());

    if let Some(parent) = output_path.parent() {
        if !parent.exists() && !parent.as_os_str().is_empty() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent)?;
        }
    }

    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(svg_content.as_bytes())?;
    writer.flush()?;

    info!(
        "SVG written successfully ({:.2} KB)",
        svg_content.len() as f64 / 1024.0
    );

    Ok(())
}

fn svg_header(width: usize, height: usize, title: &str) -> String {
    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        width, height, width, height
    );

    svg.push_str(r#"<style>.bar:hover { opacity: 0.8; } text { font-family: sans-serif; }</style>"#);
    svg.push_str(&format!(
        r#"<rect x="0" y="0" width="{}" height="{}" fill="white"/>"#,
        width, height
    ));
    svg.push_str(&format!(
        r#"<text x="{}" y="24" font-size="16" text-anchor="middle" font-weight="bold">{}</text>"#,
        width / 2,
        escape_xml(title)
    ));

    svg
}

#[allow(clippy::too_many_arguments)]
fn render_bar(
    out: &mut String,
    label: &str,
    value: f64,
    max_value: f64,
    y: usize,
    bar_area: f64,
    color: &str,
    precision: usize,
) {
    let bar_width = (value / max_value) * bar_area;
    let bar_y = y + (ROW_HEIGHT - BAR_HEIGHT) / 2;
    let text_y = y + ROW_HEIGHT / 2 + 4;

    if !label.is_empty() {
        out.push_str(&format!(
            r#"<text x="{}" y="{}" font-size="12" text-anchor="end">{}</text>"#,
            LABEL_COLUMN - 8,
            text_y,
            escape_xml(&truncate_label(label, 38))
        ));
    }

    out.push_str(&format!(
        r#"<rect x="{}" y="{}" width="{:.2}" height="{}" fill="{}" class="bar"><title>{}: {:.prec$}</title></rect>"#,
        LABEL_COLUMN,
        bar_y,
        bar_width.max(1.0),
        BAR_HEIGHT,
        color,
        escape_xml(label),
        value,
        prec = precision
    ));

    out.push_str(&format!(
        r#"<text x="{:.2}" y="{}" font-size="11" fill="rgb(80, 80, 80)">{:.prec$}</text>"#,
        LABEL_COLUMN as f64 + bar_width.max(1.0) + 6.0,
        text_y,
        value,
        prec = precision
    ));
}

fn render_legend(out: &mut String, items: &[(&str, &str)], y: usize) {
    for (i, (label, color)) in items.iter().enumerate() {
        let x = LABEL_COLUMN + i * 120;
        out.push_str(&format!(
            r#"<rect x="{}" y="{}" width="14" height="14" fill="{}" rx="2"/>"#,
            x, y, color
        ));
        out.push_str(&format!(
            r#"<text x="{}" y="{}" font-size="12">{}</text>"#,
            x + 20,
            y + 12,
            escape_xml(label)
        ));
    }
}

fn render_axis_caption(out: &mut String, config: &ChartConfig, height: usize) {
    if !config.value_label.is_empty() {
        out.push_str(&format!(
            r#"<text x="{}" y="{}" font-size="13" text-anchor="middle">{}</text>"#,
            LABEL_COLUMN + (config.width - LABEL_COLUMN - VALUE_GUTTER) / 2,
            height - 10,
            escape_xml(&config.value_label)
        ));
    }
}

/// Shorten long category labels for display; tooltips keep the full name
///
/// Counts and cuts on `char` boundaries: labels are free text and may hold
/// multi-byte characters, so byte slicing is not safe here.
fn truncate_label(label: &str, max_chars: usize) -> String {
    if label.chars().count() > max_chars && max_chars > 3 {
        let kept: String = label.chars().take(max_chars - 3).collect();
        format!("{}...", kept)
    } else {
        label.to_string()
    }
}

/// Minimal XML escaping for text nodes and attributes
fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_chart_contains_rows() {
        let rows = vec![
            ("TORNADO".to_string(), 5633.0),
            ("EXCESSIVE HEAT".to_string(), 1903.0),
        ];
        let config = ChartConfig::new("Fatalities by Event Type", "Fatalities");

        let svg = generate_bar_chart(&rows, &config).unwrap();

        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains("TORNADO"));
        assert!(svg.contains("EXCESSIVE HEAT"));
        assert!(svg.contains("Fatalities by Event Type"));
    }

    #[test]
    fn test_bar_chart_empty_is_error() {
        let config = ChartConfig::default();
        let result = generate_bar_chart(&[], &config);
        assert!(matches!(result, Err(ChartError::EmptyData)));
    }

    #[test]
    fn test_grouped_chart_has_legend() {
        let rows = vec![("FLOOD".to_string(), 144.66, 5.66)];
        let config = ChartConfig::new("Economic Damage", "Billions USD").with_precision(2);

        let svg = generate_grouped_bar_chart(&rows, ("Property", "Crop"), &config).unwrap();

        assert!(svg.contains("Property"));
        assert!(svg.contains("Crop"));
        assert!(svg.contains("144.66"));
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("A & B <C>"), "A &amp; B &lt;C&gt;");
    }

    #[test]
    fn test_truncate_label() {
        assert_eq!(truncate_label("SHORT", 38), "SHORT");
        let long = "THUNDERSTORM WINDS/FLASH FLOOD WITH EXTREMELY LONG NAME";
        let truncated = truncate_label(long, 20);
        assert_eq!(truncated.chars().count(), 20);
        assert!(truncated.ends_with("..."));
    }

    #[test]
    fn test_truncate_label_multibyte() {
        // Cutting inside a multi-byte character must not panic
        let long = "É".repeat(25);
        let truncated = truncate_label(&long, 20);
        assert_eq!(truncated.chars().count(), 20);
        assert!(truncated.ends_with("..."));
        assert_eq!(truncate_label("ÉTÉ", 38), "ÉTÉ");
    }

    #[test]
    fn test_bar_chart_with_long_multibyte_label() {
        let rows = vec![("É".repeat(25), 12.0)];
        let config = ChartConfig::new("Fatalities by Event Type", "Fatalities");

        let svg = generate_bar_chart(&rows, &config).unwrap();

        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn test_write_svg_creates_parent_dirs() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested = temp_dir.path().join("charts/out.svg");

        write_svg("<svg></svg>", &nested).unwrap();

        assert!(nested.exists());
    }
}
