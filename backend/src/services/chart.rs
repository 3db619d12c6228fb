//! Token frequency bar chart, rendered as SVG and published to the static
//! directory.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{debug, info};
use parking_lot::Mutex;

use super::frequency::TOP_TOKEN_LIMIT;
use crate::api::TokenCount;
use crate::error::{AnalysisError, AnalysisResult};

pub const CHART_WIDTH: u32 = 800;
pub const CHART_HEIGHT: u32 = 400;

const CHART_PREFIX: &str = "plot_";
const CHART_EXTENSION: &str = ".svg";

const MARGIN_LEFT: f64 = 50.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 120.0;
const BAR_FILL: &str = "#1f77b4";
const Y_TICKS: usize = 5;

/// Escape text for inclusion in XML or HTML markup.
pub fn escape_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Integer tick values from zero to at least `max`.
fn y_ticks(max: usize) -> Vec<usize> {
    if max == 0 {
        return vec![0];
    }
    let step = max.div_ceil(Y_TICKS).max(1);
    (0..=max.div_ceil(step)).map(|i| i * step).collect()
}

/// Draw a vertical bar chart, one bar per token in the given order.
///
/// Only the first [`TOP_TOKEN_LIMIT`] tokens are drawn. Labels under the x
/// axis are rotated by 90 degrees.
pub fn render_bar_chart(tokens: &[TokenCount]) -> String {
    let tokens = &tokens[..tokens.len().min(TOP_TOKEN_LIMIT)];
    let width = f64::from(CHART_WIDTH);
    let height = f64::from(CHART_HEIGHT);
    let plot_width = width - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_height = height - MARGIN_TOP - MARGIN_BOTTOM;
    let baseline = MARGIN_TOP + plot_height;

    let ticks = y_ticks(tokens.iter().map(|t| t.count).max().unwrap_or(0));
    let y_max = ticks.last().copied().unwrap_or(0).max(1) as f64;
    let scale = |value: usize| baseline - plot_height * value as f64 / y_max;

    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{CHART_WIDTH}" height="{CHART_HEIGHT}" viewBox="0 0 {CHART_WIDTH} {CHART_HEIGHT}" font-family="sans-serif" font-size="12">"#
    );
    svg.push('\n');
    svg.push_str("<rect width=\"100%\" height=\"100%\" fill=\"white\"/>\n");

    for tick in &ticks {
        let y = scale(*tick);
        svg.push_str(&format!(
            r##"<line x1="{MARGIN_LEFT}" y1="{y:.1}" x2="{:.1}" y2="{y:.1}" stroke="#e0e0e0"/><text x="{:.1}" y="{:.1}" text-anchor="end">{tick}</text>"##,
            MARGIN_LEFT + plot_width,
            MARGIN_LEFT - 6.0,
            y + 4.0,
        ));
        svg.push('\n');
    }

    if !tokens.is_empty() {
        let slot = plot_width / tokens.len() as f64;
        let bar_width = slot * 0.8;
        for (i, entry) in tokens.iter().enumerate() {
            let x = MARGIN_LEFT + slot * i as f64 + (slot - bar_width) / 2.0;
            let top = scale(entry.count);
            let center = x + bar_width / 2.0;
            let label_y = baseline + 8.0;
            let token = escape_markup(&entry.token);
            svg.push_str(&format!(
                r#"<rect class="bar" x="{x:.1}" y="{top:.1}" width="{bar_width:.1}" height="{:.1}" fill="{BAR_FILL}"><title>{token}: {}</title></rect>"#,
                baseline - top,
                entry.count,
            ));
            svg.push('\n');
            svg.push_str(&format!(
                r#"<text x="{center:.1}" y="{label_y:.1}" text-anchor="end" dominant-baseline="middle" transform="rotate(-90 {center:.1} {label_y:.1})">{token}</text>"#
            ));
            svg.push('\n');
        }
    }

    svg.push_str(&format!(
        r#"<line x1="{MARGIN_LEFT}" y1="{baseline:.1}" x2="{:.1}" y2="{baseline:.1}" stroke="black"/>"#,
        MARGIN_LEFT + plot_width,
    ));
    svg.push('\n');
    svg.push_str(&format!(
        r#"<line x1="{MARGIN_LEFT}" y1="{MARGIN_TOP}" x2="{MARGIN_LEFT}" y2="{baseline:.1}" stroke="black"/>"#
    ));
    svg.push('\n');
    svg.push_str("</svg>\n");
    svg
}

/// Returns `true` for file names produced by [`ChartStore::publish`].
pub fn is_chart_file(name: &str) -> bool {
    name.starts_with(CHART_PREFIX) && name.ends_with(CHART_EXTENSION)
}

/// Owner of the directory holding generated charts.
///
/// Only the most recent chart is kept: publishing removes earlier ones.
#[derive(Debug, Clone)]
pub struct ChartStore {
    dir: PathBuf,
    /// Serialises clean-up and write so concurrent uploads do not interleave
    lock: Arc<Mutex<()>>,
}

impl ChartStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Render `tokens` and write the chart, replacing any previous one.
    ///
    /// Returns the file name, relative to the store directory.
    pub fn publish(&self, tokens: &[TokenCount]) -> AnalysisResult<String> {
        let _guard = self.lock.lock();

        fs::create_dir_all(&self.dir).map_err(|e| {
            AnalysisError::chart_io(format!("create {}", self.dir.display()), e)
        })?;
        let removed = self.remove_previous()?;

        let file_name = format!(
            "{CHART_PREFIX}{}{CHART_EXTENSION}",
            chrono::Utc::now().timestamp()
        );
        let path = self.dir.join(&file_name);
        fs::write(&path, render_bar_chart(tokens))
            .map_err(|e| AnalysisError::chart_io(format!("write {}", path.display()), e))?;

        info!(
            "Published chart {} ({} bars, {} old charts removed)",
            path.display(),
            tokens.len().min(TOP_TOKEN_LIMIT),
            removed
        );
        Ok(file_name)
    }

    /// Delete every chart file in the store directory.
    fn remove_previous(&self) -> AnalysisResult<usize> {
        let entries = fs::read_dir(&self.dir)
            .map_err(|e| AnalysisError::chart_io(format!("list {}", self.dir.display()), e))?;

        let mut removed = 0;
        for entry in entries {
            let entry = entry
                .map_err(|e| AnalysisError::chart_io(format!("list {}", self.dir.display()), e))?;
            let name = entry.file_name();
            let Some(name) = name.to_str() else { continue };
            if !is_chart_file(name) {
                continue;
            }
            fs::remove_file(entry.path())
                .map_err(|e| AnalysisError::chart_io(format!("remove {}", name), e))?;
            debug!("Removed old chart {}", name);
            removed += 1;
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(pairs: &[(&str, usize)]) -> Vec<TokenCount> {
        pairs
            .iter()
            .map(|(token, count)| TokenCount {
                token: token.to_string(),
                count: *count,
            })
            .collect()
    }

    fn chart_files(dir: &Path) -> Vec<String> {
        fs::read_dir(dir)
            .unwrap()
            .filter_map(|e| e.ok()?.file_name().into_string().ok())
            .filter(|n| is_chart_file(n))
            .collect()
    }

    #[test]
    fn test_render_one_bar_per_token() {
        let svg = render_bar_chart(&counts(&[("late", 3), ("refund", 2), ("agent", 1)]));
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(svg.matches(r#"class="bar""#).count(), 3);
        let late = svg.find(">late<").unwrap();
        let refund = svg.find(">refund<").unwrap();
        assert!(late < refund);
    }

    #[test]
    fn test_render_caps_bars() {
        let many: Vec<TokenCount> = (0..15)
            .map(|i| TokenCount {
                token: format!("t{i}"),
                count: 20 - i,
            })
            .collect();
        let svg = render_bar_chart(&many);
        assert_eq!(svg.matches(r#"class="bar""#).count(), TOP_TOKEN_LIMIT);
        assert!(!svg.contains(">t10<"));
    }

    #[test]
    fn test_render_emits_one_element_group_per_line() {
        let svg = render_bar_chart(&counts(&[("late", 3), ("rude", 1)]));
        let lines: Vec<&str> = svg.lines().collect();
        assert_eq!(
            lines[0],
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="800" height="400" viewBox="0 0 800 400" font-family="sans-serif" font-size="12">"#
        );
        // background, 4 ticks, 2 bars with labels, 2 axes, closing tag
        assert_eq!(lines.len(), 1 + 1 + 4 + 4 + 2 + 1);
        assert_eq!(lines.last(), Some(&"</svg>"));
        assert!(lines[1..lines.len() - 1]
            .iter()
            .all(|l| l.starts_with('<') && l.ends_with('>')));
    }

    #[test]
    fn test_render_empty_chart() {
        let svg = render_bar_chart(&[]);
        assert_eq!(svg.matches(r#"class="bar""#).count(), 0);
        assert!(svg.contains("</svg>"));
    }

    #[test]
    fn test_y_ticks() {
        assert_eq!(y_ticks(0), vec![0]);
        assert_eq!(y_ticks(3), vec![0, 1, 2, 3]);
        assert_eq!(y_ticks(10), vec![0, 2, 4, 6, 8, 10]);
        assert_eq!(y_ticks(11), vec![0, 3, 6, 9, 12]);
    }

    #[test]
    fn test_escape_markup() {
        assert_eq!(escape_markup(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
    }

    #[test]
    fn test_is_chart_file() {
        assert!(is_chart_file("plot_1700000000.svg"));
        assert!(!is_chart_file("plot_1700000000.png"));
        assert!(!is_chart_file("logo.svg"));
    }

    #[test]
    fn test_publish_replaces_previous_charts() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("plot_1.svg"), "old").unwrap();
        fs::write(dir.path().join("plot_2.svg"), "old").unwrap();
        fs::write(dir.path().join("style.css"), "keep").unwrap();

        let store = ChartStore::new(dir.path());
        let name = store.publish(&counts(&[("late", 2)])).unwrap();

        assert_eq!(chart_files(dir.path()), vec![name.clone()]);
        assert!(dir.path().join("style.css").exists());
        let content = fs::read_to_string(dir.path().join(&name)).unwrap();
        assert!(content.contains(">late<"));
    }

    #[test]
    fn test_publish_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = ChartStore::new(dir.path().join("nested").join("static"));
        let name = store.publish(&[]).unwrap();
        assert!(store.dir().join(name).exists());
    }
}
