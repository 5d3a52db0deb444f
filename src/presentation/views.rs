// Page builders - compute template payloads and render them
use crate::domain::dashboard::{ChartData, Dashboard};
use crate::infrastructure::templates::{escape_html, render, Template};
use std::collections::HashMap;

const CHART_WIDTH: f64 = 640.0;
const CHART_HEIGHT: f64 = 200.0;
const CHART_PADDING: f64 = 36.0;

pub fn login_page(failed: bool) -> String {
    let error = if failed {
        r#"<div class="error">Invalid username or password</div>"#
    } else {
        ""
    };

    let mut vars = HashMap::new();
    vars.insert("error".to_string(), error.to_string());
    render(Template::Login, &vars)
}

pub fn landing_page() -> String {
    render(Template::Landing, &HashMap::new())
}

pub fn error_page(message: &str) -> String {
    let mut vars = HashMap::new();
    vars.insert("message".to_string(), escape_html(message));
    render(Template::Error, &vars)
}

pub fn charts_page(dashboard: &Dashboard) -> String {
    let charts = if dashboard.snapshot.is_empty() {
        r#"<p class="empty">No metrics recorded yet.</p>"#.to_string()
    } else {
        dashboard.charts.iter().map(chart_svg).collect::<Vec<_>>().join("\n")
    };

    let mut vars = HashMap::new();
    vars.insert("title".to_string(), escape_html(&dashboard.title));
    vars.insert("charts".to_string(), charts);
    vars.insert("table".to_string(), rows_table(dashboard));
    vars.insert("row_count".to_string(), dashboard.snapshot.rows.len().to_string());
    render(Template::Charts, &vars)
}

/// Rows in the order they were fetched (newest first).
fn rows_table(dashboard: &Dashboard) -> String {
    let snapshot = &dashboard.snapshot;
    let mut html = String::from("<table>\n<thead><tr>");
    for column in &snapshot.columns {
        html.push_str(&format!("<th>{}</th>", escape_html(column)));
    }
    html.push_str("</tr></thead>\n<tbody>\n");

    for row in &snapshot.rows {
        html.push_str("<tr class=\"metric-row\">");
        for value in &row.values {
            html.push_str(&format!("<td>{}</td>", escape_html(&value.display())));
        }
        html.push_str("</tr>\n");
    }

    html.push_str("</tbody>\n</table>");
    html
}

fn chart_svg(chart: &ChartData) -> String {
    let plot_width = CHART_WIDTH - 2.0 * CHART_PADDING;
    let plot_height = CHART_HEIGHT - 2.0 * CHART_PADDING;
    let span = chart.y_max - chart.y_min;
    let count = chart.points.len();

    let coords: Vec<(f64, f64)> = chart
        .points
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let x = if count > 1 {
                CHART_PADDING + plot_width * i as f64 / (count - 1) as f64
            } else {
                CHART_WIDTH / 2.0
            };
            let y = if span > 0.0 {
                CHART_HEIGHT - CHART_PADDING - plot_height * (point.value - chart.y_min) / span
            } else {
                CHART_HEIGHT / 2.0
            };
            (x, y)
        })
        .collect();

    let title = escape_html(&chart.title);
    let mut svg = String::new();
    svg.push_str(&format!(
        r#"<div class="chart"><h3>{title}</h3><svg viewBox="0 0 {w} {h}" role="img" aria-label="{title}">"#,
        title = title,
        w = CHART_WIDTH,
        h = CHART_HEIGHT,
    ));

    // axis labels
    svg.push_str(&format!(
        r##"<text x="2" y="{top}" font-size="11">{max}</text><text x="2" y="{bottom}" font-size="11">{min}</text>"##,
        top = CHART_PADDING,
        bottom = CHART_HEIGHT - CHART_PADDING,
        max = format_value(chart.y_max),
        min = format_value(chart.y_min),
    ));
    if let (Some(first), Some(last)) = (chart.points.first(), chart.points.last()) {
        svg.push_str(&format!(
            r##"<text x="{left}" y="{y}" font-size="11">{first}</text><text x="{right}" y="{y}" font-size="11" text-anchor="end">{last}</text>"##,
            left = CHART_PADDING,
            right = CHART_WIDTH - CHART_PADDING,
            y = CHART_HEIGHT - 8.0,
            first = escape_html(&first.label),
            last = escape_html(&last.label),
        ));
    }

    let polyline: Vec<String> = coords
        .iter()
        .map(|(x, y)| format!("{:.1},{:.1}", x, y))
        .collect();
    svg.push_str(&format!(
        r##"<polyline fill="none" stroke="#2a7ae2" stroke-width="2" points="{}"/>"##,
        polyline.join(" ")
    ));

    for ((x, y), point) in coords.iter().zip(&chart.points) {
        svg.push_str(&format!(
            r##"<circle cx="{:.1}" cy="{:.1}" r="3" fill="#2a7ae2"><title>{}: {}</title></circle>"##,
            x,
            y,
            escape_html(&point.label),
            format_value(point.value),
        ));
    }

    svg.push_str("</svg></div>");
    svg
}

fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::metrics::{MetricRow, MetricValue, MetricsSnapshot};

    fn dashboard(rows: Vec<MetricRow>) -> Dashboard {
        Dashboard::new(
            "Latest metrics".to_string(),
            MetricsSnapshot::new(vec!["timestamp".to_string(), "cpu".to_string()], rows),
        )
    }

    #[test]
    fn test_login_page_error_indicator() {
        assert!(!login_page(false).contains("Invalid username or password"));
        assert!(login_page(true).contains("Invalid username or password"));
    }

    #[test]
    fn test_charts_page_empty() {
        let page = charts_page(&Dashboard::new(
            "Latest 0 metrics".to_string(),
            MetricsSnapshot::default(),
        ));
        assert!(page.contains("No metrics recorded yet."));
        assert!(page.contains(r#"data-row-count="0""#));
        assert!(!page.contains("<svg"));
    }

    #[test]
    fn test_charts_page_rows_and_chart() {
        let page = charts_page(&dashboard(vec![
            MetricRow::new(vec![MetricValue::Integer(120), MetricValue::Real(2.5)]),
            MetricRow::new(vec![MetricValue::Integer(60), MetricValue::Real(1.0)]),
        ]));

        assert_eq!(page.matches(r#"class="metric-row""#).count(), 2);
        assert_eq!(page.matches("<svg").count(), 1);
        assert!(page.contains("<th>cpu</th>"));
        assert!(page.contains("<td>2.50</td>"));
        assert!(page.find("<td>2.50</td>").unwrap() < page.find("<td>1.00</td>").unwrap());
    }

    #[test]
    fn test_single_point_chart() {
        let page = charts_page(&dashboard(vec![MetricRow::new(vec![
            MetricValue::Integer(60),
            MetricValue::Integer(7),
        ])]));
        assert!(page.contains(r#"points="320.0,100.0""#));
    }

    #[test]
    fn test_cells_are_escaped() {
        let page = charts_page(&Dashboard::new(
            "t".to_string(),
            MetricsSnapshot::new(
                vec!["timestamp".to_string(), "<b>".to_string()],
                vec![MetricRow::new(vec![
                    MetricValue::Text("<script>".to_string()),
                    MetricValue::Integer(1),
                ])],
            ),
        ));
        assert!(!page.contains("<script>"));
        assert!(page.contains("&lt;script&gt;"));
        assert!(page.contains("<th>&lt;b&gt;</th>"));
    }

    #[test]
    fn test_error_page_escapes_message() {
        assert!(error_page("a < b").contains("a &lt; b"));
    }
}
