//! Server-rendered HTML for the upload form and the results view.

use crate::api::AnalysisReport;
use crate::services::chart::escape_markup;

const STYLE: &str = r#"
body { font-family: sans-serif; margin: 2rem auto; max-width: 1100px; color: #222; }
h1 { font-size: 1.6rem; }
.counts { display: flex; gap: 1rem; margin: 1rem 0; }
.counts div { padding: .6rem 1rem; border-radius: 6px; background: #f2f2f2; }
.positive { color: #1a7f37; } .negative { color: #cf222e; } .neutral { color: #57606a; }
table.table { border-collapse: collapse; width: 100%; font-size: .9rem; }
table.table th, table.table td { border: 1px solid #ddd; padding: .4rem; text-align: left; vertical-align: top; }
table.table th { background: #f6f8fa; }
"#;

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n{body}</body>\n</html>\n",
        escape_markup(title)
    )
}

/// Upload form posting a CSV file to `/process`.
pub fn render_index() -> String {
    layout(
        "Customer Feedback Sentiment",
        r#"<h1>Customer Feedback Sentiment</h1>
<p>Upload a CSV file. The text is read from the first column named
<code>text</code>, <code>tweet</code>, <code>message</code>, <code>content</code> or
<code>description</code>, or from the first column otherwise.</p>
<form action="/process" method="post" enctype="multipart/form-data">
<input type="file" name="dataset" accept=".csv,text/csv" required>
<button type="submit">Analyze</button>
</form>
"#,
    )
}

/// Results view: sentiment counts, frequency chart and the per-row table.
pub fn render_results(
    report: &AnalysisReport,
    chart_file: &str,
    upload_name: Option<&str>,
) -> String {
    let counts = &report.sentiment_counts;
    let source = match upload_name {
        Some(name) => format!(
            "File <strong>{}</strong>, column <code>{}</code>",
            escape_markup(name),
            escape_markup(&report.text_column)
        ),
        None => format!("Column <code>{}</code>", escape_markup(&report.text_column)),
    };

    let mut body = format!(
        "<h1>Analysis results</h1>\n<p>{source}: {} of {} rows analysed.</p>\n",
        report.rows.len(),
        report.total_rows
    );

    body.push_str(&format!(
        "<div class=\"counts\"><div class=\"positive\">Positive: <strong id=\"positive\">{}</strong></div><div class=\"negative\">Negative: <strong id=\"negative\">{}</strong></div><div class=\"neutral\">Neutral: <strong id=\"neutral\">{}</strong></div></div>\n",
        counts.positive, counts.negative, counts.neutral
    ));

    body.push_str(&format!(
        "<h2>Top words</h2>\n<img src=\"/static/{}\" alt=\"Most frequent words\" width=\"800\" height=\"400\">\n",
        escape_markup(chart_file)
    ));

    body.push_str("<h2>Rows</h2>\n<table class=\"table\">\n<thead><tr class=\"head\"><th></th><th>text</th><th>cleaned_text</th><th>tokens</th><th>sentiment</th></tr></thead>\n<tbody>\n");
    for row in &report.rows {
        let tokens = row
            .tokens
            .iter()
            .map(|t| escape_markup(t))
            .collect::<Vec<_>>()
            .join(", ");
        body.push_str(&format!(
            "<tr><th>{}</th><td>{}</td><td>{}</td><td>{}</td><td class=\"{}\">{}</td></tr>\n",
            row.row,
            escape_markup(&row.text),
            escape_markup(&row.cleaned_text),
            tokens,
            row.sentiment.as_str().to_lowercase(),
            row.sentiment
        ));
    }
    body.push_str("</tbody>\n</table>\n<p><a href=\"/\">Analyze another file</a></p>\n");

    layout("Analysis results", &body)
}
