//! HTML index of every known report.

use std::fmt::Write;

use crate::domain::models::ReportEntry;

const PAGE_TITLE: &str = "CompeteIQ Reports";
const EMPTY_MESSAGE: &str = "No reports yet. Run the agent to generate your first report.";

const STYLE: &str = "\
*,*::before,*::after{box-sizing:border-box;margin:0;padding:0}
body{font-family:system-ui,sans-serif;background:#f8fafc;color:#1e293b;padding:40px 20px}
.container{max-width:700px;margin:0 auto}
h1{font-size:1.8rem;font-weight:700;margin-bottom:8px}
p.sub{color:#64748b;margin-bottom:32px}
.report-card{display:flex;align-items:center;gap:12px;background:#fff;border-radius:12px;padding:18px 24px;margin-bottom:12px;text-decoration:none;color:#1e293b;box-shadow:0 1px 3px rgba(0,0,0,.08)}
.report-date{font-weight:600;font-size:1.05rem}
.badge{background:#4f46e5;color:#fff;font-size:.7rem;font-weight:600;padding:2px 10px;border-radius:99px;text-transform:uppercase}
.view-link{margin-left:auto;color:#4f46e5;font-weight:500;font-size:.9rem}
.empty{text-align:center;color:#94a3b8;margin-top:60px;font-size:1.1rem}";

/// Render the index page. `entries` must already be newest first; the
/// first entry gets the "Latest" badge.
pub fn render_index(entries: &[ReportEntry]) -> String {
    let listing = if entries.is_empty() {
        format!("<p class=\"empty\">{EMPTY_MESSAGE}</p>")
    } else {
        let mut cards = String::new();
        for (i, entry) in entries.iter().enumerate() {
            let date = escape_html(entry.date.as_str());
            let badge = if i == 0 {
                "<span class=\"badge\">Latest</span>"
            } else {
                ""
            };
            let _ = write!(
                cards,
                "\n<a href=\"/report/{date}\" class=\"report-card\" data-source=\"{source}\">\
                 <span class=\"report-date\">{date}</span>{badge}\
                 <span class=\"view-link\">View Report &rarr;</span></a>",
                source = entry.source,
            );
        }
        cards
    };

    format!(
        "<!DOCTYPE html>
<html lang=\"en\">
<head>
<meta charset=\"UTF-8\">
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">
<title>{PAGE_TITLE}</title>
<style>
{STYLE}
</style>
</head>
<body>
<div class=\"container\">
<h1>{PAGE_TITLE}</h1>
<p class=\"sub\">Competitive intelligence reports</p>
{listing}
</div>
</body>
</html>
"
    )
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
