//! HTML suite report: rendering, writing, and a local serve mode.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use tower_http::services::ServeDir;
use tracing::info;

use crate::error::E2eResult;
use crate::runner::SuiteResult;

/// Render a self-contained HTML report for a suite run.
pub fn render_html(suite: &SuiteResult) -> String {
    let generated = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
    let mut rows = String::new();

    for result in &suite.results {
        let badge = if result.success { "pass" } else { "fail" };
        let mark = if result.success { "✓" } else { "✗" };
        let mut steps = String::new();
        for step in &result.steps {
            let step_mark = if step.success { "✓" } else { "✗" };
            let detail = step
                .error
                .as_deref()
                .map(|e| format!(" &mdash; {}", escape(e)))
                .unwrap_or_default();
            steps.push_str(&format!(
                "<li class=\"step {}\">{} {} ({} ms){}</li>\n",
                if step.success { "pass" } else { "fail" },
                step_mark,
                escape(&step.label),
                step.duration_ms,
                detail,
            ));
        }
        let error = result
            .error
            .as_deref()
            .map(|e| format!("<p class=\"error\">{}</p>", escape(e)))
            .unwrap_or_default();
        rows.push_str(&format!(
            r#"<section class="scenario {badge}">
<h2>{mark} {name} <span class="duration">{duration} ms</span></h2>
{error}
<ul>
{steps}</ul>
</section>
"#,
            badge = badge,
            mark = mark,
            name = escape(&result.name),
            duration = result.duration_ms,
            error = error,
            steps = steps,
        ));
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>DemoBank scenario report</title>
<style>
body {{ font-family: sans-serif; margin: 2rem; color: #222; }}
.summary {{ font-size: 1.1rem; }}
.scenario {{ border-left: 4px solid #ccc; padding: 0.25rem 1rem; margin: 1rem 0; }}
.scenario.pass {{ border-color: #2a8f2a; }}
.scenario.fail {{ border-color: #c0392b; }}
.step.fail {{ color: #c0392b; }}
.duration {{ color: #888; font-size: 0.8em; }}
.error {{ color: #c0392b; }}
</style>
</head>
<body>
<h1>DemoBank scenario report</h1>
<p class="summary">{passed} passed, {failed} failed of {total} ({duration} ms) &mdash; generated {generated}</p>
{rows}</body>
</html>
"#,
        passed = suite.passed,
        failed = suite.failed,
        total = suite.total,
        duration = suite.duration_ms,
        generated = generated,
        rows = rows,
    )
}

/// Write `report.html` next to the JSON results.
pub fn write(suite: &SuiteResult, output_dir: &Path) -> E2eResult<PathBuf> {
    std::fs::create_dir_all(output_dir)?;
    let path = output_dir.join("report.html");
    std::fs::write(&path, render_html(suite))?;
    info!("Report written to: {}", path.display());
    Ok(path)
}

/// Serve a results directory over HTTP until interrupted.
pub async fn serve(dir: PathBuf, port: u16) -> E2eResult<()> {
    let app = axum::Router::new().fallback_service(ServeDir::new(dir));
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Serving report at http://{}/report.html", addr);
    axum::serve(listener, app).await?;
    Ok(())
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::{ScenarioResult, StepResult};

    fn sample_suite() -> SuiteResult {
        SuiteResult {
            total: 2,
            passed: 1,
            failed: 1,
            duration_ms: 4321,
            results: vec![
                ScenarioResult {
                    name: "login-happy-path".to_string(),
                    success: true,
                    duration_ms: 1200,
                    steps: vec![StepResult {
                        label: "login as testuser".to_string(),
                        success: true,
                        duration_ms: 800,
                        error: None,
                    }],
                    error: None,
                },
                ScenarioResult {
                    name: "overdraft".to_string(),
                    success: false,
                    duration_ms: 900,
                    steps: vec![StepResult {
                        label: "expect outcome insufficient_funds".to_string(),
                        success: false,
                        duration_ms: 300,
                        error: Some("expected outcome insufficient_funds, got debited".to_string()),
                    }],
                    error: Some("expected outcome insufficient_funds, got debited".to_string()),
                },
            ],
        }
    }

    #[test]
    fn report_lists_scenarios_and_failures() {
        let html = render_html(&sample_suite());
        assert!(html.contains("login-happy-path"));
        assert!(html.contains("overdraft"));
        assert!(html.contains("1 passed, 1 failed of 2"));
        assert!(html.contains("expected outcome insufficient_funds, got debited"));
    }

    #[test]
    fn report_escapes_markup_in_messages() {
        let mut suite = sample_suite();
        suite.results[1].error = Some("got <script> text".to_string());
        let html = render_html(&suite);
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("got <script>"));
    }

    #[test]
    fn write_places_report_in_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&sample_suite(), dir.path()).unwrap();
        assert!(path.ends_with("report.html"));
        assert!(path.exists());
    }
}
