use qrng::controller::ResultsView;
use qrng::request::GenerationRequest;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub request: &'a GenerationRequest,
    #[serde(flatten)]
    pub view: &'a ResultsView,
}

/// Terminal rendering: the numbers on one line, then the statistics panel.
pub fn render_text(request: &GenerationRequest, view: &ResultsView) -> String {
    if let Some(err) = &view.error {
        return format!("{err}\n");
    }

    let mut out = format!(
        "Measured {} number{} ({}-bit, {}):\n",
        view.entries.len(),
        if view.entries.len() == 1 { "" } else { "s" },
        request.bit_width(),
        request.format(),
    );
    out.push_str(&view.entries.join(" "));
    out.push('\n');

    if let Some(stats) = &view.statistics {
        out.push_str(&format!("Average: {}\n", stats.average_text()));
        out.push_str(&format!("Minimum: {}\n", stats.minimum));
        out.push_str(&format!("Maximum: {}\n", stats.maximum));
        out.push_str(&format!("Range:   {}\n", stats.range));
    }
    out
}

pub fn render_json(request: &GenerationRequest, view: &ResultsView) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&Report { request, view })
}
