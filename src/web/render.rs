//! HTML rendering of the patient form and prediction results

use crate::config::DisplayConfig;
use crate::types::patient::{FieldKind, FieldSpec, PatientInput, FIELDS};
use crate::types::prediction::PredictionDisplay;
use std::fmt::Write;

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; background: #eef3f8; margin: 0; }
.main { max-width: 760px; margin: 2rem auto; background: rgba(255,255,255,0.92);
        padding: 2rem; border-radius: 12px; box-shadow: 0 4px 10px rgba(0,0,0,0.1); }
h1, h2, h3 { color: #1f2f57; }
.columns { display: flex; gap: 2rem; }
.column { flex: 1; }
.control { margin-bottom: 1rem; }
.control input[type=range] { width: 100%; }
fieldset { border: none; padding: 0; margin: 0 0 1rem 0; }
button { background-color: #1f77b4; color: white; font-weight: bold;
         border: none; border-radius: 6px; padding: 0.6rem 1.2rem; cursor: pointer; }
.success { background: #e3f6e8; color: #1b5e20; padding: 0.6rem 1rem; border-radius: 6px; }
.caption { color: #666; font-size: 0.85rem; font-style: italic; }
progress { width: 100%; }
"#;

/// Render the full page: form populated with `input`, plus results when present.
pub fn render_page(
    input: &PatientInput,
    result: Option<&PredictionDisplay>,
    config: &DisplayConfig,
) -> String {
    let title = escape(&config.title);
    let icon = |emoji: &str| if config.emoji { format!("{} ", emoji) } else { String::new() };

    let mut html = String::with_capacity(8 * 1024);
    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n<div class=\"main\">\n\
         <h1>{brain}{title}</h1>\n\
         <p>Welcome to the <strong>{title}</strong>, a tool to assist in evaluating a patient's \
         readiness for surgery.</p>\n\
         <p>{search}Enter patient details below to predict:</p>\n<ul>\n\
         <li>{check}<strong>Surgery Suitability</strong></li>\n\
         <li>{warn}<strong>Mortality Risk</strong></li>\n\
         <li>{timer}<strong>Recovery Time</strong></li>\n\
         <li>{hospital}<strong>Hospital Stay Duration</strong></li>\n</ul>\n<hr>\n",
        brain = icon("🧠"),
        search = icon("🔍"),
        check = icon("✅"),
        warn = icon("⚠️"),
        timer = icon("⏱️"),
        hospital = icon("🏥"),
    );

    render_form(&mut html, input, config);

    if let Some(result) = result {
        render_results(&mut html, result, config);
    }

    html.push_str("</div>\n</body>\n</html>\n");
    html
}

fn render_form(html: &mut String, input: &PatientInput, config: &DisplayConfig) {
    let values = input.values();
    let (left, right) = FIELDS.split_at(FIELDS.len() / 2);

    let _ = write!(
        html,
        "<form method=\"post\" action=\"/predict\">\n<h2>{}Patient Medical Information</h2>\n\
         <div class=\"columns\">\n",
        if config.emoji { "📋 " } else { "" }
    );

    for (offset, column) in [(0, left), (left.len(), right)] {
        html.push_str("<div class=\"column\">\n");
        for (i, spec) in column.iter().enumerate() {
            render_control(html, spec, values[offset + i], config.emoji);
        }
        html.push_str("</div>\n");
    }

    let _ = write!(
        html,
        "</div>\n<button type=\"submit\">{}Predict Now</button>\n</form>\n",
        if config.emoji { "🚀 " } else { "" }
    );
}

fn render_control(html: &mut String, spec: &FieldSpec, value: f64, emoji: bool) {
    let label = if emoji {
        format!("{} {}", spec.emoji, spec.label)
    } else {
        spec.label.to_string()
    };

    match spec.kind {
        FieldKind::Binary => {
            let selected = value != 0.0;
            let _ = write!(
                html,
                "<fieldset class=\"control\">\n<legend>{label}</legend>\n\
                 <label><input type=\"radio\" name=\"{name}\" value=\"0\"{no}> No</label>\n\
                 <label><input type=\"radio\" name=\"{name}\" value=\"1\"{yes}> Yes</label>\n\
                 </fieldset>\n",
                name = spec.name,
                no = if selected { "" } else { " checked" },
                yes = if selected { " checked" } else { "" },
            );
        }
        FieldKind::Integer | FieldKind::Float => {
            let value = format_value(spec, value);
            let _ = write!(
                html,
                "<div class=\"control\">\n\
                 <label for=\"{name}\">{label}: <output id=\"{name}_out\">{value}</output></label>\n\
                 <input type=\"range\" id=\"{name}\" name=\"{name}\" min=\"{min}\" max=\"{max}\" \
                 step=\"{step}\" value=\"{value}\" oninput=\"{name}_out.value = this.value\">\n\
                 </div>\n",
                name = spec.name,
                min = format_value(spec, spec.min),
                max = format_value(spec, spec.max),
                step = spec.step,
            );
        }
    }
}

fn render_results(html: &mut String, result: &PredictionDisplay, config: &DisplayConfig) {
    let icon = |emoji: &str| if config.emoji { format!("{} ", emoji) } else { String::new() };

    let _ = write!(
        html,
        "<p class=\"success\">{ok}Prediction Successful!</p>\n<hr>\n\
         <h2>{search}Prediction Results</h2>\n\
         <p><strong>Surgery Suitability:</strong> {suitability}</p>\n\
         <p><strong>Mortality Risk:</strong> {mortality}</p>\n\
         <p><strong>Estimated Recovery Time:</strong> {recovery}</p>\n\
         <p><strong>Estimated Hospital Stay:</strong> {stay}</p>\n",
        ok = icon("✅"),
        search = icon("🔎"),
        suitability = result.suitability_text,
        mortality = result.mortality_text,
        recovery = result.recovery_text,
        stay = result.stay_text,
    );

    if config.show_survival_likelihood {
        let _ = write!(
            html,
            "<p><strong>Survival Likelihood:</strong> {pct:.0}%</p>\n\
             <progress value=\"{value}\" max=\"1\"></progress>\n",
            pct = result.survival_likelihood * 100.0,
            value = result.survival_likelihood,
        );
    }

    html.push_str(
        "<hr>\n<p class=\"caption\">Note: Predictions are based on synthetic data for \
         demonstration purposes.</p>\n",
    );
}

fn format_value(spec: &FieldSpec, value: f64) -> String {
    match spec.kind {
        FieldKind::Integer | FieldKind::Binary => format!("{}", value as i64),
        FieldKind::Float => format!("{}", value),
    }
}

fn escape(text: &str) -> String {
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
