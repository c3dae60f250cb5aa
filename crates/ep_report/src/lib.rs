//! ep_report — Pure offline report model + renderers (JSON/HTML).
//!
//! Determinism rules:
//! - No network, no I/O here. Callers supply the scoring result in-memory.
//! - Stable section order and field names.
//! - Renderers are feature-gated (`render_json` default, `render_html`
//!   optional) so the CLI links only what it emits.

#![deny(unsafe_code)]

use ep_core::Elective;
use ep_pipeline::ScoringResult;

// ===== Errors =====

#[derive(Debug)]
pub enum ReportError {
    Template(&'static str),
}

impl core::fmt::Display for ReportError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ReportError::Template(stage) => write!(f, "template error: {stage}"),
        }
    }
}

impl std::error::Error for ReportError {}

// ===== Model =====

#[cfg_attr(feature = "render_json", derive(serde::Serialize))]
#[derive(Clone, Debug)]
pub struct ReportModel {
    pub recommendation: SectionRecommendation,
    pub scores: Vec<ScoreRow>,
    pub top_traits: Vec<TraitRow>,
    pub reasoning: Vec<String>,
}

#[cfg_attr(feature = "render_json", derive(serde::Serialize))]
#[derive(Clone, Debug)]
pub struct SectionRecommendation {
    /// "resolved" | "tiebreak_required"
    pub status: String,
    pub track: Option<String>,
    pub track_label: Option<String>,
    pub confidence: u32,
    /// "high" | "moderate" | "low" | "none"
    pub confidence_band: String,
    pub gap: u32,
}

#[cfg_attr(feature = "render_json", derive(serde::Serialize))]
#[derive(Clone, Debug)]
pub struct ScoreRow {
    pub code: String,
    pub label: String,
    pub normalized: u32,
    pub raw: f64,
    pub direct: f64,
}

#[cfg_attr(feature = "render_json", derive(serde::Serialize))]
#[derive(Clone, Debug)]
pub struct TraitRow {
    pub code: String,
    pub name: String,
    pub score: u32,
}

// ===== API =====

/// Build the report model from a scoring result (pure, offline).
pub fn build_model(result: &ScoringResult) -> ReportModel {
    let recommendation = SectionRecommendation {
        status: if result.requires_tiebreaker { "tiebreak_required" } else { "resolved" }
            .to_string(),
        track: result.recommended.map(|e| e.code().to_string()),
        track_label: result.recommended.map(|e| e.label().to_string()),
        confidence: result.confidence,
        confidence_band: confidence_band(result.requires_tiebreaker, result.confidence)
            .to_string(),
        gap: result.gap,
    };

    let scores = Elective::ALL
        .into_iter()
        .map(|elective| ScoreRow {
            code: elective.code().to_string(),
            label: elective.label().to_string(),
            normalized: result.elective_scores.get(elective),
            raw: result.raw_scores.get(elective),
            direct: result.direct_scores.get(elective),
        })
        .collect();

    let top_traits = result
        .top_traits
        .iter()
        .map(|t| TraitRow {
            code: t.trait_code.letter().to_string(),
            name: t.name.clone(),
            score: t.score,
        })
        .collect();

    ReportModel {
        recommendation,
        scores,
        top_traits,
        reasoning: result.reasoning.clone(),
    }
}

/// Qualitative wording for the confidence value (gap-driven upstream).
fn confidence_band(requires_tiebreaker: bool, confidence: u32) -> &'static str {
    if requires_tiebreaker {
        "none"
    } else if confidence >= 90 {
        "high"
    } else if confidence >= 70 {
        "moderate"
    } else {
        "low"
    }
}

// ===== Renderers =====

/// Serialize the model as JSON (field order follows struct layout).
#[cfg(feature = "render_json")]
pub fn render_json(model: &ReportModel) -> Result<String, ReportError> {
    serde_json::to_string(model).map_err(|_| ReportError::Template("json_serialize"))
}

/// Render a compact HTML summary from an embedded template (no external
/// assets).
#[cfg(feature = "render_html")]
pub fn render_html(model: &ReportModel) -> Result<String, ReportError> {
    use minijinja::{context, Environment};

    static TEMPLATE: &str = r#"<!doctype html>
<html lang="en"><meta charset="utf-8">
<title>Elective Recommendation</title>
<h1>Elective Recommendation</h1>
{% if rec.status == "resolved" %}
<p><strong>Recommended:</strong> {{ rec.track_label }} ({{ rec.track }}) —
confidence {{ rec.confidence }}% ({{ rec.band }})</p>
{% else %}
<p><strong>No clear winner yet.</strong> Interests are evenly distributed;
a tiebreaker choice is required.</p>
{% endif %}

<h2>Scores</h2>
<ul>
{% for row in scores %}
  <li>{{ row.label }}: {{ row.normalized }} (raw {{ row.raw }}, direct {{ row.direct }})</li>
{% endfor %}
</ul>

<h2>Top traits</h2>
<ol>
{% for t in traits %}
  <li>{{ t.name }} — {{ t.score }}</li>
{% endfor %}
</ol>

{% if reasoning %}
<h2>Why</h2>
<ul>
{% for sentence in reasoning %}
  <li>{{ sentence }}</li>
{% endfor %}
</ul>
{% endif %}
</html>
"#;

    let mut env = Environment::new();
    env.add_template("report.html", TEMPLATE)
        .map_err(|_| ReportError::Template("add_template"))?;
    let tmpl = env.get_template("report.html").map_err(|_| ReportError::Template("get_template"))?;

    let ctx = context! {
        rec => context! {
            status => model.recommendation.status.clone(),
            track => model.recommendation.track.clone(),
            track_label => model.recommendation.track_label.clone(),
            confidence => model.recommendation.confidence,
            band => model.recommendation.confidence_band.clone(),
        },
        scores => model
            .scores
            .iter()
            .map(|row| context! {
                label => row.label.clone(),
                normalized => row.normalized,
                raw => row.raw,
                direct => row.direct,
            })
            .collect::<Vec<_>>(),
        traits => model
            .top_traits
            .iter()
            .map(|t| context! { name => t.name.clone(), score => t.score })
            .collect::<Vec<_>>(),
        reasoning => model.reasoning.clone(),
    };

    tmpl.render(ctx).map_err(|_| ReportError::Template("render_html"))
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;
    use ep_core::{AnswerSheet, ScoringRules};
    use ep_pipeline::{score_survey, TieBreaker};

    fn artistic_result() -> ScoringResult {
        let rules = ScoringRules::default();
        let values: Vec<u8> = rules
            .questions
            .iter()
            .map(|q| if q.trait_code == ep_core::TraitCode::Artistic { 5 } else { 1 })
            .collect();
        let sheet = AnswerSheet::from_values(&values).unwrap();
        score_survey(&sheet, &rules, None, &mut TieBreaker::Deterministic)
    }

    #[test]
    fn model_sections_follow_the_result() {
        let model = build_model(&artistic_result());
        assert_eq!(model.recommendation.status, "resolved");
        assert_eq!(model.recommendation.track.as_deref(), Some("MMGD"));
        assert_eq!(model.recommendation.confidence_band, "high");
        assert_eq!(model.scores.len(), 3);
        assert_eq!(model.scores[0].code, "MMGD");
        assert_eq!(model.scores[0].normalized, 77);
        assert_eq!(model.top_traits.len(), 3);
    }

    #[test]
    fn tiebreak_result_has_no_track() {
        let rules = ScoringRules::default();
        let sheet = AnswerSheet::from_values(&[3; 21]).unwrap();
        let result = score_survey(&sheet, &rules, None, &mut TieBreaker::Deterministic);
        let model = build_model(&result);
        assert_eq!(model.recommendation.status, "tiebreak_required");
        assert_eq!(model.recommendation.track, None);
        assert_eq!(model.recommendation.confidence_band, "none");
    }

    #[cfg(feature = "render_json")]
    #[test]
    fn json_rendering_is_shape_stable() {
        use assert_json_diff::assert_json_include;

        let rendered = render_json(&build_model(&artistic_result())).unwrap();
        let actual: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_json_include!(
            actual: actual,
            expected: serde_json::json!({
                "recommendation": { "status": "resolved", "track": "MMGD", "confidence": 100 },
                "scores": [{ "code": "MMGD", "normalized": 77 }],
            })
        );
    }

    #[cfg(feature = "render_html")]
    #[test]
    fn html_rendering_mentions_the_track() {
        let html = render_html(&build_model(&artistic_result())).unwrap();
        assert!(html.contains("Multimedia &amp; Game Development"));
        assert!(html.contains("confidence 100%"));
    }
}
