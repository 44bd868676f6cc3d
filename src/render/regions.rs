use html_escape::encode_text;

use crate::models::{AssessmentReport, ScoreTally};

/// Region identifiers of the results panel
pub const RESULT_CONTAINER_ID: &str = "result";
pub const PERSONAL_INFO_ID: &str = "personalInfo";
pub const BMI_RESULT_ID: &str = "bmiResult";
pub const HEALTH_METRICS_ID: &str = "healthMetrics";
pub const STATUS_TEXT_ID: &str = "statusText";
pub const RECOMMENDATIONS_ID: &str = "recommendations";

/// Markup for the five output regions plus the panel background
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRegions {
    pub personal_info: String,
    pub bmi_result: String,
    pub health_metrics: String,
    pub status_text: String,
    pub recommendations: String,
    /// Background of the results container (the status color)
    pub background: &'static str,
}

impl ResultRegions {
    /// Region id paired with its markup, in page order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            (PERSONAL_INFO_ID, self.personal_info.as_str()),
            (BMI_RESULT_ID, self.bmi_result.as_str()),
            (HEALTH_METRICS_ID, self.health_metrics.as_str()),
            (STATUS_TEXT_ID, self.status_text.as_str()),
            (RECOMMENDATIONS_ID, self.recommendations.as_str()),
        ]
        .into_iter()
    }
}

/// Render the results panel for a report
pub fn render_regions(report: &AssessmentReport) -> ResultRegions {
    ResultRegions {
        personal_info: personal_info(report),
        bmi_result: bmi_result(report),
        health_metrics: health_metrics(report),
        status_text: format!("<h3>{}</h3>", report.status.label()),
        recommendations: recommendations(report),
        background: report.status.color(),
    }
}

fn personal_info(report: &AssessmentReport) -> String {
    let profile = &report.profile;

    format!(
        r#"<div class="health-metric">
    <h3>{}, {} years ({})</h3>
    <p>Height: {}cm | Weight: {}kg</p>
</div>"#,
        encode_text(&profile.name),
        profile.age,
        profile.gender.as_str(),
        profile.height_cm,
        profile.weight_kg
    )
}

fn bmi_result(report: &AssessmentReport) -> String {
    let category = report.bmi.category;

    format!(
        r#"<div style="background-color: {}">
    <h3>Body Mass Index (BMI): {}</h3>
    <p><strong>Category:</strong> {}</p>
    <p>{}</p>
</div>"#,
        category.color(),
        report.bmi.formatted(),
        category.label(),
        category.advice()
    )
}

fn health_metrics(report: &AssessmentReport) -> String {
    let scores = &report.scores;

    format!(
        r#"<div class="health-metric">
    <h3>Health Assessment Scores</h3>
    <p>Physical Health: {}/{}</p>
    <p>Mental Wellness: {}/{}</p>
    <p>Total Score: {}/{}</p>
</div>"#,
        scores.physical,
        ScoreTally::PHYSICAL_MAX,
        scores.mental,
        ScoreTally::MENTAL_MAX,
        scores.total,
        ScoreTally::TOTAL_MAX
    )
}

fn recommendations(report: &AssessmentReport) -> String {
    let items: String = report
        .recommendations
        .iter()
        .map(|advice| format!("<li>{}</li>", encode_text(advice)))
        .collect();

    format!(
        r#"<div class="health-metric">
    <h3>Recommendations</h3>
    <p>{}</p>
    <ul>{}</ul>
</div>"#,
        report.status.advice(),
        items
    )
}
