//! Report export — string-templates the analysis summary into a fixed,
//! self-contained HTML document offered as a download. Write-only output for
//! humans; nothing ever parses it back.

use chrono::NaiveDate;
use serde::Deserialize;

/// Inputs read off the results page. All optional in practice: an empty set
/// of inputs still yields the full document skeleton with empty lists.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportInputs {
    /// Overall score as displayed, e.g. "85%".
    #[serde(default)]
    pub overall_score: String,
    #[serde(default)]
    pub matched_skills: Vec<String>,
    #[serde(default)]
    pub missing_skills: Vec<String>,
}

/// The fixed recommendations block. Identical in every report.
const RECOMMENDATIONS: [(&str, &str); 3] = [
    (
        "Add Cloud Computing Skills",
        "Learn AWS, Azure, or Google Cloud Platform to boost your profile for modern data roles.",
    ),
    (
        "Quantify Your Achievements",
        "Add specific metrics and numbers to demonstrate the impact of your work.",
    ),
    (
        "Include Relevant Certifications",
        "Add industry certifications to strengthen your technical credibility.",
    ),
];

/// Download filename for a report generated on the given date.
pub fn report_file_name(date: NaiveDate) -> String {
    format!("resume_analysis_report_{}.html", date.format("%Y-%m-%d"))
}

/// Renders the complete report document.
pub fn render_report(inputs: &ReportInputs, generated_on: NaiveDate) -> String {
    let matched = skill_tags(&inputs.matched_skills, "skill-matched");
    let missing = skill_tags(&inputs.missing_skills, "skill-missing");
    let recommendations = RECOMMENDATIONS
        .iter()
        .map(|(title, body)| format!("            <li><strong>{title}:</strong> {body}</li>\n"))
        .collect::<String>();

    let score = escape_html(&inputs.overall_score);
    let matched_count = inputs.matched_skills.len();
    let missing_count = inputs.missing_skills.len();
    let total = matched_count + missing_count;
    let date = generated_on.format("%Y-%m-%d");

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Resume Analysis Report</title>
    <style>
        body {{ font-family: Arial, sans-serif; margin: 40px; background: #f5f5f5; }}
        .header {{ text-align: center; margin-bottom: 40px; background: linear-gradient(135deg, #667eea, #764ba2); color: white; padding: 30px; border-radius: 10px; }}
        .score {{ font-size: 48px; font-weight: bold; margin: 20px 0; }}
        .section {{ background: white; margin: 20px 0; padding: 25px; border-radius: 10px; box-shadow: 0 4px 15px rgba(0,0,0,0.1); }}
        .skill-matched {{ background: #10b981; color: white; padding: 8px 15px; margin: 5px; border-radius: 20px; display: inline-block; }}
        .skill-missing {{ background: #f59e0b; color: white; padding: 8px 15px; margin: 5px; border-radius: 20px; display: inline-block; }}
        h2 {{ color: #333; border-bottom: 2px solid #667eea; padding-bottom: 10px; }}
        .footer {{ text-align: center; margin-top: 40px; color: #666; }}
    </style>
</head>
<body>
    <div class="header">
        <h1>Resume Analysis Report</h1>
        <div class="score">{score}</div>
        <p>Overall Compatibility Score</p>
        <p>Generated on {date}</p>
    </div>

    <div class="section">
        <h2>Matched Skills ({matched_count})</h2>
{matched}    </div>

    <div class="section">
        <h2>Skills to Improve ({missing_count})</h2>
{missing}    </div>

    <div class="section">
        <h2>Recommendations</h2>
        <ul>
{recommendations}        </ul>
    </div>

    <div class="section">
        <h2>Analysis Summary</h2>
        <p><strong>Overall Score:</strong> {score}</p>
        <p><strong>Matched Skills:</strong> {matched_count} out of {total}</p>
        <p><strong>Next Steps:</strong> Focus on acquiring the missing skills to raise your compatibility.</p>
    </div>

    <div class="footer">
        <p>Report generated by ResumeAI</p>
    </div>
</body>
</html>"#
    )
}

fn skill_tags(skills: &[String], class: &str) -> String {
    skills
        .iter()
        .map(|skill| format!("        <span class=\"{class}\">{}</span>\n", escape_html(skill)))
        .collect()
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
