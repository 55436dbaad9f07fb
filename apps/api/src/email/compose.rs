//! Candidate-facing email bodies — pure string templating, no state, no IO.
//!
//! Two templates: a qualified letter carrying the screening test as a
//! radio-button form, and a rejection letter carrying a reason paragraph.
//! Interpolated values are HTML-escaped; half of them come from model output.

use crate::assessment::Assessment;

// ────────────────────────────────────────────────────────────────────────────
// Subjects
// ────────────────────────────────────────────────────────────────────────────

pub fn qualified_subject(job_title: &str) -> String {
    format!("Next Steps for {job_title} Application")
}

pub fn rejection_subject(job_title: &str) -> String {
    format!("Update on Your {job_title} Application")
}

// ────────────────────────────────────────────────────────────────────────────
// Templates
// ────────────────────────────────────────────────────────────────────────────

const QUALIFIED_EMAIL_TEMPLATE: &str = r#"<html>
<head>
    <style>
        body { font-family: Arial, sans-serif; line-height: 1.6; color: #333; }
        .container { max-width: 600px; margin: 0 auto; padding: 20px; }
        .header { background-color: #4CAF50; color: white; padding: 10px 20px; text-align: center; }
        .content { padding: 20px; }
        .footer { background-color: #f1f1f1; padding: 10px 20px; text-align: center; font-size: 0.8em; }
        .button { background-color: #4CAF50; color: white; padding: 10px 15px; text-decoration: none; border-radius: 4px; }
    </style>
</head>
<body>
    <div class="container">
        <div class="header">
            <h2>Congratulations, {candidate_name}!</h2>
        </div>
        <div class="content">
            <p>We are pleased to inform you that your resume has been reviewed for the <strong>{job_title}</strong> position, and you have been selected to move forward in our recruitment process.</p>

            <p>As part of the next step, we would like you to complete the following assessment. Please answer these questions to the best of your ability:</p>

            <form>
                {questions_html}
            </form>

            <p>Please reply to this email with your answers within the next 48 hours.</p>

            <p>We look forward to reviewing your responses and potentially discussing the opportunity further.</p>

            <p>Best regards,<br>HR Team</p>
        </div>
        <div class="footer">
            <p>This email was sent automatically by our HR AI Assistant.</p>
        </div>
    </div>
</body>
</html>
"#;

const REJECTION_EMAIL_TEMPLATE: &str = r#"<html>
<head>
    <style>
        body { font-family: Arial, sans-serif; line-height: 1.6; color: #333; }
        .container { max-width: 600px; margin: 0 auto; padding: 20px; }
        .header { background-color: #e53935; color: white; padding: 10px 20px; text-align: center; }
        .content { padding: 20px; }
        .footer { background-color: #f1f1f1; padding: 10px 20px; text-align: center; font-size: 0.8em; }
    </style>
</head>
<body>
    <div class="container">
        <div class="header">
            <h2>Application Status Update</h2>
        </div>
        <div class="content">
            <p>Dear {candidate_name},</p>

            <p>Thank you for your interest in the <strong>{job_title}</strong> position and for taking the time to submit your application.</p>

            <p>After careful consideration of your qualifications and experience in relation to the requirements of this role, we regret to inform you that we have decided not to move forward with your application at this time.</p>

            <p>While your profile has many strengths, {reason}</p>

            <p>We encourage you to apply for future opportunities that align more closely with your skills and experience.</p>

            <p>We wish you the best in your job search and professional endeavors.</p>

            <p>Best regards,<br>HR Team</p>
        </div>
        <div class="footer">
            <p>This email was sent automatically by our HR AI Assistant.</p>
        </div>
    </div>
</body>
</html>
"#;

const NO_ASSESSMENT_PARAGRAPH: &str =
    "<p>No assessment is available at this time. Our team will follow up separately with the next steps.</p>";

// ────────────────────────────────────────────────────────────────────────────
// Composition
// ────────────────────────────────────────────────────────────────────────────

/// Acceptance letter with the screening test rendered as radio-button groups.
/// An empty assessment gets an explicit placeholder paragraph instead of an
/// empty form.
pub fn compose_qualified(candidate_name: &str, job_title: &str, assessment: &Assessment) -> String {
    QUALIFIED_EMAIL_TEMPLATE
        .replace("{candidate_name}", &escape_html(candidate_name))
        .replace("{job_title}", &escape_html(job_title))
        .replace("{questions_html}", &render_questions(assessment))
}

/// Rejection letter. `reason` is spliced into the "While your profile has
/// many strengths, ..." sentence, so callers pass sentence-continuation text.
pub fn compose_rejection(candidate_name: &str, job_title: &str, reason: &str) -> String {
    REJECTION_EMAIL_TEMPLATE
        .replace("{candidate_name}", &escape_html(candidate_name))
        .replace("{job_title}", &escape_html(job_title))
        .replace("{reason}", &escape_html(reason))
}

fn render_questions(assessment: &Assessment) -> String {
    if assessment.is_empty() {
        return NO_ASSESSMENT_PARAGRAPH.to_string();
    }

    let mut html = String::new();
    for (i, q) in assessment.questions.iter().enumerate() {
        html.push_str(&format!(
            r#"
        <div style="margin-bottom: 20px; padding: 15px; background-color: #f9f9f9; border-radius: 5px;">
            <p style="font-weight: bold; margin-bottom: 10px;">Question {}: {}</p>
            <ul style="list-style-type: none; padding-left: 0;">
"#,
            i + 1,
            escape_html(&q.question)
        ));

        for (j, option) in q.options.iter().enumerate() {
            html.push_str(&format!(
                r#"                <li style="margin-bottom: 5px;">
                    <input type="radio" name="q{i}" value="{j}"> {}
                </li>
"#,
                escape_html(option)
            ));
        }

        html.push_str("            </ul>\n        </div>\n");
    }
    html
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
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
