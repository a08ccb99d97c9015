//! HTML rendering. Every piece of user or backend text goes through `html_escape`.

use std::fmt::Write as _;

use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

use crate::matching::input::{JOB_DESCRIPTION_FIELD, RESUME_FIELD};
use crate::pages::branding::{Branding, BRAND_SUBTITLE, BRAND_TITLE};
use crate::pages::navigation::Page;
use crate::pages::view::{DemoPanel, ResultView, StyledSkill};
use crate::report::REPORT_FILE_NAME;

const STYLE: &str = r#"
body { margin: 0; font-family: sans-serif; background: #1f2937; color: #f9fafb; }
nav { position: sticky; top: 0; display: flex; background: #111827; box-shadow: 0 4px 6px -1px rgba(0,0,0,0.2); }
nav a { flex: 1; padding: 12px; text-align: center; color: white; text-decoration: none; font-size: 16px; }
nav a:hover { background: #374151; }
nav a.selected { background: #F97316; font-weight: bold; }
main { padding: 2rem 3rem; }
.brand-container { text-align: center; margin-bottom: 20px; }
.brand-title { font-size: 40px; font-weight: bold; margin: 10px 0 0; letter-spacing: 1px; }
.brand-subtitle { font-size: 18px; color: #D1D5DB; }
.brand-logo { width: 200px; height: 50px; border-radius: 20px; margin-bottom: 10px; }
.warning { background: #78350f; padding: 8px 12px; border-radius: 4px; }
.error { background: #7f1d1d; padding: 8px 12px; border-radius: 4px; }
.skill { display: block; font-weight: bold; }
progress { width: 100%; }
textarea { width: 100%; height: 150px; }
"#;

/// Wraps a page body in the shell: head, navigation bar, branding header.
pub fn render_page(branding: &Branding, selected: Page, body: &str) -> String {
    let mut nav = String::new();
    for page in Page::ALL {
        let class = if page == selected { " class=\"selected\"" } else { "" };
        let _ = write!(nav, "<a href=\"{}\"{class}>{}</a>", page.href(), page.as_str());
    }

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>jobFitAI - Resume Skill Matcher</title>\n<style>{STYLE}</style>\n</head>\n\
         <body>\n<nav>{nav}</nav>\n<main>\n{header}\n{body}\n</main>\n</body>\n</html>\n",
        header = brand_header(branding),
    )
}

fn brand_header(branding: &Branding) -> String {
    let top = match &branding.logo_base64 {
        Some(logo) => format!(
            "<img class=\"brand-logo\" src=\"data:image/jpeg;base64,{}\" alt=\"{BRAND_TITLE}\">",
            attr(logo)
        ),
        None => format!("<h1 class=\"brand-title\">{BRAND_TITLE}</h1>"),
    };
    format!(
        "<div class=\"brand-container\">{top}<p class=\"brand-subtitle\">{BRAND_SUBTITLE}</p></div>"
    )
}

pub fn home_body() -> String {
    format!(
        "<hr>\n<p>Welcome to <strong>jobFitAI</strong>, your intelligent career companion.<br>\
         Upload your resume, paste a job description, and instantly discover how well you fit the role.<br>\
         Navigate to the <strong>Demo</strong> tab to experience it in action.</p>\n\
         <p><a class=\"button\" href=\"{}\">Try it Out</a></p>",
        Page::Demo.href()
    )
}

/// The Demo form, plus the warning or result panel from the last submission.
pub fn demo_body(panel: Option<&DemoPanel>, job_description: &str) -> String {
    let mut html = format!(
        "<h1>Demo - Try it Now!</h1>\n\
         <form method=\"post\" action=\"/demo/analyze\" enctype=\"multipart/form-data\">\n\
         <label>Upload Resume (PDF or TXT)<br>\
         <input type=\"file\" name=\"{RESUME_FIELD}\" accept=\".pdf,.txt,application/pdf,text/plain\" \
         title=\"Only PDF or TXT files allowed\"></label><br>\n\
         <label>Paste Job Description Here<br>\
         <textarea name=\"{JOB_DESCRIPTION_FIELD}\" placeholder=\"Copy-paste the job description here...\">{}</textarea></label><br>\n\
         <button type=\"submit\">Analyze</button>\n</form>\n",
        text(job_description)
    );

    match panel {
        Some(DemoPanel::Warning(message)) => {
            let _ = writeln!(html, "<p class=\"warning\">{}</p>", text(message));
        }
        Some(DemoPanel::Result(view)) => html.push_str(&result_section(view)),
        None => {}
    }

    html
}

fn result_section(view: &ResultView) -> String {
    let mut html = String::from("<section class=\"result\">\n");

    if let Some(error) = &view.error {
        let _ = writeln!(html, "<p class=\"error\">{}</p>", text(error));
    }

    let _ = writeln!(
        html,
        "<h2>Match Score</h2>\n<progress value=\"{}\" max=\"1\"></progress>\n\
         <p><strong>{}%</strong> match with the job description.</p>",
        view.ratio,
        text(&view.score_label)
    );

    html.push_str("<h2>Matched Skills</h2>\n");
    push_skills(&mut html, &view.matched);
    html.push_str("<h2>Missing Skills</h2>\n");
    push_skills(&mut html, &view.missing);

    let _ = writeln!(
        html,
        "<p><a class=\"download\" href=\"{}\" download=\"{REPORT_FILE_NAME}\">Download PDF Report</a></p>",
        attr(&view.report_href)
    );
    html.push_str("</section>\n");
    html
}

fn push_skills(html: &mut String, skills: &[StyledSkill]) {
    for skill in skills {
        let _ = writeln!(
            html,
            "<span class=\"{}\" style=\"color:{};font-weight:bold\">{}</span>",
            skill.tone.css_class(),
            skill.tone.color(),
            text(&skill.text)
        );
    }
}

pub fn info_body() -> String {
    "<h1>Information</h1>\n\
     <p>Scroll or expand each section for details.</p>\n\
     <details><summary>About jobFitAI</summary>\
     <p><strong>jobFitAI</strong> is a smart resume analysis tool that helps job seekers \
     instantly see how well their resumes match job descriptions.</p></details>\n\
     <details><summary>How it Works</summary><ol>\
     <li>Upload your resume (PDF/TXT).</li>\
     <li>Paste the job description.</li>\
     <li>Click Analyze to view matched &amp; missing skills, and match percentage.</li>\
     <li>Download a PDF report instantly.</li></ol></details>\n\
     <details><summary>Tips for Users</summary><ul>\
     <li>Keep your resume updated.</li>\
     <li>Paste a complete job description for best results.</li>\
     <li>Review missing skills to enhance your profile.</li></ul></details>\n"
        .to_string()
}

pub fn contact_body() -> String {
    "<h1>Contact Our Team</h1>\n\
     <p>Reach out to our team members:</p>\n<ul>\
     <li><strong>Abhishek Kumar</strong>, Backend Lead</li>\
     <li><strong>Krishna Kumar</strong>, Frontend Lead</li>\
     <li><strong>Rithesh H B</strong>, UX / Research</li>\
     <li><strong>Akash K N</strong>, Documentation</li>\
     <li>GitHub: <a href=\"https://github.com/pravatAbhishek/jobFitAI\">TeamCatalyst</a></li>\
     </ul>\n"
        .to_string()
}
