//! Places every line of the report before any PDF bytes exist.
//!
//! A top-down cursor starts under the title block and steps down one line
//! height per skill. A line that would land below the bottom margin moves to
//! the top of a fresh page, so long skill lists wrap instead of running off.
//!
//! Coordinates are PDF points with the origin at the bottom-left of a US letter page.

use crate::matching::normalize::format_score;
use crate::models::match_result::MatchResult;

pub const PAGE_WIDTH_PT: i32 = 612;
pub const PAGE_HEIGHT_PT: i32 = 792;

pub const REPORT_TITLE: &str = "Resume Skill Matcher Report";
pub const MATCHED_HEADING: &str = "Matched Skills:";
pub const MISSING_HEADING: &str = "Missing Skills:";

const TOP_LINE_Y: i32 = 750;
const SCORE_Y: i32 = 720;
const MATCHED_HEADING_Y: i32 = 700;
const LINE_HEIGHT: i32 = 20;
const SECTION_GAP: i32 = 10;
const BOTTOM_MARGIN: i32 = 50;
const HEADING_X: i32 = 50;
const SKILL_X: i32 = 70;

/// Lines that are always present: title, score, two section headings.
pub const FIXED_LINES: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFont {
    /// Helvetica-Bold 18pt.
    Title,
    /// Helvetica 12pt.
    Body,
}

impl ReportFont {
    pub fn size_pt(self) -> i32 {
        match self {
            ReportFont::Title => 18,
            ReportFont::Body => 12,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    /// Zero-based page index.
    pub page: usize,
    pub x: i32,
    pub y: i32,
    pub font: ReportFont,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportLayout {
    pub lines: Vec<PlacedLine>,
    pub page_count: usize,
}

impl ReportLayout {
    pub fn lines_on_page(&self, page: usize) -> impl Iterator<Item = &PlacedLine> {
        self.lines.iter().filter(move |l| l.page == page)
    }
}

struct Cursor {
    page: usize,
    y: i32,
}

impl Cursor {
    /// Settles on `y`, or on the top of the next page if `y` is below the margin.
    fn settle(&mut self, y: i32) -> (usize, i32) {
        if y < BOTTOM_MARGIN {
            self.page += 1;
            self.y = TOP_LINE_Y;
        } else {
            self.y = y;
        }
        (self.page, self.y)
    }
}

/// Lays out the report. Pure: identical input gives identical output.
pub fn layout_report(result: &MatchResult) -> ReportLayout {
    let mut lines =
        Vec::with_capacity(FIXED_LINES + result.matched_skills.len() + result.missing_skills.len());

    let mut push = |page: usize, x: i32, y: i32, font: ReportFont, text: String| {
        lines.push(PlacedLine {
            page,
            x,
            y,
            font,
            text,
        });
    };

    push(0, HEADING_X, TOP_LINE_Y, ReportFont::Title, REPORT_TITLE.to_string());
    push(
        0,
        HEADING_X,
        SCORE_Y,
        ReportFont::Body,
        format!("Match Score: {}%", format_score(result.match_score)),
    );
    push(0, HEADING_X, MATCHED_HEADING_Y, ReportFont::Body, MATCHED_HEADING.to_string());

    let mut cursor = Cursor {
        page: 0,
        y: MATCHED_HEADING_Y,
    };
    let mut next_y = MATCHED_HEADING_Y - LINE_HEIGHT;

    for skill in &result.matched_skills {
        let (page, y) = cursor.settle(next_y);
        push(page, SKILL_X, y, ReportFont::Body, format!("- {skill}"));
        next_y = y - LINE_HEIGHT;
    }

    let (page, heading_y) = cursor.settle(next_y - SECTION_GAP);
    push(page, HEADING_X, heading_y, ReportFont::Body, MISSING_HEADING.to_string());
    next_y = heading_y - LINE_HEIGHT;

    for skill in &result.missing_skills {
        let (page, y) = cursor.settle(next_y);
        push(page, SKILL_X, y, ReportFont::Body, format!("- {skill}"));
        next_y = y - LINE_HEIGHT;
    }

    ReportLayout {
        lines,
        page_count: cursor.page + 1,
    }
}
