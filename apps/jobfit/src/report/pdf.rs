//! PDF encoding of a `ReportLayout`.
//!
//! Uses the two standard Type1 fonts, so nothing is embedded. The document is
//! written uncompressed and without an /ID or creation date, which keeps the
//! bytes stable for identical input.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

use crate::report::layout::{ReportFont, ReportLayout, PAGE_HEIGHT_PT, PAGE_WIDTH_PT};
use crate::report::ReportError;

const TITLE_FONT_KEY: &str = "F1";
const BODY_FONT_KEY: &str = "F2";

pub fn render_pdf(layout: &ReportLayout) -> Result<Vec<u8>, ReportError> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let title_font_id = doc.add_object(standard_font("Helvetica-Bold"));
    let body_font_id = doc.add_object(standard_font("Helvetica"));
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            TITLE_FONT_KEY => title_font_id,
            BODY_FONT_KEY => body_font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(layout.page_count);
    for page in 0..layout.page_count {
        let operations: Vec<Operation> = layout
            .lines_on_page(page)
            .flat_map(|line| text_operations(line.font, line.x, line.y, &line.text))
            .collect();
        let content = Content { operations }
            .encode()
            .map_err(|e| ReportError::Pdf(e.to_string()))?;

        let content_id = doc.add_object(Stream::new(dictionary! {}, content));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => layout.page_count as i64,
        "Resources" => resources_id,
        "MediaBox" => vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Integer(i64::from(PAGE_WIDTH_PT)),
            Object::Integer(i64::from(PAGE_HEIGHT_PT)),
        ],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer)
        .map_err(|e| ReportError::Pdf(e.to_string()))?;
    Ok(buffer)
}

fn standard_font(base_font: &str) -> lopdf::Dictionary {
    dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => Object::Name(base_font.as_bytes().to_vec()),
        "Encoding" => "WinAnsiEncoding",
    }
}

fn text_operations(font: ReportFont, x: i32, y: i32, text: &str) -> [Operation; 5] {
    let font_key = match font {
        ReportFont::Title => TITLE_FONT_KEY,
        ReportFont::Body => BODY_FONT_KEY,
    };
    [
        Operation::new("BT", vec![]),
        Operation::new(
            "Tf",
            vec![font_key.into(), i64::from(font.size_pt()).into()],
        ),
        Operation::new("Td", vec![i64::from(x).into(), i64::from(y).into()]),
        Operation::new("Tj", vec![Object::string_literal(win_ansi(text))]),
        Operation::new("ET", vec![]),
    ]
}

/// Latin-1 printable characters map to themselves; anything else becomes `?`.
fn win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match u32::from(c) {
            code @ (0x20..=0x7E | 0xA0..=0xFF) => code as u8,
            _ => b'?',
        })
        .collect()
}
