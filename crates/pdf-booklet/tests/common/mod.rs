#![allow(dead_code)]

use lopdf::content::Content;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

/// Content stream that identifies source page `n`
pub fn page_marker(n: usize) -> Vec<u8> {
    format!("BT /F1 12 Tf 72 720 Td (Page {}) Tj ET", n).into_bytes()
}

/// US Letter test document whose page `n` (1-based) draws `page_marker(n)`
pub fn create_test_pdf(num_pages: usize) -> Document {
    create_sized_pdf(&vec![(612, 792); num_pages])
}

pub fn create_sized_pdf(sizes: &[(i64, i64)]) -> Document {
    let boxes: Vec<[i64; 4]> = sizes.iter().map(|&(w, h)| [0, 0, w, h]).collect();
    create_boxed_pdf(&boxes)
}

/// Test document with one page per MediaBox `[llx, lly, urx, ury]`
pub fn create_boxed_pdf(boxes: &[[i64; 4]]) -> Document {
    let mut doc = Document::with_version("1.7");

    // Create page tree root ID
    let pages_id = doc.new_object_id();

    let mut kids = Vec::new();
    for (idx, media_box) in boxes.iter().enumerate() {
        let content_id = doc.add_object(Stream::new(Dictionary::new(), page_marker(idx + 1)));

        let page_id = doc.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Page".to_vec())),
            ("Parent", Object::Reference(pages_id)),
            (
                "MediaBox",
                Object::Array(media_box.iter().map(|&v| Object::Integer(v)).collect()),
            ),
            ("Resources", Object::Dictionary(Dictionary::new())),
            ("Contents", Object::Reference(content_id)),
        ]));
        kids.push(Object::Reference(page_id));
    }

    finish_page_tree(&mut doc, pages_id, kids, None);
    doc
}

/// Document whose pages inherit their MediaBox from the page tree root
pub fn create_inherited_media_box_pdf(num_pages: usize, width: i64, height: i64) -> Document {
    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();

    let mut kids = Vec::new();
    for n in 1..=num_pages {
        let content_id = doc.add_object(Stream::new(Dictionary::new(), page_marker(n)));
        let page_id = doc.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Page".to_vec())),
            ("Parent", Object::Reference(pages_id)),
            ("Contents", Object::Reference(content_id)),
        ]));
        kids.push(Object::Reference(page_id));
    }

    let media_box = Object::Array(vec![
        Object::Integer(0),
        Object::Integer(0),
        Object::Integer(width),
        Object::Integer(height),
    ]);
    finish_page_tree(&mut doc, pages_id, kids, Some(media_box));
    doc
}

fn finish_page_tree(
    doc: &mut Document,
    pages_id: ObjectId,
    kids: Vec<Object>,
    media_box: Option<Object>,
) {
    let count = kids.len() as i64;
    let mut pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(kids)),
        ("Count", Object::Integer(count)),
    ]);
    if let Some(media_box) = media_box {
        pages_dict.set("MediaBox", media_box);
    }
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]));

    doc.trailer.set("Root", catalog_id);
}

/// A source page drawn on an output page
#[derive(Debug, Clone, PartialEq)]
pub struct Drawn {
    /// Content of the drawn Form XObject
    pub content: Vec<u8>,
    pub tx: f32,
    pub ty: f32,
}

/// Output page ids in page order
pub fn page_ids(doc: &Document) -> Vec<ObjectId> {
    doc.get_pages().into_values().collect()
}

/// (width, height) of an output page's MediaBox
pub fn media_box_size(doc: &Document, page_id: ObjectId) -> (f32, f32) {
    let page = doc.get_dictionary(page_id).unwrap();
    let mb = page.get(b"MediaBox").unwrap().as_array().unwrap();
    let values: Vec<f32> = mb.iter().map(|v| v.as_float().unwrap()).collect();
    (values[2] - values[0], values[3] - values[1])
}

/// Every XObject drawn on `page_id` with the translation it was drawn at
pub fn drawn_pages(doc: &Document, page_id: ObjectId) -> Vec<Drawn> {
    let page = doc.get_dictionary(page_id).unwrap();
    let xobjects = page
        .get(b"Resources")
        .unwrap()
        .as_dict()
        .unwrap()
        .get(b"XObject")
        .unwrap()
        .as_dict()
        .unwrap();

    let content = Content::decode(&doc.get_page_content(page_id).unwrap()).unwrap();

    let mut drawn = Vec::new();
    let mut translation = (0.0, 0.0);
    for op in &content.operations {
        match op.operator.as_str() {
            "cm" => {
                translation = (
                    op.operands[4].as_float().unwrap(),
                    op.operands[5].as_float().unwrap(),
                );
            }
            "Do" => {
                let name = op.operands[0].as_name().unwrap();
                let id = xobjects.get(name).unwrap().as_reference().unwrap();
                let stream = doc.get_object(id).unwrap().as_stream().unwrap();
                drawn.push(Drawn {
                    content: stream.content.clone(),
                    tx: translation.0,
                    ty: translation.1,
                });
            }
            _ => {}
        }
    }
    drawn
}

/// Which source page marker sits on each half of an output page
pub fn halves(doc: &Document, page_id: ObjectId, page_width: f32) -> (Option<Vec<u8>>, Option<Vec<u8>>) {
    let mut left = None;
    let mut right = None;
    for drawn in drawn_pages(doc, page_id) {
        if drawn.tx.abs() < 0.01 {
            left = Some(drawn.content);
        } else if (drawn.tx - page_width).abs() < 0.01 {
            right = Some(drawn.content);
        } else {
            panic!("page drawn at unexpected offset {}", drawn.tx);
        }
    }
    (left, right)
}
