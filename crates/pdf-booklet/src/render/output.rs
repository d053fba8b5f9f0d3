//! Append-only output document

use crate::constants::OUTPUT_PDF_VERSION;
use lopdf::{Dictionary, Document, Object, ObjectId};

/// Output document that grows one page at a time.
///
/// Pages are appended in call order and never revisited. The page tree and
/// catalog are written by `finish`.
#[derive(Debug)]
pub struct OutputDocument {
    doc: Document,
    pages_tree_id: ObjectId,
    page_refs: Vec<Object>,
}

impl OutputDocument {
    pub fn new() -> Self {
        let mut doc = Document::with_version(OUTPUT_PDF_VERSION);
        let pages_tree_id = doc.new_object_id();
        Self {
            doc,
            pages_tree_id,
            page_refs: Vec::new(),
        }
    }

    /// Object id every appended page must use as its `Parent`
    pub fn pages_tree_id(&self) -> ObjectId {
        self.pages_tree_id
    }

    /// The underlying document, for adding page resources
    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.doc
    }

    /// Add a page dictionary as the next page
    pub fn append_page(&mut self, mut page_dict: Dictionary) -> ObjectId {
        page_dict.set("Parent", Object::Reference(self.pages_tree_id));
        let page_id = self.doc.add_object(page_dict);
        self.page_refs.push(Object::Reference(page_id));
        page_id
    }

    pub fn page_count(&self) -> usize {
        self.page_refs.len()
    }

    /// Create pages tree and catalog, finalize document structure
    pub fn finish(self) -> Document {
        let Self {
            mut doc,
            pages_tree_id,
            page_refs,
        } = self;

        let count = page_refs.len() as i64;
        let pages_dict = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Pages".to_vec())),
            ("Kids", Object::Array(page_refs)),
            ("Count", Object::Integer(count)),
        ]);
        doc.objects
            .insert(pages_tree_id, Object::Dictionary(pages_dict));

        let catalog_id = doc.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Catalog".to_vec())),
            ("Pages", Object::Reference(pages_tree_id)),
        ]));
        doc.trailer.set("Root", catalog_id);

        doc
    }
}

impl Default for OutputDocument {
    fn default() -> Self {
        Self::new()
    }
}
