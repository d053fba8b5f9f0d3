//! Compositing sheet sides into double-wide output pages

use crate::layout::SheetSideView;
use crate::types::{Geometry, Result};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::collections::HashMap;

use super::output::OutputDocument;
use super::placement::{Placement, plan_side};
use super::xobject::{create_page_xobject, page_media_box};

/// Draws sheet sides of one run onto a growing output document.
///
/// Each `composite` call appends exactly one `(2W, H)` page. The compositor
/// keeps no state between calls besides the output document and the cache of
/// resources already copied from the source.
pub struct Compositor<'a> {
    source: &'a Document,
    geometry: Geometry,
    output: OutputDocument,
    resource_cache: HashMap<ObjectId, ObjectId>,
}

impl<'a> Compositor<'a> {
    pub fn new(source: &'a Document, geometry: Geometry) -> Self {
        Self {
            source,
            geometry,
            output: OutputDocument::new(),
            resource_cache: HashMap::new(),
        }
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Number of output pages appended so far
    pub fn page_count(&self) -> usize {
        self.output.page_count()
    }

    /// Append one output page holding the left and right halves of `side`.
    ///
    /// Halves that are empty or blank leave their part of the page blank.
    pub fn composite(&mut self, side: SheetSideView<'_, ObjectId>) -> Result<ObjectId> {
        let plan = plan_side(side, self.geometry);

        let mut content_ops = Vec::new();
        let mut xobjects = Dictionary::new();

        for placement in &plan.placements {
            let xobject_name = format!("P{}", content_ops.len());
            let xobject_id = create_page_xobject(
                self.output.document_mut(),
                self.source,
                placement.page.handle,
                &mut self.resource_cache,
            )?;
            xobjects.set(xobject_name.as_bytes(), Object::Reference(xobject_id));
            content_ops.push(self.placement_command(&xobject_name, placement)?);
        }

        let mut page_dict = Dictionary::new();
        page_dict.set("Type", Object::Name(b"Page".to_vec()));
        page_dict.set(
            "MediaBox",
            Object::Array(vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Real(plan.width),
                Object::Real(plan.height),
            ]),
        );

        let mut resources = Dictionary::new();
        resources.set("XObject", Object::Dictionary(xobjects));

        let content = content_ops.join("");
        let content_id = self
            .output
            .document_mut()
            .add_object(Stream::new(Dictionary::new(), content.into_bytes()));

        page_dict.set("Contents", Object::Reference(content_id));
        page_dict.set("Resources", Object::Dictionary(resources));

        let page_id = self.output.append_page(page_dict);
        log::debug!(
            "Composited {:?} side as output page {} ({} of 2 halves drawn)",
            side.side,
            self.output.page_count(),
            plan.placements.len()
        );
        Ok(page_id)
    }

    /// Finish the run and return the output document
    pub fn finish(self) -> Document {
        self.output.finish()
    }

    /// Content stream command drawing one placed page.
    ///
    /// The XObject's BBox is the source MediaBox, which need not start at the
    /// origin, so its lower-left corner is shifted onto the placement offset.
    fn placement_command(
        &self,
        xobject_name: &str,
        placement: &Placement<'_, ObjectId>,
    ) -> Result<String> {
        let [llx, lly, _, _] = page_media_box(self.source, placement.page.handle)?;
        let tx = placement.offset_x - llx;
        let ty = placement.offset_y - lly;
        Ok(format!("q 1 0 0 1 {} {} cm /{} Do Q\n", tx, ty, xobject_name))
    }
}
