use pdf_booklet::layout::Half;
use pdf_booklet::*;

#[test]
fn test_slot_decomposition() {
    for slot in Slot::ALL {
        assert_eq!(Slot::new(slot.side(), slot.half()), slot);
    }
    assert_eq!(Slot::BackRight.side(), SheetSide::Back);
    assert_eq!(Slot::BackRight.half(), Half::Right);
    assert_eq!(Slot::FrontLeft.side(), SheetSide::Front);
    assert_eq!(Slot::FrontLeft.half(), Half::Left);
}

#[test]
fn test_slot_content() {
    let page = SlotContent::Page(LogicalPage::new(3u32, 10.0, 20.0));
    assert_eq!(page.page().map(|p| p.handle), Some(3));
    assert!(!page.is_empty());
    assert!(!page.is_blank());

    let blank: SlotContent<u32> = None.into();
    assert!(blank.is_blank());
    assert!(blank.page().is_none());

    assert!(SlotContent::<u32>::Empty.is_empty());
}

#[test]
fn test_geometry() {
    let geometry = Geometry::new(420.0, 595.0);
    assert_eq!(geometry.output_size(), (840.0, 595.0));
    assert!(geometry.matches(420.3, 594.8, 0.5));
    assert!(!geometry.matches(595.0, 842.0, 0.5));

    let default = Geometry::default();
    assert_eq!((default.width, default.height), (612.0, 792.0));
}

#[test]
fn test_error_messages() {
    let err = BookletError::GeometryMismatch {
        page: 4,
        expected: (612.0, 792.0),
        found: (595.0, 842.0),
    };
    assert_eq!(
        err.to_string(),
        "Page 4 is 595.0x842.0pt but the booklet geometry is 612.0x792.0pt"
    );

    let err = BookletError::SourceUnreadable {
        path: "in.pdf".into(),
        reason: "No such file".to_string(),
    };
    assert!(err.to_string().contains("in.pdf"));
}
