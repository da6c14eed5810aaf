//! Selection, classification and preview flows driven through the
//! session controller.

mod common;

use std::sync::Arc;
use std::time::Duration;

use common::{FakePdfEngine, Harness};
use sumview::config::ServiceConfig;
use sumview::document::PageRaster;
use sumview::preview::{PreviewState, DEFAULT_SCALE, SCALE_MAX, SCALE_MIN};
use sumview::ui::events::AppEvent;

const QUIET: Duration = Duration::from_millis(300);

fn harness(engine: FakePdfEngine) -> Harness {
    Harness::new(Arc::new(engine), ServiceConfig::default())
}

#[test]
fn opening_a_pdf_lands_on_page_one_at_default_zoom() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("report.pdf");
    std::fs::write(&path, b"%PDF-1.4 stub").expect("write");

    let mut h = harness(FakePdfEngine::with_pages(5));
    h.app.open_document(path);
    assert_eq!(*h.app.preview(), PreviewState::Loading);

    h.pump_until_quiet(QUIET);

    match h.app.preview() {
        PreviewState::Pdf {
            page_count,
            current_page,
            scale,
        } => {
            assert_eq!(*page_count, 5);
            assert_eq!(*current_page, 1);
            assert!((scale - DEFAULT_SCALE).abs() < 1e-6);
        }
        other => panic!("expected pdf preview, got {:?}", other),
    }
    let doc = h.app.document().expect("document");
    assert_eq!(doc.name, "report.pdf");
    assert_eq!(doc.mime_hint, "application/pdf");
}

#[test]
fn paging_clamps_to_document_bounds() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("short.pdf");
    std::fs::write(&path, b"%PDF").expect("write");

    let mut h = harness(FakePdfEngine::with_pages(2));
    h.app.open_document(path);
    h.pump_until_quiet(QUIET);

    h.app.change_page(-1);
    assert_eq!(h.app.preview().page_position(), Some((1, 2)));

    h.app.change_page(1);
    h.pump_until_quiet(QUIET);
    assert_eq!(h.app.preview().page_position(), Some((2, 2)));

    h.app.change_page(1);
    assert_eq!(h.app.preview().page_position(), Some((2, 2)));
}

#[test]
fn zoom_stops_at_the_limits() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("z.pdf");
    std::fs::write(&path, b"%PDF").expect("write");

    let mut h = harness(FakePdfEngine::with_pages(1));
    h.app.open_document(path);
    h.pump_until_quiet(QUIET);

    // From the 1.2 default the 0.2 steps bottom out at 0.6: the next
    // step would land at 0.4, out of range, and is rejected.
    for _ in 0..20 {
        h.app.zoom_out();
    }
    h.pump_until_quiet(QUIET);
    let scale = h.app.preview().scale().expect("scale");
    assert!((scale - 0.6).abs() < 1e-3);
    assert!(scale >= SCALE_MIN);

    for _ in 0..40 {
        h.app.zoom_in();
    }
    h.pump_until_quiet(QUIET);
    let scale = h.app.preview().scale().expect("scale");
    assert!((scale - SCALE_MAX).abs() < 1e-3);
}

#[test]
fn opening_text_decodes_content_and_counts() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "alpha\nbeta").expect("write");

    let mut h = harness(FakePdfEngine::with_pages(1));
    h.app.open_document(path);
    h.pump_until_quiet(QUIET);

    match h.app.preview() {
        PreviewState::Text {
            content,
            char_count,
            line_count,
        } => {
            assert_eq!(content, "alpha\nbeta");
            assert_eq!(*char_count, 10);
            assert_eq!(*line_count, 2);
        }
        other => panic!("expected text preview, got {:?}", other),
    }
}

#[test]
fn unknown_extension_is_unsupported() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("archive.zip");
    std::fs::write(&path, b"PK").expect("write");

    let mut h = harness(FakePdfEngine::with_pages(1));
    h.app.open_document(path);
    h.pump_until_quiet(QUIET);

    assert_eq!(*h.app.preview(), PreviewState::Unsupported);
    assert!(h.app.document().is_some());
}

#[test]
fn pdf_decode_failure_shows_fixed_message() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("broken.pdf");
    std::fs::write(&path, b"not really a pdf").expect("write");

    let mut h = harness(FakePdfEngine::failing());
    h.app.open_document(path);
    h.pump_until_quiet(QUIET);

    match h.app.preview() {
        PreviewState::Error { message } => {
            assert_eq!(message, "Could not load PDF preview");
        }
        other => panic!("expected error preview, got {:?}", other),
    }
}

#[test]
fn unreadable_file_reports_read_failure() {
    let mut h = harness(FakePdfEngine::with_pages(1));
    h.app
        .open_document(std::path::PathBuf::from("/nonexistent/gone.txt"));
    h.pump_until_quiet(QUIET);

    match h.app.preview() {
        PreviewState::Error { message } => {
            assert!(message.starts_with("Could not read file"), "{}", message);
        }
        other => panic!("expected error preview, got {:?}", other),
    }
}

#[test]
fn stale_page_render_is_discarded() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("pages.pdf");
    std::fs::write(&path, b"%PDF").expect("write");

    let mut h = harness(FakePdfEngine::with_pages(3));
    h.app.open_document(path);
    h.pump_until_quiet(QUIET);
    assert_eq!(h.app.rendered_page(), Some(1));

    // A completion from before the current selection arrives late;
    // its generation predates every render issued above.
    h.sender
        .send(AppEvent::PageRendered {
            generation: 0,
            page: 3,
            raster: PageRaster {
                width: 2,
                height: 2,
                pixels: vec![0; 16],
            },
        })
        .expect("send");
    h.pump_until_quiet(QUIET);

    assert_eq!(h.app.rendered_page(), Some(1));

    // A current-generation render still lands.
    h.app.change_page(1);
    h.pump_until_quiet(QUIET);
    assert_eq!(h.app.rendered_page(), Some(2));
}

#[test]
fn rapid_reselection_discards_the_first_documents_events() {
    let dir = tempfile::tempdir().expect("tempdir");
    let pdf = dir.path().join("first.pdf");
    let txt = dir.path().join("second.txt");
    std::fs::write(&pdf, b"%PDF").expect("write");
    std::fs::write(&txt, "final\n").expect("write");

    let mut h = harness(FakePdfEngine::with_pages(9));
    h.app.open_document(pdf);
    h.app.open_document(txt);
    h.pump_until_quiet(QUIET);

    // Only the second selection's outcome is visible, whatever order
    // the loads completed in.
    match h.app.preview() {
        PreviewState::Text { content, .. } => assert_eq!(content, "final\n"),
        other => panic!("expected text preview, got {:?}", other),
    }
    assert_eq!(h.app.document().map(|d| d.name.as_str()), Some("second.txt"));
}
