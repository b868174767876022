use intake_questionnaire::render::RenderedPdf;

#[test]
fn save_reports_the_written_size() {
    let directory = tempfile::tempdir().expect("create temp dir");
    let path = directory.path().join("questionnaire.pdf");
    let pdf = RenderedPdf {
        bytes: b"%PDF-1.4 placeholder".to_vec(),
    };

    let size = pdf.save(&path).expect("save succeeds");
    assert_eq!(size, pdf.bytes.len() as u64);
    assert_eq!(std::fs::read(&path).expect("read back"), pdf.bytes);
}

#[test]
fn save_to_an_unwritable_path_fails_without_partial_output() {
    let directory = tempfile::tempdir().expect("create temp dir");
    let path = directory
        .path()
        .join("missing-subdirectory")
        .join("questionnaire.pdf");
    let pdf = RenderedPdf {
        bytes: b"%PDF-1.4 placeholder".to_vec(),
    };

    assert!(pdf.save(&path).is_err());
    assert!(!path.exists(), "no partial file may be left behind");
}
