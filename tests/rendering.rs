use intake_questionnaire::content;
use intake_questionnaire::fonts;
use intake_questionnaire::render::render_questionnaire;
use sha2::{Digest, Sha256};

fn render_pdf() -> Option<Vec<u8>> {
    if !fonts::fonts_available() {
        return None;
    }
    let questionnaire = content::questionnaire();
    let pdf = render_questionnaire(&questionnaire).expect("render questionnaire");
    Some(pdf.bytes)
}

fn skip_notice(test: &str) {
    eprintln!(
        "Skipping {}: bundled fonts missing. Set INTAKE_FONTS_DIR or install assets/fonts \
         (see assets/fonts/README.md).",
        test
    );
}

/// Volatile metadata regions embedded by the PDF writer: values between the
/// start and end tags are zeroed out before hashing.
const VOLATILE_REGIONS: &[(&[u8], &[u8])] = &[
    (b"/CreationDate(", b")"),
    (b"/ModDate(", b")"),
    (b"/ID[", b"]"),
    (b"/Producer(", b")"),
    (b"<xmp:CreateDate>", b"</xmp:CreateDate>"),
    (b"<xmp:ModifyDate>", b"</xmp:ModifyDate>"),
    (b"<xmp:MetadataDate>", b"</xmp:MetadataDate>"),
    (b"<xmpMM:DocumentID>", b"</xmpMM:DocumentID>"),
    (b"<xmpMM:InstanceID>", b"</xmpMM:InstanceID>"),
    (b"<xmpMM:VersionID>", b"</xmpMM:VersionID>"),
];

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

fn zero_regions(data: &mut Vec<u8>, start: &[u8], end: &[u8]) {
    let mut offset = 0;
    while let Some(position) = find(&data[offset..], start) {
        let begin = offset + position + start.len();
        let Some(length) = find(&data[begin..], end) else {
            break;
        };
        for byte in &mut data[begin..begin + length] {
            *byte = b'0';
        }
        offset = begin + length + end.len();
    }
}

fn normalized_hash(bytes: &[u8]) -> [u8; 32] {
    let mut normalized = bytes.to_vec();
    for (start, end) in VOLATILE_REGIONS {
        zero_regions(&mut normalized, start, end);
    }
    Sha256::digest(&normalized).into()
}

/// Counts `/Type /Page` dictionary entries, tolerating optional whitespace
/// and excluding the `/Pages` tree node.
fn page_count(bytes: &[u8]) -> usize {
    const TYPE_KEY: &[u8] = b"/Type";
    let mut count = 0;
    let mut offset = 0;
    while let Some(position) = find(&bytes[offset..], TYPE_KEY) {
        let mut cursor = offset + position + TYPE_KEY.len();
        while cursor < bytes.len() && bytes[cursor].is_ascii_whitespace() {
            cursor += 1;
        }
        if bytes[cursor..].starts_with(b"/Page") && !bytes[cursor..].starts_with(b"/Pages") {
            count += 1;
        }
        offset = offset + position + TYPE_KEY.len();
    }
    count
}

#[test]
fn renders_a_valid_pdf() {
    let Some(bytes) = render_pdf() else {
        skip_notice("renders_a_valid_pdf");
        return;
    };
    assert!(!bytes.is_empty(), "rendered PDF must not be empty");
    assert!(bytes.starts_with(b"%PDF-"), "output must carry the PDF magic");
    assert!(
        find(&bytes, b"%%EOF").is_some(),
        "output must carry the PDF trailer"
    );
}

#[test]
fn every_section_starts_its_own_page() {
    let Some(bytes) = render_pdf() else {
        skip_notice("every_section_starts_its_own_page");
        return;
    };
    let sections = content::questionnaire().sections().len();
    assert!(
        page_count(&bytes) >= sections,
        "expected at least {} pages, found {}",
        sections,
        page_count(&bytes)
    );
}

#[test]
fn rendering_is_deterministic() {
    let Some(bytes_a) = render_pdf() else {
        skip_notice("rendering_is_deterministic");
        return;
    };
    let Some(bytes_b) = render_pdf() else {
        skip_notice("rendering_is_deterministic");
        return;
    };

    assert_eq!(bytes_a.len(), bytes_b.len(), "PDF sizes should match");
    assert_eq!(
        normalized_hash(&bytes_a),
        normalized_hash(&bytes_b),
        "renders must be identical after normalizing embedded metadata"
    );
}
