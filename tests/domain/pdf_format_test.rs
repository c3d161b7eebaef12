use folio::domain::PdfFormat;

#[test]
fn given_known_identifier_in_any_case_when_parsing_then_returns_known_format() {
    assert_eq!(PdfFormat::parse("PDF/A-1a"), Some(PdfFormat::PdfA1a));
    assert_eq!(PdfFormat::parse("pdf/a-2b"), Some(PdfFormat::PdfA2b));
    assert_eq!(PdfFormat::parse(" PDF/A-3B "), Some(PdfFormat::PdfA3b));
}

#[test]
fn given_blank_value_when_parsing_then_returns_none() {
    assert_eq!(PdfFormat::parse(""), None);
    assert_eq!(PdfFormat::parse("   "), None);
}

#[test]
fn given_unknown_identifier_when_parsing_then_keeps_it_verbatim() {
    let format = PdfFormat::parse("foo").unwrap();

    assert_eq!(format, PdfFormat::Other("foo".to_string()));
    assert_eq!(format.to_string(), "foo");
}

#[test]
fn given_known_formats_when_listing_shortcut_fields_then_each_has_one() {
    let fields: Vec<_> = PdfFormat::KNOWN
        .iter()
        .map(|format| format.native_shortcut_field())
        .collect();

    assert_eq!(
        fields,
        vec![
            Some("nativePdfA1aFormat"),
            Some("nativePdfA2bFormat"),
            Some("nativePdfA3bFormat"),
        ]
    );
    assert_eq!(
        PdfFormat::Other("foo".to_string()).native_shortcut_field(),
        None
    );
}
