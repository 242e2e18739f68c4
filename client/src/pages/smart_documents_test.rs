use super::*;

#[test]
fn text_literals_are_quoted() {
    assert_eq!(value_literal(ProgramValue::Text("EBITDA")), "\"EBITDA\"");
    assert_eq!(value_class(ProgramValue::Text("EBITDA")), "code__string");
}

#[test]
fn numbers_keep_source_precision() {
    assert_eq!(value_literal(ProgramValue::Number("0.50")), "0.50");
    assert_eq!(value_literal(ProgramValue::Number("-0.25")), "-0.25");
    assert_eq!(value_class(ProgramValue::Number("3.0")), "code__number");
}

#[test]
fn booleans_render_bare() {
    assert_eq!(value_literal(ProgramValue::Bool(true)), "true");
    assert_eq!(value_class(ProgramValue::Bool(false)), "code__keyword");
}

#[test]
fn program_header_opens_block() {
    let first = &mock::covenant_programs()[0];
    assert_eq!(program_header(first), "covenant MinimumEBITDA {");
}

#[test]
fn legal_view_has_three_articles() {
    let headings: Vec<_> = mock::credit_agreement().iter().map(|a| a.heading).collect();
    assert_eq!(headings.len(), 3);
    assert!(headings[0].starts_with("Article IV"));
    assert!(headings[2].starts_with("Article VI"));
}
