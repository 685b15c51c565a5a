use bitmath::FieldSpec;

fn render_all(specs: &[&str]) -> String {
    specs
        .iter()
        .map(|spec| spec.parse::<FieldSpec>().unwrap().render("inst"))
        .collect()
}

#[test]
fn single_chunk_field() {
    assert_eq!(
        render_all(&["5=3:1"]),
        "| (inst & 0b11100000) >> 4 // imm[3:1]\n"
    );
}

#[test]
fn multi_chunk_field_emits_in_extraction_order() {
    // Written high-to-low, emitted low-to-high in the word: `4:3` anchors
    // at the base offset, `8` follows at base + 2.
    assert_eq!(
        render_all(&["10=8|4:3"]),
        "| (inst & 0b110000000000) >> 7 // imm[4:3]\n\
         | (inst & 0b1000000000000) >> 4 // imm[8]\n"
    );
}

#[test]
fn chunks_cross_both_shift_directions() {
    assert_eq!(
        render_all(&["2=7:6|2:1|5"]),
        "| (inst & 0b100) << 3 // imm[5]\n\
         | (inst & 0b11000) >> 2 // imm[2:1]\n\
         | (inst & 0b1100000) << 1 // imm[7:6]\n"
    );
}

#[test]
fn jal_style_immediate_scatter() {
    // The J-type layout: inst[31|30:21|20|19:12] = imm[20|10:1|11|19:12].
    // Destination order is not monotonic across the chunks; nothing here is
    // expected to reject that.
    assert_eq!(
        render_all(&["12=20|10:1|11|19:12"]),
        "| (inst & 0b11111111000000000000) // imm[19:12]\n\
         | (inst & 0b100000000000000000000) >> 9 // imm[11]\n\
         | (inst & 0b1111111111000000000000000000000) >> 20 // imm[10:1]\n\
         | (inst & 0b10000000000000000000000000000000) >> 11 // imm[20]\n"
    );
}

#[test]
fn branch_style_immediate_across_two_fields() {
    // The B-type branch offset, split over two regions of the word. Output
    // for the two arguments is concatenated in argument order.
    assert_eq!(
        render_all(&["7=4:1|11", "25=12|10:5"]),
        "| (inst & 0b10000000) << 4 // imm[11]\n\
         | (inst & 0b111100000000) >> 7 // imm[4:1]\n\
         | (inst & 0b1111110000000000000000000000000) >> 20 // imm[10:5]\n\
         | (inst & 0b10000000000000000000000000000000) >> 19 // imm[12]\n"
    );
}

#[test]
fn word_name_is_constant_across_lines() {
    let rendered = render_all(&["0=1|0", "4=2"]);
    for line in rendered.lines() {
        assert!(line.starts_with("| (inst & 0b"), "unexpected line: {line}");
    }
}

#[test]
fn no_specs_render_nothing() {
    assert_eq!(render_all(&[]), "");
}

#[test]
fn failing_spec_renders_nothing() {
    // Parsing is all-or-nothing per argument: a bad spec never reaches
    // rendering, so no partial lines can escape.
    assert!("abc=3".parse::<FieldSpec>().is_err());
    assert!("10=8|4:3|x".parse::<FieldSpec>().is_err());
}
