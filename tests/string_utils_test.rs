use rustf_text::U;
use std::sync::Arc;
use std::thread;

#[test]
fn test_scraped_text_cleanup() {
    // Typical artefacts of copy-pasted or scraped HTML text
    let scraped = "\u{FEFF}Price:\u{00A0}42\u{200B}€\r\n\tIn stock\u{0007}";
    assert_eq!(
        U::remove_control_characters(scraped),
        "Price:\u{00A0}42€In stock"
    );
}

#[test]
fn test_documented_examples() {
    assert_eq!(U::remove_control_characters(""), "");
    assert_eq!(U::remove_control_characters("a\x00b\x1fc"), "abc");
    assert_eq!(U::hyphen_to_snake("a-b-c"), "a_b_c");
    assert_eq!(U::snake_to_hyphen("a_b_c"), "a-b-c");
    assert_eq!(U::capitalize("this is a test"), "This Is A Test");
}

#[test]
fn test_url_param_to_field_name() {
    let params = ["sort-by", "page-size", "q"];
    let fields: Vec<String> = params.iter().map(|p| U::hyphen_to_snake(p)).collect();
    assert_eq!(fields, vec!["sort_by", "page_size", "q"]);

    let back: Vec<String> = fields.iter().map(|f| U::snake_to_hyphen(f)).collect();
    assert_eq!(back, params);
}

#[test]
fn test_concurrent_calls() {
    let input = Arc::new("user-id\u{0000}_name".to_string());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let input = Arc::clone(&input);
            thread::spawn(move || {
                (
                    U::remove_control_characters(&input),
                    U::hyphen_to_snake(&input),
                    U::snake_to_hyphen(&input),
                )
            })
        })
        .collect();

    for handle in handles {
        let (cleaned, snaked, hyphenated) = handle.join().unwrap();
        assert_eq!(cleaned, "user-id_name");
        assert_eq!(snaked, "user_id\u{0000}_name");
        assert_eq!(hyphenated, "user-id\u{0000}-name");
    }
}
