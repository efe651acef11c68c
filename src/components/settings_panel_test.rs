use super::*;

#[test]
fn rate_label_shows_one_decimal() {
    assert_eq!(rate_label(1.0), "1.0x");
    assert_eq!(rate_label(1.5), "1.5x");
    assert_eq!(rate_label(2.0), "2.0x");
}
