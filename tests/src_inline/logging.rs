use super::*;

#[test]
fn test_default_directive() {
    assert_eq!(default_directive(false), "worshiproom=info");
    assert_eq!(default_directive(true), "worshiproom=debug");
}

#[test]
fn test_init_twice_is_harmless() {
    init(false);
    init(true);
}
