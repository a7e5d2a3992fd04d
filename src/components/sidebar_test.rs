use super::*;

#[test]
fn initial_from_trimmed_name() {
    assert_eq!(avatar_initial("  meera"), "M");
    assert_eq!(avatar_initial(""), "?");
    assert_eq!(avatar_initial("ßeta"), "SS");
}

#[test]
fn classes_reflect_state() {
    assert_eq!(sidebar_class(true), "sidebar sidebar--open");
    assert_eq!(sidebar_class(false), "sidebar sidebar--closed");
    assert_eq!(menu_item_class(true), "sidebar__item sidebar__item--active");
    assert_eq!(menu_item_class(false), "sidebar__item");
}
