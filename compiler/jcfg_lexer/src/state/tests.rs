use super::*;
use std::collections::HashSet;

#[test]
fn initial_state_is_inside_section() {
    assert_eq!(State::INITIAL, State::InsideSection);
}

#[test]
fn all_lists_each_state_once() {
    let unique: HashSet<State> = State::ALL.iter().copied().collect();
    assert_eq!(unique.len(), State::ALL.len());
}

#[test]
fn names_are_distinct() {
    let names: HashSet<&str> = State::ALL.iter().map(|s| s.name()).collect();
    assert_eq!(names.len(), State::ALL.len());
}

#[test]
fn display_uses_name() {
    assert_eq!(State::BlockComment.to_string(), "block-comment");
}
