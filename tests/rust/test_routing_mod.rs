use super::*;

#[test]
fn straight_path_arms_are_ns_or_ew_only() {
    let path = vec![Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)];
    let arms = arms_for_path(&path);
    assert_eq!(arms[&Point::new(1, 0)], Arms::new(false, false, true, true));
}

#[test]
fn endpoint_has_a_single_arm() {
    let path = vec![Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)];
    let arms = arms_for_path(&path);
    assert_eq!(arms[&Point::new(0, 0)], Arms::new(false, false, false, true));
    assert_eq!(arms[&Point::new(2, 0)], Arms::new(false, false, true, false));
}

#[test]
fn shared_cell_across_two_paths_merges_into_a_junction() {
    let p1 = vec![Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)];
    let p2 = vec![Point::new(1, 1), Point::new(1, 0), Point::new(1, -1)];

    let mut arms = arms_for_path(&p1);
    for (point, a) in arms_for_path(&p2) {
        arms.entry(point)
            .and_modify(|existing| *existing = existing.merge(a))
            .or_insert(a);
    }
    assert_eq!(arms[&Point::new(1, 0)].count(), 4);
}

#[test]
fn single_cell_path_has_no_arms() {
    let path = vec![Point::new(0, 0)];
    let arms = arms_for_path(&path);
    assert_eq!(arms[&Point::new(0, 0)], Arms::default());
}
