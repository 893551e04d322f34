use super::*;

// =============================================================
// Registry
// =============================================================

#[test]
fn registry_has_eight_handles_in_order() {
    let ids: Vec<HandleId> = HANDLES.iter().map(|h| h.id).collect();
    assert_eq!(
        ids,
        vec![
            HandleId::Right,
            HandleId::Left,
            HandleId::Bottom,
            HandleId::Top,
            HandleId::BottomRight,
            HandleId::TopLeft,
            HandleId::BottomLeft,
            HandleId::TopRight,
        ]
    );
}

#[test]
fn descriptor_round_trips_to_its_id() {
    for h in &HANDLES {
        assert_eq!(h.id.descriptor().id, h.id);
    }
}

#[test]
fn edge_handles_have_one_anchor_and_single_axis() {
    for h in &HANDLES[..4] {
        assert_eq!(h.anchors.len(), 1, "{:?}", h.id);
        assert_ne!(h.axis, Axis::Both, "{:?}", h.id);
    }
}

#[test]
fn corner_handles_have_two_anchors_and_both_axes() {
    for h in &HANDLES[4..] {
        assert_eq!(h.anchors.len(), 2, "{:?}", h.id);
        assert_eq!(h.axis, Axis::Both, "{:?}", h.id);
    }
}

#[test]
fn axis_matches_anchor_orientation() {
    for h in &HANDLES {
        let horizontal = h.has_anchor(Anchor::Left) || h.has_anchor(Anchor::Right);
        let vertical = h.has_anchor(Anchor::Top) || h.has_anchor(Anchor::Bottom);
        assert_eq!(h.axis.horizontal(), horizontal, "{:?}", h.id);
        assert_eq!(h.axis.vertical(), vertical, "{:?}", h.id);
    }
}

#[test]
fn top_left_anchors() {
    let d = HandleId::TopLeft.descriptor();
    assert!(d.has_anchor(Anchor::Top));
    assert!(d.has_anchor(Anchor::Left));
    assert!(!d.has_anchor(Anchor::Bottom));
    assert!(!d.has_anchor(Anchor::Right));
}

// =============================================================
// Names
// =============================================================

#[test]
fn class_names_split_lines_and_squares() {
    assert_eq!(HandleId::Right.class_name(), "resize-line__right");
    assert_eq!(HandleId::TopRight.class_name(), "resize-square__top-right");
}

#[test]
fn from_name_accepts_kebab_and_class() {
    assert_eq!(HandleId::from_name("bottom-left"), Some(HandleId::BottomLeft));
    assert_eq!(HandleId::from_name("resize-line__top"), Some(HandleId::Top));
    assert_eq!(HandleId::from_name("middle"), None);
}

#[test]
fn names_are_unique() {
    for (i, a) in HANDLES.iter().enumerate() {
        for (j, b) in HANDLES.iter().enumerate() {
            if i != j {
                assert_ne!(a.id.name(), b.id.name());
                assert_ne!(a.id.class_name(), b.id.class_name());
            }
        }
    }
}

#[test]
fn handle_id_serde_is_kebab_case() {
    let json = serde_json::to_string(&HandleId::BottomRight).unwrap();
    assert_eq!(json, "\"bottom-right\"");
}
