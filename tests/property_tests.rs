use proptest::prelude::*;
use steno_drill::layouts::KeyLayout;
use steno_drill::stroke::decode;

mod common;
use common::{mejiro31, uni_v4};

/// Every pressed cell is explained by a character in the stroke, either
/// directly or through a link group.
fn no_phantom_presses(layout: &KeyLayout, stroke: &str) -> Result<(), TestCaseError> {
    let m = decode(layout, stroke);
    let typed = |label: &str| !label.is_empty() && stroke.contains(label);

    for pos in m.pressed() {
        let direct = typed(layout.label(pos));
        let linked = layout
            .links
            .iter()
            .filter(|link| link.cells.contains(&pos))
            .any(|link| link.cells.iter().any(|&p| typed(layout.label(p))));
        prop_assert!(
            direct || linked,
            "{} pressed ({}, {}) '{}' for stroke '{}'",
            layout.name,
            pos.row,
            pos.col,
            layout.label(pos),
            stroke
        );
    }
    Ok(())
}

proptest! {
    #[test]
    fn test_shape_matches_layout(stroke in "[-#*STKPWHRAOEUFBLGDZYNIntkx]{0,16}") {
        for layout in [uni_v4(), mejiro31()] {
            let m = decode(&layout, &stroke);
            prop_assert_eq!(m.rows(), layout.rows());
            prop_assert_eq!(m.cols(), layout.cols());
        }
    }

    #[test]
    fn test_never_presses_blank_cells(stroke in "[-#*STKPWHRAOEUFBLGDZYNIntk]{0,16}") {
        for layout in [uni_v4(), mejiro31()] {
            let m = decode(&layout, &stroke);
            for pos in m.pressed() {
                prop_assert!(!layout.is_blank(pos));
            }
        }
    }

    #[test]
    fn test_no_phantom_presses(stroke in "[-#*STKPWHRAOEUFBLGDZYNIntk]{0,16}") {
        no_phantom_presses(&uni_v4(), &stroke)?;
        no_phantom_presses(&mejiro31(), &stroke)?;
    }

    #[test]
    fn test_decode_is_deterministic(stroke in "[-#*STKPWHRAOEUFBLGDZ]{0,16}") {
        let layout = uni_v4();
        prop_assert_eq!(decode(&layout, &stroke), decode(&layout, &stroke));
    }

    #[test]
    fn test_link_groups_agree(stroke in "[-#*STKPWHRAOEUFBLGDZYNIntk]{0,16}") {
        for layout in [uni_v4(), mejiro31()] {
            let m = decode(&layout, &stroke);
            for link in &layout.links {
                let first = m.get(link.cells[0]);
                prop_assert!(link.cells.iter().all(|&p| m.get(p) == first));
            }
        }
    }

    #[test]
    fn test_presses_bounded_by_input(stroke in "[#*STKPWHRAOEUFBLGDZ]{0,16}") {
        let layout = uni_v4();
        let m = decode(&layout, &stroke);
        let link_extra: usize = layout.links.iter().map(|l| l.cells.len() - 1).sum();
        prop_assert!(m.count() <= stroke.chars().count() + link_extra);
    }
}
