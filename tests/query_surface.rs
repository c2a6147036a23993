//! End-to-end checks of the read-only surface lesson pages consume.

use std::collections::HashSet;

use ptable::config::Config;
use ptable::model::{catalog, Category};
use ptable::physics::{configure, Viewport};
use ptable::state::AppState;
use ptable::table::{derive_visible, FilterAction, FilterState, TableLayout};
use ptable::{Lookup, PtableError};

#[test]
fn every_element_is_reachable_both_ways() {
    let cat = catalog().unwrap();
    for el in cat.iter() {
        assert_eq!(cat.get_by_symbol(&el.symbol).unwrap(), el);
        assert_eq!(cat.get_by_atomic_number(el.atomic_number).unwrap(), el);
    }
}

#[test]
fn unknown_route_parameter_is_not_found() {
    let cat = catalog().unwrap();
    let err = cat.get_by_symbol("Unobtainium").unwrap_err();
    assert!(err.is_recoverable());
    assert!(matches!(err, PtableError::NotFound(Lookup::Symbol(_))));
}

#[test]
fn layout_is_a_bijection() {
    let cat = catalog().unwrap();
    let layout = TableLayout::resolve(cat.get_all()).unwrap();

    let mut seen = HashSet::new();
    for cell in layout.cells() {
        assert!(seen.insert(cell.position), "duplicate cell {:?}", cell.position);
    }
    let placed: HashSet<u32> = layout
        .element_cells()
        .filter_map(|c| c.element())
        .map(|el| el.atomic_number)
        .collect();
    assert_eq!(placed.len(), cat.len());
    assert_eq!(layout.placeholders().count(), 2);
}

#[test]
fn search_na_matches_name_or_symbol() {
    let cat = catalog().unwrap();
    let state = FilterState::new().set_search("Na");
    let visible = derive_visible(cat.get_all(), &state);

    let expected: Vec<_> = cat
        .iter()
        .filter(|el| {
            el.name.to_lowercase().contains("na") || el.symbol.to_lowercase().contains("na")
        })
        .collect();
    assert_eq!(visible, expected);
    assert!(visible.iter().any(|el| el.symbol == "Na"));
}

#[test]
fn reference_shell_configurations() {
    assert!(configure(0).unwrap().shells().is_empty());
    assert_eq!(configure(2).unwrap().shells(), &[2]);
    assert_eq!(configure(11).unwrap().shells(), &[2, 8, 1]);
    assert_eq!(configure(118).unwrap().total(), 118);
    assert!(matches!(configure(-1), Err(PtableError::InvalidInput(_))));
}

#[test]
fn session_flow() {
    let mut st = AppState::new(catalog().unwrap(), Config::default()).unwrap();

    st.dispatch(FilterAction::SelectGroup(Some(Category::NobleGas)));
    st.dispatch(FilterAction::SelectGroup(Some(Category::NobleGas)));
    st.dispatch(FilterAction::SetSearch("on".into()));
    let symbols: Vec<_> = st.visible().iter().map(|el| el.symbol.clone()).collect();
    assert_eq!(symbols, vec!["Ne", "Ar", "Kr", "Xe", "Rn"]);

    st.select_symbol("ar").unwrap();
    let geo = st.atom_geometry(Viewport::new(640.0, 480.0)).unwrap().unwrap();
    assert_eq!(geo.shells.len(), 3);
    assert!(geo.outer_radius() <= geo.max_radius);

    st.dispatch(FilterAction::Reset);
    assert_eq!(st.visible().len(), 118);
}
