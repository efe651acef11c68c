use super::*;

// =============================================================
// WorldState
// =============================================================

#[test]
fn world_state_clamps_health_into_range() {
    assert_eq!(WorldState::new("x".into(), vec![], 250, 1).health, 100);
    assert_eq!(WorldState::new("x".into(), vec![], -10, 1).health, 0);
    assert_eq!(WorldState::new("x".into(), vec![], 42, 1).health, 42);
}

#[test]
fn world_state_negative_level_becomes_zero() {
    assert_eq!(WorldState::new("x".into(), vec![], 100, -3).level, 0);
}

#[test]
fn health_label_formats_over_max() {
    let world = WorldState::new("Camp".into(), vec![], 85, 2);
    assert_eq!(world.health_label(), "85/100");
}

#[test]
fn inventory_labels_replace_every_underscore() {
    let world = WorldState::new("Camp".into(), vec!["rusty_iron_key".into(), "torch".into()], 100, 1);
    assert_eq!(world.inventory_labels(), vec!["rusty iron key".to_owned(), "torch".to_owned()]);
}

// =============================================================
// AdventureContext
// =============================================================

#[test]
fn context_labels_when_active() {
    let ctx = AdventureContext {
        active: true,
        location: Some("Mystic Forest".into()),
        inventory: vec!["map".into(), "rope".into()],
    };
    assert_eq!(ctx.location_label(), "Mystic Forest");
    assert_eq!(ctx.item_count_label(), "2 items");
    assert_eq!(ctx.items_label(), "map, rope");
    assert_eq!(ctx.status_label(), "Adventure Active");
    assert_eq!(ctx.sidebar_location_label(), "Mystic Forest");
}

#[test]
fn context_labels_when_inactive_or_missing() {
    let ctx = AdventureContext::default();
    assert_eq!(ctx.location_label(), UNKNOWN_LOCATION);
    assert_eq!(ctx.item_count_label(), "0 items");
    assert_eq!(ctx.items_label(), "None");
    assert_eq!(ctx.status_label(), "Real World");
    assert_eq!(ctx.sidebar_location_label(), "Cozy Space");
}
