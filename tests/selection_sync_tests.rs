use bar_visual_rs::core::{DataPoint, SelectionId, SelectionSet};
use bar_visual_rs::interaction::{
    ClickModifiers, Emphasis, EmphasisMap, LocalSelectionManager, SelectionAuthority,
    SelectionRequest, compute_emphasis, sync_emphasis,
};
use bar_visual_rs::render::Color;
use futures::executor::block_on;

fn points() -> Vec<DataPoint> {
    ["X", "Y", "Z"]
        .iter()
        .enumerate()
        .map(|(row, category)| DataPoint {
            value: Some(row as f64),
            category: (*category).to_owned(),
            color: Color::BLACK,
            stroke_color: None,
            stroke_width: 0.0,
            identity: SelectionId::for_row("Sales.Region", row),
        })
        .collect()
}

#[test]
fn empty_selection_leaves_every_point_neutral() {
    let emphasis = compute_emphasis(&points(), &SelectionSet::new());
    assert_eq!(emphasis.levels(), &[Emphasis::Neutral; 3]);
}

#[test]
fn selected_point_is_full_and_others_dimmed() {
    let points = points();
    let selection = SelectionSet::single(points[0].identity.clone());
    let emphasis = compute_emphasis(&points, &selection);
    assert_eq!(
        emphasis.levels(),
        &[Emphasis::Full, Emphasis::Dimmed, Emphasis::Dimmed]
    );
}

#[test]
fn hierarchical_token_covers_descendant_points() {
    let points = points();
    let selection = SelectionSet::single(SelectionId::new(["Sales.Region"]));
    let emphasis = compute_emphasis(&points, &selection);
    assert_eq!(emphasis.count(Emphasis::Full), 3);

    let unrelated = SelectionSet::single(SelectionId::new(["Sales.Product"]));
    let emphasis = compute_emphasis(&points, &unrelated);
    assert_eq!(emphasis.count(Emphasis::Dimmed), 3);
}

#[test]
fn deeper_token_does_not_cover_shallower_point() {
    let parent = SelectionId::new(["Region"]);
    let child = SelectionId::new(["Region", "North"]);
    assert!(parent.includes(&child));
    assert!(!child.includes(&parent));
    assert!(child.includes(&child));
    assert!(!SelectionId::new(Vec::<String>::new()).includes(&child));
}

#[test]
fn absent_selection_keeps_previous_emphasis() {
    let points = points();
    let previous = compute_emphasis(&points, &SelectionSet::single(points[1].identity.clone()));
    let synced = sync_emphasis(&points, None, &previous);
    assert_eq!(synced, previous);
}

#[test]
fn sync_is_idempotent() {
    let points = points();
    let selection = SelectionSet::single(points[2].identity.clone());
    let first = sync_emphasis(&points, Some(&selection), &EmphasisMap::default());
    let second = sync_emphasis(&points, Some(&selection), &first);
    assert_eq!(first, second);
}

#[test]
fn plain_click_replaces_and_modified_click_toggles() {
    let points = points();
    let mut manager = LocalSelectionManager::new();

    let confirmed = block_on(manager.select(&points[0].identity, false)).expect("select");
    assert_eq!(confirmed, SelectionSet::single(points[0].identity.clone()));

    let confirmed = block_on(manager.select(&points[1].identity, false)).expect("select");
    assert_eq!(confirmed, SelectionSet::single(points[1].identity.clone()));

    let modifiers = ClickModifiers::MULTI_SELECT;
    let confirmed =
        block_on(manager.select(&points[2].identity, modifiers.multi_select)).expect("toggle");
    assert_eq!(confirmed.len(), 2);

    let confirmed =
        block_on(manager.select(&points[1].identity, modifiers.multi_select)).expect("toggle");
    assert_eq!(confirmed, SelectionSet::single(points[2].identity.clone()));

    let confirmed = block_on(manager.clear()).expect("clear");
    assert!(confirmed.is_empty());
    assert!(manager.current().is_empty());
}

#[test]
fn deferred_manager_confirms_in_issue_order() {
    let points = points();
    let mut manager = LocalSelectionManager::deferred();
    let first = manager.select(&points[0].identity, false);
    let second = manager.select(&points[1].identity, true);
    assert_eq!(manager.pending_len(), 2);
    assert!(manager.current().is_empty());

    assert_eq!(manager.confirm_pending(), 2);
    let first = block_on(first).expect("first");
    let second = block_on(second).expect("second");
    assert_eq!(first.len(), 1);
    assert_eq!(second.len(), 2);
    assert_eq!(manager.current(), second);
}

#[test]
fn rejected_request_leaves_selection_untouched() {
    let points = points();
    let mut manager = LocalSelectionManager::deferred();
    let pending = manager.select(&points[0].identity, false);
    assert_eq!(manager.reject_pending("host busy"), 1);
    assert!(block_on(pending).is_err());
    assert!(manager.current().is_empty());
}

#[test]
fn request_application_matches_click_semantics() {
    let a = SelectionId::new(["a"]);
    let b = SelectionId::new(["b"]);
    let current = SelectionSet::single(a.clone());

    let replace = SelectionRequest::Select {
        identity: b.clone(),
        multi_select: false,
    };
    assert_eq!(replace.apply_to(&current), SelectionSet::single(b.clone()));

    let toggle = SelectionRequest::Select {
        identity: a.clone(),
        multi_select: true,
    };
    assert!(toggle.apply_to(&current).is_empty());

    assert!(SelectionRequest::Clear.apply_to(&current).is_empty());
}

#[test]
fn subscriptions_are_tracked_for_external_changes() {
    let mut manager = LocalSelectionManager::new();
    let first = manager.subscribe();
    let second = manager.subscribe();
    assert_ne!(first, second);

    manager.unsubscribe(first);
    let notified = manager.apply_external(SelectionSet::single(SelectionId::new(["x"])));
    assert_eq!(notified, vec![second]);
    assert_eq!(manager.current().len(), 1);
}
