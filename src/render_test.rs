#![allow(clippy::float_cmp)]

use serde_json::json;

use super::*;
use crate::element::{Content, IdAllocator};
use crate::ui::{DragState, RecordingState};

fn store_with(contents: Vec<(Content, Option<Point>, Color)>) -> ElementStore {
    let mut ids = IdAllocator::new();
    let mut store = ElementStore::new();
    for (content, position, color) in contents {
        store.add(Element::new(ids.next_id(), content, position, color));
    }
    store
}

fn green() -> Color {
    Color::parse("#98FB98").unwrap()
}

// =============================================================
// Elements
// =============================================================

#[test]
fn empty_board_has_no_element_views() {
    let scene = Scene::build(&ElementStore::new(), &PaletteState::default(), &UiState::default());
    assert!(scene.elements.is_empty());
    assert!(!scene.dragging);
}

#[test]
fn element_views_follow_store_order() {
    let store = store_with(vec![
        (Content::Note, Some(Point::new(1.0, 1.0)), green()),
        (Content::Doodle, Some(Point::new(2.0, 2.0)), green()),
        (Content::Photo { notice: None }, None, green()),
    ]);
    let scene = Scene::build(&store, &PaletteState::default(), &UiState::default());
    let kinds: Vec<ElementKind> = scene.elements.iter().map(|v| v.kind).collect();
    assert_eq!(kinds, [ElementKind::Note, ElementKind::Doodle, ElementKind::Photo]);
    assert_eq!(scene.elements[2].id, ElementId(3));
}

#[test]
fn only_notes_get_a_background() {
    let store = store_with(vec![
        (Content::Note, Some(Point::new(10.0, 20.0)), green()),
        (Content::Doodle, Some(Point::new(5.0, 5.0)), green()),
    ]);
    let scene = Scene::build(&store, &PaletteState::default(), &UiState::default());
    assert_eq!(scene.elements[0].background, Some(green()));
    assert_eq!(scene.elements[1].background, None);
}

#[test]
fn unpositioned_element_view_has_no_position() {
    let store = store_with(vec![(Content::Audio { notice: Some("rec".into()) }, None, Color::default())]);
    let scene = Scene::build(&store, &PaletteState::default(), &UiState::default());
    assert!(scene.elements[0].position.is_none());
    assert_eq!(scene.elements[0].label, "rec");
}

// =============================================================
// Toolbar
// =============================================================

#[test]
fn toolbar_lists_all_tools_in_order() {
    let scene = Scene::build(&ElementStore::new(), &PaletteState::default(), &UiState::default());
    let tools: Vec<Tool> = scene.toolbar.buttons.iter().map(|b| b.tool).collect();
    assert_eq!(tools, Tool::ALL);
    let draggable: Vec<bool> = scene.toolbar.buttons.iter().map(|b| b.draggable).collect();
    assert_eq!(draggable, [true, true, false, false, true]);
}

#[test]
fn microphone_highlighted_only_while_recording() {
    let mut ui = UiState::default();
    let idle = Scene::build(&ElementStore::new(), &PaletteState::default(), &ui);
    assert!(idle.toolbar.buttons.iter().all(|b| !b.highlighted));

    ui.recording = RecordingState::Recording;
    let recording = Scene::build(&ElementStore::new(), &PaletteState::default(), &ui);
    let lit: Vec<Tool> = recording.toolbar.buttons.iter().filter(|b| b.highlighted).map(|b| b.tool).collect();
    assert_eq!(lit, [Tool::Microphone]);
}

#[test]
fn swatches_hidden_while_picker_closed() {
    let scene = Scene::build(&ElementStore::new(), &PaletteState::default(), &UiState::default());
    assert!(scene.toolbar.swatches.is_empty());
}

#[test]
fn swatches_mark_active_color_when_open() {
    let palette = PaletteState { active: green(), picker_open: true };
    let scene = Scene::build(&ElementStore::new(), &palette, &UiState::default());
    assert_eq!(scene.toolbar.swatches.len(), 6);
    let active: Vec<Color> = scene.toolbar.swatches.iter().filter(|s| s.active).map(|s| s.color).collect();
    assert_eq!(active, [green()]);
}

#[test]
fn dragging_flag_mirrors_ui() {
    let ui = UiState { drag: DragState::Dragging { kind: ElementKind::Note }, ..UiState::default() };
    let scene = Scene::build(&ElementStore::new(), &PaletteState::default(), &ui);
    assert!(scene.dragging);
}

#[test]
fn scene_serializes_for_json_hosts() {
    let store = store_with(vec![(Content::Note, Some(Point::new(10.0, 20.0)), green())]);
    let value = serde_json::to_value(Scene::build(&store, &PaletteState::default(), &UiState::default())).unwrap();
    assert_eq!(
        value["elements"][0],
        json!({
            "id": 1,
            "kind": "note",
            "position": { "x": 10.0, "y": 20.0 },
            "background": "#98FB98",
            "label": "note",
        })
    );
    assert_eq!(value["toolbar"]["buttons"][1]["tool"], "note");
}
