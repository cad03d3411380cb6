use artistic_canvas::command::{Command, CommandOutcome, DUPLICATE_OFFSET};
use artistic_canvas::palette;
use artistic_canvas::shape::{Shape, ShapeKind};
use artistic_canvas::tools::{ShapeDefaults, Tool};
use artistic_canvas::{EditorModel, EditorState};
use egui::{Pos2, Vec2};

fn create_model() -> EditorModel {
    EditorModel::new(ShapeDefaults::FULL)
}

fn create_shape(model: &mut EditorModel, kind: ShapeKind, pos: Pos2) {
    let outcome = Command::CreateShape { kind, pos }.execute(model).unwrap();
    assert_eq!(outcome, CommandOutcome::Applied);
}

#[test]
fn test_create_uses_current_color_and_selects() {
    let mut model = create_model();
    Command::SetColor(palette::RED).execute(&mut model).unwrap();
    create_shape(&mut model, ShapeKind::Rectangle, Pos2::new(200.0, 200.0));

    assert_eq!(model.document.len(), 1);
    let shape = model.selected_shape().unwrap();
    assert_eq!(shape.kind(), ShapeKind::Rectangle);
    assert_eq!(shape.color(), palette::RED);
    assert_eq!(shape.anchor(), Pos2::new(200.0, 200.0));
}

#[test]
fn test_duplicate_offsets_copy_and_selects_it() {
    let mut model = create_model();
    Command::SetColor(palette::RED).execute(&mut model).unwrap();
    create_shape(&mut model, ShapeKind::Circle, Pos2::new(100.0, 100.0));
    let original = model.state.selected().unwrap();

    Command::DuplicateSelected.execute(&mut model).unwrap();

    assert_eq!(model.document.len(), 2);
    let copy_id = model.state.selected().unwrap();
    assert_ne!(copy_id, original);

    let copy = model.document.get(copy_id).unwrap();
    assert_eq!(copy.anchor(), Pos2::new(110.0, 110.0));
    assert_eq!(copy.color(), palette::RED);
    assert_eq!(model.document.get(original).unwrap().anchor() + DUPLICATE_OFFSET, copy.anchor());
    // The copy is painted on top.
    assert_eq!(model.document.index_of(copy_id), Some(1));
}

#[test]
fn test_delete_clears_selection() {
    let mut model = create_model();
    create_shape(&mut model, ShapeKind::Triangle, Pos2::new(300.0, 300.0));

    let outcome = Command::DeleteSelected.execute(&mut model).unwrap();
    assert_eq!(outcome, CommandOutcome::Applied);
    assert!(model.document.is_empty());
    assert_eq!(model.state, EditorState::Idle);
}

#[test]
fn test_front_then_back_restores_bottom_position() {
    let mut model = create_model();
    create_shape(&mut model, ShapeKind::Circle, Pos2::new(100.0, 100.0));
    let first = model.state.selected().unwrap();
    create_shape(&mut model, ShapeKind::Rectangle, Pos2::new(200.0, 200.0));
    create_shape(&mut model, ShapeKind::Triangle, Pos2::new(300.0, 300.0));

    model.state.select(first);
    Command::BringToFront.execute(&mut model).unwrap();
    assert_eq!(model.document.index_of(first), Some(2));

    Command::SendToBack.execute(&mut model).unwrap();
    assert_eq!(model.document.index_of(first), Some(0));
    assert_eq!(model.document.len(), 3);
}

#[test]
fn test_invert_twice_restores_color() {
    let mut model = create_model();
    create_shape(&mut model, ShapeKind::Circle, Pos2::new(100.0, 100.0));
    let before = model.selected_shape().unwrap().color();

    Command::InvertSelectedColor.execute(&mut model).unwrap();
    assert_eq!(model.selected_shape().unwrap().color(), palette::invert(before));

    Command::InvertSelectedColor.execute(&mut model).unwrap();
    assert_eq!(model.selected_shape().unwrap().color(), before);
}

#[test]
fn test_transform_commands_edit_selected_shape() {
    let mut model = create_model();
    create_shape(&mut model, ShapeKind::Rectangle, Pos2::new(200.0, 200.0));

    Command::TranslateSelected(Vec2::new(5.0, 0.0)).execute(&mut model).unwrap();
    Command::RotateSelected(5.0).execute(&mut model).unwrap();
    Command::ResizeSelected(2.0).execute(&mut model).unwrap();

    let shape = model.selected_shape().unwrap();
    assert_eq!(shape.anchor(), Pos2::new(205.0, 200.0));
    assert!((shape.rotation() - 5.0).abs() < 1e-3);
}

#[test]
fn test_invalid_resize_surfaces_error() {
    let mut model = create_model();
    create_shape(&mut model, ShapeKind::Circle, Pos2::new(100.0, 100.0));
    assert!(Command::ResizeSelected(-1.0).execute(&mut model).is_err());
}

#[test]
fn test_erase_removes_first_hit_in_paint_order_and_forgets_selection() {
    let mut model = create_model();
    create_shape(&mut model, ShapeKind::Circle, Pos2::new(100.0, 100.0));
    let bottom = model.state.selected().unwrap();
    create_shape(&mut model, ShapeKind::Rectangle, Pos2::new(110.0, 100.0));
    let top = model.state.selected().unwrap();

    Command::SetTool(Tool::Eraser).execute(&mut model).unwrap();
    model.state.select(bottom);

    let miss = Command::EraseAt(Pos2::new(500.0, 500.0)).execute(&mut model).unwrap();
    assert_eq!(miss, CommandOutcome::Ignored);

    // Both shapes cover this point; the one painted first goes.
    Command::EraseAt(Pos2::new(105.0, 100.0)).execute(&mut model).unwrap();
    assert!(model.document.get(bottom).is_none());
    assert!(model.document.get(top).is_some());
    assert!(model.state.is_idle());
}

#[test]
fn test_clear_empties_document() {
    let mut model = create_model();
    create_shape(&mut model, ShapeKind::Circle, Pos2::new(100.0, 100.0));
    create_shape(&mut model, ShapeKind::Triangle, Pos2::new(300.0, 300.0));

    Command::Clear.execute(&mut model).unwrap();
    assert!(model.document.is_empty());
    assert!(!model.has_selection());
}

#[test]
fn test_set_color_recolors_selection() {
    let mut model = create_model();
    create_shape(&mut model, ShapeKind::Circle, Pos2::new(100.0, 100.0));

    Command::SetColor(palette::YELLOW).execute(&mut model).unwrap();
    assert_eq!(model.tools.color, palette::YELLOW);
    assert_eq!(model.selected_shape().unwrap().color(), palette::YELLOW);
}

#[test]
fn test_set_tool_drops_selection() {
    let mut model = create_model();
    create_shape(&mut model, ShapeKind::Circle, Pos2::new(100.0, 100.0));

    Command::SetTool(Tool::Triangle).execute(&mut model).unwrap();
    assert_eq!(model.tools.tool, Tool::Triangle);
    assert!(!model.has_selection());
    assert_eq!(model.document.len(), 1);
}

#[test]
fn test_selection_commands_without_selection_are_ignored() {
    let mut model = create_model();
    create_shape(&mut model, ShapeKind::Circle, Pos2::new(100.0, 100.0));
    model.state.clear();

    for command in [
        Command::ResizeSelected(1.1),
        Command::TranslateSelected(Vec2::new(5.0, 0.0)),
        Command::RotateSelected(5.0),
        Command::DeleteSelected,
        Command::BringToFront,
        Command::SendToBack,
        Command::DuplicateSelected,
        Command::InvertSelectedColor,
    ] {
        assert_eq!(command.execute(&mut model).unwrap(), CommandOutcome::Ignored);
    }
    assert_eq!(model.document.len(), 1);
}

#[test]
fn test_export_is_deferred_to_caller() {
    let mut model = create_model();
    assert_eq!(Command::Export.execute(&mut model).unwrap(), CommandOutcome::ExportRequested);
}
