use std::cell::RefCell;
use std::rc::Rc;

use egui::pos2;
use sticker_sketchbook::event::{HistoryEvent, PreviewEvent};
use sticker_sketchbook::{
    Command, DrawOp, EventHandler, PointerEvent, RecordingSurface, RenderLoop, Scene, SketchEvent,
    Sketchbook, redraw,
};

struct Collector(Rc<RefCell<Vec<SketchEvent>>>);

impl EventHandler for Collector {
    fn handle_event(&mut self, event: &SketchEvent, _scene: &Scene<'_>) {
        self.0.borrow_mut().push(event.clone());
    }
}

fn with_recorder() -> (Sketchbook, RecordingSurface) {
    let book = Sketchbook::default();
    let recorder = RecordingSurface::new();
    book.subscribe(Box::new(RenderLoop::new(recorder.clone())));
    (book, recorder)
}

fn drag(book: &mut Sketchbook, from: (f32, f32), to: &[(f32, f32)]) {
    book.handle_pointer(PointerEvent::Down(pos2(from.0, from.1)));
    for &(x, y) in to {
        book.handle_pointer(PointerEvent::Move {
            position: pos2(x, y),
            primary_held: true,
        });
    }
    book.handle_pointer(PointerEvent::Up);
}

#[test]
fn test_pen_stroke_through_pointer_events() {
    let mut book = Sketchbook::default();
    book.execute(Command::SetSize(4)).unwrap();

    drag(&mut book, (10.0, 10.0), &[(12.0, 11.0), (15.0, 14.0)]);

    let all = book.history().all();
    assert_eq!(all.len(), 1);
    let stroke = all[0].as_stroke().unwrap();
    assert_eq!(stroke.points(), &[pos2(10.0, 10.0), pos2(12.0, 11.0), pos2(15.0, 14.0)]);
    assert_eq!(stroke.thickness(), 4);
}

#[test]
fn test_stamp_drag_through_pointer_events() {
    let mut book = Sketchbook::default();
    book.execute(Command::SelectStamp("🌵".to_owned())).unwrap();
    book.execute(Command::SetSize(5)).unwrap();

    drag(&mut book, (50.0, 50.0), &[(60.0, 60.0)]);

    let stamp = book.history().all()[0].as_stamp().unwrap();
    assert_eq!(stamp.position(), pos2(60.0, 60.0));
    assert_eq!(stamp.glyph(), "🌵");
    assert_eq!(stamp.size(), 5);
}

#[test]
fn test_custom_glyph_is_stampable() {
    let mut book = Sketchbook::default();
    book.execute(Command::AddCustomGlyph("🦆".to_owned())).unwrap();

    drag(&mut book, (1.0, 2.0), &[]);

    assert_eq!(book.history().all()[0].as_stamp().unwrap().glyph(), "🦆");
    assert!(book.tool().glyphs().iter().any(|g| g == "🦆"));
}

#[test]
fn test_every_mutation_redraws_before_returning() {
    let (mut book, recorder) = with_recorder();

    book.handle_pointer(PointerEvent::Enter(pos2(5.0, 5.0)));
    drag(&mut book, (5.0, 5.0), &[(6.0, 6.0)]);
    book.execute(Command::Undo).unwrap();

    // The last frame on the surface matches a fresh replay of the history.
    let ops = recorder.ops();
    let last_clear = ops.iter().rposition(|op| *op == DrawOp::Clear).unwrap();
    let mut fresh = RecordingSurface::new();
    redraw(&mut fresh, &book.scene());
    assert_eq!(&ops[last_clear..], &fresh.ops()[..]);
}

#[test]
fn test_redraw_is_idempotent() {
    let (mut book, _recorder) = with_recorder();
    book.handle_pointer(PointerEvent::Enter(pos2(1.0, 1.0)));
    drag(&mut book, (1.0, 1.0), &[(2.0, 3.0), (4.0, 4.0)]);
    book.execute(Command::SelectStamp("⭐".to_owned())).unwrap();
    drag(&mut book, (30.0, 30.0), &[(31.0, 30.0)]);

    let surface = RecordingSurface::new();
    redraw(&mut surface.clone(), &book.scene());
    let first = surface.take();
    redraw(&mut surface.clone(), &book.scene());
    let second = surface.take();

    assert_eq!(first, second);
    assert_eq!(first.first(), Some(&DrawOp::Clear));
    // Preview is painted last, on top of the committed stamp.
    assert!(matches!(first.last(), Some(DrawOp::Text { glyph, .. }) if glyph == "⭐"));
}

#[test]
fn test_preview_never_touches_history() {
    let mut book = Sketchbook::default();
    drag(&mut book, (0.0, 0.0), &[(1.0, 1.0)]);
    let before = book.history().all().to_vec();

    book.handle_pointer(PointerEvent::Enter(pos2(10.0, 10.0)));
    book.handle_pointer(PointerEvent::Move {
        position: pos2(20.0, 20.0),
        primary_held: false,
    });
    book.execute(Command::SelectStamp("🎈".to_owned())).unwrap();
    book.execute(Command::SetSize(9)).unwrap();
    book.handle_pointer(PointerEvent::Leave);

    assert_eq!(book.history().all(), &before[..]);
    assert!(!book.preview().is_active());
}

#[test]
fn test_hidden_preview_is_not_drawn() {
    let (mut book, recorder) = with_recorder();
    book.handle_pointer(PointerEvent::Enter(pos2(10.0, 10.0)));
    book.handle_pointer(PointerEvent::Leave);

    let ops = recorder.ops();
    assert_eq!(ops.last(), Some(&DrawOp::Clear));
}

#[test]
fn test_notifications_in_emission_order() {
    let mut book = Sketchbook::default();
    let seen = Rc::new(RefCell::new(Vec::new()));
    book.subscribe(Box::new(Collector(seen.clone())));

    book.handle_pointer(PointerEvent::Down(pos2(3.0, 3.0)));
    book.handle_pointer(PointerEvent::Move {
        position: pos2(4.0, 4.0),
        primary_held: true,
    });
    book.handle_pointer(PointerEvent::Up);
    book.handle_pointer(PointerEvent::Up);
    book.handle_pointer(PointerEvent::Leave);

    assert_eq!(
        *seen.borrow(),
        vec![
            SketchEvent::HistoryChanged(HistoryEvent::Begun { kind: "stroke" }),
            SketchEvent::HistoryChanged(HistoryEvent::Extended),
            SketchEvent::PreviewChanged(PreviewEvent::Moved {
                position: pos2(4.0, 4.0),
            }),
            SketchEvent::HistoryChanged(HistoryEvent::Finished),
            SketchEvent::PreviewChanged(PreviewEvent::Hidden),
        ]
    );
}

#[test]
fn test_undo_then_new_action_clears_redo() {
    let mut book = Sketchbook::default();
    drag(&mut book, (1.0, 1.0), &[]);
    let a = book.history().all()[0].clone();

    book.execute(Command::Undo).unwrap();
    assert_eq!(book.history().redo_stack(), &[a]);

    book.execute(Command::SelectStamp("⭐".to_owned())).unwrap();
    drag(&mut book, (2.0, 2.0), &[]);
    assert!(book.history().redo_stack().is_empty());
    assert_eq!(book.history().undo_stack().len(), 1);
    assert_eq!(book.history().undo_stack()[0].as_stamp().unwrap().glyph(), "⭐");
}

#[test]
fn test_clear_then_redo_restores_undone_entries() {
    let mut book = Sketchbook::default();
    drag(&mut book, (1.0, 1.0), &[]);
    drag(&mut book, (2.0, 2.0), &[]);
    book.execute(Command::Undo).unwrap();

    book.execute(Command::ClearAll).unwrap();
    assert!(book.history().all().is_empty());

    book.execute(Command::Redo).unwrap();
    assert_eq!(book.history().all().len(), 1);
    assert_eq!(book.history().all()[0].as_stroke().unwrap().points(), &[pos2(2.0, 2.0)]);
}
