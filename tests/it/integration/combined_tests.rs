//! Drag and resize controllers attached to the same panel.
//!
//! The mock host routes presses the way a DOM does: the innermost listener
//! sees the event first and it bubbles to the panel unless propagation is
//! stopped.

use crate::helpers::{MockHost, PANEL, handle_for, press, press_on};
use homelab_panels::{
    Direction, DragOptions, Draggable, ElementId, EventResponse, PanelEvent, Point, PointerEvent,
    Resizable, ResizeOptions, Size,
};

struct Panel {
    host: MockHost,
    drag: Draggable<MockHost>,
    resize: Resizable<MockHost>,
}

impl Panel {
    fn new() -> Self {
        let host = MockHost::builder().panel(100.0, 100.0, 300.0, 200.0).build();
        let drag = Draggable::attach(host.clone(), DragOptions::new());
        let resize = Resizable::attach(host.clone(), ResizeOptions::new());
        Self { host, drag, resize }
    }

    fn handle(&self, direction: Direction) -> ElementId {
        handle_for(self.resize.handles(), direction)
    }

    /// Deliver a press to its target, then bubble it to the panel.
    fn press(&mut self, event: PointerEvent) {
        if event.target != PANEL {
            let response = self.resize.pointer_down(event.target, &event);
            if response.stop_propagation {
                return;
            }
        }
        self.drag.pointer_down(PANEL, &event);
    }

    /// Window-scope events reach every controller.
    fn moved(&mut self, event: PointerEvent) {
        self.drag.pointer_move(&event);
        self.resize.pointer_move(&event);
    }

    fn released(&mut self, event: PointerEvent) {
        self.drag.pointer_up(&event);
        self.resize.pointer_up(&event);
    }
}

#[test]
fn test_press_on_handle_resizes_without_dragging() {
    let mut panel = Panel::new();
    let se = panel.handle(Direction::SE);

    panel.press(press_on(se, 398.0, 298.0));
    assert!(panel.resize.is_resizing());
    assert!(!panel.drag.is_dragging());

    panel.moved(press(448.0, 318.0));
    panel.released(press(448.0, 318.0));

    assert_eq!(panel.host.size(), Size::new(350.0, 220.0));
    assert_eq!(panel.host.position(), Point::new(100.0, 100.0));
    assert!(
        panel
            .host
            .events()
            .iter()
            .all(|e| matches!(e, PanelEvent::Resized { .. }))
    );
}

#[test]
fn test_accepted_resize_press_stops_propagation() {
    let mut panel = Panel::new();
    let n = panel.handle(Direction::N);
    let response = panel.resize.pointer_down(n, &press_on(n, 250.0, 100.0));
    assert!(response.stop_propagation);
    assert_eq!(response, EventResponse::CAPTURED);
}

#[test]
fn test_press_on_body_drags_without_resizing() {
    let mut panel = Panel::new();

    panel.press(press(250.0, 200.0));
    assert!(panel.drag.is_dragging());
    assert!(!panel.resize.is_resizing());

    panel.moved(press(300.0, 260.0));
    panel.released(press(300.0, 260.0));

    assert_eq!(panel.host.position(), Point::new(150.0, 160.0));
    assert_eq!(panel.host.size(), Size::new(300.0, 200.0));
    assert_eq!(
        panel.host.events(),
        vec![PanelEvent::Dragged { x: 150.0, y: 160.0 }]
    );
}

#[test]
fn test_disabled_resize_lets_press_bubble_to_drag() {
    let mut panel = Panel::new();
    panel.resize.update(homelab_panels::ResizeUpdate::new().disabled(true));
    let e = panel.handle(Direction::E);

    panel.press(press_on(e, 398.0, 200.0));
    assert!(!panel.resize.is_resizing());
    assert!(panel.drag.is_dragging());
}

#[test]
fn test_drag_after_north_west_resize_uses_new_geometry() {
    let mut panel = Panel::new();
    let nw = panel.handle(Direction::NW);

    panel.press(press_on(nw, 100.0, 100.0));
    panel.moved(press(60.0, 80.0));
    panel.released(press(60.0, 80.0));
    assert_eq!(panel.host.position(), Point::new(60.0, 80.0));
    assert_eq!(panel.host.size(), Size::new(340.0, 220.0));

    panel.press(press(200.0, 200.0));
    panel.moved(press(210.0, 190.0));
    panel.released(press(210.0, 190.0));
    assert_eq!(panel.host.position(), Point::new(70.0, 70.0));
    assert_eq!(panel.drag.position(), Some(Point::new(70.0, 70.0)));
}

#[test]
fn test_destroying_both_leaves_nothing_behind() {
    let mut panel = Panel::new();
    panel.press(press(250.0, 200.0));

    panel.drag.destroy();
    panel.resize.destroy();

    assert_eq!(panel.host.listener_count(), 0);
    assert_eq!(panel.host.handle_count(), 0);
}
