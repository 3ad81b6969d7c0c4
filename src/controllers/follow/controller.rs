use std::sync::Arc;

use tracing::debug;

use crate::controllers::follow::data::{FollowConfig, Modifiers, PointerButton};
use crate::controllers::follow::mailbox::SwitchMailbox;
use crate::controllers::follow::ports::canvas::{Canvas, Colour, Stroke};
use crate::core::data::{Circle, Rectangle, Vec2};
use crate::core::walk::{PerimeterEdge, WalkState, step_walk};

const TRACK_STROKE: Stroke = Stroke {
    colour: Colour::grey(100),
    weight: 2.0,
};

const CIRCLE_STROKE: Stroke = Stroke {
    colour: Colour::RED,
    weight: 4.0,
};

const HEADING_SIZE: f32 = 20.0;
const HELP_SIZE: f32 = 15.0;
const HELP_ORIGIN: Vec2 = Vec2::new(10.0, 60.0);
const HELP_LINE_SPACING: f64 = 20.0;

pub const HELP_LINES: &[&str] = &[
    "Space: Play/Reset",
    "Q: Hide Debug",
    "Mouse Wheel: Adjust Speed",
    "Shift Left Click: Adjust Rectangle Position",
    "Shift Right Click: Adjust Rectangle Size",
];

/// Owns the track rectangle and the circle walking around it.
///
/// Everything here runs on the render thread. The only value written from
/// elsewhere is the switch, which lives in a shared [`SwitchMailbox`].
pub struct FollowController {
    rect: Rectangle,
    circle: Circle,
    edge: PerimeterEdge,
    pixels_per_mm: f64,
    show_debug: bool,
    show_circle: bool,
    moving: bool,
    held_button: Option<PointerButton>,
    switch: Arc<SwitchMailbox>,
}

impl FollowController {
    #[must_use]
    pub fn new(config: FollowConfig, switch: Arc<SwitchMailbox>) -> Self {
        let rect = Rectangle::new(
            config.rect_position_mm * config.pixels_per_mm,
            config.rect_size_mm * config.pixels_per_mm,
        );
        let circle = Circle::new(rect.far_corner(), config.circle_diameter, config.circle_speed);

        Self {
            rect,
            circle,
            edge: PerimeterEdge::Top,
            pixels_per_mm: config.pixels_per_mm,
            show_debug: config.show_debug,
            show_circle: config.show_circle,
            moving: false,
            held_button: None,
            switch,
        }
    }

    pub fn start(&mut self) {
        debug!("circle started");
        self.moving = true;
    }

    pub fn stop(&mut self) {
        debug!("circle stopped");
        self.moving = false;
    }

    pub fn reset(&mut self) {
        let parked = WalkState::parked(&self.rect);

        self.edge = parked.edge;
        self.circle.position = parked.position;
        self.moving = false;
    }

    /// Advances the walk once if moving, then draws the frame.
    pub fn on_frame(&mut self, canvas: &mut impl Canvas) {
        if self.moving {
            self.tick();
        }

        self.draw(canvas);
    }

    /// Draws the current state without advancing the walk.
    pub fn draw(&self, canvas: &mut impl Canvas) {
        canvas.clear(Colour::BLACK);

        if self.show_debug {
            canvas.stroke_rect(self.rect.position(), self.rect.size(), TRACK_STROKE);
        }

        if self.show_circle {
            canvas.stroke_circle(self.circle.position, self.circle.diameter(), CIRCLE_STROKE);
        }

        if self.show_debug {
            self.draw_debug_text(canvas);
        }
    }

    pub fn on_pointer_down(&mut self, button: PointerButton) {
        self.held_button = Some(button);
    }

    pub fn on_pointer_move(&mut self, position: Vec2, modifier_held: bool, pointer_held: bool) {
        if !self.show_debug || !(modifier_held && pointer_held) {
            return;
        }

        match self.held_button {
            Some(PointerButton::Left) => self.rect.set_position(position),
            Some(PointerButton::Right) => self.rect.set_size(position - self.rect.position()),
            _ => {}
        }

        self.reset();
    }

    pub fn on_pointer_drag(&mut self, position: Vec2, modifier_held: bool, pointer_held: bool) {
        self.on_pointer_move(position, modifier_held, pointer_held);
    }

    pub fn on_scroll(&mut self, amount: f64, modifiers: Modifiers) {
        if !self.show_debug {
            return;
        }

        if modifiers.shift {
            self.rect.grow_width(amount);
            self.reset();
        } else if modifiers.control {
            self.rect.grow_height(amount);
            self.reset();
        } else {
            self.circle.adjust_speed(amount);
            debug!(speed = self.circle.speed(), "circle speed adjusted");
        }
    }

    pub fn on_key_press(&mut self, key: char) {
        match key.to_ascii_uppercase() {
            'Q' => self.show_debug = !self.show_debug,
            ' ' => {
                if self.moving {
                    self.reset();
                } else {
                    self.start();
                }
            }
            // Flips motion without touching the walk, unlike Space.
            'C' => self.moving = !self.moving,
            _ => {}
        }
    }

    #[must_use]
    pub fn rect(&self) -> &Rectangle {
        &self.rect
    }

    #[must_use]
    pub fn circle(&self) -> &Circle {
        &self.circle
    }

    #[must_use]
    pub fn edge(&self) -> PerimeterEdge {
        self.edge
    }

    #[must_use]
    pub fn is_moving(&self) -> bool {
        self.moving
    }

    #[must_use]
    pub fn show_debug(&self) -> bool {
        self.show_debug
    }

    #[must_use]
    pub fn show_circle(&self) -> bool {
        self.show_circle
    }

    /// Latest value received on `/switch`. Nothing in the walk reads it.
    #[must_use]
    pub fn switch_value(&self) -> bool {
        self.switch.value()
    }

    #[must_use]
    pub fn pixels_per_tick(&self) -> f64 {
        self.circle.speed() * self.pixels_per_mm
    }

    fn tick(&mut self) {
        let mut state = WalkState {
            edge: self.edge,
            position: self.circle.position,
        };

        let report = step_walk(&mut state, &self.rect, self.pixels_per_tick());

        self.edge = state.edge;
        self.circle.position = state.position;

        if let Some(edge) = report.entered {
            debug!(%edge, x = state.position.x, y = state.position.y, "corner reached");
        }
    }

    fn draw_debug_text(&self, canvas: &mut impl Canvas) {
        canvas.text(
            &format!("Speed: {} mm/s", self.pixels_per_tick()),
            Vec2::new(10.0, 20.0),
            HEADING_SIZE,
            Colour::WHITE,
        );

        for (index, line) in HELP_LINES.iter().enumerate() {
            let offset = Vec2::new(0.0, HELP_LINE_SPACING * index as f64);
            canvas.text(line, HELP_ORIGIN + offset, HELP_SIZE, Colour::WHITE);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::follow::ports::switch_sink::SwitchSink;

    #[derive(Debug, Clone, PartialEq)]
    enum DrawCall {
        Clear(Colour),
        Rect(Vec2, Vec2),
        Circle(Vec2, f64),
        Text(String),
    }

    #[derive(Default)]
    struct RecordingCanvas {
        calls: Vec<DrawCall>,
    }

    impl Canvas for RecordingCanvas {
        fn clear(&mut self, colour: Colour) {
            self.calls.push(DrawCall::Clear(colour));
        }

        fn stroke_rect(&mut self, top_left: Vec2, size: Vec2, _stroke: Stroke) {
            self.calls.push(DrawCall::Rect(top_left, size));
        }

        fn stroke_circle(&mut self, centre: Vec2, diameter: f64, _stroke: Stroke) {
            self.calls.push(DrawCall::Circle(centre, diameter));
        }

        fn text(&mut self, text: &str, _baseline_left: Vec2, _size: f32, _colour: Colour) {
            self.calls.push(DrawCall::Text(text.to_string()));
        }
    }

    fn controller() -> FollowController {
        FollowController::new(FollowConfig::default(), Arc::new(SwitchMailbox::new()))
    }

    fn frames(controller: &mut FollowController, count: usize) {
        let mut canvas = RecordingCanvas::default();
        for _ in 0..count {
            controller.on_frame(&mut canvas);
        }
    }

    #[test]
    fn new_controller_is_parked_and_idle() {
        let controller = controller();

        assert_eq!(controller.circle().position, Vec2::new(700.0, 700.0));
        assert_eq!(controller.edge(), PerimeterEdge::Top);
        assert!(!controller.is_moving());
        assert!(controller.show_debug());
        assert!(controller.show_circle());
        assert!(!controller.switch_value());
    }

    #[test]
    fn pixels_per_mm_scales_track_and_speed() {
        let config = FollowConfig {
            pixels_per_mm: 0.5,
            ..FollowConfig::default()
        };
        let mut controller = FollowController::new(config, Arc::new(SwitchMailbox::new()));

        assert_eq!(controller.rect().position(), Vec2::new(50.0, 50.0));
        assert_eq!(controller.rect().size(), Vec2::new(300.0, 300.0));

        controller.start();
        frames(&mut controller, 1);

        assert_eq!(controller.circle().position, Vec2::new(350.0, 347.5));
    }

    #[test]
    fn frame_without_motion_does_not_move() {
        let mut controller = controller();

        frames(&mut controller, 10);

        assert_eq!(controller.circle().position, Vec2::new(700.0, 700.0));
    }

    #[test]
    fn scenario_one_tick_then_top_edge_after_120() {
        let mut controller = controller();
        controller.start();

        frames(&mut controller, 1);
        assert_eq!(controller.circle().position.y, 695.0);

        frames(&mut controller, 119);
        assert_eq!(controller.circle().position.y, 100.0);
        assert_eq!(controller.edge(), PerimeterEdge::Left);
    }

    #[test]
    fn start_keeps_position_and_stop_freezes_it() {
        let mut controller = controller();
        controller.start();
        frames(&mut controller, 3);

        controller.stop();
        let frozen = controller.circle().position;
        frames(&mut controller, 5);
        assert_eq!(controller.circle().position, frozen);

        controller.start();
        assert_eq!(controller.circle().position, frozen);
        assert!(controller.is_moving());
    }

    #[test]
    fn reset_is_idempotent() {
        let mut controller = controller();
        controller.start();
        frames(&mut controller, 150);

        controller.reset();
        let once = (controller.edge(), controller.circle().position, controller.is_moving());
        controller.reset();
        let twice = (controller.edge(), controller.circle().position, controller.is_moving());

        assert_eq!(once, twice);
        assert_eq!(once, (PerimeterEdge::Top, Vec2::new(700.0, 700.0), false));
    }

    #[test]
    fn space_starts_when_idle_without_moving_the_circle() {
        let mut controller = controller();
        controller.start();
        frames(&mut controller, 4);
        controller.stop();
        let before = controller.circle().position;

        controller.on_key_press(' ');

        assert!(controller.is_moving());
        assert_eq!(controller.circle().position, before);
    }

    #[test]
    fn space_resets_when_moving() {
        let mut controller = controller();
        controller.on_key_press(' ');
        frames(&mut controller, 10);

        controller.on_key_press(' ');

        assert!(!controller.is_moving());
        assert_eq!(controller.circle().position, Vec2::new(700.0, 700.0));
        assert_eq!(controller.edge(), PerimeterEdge::Top);
    }

    #[test]
    fn c_toggles_motion_without_resetting() {
        let mut controller = controller();
        controller.on_key_press('c');
        assert!(controller.is_moving());

        frames(&mut controller, 130);
        controller.on_key_press('C');

        assert!(!controller.is_moving());
        assert_eq!(controller.edge(), PerimeterEdge::Left);
        assert_eq!(controller.circle().position, Vec2::new(650.0, 100.0));
    }

    #[test]
    fn q_toggles_debug_overlay() {
        let mut controller = controller();

        controller.on_key_press('q');
        assert!(!controller.show_debug());

        controller.on_key_press('Q');
        assert!(controller.show_debug());
    }

    #[test]
    fn other_keys_are_ignored() {
        let mut controller = controller();

        controller.on_key_press('x');

        assert!(!controller.is_moving());
        assert!(controller.show_debug());
    }

    #[test]
    fn frame_draws_overlay_circle_and_help_text() {
        let mut controller = controller();
        let mut canvas = RecordingCanvas::default();

        controller.on_frame(&mut canvas);

        assert_eq!(canvas.calls[0], DrawCall::Clear(Colour::BLACK));
        assert_eq!(
            canvas.calls[1],
            DrawCall::Rect(Vec2::new(100.0, 100.0), Vec2::new(600.0, 600.0))
        );
        assert_eq!(canvas.calls[2], DrawCall::Circle(Vec2::new(700.0, 700.0), 50.0));
        assert_eq!(canvas.calls[3], DrawCall::Text("Speed: 5 mm/s".to_string()));
        assert_eq!(canvas.calls.len(), 4 + HELP_LINES.len());
    }

    #[test]
    fn hidden_overlay_draws_only_the_circle() {
        let mut controller = controller();
        controller.on_key_press('q');
        let mut canvas = RecordingCanvas::default();

        controller.on_frame(&mut canvas);

        assert_eq!(
            canvas.calls,
            vec![
                DrawCall::Clear(Colour::BLACK),
                DrawCall::Circle(Vec2::new(700.0, 700.0), 50.0),
            ]
        );
    }

    #[test]
    fn hidden_circle_is_not_drawn() {
        let config = FollowConfig {
            show_circle: false,
            ..FollowConfig::default()
        };
        let mut controller = FollowController::new(config, Arc::new(SwitchMailbox::new()));
        let mut canvas = RecordingCanvas::default();

        controller.on_frame(&mut canvas);

        assert!(!canvas.calls.iter().any(|call| matches!(call, DrawCall::Circle(..))));
    }

    #[test]
    fn shift_left_drag_moves_rectangle_and_resets() {
        let mut controller = controller();
        controller.start();
        frames(&mut controller, 5);

        controller.on_pointer_down(PointerButton::Left);
        controller.on_pointer_drag(Vec2::new(200.0, 150.0), true, true);

        assert_eq!(controller.rect().position(), Vec2::new(200.0, 150.0));
        assert_eq!(controller.circle().position, Vec2::new(800.0, 750.0));
        assert!(!controller.is_moving());
    }

    #[test]
    fn shift_right_drag_resizes_rectangle() {
        let mut controller = controller();

        controller.on_pointer_down(PointerButton::Right);
        controller.on_pointer_move(Vec2::new(400.0, 300.0), true, true);

        assert_eq!(controller.rect().size(), Vec2::new(300.0, 200.0));
        assert_eq!(controller.circle().position, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn right_drag_above_origin_keeps_minimum_size() {
        let mut controller = controller();

        controller.on_pointer_down(PointerButton::Right);
        controller.on_pointer_move(Vec2::new(20.0, 20.0), true, true);

        assert_eq!(controller.rect().size(), Vec2::new(1.0, 1.0));
    }

    #[test]
    fn pointer_move_without_modifier_or_press_is_ignored() {
        let mut controller = controller();
        controller.on_pointer_down(PointerButton::Left);
        controller.start();

        controller.on_pointer_move(Vec2::new(5.0, 5.0), false, true);
        controller.on_pointer_move(Vec2::new(5.0, 5.0), true, false);

        assert_eq!(controller.rect().position(), Vec2::new(100.0, 100.0));
        assert!(controller.is_moving());
    }

    #[test]
    fn pointer_move_with_hidden_overlay_is_ignored() {
        let mut controller = controller();
        controller.on_key_press('q');
        controller.on_pointer_down(PointerButton::Left);

        controller.on_pointer_move(Vec2::new(5.0, 5.0), true, true);

        assert_eq!(controller.rect().position(), Vec2::new(100.0, 100.0));
    }

    #[test]
    fn other_button_gesture_only_resets() {
        let mut controller = controller();
        controller.start();
        frames(&mut controller, 2);

        controller.on_pointer_down(PointerButton::Other);
        controller.on_pointer_move(Vec2::new(5.0, 5.0), true, true);

        assert_eq!(controller.rect().position(), Vec2::new(100.0, 100.0));
        assert_eq!(controller.circle().position, Vec2::new(700.0, 700.0));
        assert!(!controller.is_moving());
    }

    #[test]
    fn shift_scroll_changes_width_and_resets() {
        let mut controller = controller();

        controller.on_scroll(10.0, Modifiers::SHIFT);

        assert_eq!(controller.rect().width(), 610.0);
        assert_eq!(controller.rect().height(), 600.0);
        assert_eq!(controller.circle().position, Vec2::new(710.0, 700.0));
    }

    #[test]
    fn control_scroll_changes_height() {
        let mut controller = controller();

        controller.on_scroll(-100.0, Modifiers::CONTROL);

        assert_eq!(controller.rect().height(), 500.0);
        assert_eq!(controller.rect().width(), 600.0);
    }

    #[test]
    fn shift_wins_over_control() {
        let mut controller = controller();

        controller.on_scroll(
            3.0,
            Modifiers {
                shift: true,
                control: true,
            },
        );

        assert_eq!(controller.rect().width(), 603.0);
        assert_eq!(controller.rect().height(), 600.0);
    }

    #[test]
    fn scroll_never_shrinks_rectangle_below_one() {
        let mut controller = controller();

        controller.on_scroll(-1e9, Modifiers::SHIFT);
        controller.on_scroll(-1e9, Modifiers::CONTROL);

        assert_eq!(controller.rect().size(), Vec2::new(1.0, 1.0));
    }

    #[test]
    fn plain_scroll_adjusts_speed_with_floor() {
        let mut controller = controller();

        controller.on_scroll(5.0, Modifiers::NONE);
        assert!((controller.circle().speed() - 6.0).abs() < 1e-9);

        controller.on_scroll(-500.0, Modifiers::NONE);
        assert_eq!(controller.circle().speed(), 1.0);
    }

    #[test]
    fn scroll_with_hidden_overlay_is_ignored() {
        let mut controller = controller();
        controller.on_key_press('q');

        controller.on_scroll(5.0, Modifiers::NONE);
        controller.on_scroll(5.0, Modifiers::SHIFT);

        assert_eq!(controller.circle().speed(), 5.0);
        assert_eq!(controller.rect().width(), 600.0);
    }

    #[test]
    fn switch_value_is_stored_but_does_not_affect_motion() {
        let mailbox = Arc::new(SwitchMailbox::new());
        let mut controller = FollowController::new(FollowConfig::default(), Arc::clone(&mailbox));

        mailbox.receive(true);
        frames(&mut controller, 3);

        assert!(controller.switch_value());
        assert!(!controller.is_moving());
        assert_eq!(controller.circle().position, Vec2::new(700.0, 700.0));
    }
}
