//! The frame driver: one `App` implementation that times, polls, records the
//! eye field, and presents.

use rand::rngs::StdRng;

use oculi_engine::coords::Vec2;
use oculi_engine::core::{App, AppControl, FrameCtx};
use oculi_engine::input::{InputFrame, Key};
use oculi_engine::paint::Color;
use oculi_engine::render::shapes::{CircleRenderer, LineRenderer};
use oculi_engine::scene::{DrawList, ZIndex};

use crate::eye::{Eye, blink_closure};

const BACKGROUND: Color = Color::from_premul(1.0, 1.0, 1.0, 1.0);

/// Layer for the random eye field.
const FIELD_LAYER: ZIndex = ZIndex::new(0);
/// Layer for the centered blinking eye, drawn over the whole field.
const FOCAL_LAYER: ZIndex = ZIndex::new(1);

/// Benchmark app: a field of random eyes plus one centered blinking eye.
///
/// Per frame: check for termination before any drawing, print the
/// instantaneous frame rate, rebuild the draw list, render, present.
pub struct EyesApp {
    rng: StdRng,
    eye_count: usize,

    scene: DrawList,
    circles: CircleRenderer,
    lines: LineRenderer,
}

impl EyesApp {
    pub fn new(eye_count: usize, rng: StdRng) -> Self {
        Self {
            rng,
            eye_count,
            scene: DrawList::new(),
            circles: CircleRenderer::new(),
            lines: LineRenderer::new(),
        }
    }

    /// Escape pressed this frame ends the loop.
    fn wants_exit(frame: &InputFrame) -> bool {
        frame.keys_pressed.contains(&Key::Escape)
    }

    /// Rebuilds the draw list: `eye_count` random eyes across the canvas,
    /// then the centered eye whose closure follows the blink wave.
    ///
    /// The centered eye sits on its own z-layer so the field's crease lines
    /// never paint over it.
    fn record_scene(&mut self, width: f32, height: f32, elapsed_ms: u64) {
        self.scene.clear();

        for _ in 0..self.eye_count {
            Eye::random(&mut self.rng, width, height).record(&mut self.scene, FIELD_LAYER);
        }

        let center = Vec2::new(width / 2.0, height / 2.0);
        let radius = width.min(height) / 5.0;
        Eye::new(center, radius, blink_closure(elapsed_ms)).record(&mut self.scene, FOCAL_LAYER);
    }

    /// One step of the driver's state machine: termination check first, then
    /// scene recording. On `Exit` nothing is recorded this iteration.
    fn advance(&mut self, frame: &InputFrame, width: f32, height: f32, elapsed_ms: u64) -> AppControl {
        if Self::wants_exit(frame) {
            return AppControl::Exit;
        }

        self.record_scene(width, height, elapsed_ms);
        AppControl::Continue
    }
}

impl App for EyesApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let (width, height) = ctx.window.logical_size();
        if self.advance(ctx.input_frame, width, height, ctx.time.elapsed_ms()) == AppControl::Exit {
            return AppControl::Exit;
        }

        for button in &ctx.input_frame.buttons_pressed {
            let (x, y) = ctx.input.pointer_pos.unwrap_or((0.0, 0.0));
            log::info!("{button:?} button pressed at ({x:.0}, {y:.0})");
        }

        // Benchmark output, one line per frame like the originals.
        println!("{}: {:.3}", ctx.time.frame_index + 1, ctx.time.fps());

        let Self { scene, circles, lines, .. } = self;
        ctx.render(BACKGROUND, |rctx, target| {
            // Circles-then-lines per layer; the focal layer composites over
            // everything the field drew.
            for layer in scene.z_layers() {
                circles.render(rctx, target, scene, layer);
                lines.render(rctx, target, scene, layer);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oculi_engine::input::{InputEvent, InputState, KeyState};
    use rand::SeedableRng;

    fn app(eye_count: usize) -> EyesApp {
        EyesApp::new(eye_count, StdRng::seed_from_u64(7))
    }

    fn press(frame: &mut InputFrame, key: Key) {
        let mut state = InputState::default();
        state.apply_event(frame, InputEvent::Key {
            key,
            state: KeyState::Pressed,
            code: 0,
            repeat: false,
        });
    }

    // ── termination ───────────────────────────────────────────────────────

    #[test]
    fn escape_through_the_input_layer_requests_exit() {
        let mut frame = InputFrame::default();
        press(&mut frame, Key::Escape);

        assert!(EyesApp::wants_exit(&frame));
    }

    #[test]
    fn other_keys_do_not_request_exit() {
        let mut frame = InputFrame::default();
        press(&mut frame, Key::Space);

        assert!(!EyesApp::wants_exit(&frame));
        assert!(!EyesApp::wants_exit(&InputFrame::default()));
    }

    // ── scene recording ───────────────────────────────────────────────────

    #[test]
    fn scene_holds_all_eyes_plus_the_centered_one() {
        let mut a = app(10);
        a.record_scene(800.0, 450.0, 0);

        // Each eye records 6 items (5 circles + 1 crease line).
        assert_eq!(a.scene.items().len(), (10 + 1) * 6);
    }

    #[test]
    fn centered_eye_is_recorded_last_with_fixed_geometry() {
        let mut a = app(3);
        // 250 ms into the blink: closure 0.5, so lid height equals the radius.
        a.record_scene(800.0, 450.0, 250);

        let items = a.scene.items();
        let crease = items.last().unwrap();
        let oculi_engine::scene::DrawCmd::Line(line) = &crease.cmd else {
            panic!("expected the crease line last");
        };

        // r = min(800, 450) / 5 = 90, closure 0.5 → crease through the center.
        assert_eq!(line.p0.y, 225.0);
        assert_eq!(line.p1.y, 225.0);
        assert_eq!(line.p0.x, 400.0 - 90.0);
        assert_eq!(line.p1.x, 400.0 + 90.0);
    }

    #[test]
    fn focal_eye_sits_on_its_own_layer_above_the_field() {
        let mut a = app(4);
        a.record_scene(800.0, 450.0, 0);

        assert_eq!(a.scene.z_layers(), vec![FIELD_LAYER, FOCAL_LAYER]);

        // Exactly the centered eye's six items occupy the focal layer, so no
        // field crease can composite over its circles.
        let focal: Vec<_> = a
            .scene
            .items()
            .iter()
            .filter(|item| item.key.z == FOCAL_LAYER)
            .collect();
        assert_eq!(focal.len(), 6);
        assert!(a.scene.items()[..4 * 6].iter().all(|item| item.key.z == FIELD_LAYER));
    }

    // ── driver state machine ──────────────────────────────────────────────

    #[test]
    fn escape_exits_without_recording_any_shapes() {
        let mut a = app(10);
        let mut frame = InputFrame::default();
        press(&mut frame, Key::Escape);

        assert_eq!(a.advance(&frame, 800.0, 450.0, 0), AppControl::Exit);
        assert!(a.scene.is_empty());
    }

    #[test]
    fn advance_without_escape_records_and_continues() {
        let mut a = app(2);
        let frame = InputFrame::default();

        assert_eq!(a.advance(&frame, 800.0, 450.0, 0), AppControl::Continue);
        assert_eq!(a.scene.items().len(), (2 + 1) * 6);
    }

    #[test]
    fn rerecording_replaces_the_previous_frame() {
        let mut a = app(5);
        a.record_scene(800.0, 450.0, 0);
        a.record_scene(800.0, 450.0, 16);

        assert_eq!(a.scene.items().len(), (5 + 1) * 6);
    }
}
