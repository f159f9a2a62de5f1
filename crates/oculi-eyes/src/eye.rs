//! The eye illustration: geometry helpers plus draw-list recording.
//!
//! An [`Eye`] is ephemeral — built fresh for every draw call, never stored
//! across frames. Recording one eye pushes, back to front:
//! sclera disk, two pupil disks, a clipped skin disk for the eyelid, a
//! stroke-only outline circle, and the crease line where the lid meets the
//! open eye.

use rand::Rng;

use oculi_engine::coords::{Rect, Vec2};
use oculi_engine::paint::Color;
use oculi_engine::scene::{DrawList, ZIndex};

use crate::rng::random_inclusive;

const SCLERA: Color = Color::from_premul(0.5, 0.5, 0.5, 1.0);
const PUPIL_OUTER: Color = Color::from_premul(0.5, 0.0, 0.0, 1.0);
const PUPIL_INNER: Color = Color::from_premul(0.0, 0.0, 0.0, 1.0);
const SKIN: Color = Color::from_premul(1.0, 0.89, 0.82, 1.0);
const OUTLINE: Color = Color::from_premul(0.0, 0.0, 0.0, 1.0);

const STROKE_WIDTH: f32 = 2.0;

/// A stylized eye: center, radius, and how far the eyelid covers it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Eye {
    pub center: Vec2,
    pub radius: f32,
    /// Eyelid closure fraction: 0 = fully open, 1 = fully closed.
    pub closure: f32,
}

impl Eye {
    #[inline]
    pub fn new(center: Vec2, radius: f32, closure: f32) -> Self {
        Self { center, radius, closure }
    }

    /// Builds a randomly parameterized eye for the background field.
    ///
    /// Distribution: radius in `[0, min(w,h)/5]`; the center may hang up to
    /// one radius past every canvas edge so eyes clip against the borders;
    /// closure is uniform in `[0, 1]` with millipoint granularity.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, width: f32, height: f32) -> Self {
        let rmax = (width.min(height) / 5.0) as i32;
        let r = random_inclusive(rng, 0, rmax);
        let x = random_inclusive(rng, 0, width as i32 + 2 * r) - r;
        let y = random_inclusive(rng, 0, height as i32 + 2 * r) - r;
        let closure = random_inclusive(rng, 0, 1000) as f32 / 1000.0;

        Self::new(Vec2::new(x as f32, y as f32), r as f32, closure)
    }

    /// Records the eye into `list` on the given z-layer.
    ///
    /// Always pushes five circles and one line; a fully open eye simply gets a
    /// zero-area lid clip, which the renderer skips.
    pub fn record(&self, list: &mut DrawList, z: ZIndex) {
        let c = self.center;
        let r = self.radius;

        // Sclera, then the two-tone pupil layered back to front.
        list.push_solid_circle(z, c, r, SCLERA);
        list.push_solid_circle(z, c, r / 5.0, PUPIL_OUTER);
        list.push_solid_circle(z, c, r / 7.0, PUPIL_INNER);

        // Eyelid: skin-tone disk clipped to the top strip of the bounding box.
        let h = lid_height(r, self.closure);
        list.push_clip(Rect::new(c.x - r, c.y - r, 2.0 * r, h));
        list.push_solid_circle(z, c, r, SKIN);
        list.pop_clip();

        // Outline and crease, stroked on top.
        list.push_circle_outline(z, c, r, STROKE_WIDTH, OUTLINE);

        let rl = crease_half_width(r, h);
        let crease_y = c.y - r + h;
        list.push_line(
            z,
            Vec2::new(c.x - rl, crease_y),
            Vec2::new(c.x + rl, crease_y),
            STROKE_WIDTH,
            OUTLINE,
        );
    }
}

/// Eyelid height in pixels for a closure fraction, truncated to whole pixels.
#[inline]
pub fn lid_height(radius: f32, closure: f32) -> f32 {
    (2.0 * radius * closure).trunc()
}

/// Half-width of the crease line where the lid edge crosses the disk.
///
/// `rl = sqrt(r² − (r−h)²)`; the radicand is clamped at zero because
/// float rounding near fully open or fully closed can push it slightly
/// negative.
#[inline]
pub fn crease_half_width(radius: f32, lid_height: f32) -> f32 {
    let h2 = (radius - lid_height).abs();
    (radius * radius - h2 * h2).max(0.0).sqrt()
}

/// Closure of the blinking centered eye as a triangle wave of period 1000 ms.
///
/// Ramps 0→1 over the first half period and 1→0 over the second; continuous
/// at the apex (both branches give 1.0) and at wraparound (both give 0.0).
#[inline]
pub fn blink_closure(elapsed_ms: u64) -> f32 {
    let phase = (elapsed_ms % 1000) as f32 / 1000.0;
    if phase < 0.5 {
        phase * 2.0
    } else {
        1.0 - (phase - 0.5) * 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oculi_engine::scene::{Border, DrawCmd};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    // ── lid height ────────────────────────────────────────────────────────

    #[test]
    fn lid_height_stays_in_bounds() {
        let r = 90.0;
        for i in 0..=100 {
            let closure = i as f32 / 100.0;
            let h = lid_height(r, closure);
            assert!(h >= 0.0 && h <= 2.0 * r, "h = {h} for closure {closure}");
        }
    }

    #[test]
    fn lid_height_truncates_to_whole_pixels() {
        assert_eq!(lid_height(90.0, 0.333), 59.0); // 59.94 → 59
    }

    // ── crease ────────────────────────────────────────────────────────────

    #[test]
    fn open_eye_has_degenerate_crease_at_top() {
        let r = 90.0;
        let h = lid_height(r, 0.0);
        assert_eq!(h, 0.0);
        assert_eq!(crease_half_width(r, h), 0.0);
    }

    #[test]
    fn closed_eye_has_degenerate_crease_at_bottom() {
        let r = 90.0;
        let h = lid_height(r, 1.0);
        assert_eq!(h, 2.0 * r);
        assert_eq!(crease_half_width(r, h), 0.0);
    }

    #[test]
    fn half_closed_crease_spans_full_diameter() {
        let r = 90.0;
        let h = lid_height(r, 0.5);
        assert_eq!(h, r);
        assert_eq!(crease_half_width(r, h), r);
    }

    #[test]
    fn crease_radicand_never_goes_negative() {
        // Lid height slightly past the diameter must clamp, not NaN.
        assert_eq!(crease_half_width(90.0, 180.000_02), 0.0);
        for i in 0..=1000 {
            let closure = i as f32 / 1000.0;
            let rl = crease_half_width(90.0, lid_height(90.0, closure));
            assert!(rl.is_finite() && rl >= 0.0);
        }
    }

    #[test]
    fn quarter_closed_reference_geometry() {
        // 800×450 canvas, eye at (400, 225), r = 90, closure = 0.25.
        let r = 90.0;
        let h = lid_height(r, 0.25);
        assert_eq!(h, 45.0);

        let rl = crease_half_width(r, h);
        assert!((rl - 77.942).abs() < 1e-2); // sqrt(90² − 45²)

        let crease_y = 225.0 - r + h;
        assert_eq!(crease_y, 180.0);
    }

    // ── blink wave ────────────────────────────────────────────────────────

    #[test]
    fn blink_ramps_up_then_down() {
        assert_eq!(blink_closure(0), 0.0);
        assert_eq!(blink_closure(250), 0.5);
        assert_eq!(blink_closure(500), 1.0);
        assert_eq!(blink_closure(750), 0.5);
    }

    #[test]
    fn blink_is_periodic_in_1000_ms() {
        for t in [0u64, 123, 499, 500, 877] {
            assert_eq!(blink_closure(t), blink_closure(t + 1000));
            assert_eq!(blink_closure(t), blink_closure(t + 5000));
        }
    }

    #[test]
    fn blink_is_continuous_at_apex_and_wraparound() {
        // Approaching the apex from both sides.
        assert!((blink_closure(499) - 0.998).abs() < 1e-6);
        assert_eq!(blink_closure(500), 1.0);
        assert!((blink_closure(501) - 0.998).abs() < 1e-6);

        // Approaching wraparound from both sides.
        assert!(blink_closure(999) < 0.003);
        assert_eq!(blink_closure(1000), 0.0);
        assert!(blink_closure(1001) < 0.003);
    }

    // ── random distribution ───────────────────────────────────────────────

    #[test]
    fn random_eyes_respect_distribution_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let (w, h) = (800.0, 450.0);
        let rmax = 90.0; // min(800, 450) / 5

        for _ in 0..500 {
            let eye = Eye::random(&mut rng, w, h);
            assert!(eye.radius >= 0.0 && eye.radius <= rmax);
            assert!(eye.center.x >= -eye.radius && eye.center.x <= w + eye.radius);
            assert!(eye.center.y >= -eye.radius && eye.center.y <= h + eye.radius);
            assert!(eye.closure >= 0.0 && eye.closure <= 1.0);
        }
    }

    // ── recording ─────────────────────────────────────────────────────────

    fn circle_radius(cmd: &DrawCmd) -> f32 {
        match cmd {
            DrawCmd::Circle(c) => c.radius,
            other => panic!("expected circle, got {other:?}"),
        }
    }

    #[test]
    fn record_pushes_five_circles_and_one_line() {
        let mut list = DrawList::new();
        Eye::new(Vec2::new(400.0, 225.0), 90.0, 0.25).record(&mut list, ZIndex::default());

        let items = list.items();
        assert_eq!(items.len(), 6);

        // Sclera, pupil outer, pupil inner.
        assert_eq!(circle_radius(&items[0].cmd), 90.0);
        assert_eq!(circle_radius(&items[1].cmd), 18.0);
        assert!((circle_radius(&items[2].cmd) - 90.0 / 7.0).abs() < 1e-4);

        // The lid disk is the only clipped item: top strip of the bounding box.
        assert_eq!(items[3].clip_rect, Some(Rect::new(310.0, 135.0, 180.0, 45.0)));
        for (i, item) in items.iter().enumerate() {
            if i != 3 {
                assert_eq!(item.clip_rect, None);
            }
        }

        // Outline is stroke-only: transparent fill plus a border.
        let DrawCmd::Circle(outline) = &items[4].cmd else { panic!("expected circle") };
        assert_eq!(outline.border, Some(Border::new(2.0, Color::from_premul(0.0, 0.0, 0.0, 1.0))));

        // Crease endpoints from the reference geometry.
        let DrawCmd::Line(crease) = &items[5].cmd else { panic!("expected line") };
        assert_eq!(crease.p0.y, 180.0);
        assert_eq!(crease.p1.y, 180.0);
        assert!((crease.p0.x - (400.0 - 77.942)).abs() < 1e-2);
        assert!((crease.p1.x - (400.0 + 77.942)).abs() < 1e-2);
    }

    #[test]
    fn fully_open_eye_records_zero_area_lid_clip() {
        let mut list = DrawList::new();
        Eye::new(Vec2::new(100.0, 100.0), 50.0, 0.0).record(&mut list, ZIndex::default());

        let clip = list.items()[3].clip_rect.unwrap();
        assert!(clip.is_empty());
    }
}
