use crate::coords::Rect;

use super::{DrawCmd, SortKey, ZIndex};

/// A single draw item: sort key + command + clip rect.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
    /// Scissor rect in logical pixels. `None` = no clipping (draw everywhere).
    pub clip_rect: Option<Rect>,
}

/// Recorded draw stream for a frame.
///
/// Performance characteristics:
/// - `push()` is O(1)
/// - paint-order iteration reuses an internal index buffer; no per-frame allocation once warmed
///
/// # Clipping
///
/// Use [`push_clip`](Self::push_clip) / [`pop_clip`](Self::pop_clip) to scope draw
/// commands to a scissor rect. Clips are intersected with the current parent.
///
/// ```
/// use oculi_engine::coords::Rect;
/// use oculi_engine::scene::DrawList;
///
/// let mut list = DrawList::new();
/// list.push_clip(Rect::new(0.0, 0.0, 180.0, 45.0));
/// // ... push clipped commands ...
/// list.pop_clip();
/// ```
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,

    /// Stack of active scissor rects (logical pixels).
    /// The top is always the current effective clip, already intersected with all parents.
    clip_stack: Vec<Rect>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items and the clip stack. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_dirty = true;
        self.sorted_indices.clear();
        self.clip_stack.clear();
    }

    /// Returns items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pushes a draw command with the given z-index.
    ///
    /// The item inherits the current clip rect from the clip stack.
    #[inline]
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.items.push(DrawItem {
            key: SortKey::new(z, order),
            cmd,
            clip_rect: self.clip_stack.last().copied(),
        });

        self.sorted_dirty = true;
    }

    /// Begins a scissor region. All draw commands pushed until [`pop_clip`](Self::pop_clip)
    /// are clipped to `rect` (intersected with any parent clip rect).
    ///
    /// Calls must be balanced with [`pop_clip`](Self::pop_clip).
    #[inline]
    pub fn push_clip(&mut self, rect: Rect) {
        let effective = match self.clip_stack.last() {
            None => rect,
            // Intersect with the parent; if no overlap, produce a zero-area rect so
            // the renderer skips those draw calls.
            Some(&parent) => parent.intersect(rect).unwrap_or(Rect::new(0.0, 0.0, 0.0, 0.0)),
        };
        self.clip_stack.push(effective);
    }

    /// Ends the most recent scissor region started by [`push_clip`](Self::push_clip).
    ///
    /// # Panics
    /// Panics (debug only) if called without a matching `push_clip`.
    #[inline]
    pub fn pop_clip(&mut self) {
        debug_assert!(!self.clip_stack.is_empty(), "pop_clip called without matching push_clip");
        self.clip_stack.pop();
    }

    /// Returns the distinct z-layers present, ascending.
    ///
    /// Renderers draw one shape kind per pass; interleaving passes per layer
    /// keeps cross-shape stacking correct between layers.
    pub fn z_layers(&self) -> Vec<ZIndex> {
        let mut layers: Vec<ZIndex> = self.items.iter().map(|item| item.key.z).collect();
        layers.sort();
        layers.dedup();
        layers
    }

    /// Iterates items in paint order (back-to-front) without cloning draw commands.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }

        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());

        // Stable ordering is ensured by SortKey including insertion order.
        self.sorted_indices
            .sort_by(|&a, &b| self.items[a].key.cmp(&self.items[b].key));

        self.sorted_dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;

    fn circle(list: &mut DrawList, z: i32, radius: f32) {
        list.push_solid_circle(ZIndex::new(z), Vec2::zero(), radius, Color::transparent());
    }

    fn radius_of(item: &DrawItem) -> f32 {
        match &item.cmd {
            DrawCmd::Circle(c) => c.radius,
            other => panic!("expected circle, got {other:?}"),
        }
    }

    // ── paint order ───────────────────────────────────────────────────────

    #[test]
    fn equal_z_preserves_insertion_order() {
        let mut list = DrawList::new();
        circle(&mut list, 0, 1.0);
        circle(&mut list, 0, 2.0);
        circle(&mut list, 0, 3.0);

        let radii: Vec<f32> = list.iter_in_paint_order().map(radius_of).collect();
        assert_eq!(radii, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn lower_z_paints_first() {
        let mut list = DrawList::new();
        circle(&mut list, 5, 1.0);
        circle(&mut list, -1, 2.0);
        circle(&mut list, 0, 3.0);

        let radii: Vec<f32> = list.iter_in_paint_order().map(radius_of).collect();
        assert_eq!(radii, vec![2.0, 3.0, 1.0]);
    }

    #[test]
    fn z_layers_are_distinct_and_ascending() {
        let mut list = DrawList::new();
        circle(&mut list, 1, 1.0);
        circle(&mut list, 0, 2.0);
        circle(&mut list, 1, 3.0);

        assert_eq!(list.z_layers(), vec![ZIndex::new(0), ZIndex::new(1)]);
    }

    // ── clip stack ────────────────────────────────────────────────────────

    #[test]
    fn items_inherit_current_clip() {
        let mut list = DrawList::new();
        circle(&mut list, 0, 1.0);

        let clip = Rect::new(10.0, 10.0, 50.0, 20.0);
        list.push_clip(clip);
        circle(&mut list, 0, 2.0);
        list.pop_clip();

        circle(&mut list, 0, 3.0);

        let items = list.items();
        assert_eq!(items[0].clip_rect, None);
        assert_eq!(items[1].clip_rect, Some(clip));
        assert_eq!(items[2].clip_rect, None);
    }

    #[test]
    fn nested_clips_intersect_with_parent() {
        let mut list = DrawList::new();
        list.push_clip(Rect::new(0.0, 0.0, 100.0, 100.0));
        list.push_clip(Rect::new(50.0, 50.0, 100.0, 100.0));
        circle(&mut list, 0, 1.0);
        list.pop_clip();
        list.pop_clip();

        assert_eq!(list.items()[0].clip_rect, Some(Rect::new(50.0, 50.0, 50.0, 50.0)));
    }

    #[test]
    fn disjoint_nested_clip_becomes_zero_area() {
        let mut list = DrawList::new();
        list.push_clip(Rect::new(0.0, 0.0, 10.0, 10.0));
        list.push_clip(Rect::new(50.0, 50.0, 10.0, 10.0));
        circle(&mut list, 0, 1.0);
        list.pop_clip();
        list.pop_clip();

        let clip = list.items()[0].clip_rect.unwrap();
        assert!(clip.is_empty());
    }

    #[test]
    fn clear_resets_items_and_clips() {
        let mut list = DrawList::new();
        list.push_clip(Rect::new(0.0, 0.0, 10.0, 10.0));
        circle(&mut list, 0, 1.0);
        list.clear();

        assert!(list.is_empty());
        circle(&mut list, 0, 2.0);
        // Clip stack from before clear() must not leak into new items.
        assert_eq!(list.items()[0].clip_rect, None);
    }
}
