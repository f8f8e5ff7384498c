use super::*;

impl App {
    /// Move focus to the next element in the ring, wrapping at the end.
    pub fn focus_next(&mut self) {
        let ring = self.focus_ring();
        let idx = self.focus_index();
        self.focus = ring[(idx + 1) % ring.len()];
    }

    /// Move focus to the previous element, wrapping at the start.
    pub fn focus_prev(&mut self) {
        let ring = self.focus_ring();
        let idx = self.focus_index();
        self.focus = if idx == 0 { ring[ring.len() - 1] } else { ring[idx - 1] };
    }

    // An element missing from the ring (style changed underneath it) counts
    // as the identifier field.
    fn focus_index(&self) -> usize {
        let ring = self.focus_ring();
        ring.iter()
            .position(|f| *f == self.focus)
            .or_else(|| ring.iter().position(|f| *f == Focus::Identifier))
            .unwrap_or(0)
    }
}
