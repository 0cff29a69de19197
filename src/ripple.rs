use crate::pointer::Rect;

pub const RIPPLE_DURATION_MS: f64 = 600.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    pub id: u32,
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl Ripple {
    /// Square overlay covering the host's larger side, centered on the click.
    pub fn spawn(id: u32, rect: Rect, client_x: f64, client_y: f64) -> Self {
        let size = rect.width.max(rect.height);
        let (x, y) = rect.local(client_x, client_y);

        Self {
            id,
            size,
            left: x - size / 2.0,
            top: y - size / 2.0,
        }
    }

    pub fn style(&self) -> String {
        format!(
            "width: {size}px; height: {size}px; left: {left}px; top: {top}px;",
            size = self.size,
            left = self.left,
            top = self.top
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RippleSet {
    next_id: u32,
    live: Vec<Ripple>,
}

impl RippleSet {
    pub fn live(&self) -> &[Ripple] {
        &self.live
    }

    pub fn spawn(&mut self, rect: Rect, client_x: f64, client_y: f64) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.live.push(Ripple::spawn(id, rect, client_x, client_y));
        id
    }

    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.live.len();
        self.live.retain(|ripple| ripple.id != id);
        self.live.len() != before
    }
}
