const MAGNETIC_PULL: f64 = 0.2;
const MAX_TILT_DEG: f64 = 5.0;
const TILT_PERSPECTIVE_PX: f64 = 1000.0;
const TILT_HOVER_SCALE: f64 = 1.02;

pub const MAGNETIC_REST_TRANSFORM: &str = "translate(0, 0)";
pub const TILT_REST_TRANSFORM: &str = "perspective(1000px) rotateX(0) rotateY(0) scale3d(1, 1, 1)";
pub const SHINE_REST_BACKGROUND: &str = "transparent";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    pub fn local(&self, client_x: f64, client_y: f64) -> (f64, f64) {
        (client_x - self.left, client_y - self.top)
    }
}

pub fn magnetic_offset(rect: Rect, client_x: f64, client_y: f64) -> (f64, f64) {
    let (center_x, center_y) = rect.center();
    (
        (client_x - center_x) * MAGNETIC_PULL,
        (client_y - center_y) * MAGNETIC_PULL,
    )
}

pub fn magnetic_transform(offset: Option<(f64, f64)>) -> String {
    match offset {
        Some((dx, dy)) => format!("translate({dx}px, {dy}px)"),
        None => MAGNETIC_REST_TRANSFORM.to_string(),
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub shine_x: f64,
    pub shine_y: f64,
}

impl Tilt {
    pub fn transform(&self) -> String {
        format!(
            "perspective({TILT_PERSPECTIVE_PX}px) rotateX({}deg) rotateY({}deg) scale3d({TILT_HOVER_SCALE}, {TILT_HOVER_SCALE}, {TILT_HOVER_SCALE})",
            self.rotate_x, self.rotate_y
        )
    }

    pub fn shine_background(&self) -> String {
        format!(
            "radial-gradient(circle at {}px {}px, rgba(255,255,255,0.15), transparent)",
            self.shine_x, self.shine_y
        )
    }
}

/// Rotation scales linearly from the center to ±5° at the edges.
pub fn tilt(rect: Rect, client_x: f64, client_y: f64) -> Tilt {
    let (x, y) = rect.local(client_x, client_y);
    let half_width = rect.width / 2.0;
    let half_height = rect.height / 2.0;

    let rotate_x = if half_height > 0.0 {
        ((y - half_height) / half_height) * -MAX_TILT_DEG
    } else {
        0.0
    };
    let rotate_y = if half_width > 0.0 {
        ((x - half_width) / half_width) * MAX_TILT_DEG
    } else {
        0.0
    };

    Tilt {
        rotate_x,
        rotate_y,
        shine_x: x,
        shine_y: y,
    }
}

pub fn tilt_transform(tilt: Option<&Tilt>) -> String {
    tilt.map(Tilt::transform)
        .unwrap_or_else(|| TILT_REST_TRANSFORM.to_string())
}

pub fn shine_background(tilt: Option<&Tilt>) -> String {
    tilt.map(Tilt::shine_background)
        .unwrap_or_else(|| SHINE_REST_BACKGROUND.to_string())
}
