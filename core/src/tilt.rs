/// Client-space box of an element, as reported by `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// Rotation in degrees around the X and Y axes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    /// Pointer offset from the centre, in half-extents, mapped to degrees.
    /// Moving up tilts the top edge away, hence the inverted X axis.
    pub fn from_pointer(bounds: Bounds, client_x: f64, client_y: f64, max_deg: f64) -> Self {
        let (cx, cy) = bounds.center();
        let px = normalized_offset(client_x - cx, bounds.width);
        let py = normalized_offset(client_y - cy, bounds.height);
        let limit = max_deg.abs();
        Self {
            rotate_x: clamp_deg(-py * limit, limit),
            rotate_y: clamp_deg(px * limit, limit),
        }
    }

    pub fn transform(&self, perspective_px: f64) -> String {
        format!(
            "perspective({perspective_px}px) rotateX({}deg) rotateY({}deg)",
            self.rotate_x, self.rotate_y
        )
    }
}

pub fn rest_transform(perspective_px: f64) -> String {
    format!("perspective({perspective_px}px) rotateX(0) rotateY(0)")
}

fn normalized_offset(delta: f64, extent: f64) -> f64 {
    let half = extent / 2.0;
    if half <= 0.0 || !half.is_finite() || !delta.is_finite() {
        return 0.0;
    }
    delta / half
}

fn clamp_deg(value: f64, limit: f64) -> f64 {
    // Avoid printing "-0deg" at the exact centre.
    let clamped = value.clamp(-limit, limit);
    if clamped == 0.0 {
        0.0
    } else {
        clamped
    }
}
