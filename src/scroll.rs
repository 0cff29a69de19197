const PARALLAX_BASE_SPEED: f64 = 0.5;
const PARALLAX_SPEED_STEP: f64 = 0.2;

/// A document that cannot scroll reports 0.
pub fn progress_percent(scroll_top: f64, scroll_height: f64, client_height: f64) -> f64 {
    let scrollable = scroll_height - client_height;
    if scrollable <= 0.0 || !scrollable.is_finite() {
        return 0.0;
    }

    (scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}

pub fn progress_width(percent: f64) -> String {
    format!("width: {percent}%;")
}

pub fn parallax_speed(index: usize) -> f64 {
    PARALLAX_BASE_SPEED + index as f64 * PARALLAX_SPEED_STEP
}

pub fn parallax_offset(scroll_top: f64, index: usize) -> f64 {
    scroll_top * parallax_speed(index)
}

pub fn parallax_transform(scroll_top: f64, index: usize) -> String {
    format!("transform: translateY({}px);", parallax_offset(scroll_top, index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_share_of_scrollable_height() {
        assert_eq!(progress_percent(0.0, 3_000.0, 1_000.0), 0.0);
        assert_eq!(progress_percent(500.0, 3_000.0, 1_000.0), 25.0);
        assert_eq!(progress_percent(2_000.0, 3_000.0, 1_000.0), 100.0);
    }

    #[test]
    fn unscrollable_document_reports_zero() {
        assert_eq!(progress_percent(0.0, 800.0, 800.0), 0.0);
        assert_eq!(progress_percent(10.0, 600.0, 800.0), 0.0);
    }

    #[test]
    fn overscroll_is_clamped() {
        assert_eq!(progress_percent(2_100.0, 3_000.0, 1_000.0), 100.0);
        assert_eq!(progress_percent(-40.0, 3_000.0, 1_000.0), 0.0);
    }

    #[test]
    fn each_shape_moves_at_its_own_speed() {
        assert_eq!(parallax_offset(100.0, 0), 50.0);
        assert!((parallax_offset(100.0, 1) - 70.0).abs() < 1e-9);
        assert!((parallax_offset(100.0, 2) - 90.0).abs() < 1e-9);
        assert!(parallax_speed(3) > parallax_speed(2));
    }

    #[test]
    fn styles_render_css_values() {
        assert_eq!(progress_width(25.0), "width: 25%;");
        assert_eq!(parallax_transform(10.0, 0), "transform: translateY(5px);");
    }
}
