/// Percentage of the page scrolled past, in `0.0..=100.0`.
///
/// `scroll_height` is the full document height and `client_height` the
/// visible part of it. Pages shorter than the viewport report 0.
pub fn scroll_percent(scroll_top: f64, scroll_height: f64, client_height: f64) -> f64 {
    let scrollable = scroll_height - client_height;
    if scrollable <= 0.0 || !scrollable.is_finite() {
        return 0.0;
    }
    (scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_percent() {
        assert_eq!(scroll_percent(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_percent(1000.0, 3000.0, 1000.0), 50.0);
        assert_eq!(scroll_percent(2000.0, 3000.0, 1000.0), 100.0);
    }

    #[test]
    fn test_overscroll_is_clamped() {
        // rubber-band scrolling on touch devices goes past both ends
        assert_eq!(scroll_percent(-40.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_percent(2100.0, 3000.0, 1000.0), 100.0);
    }

    #[test]
    fn test_short_page() {
        assert_eq!(scroll_percent(0.0, 800.0, 1000.0), 0.0);
        assert_eq!(scroll_percent(0.0, 1000.0, 1000.0), 0.0);
    }
}
