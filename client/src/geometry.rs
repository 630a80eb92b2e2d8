use ballplot_shared::Ball;

/// Natural (intrinsic) and displayed size of the reference image, sampled at render time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageMetrics {
    pub natural_width: f64,
    pub natural_height: f64,
    pub display_width: f64,
    pub display_height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Offset {
    pub left: f64,
    pub top: f64,
}

impl Offset {
    pub fn left_px(&self) -> String {
        format!("{}px", self.left)
    }

    pub fn top_px(&self) -> String {
        format!("{}px", self.top)
    }
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum BoundsError {
    #[error("Y coordinate must not be less than 0 (got {0}) >:/")]
    NegativeY(f64),
    #[error("X coordinate must not be less than 0 (got {0}) >:/")]
    NegativeX(f64),
    #[error("Y coordinate must not be greater than {max} (got {value}) >:/")]
    YTooLarge { value: f64, max: f64 },
    #[error("X coordinate must not be greater than {max} (got {value}) >:/")]
    XTooLarge { value: f64, max: f64 },
    #[error("Ball coordinates must be finite numbers (got x={x}, y={y})")]
    NotFinite { x: f64, y: f64 },
    #[error("The reference image has not finished loading, cannot place markers")]
    ImageNotLoaded,
}

pub fn check_bounds(ball: Ball, metrics: &ImageMetrics) -> Result<(), BoundsError> {
    if !ball.x.is_finite() || !ball.y.is_finite() {
        return Err(BoundsError::NotFinite {
            x: ball.x,
            y: ball.y,
        });
    }
    if metrics.natural_width <= 0.0 || metrics.natural_height <= 0.0 {
        return Err(BoundsError::ImageNotLoaded);
    }
    if ball.y < 0.0 {
        return Err(BoundsError::NegativeY(ball.y));
    }
    if ball.x < 0.0 {
        return Err(BoundsError::NegativeX(ball.x));
    }
    if ball.y > metrics.natural_height {
        return Err(BoundsError::YTooLarge {
            value: ball.y,
            max: metrics.natural_height,
        });
    }
    if ball.x > metrics.natural_width {
        return Err(BoundsError::XTooLarge {
            value: ball.x,
            max: metrics.natural_width,
        });
    }
    Ok(())
}

/// Rescales a ball from natural image pixels to the image's current on-screen size.
pub fn map_ball(ball: Ball, metrics: &ImageMetrics) -> Result<Offset, BoundsError> {
    check_bounds(ball, metrics)?;
    Ok(Offset {
        left: ball.x / metrics.natural_width * metrics.display_width,
        top: ball.y / metrics.natural_height * metrics.display_height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(natural: (f64, f64), display: (f64, f64)) -> ImageMetrics {
        ImageMetrics {
            natural_width: natural.0,
            natural_height: natural.1,
            display_width: display.0,
            display_height: display.1,
        }
    }

    #[test]
    fn half_size_display_halves_offset() {
        let m = metrics((1000.0, 500.0), (500.0, 250.0));
        let offset = map_ball(Ball { x: 200.0, y: 100.0 }, &m).unwrap();
        assert_eq!(offset, Offset { left: 100.0, top: 50.0 });
    }

    #[test]
    fn doubling_display_width_doubles_left() {
        for &(x, width) in &[(0.0, 320.0), (12.5, 640.0), (999.0, 77.0), (1000.0, 1000.0)] {
            let narrow = map_ball(Ball { x, y: 10.0 }, &metrics((1000.0, 500.0), (width, 250.0)))
                .unwrap();
            let wide = map_ball(
                Ball { x, y: 10.0 },
                &metrics((1000.0, 500.0), (width * 2.0, 250.0)),
            )
            .unwrap();
            assert!((wide.left - narrow.left * 2.0).abs() < 1e-9);
            assert_eq!(wide.top, narrow.top);
        }
    }

    #[test]
    fn bounds_are_inclusive() {
        let m = metrics((640.0, 480.0), (320.0, 240.0));
        assert_eq!(
            map_ball(Ball { x: 0.0, y: 0.0 }, &m).unwrap(),
            Offset { left: 0.0, top: 0.0 }
        );
        assert_eq!(
            map_ball(Ball { x: 640.0, y: 480.0 }, &m).unwrap(),
            Offset {
                left: 320.0,
                top: 240.0
            }
        );
    }

    #[test]
    fn negative_x_is_rejected_with_x_message() {
        let m = metrics((1000.0, 500.0), (500.0, 250.0));
        let err = map_ball(Ball { x: -1.0, y: 10.0 }, &m).unwrap_err();
        assert_eq!(err, BoundsError::NegativeX(-1.0));
        assert!(err.to_string().starts_with("X coordinate must not be less than 0"));
    }

    #[test]
    fn each_violation_has_its_own_variant() {
        let m = metrics((1000.0, 500.0), (500.0, 250.0));
        assert_eq!(
            map_ball(Ball { x: 5.0, y: -0.5 }, &m),
            Err(BoundsError::NegativeY(-0.5))
        );
        assert_eq!(
            map_ball(Ball { x: 5.0, y: 501.0 }, &m),
            Err(BoundsError::YTooLarge {
                value: 501.0,
                max: 500.0
            })
        );
        assert_eq!(
            map_ball(Ball { x: 1001.0, y: 5.0 }, &m),
            Err(BoundsError::XTooLarge {
                value: 1001.0,
                max: 1000.0
            })
        );
    }

    #[test]
    fn y_is_checked_before_x() {
        let m = metrics((1000.0, 500.0), (500.0, 250.0));
        assert_eq!(
            map_ball(Ball { x: -3.0, y: -4.0 }, &m),
            Err(BoundsError::NegativeY(-4.0))
        );
    }

    #[test]
    fn upper_bound_message_names_natural_size() {
        let m = metrics((1000.0, 500.0), (500.0, 250.0));
        let err = map_ball(Ball { x: 2000.0, y: 1.0 }, &m).unwrap_err();
        assert_eq!(
            err.to_string(),
            "X coordinate must not be greater than 1000 (got 2000) >:/"
        );
    }

    #[test]
    fn unloaded_image_and_nan_are_rejected() {
        let unloaded = metrics((0.0, 0.0), (0.0, 0.0));
        assert_eq!(
            map_ball(Ball { x: 0.0, y: 0.0 }, &unloaded),
            Err(BoundsError::ImageNotLoaded)
        );
        let m = metrics((10.0, 10.0), (10.0, 10.0));
        assert!(matches!(
            map_ball(Ball { x: f64::NAN, y: 1.0 }, &m),
            Err(BoundsError::NotFinite { .. })
        ));
    }

    #[test]
    fn offset_formats_css_pixels() {
        let offset = Offset {
            left: 12.5,
            top: 3.0,
        };
        assert_eq!(offset.left_px(), "12.5px");
        assert_eq!(offset.top_px(), "3px");
    }
}
