use proptest::prelude::*;
use ribcut_contour::{curve_fit, max_vertical_error, Contour, NaturalSpline};
use ribcut_core::Point;

/// Strictly x-increasing curve built from positive x steps and arbitrary y values
fn monotone_curve() -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((0.01f64..2.0, -5.0f64..5.0), 2..60).prop_map(|steps| {
        let mut x = 0.0;
        steps
            .into_iter()
            .map(|(dx, y)| {
                x += dx;
                Point::new(x, y)
            })
            .collect()
    })
}

fn close(a: &[Point], b: &[Point], tol: f64) -> bool {
    a.len() == b.len()
        && a
            .iter()
            .zip(b)
            .all(|(p, q)| (p.x - q.x).abs() <= tol && (p.y - q.y).abs() <= tol)
}

proptest! {
    #[test]
    fn prop_fit_keeps_endpoints_and_budget(
        curve in monotone_curve(),
        max_points in 2usize..40,
        max_error in 0.001f64..1.0,
    ) {
        let fit = curve_fit(&NaturalSpline, &curve, max_points, max_error);
        prop_assert_eq!(fit.points.first(), curve.first());
        prop_assert_eq!(fit.points.last(), curve.last());
        prop_assert!(fit.points.len() <= max_points.max(2));
        prop_assert!(fit.points.windows(2).all(|w| w[0].x < w[1].x));
        if !fit.budget_exhausted {
            prop_assert!(max_vertical_error(&NaturalSpline, &curve, &fit.points) <= max_error);
        }
    }

    #[test]
    fn prop_fit_points_come_from_input(curve in monotone_curve(), max_error in 0.001f64..1.0) {
        let fit = curve_fit(&NaturalSpline, &curve, 100, max_error);
        prop_assert!(fit.points.iter().all(|p| curve.contains(p)));
    }

    #[test]
    fn prop_rotate_inverse(
        top in monotone_curve(),
        bottom in monotone_curve(),
        degrees in -180.0f64..180.0,
    ) {
        let mut c = Contour::new(top.clone(), bottom.clone()).unwrap();
        c.rotate(degrees);
        c.rotate(-degrees);
        prop_assert!(close(c.top(), &top, 1e-9));
        prop_assert!(close(c.bottom(), &bottom, 1e-9));
    }

    #[test]
    fn prop_scale_inverse(
        top in monotone_curve(),
        bottom in monotone_curve(),
        s in 0.1f64..10.0,
    ) {
        let mut c = Contour::new(top.clone(), bottom.clone()).unwrap();
        c.scale(s, s);
        c.scale(1.0 / s, 1.0 / s);
        prop_assert!(close(c.top(), &top, 1e-9));
        prop_assert!(close(c.bottom(), &bottom, 1e-9));
    }
}
