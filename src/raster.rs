//! Integer rasterization of lines, circles and arcs.
//!
//! Each routine hands the points it generates, in drawing order, to a `plot` callback and stops
//! at the first error the callback returns. Points may repeat (the circle octants meet on the
//! diagonal) and may lie outside any particular frame; nothing here clips.
//!
//! Inputs are `i32` but all arithmetic runs in `i64`, so any input span or radius is
//! representable and the points handed out are exact.

use core::f64::consts::PI;

/// Bresenham line from `(x0, y0)` to `(x1, y1)`, both ends included. Steep lines are walked along
/// y, and every line is walked from its lower to its higher major coordinate.
pub fn line<E, F>(x0: i32, y0: i32, x1: i32, y1: i32, mut plot: F) -> Result<(), E>
where
    F: FnMut(i64, i64) -> Result<(), E>,
{
    let (mut x0, mut y0) = (i64::from(x0), i64::from(y0));
    let (mut x1, mut y1) = (i64::from(x1), i64::from(y1));
    let steep = (y1 - y0).abs() > (x1 - x0).abs();
    if steep {
        core::mem::swap(&mut x0, &mut y0);
        core::mem::swap(&mut x1, &mut y1);
    }
    if x0 > x1 {
        core::mem::swap(&mut x0, &mut x1);
        core::mem::swap(&mut y0, &mut y1);
    }
    let dx = x1 - x0;
    let dy = (y1 - y0).abs();
    let ystep = if y0 < y1 { 1 } else { -1 };
    let mut err = dx / 2;
    let (mut x, mut y) = (x0, y0);
    while x <= x1 {
        if steep {
            plot(y, x)?;
        } else {
            plot(x, y)?;
        }
        err -= dy;
        if err < 0 {
            y += ystep;
            err += dx;
        }
        x += 1;
    }
    Ok(())
}

/// Walk one octant of the midpoint circle of radius `r`. `visit` gets the four axis offsets first
/// (flagged as seeds), then each `(x, y)` offset with `0 < x` as the decision variable advances
/// towards the diagonal.
fn midpoint<E, F>(r: i64, mut visit: F) -> Result<(), E>
where
    F: FnMut(i64, i64, bool) -> Result<(), E>,
{
    visit(0, r, true)?;
    visit(0, -r, true)?;
    visit(r, 0, true)?;
    visit(-r, 0, true)?;

    let mut f = 1 - r;
    let mut ddf_x = 1;
    let mut ddf_y = -2 * r;
    let mut x = 0;
    let mut y = r;
    while x < y {
        if f >= 0 {
            y -= 1;
            ddf_y += 2;
            f += ddf_y;
        }
        x += 1;
        ddf_x += 2;
        f += ddf_x;
        visit(x, y, false)?;
    }
    Ok(())
}

/// The eight reflections of an octant offset, in plotting order.
fn octants(x: i64, y: i64) -> [(i64, i64); 8] {
    [
        (x, y),
        (-x, y),
        (x, -y),
        (-x, -y),
        (y, x),
        (-y, x),
        (y, -x),
        (-y, -x),
    ]
}

/// Midpoint circle centred on `(xc, yc)`: the four axis points, then all eight octants.
pub fn circle<E, F>(xc: i32, yc: i32, r: i32, mut plot: F) -> Result<(), E>
where
    F: FnMut(i64, i64) -> Result<(), E>,
{
    let (xc, yc) = (i64::from(xc), i64::from(yc));
    midpoint(i64::from(r), |x, y, seed| {
        if seed {
            return plot(xc + x, yc + y);
        }
        for &(dx, dy) in octants(x, y).iter() {
            plot(xc + dx, yc + dy)?;
        }
        Ok(())
    })
}

/// Whether the offset `(x, y)` lies within the arc from `alpha1` to `alpha2` radians.
///
/// Screen y grows downwards, so the offset's angle is negated before comparing: `alpha` is
/// measured counter-clockwise from the positive x axis as seen on the panel.
fn in_arc(x: i64, y: i64, alpha1: f64, alpha2: f64) -> bool {
    let angle = libm::atan2(y as f64, x as f64);
    -alpha2 <= angle && angle <= -alpha1
}

/// The part of the midpoint circle centred on `(xc, yc)` whose points lie between `alpha1` and
/// `alpha2` degrees, with `-180 <= alpha1 < alpha2 <= 180`. Angles are measured from the positive
/// x axis, counter-clockwise as seen on the panel, so `0..90` is the upper right quarter.
pub fn arc<E, F>(xc: i32, yc: i32, r: i32, alpha1: f64, alpha2: f64, mut plot: F) -> Result<(), E>
where
    F: FnMut(i64, i64) -> Result<(), E>,
{
    let (xc, yc) = (i64::from(xc), i64::from(yc));
    let alpha1 = alpha1 * (PI / 180.0);
    let alpha2 = alpha2 * (PI / 180.0);
    midpoint(i64::from(r), |x, y, seed| {
        let mut put = |dx: i64, dy: i64| {
            if in_arc(dx, dy, alpha1, alpha2) {
                plot(xc + dx, yc + dy)
            } else {
                Ok(())
            }
        };
        if seed {
            return put(x, y);
        }
        for &(dx, dy) in octants(x, y).iter() {
            put(dx, dy)?;
        }
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use std::collections::BTreeSet;
    use std::vec::Vec;

    fn collect_line(x0: i32, y0: i32, x1: i32, y1: i32) -> Vec<(i64, i64)> {
        let mut points = Vec::new();
        line::<Infallible, _>(x0, y0, x1, y1, |x, y| {
            points.push((x, y));
            Ok(())
        })
        .unwrap();
        points
    }

    fn collect_circle(xc: i32, yc: i32, r: i32) -> Vec<(i64, i64)> {
        let mut points = Vec::new();
        circle::<Infallible, _>(xc, yc, r, |x, y| {
            points.push((x, y));
            Ok(())
        })
        .unwrap();
        points
    }

    fn collect_arc(xc: i32, yc: i32, r: i32, a1: f64, a2: f64) -> BTreeSet<(i64, i64)> {
        let mut points = BTreeSet::new();
        arc::<Infallible, _>(xc, yc, r, a1, a2, |x, y| {
            points.insert((x, y));
            Ok(())
        })
        .unwrap();
        points
    }

    #[test]
    fn horizontal_line() {
        assert_eq!(
            collect_line(0, 0, 4, 0),
            vec![(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)]
        );
    }

    #[test]
    fn diagonal_line() {
        assert_eq!(
            collect_line(0, 0, 3, 3),
            vec![(0, 0), (1, 1), (2, 2), (3, 3)]
        );
    }

    #[test]
    fn reversed_line_walks_from_low_x() {
        assert_eq!(
            collect_line(4, 0, 0, 0),
            vec![(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)]
        );
    }

    #[test]
    fn shallow_line() {
        // err starts at dx/2 = 2, dy = 2: steps after the 2nd and 4th pixel.
        assert_eq!(
            collect_line(0, 0, 4, 2),
            vec![(0, 0), (1, 0), (2, 1), (3, 1), (4, 2)]
        );
    }

    #[test]
    fn steep_line_walks_along_y() {
        assert_eq!(
            collect_line(0, 0, 1, 4),
            vec![(0, 0), (0, 1), (0, 2), (1, 3), (1, 4)]
        );
        // Same pixels when drawn upwards.
        assert_eq!(
            collect_line(1, 4, 0, 0),
            vec![(0, 0), (0, 1), (0, 2), (1, 3), (1, 4)]
        );
    }

    #[test]
    fn descending_line() {
        assert_eq!(
            collect_line(0, 3, 3, 0),
            vec![(0, 3), (1, 2), (2, 1), (3, 0)]
        );
    }

    #[test]
    fn single_point_line() {
        assert_eq!(collect_line(7, 9, 7, 9), vec![(7, 9)]);
    }

    #[test]
    fn circle_seeds_come_first() {
        let points = collect_circle(10, 10, 5);
        assert_eq!(&points[..4], &[(10, 15), (10, 5), (15, 10), (5, 10)]);
    }

    #[test]
    fn circle_is_eightfold_symmetric() {
        let points: BTreeSet<_> = collect_circle(10, 10, 5).into_iter().collect();
        for &(x, y) in points.iter() {
            let (dx, dy) = (x - 10, y - 10);
            for (rx, ry) in octants(dx, dy).iter() {
                assert!(points.contains(&(10 + rx, 10 + ry)), "missing {:?}", (rx, ry));
            }
        }
    }

    #[test]
    fn circle_radius_five_point_set() {
        let points: BTreeSet<_> = collect_circle(0, 0, 5).into_iter().collect();
        // One octant of the integer midpoint circle r=5: (1,5) (2,5) (3,4) (4,3).
        let mut expect = BTreeSet::new();
        for &(x, y) in &[(0, 5), (1, 5), (2, 5), (3, 4)] {
            for p in octants(x, y).iter() {
                expect.insert(*p);
            }
        }
        assert_eq!(points, expect);
    }

    #[test]
    fn zero_radius_circle_is_one_point() {
        let points = collect_circle(3, 4, 0);
        assert_eq!(points, vec![(3, 4); 4]);
    }

    #[test]
    fn arc_quarters_cover_the_circle() {
        let full: BTreeSet<_> = collect_circle(0, 0, 6).into_iter().collect();
        let mut union = BTreeSet::new();
        for &(a1, a2) in &[(0.0, 90.0), (90.0, 180.0), (-180.0, -90.0), (-90.0, 0.0)] {
            union.extend(collect_arc(0, 0, 6, a1, a2));
        }
        assert_eq!(union, full);
    }

    #[test]
    fn arc_upper_right_quarter() {
        let points = collect_arc(0, 0, 5, 0.0, 90.0);
        assert!(!points.is_empty());
        // Upper right on the panel means x >= 0 and y <= 0.
        for &(x, y) in points.iter() {
            assert!(x >= 0 && y <= 0, "{:?} outside upper right", (x, y));
        }
        assert!(points.contains(&(5, 0)));
        assert!(points.contains(&(0, -5)));
    }

    #[test]
    fn arc_lower_left_quarter() {
        let points = collect_arc(0, 0, 5, -180.0, -90.0);
        for &(x, y) in points.iter() {
            assert!(x <= 0 && y >= 0, "{:?} outside lower left", (x, y));
        }
        assert!(points.contains(&(0, 5)));
        assert!(points.contains(&(-5, 0)));
    }

    #[test]
    fn arc_negative_axis_belongs_to_lower_half() {
        // atan2(0, -r) is +pi, which the negated comparison puts at -180 degrees.
        assert!(!collect_arc(0, 0, 5, 90.0, 180.0).contains(&(-5, 0)));
        assert!(collect_arc(0, 0, 5, -180.0, -90.0).contains(&(-5, 0)));
    }

    /// Plots the first point only, then stops.
    fn first_point<F>(draw: F) -> (i64, i64)
    where
        F: FnOnce(&mut dyn FnMut(i64, i64) -> Result<(), ()>) -> Result<(), ()>,
    {
        let mut first = None;
        let result = draw(&mut |x: i64, y: i64| {
            first = Some((x, y));
            Err(())
        });
        assert_eq!(result, Err(()));
        first.unwrap()
    }

    #[test]
    fn extreme_line_does_not_overflow() {
        assert_eq!(
            first_point(|plot| line(i32::MIN, 0, i32::MAX, 0, plot)),
            (i64::from(i32::MIN), 0)
        );
        assert_eq!(
            first_point(|plot| line(0, i32::MAX, 0, i32::MIN, plot)),
            (0, i64::from(i32::MIN))
        );
        assert_eq!(
            first_point(|plot| line(i32::MAX, i32::MIN, i32::MIN, i32::MAX, plot)),
            (i64::from(i32::MIN), i64::from(i32::MAX))
        );
    }

    #[test]
    fn extreme_circle_does_not_overflow() {
        let r = i64::from(i32::MAX);
        assert_eq!(
            first_point(|plot| circle(0, 0, i32::MAX, plot)),
            (0, r)
        );
        assert_eq!(
            first_point(|plot| circle(i32::MAX, i32::MAX, i32::MAX, plot)),
            (r, 2 * r)
        );
        assert_eq!(
            first_point(|plot| arc(i32::MIN, 0, i32::MAX, 0.0, 90.0, plot)),
            (i64::from(i32::MIN), -r)
        );
    }

    #[test]
    fn plot_error_stops_drawing() {
        let mut count = 0;
        let result = circle(0, 0, 10, |_, _| {
            count += 1;
            if count == 3 {
                Err("stop")
            } else {
                Ok(())
            }
        });
        assert_eq!(result, Err("stop"));
        assert_eq!(count, 3);
    }
}
