use super::*;
use crate::raster::surface::Surface;

const INK: Rgba8 = Rgba8::new(200, 40, 10, 180);

fn draw_nominal(t: &mut dyn DrawTarget) {
    t.fill_ellipse(10.0, 8.0, 5.0, 3.0, 0.4, INK);
    t.fill_circle(20.0, 20.0, 4.5, INK);
    t.fill_polygon(
        &[
            Point::new(2.0, 20.0),
            Point::new(12.0, 18.0),
            Point::new(7.0, 29.0),
        ],
        INK,
    );
    t.stroke_segment(3.0, 3.0, 28.0, 12.0, 1.5, INK);
    t.stroke_polyline(
        &[
            Point::new(16.0, 4.0),
            Point::new(26.0, 6.0),
            Point::new(24.0, 14.0),
        ],
        2.0,
        INK,
        true,
    );
}

#[test]
fn scaled_view_matches_premultiplied_coordinates() {
    let mut via_view = Surface::new(64, 64);
    draw_nominal(&mut ScaledView::new(&mut via_view, 2.0));

    let mut direct = Surface::new(64, 64);
    direct.fill_ellipse(20.0, 16.0, 10.0, 6.0, 0.4, INK);
    direct.fill_circle(40.0, 40.0, 9.0, INK);
    direct.fill_polygon(
        &[
            Point::new(4.0, 40.0),
            Point::new(24.0, 36.0),
            Point::new(14.0, 58.0),
        ],
        INK,
    );
    direct.stroke_segment(6.0, 6.0, 56.0, 24.0, 3.0, INK);
    direct.stroke_polyline(
        &[
            Point::new(32.0, 8.0),
            Point::new(52.0, 12.0),
            Point::new(48.0, 28.0),
        ],
        4.0,
        INK,
        true,
    );

    assert_eq!(via_view, direct);
}

#[test]
fn unit_scale_is_transparent_passthrough() {
    let mut a = Surface::new(32, 32);
    draw_nominal(&mut ScaledView::new(&mut a, 1.0));
    let mut b = Surface::new(32, 32);
    draw_nominal(&mut b);
    assert_eq!(a, b);
}

#[test]
fn composite_pixel_is_not_scaled() {
    let mut s = Surface::new(8, 8);
    {
        let mut view = ScaledView::new(&mut s, 4.0);
        view.composite_pixel(1, 1, Rgba8::BLACK);
        assert_eq!(view.scale(), 4.0);
    }
    assert_eq!(s.pixel(1, 1).unwrap().a, 255);
    assert_eq!(s.pixel(4, 4).unwrap().a, 0);
}

#[test]
fn views_compose() {
    let mut a = Surface::new(64, 64);
    {
        let mut outer = ScaledView::new(&mut a, 2.0);
        let mut inner = ScaledView::new(&mut outer, 2.0);
        inner.fill_circle(4.0, 4.0, 2.0, INK);
    }
    let mut b = Surface::new(64, 64);
    b.fill_circle(16.0, 16.0, 8.0, INK);
    assert_eq!(a, b);
}
