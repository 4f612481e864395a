use float_eq::assert_float_eq;

use gausskruger::{band_order, derive_parameters, project, Datum, Error, GaussKruger, LatLon};

// Reference values from an independent double precision evaluation of the
// same series, with the meridian arc integrated to 40 digits.
const GOLDEN: &[(f64, f64, Datum, f64, f64)] = &[
    (30.0, 114.0, Datum::WGS84, 3_323_774.132_684_919_5, 20_210_474.536_535_133),
    (30.0, 114.0, Datum::CGCS2000, 3_323_774.132_588_284, 20_210_474.536_533_944),
    (39.9042, 116.4074, Datum::WGS84, 4_418_903.402_159_664, 20_449_324.791_399_81),
    (39.9042, 116.4074, Datum::CGCS2000, 4_418_903.402_044_334, 20_449_324.791_399_468),
    (-33.8688, 151.2093, Datum::WGS84, -3_750_409.199_060_561_6, 26_334_302.354_588_49),
    (60.0, 25.0, Datum::WGS84, 6_655_590.246_950_957, 5_388_411.322_552_279),
    (30.0, 5.999, Datum::WGS84, 3_323_771.603_020_175, 1_789_428.910_590_327),
    (0.0, 5.0, Datum::WGS84, 0.0, 1_722_684.513_474_386),
    (60.0, -15.0, Datum::WGS84, 6_669_091.784_851_207, -834_493.464_986_091_2),
];

#[test]
fn golden_values() {
    for &(lat, lon, datum, x, y) in GOLDEN {
        let point = project(lat, lon, datum).unwrap();

        assert_float_eq!(point.x(), x, abs <= 1e-6, "x at ({lat}, {lon}) on {datum}");
        assert_float_eq!(point.y(), y, abs <= 1e-6, "y at ({lat}, {lon}) on {datum}");
    }
}

#[test]
fn wgs84_minor_axis() {
    let params = derive_parameters(Datum::WGS84);
    assert_float_eq!(params.semi_minor_axis(), 6_356_752.314_245, abs <= 1e-3);
}

#[test]
fn equator_has_zero_meridian_arc() {
    let engine = GaussKruger::new(Datum::WGS84);
    assert_eq!(engine.meridian_arc(0.).unwrap(), 0.);

    // On the equator and a central meridian everything but the offsets vanishes
    let point = project(0., 3., Datum::WGS84).unwrap();
    assert_eq!(point.x(), 0.);
    assert_eq!(point.y(), 1_500_000.);
}

#[test]
fn central_meridian_reduces_to_arc_and_offsets() {
    for datum in [Datum::WGS84, Datum::CGCS2000] {
        let engine = GaussKruger::new(datum);
        for lat in [-60., -12.5, 1., 30., 45., 80.] {
            let point = engine.project(&LatLon::create(lat, 117.).unwrap()).unwrap();

            assert_eq!(point.x(), engine.meridian_arc(lat / 180. * std::f64::consts::PI).unwrap());
            assert_eq!(point.y(), 20_500_000.);
        }
    }
}

#[test]
fn projection_is_deterministic() {
    let first = project(39.9042, 116.4074, Datum::CGCS2000).unwrap();
    let second = project(39.9042, 116.4074, Datum::CGCS2000).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.to_string(), second.to_string());
}

#[test]
fn band_assignment_truncates() {
    for (lon, band) in [(-3.0, 1), (0.0, 1), (3.0, 1), (5.999, 1), (6.0, 2), (6.001, 2)] {
        assert_eq!(band_order(lon), band, "longitude {lon}");

        // The band shows up as the leading digit of the easting
        let point = project(60., lon, Datum::WGS84).unwrap();
        let prefix = (point.y() / 1e6).floor();
        assert_eq!(prefix, f64::from(band), "longitude {lon}");
    }
}

#[test]
fn northing_increases_with_latitude() {
    for lon in [114., 117., 119.9] {
        let mut previous = f64::NEG_INFINITY;
        for step in 1..90 {
            let lat = f64::from(step) - 0.5;
            let x = project(lat, lon, Datum::WGS84).unwrap().x();
            assert!(x > previous, "x not increasing at ({lat}, {lon})");
            previous = x;
        }
    }
}

#[test]
fn datums_differ_slightly() {
    let wgs84 = project(45., 10., Datum::WGS84).unwrap();
    let cgcs2000 = project(45., 10., Datum::CGCS2000).unwrap();

    assert_ne!(wgs84, cgcs2000);
    assert_float_eq!(wgs84.x(), cgcs2000.x(), abs <= 1e-3);
    assert_float_eq!(wgs84.y(), cgcs2000.y(), abs <= 1e-3);
}

#[test]
fn out_of_range_input_is_degenerate() {
    for (lat, lon) in [(90., 0.), (-91., 0.), (0., 180.), (0., -180.5), (f64::NAN, 10.)] {
        let err = project(lat, lon, Datum::WGS84).unwrap_err();
        assert!(matches!(err, Error::DegenerateInput(_)), "({lat}, {lon}): {err}");
    }
}

#[test]
fn far_west_of_central_meridian_is_degenerate() {
    // Both land in bands whose central meridian lies east of them, far
    // enough for the easting to go negative
    for (lat, lon) in [(-45., -3.5), (10., -20.)] {
        let err = project(lat, lon, Datum::WGS84).unwrap_err();
        assert!(matches!(err, Error::DegenerateInput(_)), "({lat}, {lon}): {err}");
    }
}

#[test]
fn loose_tolerance_still_close() {
    let coord = LatLon::create(30., 114.).unwrap();
    let strict = GaussKruger::new(Datum::WGS84).project(&coord).unwrap();
    let loose = GaussKruger::new(Datum::WGS84)
        .with_tolerance(1e-3, 1e-9)
        .project(&coord)
        .unwrap();

    assert_float_eq!(strict.x(), loose.x(), abs <= 1e-2);
    assert_eq!(strict.y(), loose.y());
}
