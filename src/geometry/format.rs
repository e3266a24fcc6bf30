//! Human readable coordinate and scale labels.

use super::coords::LatLng;

const FEET_PER_METER: f64 = 3.280_839_9;
const FEET_PER_MILE: f64 = 5280.0;

/// Decimal coordinate with five fractional digits, `lat, lng`.
pub fn format_coordinate(point: LatLng) -> String {
    format!("{:.5}, {:.5}", point.lat, point.lng)
}

fn dms(value: f64) -> (f64, f64, f64) {
    let value = value.abs();
    let degrees = value.floor();
    let minutes = ((value - degrees) * 60.0).floor();
    let seconds = ((value - degrees) * 60.0 - minutes) * 60.0;
    (degrees, minutes, seconds)
}

/// Degrees, minutes and seconds with hemisphere letters.
pub fn format_dms(point: LatLng) -> String {
    let (lat_deg, lat_min, lat_sec) = dms(point.lat);
    let (lng_deg, lng_min, lng_sec) = dms(point.lng);
    let lat_dir = if point.lat >= 0.0 { "N" } else { "S" };
    let lng_dir = if point.lng >= 0.0 { "E" } else { "W" };

    format!(
        "{lat_deg}° {lat_min}' {lat_sec:.2}\" {lat_dir}, {lng_deg}° {lng_min}' {lng_sec:.2}\" {lng_dir}"
    )
}

/// Rounds down to 1, 2, 3, 5 or 10 times a power of ten.
fn round_number(value: f64) -> f64 {
    let digits = format!("{}", value.floor() as i64).len() as i32;
    let pow10 = 10f64.powi(digits - 1);
    let d = value / pow10;
    let d = if d >= 10.0 {
        10.0
    } else if d >= 5.0 {
        5.0
    } else if d >= 3.0 {
        3.0
    } else if d >= 2.0 {
        2.0
    } else {
        1.0
    };
    pow10 * d
}

fn number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Scale bar label for a bar spanning `max_meters` on the ground, e.g. `"500 m, 2000 ft"`.
pub fn scale_label(max_meters: f64) -> String {
    let meters = round_number(max_meters);
    let metric = if meters < 1000.0 {
        format!("{} m", number(meters))
    } else {
        format!("{} km", number(meters / 1000.0))
    };

    let max_feet = max_meters * FEET_PER_METER;
    let imperial = if max_feet > FEET_PER_MILE {
        format!("{} mi", number(round_number(max_feet / FEET_PER_MILE)))
    } else {
        format!("{} ft", number(round_number(max_feet)))
    };

    format!("{metric}, {imperial}")
}
