//! Location information.
//!
//! The LOC record is defined in [RFC 1876]. Only version 0 of its record
//! data is defined. It has a fixed size of 16 octets: the version, the
//! size of the located entity and the horizontal and vertical precision
//! as single octets, followed by latitude, longitude, and altitude as
//! 32 bit values.
//!
//! [RFC 1876]: https://tools.ietf.org/html/rfc1876

use crate::base::wire::FormError;
use core::fmt::{self, Write};
use std::string::String;

/// The length of version 0 record data.
const LEN: usize = 16;

/// The value of latitude and longitude at the equator or prime meridian.
const EQUATOR: u32 = 1 << 31;

/// The altitude value of the reference spheroid in centimeters.
const ALTITUDE_BASE: i64 = 10_000_000;

/// Thousandths of a second of arc in a degree.
const DEGREE: u32 = 3_600_000;

/// Checks the shape of LOC record data.
///
/// Data of unknown versions is accepted as long as it isn’t empty.
pub fn check(data: &[u8]) -> Result<(), FormError> {
    match data.first() {
        None => Err(FormError::new("empty LOC record")),
        Some(0) if data.len() != LEN => {
            Err(FormError::new("invalid LOC record length"))
        }
        _ => Ok(()),
    }
}

/// Writes version 0 LOC record data in presentation format.
///
/// This fails for other versions as well as for values out of range.
pub fn present(data: &[u8], out: &mut String) -> fmt::Result {
    if data.len() != LEN || data[0] != 0 {
        return Err(fmt::Error);
    }
    let long = |pos: usize| {
        let mut buf = [0u8; 4];
        buf.copy_from_slice(&data[pos..pos + 4]);
        u32::from_be_bytes(buf)
    };
    present_angle(long(4), 90, ['N', 'S'], out)?;
    out.push(' ');
    present_angle(long(8), 180, ['E', 'W'], out)?;

    let altitude = i64::from(long(12)) - ALTITUDE_BASE;
    let sign = if altitude < 0 { "-" } else { "" };
    let altitude = altitude.abs();
    write!(out, " {}{}.{:02}m", sign, altitude / 100, altitude % 100)?;

    for &value in &data[1..4] {
        out.push(' ');
        present_precision(value, out)?;
        out.push('m');
    }
    Ok(())
}

/// Writes latitude or longitude as degrees, minutes, and seconds.
fn present_angle(
    value: u32,
    max_degrees: u32,
    [positive, negative]: [char; 2],
    out: &mut String,
) -> fmt::Result {
    let (mut value, hemisphere) = if value >= EQUATOR {
        (value - EQUATOR, positive)
    } else {
        (EQUATOR - value, negative)
    };
    if value > max_degrees * DEGREE {
        return Err(fmt::Error);
    }
    let degrees = value / DEGREE;
    value %= DEGREE;
    let minutes = value / 60_000;
    value %= 60_000;
    write!(
        out,
        "{} {} {}.{:03} {}",
        degrees,
        minutes,
        value / 1000,
        value % 1000,
        hemisphere
    )
}

/// Writes a size or precision value in meters.
///
/// The value is a mantissa in the upper and a power of ten in the lower
/// four bits, giving a value in centimeters.
fn present_precision(value: u8, out: &mut String) -> fmt::Result {
    let (mantissa, exponent) = (value >> 4, value & 0x0F);
    if mantissa > 9 || exponent > 9 {
        return Err(fmt::Error);
    }
    match exponent {
        0 => write!(out, "0.{:02}", mantissa),
        1 => write!(out, "0.{:02}", mantissa * 10),
        _ => {
            write!(out, "{}", mantissa)?;
            for _ in 2..exponent {
                out.push('0');
            }
            Ok(())
        }
    }
}

//============ Testing =======================================================
