//! Equatorial and geographic coordinates: parse rendered text, normalize, and handle out-of-range arithmetic.

use angles::{Declination, ErrorKind, Latitude, Longitude, RA};

fn main() {
    // Betelgeuse
    let ra: RA = "5:55:10.3".parse().expect("valid HMS");
    let dec: Declination = "7* 24' 25.4\"".parse().expect("valid DMS");
    println!("RA {}  Dec {}", ra, dec);
    println!("RA {:.1}  Dec {:.0}", ra, dec);

    let lat = Latitude::from_dms(19.0, 49.0, 32.0).expect("in range");
    let mut lon = Longitude::new(180.0).expect("in range");
    lon.normalize().expect("wraps inside bounds");
    println!("site {} {}", lat, lon);

    let sum = dec + Declination::new(85.0).expect("in range");
    match sum {
        Ok(dec) => println!("sum {}", dec),
        Err(err) if err.kind() == ErrorKind::Range => println!("rejected: {}", err),
        Err(err) => println!("unexpected: {}", err),
    }
}
