//! Minimal end-to-end example: build angles from components and text, combine them, and catch a range error.

use angles::{Angle, Latitude};

fn main() {
    let mut a1 = Angle::from_dms(44.0, 59.0, 60.0);
    let a2 = Angle::from_strs("44", "59", "60").expect("numeric components");

    println!("a1 = {}", a1);
    println!("a2 = {}", a2);

    a1 += a2;
    println!("sin(a1 + a2) = {}", a1.radians().sin());

    if let Err(err) = Latitude::new(200.0) {
        println!("Error: {}", err);
    }
}
