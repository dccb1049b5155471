//! Serializing range-limited angles.
//!
//! Bounded angles are written as `{ value, minimum, maximum }`; loading re-validates the value, and missing bounds fall
//! back to the variant defaults.
//!
//! To run this example with serde support:
//! ```bash
//! cargo run --example serialization --features serde
//! ```

#[cfg(feature = "serde")]
fn main() {
    use angles::{Angle, Declination, RA};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize)]
    struct Target {
        name: String,
        ra: RA,
        dec: Declination,
        position_angle: Angle,
    }

    let target = Target {
        name: "M42".to_string(),
        ra: RA::from_dms(5.0, 35.0, 17.3).unwrap(),
        dec: Declination::from_dms(-5.0, 23.0, 28.0).unwrap(),
        position_angle: Angle::new(12.5),
    };

    let json = serde_json::to_string_pretty(&target).unwrap();
    println!("{}", json);

    let back: Target = serde_json::from_str(&json).unwrap();
    println!("{} at {} {}", back.name, back.ra, back.dec);

    let short = r#"{"name":"pole","ra":{"value":0.0},"dec":{"value":90.0},"position_angle":0.0}"#;
    let pole: Target = serde_json::from_str(short).unwrap();
    println!("{} bounds [{}, {}]", pole.name, pole.dec.minimum(), pole.dec.maximum());

    let bad = r#"{"name":"nowhere","ra":{"value":0.0},"dec":{"value":91.0},"position_angle":0.0}"#;
    match serde_json::from_str::<Target>(bad) {
        Ok(_) => println!("unexpectedly accepted"),
        Err(err) => println!("rejected: {}", err),
    }
}

#[cfg(not(feature = "serde"))]
fn main() {
    println!("This example requires the 'serde' feature.");
    println!("Run with: cargo run --example serialization --features serde");
}
