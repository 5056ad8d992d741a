//! Print the lit polygon for a light below a square obstacle.
//!
//! Usage:
//!   cargo run -p umbra --example square_room -- [x y]

use umbra::prelude::*;

fn main() {
    let mut args = std::env::args().skip(1).map(|a| a.parse::<f64>());
    let (x, y) = match (args.next(), args.next()) {
        (Some(Ok(x)), Some(Ok(y))) => (x, y),
        (None, _) => (50.0, 10.0),
        _ => {
            eprintln!("usage: square_room [x y]");
            return;
        }
    };
    let square = Obstacle::rect(Vec2::new(40.0, 40.0), Vec2::new(60.0, 60.0));
    let mut light = match Light::new(LightParams::at(x, y), Area::new(100.0, 100.0), &[square]) {
        Ok(light) => light,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };
    let vis = light.update();
    println!("rays={} vertices={} area={:.3}", vis.rays.len(), vis.polygon.len(), vis.area());
    for (r, v) in vis.rays.iter().zip(&vis.polygon) {
        println!(
            "{:>9.4} {:>9.4}  {:?}{}",
            v.x,
            v.y,
            r.kind,
            if r.hit.is_some() { " (cut)" } else { "" }
        );
    }
}
