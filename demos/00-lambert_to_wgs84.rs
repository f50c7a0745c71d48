// Lambert to WGS84: single points, batches, and distances.
//
// Run with `RUST_LOG=trace cargo run --example 00-lambert_to_wgs84`
// to see the solver iteration counts.
use lambert::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // The same spot in Paris, in two of the six zones
    let l93 = convert_to_wgs84_deg(652381.0, 6862047.0, LambertZone::Lambert93)?;
    let l2e = convert_to_wgs84_deg(601000.0, 2429000.0, "lambert2e".parse()?)?;
    println!("Lambert 93:       lon {:.6}, lat {:.6}", l93[0], l93[1]);
    println!("Lambert II étendu: lon {:.6}, lat {:.6}", l2e[0], l2e[1]);
    println!(
        "Distance: {:.3} km",
        haversine_distance_km(l93[0], l93[1], l2e[0], l2e[1])
    );

    // Batch conversion with tighter solver settings
    let converter = Converter::new(Settings::default().with_epsilon(1e-12)?);
    let mut data = [
        GeoPoint::planar(668832.5384, 6950138.7285),
        GeoPoint::planar(652381.0, 6862047.0),
        GeoPoint::planar(843000.0, 6518000.0),
    ];
    let n = converter.apply(LambertZone::Lambert93, &mut data);
    println!("Converted {n} of {} points:", data.len());
    for coord in data {
        let deg = coord.to_degrees();
        println!("    {:.8} {:.8} {:.3}", deg[0], deg[1], deg[2]);
    }

    Ok(())
}
