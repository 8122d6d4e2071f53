use gnsstime::{regional, BeidouTime, GpsTime, Period};

fn main() {
    let now = GpsTime::now();
    let bdt: BeidouTime = now.into();

    println!("GPST: {now}");
    println!("  {}", now.fields());
    println!("UTC: {:?}", now.to_utc());
    println!("GPS − UTC: {} s", now.leap_seconds());
    println!("BDT: {bdt} (BDS week {})", now.bds_week());
    println!(
        "GLONASS: day {} +{} ms",
        now.glonass_day_of_week(),
        now.glonass_ms_of_day()
    );
    println!("MJD: {}", now.mjd_days());

    // A receiver that only decoded the time of week.
    let tow = now.ms_of_week();
    println!("resolved from TOW: {}", now.resolve(tow, Period::Week));

    let glo = now.glonass_ms_of_day();
    let back = regional::glonass_ms_of_day_to_gps(&gnsstime::leap::current(), glo, now.millis());
    println!("resolved from GLONASS time of day: {}", GpsTime::new(back));
}
