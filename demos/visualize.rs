use koch::{Keyer, Timings, visualize};

fn main() -> anyhow::Result<()> {
    let text = std::env::args().nth(1).unwrap_or_else(|| "CQ DE K1ABC".to_string());
    let keyer: Keyer<8000> = Keyer::default();

    println!("Morse visualization of {:?}\n", text);

    for (wpm, cwpm) in [(20.0, None), (10.0, Some(18.0)), (5.0, Some(18.0))] {
        let _speed = keyer.override_timings(Timings::farnsworth(wpm, cwpm)?);
        let samples: Vec<f64> = keyer.code(&text)?.collect();
        let seconds = samples.len() as f64 / keyer.sample_rate() as f64;

        println!("{} WPM, characters at {} WPM ({:.2}s)", wpm, cwpm.unwrap_or(wpm), seconds);
        println!("   {}\n", visualize(samples));
    }

    Ok(())
}
