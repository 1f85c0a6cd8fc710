use std::io::Write;

use koch::{CodeOptions, Keyer, Timings, random_message};

fn main() -> anyhow::Result<()> {
    // The first lessons of the Koch method
    let alphabet = ["K", "M", "R", "S", "U", "A", "P", "T", "AR"];
    let keyer = Keyer::new();
    let _speed = keyer.override_timings(Timings::wpm(12.0, Some(18.0))?);

    let message = random_message(&alphabet, 25, &mut rand::thread_rng());

    println!("Sending {} tokens at 12/18 WPM:", message.len());
    let code = keyer.code_tokens(
        message.iter().copied(),
        CodeOptions::new().echo(|token| {
            print!("{}", token);
            let _ = std::io::stdout().flush();
        }),
    )?;
    let samples = code.count();
    println!();
    println!(
        "{} samples, {:.1}s of audio",
        samples,
        samples as f64 / keyer.sample_rate() as f64
    );

    Ok(())
}
