use std::cell::RefCell;

use koch::signals::sample_count;
use koch::{CodeOptions, Keyer, MorseError, Parameters, Segment, Timings, visualize};
use pretty_assertions::assert_eq;

const RATE: u32 = 8000;

fn keyer(timings: Timings) -> Keyer<RATE> {
    Keyer::with_parameters(Parameters {
        timings,
        ..Parameters::default()
    })
    .unwrap()
}

#[test]
fn test_rendered_length_tracks_planned_duration() -> anyhow::Result<()> {
    for text in ["PARIS PARIS", "CQ DE K1ABC", "5NN TU", "E"] {
        let keyer = keyer(Timings::farnsworth(8.0, Some(18.0))?);
        let timings = keyer.parameters().timings;
        let segments = keyer.plan(text, false)?.count();
        let seconds = timings.duration_of(keyer.plan(text, false)?);

        let rendered = keyer.code_with(text, false)?.count();
        let ideal = seconds * RATE as f64;
        // Each segment is rounded to the nearest frame on its own
        assert!(
            (rendered as f64 - ideal).abs() <= segments as f64 * 0.5 + 1e-6,
            "{}: {} frames vs {:.1}",
            text,
            rendered,
            ideal
        );
    }
    Ok(())
}

#[test]
fn test_tones_only_inside_keyed_segments() -> anyhow::Result<()> {
    let keyer = keyer(Timings::farnsworth(20.0, None)?);
    let samples: Vec<f64> = keyer.code_with("R", false)?.collect();

    let mut offset = 0;
    for segment in keyer.plan("R", false)? {
        let len = keyer.element(segment).len();
        let slice = &samples[offset..offset + len];
        if segment.is_tone() {
            assert!(slice.iter().any(|s| s.abs() > 0.1), "{:?}", segment);
        } else {
            assert!(slice.iter().all(|s| *s == 0.0), "{:?}", segment);
        }
        offset += len;
    }
    assert_eq!(offset, samples.len());
    Ok(())
}

#[test]
fn test_filtered_message_ends_with_settling_gap() -> anyhow::Result<()> {
    let keyer = keyer(Timings::farnsworth(20.0, None)?);
    let raw = keyer.code_with("TEST", false)?.count();
    let code = keyer.code("TEST")?;
    assert!(code.is_filtered());
    assert_eq!(code.sample_rate(), RATE);
    assert_eq!(code.count(), raw + sample_count::<RATE>(0.06));
    Ok(())
}

#[test]
fn test_band_pass_passes_the_tone() -> anyhow::Result<()> {
    let keyer = keyer(Timings::farnsworth(20.0, None)?);
    let raw_peak = keyer
        .code_with("T", false)?
        .fold(0.0_f64, |peak, s| peak.max(s.abs()));
    let filtered_peak = keyer.code("T")?.fold(0.0_f64, |peak, s| peak.max(s.abs()));

    assert!(filtered_peak > 0.5 * raw_peak, "{} vs {}", filtered_peak, raw_peak);
    assert!(filtered_peak <= 1.0);
    Ok(())
}

#[test]
fn test_echo_follows_audio() -> anyhow::Result<()> {
    let keyer = keyer(Timings::farnsworth(20.0, None)?);
    let echoed = RefCell::new(String::new());
    let mut code = keyer.code_tokens(
        ["S", "K", " ", "SK"],
        CodeOptions::new()
            .band_pass(false)
            .echo(|token| echoed.borrow_mut().push_str(token)),
    )?;

    // Nothing is reported before the first sample is pulled
    assert_eq!(*echoed.borrow(), "");
    code.next();
    assert_eq!(*echoed.borrow(), "S");
    code.for_each(drop);
    assert_eq!(*echoed.borrow(), "SK SK");
    Ok(())
}

#[test]
fn test_unknown_character_is_reported() {
    let keyer = Keyer::<RATE>::default();
    let error = keyer.code("SOS!").err();
    assert_eq!(error, Some(MorseError::unknown_token("!")));
}

#[test]
fn test_lowercase_is_not_translated() {
    let keyer = Keyer::<RATE>::default();
    assert!(matches!(
        keyer.code("sos"),
        Err(MorseError::UnknownToken { .. })
    ));
}

#[test]
fn test_scoped_speed_change() -> anyhow::Result<()> {
    let keyer = keyer(Timings::farnsworth(20.0, None)?);
    let normal = keyer.code_with("K", false)?.count();
    let slow = {
        let _speed = keyer.override_timings(Timings::farnsworth(10.0, None)?);
        keyer.code_with("K", false)?.count()
    };
    assert_eq!(slow, 2 * normal);
    assert_eq!(keyer.code_with("K", false)?.count(), normal);
    Ok(())
}

#[test]
fn test_visualized_message() -> anyhow::Result<()> {
    let keyer = keyer(Timings::farnsworth(5.0, Some(18.0))?);
    let picture = visualize(keyer.code_with("E E", false)?);
    // Two keyed runs split by a word gap
    let runs: Vec<&str> = picture.split('_').filter(|run| !run.is_empty()).collect();
    assert_eq!(runs.len(), 2, "{}", picture);
    assert!(picture.ends_with('|'));
    assert_eq!(keyer.plan("E E", false)?.filter(|s| *s == Segment::Space).count(), 1);
    Ok(())
}
