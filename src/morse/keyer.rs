//! The keyer: parameter state, tone generation and message synthesis.

use std::cell::Cell;
use std::rc::Rc;

use super::cache::WaveformCache;
use super::params::{
    DEFAULT_SAMPLE_RATE, Parameters, TONE_LEVEL_DB, check_bandwidth, check_frequency,
};
use super::plan::{Characters, Echo, Segment, SegmentPlan, characters, plan_tokens};
use super::symbols::SymbolTable;
use super::timing::Timings;
use super::visualize::visualize;
use crate::error::MorseResult;
use crate::filters::{Cascade, band_pass};
use crate::signals::{Silence, silence};

/// Holds the active synthesis parameters and turns text into audio.
///
/// Parameters are changed through scoped overrides: each `override_*` call
/// returns a guard that restores the previous value of that one parameter when
/// dropped. Overrides of different parameters nest in any order.
///
/// A keyer is `!Sync`: its parameters belong to one thread.
///
/// # Examples
///
/// ```
/// use koch::{Keyer, Timings};
///
/// let keyer = Keyer::new();
/// {
///     let _speed = keyer.override_timings(Timings::wpm(12.0, Some(18.0)).unwrap());
///     let _pitch = keyer.override_tone(600.0).unwrap();
///     let samples: Vec<f64> = keyer.code("CQ").unwrap().collect();
///     assert!(!samples.is_empty());
/// }
/// assert_eq!(keyer.parameters().frequency, 770.0);
/// ```
pub struct Keyer<const SAMPLE_RATE: u32 = DEFAULT_SAMPLE_RATE> {
    params: Cell<Parameters>,
    table: &'static SymbolTable,
    cache: WaveformCache,
}

impl Keyer {
    /// A keyer at the default frame rate with default parameters.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<const SAMPLE_RATE: u32> Default for Keyer<SAMPLE_RATE> {
    fn default() -> Self {
        Self {
            params: Cell::new(Parameters::default()),
            table: SymbolTable::standard(),
            cache: WaveformCache::default(),
        }
    }
}

impl<const SAMPLE_RATE: u32> Keyer<SAMPLE_RATE> {
    /// A keyer starting from `params`.
    ///
    /// # Errors
    ///
    /// Fails like [`Parameters::validate`] on an unusable frequency or bandwidth.
    pub fn with_parameters(params: Parameters) -> MorseResult<Self> {
        params.validate()?;
        let keyer = Self::default();
        keyer.params.set(params);
        Ok(keyer)
    }

    /// The parameters in effect right now.
    pub fn parameters(&self) -> Parameters {
        self.params.get()
    }

    pub fn symbols(&self) -> &'static SymbolTable {
        self.table
    }

    /// Frame rate of everything this keyer produces.
    pub fn sample_rate(&self) -> u32 {
        SAMPLE_RATE
    }

    /// Uses `timings` until the returned guard is dropped.
    pub fn override_timings(&self, timings: Timings) -> Override<'_, SAMPLE_RATE> {
        log::debug!("timings override: dit {:.4}s", timings.dit);
        self.install(Setting::Timings(timings))
    }

    /// Uses a `frequency` Hz tone until the returned guard is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`MorseError::InvalidFrequency`](crate::MorseError::InvalidFrequency)
    /// for non-positive or non-finite frequencies.
    pub fn override_tone(&self, frequency: f64) -> MorseResult<Override<'_, SAMPLE_RATE>> {
        let frequency = check_frequency(frequency)?;
        log::debug!("tone override: {frequency} Hz");
        Ok(self.install(Setting::Frequency(frequency)))
    }

    /// Uses a `bandwidth` Hz pass band until the returned guard is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`MorseError::InvalidBandwidth`](crate::MorseError::InvalidBandwidth)
    /// for non-positive or non-finite bandwidths.
    pub fn override_bandwidth(&self, bandwidth: f64) -> MorseResult<Override<'_, SAMPLE_RATE>> {
        let bandwidth = check_bandwidth(bandwidth)?;
        log::debug!("bandwidth override: {bandwidth} Hz");
        Ok(self.install(Setting::Bandwidth(bandwidth)))
    }

    fn install(&self, setting: Setting) -> Override<'_, SAMPLE_RATE> {
        Override {
            keyer: self,
            saved: self.replace(setting),
        }
    }

    /// Writes one parameter and returns its previous value.
    fn replace(&self, setting: Setting) -> Setting {
        let mut params = self.params.get();
        let previous = match setting {
            Setting::Timings(timings) => {
                Setting::Timings(std::mem::replace(&mut params.timings, timings))
            }
            Setting::Frequency(freq) => {
                Setting::Frequency(std::mem::replace(&mut params.frequency, freq))
            }
            Setting::Bandwidth(bandwidth) => {
                Setting::Bandwidth(std::mem::replace(&mut params.bandwidth, bandwidth))
            }
        };
        self.params.set(params);
        self.cache.clear();
        previous
    }

    /// The samples of one segment, using the parameters in effect now.
    ///
    /// Dots and dashes are tones at the current frequency, 3 dB below full
    /// scale. Every other segment is silence of the matching length.
    pub fn element(&self, segment: Segment) -> Element {
        let params = self.params.get();
        let seconds = params.timings.duration(segment);
        if segment.is_tone() {
            Element::Tone {
                samples: self
                    .cache
                    .tone::<SAMPLE_RATE>(seconds, params.frequency, TONE_LEVEL_DB),
                position: 0,
            }
        } else {
            Element::Silence(silence::<SAMPLE_RATE>(seconds))
        }
    }

    /// Plans the segments of `text`; see [`plan`](crate::plan).
    pub fn plan<'a>(
        &'a self,
        text: &'a str,
        suffix_space: bool,
    ) -> MorseResult<SegmentPlan<'a, Characters<'a>>> {
        plan_tokens(self.table, characters(text), suffix_space)
    }

    /// Band-pass filtered Morse audio for `text`.
    ///
    /// # Errors
    ///
    /// Returns [`MorseError::UnknownToken`](crate::MorseError::UnknownToken) if
    /// any character has no Morse symbol. Nothing is synthesized in that case.
    pub fn code<'a>(&'a self, text: &'a str) -> MorseResult<Code<'a, Characters<'a>, SAMPLE_RATE>> {
        self.code_tokens(characters(text), CodeOptions::default())
    }

    /// Morse audio for `text`, filtered only if `use_bpf` is set.
    pub fn code_with<'a>(
        &'a self,
        text: &'a str,
        use_bpf: bool,
    ) -> MorseResult<Code<'a, Characters<'a>, SAMPLE_RATE>> {
        self.code_tokens(characters(text), CodeOptions::new().band_pass(use_bpf))
    }

    /// Morse audio for pre-segmented tokens, such as a message with prosigns.
    ///
    /// Samples are produced lazily. Each segment reads the keyer's parameters
    /// when it starts, while the band-pass filter is tuned to the frequency and
    /// bandwidth in effect when this is called.
    pub fn code_tokens<'a, I>(
        &'a self,
        tokens: I,
        options: CodeOptions<'a>,
    ) -> MorseResult<Code<'a, I::IntoIter, SAMPLE_RATE>>
    where
        I: IntoIterator<Item = &'a str>,
        I::IntoIter: Clone,
    {
        let CodeOptions { use_bpf, echo } = options;
        let mut plan = plan_tokens(self.table, tokens, use_bpf)?;
        if let Some(echo) = echo {
            plan = plan.with_boxed_echo(echo);
        }

        let params = self.params.get();
        let keyed = Keyed {
            keyer: self,
            plan,
            element: Element::empty(),
        };
        let stage = if use_bpf {
            log::debug!(
                "keying at {} Hz, band-pass half-width {} Hz",
                params.frequency,
                params.half_width()
            );
            let bpf = band_pass(params.frequency, params.half_width());
            Stage::Filtered(bpf.cascade::<SAMPLE_RATE, _>(keyed))
        } else {
            log::debug!("keying at {} Hz, unfiltered", params.frequency);
            Stage::Raw(keyed)
        };
        Ok(Code { stage })
    }

    /// Logs an ASCII rendering of `text` at debug level.
    ///
    /// The rendering is synthesized separately, so it never consumes audio meant
    /// for playback.
    pub fn log_visualization(&self, text: &str) -> MorseResult<()> {
        let samples = self.code(text)?;
        if log::log_enabled!(log::Level::Debug) {
            log::debug!("{}", visualize(samples));
        }
        Ok(())
    }
}

/// One parameter value, either being installed or saved for restoring.
#[derive(Debug, Clone, Copy)]
enum Setting {
    Timings(Timings),
    Frequency(f64),
    Bandwidth(f64),
}

/// Restores one keyer parameter when dropped.
#[must_use = "the override ends as soon as the guard is dropped"]
pub struct Override<'k, const SAMPLE_RATE: u32> {
    keyer: &'k Keyer<SAMPLE_RATE>,
    saved: Setting,
}

impl<const SAMPLE_RATE: u32> Drop for Override<'_, SAMPLE_RATE> {
    fn drop(&mut self) {
        self.keyer.replace(self.saved);
    }
}

/// Options for [`Keyer::code_tokens`].
pub struct CodeOptions<'a> {
    use_bpf: bool,
    echo: Option<Echo<'a>>,
}

impl<'a> CodeOptions<'a> {
    /// Filtered output without echo.
    pub fn new() -> Self {
        Self {
            use_bpf: true,
            echo: None,
        }
    }

    /// Turns the band-pass cascade and its settling gap on or off.
    pub fn band_pass(mut self, use_bpf: bool) -> Self {
        self.use_bpf = use_bpf;
        self
    }

    /// Reports each token to `echo` as its audio starts.
    pub fn echo(mut self, echo: impl FnMut(&str) + 'a) -> Self {
        self.echo = Some(Box::new(echo));
        self
    }
}

impl Default for CodeOptions<'_> {
    fn default() -> Self {
        Self::new()
    }
}

/// Samples of a single segment.
#[derive(Debug, Clone)]
pub enum Element {
    Tone { samples: Rc<[f64]>, position: usize },
    Silence(Silence),
}

impl Element {
    fn empty() -> Self {
        Element::Silence(silence::<1>(0.0))
    }
}

impl Iterator for Element {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        match self {
            Element::Tone { samples, position } => {
                let sample = samples.get(*position).copied()?;
                *position += 1;
                Some(sample)
            }
            Element::Silence(silence) => silence.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Element::Tone { samples, position } => {
                let remaining = samples.len().saturating_sub(*position);
                (remaining, Some(remaining))
            }
            Element::Silence(silence) => silence.size_hint(),
        }
    }
}

impl ExactSizeIterator for Element {}

/// Segments of a plan, keyed one after another.
struct Keyed<'a, I: Iterator<Item = &'a str>, const SAMPLE_RATE: u32> {
    keyer: &'a Keyer<SAMPLE_RATE>,
    plan: SegmentPlan<'a, I>,
    element: Element,
}

impl<'a, I: Iterator<Item = &'a str>, const SAMPLE_RATE: u32> Iterator
    for Keyed<'a, I, SAMPLE_RATE>
{
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        loop {
            if let Some(sample) = self.element.next() {
                return Some(sample);
            }
            let segment = self.plan.next()?;
            self.element = self.keyer.element(segment);
        }
    }
}

enum Stage<'a, I: Iterator<Item = &'a str>, const SAMPLE_RATE: u32> {
    Raw(Keyed<'a, I, SAMPLE_RATE>),
    Filtered(Cascade<SAMPLE_RATE, Keyed<'a, I, SAMPLE_RATE>>),
}

/// A lazily synthesized Morse message.
///
/// Dropping it abandons synthesis; nothing else needs cleaning up.
pub struct Code<'a, I: Iterator<Item = &'a str>, const SAMPLE_RATE: u32> {
    stage: Stage<'a, I, SAMPLE_RATE>,
}

impl<'a, I: Iterator<Item = &'a str>, const SAMPLE_RATE: u32> Code<'a, I, SAMPLE_RATE> {
    pub fn sample_rate(&self) -> u32 {
        SAMPLE_RATE
    }

    pub fn is_filtered(&self) -> bool {
        matches!(self.stage, Stage::Filtered(_))
    }
}

impl<'a, I: Iterator<Item = &'a str>, const SAMPLE_RATE: u32> Iterator
    for Code<'a, I, SAMPLE_RATE>
{
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        match &mut self.stage {
            Stage::Raw(keyed) => keyed.next(),
            Stage::Filtered(filtered) => filtered.next(),
        }
    }
}
