//! Memoized tone waveforms.
//!
//! A message only ever needs a handful of distinct tones (a dit and a dah at the
//! current frequency), so rendered tones are kept and shared between segments.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::signals::{AudioSignalExt, tone};

/// (duration, frequency, level) as raw bits so the key is hashable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct WaveformKey {
    seconds: u64,
    frequency: u64,
    level_db: u64,
}

impl WaveformKey {
    fn new(seconds: f64, frequency: f64, level_db: f64) -> Self {
        Self {
            seconds: seconds.to_bits(),
            frequency: frequency.to_bits(),
            level_db: level_db.to_bits(),
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct WaveformCache {
    waveforms: RefCell<HashMap<WaveformKey, Rc<[f64]>>>,
}

impl WaveformCache {
    /// The samples of a `seconds` long tone, rendered on first request.
    pub(crate) fn tone<const SAMPLE_RATE: u32>(
        &self,
        seconds: f64,
        frequency: f64,
        level_db: f64,
    ) -> Rc<[f64]> {
        let key = WaveformKey::new(seconds, frequency, level_db);
        let mut waveforms = self.waveforms.borrow_mut();
        waveforms
            .entry(key)
            .or_insert_with(|| {
                log::trace!("rendering {seconds:.4}s tone at {frequency} Hz ({level_db} dB)");
                tone::<SAMPLE_RATE>(frequency)
                    .volume(level_db)
                    .crop(seconds)
                    .collect()
            })
            .clone()
    }

    pub(crate) fn clear(&self) {
        self.waveforms.borrow_mut().clear();
    }

    pub(crate) fn len(&self) -> usize {
        self.waveforms.borrow().len()
    }
}
