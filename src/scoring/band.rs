/// Highest level a profile can reach
pub const MAX_LEVEL: u8 = 100;

/// One segment of the piecewise curve that turns a base value into a level.
///
/// Inside its range a band rescales linearly: `start + (base - from) * slope`. The floored result
/// is capped at `cap`, the level where the next band starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    /// Base values below this bound fall into the band
    pub upper: f64,
    /// Base value the band starts at
    pub from: f64,
    /// Level at `from`
    pub start: f64,
    pub slope: f64,
    pub cap: u8,
}

/// The level curve, in ascending order of `upper`.
///
/// The first band also covers negative base values. Gains shrink from band to band, so the curve
/// rises quickly for modest activity and flattens out near the maximum level.
pub static BANDS: [Band; 6] = [
    Band {
        upper: 20.0,
        from: 0.0,
        start: 0.0,
        slope: 1.5,
        cap: 20,
    },
    Band {
        upper: 50.0,
        from: 20.0,
        start: 20.0,
        slope: 1.0,
        cap: 50,
    },
    Band {
        upper: 75.0,
        from: 50.0,
        start: 50.0,
        slope: 0.6,
        cap: 75,
    },
    Band {
        upper: 90.0,
        from: 75.0,
        start: 75.0,
        slope: 0.2,
        cap: 90,
    },
    Band {
        upper: 95.0,
        from: 90.0,
        start: 90.0,
        slope: 0.05,
        cap: 95,
    },
    Band {
        upper: f64::INFINITY,
        from: 95.0,
        start: 95.0,
        slope: 0.005,
        cap: MAX_LEVEL,
    },
];

impl Band {
    /// The unfloored level for `base`
    #[must_use]
    #[expect(clippy::suboptimal_flops, reason = "the product is rounded before the offset is added")]
    pub fn map(&self, base: f64) -> f64 {
        self.start + (base - self.from) * self.slope
    }

    /// The floored level for `base`, capped at the band's ceiling and never below zero
    #[must_use]
    #[expect(clippy::cast_possible_truncation, reason = "value is clamped into 0..=cap first")]
    #[expect(clippy::cast_sign_loss, reason = "value is clamped into 0..=cap first")]
    pub fn level(&self, base: f64) -> u8 {
        self.map(base).floor().clamp(0.0, f64::from(self.cap)) as u8
    }
}

/// The band `base` falls into: the first whose upper bound exceeds it.
#[must_use]
pub fn band_for(base: f64) -> &'static Band {
    BANDS
        .iter()
        .find(|band| base < band.upper)
        .unwrap_or(&BANDS[BANDS.len() - 1])
}

/// Map a base value to a level in `0..=MAX_LEVEL`.
#[must_use]
pub fn level_for(base: f64) -> u8 {
    if base.is_nan() {
        return 0;
    }

    band_for(base).level(base)
}
