use crate::error::{ChartError, ChartResult};

/// Linear domain-to-range mapping used for bar widths and for mapping pointer
/// coordinates back into the data domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> ChartResult<Self> {
        let (domain_start, domain_end) = domain;
        let (range_start, range_end) = range;
        if !domain_start.is_finite()
            || !domain_end.is_finite()
            || !range_start.is_finite()
            || !range_end.is_finite()
            || domain_start == domain_end
        {
            return Err(ChartError::InvalidData(
                "scale domain and range must be finite with a non-empty domain".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    pub fn scale(self, value: f64) -> ChartResult<f64> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }
        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        Ok(self.range_start + normalized * (self.range_end - self.range_start))
    }

    /// Inverse mapping; the guideline widget uses this to turn a pointer
    /// coordinate into a domain value.
    pub fn invert(self, position: f64) -> ChartResult<f64> {
        if !position.is_finite() {
            return Err(ChartError::InvalidData(
                "position must be finite".to_owned(),
            ));
        }
        let span = self.range_end - self.range_start;
        if span == 0.0 {
            return Err(ChartError::InvalidData(
                "cannot invert a collapsed range".to_owned(),
            ));
        }
        let normalized = (position - self.range_start) / span;
        Ok(self.domain_start + normalized * (self.domain_end - self.domain_start))
    }
}

/// Ordinal band scale assigning each key an equal slot with inner padding,
/// used for horizontal bar rows.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    keys: Vec<String>,
    range_start: f64,
    range_end: f64,
    padding_inner: f64,
}

impl BandScale {
    pub fn new(keys: Vec<String>, range: (f64, f64), padding_inner: f64) -> ChartResult<Self> {
        let (range_start, range_end) = range;
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(ChartError::InvalidData(
                "band range must be finite".to_owned(),
            ));
        }
        if !(0.0..1.0).contains(&padding_inner) {
            return Err(ChartError::InvalidData(
                "band inner padding must be in [0, 1)".to_owned(),
            ));
        }

        Ok(Self {
            keys,
            range_start,
            range_end,
            padding_inner,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Width of one band after inner padding.
    #[must_use]
    pub fn bandwidth(&self) -> f64 {
        if self.keys.is_empty() {
            return 0.0;
        }
        let span = self.range_end - self.range_start;
        let step = span / self.keys.len() as f64;
        (step * (1.0 - self.padding_inner)).max(0.0)
    }

    /// Start position of the band for `key`, or `None` for unknown keys.
    #[must_use]
    pub fn position(&self, key: &str) -> Option<f64> {
        let index = self.keys.iter().position(|candidate| candidate == key)?;
        let span = self.range_end - self.range_start;
        let step = span / self.keys.len() as f64;
        Some(self.range_start + step * index as f64 + step * self.padding_inner * 0.5)
    }
}
