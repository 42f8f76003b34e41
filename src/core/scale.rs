use crate::error::{VisualError, VisualResult};

/// Continuous value scale mapping a domain onto a pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    /// Builds a scale; a collapsed domain (e.g. `[0, 0]`) maps everything to
    /// `range_start`.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> VisualResult<Self> {
        let (domain_start, domain_end) = domain;
        let (range_start, range_end) = range;
        if !domain_start.is_finite()
            || !domain_end.is_finite()
            || !range_start.is_finite()
            || !range_end.is_finite()
        {
            return Err(VisualError::InvalidData(
                "scale domain and range must be finite".to_owned(),
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

    pub fn value_to_pixel(self, value: f64) -> VisualResult<f64> {
        if !value.is_finite() {
            return Err(VisualError::InvalidData("value must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        if span == 0.0 {
            return Ok(self.range_start);
        }
        let normalized = (value - self.domain_start) / span;
        Ok(self.range_start + normalized * (self.range_end - self.range_start))
    }

    pub fn pixel_to_value(self, pixel: f64) -> VisualResult<f64> {
        if !pixel.is_finite() {
            return Err(VisualError::InvalidData("pixel must be finite".to_owned()));
        }

        let range_span = self.range_end - self.range_start;
        if range_span == 0.0 {
            return Ok(self.domain_start);
        }
        let normalized = (pixel - self.range_start) / range_span;
        Ok(self.domain_start + normalized * (self.domain_end - self.domain_start))
    }
}

/// Discrete band scale laying out one band per category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandScale {
    range: (f64, f64),
    count: usize,
    padding: f64,
}

impl BandScale {
    /// `padding` is the inner and outer padding in band-step units, in `[0, 1)`.
    pub fn new(range: (f64, f64), count: usize, padding: f64) -> VisualResult<Self> {
        if !range.0.is_finite() || !range.1.is_finite() {
            return Err(VisualError::InvalidData(
                "band range must be finite".to_owned(),
            ));
        }
        if !padding.is_finite() || !(0.0..1.0).contains(&padding) {
            return Err(VisualError::InvalidData(
                "band padding must be finite and in [0, 1)".to_owned(),
            ));
        }
        Ok(Self {
            range,
            count,
            padding,
        })
    }

    #[must_use]
    pub fn count(self) -> usize {
        self.count
    }

    #[must_use]
    pub fn step(self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        let span = (self.range.1 - self.range.0).abs();
        let n = self.count as f64;
        span / (n + self.padding)
    }

    #[must_use]
    pub fn band_width(self) -> f64 {
        self.step() * (1.0 - self.padding)
    }

    /// Left edge of the band at `index`.
    #[must_use]
    pub fn band_start(self, index: usize) -> f64 {
        let start = self.range.0.min(self.range.1);
        let step = self.step();
        start + step * self.padding + step * index as f64
    }

    /// Index of the band containing `pixel`, if any.
    #[must_use]
    pub fn band_at(self, pixel: f64) -> Option<usize> {
        if self.count == 0 || !pixel.is_finite() {
            return None;
        }
        let width = self.band_width();
        (0..self.count).find(|&index| {
            let start = self.band_start(index);
            pixel >= start && pixel <= start + width
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_scale_splits_range_with_padding() {
        let scale = BandScale::new((0.0, 210.0), 2, 0.1).expect("band scale");
        assert!((scale.step() - 100.0).abs() < 1e-9);
        assert!((scale.band_width() - 90.0).abs() < 1e-9);
        assert!((scale.band_start(0) - 10.0).abs() < 1e-9);
        assert!((scale.band_start(1) - 110.0).abs() < 1e-9);
        assert_eq!(scale.band_at(50.0), Some(0));
        assert_eq!(scale.band_at(105.0), None);
        assert_eq!(scale.band_at(150.0), Some(1));
    }

    #[test]
    fn empty_band_scale_has_no_bands() {
        let scale = BandScale::new((0.0, 100.0), 0, 0.1).expect("band scale");
        assert_eq!(scale.band_width(), 0.0);
        assert_eq!(scale.band_at(10.0), None);
        assert!(BandScale::new((0.0, 100.0), 3, 1.0).is_err());
    }

    #[test]
    fn collapsed_linear_domain_maps_to_range_start() {
        let scale = LinearScale::new((0.0, 0.0), (300.0, 0.0)).expect("scale");
        assert_eq!(scale.value_to_pixel(42.0).expect("pixel"), 300.0);

        let scale = LinearScale::new((0.0, 30.0), (300.0, 0.0)).expect("scale");
        assert!((scale.value_to_pixel(10.0).expect("pixel") - 200.0).abs() < 1e-9);
        assert!((scale.pixel_to_value(200.0).expect("value") - 10.0).abs() < 1e-9);
        assert!(scale.value_to_pixel(f64::NAN).is_err());
    }
}
