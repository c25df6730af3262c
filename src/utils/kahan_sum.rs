/// Compensated (Kahan) summation of floating-point values.
///
/// Walk weights are sums of arbitrarily many labels, so the error of naive
/// summation would grow with the length of the walk.
#[derive(Debug, Clone, Copy, Default)]
pub struct KahanSummation {
    /// The current value of the sum
    value: f64,
    /// The current correction
    c: f64,
}

impl KahanSummation {
    /// Creates a new Kahan summation instance
    pub fn new() -> Self {
        Self { value: 0.0, c: 0.0 }
    }

    /// Adds a value.
    ///
    /// # Arguments
    /// - `v`: the value to add to the sum.
    pub fn add(&mut self, v: f64) {
        let y = v - self.c;
        let t = self.value + y;
        self.c = (t - self.value) - y;
        self.value = t;
    }

    /// Returns the sum computed so far.
    pub fn value(&self) -> f64 {
        self.value
    }
}

impl Extend<f64> for KahanSummation {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        iter.into_iter().for_each(|v| self.add(v));
    }
}

impl FromIterator<f64> for KahanSummation {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut sum = Self::new();
        sum.extend(iter);
        sum
    }
}
