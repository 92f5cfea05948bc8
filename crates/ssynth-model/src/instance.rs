//! Zero-argument instances that transformations may hold as parameters.

/// Running total of the privacy budget spent by the transformations that
/// share it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Odometer {
    spent: f64,
    queries: u64,
}

impl Odometer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one query that consumed `epsilon`.
    pub fn spend(&mut self, epsilon: f64) {
        self.spent += epsilon;
        self.queries += 1;
    }

    pub fn spent(&self) -> f64 {
        self.spent
    }

    pub fn queries(&self) -> u64 {
        self.queries
    }
}

/// A live object that can be rebuilt from its name alone.
///
/// Only the name travels; any accumulated state starts over on the other
/// side.
#[derive(Debug, Clone, PartialEq)]
pub enum Instance {
    Odometer(Odometer),
}

impl Instance {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Odometer(_) => "Odometer",
        }
    }
}

impl From<Odometer> for Instance {
    fn from(value: Odometer) -> Self {
        Self::Odometer(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn odometer_accumulates() {
        let mut odometer = Odometer::new();
        odometer.spend(0.5);
        odometer.spend(0.25);
        assert_eq!(odometer.spent(), 0.75);
        assert_eq!(odometer.queries(), 2);
    }

    #[test]
    fn instance_name_ignores_state() {
        let mut odometer = Odometer::new();
        odometer.spend(1.0);
        assert_eq!(Instance::from(odometer).name(), "Odometer");
    }
}
