//! Numeric column transformations.

use crate::instance::{Instance, Odometer};
use crate::kind::TransformerKind;
use crate::schema::{BoundArgs, ParamSpec, ParamType};
use crate::transformers::Transform;
use crate::value::{Numeric, ParamValue};

const LOWER: ParamSpec = ParamSpec::optional("lower", ParamType::Number).nullable();
const UPPER: ParamSpec = ParamSpec::optional("upper", ParamType::Number).nullable();
const EPSILON: ParamSpec = ParamSpec::optional("epsilon", ParamType::Number);
const NULLABLE: ParamSpec = ParamSpec::optional("nullable", ParamType::Bool);
const ODOMETER: ParamSpec = ParamSpec::optional("odometer", ParamType::Instance).nullable();

const DEFAULT_EPSILON: Numeric = Numeric::Float(0.0);

/// Observed minimum and maximum of a fitted column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FittedRange {
    pub min: f64,
    pub max: f64,
}

impl FittedRange {
    /// Range of the finite values, or `None` when there are none.
    pub fn observe(values: &[f64]) -> Option<Self> {
        values
            .iter()
            .copied()
            .filter(|value| value.is_finite())
            .fold(None, |range, value| {
                Some(match range {
                    None => Self {
                        min: value,
                        max: value,
                    },
                    Some(Self { min, max }) => Self {
                        min: min.min(value),
                        max: max.max(value),
                    },
                })
            })
    }
}

/// Observed mean and standard deviation of a fitted column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FittedMoments {
    pub mean: f64,
    pub std: f64,
}

impl FittedMoments {
    pub fn observe(values: &[f64]) -> Option<Self> {
        let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        if finite.is_empty() {
            return None;
        }
        let n = finite.len() as f64;
        let mean = finite.iter().sum::<f64>() / n;
        let variance = finite.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        Some(Self {
            mean,
            std: variance.sqrt(),
        })
    }
}

fn range_attributes(fitted: Option<FittedRange>) -> [(&'static str, ParamValue); 3] {
    [
        ("fit_complete", fitted.is_some().into()),
        ("fit_min", fitted.map(|range| range.min).into()),
        ("fit_max", fitted.map(|range| range.max).into()),
    ]
}

fn odometer_value(odometer: Option<&Instance>) -> ParamValue {
    odometer.cloned().into()
}

/// Discretizes a numeric column into `bins` equal-width buckets.
#[derive(Debug, Clone, PartialEq)]
pub struct BinTransformer {
    lower: Option<Numeric>,
    upper: Option<Numeric>,
    epsilon: Numeric,
    bins: i64,
    nullable: bool,
    odometer: Option<Instance>,
    fitted: Option<FittedRange>,
}

impl Default for BinTransformer {
    fn default() -> Self {
        Self {
            lower: None,
            upper: None,
            epsilon: DEFAULT_EPSILON,
            bins: 10,
            nullable: false,
            odometer: None,
            fitted: None,
        }
    }
}

impl BinTransformer {
    pub const SCHEMA: &'static [ParamSpec] = &[
        LOWER,
        UPPER,
        EPSILON,
        ParamSpec::optional("bins", ParamType::Integer),
        NULLABLE,
        ODOMETER,
    ];

    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_bins(mut self, bins: i64) -> Self {
        self.bins = bins;
        self
    }

    #[must_use]
    pub fn with_bounds(mut self, lower: impl Into<Numeric>, upper: impl Into<Numeric>) -> Self {
        self.lower = Some(lower.into());
        self.upper = Some(upper.into());
        self
    }

    #[must_use]
    pub fn with_epsilon(mut self, epsilon: impl Into<Numeric>) -> Self {
        self.epsilon = epsilon.into();
        self
    }

    #[must_use]
    pub fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    #[must_use]
    pub fn with_odometer(mut self, odometer: Odometer) -> Self {
        self.odometer = Some(odometer.into());
        self
    }

    pub fn lower(&self) -> Option<Numeric> {
        self.lower
    }

    pub fn upper(&self) -> Option<Numeric> {
        self.upper
    }

    pub fn bins(&self) -> i64 {
        self.bins
    }

    pub fn epsilon(&self) -> Numeric {
        self.epsilon
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }

    pub fn odometer(&self) -> Option<&Instance> {
        self.odometer.as_ref()
    }

    pub fn fit(&mut self, values: &[f64]) {
        self.fitted = FittedRange::observe(values);
    }

    pub fn fitted(&self) -> Option<FittedRange> {
        self.fitted
    }

    pub(crate) fn from_args(args: &mut BoundArgs) -> Self {
        Self {
            lower: args.number("lower"),
            upper: args.number("upper"),
            epsilon: args.number_or("epsilon", DEFAULT_EPSILON),
            bins: args.integer_or("bins", 10),
            nullable: args.bool_or("nullable", false),
            odometer: args.instance("odometer"),
            fitted: None,
        }
    }
}

impl Transform for BinTransformer {
    fn kind_name(&self) -> &str {
        TransformerKind::Bin.name()
    }

    fn schema(&self) -> &'static [ParamSpec] {
        Self::SCHEMA
    }

    fn attributes(&self) -> Vec<(&str, ParamValue)> {
        let mut attributes = vec![
            ("lower", self.lower.into()),
            ("upper", self.upper.into()),
            ("epsilon", self.epsilon.into()),
            ("bins", self.bins.into()),
            ("nullable", self.nullable.into()),
            ("odometer", odometer_value(self.odometer.as_ref())),
        ];
        attributes.extend(range_attributes(self.fitted));
        attributes
    }

    fn fit_complete(&self) -> bool {
        self.fitted.is_some()
    }
}

/// Clips values into `[lower, upper]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClampTransformer {
    lower: Option<Numeric>,
    upper: Option<Numeric>,
}

impl ClampTransformer {
    pub const SCHEMA: &'static [ParamSpec] = &[LOWER, UPPER];

    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_lower(mut self, lower: impl Into<Numeric>) -> Self {
        self.lower = Some(lower.into());
        self
    }

    #[must_use]
    pub fn with_upper(mut self, upper: impl Into<Numeric>) -> Self {
        self.upper = Some(upper.into());
        self
    }

    pub fn lower(&self) -> Option<Numeric> {
        self.lower
    }

    pub fn upper(&self) -> Option<Numeric> {
        self.upper
    }

    pub(crate) fn from_args(args: &mut BoundArgs) -> Self {
        Self {
            lower: args.number("lower"),
            upper: args.number("upper"),
        }
    }
}

impl Transform for ClampTransformer {
    fn kind_name(&self) -> &str {
        TransformerKind::Clamp.name()
    }

    fn schema(&self) -> &'static [ParamSpec] {
        Self::SCHEMA
    }

    fn attributes(&self) -> Vec<(&str, ParamValue)> {
        vec![("lower", self.lower.into()), ("upper", self.upper.into())]
    }
}

/// Natural log of each value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogTransformer;

impl LogTransformer {
    pub const SCHEMA: &'static [ParamSpec] = &[];
}

impl Transform for LogTransformer {
    fn kind_name(&self) -> &str {
        TransformerKind::Log.name()
    }

    fn schema(&self) -> &'static [ParamSpec] {
        Self::SCHEMA
    }

    fn attributes(&self) -> Vec<(&str, ParamValue)> {
        Vec::new()
    }
}

/// Scales into `[-1, 1]` (or `[0, 1]` when `negative` is false).
#[derive(Debug, Clone, PartialEq)]
pub struct MinMaxTransformer {
    lower: Option<Numeric>,
    upper: Option<Numeric>,
    epsilon: Numeric,
    negative: bool,
    nullable: bool,
    odometer: Option<Instance>,
    fitted: Option<FittedRange>,
}

impl Default for MinMaxTransformer {
    fn default() -> Self {
        Self {
            lower: None,
            upper: None,
            epsilon: DEFAULT_EPSILON,
            negative: true,
            nullable: false,
            odometer: None,
            fitted: None,
        }
    }
}

impl MinMaxTransformer {
    pub const SCHEMA: &'static [ParamSpec] = &[
        LOWER,
        UPPER,
        EPSILON,
        ParamSpec::optional("negative", ParamType::Bool),
        NULLABLE,
        ODOMETER,
    ];

    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_bounds(mut self, lower: impl Into<Numeric>, upper: impl Into<Numeric>) -> Self {
        self.lower = Some(lower.into());
        self.upper = Some(upper.into());
        self
    }

    #[must_use]
    pub fn with_epsilon(mut self, epsilon: impl Into<Numeric>) -> Self {
        self.epsilon = epsilon.into();
        self
    }

    #[must_use]
    pub fn with_negative(mut self, negative: bool) -> Self {
        self.negative = negative;
        self
    }

    #[must_use]
    pub fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    #[must_use]
    pub fn with_odometer(mut self, odometer: Odometer) -> Self {
        self.odometer = Some(odometer.into());
        self
    }

    pub fn lower(&self) -> Option<Numeric> {
        self.lower
    }

    pub fn upper(&self) -> Option<Numeric> {
        self.upper
    }

    pub fn epsilon(&self) -> Numeric {
        self.epsilon
    }

    pub fn negative(&self) -> bool {
        self.negative
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }

    pub fn odometer(&self) -> Option<&Instance> {
        self.odometer.as_ref()
    }

    pub fn fit(&mut self, values: &[f64]) {
        self.fitted = FittedRange::observe(values);
    }

    pub fn fitted(&self) -> Option<FittedRange> {
        self.fitted
    }

    pub(crate) fn from_args(args: &mut BoundArgs) -> Self {
        Self {
            lower: args.number("lower"),
            upper: args.number("upper"),
            epsilon: args.number_or("epsilon", DEFAULT_EPSILON),
            negative: args.bool_or("negative", true),
            nullable: args.bool_or("nullable", false),
            odometer: args.instance("odometer"),
            fitted: None,
        }
    }
}

impl Transform for MinMaxTransformer {
    fn kind_name(&self) -> &str {
        TransformerKind::MinMax.name()
    }

    fn schema(&self) -> &'static [ParamSpec] {
        Self::SCHEMA
    }

    fn attributes(&self) -> Vec<(&str, ParamValue)> {
        let mut attributes = vec![
            ("lower", self.lower.into()),
            ("upper", self.upper.into()),
            ("epsilon", self.epsilon.into()),
            ("negative", self.negative.into()),
            ("nullable", self.nullable.into()),
            ("odometer", odometer_value(self.odometer.as_ref())),
        ];
        attributes.extend(range_attributes(self.fitted));
        attributes
    }

    fn fit_complete(&self) -> bool {
        self.fitted.is_some()
    }
}

/// Centers on the mean and divides by the standard deviation.
#[derive(Debug, Clone, PartialEq)]
pub struct StandardScaler {
    lower: Option<Numeric>,
    upper: Option<Numeric>,
    epsilon: Numeric,
    nullable: bool,
    odometer: Option<Instance>,
    fitted: Option<FittedMoments>,
}

impl Default for StandardScaler {
    fn default() -> Self {
        Self {
            lower: None,
            upper: None,
            epsilon: DEFAULT_EPSILON,
            nullable: false,
            odometer: None,
            fitted: None,
        }
    }
}

impl StandardScaler {
    pub const SCHEMA: &'static [ParamSpec] = &[LOWER, UPPER, EPSILON, NULLABLE, ODOMETER];

    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_bounds(mut self, lower: impl Into<Numeric>, upper: impl Into<Numeric>) -> Self {
        self.lower = Some(lower.into());
        self.upper = Some(upper.into());
        self
    }

    #[must_use]
    pub fn with_epsilon(mut self, epsilon: impl Into<Numeric>) -> Self {
        self.epsilon = epsilon.into();
        self
    }

    #[must_use]
    pub fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    #[must_use]
    pub fn with_odometer(mut self, odometer: Odometer) -> Self {
        self.odometer = Some(odometer.into());
        self
    }

    pub fn lower(&self) -> Option<Numeric> {
        self.lower
    }

    pub fn upper(&self) -> Option<Numeric> {
        self.upper
    }

    pub fn epsilon(&self) -> Numeric {
        self.epsilon
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }

    pub fn odometer(&self) -> Option<&Instance> {
        self.odometer.as_ref()
    }

    pub fn fit(&mut self, values: &[f64]) {
        self.fitted = FittedMoments::observe(values);
    }

    pub fn fitted(&self) -> Option<FittedMoments> {
        self.fitted
    }

    pub(crate) fn from_args(args: &mut BoundArgs) -> Self {
        Self {
            lower: args.number("lower"),
            upper: args.number("upper"),
            epsilon: args.number_or("epsilon", DEFAULT_EPSILON),
            nullable: args.bool_or("nullable", false),
            odometer: args.instance("odometer"),
            fitted: None,
        }
    }
}

impl Transform for StandardScaler {
    fn kind_name(&self) -> &str {
        TransformerKind::StandardScaler.name()
    }

    fn schema(&self) -> &'static [ParamSpec] {
        Self::SCHEMA
    }

    fn attributes(&self) -> Vec<(&str, ParamValue)> {
        vec![
            ("lower", self.lower.into()),
            ("upper", self.upper.into()),
            ("epsilon", self.epsilon.into()),
            ("nullable", self.nullable.into()),
            ("odometer", odometer_value(self.odometer.as_ref())),
            ("fit_complete", self.fitted.is_some().into()),
            ("fit_mean", self.fitted.map(|m| m.mean).into()),
            ("fit_std", self.fitted.map(|m| m.std).into()),
        ]
    }

    fn fit_complete(&self) -> bool {
        self.fitted.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_ignores_non_finite() {
        let range = FittedRange::observe(&[3.0, f64::NAN, -1.0, f64::INFINITY, 7.5]).unwrap();
        assert_eq!(range, FittedRange { min: -1.0, max: 7.5 });
        assert!(FittedRange::observe(&[]).is_none());
    }

    #[test]
    fn moments_of_constant_column() {
        let moments = FittedMoments::observe(&[2.0, 2.0, 2.0]).unwrap();
        assert_eq!(moments.mean, 2.0);
        assert_eq!(moments.std, 0.0);
    }

    #[test]
    fn fitted_state_is_reported_but_not_in_schema() {
        let mut minmax = MinMaxTransformer::new().with_bounds(0, 100);
        minmax.fit(&[5.0, 50.0]);
        assert!(minmax.fit_complete());

        let names: Vec<&str> = minmax.attributes().into_iter().map(|(n, _)| n).collect();
        assert!(names.contains(&"fit_min"));
        assert!(
            !MinMaxTransformer::SCHEMA
                .iter()
                .any(|spec| spec.name == "fit_min")
        );
    }

    #[test]
    fn bin_defaults() {
        let bin = BinTransformer::new();
        assert_eq!(bin.bins(), 10);
        assert_eq!(bin.epsilon(), Numeric::Float(0.0));
        assert_eq!(bin.lower(), None);
    }
}
