use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{AxisId, DataPoint};
use crate::error::{ChartError, ChartResult};

/// Supplies the aggregate min/max per axis used by auto-ranging.
pub trait DataExtentSource {
    /// `None` when there is no finite sample for this axis.
    fn data_extent(&self, axis: AxisId) -> Option<(f64, f64)>;
}

/// `count` evenly spaced values from `start` to `end`, both inclusive.
#[must_use]
pub fn spacing(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            (0..count).map(|i| start + step * i as f64).collect()
        }
    }
}

/// Named ordered sequence of samples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSeries {
    name: String,
    points: Vec<DataPoint>,
}

impl DataSeries {
    #[must_use]
    pub fn new(name: impl Into<String>, points: Vec<DataPoint>) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }

    /// Pairs `x[i]` with `y[i]`; both slices must have the same length.
    pub fn from_xy(name: impl Into<String>, x: &[f64], y: &[f64]) -> ChartResult<Self> {
        if x.len() != y.len() {
            return Err(ChartError::InvalidData(format!(
                "unequal number of data elements, x={}, y={}",
                x.len(),
                y.len()
            )));
        }
        let points = x
            .iter()
            .zip(y)
            .map(|(&x, &y)| DataPoint::new(x, y))
            .collect();
        Ok(Self::new(name, points))
    }

    /// Uses the sample index as x.
    #[must_use]
    pub fn from_y(name: impl Into<String>, y: &[f64]) -> Self {
        let points = y
            .iter()
            .enumerate()
            .map(|(index, &y)| DataPoint::new(index as f64, y))
            .collect();
        Self::new(name, points)
    }

    /// Samples `function` at `count` evenly spaced x values over `[x0, x1]`.
    pub fn from_function(
        name: impl Into<String>,
        x0: f64,
        x1: f64,
        count: usize,
        function: impl Fn(f64) -> f64,
    ) -> ChartResult<Self> {
        if !x0.is_finite() || !x1.is_finite() {
            return Err(ChartError::InvalidData(
                "sampling interval must be finite".to_owned(),
            ));
        }
        let points = spacing(x0, x1, count)
            .into_iter()
            .map(|x| DataPoint::new(x, function(x)))
            .collect();
        Ok(Self::new(name, points))
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl DataExtentSource for DataSeries {
    fn data_extent(&self, axis: AxisId) -> Option<(f64, f64)> {
        self.points
            .iter()
            .map(|point| point.coordinate(axis))
            .filter(|value| value.is_finite())
            .fold(None, |extent, value| match extent {
                None => Some((value, value)),
                Some((min, max)) => Some((f64::min(min, value), f64::max(max, value))),
            })
    }
}

/// Insertion-ordered set of series keyed by unique name.
#[derive(Debug, Clone, Default)]
pub struct SeriesCollection {
    series: IndexMap<String, DataSeries>,
    added_count: usize,
}

impl SeriesCollection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a series; names must be unique.
    pub fn add(&mut self, series: DataSeries) -> ChartResult<()> {
        if series.name().is_empty() {
            return Err(ChartError::InvalidData(
                "series name must not be empty".to_owned(),
            ));
        }
        if self.series.contains_key(series.name()) {
            return Err(ChartError::InvalidData(format!(
                "series `{}` already exists",
                series.name()
            )));
        }
        self.series.insert(series.name().to_owned(), series);
        self.added_count += 1;
        Ok(())
    }

    /// Adds points under the next free `"data N"` name and returns that name.
    pub fn add_unnamed(&mut self, points: Vec<DataPoint>) -> String {
        let mut index = self.added_count;
        let mut name = format!("data {index}");
        while self.series.contains_key(&name) {
            index += 1;
            name = format!("data {index}");
        }
        self.series
            .insert(name.clone(), DataSeries::new(name.clone(), points));
        self.added_count += 1;
        name
    }

    pub fn remove(&mut self, name: &str) -> Option<DataSeries> {
        self.series.shift_remove(name)
    }

    pub fn clear(&mut self) {
        self.series.clear();
        self.added_count = 0;
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&DataSeries> {
        self.series.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DataSeries> {
        self.series.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.series.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

impl DataExtentSource for SeriesCollection {
    fn data_extent(&self, axis: AxisId) -> Option<(f64, f64)> {
        self.series
            .values()
            .filter_map(|series| series.data_extent(axis))
            .reduce(|(min_a, max_a), (min_b, max_b)| (min_a.min(min_b), max_a.max(max_b)))
    }
}
