//! core::stats
//!
//! Summary statistics over a list.
//!
//! # Semantics by Kind
//!
//! | Statistic | Integer             | Text                  | Unspecified  |
//! |-----------|---------------------|-----------------------|--------------|
//! | count     | length              | length                | NotSupported |
//! | average   | arithmetic mean     | mean character length | NotSupported |
//! | max / min | numeric value       | character length      | NotSupported |
//! | mean      | same as average     | NotSupported          | NotSupported |
//! | std       | population std dev  | NotSupported          | NotSupported |
//!
//! Everything except `count` fails with `EmptyCollection` on an empty list
//! when the kind supports it. Nothing is cached; each call reads the list.
//!
//! # Example
//!
//! ```
//! use typedlist::core::list::List;
//!
//! let mut list = List::texts();
//! for (i, s) in ["a", "ab", "abc"].into_iter().enumerate() {
//!     list.add(i, s).unwrap();
//! }
//! let stats = list.stats();
//! assert_eq!(stats.average().unwrap(), 2.0);
//! assert_eq!(stats.max().unwrap(), 3);
//! assert!(stats.std().is_err());
//! ```

use std::fmt;

use serde::Serialize;

use super::error::ListError;
use super::list::List;
use super::types::{Element, Kind};

/// Names of the available statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Statistic {
    Count,
    Average,
    Max,
    Min,
    Mean,
    Std,
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Statistic::Count => "count",
            Statistic::Average => "average",
            Statistic::Max => "max",
            Statistic::Min => "min",
            Statistic::Mean => "mean",
            Statistic::Std => "std",
        };
        f.write_str(name)
    }
}

/// Statistics view bound to one list.
#[derive(Debug, Clone, Copy)]
pub struct Stats<'a> {
    list: &'a List,
}

impl<'a> Stats<'a> {
    pub fn new(list: &'a List) -> Self {
        Self { list }
    }

    pub fn count(&self) -> Result<usize, ListError> {
        self.supported(Statistic::Count)?;
        Ok(self.list.len())
    }

    pub fn average(&self) -> Result<f64, ListError> {
        let values = self.measures(Statistic::Average)?;
        Ok(mean_of(&values))
    }

    pub fn max(&self) -> Result<i64, ListError> {
        let values = self.measures(Statistic::Max)?;
        values.into_iter().max().ok_or(ListError::EmptyCollection)
    }

    pub fn min(&self) -> Result<i64, ListError> {
        let values = self.measures(Statistic::Min)?;
        values.into_iter().min().ok_or(ListError::EmptyCollection)
    }

    pub fn mean(&self) -> Result<f64, ListError> {
        let values = self.measures(Statistic::Mean)?;
        Ok(mean_of(&values))
    }

    /// Population standard deviation (divides by N).
    pub fn std(&self) -> Result<f64, ListError> {
        let values = self.measures(Statistic::Std)?;
        let mean = mean_of(&values);
        let variance = values
            .iter()
            .map(|&v| (v as f64 - mean).powi(2))
            .sum::<f64>()
            / values.len() as f64;
        Ok(variance.sqrt())
    }

    /// Collect every statistic, dropping the ones that fail.
    pub fn summary(&self) -> Summary {
        Summary {
            kind: self.list.kind(),
            count: self.count().ok(),
            average: self.average().ok(),
            max: self.max().ok(),
            min: self.min().ok(),
            mean: self.mean().ok(),
            std: self.std().ok(),
        }
    }

    fn supported(&self, statistic: Statistic) -> Result<(), ListError> {
        let kind = self.list.kind();
        let ok = match kind {
            Kind::Unspecified => false,
            Kind::Integer => true,
            Kind::Text => !matches!(statistic, Statistic::Mean | Statistic::Std),
        };
        if ok {
            Ok(())
        } else {
            Err(ListError::NotSupported { statistic, kind })
        }
    }

    /// The numeric measure of every element: the value for integers, the
    /// character length for text. Never empty on success.
    fn measures(&self, statistic: Statistic) -> Result<Vec<i64>, ListError> {
        self.supported(statistic)?;
        if self.list.is_empty() {
            return Err(ListError::EmptyCollection);
        }
        Ok(self.list.iter().map(measure).collect())
    }
}

fn measure(element: &Element) -> i64 {
    match element {
        Element::Integer(n) => *n,
        Element::Text(s) => s.chars().count() as i64,
    }
}

fn mean_of(values: &[i64]) -> f64 {
    let sum: f64 = values.iter().map(|&v| v as f64).sum();
    sum / values.len() as f64
}

/// Every statistic of a list, absent where undefined.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub kind: Kind,
    pub count: Option<usize>,
    pub average: Option<f64>,
    pub max: Option<i64>,
    pub min: Option<i64>,
    pub mean: Option<f64>,
    pub std: Option<f64>,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn cell<T: fmt::Display>(value: &Option<T>) -> String {
            value
                .as_ref()
                .map(|v| v.to_string())
                .unwrap_or_else(|| "-".to_string())
        }

        writeln!(f, "kind:    {}", self.kind)?;
        writeln!(f, "count:   {}", cell(&self.count))?;
        writeln!(f, "average: {}", cell(&self.average))?;
        writeln!(f, "max:     {}", cell(&self.max))?;
        writeln!(f, "min:     {}", cell(&self.min))?;
        writeln!(f, "mean:    {}", cell(&self.mean))?;
        write!(f, "std:     {}", cell(&self.std))
    }
}

impl List {
    /// Statistics over the current contents.
    pub fn stats(&self) -> Stats<'_> {
        Stats::new(self)
    }
}
