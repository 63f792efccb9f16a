//! Column-wise missing-value imputation.

use std::collections::BTreeMap;
use std::fmt;

use polars::prelude::{AnyValue, DataFrame, DataType, IntoColumn, NamedFrom, Series};
use tracing::{info, warn};

use crate::error::Result;
use crate::frame::{any_to_f64, any_to_string};

/// The statistic used to fill one column.
#[derive(Debug, Clone, PartialEq)]
pub enum FillValue {
    Mean(f64),
    Mode(String),
}

impl fmt::Display for FillValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FillValue::Mean(value) => write!(f, "mean: {value}"),
            FillValue::Mode(value) => write!(f, "mode: {value}"),
        }
    }
}

/// Diagnostic record of one imputed column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnFill {
    pub column: String,
    pub fill: FillValue,
}

/// Replace every null in the frame, column by column.
///
/// Numeric columns take the mean of their non-null values; text columns take
/// the most frequent non-null value ("Unknown" when there is none). A
/// numeric column with no values at all is filled with 0.0 — the mean is
/// undefined there, and downstream consumers require a complete frame.
pub fn fill_missing(frame: &mut DataFrame) -> Result<Vec<ColumnFill>> {
    let names: Vec<String> = frame
        .get_column_names()
        .into_iter()
        .map(|name| name.to_string())
        .collect();
    let mut fills = Vec::with_capacity(names.len());
    for name in names {
        let fill = fill_column(frame, &name)?;
        info!(column = %name, fill = %fill.fill, "filled missing values");
        fills.push(fill);
    }
    Ok(fills)
}

fn fill_column(frame: &mut DataFrame, name: &str) -> Result<ColumnFill> {
    let column = frame.column(name)?;
    let height = frame.height();
    let is_numeric = matches!(
        column.dtype(),
        DataType::Float32 | DataType::Float64 | DataType::Int32 | DataType::Int64
    );
    if is_numeric {
        let values: Vec<Option<f64>> = (0..height)
            .map(|idx| any_to_f64(column.get(idx).unwrap_or(AnyValue::Null)))
            .collect();
        let mean = column_mean(&values).unwrap_or_else(|| {
            warn!(column = name, "column has no values; filling with 0");
            0.0
        });
        let filled: Vec<f64> = values
            .into_iter()
            .map(|value| value.unwrap_or(mean))
            .collect();
        frame.with_column(Series::new(name.into(), filled).into_column())?;
        Ok(ColumnFill {
            column: name.to_string(),
            fill: FillValue::Mean(mean),
        })
    } else {
        let values: Vec<Option<String>> = (0..height)
            .map(|idx| match column.get(idx).unwrap_or(AnyValue::Null) {
                AnyValue::Null => None,
                value => Some(any_to_string(value)),
            })
            .collect();
        let mode = column_mode(&values).unwrap_or_else(|| "Unknown".to_string());
        let filled: Vec<String> = values
            .into_iter()
            .map(|value| value.unwrap_or_else(|| mode.clone()))
            .collect();
        frame.with_column(Series::new(name.into(), filled).into_column())?;
        Ok(ColumnFill {
            column: name.to_string(),
            fill: FillValue::Mode(mode),
        })
    }
}

fn column_mean(values: &[Option<f64>]) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0usize;
    for value in values.iter().flatten() {
        sum += value;
        count += 1;
    }
    (count > 0).then(|| sum / count as f64)
}

/// Most frequent non-null value; smallest wins a tie so repeated runs agree.
fn column_mode(values: &[Option<String>]) -> Option<String> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for value in values.iter().flatten() {
        *counts.entry(value.as_str()).or_insert(0) += 1;
    }
    let mut best: Option<(&str, usize)> = None;
    for (value, count) in counts {
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((value, count)),
        }
    }
    best.map(|(value, _)| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::{ColumnFill, FillValue, fill_missing};
    use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};

    fn frame() -> DataFrame {
        let columns: Vec<Column> = vec![
            Series::new("price".into(), vec![Some(100.0), None, Some(300.0)]).into_column(),
            Series::new(
                "owner".into(),
                vec![Some("First Owner"), Some("First Owner"), None],
            )
            .into_column(),
            Series::new("empty_text".into(), vec![None::<&str>, None, None]).into_column(),
            Series::new("empty_num".into(), vec![None::<f64>, None, None]).into_column(),
        ];
        DataFrame::new(columns).unwrap()
    }

    #[test]
    fn numeric_nulls_take_the_mean() {
        let mut df = frame();
        let fills = fill_missing(&mut df).unwrap();
        assert!(fills.contains(&ColumnFill {
            column: "price".to_string(),
            fill: FillValue::Mean(200.0),
        }));
        let price = df.column("price").unwrap();
        assert_eq!(price.null_count(), 0);
        assert_eq!(price.get(1).unwrap().try_extract::<f64>().unwrap(), 200.0);
    }

    #[test]
    fn text_nulls_take_the_mode() {
        let mut df = frame();
        fill_missing(&mut df).unwrap();
        let owner = df.column("owner").unwrap();
        assert_eq!(owner.null_count(), 0);
        assert_eq!(
            owner.get(2).unwrap().get_str(),
            Some("First Owner")
        );
    }

    #[test]
    fn wholly_missing_columns_get_unknown_or_zero() {
        let mut df = frame();
        let fills = fill_missing(&mut df).unwrap();
        assert!(fills.contains(&ColumnFill {
            column: "empty_text".to_string(),
            fill: FillValue::Mode("Unknown".to_string()),
        }));
        assert!(fills.contains(&ColumnFill {
            column: "empty_num".to_string(),
            fill: FillValue::Mean(0.0),
        }));
    }

    #[test]
    fn no_nulls_remain_anywhere() {
        let mut df = frame();
        fill_missing(&mut df).unwrap();
        for column in df.get_columns() {
            assert_eq!(column.null_count(), 0, "{} still has nulls", column.name());
        }
    }

    #[test]
    fn mode_tie_breaks_lexicographically() {
        let columns: Vec<Column> = vec![
            Series::new(
                "c".into(),
                vec![Some("Petrol"), Some("Diesel"), None],
            )
            .into_column(),
        ];
        let mut df = DataFrame::new(columns).unwrap();
        let fills = fill_missing(&mut df).unwrap();
        assert_eq!(fills[0].fill, FillValue::Mode("Diesel".to_string()));
    }
}
