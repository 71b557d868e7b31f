// zengrad-core/src/ops/reduction/sum.rs

use crate::ops::arithmetic::add::add_op;
use crate::value::Value;
use std::iter::Sum;

/// Folds `items` into `start` with repeated additions.
///
/// Builds a left-leaning chain `((start + x0) + x1) + ...`, one `Add` node per
/// item. With no items the result is `start` itself.
pub fn sum_op<'a, I>(start: &Value, items: I) -> Value
where
    I: IntoIterator<Item = &'a Value>,
{
    items
        .into_iter()
        .fold(start.clone(), |acc, item| add_op(&acc, item))
}

/// Sums starting from a fresh `0.0` leaf.
impl Sum<Value> for Value {
    fn sum<I: Iterator<Item = Value>>(iter: I) -> Self {
        iter.fold(Value::new(0.0), |acc, item| add_op(&acc, &item))
    }
}

impl<'a> Sum<&'a Value> for Value {
    fn sum<I: Iterator<Item = &'a Value>>(iter: I) -> Self {
        sum_op(&Value::new(0.0), iter)
    }
}

#[cfg(test)]
#[path = "sum_test.rs"]
mod tests;
