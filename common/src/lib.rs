use std::{fmt::Display, marker::PhantomData};

mod error;

pub use error::{MrError, MrResult};

/// One intermediate or final record.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct KeyValue<V = String> {
    pub key: String,
    pub value: V,
}

impl<V> KeyValue<V> {
    pub fn new(key: impl Into<String>, value: V) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// All values emitted for one key, in the order they reach the reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group<V> {
    pub key: String,
    pub values: Vec<V>,
}

/// User map logic, called once per input line.
///
/// `id` names the source file the line came from. Implementations must not
/// carry state from one line to the next.
pub trait Mapper {
    type Value;

    fn map(&self, id: &str, line: &str) -> anyhow::Result<Vec<KeyValue<Self::Value>>>;
}

/// User reduce logic, called once per key with every value mapped to it.
///
/// Values arrive in no particular order, so the result must not depend on it.
pub trait Reducer<V> {
    type Output: Display;

    fn reduce(&self, key: &str, values: Vec<V>) -> anyhow::Result<Vec<KeyValue<Self::Output>>>;
}

/// Adapts a plain function into a [`Mapper`].
pub struct FnMapper<F, V> {
    f: F,
    _value: PhantomData<fn() -> V>,
}

impl<F, V> FnMapper<F, V>
where
    F: Fn(&str, &str) -> anyhow::Result<Vec<KeyValue<V>>>,
{
    pub fn new(f: F) -> Self {
        Self {
            f,
            _value: PhantomData,
        }
    }
}

impl<F, V> Mapper for FnMapper<F, V>
where
    F: Fn(&str, &str) -> anyhow::Result<Vec<KeyValue<V>>>,
{
    type Value = V;

    fn map(&self, id: &str, line: &str) -> anyhow::Result<Vec<KeyValue<V>>> {
        (self.f)(id, line)
    }
}

/// Adapts a plain function into a [`Reducer`].
pub struct FnReducer<F, O> {
    f: F,
    _output: PhantomData<fn() -> O>,
}

impl<F, O> FnReducer<F, O> {
    pub fn new<V>(f: F) -> Self
    where
        F: Fn(&str, Vec<V>) -> anyhow::Result<Vec<KeyValue<O>>>,
    {
        Self {
            f,
            _output: PhantomData,
        }
    }
}

impl<F, V, O> Reducer<V> for FnReducer<F, O>
where
    F: Fn(&str, Vec<V>) -> anyhow::Result<Vec<KeyValue<O>>>,
    O: Display,
{
    type Output = O;

    fn reduce(&self, key: &str, values: Vec<V>) -> anyhow::Result<Vec<KeyValue<O>>> {
        (self.f)(key, values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fn_mapper_forwards_arguments() {
        let mapper = FnMapper::new(|id: &str, line: &str| Ok(vec![KeyValue::new(id, line.len())]));
        let kvs = mapper.map("a.txt", "hello").unwrap();
        assert_eq!(kvs, vec![KeyValue::new("a.txt", 5)]);
    }

    #[test]
    fn fn_reducer_sums() {
        let reducer = FnReducer::new(|key: &str, values: Vec<u32>| {
            Ok(vec![KeyValue::new(key, values.iter().sum::<u32>())])
        });
        let kvs = reducer.reduce("x", vec![1, 2, 3]).unwrap();
        assert_eq!(kvs, vec![KeyValue::new("x", 6)]);
    }

    #[test]
    fn key_values_order_by_key_first() {
        let mut kvs = vec![KeyValue::new("b", 1), KeyValue::new("a", 2)];
        kvs.sort();
        assert_eq!(kvs[0].key, "a");
    }
}
