//! 변수 이름 -> 값 바인딩
//!
//! 목적 함수에 전달되는 인자 묶음이자 `SearchSpace::encode`의 입력.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core::binarization::Value;
use crate::core::error::{QuboError, Result};

/// 순서 있는 이름 -> 값 매핑
///
/// 디코딩 결과는 등록 순서를 따른다. 비교는 순서와 무관하다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Assignment {
    entries: Vec<(String, Value)>,
}

impl Assignment {
    pub fn new() -> Self {
        Self::default()
    }

    /// 빌더 형태 삽입
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// 같은 이름이 있으면 값을 교체
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// 정수 값 조회
    pub fn int(&self, name: &str) -> Result<i64> {
        let value = self
            .get(name)
            .ok_or_else(|| QuboError::UnknownVariable(name.to_string()))?;
        value.as_int().ok_or_else(|| {
            QuboError::domain("int", format!("{}는 {} 값", name, value.kind()))
        })
    }

    /// 벡터 값 조회
    pub fn vector(&self, name: &str) -> Result<&[i64]> {
        let value = self
            .get(name)
            .ok_or_else(|| QuboError::UnknownVariable(name.to_string()))?;
        value.as_vector().ok_or_else(|| {
            QuboError::domain("vector", format!("{}는 {} 값", name, value.kind()))
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_map(&self) -> BTreeMap<String, Value> {
        self.entries.iter().cloned().collect()
    }
}

impl PartialEq for Assignment {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(n, v)| other.get(n) == Some(v))
    }
}

impl Eq for Assignment {}

impl<N: Into<String>, V: Into<Value>> FromIterator<(N, V)> for Assignment {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut assignment = Assignment::new();
        for (n, v) in iter {
            assignment.insert(n, v);
        }
        assignment
    }
}
