//! 디코딩된 변수 값

use serde::{Deserialize, Serialize};
use std::fmt;

/// 바이너리화 스킴이 다루는 타입 있는 값
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Value {
    /// 단일 정수
    Int(i64),
    /// 정수 시퀀스 (vector-of-uint 등)
    Vector(Vec<i64>),
}

impl Value {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            Value::Vector(_) => None,
        }
    }

    pub fn as_vector(&self) -> Option<&[i64]> {
        match self {
            Value::Int(_) => None,
            Value::Vector(v) => Some(v),
        }
    }

    /// 에러 메시지용 종류 이름
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Vector(_) => "vector",
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<Vec<i64>> for Value {
    fn from(v: Vec<i64>) -> Self {
        Value::Vector(v)
    }
}

impl From<&[i64]> for Value {
    fn from(v: &[i64]) -> Self {
        Value::Vector(v.to_vec())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{}", v),
            Value::Vector(v) => write!(f, "{:?}", v),
        }
    }
}
