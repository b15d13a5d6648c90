//! 검색 공간 구현

use std::fmt;
use std::ops::Range;

use super::{Assignment, BitVector};
use crate::core::binarization::{Scheme, Value};
use crate::core::error::{QuboError, Result};

/// 등록된 변수 하나. 추가된 뒤에는 변경되지 않는다.
#[derive(Clone)]
pub struct VariableSpec {
    pub name: String,
    pub scheme: Scheme,
    pub width: usize,
    /// 전체 비트 벡터에서의 시작 위치
    pub offset: usize,
}

impl VariableSpec {
    /// 이 변수가 차지하는 비트 범위
    pub fn bit_range(&self) -> Range<usize> {
        self.offset..self.offset + self.width
    }
}

impl fmt::Debug for VariableSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VariableSpec")
            .field("name", &self.name)
            .field("scheme", &self.scheme.name())
            .field("width", &self.width)
            .field("offset", &self.offset)
            .finish()
    }
}

/// 이름 붙은 변수들의 순서 있는 레지스트리
#[derive(Debug, Clone, Default)]
pub struct SearchSpace {
    variables: Vec<VariableSpec>,
    size: usize,
}

impl SearchSpace {
    pub fn new() -> Self {
        Self::default()
    }

    /// 변수 등록
    pub fn add(&mut self, name: impl Into<String>, scheme: Scheme, width: usize) -> Result<&mut Self> {
        let name = name.into();
        if self.variables.iter().any(|v| v.name == name) {
            return Err(QuboError::DuplicateName(name));
        }
        scheme.check_width(width)?;

        self.variables.push(VariableSpec {
            name,
            scheme,
            width,
            offset: self.size,
        });
        self.size += width;
        Ok(self)
    }

    /// 전체 비트 폭
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    pub fn variables(&self) -> &[VariableSpec] {
        &self.variables
    }

    pub fn variable(&self, name: &str) -> Option<&VariableSpec> {
        self.variables.iter().find(|v| v.name == name)
    }

    pub fn width_of(&self, name: &str) -> Option<usize> {
        self.variable(name).map(|v| v.width)
    }

    pub fn offset_of(&self, name: &str) -> Option<usize> {
        self.variable(name).map(|v| v.offset)
    }

    /// 할당 -> 비트 벡터 (모든 변수 필수)
    pub fn encode(&self, assignment: &Assignment) -> Result<BitVector> {
        if let Some(unknown) = assignment.names().find(|n| self.variable(n).is_none()) {
            return Err(QuboError::UnknownVariable(unknown.to_string()));
        }

        let mut bits = Vec::with_capacity(self.size);
        for var in &self.variables {
            let value = assignment
                .get(&var.name)
                .ok_or_else(|| QuboError::MissingVariable(var.name.clone()))?;
            let field = var.scheme.encode(value, var.width).map_err(|e| match e {
                QuboError::Domain { scheme, reason } => QuboError::Domain {
                    scheme,
                    reason: format!("{}: {}", var.name, reason),
                },
                other => other,
            })?;
            debug_assert_eq!(field.len(), var.width);
            bits.extend(field);
        }
        Ok(BitVector::new(bits))
    }

    /// 비트 벡터 -> 할당 (등록 순서)
    pub fn decode(&self, bits: &[u8]) -> Result<Assignment> {
        self.check_length(bits)?;
        Ok(self
            .variables
            .iter()
            .map(|var| (var.name.clone(), var.scheme.decode(&bits[var.bit_range()])))
            .collect())
    }

    /// `decode`와 동일
    #[inline]
    pub fn decode_dict(&self, bits: &[u8]) -> Result<Assignment> {
        self.decode(bits)
    }

    /// 값만 등록 순서대로
    pub fn decode_values(&self, bits: &[u8]) -> Result<Vec<Value>> {
        self.check_length(bits)?;
        Ok(self
            .variables
            .iter()
            .map(|var| var.scheme.decode(&bits[var.bit_range()]))
            .collect())
    }

    fn check_length(&self, bits: &[u8]) -> Result<()> {
        if bits.len() != self.size {
            return Err(QuboError::LengthMismatch {
                expected: self.size,
                actual: bits.len(),
            });
        }
        Ok(())
    }
}
