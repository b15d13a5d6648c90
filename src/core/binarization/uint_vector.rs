//! vector-of-uint 복합 스킴

use super::uint::{Uint, MAX_UINT_WIDTH};
use super::{Binarization, Value};
use crate::core::error::{QuboError, Result};

/// 같은 폭의 독립 uint 서브필드 `count`개를 연속으로 패킹
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UintVector {
    pub count: usize,
    pub width: usize,
}

impl UintVector {
    pub fn new(count: usize, width: usize) -> Self {
        Self { count, width }
    }

    /// 전체 비트 폭
    pub fn total_width(&self) -> usize {
        self.count * self.width
    }
}

impl Binarization for UintVector {
    fn name(&self) -> &'static str {
        "uint_vector"
    }

    fn check_width(&self, width: usize) -> Result<()> {
        if self.width > MAX_UINT_WIDTH {
            return Err(QuboError::InvalidWidth {
                scheme: "uint_vector",
                width: self.width,
                reason: format!("서브필드 최대 {}비트", MAX_UINT_WIDTH),
            });
        }
        if width != self.total_width() {
            return Err(QuboError::InvalidWidth {
                scheme: "uint_vector",
                width,
                reason: format!("{} x {} = {}비트 필요", self.count, self.width, self.total_width()),
            });
        }
        Ok(())
    }

    fn encode(&self, value: &Value, width: usize) -> Result<Vec<u8>> {
        self.check_width(width)?;
        let values = value.as_vector().ok_or_else(|| {
            QuboError::domain("uint_vector", format!("벡터가 필요하지만 {} 값", value.kind()))
        })?;
        if values.len() != self.count {
            return Err(QuboError::domain(
                "uint_vector",
                format!("원소 {}개 필요, {}개 주어짐", self.count, values.len()),
            ));
        }

        let mut out = Vec::with_capacity(width);
        for (idx, &v) in values.iter().enumerate() {
            Uint::write_field(v, self.width, &mut out).map_err(|e| match e {
                QuboError::Domain { reason, .. } => {
                    QuboError::domain("uint_vector", format!("원소 {}: {}", idx, reason))
                }
                other => other,
            })?;
        }
        Ok(out)
    }

    fn decode(&self, bits: &[u8]) -> Value {
        if self.width == 0 {
            return Value::Vector(vec![0; self.count]);
        }
        Value::Vector(bits.chunks(self.width).map(Uint::read_field).collect())
    }
}
