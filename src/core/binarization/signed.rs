//! 오프셋 이진 부호 정수 스킴

use super::uint::{Uint, MAX_UINT_WIDTH};
use super::{Binarization, Value};
use crate::core::error::{QuboError, Result};

/// 도메인 `[-2^(w-1), 2^(w-1))`, 저장값 = 값 + 2^(w-1)
///
/// 비트에 대해 선형이므로 2차 목적 함수는 인코딩 후에도 2차로 유지된다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SignedInt;

impl SignedInt {
    fn bias(width: usize) -> i64 {
        if width == 0 {
            0
        } else {
            1i64 << (width - 1)
        }
    }
}

impl Binarization for SignedInt {
    fn name(&self) -> &'static str {
        "int"
    }

    fn check_width(&self, width: usize) -> Result<()> {
        if width > MAX_UINT_WIDTH {
            return Err(QuboError::InvalidWidth {
                scheme: "int",
                width,
                reason: format!("최대 {}비트", MAX_UINT_WIDTH),
            });
        }
        Ok(())
    }

    fn encode(&self, value: &Value, width: usize) -> Result<Vec<u8>> {
        let v = value.as_int().ok_or_else(|| {
            QuboError::domain("int", format!("정수가 필요하지만 {} 값", value.kind()))
        })?;
        self.check_width(width)?;
        let bias = Self::bias(width);
        let upper = if width == 0 { 1 } else { bias };
        if v < -bias || v >= upper {
            return Err(QuboError::domain(
                "int",
                format!("값 {}가 [{}, {}) 밖", v, -bias, upper),
            ));
        }
        let mut out = Vec::with_capacity(width);
        Uint::write_field(v + bias, width, &mut out)?;
        Ok(out)
    }

    fn decode(&self, bits: &[u8]) -> Value {
        Value::Int(Uint::read_field(bits) - Self::bias(bits.len()))
    }
}
