//! 부호 없는 정수 스킴

use super::{Binarization, Value};
use crate::core::error::{QuboError, Result};

/// i64로 표현 가능한 최대 uint 폭
pub const MAX_UINT_WIDTH: usize = 62;

/// 표준 위치 이진 인코딩 (LSB 우선), 도메인 `[0, 2^width)`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Uint;

impl Uint {
    /// 폭 검증이 끝난 필드에 정수를 기록
    pub(crate) fn write_field(value: i64, width: usize, out: &mut Vec<u8>) -> Result<()> {
        if value < 0 {
            return Err(QuboError::domain("uint", format!("음수 값 {}", value)));
        }
        if (value as u64) >> width != 0 {
            return Err(QuboError::domain(
                "uint",
                format!("값 {}가 2^{} 이상", value, width),
            ));
        }
        out.extend((0..width).map(|k| ((value >> k) & 1) as u8));
        Ok(())
    }

    pub(crate) fn read_field(bits: &[u8]) -> i64 {
        bits.iter()
            .enumerate()
            .fold(0i64, |acc, (k, &b)| acc | (((b & 1) as i64) << k))
    }
}

impl Binarization for Uint {
    fn name(&self) -> &'static str {
        "uint"
    }

    fn check_width(&self, width: usize) -> Result<()> {
        if width > MAX_UINT_WIDTH {
            return Err(QuboError::InvalidWidth {
                scheme: "uint",
                width,
                reason: format!("최대 {}비트", MAX_UINT_WIDTH),
            });
        }
        Ok(())
    }

    fn encode(&self, value: &Value, width: usize) -> Result<Vec<u8>> {
        self.check_width(width)?;
        let v = value.as_int().ok_or_else(|| {
            QuboError::domain("uint", format!("정수가 필요하지만 {} 값", value.kind()))
        })?;
        let mut out = Vec::with_capacity(width);
        Self::write_field(v, width, &mut out)?;
        Ok(out)
    }

    fn decode(&self, bits: &[u8]) -> Value {
        Value::Int(Self::read_field(bits))
    }
}
