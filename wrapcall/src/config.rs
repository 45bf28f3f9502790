use crate::{DispatchError, Result};

/// How the `+ 1` step behaves when the callback returns `i32::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum OverflowPolicy {
    /// Two's-complement wraparound: `i32::MAX + 1 == i32::MIN`.
    #[default]
    Wrapping,
    /// Report [`DispatchError::Overflow`].
    Checked,
    /// Clamp at `i32::MAX`.
    Saturating,
}

impl OverflowPolicy {
    pub(crate) fn increment(self, value: i32) -> Result<i32> {
        match self {
            OverflowPolicy::Wrapping => Ok(value.wrapping_add(1)),
            OverflowPolicy::Saturating => Ok(value.saturating_add(1)),
            OverflowPolicy::Checked => value.checked_add(1).ok_or_else(|| {
                log::warn!("{value} + 1 overflows i32");
                DispatchError::Overflow { value }
            }),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DispatchConfig {
    pub overflow: OverflowPolicy,
}

impl DispatchConfig {
    pub fn with_overflow(mut self, overflow: OverflowPolicy) -> Self {
        self.overflow = overflow;
        self
    }
}
