// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::errors::CookToomError;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where the fraction-elimination factors `f⁻¹` end up in a transform triple.
///
/// The input transform is always built as `f·Bᵀ` (integral when the points
/// are integers) except under [`ScalingPolicy::AbsorbInInput`], so the
/// policy really decides which matrix pays for the denominators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(into = "String")]
pub enum ScalingPolicy {
    /// `G = f⁻¹·A_r`.
    #[default]
    AbsorbInFilter,
    /// `AT = A_nᵀ·f⁻¹`.
    AbsorbInOutput,
    /// `BT = Bᵀ`, fractions stay in the input transform.
    AbsorbInInput,
    /// No matrix absorbs `f⁻¹`; the caller applies it between `BT·d` and the
    /// elementwise product.
    ExposeAsSeparateFactor,
}

impl ScalingPolicy {
    pub const ALL: [ScalingPolicy; 4] = [
        ScalingPolicy::AbsorbInFilter,
        ScalingPolicy::AbsorbInOutput,
        ScalingPolicy::AbsorbInInput,
        ScalingPolicy::ExposeAsSeparateFactor,
    ];

    /// Accepts the long name or the single matrix letter, case-insensitively.
    pub fn from_name(name: &str) -> Result<Self, CookToomError> {
        let normalized = name.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "filter" | "g" => Ok(Self::AbsorbInFilter),
            "output" | "a" => Ok(Self::AbsorbInOutput),
            "input" | "b" => Ok(Self::AbsorbInInput),
            "separate" | "f" => Ok(Self::ExposeAsSeparateFactor),
            _ => Err(CookToomError::unsupported_policy(format!(
                "unknown policy '{name}', expected one of {}",
                Self::list().join(", ")
            ))),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ScalingPolicy::AbsorbInFilter => "filter",
            ScalingPolicy::AbsorbInOutput => "output",
            ScalingPolicy::AbsorbInInput => "input",
            ScalingPolicy::ExposeAsSeparateFactor => "separate",
        }
    }

    /// Numeric code, matching the ordering of the classical wincnn tables.
    pub fn code(&self) -> u8 {
        match self {
            ScalingPolicy::AbsorbInFilter => 0,
            ScalingPolicy::AbsorbInOutput => 1,
            ScalingPolicy::AbsorbInInput => 2,
            ScalingPolicy::ExposeAsSeparateFactor => 3,
        }
    }

    pub fn list() -> Vec<&'static str> {
        Self::ALL.iter().map(ScalingPolicy::name).collect()
    }
}

impl TryFrom<u8> for ScalingPolicy {
    type Error = CookToomError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|policy| policy.code() == code)
            .ok_or_else(|| {
                CookToomError::unsupported_policy(format!("unknown policy code {code}, expected 0..=3"))
            })
    }
}

impl FromStr for ScalingPolicy {
    type Err = CookToomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<u8>() {
            Ok(code) => Self::try_from(code),
            Err(_) => Self::from_name(s),
        }
    }
}

impl From<ScalingPolicy> for String {
    fn from(policy: ScalingPolicy) -> Self {
        policy.name().to_string()
    }
}

struct PolicyVisitor;

impl Visitor<'_> for PolicyVisitor {
    type Value = ScalingPolicy;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a policy name ({}) or code 0..=3", ScalingPolicy::list().join(", "))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<ScalingPolicy, E> {
        value.parse().map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<ScalingPolicy, E> {
        let code = u8::try_from(value)
            .map_err(|_| E::custom(format!("unknown policy code {value}, expected 0..=3")))?;
        ScalingPolicy::try_from(code).map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<ScalingPolicy, E> {
        match u64::try_from(value) {
            Ok(value) => self.visit_u64(value),
            Err(_) => Err(E::custom(format!("unknown policy code {value}, expected 0..=3"))),
        }
    }
}

/// Accepts a policy name or its numeric code; figment types `COOK_TOOM_POLICY=2`
/// as an integer.
impl<'de> Deserialize<'de> for ScalingPolicy {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PolicyVisitor)
    }
}

impl fmt::Display for ScalingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
