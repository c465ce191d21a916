// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::errors::{CookToomError, CookToomResult};
use crate::points::EvaluationPointSet;
use crate::policy::ScalingPolicy;
use crate::synthesis::{synthesize, TransformTriple};
use crate::verify::Framing;
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::path::Path;
use tracing::debug;

/// Prefix of the environment variables read by [`SynthesisConfig::load`].
pub const ENV_PREFIX: &str = "COOK_TOOM_";

/// Everything needed to synthesize and check one transform.
///
/// The defaults describe the classical F(2,3) filter on `0, 1, -1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynthesisConfig {
    /// Comma-separated point literals, e.g. `"0, 1, -1, 1/2, inf"`.
    #[serde(deserialize_with = "deserialize_points")]
    pub points: String,
    pub n: usize,
    pub r: usize,
    #[serde(default)]
    pub policy: ScalingPolicy,
    #[serde(default)]
    pub framing: Framing,
    #[serde(default = "default_verify")]
    pub verify: bool,
}

fn default_verify() -> bool {
    true
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            points: "0, 1, -1".to_string(),
            n: 2,
            r: 3,
            policy: ScalingPolicy::default(),
            framing: Framing::default(),
            verify: default_verify(),
        }
    }
}

/// Values passed from the command line. Unset fields leave lower layers alone.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy: Option<ScalingPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub framing: Option<Framing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verify: Option<bool>,
}

/// Reads one point literal. Env and YAML layers hand over `0` or `0.5` as
/// numbers rather than strings.
struct PointLiteralVisitor;

impl<'de> Visitor<'de> for PointLiteralVisitor {
    type Value = String;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a point literal or a comma-separated list of them")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<String, E> {
        Ok(value.to_string())
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<String, E> {
        Ok(value.to_string())
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<String, E> {
        Ok(value.to_string())
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<String, E> {
        Ok(value.to_string())
    }
}

struct PointLiteral(String);

impl<'de> Deserialize<'de> for PointLiteral {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PointLiteralVisitor).map(PointLiteral)
    }
}

struct PointsVisitor;

impl<'de> Visitor<'de> for PointsVisitor {
    type Value = String;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        PointLiteralVisitor.expecting(f)
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<String, E> {
        PointLiteralVisitor.visit_str(value)
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<String, E> {
        PointLiteralVisitor.visit_i64(value)
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<String, E> {
        PointLiteralVisitor.visit_u64(value)
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<String, E> {
        PointLiteralVisitor.visit_f64(value)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<String, A::Error> {
        let mut literals = Vec::new();
        while let Some(PointLiteral(literal)) = seq.next_element()? {
            literals.push(literal);
        }
        Ok(literals.join(", "))
    }
}

fn deserialize_points<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    deserializer.deserialize_any(PointsVisitor)
}

impl SynthesisConfig {
    /// Layers built-in defaults, the optional YAML file, `COOK_TOOM_*`
    /// environment variables and finally `overrides`.
    ///
    /// # Errors
    ///
    /// Returns `Config` if `config_file` does not exist or a layer holds a
    /// value of the wrong type.
    pub fn load(config_file: Option<&Path>, overrides: &ConfigOverrides) -> CookToomResult<Self> {
        let mut figment = Figment::from(Serialized::defaults(SynthesisConfig::default()));

        if let Some(path) = config_file {
            if !path.exists() {
                return Err(CookToomError::Config {
                    message: format!("configuration file {} not found", path.display()),
                });
            }
            debug!("reading configuration from {}", path.display());
            figment = figment.merge(Yaml::file(path));
        }

        let config: SynthesisConfig = figment
            .merge(Env::prefixed(ENV_PREFIX))
            .merge(Serialized::defaults(overrides))
            .extract()?;
        Ok(config)
    }

    pub fn point_set(&self) -> CookToomResult<EvaluationPointSet> {
        EvaluationPointSet::parse_list(&self.points)
    }

    pub fn synthesize(&self) -> CookToomResult<TransformTriple> {
        synthesize(&self.point_set()?, self.n, self.r, self.policy)
    }
}
