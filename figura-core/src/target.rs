//! Emission targets.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// A UI framework the compiler can emit components for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// React with shadcn/ui
    React,
    /// Vue 3 single-file components with shadcn-vue
    Vue,
    /// Angular standalone components with spartan-ui
    Angular,
}

impl Target {
    pub const ALL: [Target; 3] = [Target::React, Target::Vue, Target::Angular];

    /// Returns the target identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Target::React => "react",
            Target::Vue => "vue",
            Target::Angular => "angular",
        }
    }

    /// Extension of an emitted component file, without the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Target::React => "tsx",
            Target::Vue => "vue",
            Target::Angular => "component.ts",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Target {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "react" | "tsx" => Ok(Target::React),
            "vue" => Ok(Target::Vue),
            "angular" | "ng" => Ok(Target::Angular),
            _ => Err(format!(
                "unknown target '{}', expected 'react', 'vue' or 'angular'",
                s
            )),
        }
    }
}
