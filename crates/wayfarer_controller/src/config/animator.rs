use serde::{Deserialize, Serialize};

/// Animator parameter names, resolved to ids once at spawn.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnimatorConfig {
    pub speed: String,
    pub motion_speed: String,
    pub grounded: String,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            speed: "Speed".into(),
            motion_speed: "MotionSpeed".into(),
            grounded: "Grounded".into(),
        }
    }
}
