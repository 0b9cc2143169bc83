use crate::config::ConfigError;

/// Game-balance constants of the point-buy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointBuyRules {
    /// Lowest possible rolled score (inclusive)
    pub roll_min: i32,
    /// Highest possible rolled score (inclusive)
    pub roll_max: i32,
    /// Points granted by each fresh roll
    pub bonus_points: u32,
}

impl PointBuyRules {
    pub fn new(roll_min: i32, roll_max: i32, bonus_points: u32) -> Result<Self, ConfigError> {
        if roll_min > roll_max {
            return Err(ConfigError::InvalidRollRange {
                min: roll_min,
                max: roll_max,
            });
        }
        Ok(Self {
            roll_min,
            roll_max,
            bonus_points,
        })
    }
}

impl Default for PointBuyRules {
    fn default() -> Self {
        Self {
            roll_min: 5,
            roll_max: 19,
            bonus_points: 5,
        }
    }
}
