//! Level-1 derivation rules.

/// Lowest score any character may carry.
pub const SCORE_MIN: i32 = 1;
/// Highest score any character may carry.
pub const SCORE_MAX: i32 = 30;

/// Ability modifier: `floor((score - 10) / 2)`.
pub fn ability_modifier(score: i32) -> i32 {
    score.saturating_sub(10).div_euclid(2)
}

pub fn proficiency_bonus(level: u8) -> i32 {
    ((i32::from(level.max(1)) - 1) / 4) + 2
}

/// First-level hit points: full hit die plus the Constitution modifier.
///
/// With `clamp` set the result never drops below 1.
pub fn starting_hit_points(hit_die: u8, constitution_modifier: i32, clamp: bool) -> i32 {
    let hp = i32::from(hit_die) + constitution_modifier;
    if clamp {
        hp.max(1)
    } else {
        hp
    }
}

/// Armor class without armor or shield.
pub fn unarmored_armor_class(dexterity_modifier: i32) -> i32 {
    10 + dexterity_modifier
}

/// Render a modifier with an explicit sign ("+2", "-1", "+0").
pub fn signed(modifier: i32) -> String {
    if modifier >= 0 {
        format!("+{}", modifier)
    } else {
        modifier.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ability_modifier_calculation() {
        assert_eq!(ability_modifier(1), -5);
        assert_eq!(ability_modifier(3), -4);
        assert_eq!(ability_modifier(8), -1);
        assert_eq!(ability_modifier(9), -1);
        assert_eq!(ability_modifier(10), 0);
        assert_eq!(ability_modifier(11), 0);
        assert_eq!(ability_modifier(12), 1);
        assert_eq!(ability_modifier(18), 4);
        assert_eq!(ability_modifier(30), 10);
        assert_eq!(ability_modifier(i32::MIN), i32::MIN / 2);
        assert_eq!(ability_modifier(20), 5);
    }

    #[test]
    fn proficiency_bonus_progression() {
        assert_eq!(proficiency_bonus(1), 2);
        assert_eq!(proficiency_bonus(4), 2);
        assert_eq!(proficiency_bonus(5), 3);
        assert_eq!(proficiency_bonus(17), 6);
    }

    #[test]
    fn hit_points_clamp_only_when_requested() {
        assert_eq!(starting_hit_points(10, 0, true), 10);
        assert_eq!(starting_hit_points(6, -4, false), 2);
        assert_eq!(starting_hit_points(6, -4, true), 2);
        assert_eq!(starting_hit_points(2, -4, false), -2);
        assert_eq!(starting_hit_points(2, -4, true), 1);
    }

    #[test]
    fn signed_modifiers() {
        assert_eq!(signed(2), "+2");
        assert_eq!(signed(0), "+0");
        assert_eq!(signed(-1), "-1");
        assert_eq!(unarmored_armor_class(-1), 9);
    }
}
