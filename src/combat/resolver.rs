//! Damage resolution.
//!
//! Damage is flat: the raw value is the skill damage when a skill is
//! involved, otherwise the attacker's attack stat. Defense only matters
//! under `DefensePolicy::Subtract`.

use super::components::DefensePolicy;

/// Compute the damage one hit deals.
pub fn resolve_damage(
    attack: f32,
    defense: f32,
    skill_damage: Option<f32>,
    policy: DefensePolicy,
) -> f32 {
    let raw = skill_damage.unwrap_or(attack);
    let dealt = match policy {
        DefensePolicy::Ignore => raw,
        DefensePolicy::Subtract => raw - defense.max(0.0),
    };

    if dealt.is_finite() {
        dealt.max(0.0)
    } else {
        0.0
    }
}

/// Experience granted for killing an enemy of `level`.
pub fn kill_experience(level: u32, exp_per_level: u32) -> u32 {
    level.saturating_mul(exp_per_level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attack_is_used_without_skill() {
        assert_eq!(resolve_damage(8.0, 5.0, None, DefensePolicy::Ignore), 8.0);
    }

    #[test]
    fn skill_damage_replaces_attack() {
        assert_eq!(resolve_damage(8.0, 0.0, Some(60.0), DefensePolicy::Ignore), 60.0);
    }

    #[test]
    fn subtract_policy_floors_at_zero() {
        assert_eq!(resolve_damage(30.0, 12.0, None, DefensePolicy::Subtract), 18.0);
        assert_eq!(resolve_damage(8.0, 12.0, None, DefensePolicy::Subtract), 0.0);
    }

    #[test]
    fn negative_and_nan_resolve_to_zero() {
        assert_eq!(resolve_damage(-5.0, 0.0, None, DefensePolicy::Ignore), 0.0);
        assert_eq!(resolve_damage(f32::NAN, 0.0, None, DefensePolicy::Ignore), 0.0);
    }

    #[test]
    fn kill_experience_scales_with_level() {
        assert_eq!(kill_experience(2, 20), 40);
        assert_eq!(kill_experience(10, 20), 200);
    }
}
