//! Combat systems - intents, skills, the death sweep and run end.

use bevy::prelude::*;

use super::resolver::resolve_damage;
use crate::core::*;
use crate::enemies::spawn_waves;
use crate::progression::SkillKind;
use crate::store::GameStore;

/// Configure combat systems.
pub fn setup_combat_systems(app: &mut App) {
    app
        // Input systems: after the wave spawn, cooldowns first, then queued intents
        .add_systems(
            Update,
            (
                tick_skill_cooldowns,
                handle_enemy_clicks,
                handle_skill_intents,
                handle_summon_requests,
                handle_dismiss_requests,
                handle_equip_requests,
            )
                .chain()
                .in_set(SimSet::Input)
                .after(spawn_waves),
        )
        // Resolve systems
        .add_systems(
            Update,
            (sweep_dead_enemies, announce_progress, check_player_death)
                .chain()
                .in_set(SimSet::Resolve),
        );
}

/// Count skill cooldowns down by the frame time.
fn tick_skill_cooldowns(time: Res<Time>, mut store: ResMut<GameStore>) {
    store.tick_cooldowns(time.delta_secs());
}

/// A click deals a fixed amount to the clicked enemy.
fn handle_enemy_clicks(
    mut clicks: EventReader<EnemyClicked>,
    config: Res<GameConfig>,
    mut store: ResMut<GameStore>,
    mut damaged: EventWriter<EnemyDamaged>,
) {
    for click in clicks.read() {
        let Some(dealt) = store.damage_enemy(&click.enemy_id, config.combat.click_damage) else {
            continue;
        };
        damaged.send(EnemyDamaged {
            enemy_id: click.enemy_id.clone(),
            amount: dealt,
            source: DamageSource::Click,
        });
    }
}

/// Use the skill bound to a hotbar slot and apply its effect.
fn handle_skill_intents(
    mut intents: EventReader<SkillIntent>,
    config: Res<GameConfig>,
    mut store: ResMut<GameStore>,
    mut used: EventWriter<SkillUsed>,
    mut damaged: EventWriter<EnemyDamaged>,
    mut summoned: EventWriter<ShadowSummoned>,
) {
    for intent in intents.read() {
        let Some(skill_id) = store.skill_in_slot(intent.slot) else {
            continue;
        };
        let Some(skill) = store.use_skill(&skill_id) else {
            debug!("{} is still on cooldown", skill_id);
            continue;
        };

        match skill.kind {
            SkillKind::Attack => {
                let damage = resolve_damage(
                    store.player().attack(),
                    0.0,
                    Some(skill.damage),
                    config.combat.defense_policy,
                );
                let targets: Vec<String> = store
                    .enemies()
                    .iter()
                    .filter(|e| !e.is_dead())
                    .map(|e| e.id.clone())
                    .collect();

                for enemy_id in targets {
                    if let Some(dealt) = store.damage_enemy(&enemy_id, damage) {
                        damaged.send(EnemyDamaged {
                            enemy_id,
                            amount: dealt,
                            source: DamageSource::Skill(skill.id.clone()),
                        });
                    }
                }
            }
            SkillKind::Summon => {
                let next = store.next_summonable().map(|s| s.id.clone());
                match next {
                    Some(shadow_id) if store.summon_shadow(&shadow_id) => {
                        summoned.send(ShadowSummoned { shadow_id });
                    }
                    _ => debug!("{} found no shadow to raise", skill.name),
                }
            }
            SkillKind::Buff => {}
        }

        info!("Used {}", skill.name);
        used.send(SkillUsed {
            skill_id: skill.id,
            kind: skill.kind,
        });
    }
}

fn handle_summon_requests(
    mut requests: EventReader<SummonRequest>,
    mut store: ResMut<GameStore>,
    mut summoned: EventWriter<ShadowSummoned>,
) {
    for request in requests.read() {
        if store.summon_shadow(&request.shadow_id) {
            summoned.send(ShadowSummoned {
                shadow_id: request.shadow_id.clone(),
            });
        }
    }
}

fn handle_dismiss_requests(mut requests: EventReader<DismissRequest>, mut store: ResMut<GameStore>) {
    for request in requests.read() {
        if store.dismiss_shadow(&request.shadow_id) {
            info!("{} returns to the shadows", request.shadow_id);
        }
    }
}

fn handle_equip_requests(mut requests: EventReader<EquipRequest>, mut store: ResMut<GameStore>) {
    for request in requests.read() {
        if !store.equip_item(&request.item_id) {
            debug!("Cannot equip {}: not in inventory", request.item_id);
        }
    }
}

/// Remove enemies the AI flagged dead and announce each kill.
pub fn sweep_dead_enemies(mut store: ResMut<GameStore>, mut defeated: EventWriter<EnemyDefeated>) {
    for defeat in store.resolve_deaths() {
        defeated.send(EnemyDefeated {
            enemy_id: defeat.enemy_id,
            kind: defeat.kind,
            exp: defeat.exp,
        });
    }
}

/// Turn queued level-ups and quest completions into events.
fn announce_progress(
    mut store: ResMut<GameStore>,
    mut level_ups: EventWriter<LevelUpEvent>,
    mut quests: EventWriter<QuestCompleted>,
) {
    for new_level in store.take_level_ups() {
        level_ups.send(LevelUpEvent { new_level });
    }
    for quest_id in store.take_completed_quests() {
        quests.send(QuestCompleted { quest_id });
    }
}

/// End the run when the player's health is gone.
fn check_player_death(
    store: Res<GameStore>,
    mut died: EventWriter<PlayerDied>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if store.player().is_dead() {
        warn!("{} has fallen", store.player().name);
        died.send(PlayerDied);
        next_state.set(GameState::GameOver);
    }
}
