//! The game store - the single source of truth for a session.
//!
//! All entity, item and quest collections live here. AI and presentation
//! read through the accessors and change state only through the named
//! actions, which keep the invariants: health and mana clamped to their
//! pools, experience for a kill granted once, one item per equipment slot,
//! at most `max_active_shadows` shadows in play.
//!
//! Every action is total. Unknown ids are a no-op (reported through the
//! return value); malformed amounts are clamped and recorded as a
//! [`ContractViolation`].

use bevy::prelude::*;

use crate::combat::kill_experience;
use crate::core::{ContractViolation, GameConfig, UiPanel};
use crate::enemies::{Enemy, EnemyAiState, EnemyKind, EnemySpec};
use crate::inventory::InventoryItem;
use crate::player::Player;
use crate::progression::{grant_experience, LevelingConfig, Quest, QuestRewards, SessionSeed, Skill};
use crate::shadows::{ActiveShadow, Shadow};

/// Visibility of the presentation panels. Independent of each other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PanelFlags {
    pub inventory: bool,
    pub skill_tree: bool,
    pub quests: bool,
}

/// One enemy removed by [`GameStore::resolve_deaths`].
#[derive(Debug, Clone, PartialEq)]
pub struct Defeat {
    pub enemy_id: String,
    pub kind: EnemyKind,
    pub exp: u32,
}

#[derive(Resource, Debug, Clone)]
pub struct GameStore {
    player: Player,
    enemies: Vec<Enemy>,
    roster: Vec<Shadow>,
    active_shadows: Vec<ActiveShadow>,
    skills: Vec<Skill>,
    quests: Vec<Quest>,
    in_combat: bool,
    panels: PanelFlags,

    leveling: LevelingConfig,
    exp_per_level: u32,
    max_active_shadows: usize,

    level_ups: Vec<u32>,
    completed_quests: Vec<String>,
    diagnostics: Vec<ContractViolation>,
}

impl GameStore {
    /// Seed a fresh session.
    pub fn new(config: &GameConfig, seed: &SessionSeed) -> Self {
        let mut player = Player::new(&config.player);
        player.inventory = seed.inventory.clone();
        for item in &seed.equipped {
            if let Some(previous) = player.equipment.equip(item.clone()) {
                player.inventory.push(previous);
            }
        }
        player.refresh_max_health();
        player.health.refill();

        Self {
            player,
            enemies: Vec::new(),
            roster: seed.shadows.clone(),
            active_shadows: Vec::new(),
            skills: seed.skills.clone(),
            quests: seed.quests.clone(),
            in_combat: false,
            panels: PanelFlags::default(),
            leveling: config.leveling.clone(),
            exp_per_level: config.enemy_ai.exp_per_level,
            max_active_shadows: config.combat.max_active_shadows,
            level_ups: Vec::new(),
            completed_quests: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    // === Reads ===

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn enemy(&self, id: &str) -> Option<&Enemy> {
        self.enemies.iter().find(|e| e.id == id)
    }

    /// Owned shadows, active or not.
    pub fn roster(&self) -> &[Shadow] {
        &self.roster
    }

    pub fn active_shadows(&self) -> &[ActiveShadow] {
        &self.active_shadows
    }

    pub fn active_shadow(&self, id: &str) -> Option<&ActiveShadow> {
        self.active_shadows.iter().find(|s| s.id() == id)
    }

    pub fn is_shadow_active(&self, id: &str) -> bool {
        self.active_shadow(id).is_some()
    }

    pub fn max_active_shadows(&self) -> usize {
        self.max_active_shadows
    }

    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    pub fn skill(&self, id: &str) -> Option<&Skill> {
        self.skills.iter().find(|s| s.id == id)
    }

    pub fn quests(&self) -> &[Quest] {
        &self.quests
    }

    pub fn quest(&self, id: &str) -> Option<&Quest> {
        self.quests.iter().find(|q| q.id == id)
    }

    pub fn in_combat(&self) -> bool {
        self.in_combat
    }

    pub fn panels(&self) -> PanelFlags {
        self.panels
    }

    pub fn diagnostics(&self) -> &[ContractViolation] {
        &self.diagnostics
    }

    /// Drain recorded contract violations.
    pub fn take_diagnostics(&mut self) -> Vec<ContractViolation> {
        std::mem::take(&mut self.diagnostics)
    }

    /// Drain the levels reached since the last call, in order.
    pub fn take_level_ups(&mut self) -> Vec<u32> {
        std::mem::take(&mut self.level_ups)
    }

    /// Drain the ids of quests completed since the last call.
    pub fn take_completed_quests(&mut self) -> Vec<String> {
        std::mem::take(&mut self.completed_quests)
    }

    // === Enemies ===

    /// Put a new enemy into play. The caller supplies a unique id.
    pub fn add_enemy(&mut self, spec: EnemySpec) -> bool {
        if self.enemy(&spec.id).is_some() {
            self.report(ContractViolation::DuplicateEnemyId(spec.id));
            return false;
        }
        if !(spec.max_health.is_finite() && spec.max_health > 0.0) {
            self.report(ContractViolation::InvalidSpec {
                id: spec.id,
                reason: format!("max_health must be > 0, got {}", spec.max_health),
            });
            return false;
        }
        if !(spec.health.is_finite() && spec.attack.is_finite() && spec.position.is_finite()) {
            self.report(ContractViolation::InvalidSpec {
                id: spec.id,
                reason: "health, attack and position must be finite".to_string(),
            });
            return false;
        }

        debug!("Enemy {} ({}) joined at {}", spec.id, spec.name, spec.position);
        self.enemies.push(Enemy::from_spec(spec));
        true
    }

    /// Remove health from an enemy, clamped at zero.
    ///
    /// Does not remove the enemy: the enemy AI notices the empty health
    /// bar on its next evaluation. Returns the health removed, or `None`
    /// for an unknown id.
    pub fn damage_enemy(&mut self, id: &str, amount: f32) -> Option<f32> {
        let amount = self.sanitize("damage_enemy", amount);
        let enemy = self.enemies.iter_mut().find(|e| e.id == id)?;
        Some(enemy.health.take_damage(amount))
    }

    /// Delete an enemy from play. Idempotent.
    pub fn remove_enemy(&mut self, id: &str) -> Option<Enemy> {
        let index = self.enemies.iter().position(|e| e.id == id)?;
        Some(self.enemies.remove(index))
    }

    /// Move a chasing enemy. Ignored for dead enemies.
    pub fn chase(&mut self, id: &str, position: Vec3, facing: f32) {
        if let Some(enemy) = self.living_enemy_mut(id) {
            enemy.position = position;
            enemy.facing = facing;
            enemy.state = EnemyAiState::Chasing;
        }
    }

    /// Keep an enemy in place, attacking, with `timer` seconds to its next strike.
    pub fn hold_attack(&mut self, id: &str, timer: f32) {
        if let Some(enemy) = self.living_enemy_mut(id) {
            enemy.state = EnemyAiState::Attacking;
            enemy.attack_timer = timer;
        }
    }

    /// Flag an enemy as dead. Returns `true` only on the transition.
    pub fn mark_enemy_dead(&mut self, id: &str) -> bool {
        match self.living_enemy_mut(id) {
            Some(enemy) => {
                enemy.state = EnemyAiState::Dead;
                true
            }
            None => false,
        }
    }

    /// Remove every dead enemy, granting its kill experience.
    ///
    /// This is the only place kill experience is granted. An enemy leaves
    /// the set in the same call that pays for it, so it is paid once.
    pub fn resolve_deaths(&mut self) -> Vec<Defeat> {
        let mut defeats = Vec::new();

        while let Some(index) = self.enemies.iter().position(Enemy::is_dead) {
            let enemy = self.enemies.remove(index);
            let exp = kill_experience(enemy.level, self.exp_per_level);

            info!("{} ({}) defeated, +{} exp", enemy.name, enemy.id, exp);
            self.gain_exp(exp);
            self.record_kill(enemy.kind);

            defeats.push(Defeat {
                enemy_id: enemy.id,
                kind: enemy.kind,
                exp,
            });
        }

        if !defeats.is_empty() && self.enemies.is_empty() {
            self.in_combat = false;
        }

        defeats
    }

    fn living_enemy_mut(&mut self, id: &str) -> Option<&mut Enemy> {
        self.enemies
            .iter_mut()
            .find(|e| e.id == id && e.state != EnemyAiState::Dead)
    }

    // === Player ===

    /// Remove health from the player, clamped at zero. Returns the health removed.
    ///
    /// Zero health ends the run; later calls change nothing.
    pub fn take_damage(&mut self, amount: f32) -> f32 {
        let amount = self.sanitize("take_damage", amount);
        self.player.health.take_damage(amount)
    }

    /// Add experience, applying level-ups. Returns the levels gained.
    pub fn gain_exp(&mut self, amount: u32) -> u32 {
        let before = self.player.level;
        let gained = grant_experience(&mut self.player, amount, &self.leveling);
        for level in before + 1..=self.player.level {
            info!("Level up! Now level {}", level);
            self.level_ups.push(level);
        }
        gained
    }

    pub fn move_player(&mut self, position: Vec3, facing: f32) {
        self.player.position = position;
        self.player.facing = facing;
    }

    /// Equip an inventory item, returning the previous occupant of its
    /// slot to the inventory. Returns `false` if the item is not in the
    /// inventory.
    pub fn equip_item(&mut self, item_id: &str) -> bool {
        let Some(index) = self.player.inventory.iter().position(|i| i.id == item_id) else {
            return false;
        };

        let item = self.player.inventory.remove(index);
        debug!("Equipped {} in {:?}", item.name, item.slot);
        if let Some(previous) = self.player.equipment.equip(item) {
            self.player.inventory.push(previous);
        }
        self.player.refresh_max_health();
        true
    }

    /// Add an item to the end of the inventory.
    pub fn add_item(&mut self, item: InventoryItem) {
        self.player.inventory.push(item);
    }

    // === Skills ===

    /// Use a skill if it is off cooldown, restarting its cooldown.
    ///
    /// Returns the skill as used; applying its effect is the caller's job.
    /// `None` for an unknown id or a skill still cooling down.
    pub fn use_skill(&mut self, id: &str) -> Option<Skill> {
        let skill = self.skills.iter_mut().find(|s| s.id == id)?;
        skill.trigger().then(|| skill.clone())
    }

    /// Id of the skill bound to a hotbar slot.
    pub fn skill_in_slot(&mut self, slot: usize) -> Option<String> {
        match self.skills.get(slot) {
            Some(skill) => Some(skill.id.clone()),
            None => {
                let len = self.skills.len();
                self.report(ContractViolation::SkillSlotOutOfRange { index: slot, len });
                None
            }
        }
    }

    /// Count every skill cooldown down by `delta` seconds.
    pub fn tick_cooldowns(&mut self, delta: f32) {
        let delta = self.sanitize("tick_cooldowns", delta);
        for skill in &mut self.skills {
            skill.tick(delta);
        }
    }

    // === Shadows ===

    /// Deploy a roster shadow next to the player.
    ///
    /// No-op if the id is unknown, already active, or the cap is reached.
    pub fn summon_shadow(&mut self, id: &str) -> bool {
        if self.active_shadows.len() >= self.max_active_shadows || self.is_shadow_active(id) {
            return false;
        }
        let Some(shadow) = self.roster.iter().find(|s| s.id == id) else {
            return false;
        };

        info!("Arise, {}!", shadow.name);
        self.active_shadows
            .push(ActiveShadow::deploy(shadow.clone(), self.player.position));
        true
    }

    /// First roster shadow that is not in play.
    pub fn next_summonable(&self) -> Option<&Shadow> {
        self.roster.iter().find(|s| !self.is_shadow_active(&s.id))
    }

    /// Return an active shadow to the roster.
    pub fn dismiss_shadow(&mut self, id: &str) -> bool {
        let Some(index) = self.active_shadows.iter().position(|s| s.id() == id) else {
            return false;
        };
        self.active_shadows.remove(index);
        true
    }

    pub fn move_shadow(&mut self, id: &str, position: Vec3, facing: Option<f32>) {
        if let Some(shadow) = self.active_shadow_mut(id) {
            shadow.position = position;
            if let Some(facing) = facing {
                shadow.facing = facing;
            }
        }
    }

    /// Record a shadow's current target and remaining attack cooldown.
    pub fn set_shadow_combat(&mut self, id: &str, target: Option<String>, attack_cooldown: f32) {
        if let Some(shadow) = self.active_shadow_mut(id) {
            shadow.target = target;
            shadow.attack_cooldown = attack_cooldown.max(0.0);
        }
    }

    fn active_shadow_mut(&mut self, id: &str) -> Option<&mut ActiveShadow> {
        self.active_shadows.iter_mut().find(|s| s.id() == id)
    }

    // === Quests ===

    /// Move a quest forward. On completion its rewards are granted once.
    ///
    /// Returns the rewards when this call completed the quest.
    pub fn advance_quest(&mut self, id: &str, amount: u32) -> Option<QuestRewards> {
        let quest = self.quests.iter_mut().find(|q| q.id == id)?;
        if !quest.advance(amount) {
            return None;
        }

        let rewards = quest.rewards;
        info!("Quest complete: {}", quest.title);
        self.completed_quests.push(quest.id.clone());
        self.player.gold = self.player.gold.saturating_add(rewards.gold);
        self.gain_exp(rewards.exp);
        Some(rewards)
    }

    fn record_kill(&mut self, kind: EnemyKind) {
        let matching: Vec<String> = self
            .quests
            .iter()
            .filter(|q| !q.completed && q.counts_kill(kind))
            .map(|q| q.id.clone())
            .collect();

        for id in matching {
            self.advance_quest(&id, 1);
        }
    }

    // === Session flags ===

    pub fn start_combat(&mut self) {
        self.in_combat = true;
    }

    pub fn toggle_inventory(&mut self) {
        self.panels.inventory = !self.panels.inventory;
    }

    pub fn toggle_skill_tree(&mut self) {
        self.panels.skill_tree = !self.panels.skill_tree;
    }

    pub fn toggle_quests(&mut self) {
        self.panels.quests = !self.panels.quests;
    }

    pub fn toggle_panel(&mut self, panel: UiPanel) {
        match panel {
            UiPanel::Inventory => self.toggle_inventory(),
            UiPanel::SkillTree => self.toggle_skill_tree(),
            UiPanel::Quests => self.toggle_quests(),
        }
    }

    // === Diagnostics ===

    /// NaN and negative amounts become 0. `+inf` saturates to `f32::MAX`.
    fn sanitize(&mut self, action: &'static str, amount: f32) -> f32 {
        if amount.is_nan() {
            self.report(ContractViolation::NonFiniteAmount { action });
            0.0
        } else if amount < 0.0 {
            self.report(ContractViolation::NegativeAmount { action, amount });
            0.0
        } else if amount.is_infinite() {
            self.report(ContractViolation::NonFiniteAmount { action });
            f32::MAX
        } else {
            amount
        }
    }

    fn report(&mut self, violation: ContractViolation) {
        warn!("Store contract violation: {}", violation);
        self.diagnostics.push(violation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enemies::AiPattern;
    use crate::inventory::{EquipSlot, ItemStats, Rarity};

    fn store() -> GameStore {
        GameStore::new(&GameConfig::default(), &SessionSeed::default())
    }

    fn spec(id: &str, health: f32, level: u32) -> EnemySpec {
        EnemySpec {
            id: id.to_string(),
            name: "Dungeon Beast".to_string(),
            level,
            health,
            max_health: health,
            attack: 8.0,
            position: Vec3::new(5.0, 0.5, 0.0),
            kind: EnemyKind::Normal,
            ai_pattern: AiPattern::Standard,
        }
    }

    fn sword(id: &str, attack: f32) -> InventoryItem {
        InventoryItem {
            id: id.to_string(),
            name: id.to_string(),
            slot: EquipSlot::Weapon,
            rarity: Rarity::Epic,
            stats: ItemStats {
                attack: Some(attack),
                ..Default::default()
            },
        }
    }

    #[test]
    fn enemy_health_stays_in_bounds_for_any_amount() {
        let mut store = store();
        store.add_enemy(spec("a", 50.0, 2));

        for amount in [-100.0, 0.0, 10.0, f32::NAN, f32::INFINITY, 1.0e30] {
            store.damage_enemy("a", amount);
            let health = store.enemy("a").unwrap().health;
            assert!(health.current >= 0.0 && health.current <= health.maximum);
        }
        assert_eq!(store.enemy("a").unwrap().health.current, 0.0);
    }

    #[test]
    fn player_health_stays_in_bounds_for_any_amount() {
        let mut store = store();
        for amount in [-50.0, 30.0, f32::NEG_INFINITY, 1.0e9] {
            store.take_damage(amount);
            let health = store.player().health;
            assert!(health.current >= 0.0 && health.current <= health.maximum);
        }
        assert!(store.player().is_dead());
    }

    #[test]
    fn negative_damage_is_reported_and_ignored() {
        let mut store = store();
        store.add_enemy(spec("a", 50.0, 2));
        store.damage_enemy("a", 20.0);

        assert_eq!(store.damage_enemy("a", -20.0), Some(0.0));
        assert_eq!(store.enemy("a").unwrap().health.current, 30.0);
        assert_eq!(
            store.take_diagnostics(),
            vec![ContractViolation::NegativeAmount {
                action: "damage_enemy",
                amount: -20.0
            }]
        );
    }

    #[test]
    fn unknown_ids_are_no_ops() {
        let mut store = store();
        assert_eq!(store.damage_enemy("ghost", 10.0), None);
        assert!(store.remove_enemy("ghost").is_none());
        assert!(store.use_skill("ghost").is_none());
        assert!(!store.summon_shadow("ghost"));
        assert!(!store.equip_item("ghost"));
        assert!(store.advance_quest("ghost", 1).is_none());
        assert!(store.diagnostics().is_empty());
    }

    #[test]
    fn duplicate_enemy_id_is_rejected() {
        let mut store = store();
        assert!(store.add_enemy(spec("a", 50.0, 2)));
        assert!(!store.add_enemy(spec("a", 80.0, 3)));
        assert_eq!(store.enemies().len(), 1);
        assert_eq!(
            store.diagnostics(),
            &[ContractViolation::DuplicateEnemyId("a".to_string())]
        );
    }

    #[test]
    fn enemy_with_nan_health_is_rejected() {
        let mut store = store();
        let mut bad = spec("n", 50.0, 2);
        bad.health = f32::NAN;

        assert!(!store.add_enemy(bad));
        assert!(store.enemy("n").is_none());
        assert!(matches!(
            store.diagnostics(),
            [ContractViolation::InvalidSpec { id, .. }] if id == "n"
        ));
    }

    #[test]
    fn infinite_damage_saturates() {
        let mut store = store();
        store.add_enemy(spec("a", 50.0, 2));

        assert_eq!(store.damage_enemy("a", f32::INFINITY), Some(50.0));
        assert_eq!(store.enemy("a").unwrap().health.current, 0.0);
        assert_eq!(
            store.take_diagnostics(),
            vec![ContractViolation::NonFiniteAmount { action: "damage_enemy" }]
        );

        store.add_enemy(spec("b", 50.0, 2));
        assert_eq!(store.damage_enemy("b", f32::NAN), Some(0.0));
        assert_eq!(store.enemy("b").unwrap().health.current, 50.0);
    }

    #[test]
    fn damage_does_not_remove_enemy() {
        let mut store = store();
        store.add_enemy(spec("a", 50.0, 2));
        store.damage_enemy("a", 25.0);
        store.damage_enemy("a", 25.0);
        store.damage_enemy("a", 25.0);

        assert_eq!(store.enemy("a").unwrap().health.current, 0.0);
        assert!(store.resolve_deaths().is_empty());
        assert_eq!(store.player().exp, 0);
    }

    #[test]
    fn remove_enemy_is_idempotent() {
        let mut store = store();
        store.add_enemy(spec("a", 50.0, 2));
        assert!(store.remove_enemy("a").is_some());
        assert!(store.remove_enemy("a").is_none());
        assert!(store.enemies().is_empty());
    }

    #[test]
    fn death_grants_experience_once() {
        let mut store = store();
        store.add_enemy(spec("a", 50.0, 2));
        store.damage_enemy("a", 50.0);

        assert!(store.mark_enemy_dead("a"));
        assert!(!store.mark_enemy_dead("a"));

        let defeats = store.resolve_deaths();
        assert_eq!(defeats.len(), 1);
        assert_eq!(defeats[0].exp, 40);
        assert_eq!(store.player().exp, 40);

        assert!(store.resolve_deaths().is_empty());
        assert!(!store.mark_enemy_dead("a"));
        assert_eq!(store.player().exp, 40);
    }

    #[test]
    fn clearing_the_last_enemy_ends_combat() {
        let mut store = store();
        store.add_enemy(spec("a", 50.0, 2));
        store.add_enemy(spec("b", 50.0, 2));
        store.start_combat();

        store.mark_enemy_dead("a");
        store.resolve_deaths();
        assert!(store.in_combat());

        store.mark_enemy_dead("b");
        store.resolve_deaths();
        assert!(!store.in_combat());
    }

    #[test]
    fn skill_cooldown_gates_use() {
        let mut store = store();
        let id = store.skills()[0].id.clone();
        let cooldown = store.skills()[0].cooldown;
        assert_eq!(cooldown, 5.0);

        assert!(store.use_skill(&id).is_some());
        assert_eq!(store.skill(&id).unwrap().current_cooldown, 5.0);

        store.tick_cooldowns(3.0);
        assert!(store.use_skill(&id).is_none());
        assert_eq!(store.skill(&id).unwrap().current_cooldown, 2.0);

        store.tick_cooldowns(2.01);
        assert!(store.use_skill(&id).is_some());
        assert_eq!(store.skill(&id).unwrap().current_cooldown, 5.0);
    }

    #[test]
    fn hotbar_slot_out_of_range_is_reported() {
        let mut store = store();
        assert!(store.skill_in_slot(0).is_some());
        assert!(store.skill_in_slot(9).is_none());
        assert!(matches!(
            store.diagnostics(),
            [ContractViolation::SkillSlotOutOfRange { index: 9, .. }]
        ));
    }

    #[test]
    fn never_more_than_five_active_shadows() {
        let mut store = store();
        let ids: Vec<String> = store.roster().iter().map(|s| s.id.clone()).collect();
        assert!(ids.len() > 5);

        for id in ids.iter().chain(ids.iter()) {
            store.summon_shadow(id);
            assert!(store.active_shadows().len() <= 5);
        }
        assert_eq!(store.active_shadows().len(), 5);
        assert!(!store.is_shadow_active(&ids[5]));
    }

    #[test]
    fn summoning_the_same_shadow_twice_is_a_no_op() {
        let mut store = store();
        assert!(store.summon_shadow("igris"));
        assert!(!store.summon_shadow("igris"));
        assert_eq!(store.active_shadows().len(), 1);
    }

    #[test]
    fn dismissed_shadow_can_be_summoned_again() {
        let mut store = store();
        store.summon_shadow("igris");
        assert!(store.dismiss_shadow("igris"));
        assert!(!store.dismiss_shadow("igris"));
        assert_eq!(store.next_summonable().map(|s| s.id.as_str()), Some("igris"));
        assert!(store.summon_shadow("igris"));
    }

    #[test]
    fn equip_swaps_and_preserves_item_count() {
        let mut store = store();
        store.add_item(sword("blade", 30.0));
        let total = |s: &GameStore| s.player().inventory.len() + s.player().equipment.len();
        let before = total(&store);

        assert!(store.equip_item("blade"));
        assert_eq!(total(&store), before);
        assert_eq!(
            store.player().equipment.get(EquipSlot::Weapon).map(|i| i.id.as_str()),
            Some("blade")
        );
        assert!(store.player().inventory.iter().any(|i| i.id == "rusty-dagger"));
        assert_eq!(store.player().attack(), 10.0 + 30.0);

        assert!(store.equip_item("rusty-dagger"));
        assert_eq!(total(&store), before);
        assert!(store.player().inventory.iter().any(|i| i.id == "blade"));
    }

    #[test]
    fn equipment_health_bonus_raises_maximum() {
        let mut store = store();
        assert!(store.equip_item("knight-helm"));
        assert_eq!(store.player().health.maximum, 120.0);
        assert_eq!(store.player().health.current, 100.0);
        assert_eq!(store.player().defense(), 5.0 + 5.0);
    }

    #[test]
    fn defeat_quests_advance_and_pay_once() {
        let mut store = store();
        store.add_enemy(EnemySpec {
            kind: EnemyKind::Elite,
            level: 5,
            ..spec("elite", 150.0, 5)
        });
        store.mark_enemy_dead("elite");
        store.resolve_deaths();

        let elite_quest = store.quest("elite-hunter").unwrap();
        assert!(elite_quest.completed);
        assert_eq!(store.quest("double-dungeon").unwrap().progress, 1);
        assert_eq!(store.player().gold, 200);
        assert_eq!(store.take_completed_quests(), vec!["elite-hunter".to_string()]);

        // 5 * 20 kill exp + 100 quest exp
        assert_eq!(store.player().level, 2);
        assert_eq!(store.player().exp, 100);
        assert_eq!(store.take_level_ups(), vec![2]);
    }

    #[test]
    fn manual_quest_completes_once() {
        let mut store = store();
        assert!(store.advance_quest("daily-training", 60).is_none());
        assert_eq!(
            store.advance_quest("daily-training", 60),
            Some(QuestRewards { exp: 50, gold: 0 })
        );
        assert!(store.advance_quest("daily-training", 1).is_none());
        assert_eq!(store.player().exp, 50);
    }

    #[test]
    fn panel_toggles_are_independent() {
        let mut store = store();
        store.toggle_inventory();
        store.toggle_quests();
        store.toggle_quests();
        assert_eq!(
            store.panels(),
            PanelFlags {
                inventory: true,
                skill_tree: false,
                quests: false
            }
        );
    }
}
