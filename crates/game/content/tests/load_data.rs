use std::any::Any;
use std::path::PathBuf;
use std::rc::Rc;

use battle_content::ContentFactory;
use battle_core::{BattleConfig, Env, Hero, SkillEffect, StatKind, Team};

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Raises the user's attack by one stage.
struct WarCry;

impl SkillEffect for WarCry {
    fn activate(&self, user: &mut Hero, _: usize, _: &mut dyn Any, env: &mut Env) -> bool {
        user.modify_stats(StatKind::Attack, 1, env).is_ok()
    }
}

#[test]
fn shipped_data_loads() {
    let factory = ContentFactory::new(data_dir());

    let config = factory.load_config().expect("config should load");
    assert_eq!(config, BattleConfig::default());

    let catalog = factory.load_skills().expect("skills should load");
    assert_eq!(catalog.len(), 5);

    for roster in ["vanguard", "raiders"] {
        let templates = factory.load_roster(roster).expect("roster should load");
        let team = Team::new();
        let heroes = ContentFactory::build_heroes(&templates, &catalog, &team)
            .expect("roster should only reference catalog skills");
        assert_eq!(team.len(), heroes.len());
    }
}

#[test]
fn bound_effects_reach_built_heroes() {
    let factory = ContentFactory::new(data_dir());
    let mut catalog = factory.load_skills().unwrap();
    catalog.bind_effect("War Cry", Rc::new(WarCry)).unwrap();

    let templates = factory.load_roster("vanguard").unwrap();
    let team = Team::new();
    let mut heroes = ContentFactory::build_heroes(&templates, &catalog, &team).unwrap();
    let mut env = Env::deterministic(factory.load_config().unwrap(), 11);

    let rook = &mut heroes[0];
    assert_eq!(rook.name(), "Rook");
    assert_eq!(rook.skills()[2].name(), "War Cry");

    rook.use_skill(2, &mut (), &mut env).unwrap();
    assert_eq!(rook.current_stats()[StatKind::Attack], 75);
    assert!(!rook.skill_ready(2));
    assert!(heroes[1].skill(2).is_none());
}

#[test]
fn factory_reads_a_fresh_directory() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("rosters")).unwrap();
    std::fs::write(dir.path().join("config.toml"), "heal_ceiling = 300\n").unwrap();
    std::fs::write(
        dir.path().join("skills.ron"),
        r#"(skills: [(name: "Jab", base_damage: 15, accuracy: 1.0, skill_point: 0)])"#,
    )
    .unwrap();
    std::fs::write(
        dir.path().join("rosters").join("duo.ron"),
        r#"(heroes: [
            (name: "A", stats: {"HP": 10, "ATTACK": 1, "DEFENSE": 1, "SPEED": 1, "CRIT_CHANCE": 0}, skills: ["Jab"]),
            (name: "B", stats: {"HP": 10, "ATTACK": 1, "DEFENSE": 1, "SPEED": 1, "CRIT_CHANCE": 0}, skills: ["Jab"]),
        ])"#,
    )
    .unwrap();

    let factory = ContentFactory::new(dir.path());
    assert_eq!(factory.load_config().unwrap().heal_ceiling, 300);

    let catalog = factory.load_skills().unwrap();
    let team = Team::new();
    let heroes =
        ContentFactory::build_heroes(&factory.load_roster("duo").unwrap(), &catalog, &team)
            .unwrap();

    assert_eq!(heroes.len(), 2);
    assert_eq!(team.members(), vec![heroes[0].id(), heroes[1].id()]);
    assert!(factory.load_roster("missing").is_err());
}
