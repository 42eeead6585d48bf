use std::io::Write;

use villanelle::{Engine, EngineConfig, InteractionLeaves, Scene};

#[test]
fn defaults_match_the_classic_engine() {
    let config = EngineConfig::default();
    assert_eq!(config.executing_agent_variable, "executingAgent");
    assert_eq!(config.text_separator, "\n");
    assert_eq!(config.seed, 0);
}

#[test]
fn partial_yaml_fills_in_defaults() {
    let config = EngineConfig::from_yaml_str("seed: 42\n").unwrap();
    assert_eq!(config.seed, 42);
    assert_eq!(config.executing_agent_variable, "executingAgent");
    assert_eq!(config.text_separator, "\n");
}

#[test]
fn load_reads_yaml_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "executing_agent_variable: actor").unwrap();
    writeln!(file, "text_separator: \" | \"").unwrap();
    writeln!(file, "seed: 7").unwrap();

    let config = EngineConfig::load(file.path()).unwrap();
    assert_eq!(config.executing_agent_variable, "actor");
    assert_eq!(config.text_separator, " | ");
    assert_eq!(config.seed, 7);
}

#[test]
fn load_reports_path_on_bad_yaml() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "seed: [not, a, number]").unwrap();

    let err = EngineConfig::load(file.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config"));
}

#[test]
fn load_or_default_tolerates_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = EngineConfig::load_or_default(&dir.path().join("villanelle.yaml")).unwrap();
    assert_eq!(config, EngineConfig::default());
}

#[test]
fn engine_uses_configured_variable_and_separator() {
    let config = EngineConfig {
        executing_agent_variable: "actor".to_string(),
        text_separator: " / ".to_string(),
        seed: 3,
    };
    let mut engine = Engine::with_config(config);
    engine.world_mut().add_agent("Bob");
    let bt = engine.builder();
    let tree = bt.instant(|_: &Scene| true, |_: &mut Scene| {});
    let describe = bt.sequence(vec![
        bt.display_description("A camp."),
        bt.display_description("A fire burns."),
    ]);
    engine.attach_tree_to_agent("Bob", tree);
    engine.add_user_interaction_tree(describe);

    engine.world_tick();

    assert_eq!(engine.scene().executing_agent(), Some("Bob"));
    assert!(engine.world().is_variable_not_set("executingAgent"));
    assert_eq!(
        engine.user_interaction_object().text,
        " / A camp. / A fire burns."
    );
}
