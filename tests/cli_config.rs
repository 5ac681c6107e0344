mod common;

use common::{TestEnv, REEF_TREE};

#[test]
fn test_project_config_expands_tree() {
    let env = TestEnv::new();
    env.write("tree.json", REEF_TREE);
    env.write("labeltree.toml", "[tree]\ninitially_expanded = true\n");

    let result = env.run(&["tree", "tree.json"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert!(result.stdout.contains("coral"), "{}", result.stdout);
}

#[test]
fn test_unknown_config_key_warns_with_suggestion() {
    let env = TestEnv::new();
    env.write("tree.json", REEF_TREE);
    env.write("labeltree.toml", "[tree]\ninitialy_expanded = true\n");

    let result = env.run(&["tree", "tree.json"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert!(
        result.stderr.contains("unknown config key"),
        "{}",
        result.stderr
    );
    assert!(
        result.stderr.contains("initially_expanded"),
        "{}",
        result.stderr
    );
    assert!(!result.stdout.contains("coral"));
}

#[test]
fn test_explicit_config_flag() {
    let env = TestEnv::new();
    env.write("tree.json", REEF_TREE);
    let config = env.write("custom.toml", "[output]\nunicode = false\n");

    let result = env.run(&[
        "--config",
        config.to_str().unwrap(),
        "tree",
        "tree.json",
    ]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert!(result.stdout.contains("[ ]"), "{}", result.stdout);
}

#[test]
fn test_explicit_config_must_parse() {
    let env = TestEnv::new();
    env.write("tree.json", REEF_TREE);
    let config = env.write("bad.toml", "[tree\n");

    let result = env.run(&["--config", config.to_str().unwrap(), "tree", "tree.json"]);

    assert!(!result.success);
    assert!(result.stderr.contains("bad.toml"), "{}", result.stderr);
}

#[test]
fn test_quiet_verbosity_hides_warnings() {
    let env = TestEnv::new();
    env.write("tree.json", REEF_TREE);
    env.write("labeltree.toml", "[tree]\nbogus = 1\n");

    let result = env.run_with_env(&["tree", "tree.json"], &[("LABELTREE_VERBOSITY", "quiet")]);

    assert!(result.success);
    assert!(!result.stderr.contains("unknown config key"), "{}", result.stderr);
}
