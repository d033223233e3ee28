mod common;

use adapter::{
    field_names, translate, translate_env, AccessError, ArcadeGrid, EnvId, Family, TranslateError,
    Value,
};
use common::{Attr, MapEnv, ZeroEnv};
use std::collections::BTreeSet;

fn expected_fields(env_name: &str) -> &'static [&'static str] {
    match env_name {
        "Pendulum-v0" => &["theta", "theta_dot", "time", "terminal"],
        "CartPole-v0" => &["x", "x_dot", "theta", "theta_dot", "time", "terminal"],
        "MountainCar-v0" | "MountainCarContinuous-v0" => {
            &["position", "velocity", "time", "terminal"]
        }
        "Acrobot-v1" => &[
            "joint_angle1", "joint_angle2", "velocity_1", "velocity_2", "time", "terminal",
        ],
        "Catch-bsuite" => &[
            "ball_x", "ball_y", "paddle_x", "paddle_y", "prev_done", "time", "terminal",
        ],
        "DeepSea-bsuite" => &[
            "row",
            "column",
            "bad_episode",
            "total_bad_episodes",
            "denoised_return",
            "optimal_return",
            "action_mapping",
            "time",
            "terminal",
        ],
        "DiscountingChain-bsuite" => &["rewards", "context", "time", "terminal"],
        "MemoryChain-bsuite" => &[
            "context", "query", "total_perfect", "total_regret", "time", "terminal",
        ],
        "UmbrellaChain-bsuite" => &[
            "need_umbrella", "has_umbrella", "total_regret", "time", "terminal",
        ],
        "MNISTBandit-bsuite" => &["correct_label", "regret", "time", "terminal"],
        "SimpleBandit-bsuite" => &["rewards", "total_regret", "time", "terminal"],
        "Asterix-MinAtar" => &[
            "player_x",
            "player_y",
            "shot_timer",
            "spawn_speed",
            "spawn_timer",
            "move_speed",
            "move_timer",
            "ramp_timer",
            "ramp_index",
            "entities",
            "time",
            "terminal",
        ],
        "Breakout-MinAtar" => &[
            "ball_y", "ball_x", "ball_dir", "pos", "brick_map", "strike", "last_y", "last_x",
            "time", "terminal",
        ],
        "Freeway-MinAtar" => &["pos", "cars", "move_timer", "terminate_timer", "time", "terminal"],
        "Seaquest-MinAtar" => &[],
        "SpaceInvaders-MinAtar" => &[
            "pos",
            "f_bullet_map",
            "e_bullet_map",
            "alien_map",
            "alien_dir",
            "enemy_move_interval",
            "alien_move_timer",
            "alien_shot_timer",
            "ramp_index",
            "shot_timer",
            "ramping",
            "time",
            "terminal",
        ],
        other => panic!("no expected field list for {other}"),
    }
}

#[test]
fn every_env_produces_its_documented_keys() {
    let env = ZeroEnv::new();
    for id in EnvId::ALL {
        let record = translate(&env, id.as_str()).unwrap();
        let got: BTreeSet<&str> = record.keys().collect();
        let want: BTreeSet<&str> = expected_fields(id.as_str()).iter().copied().collect();
        assert_eq!(got, want, "key set for {id}");
        assert_eq!(field_names(id), expected_fields(id.as_str()), "table order for {id}");
    }
}

#[test]
fn time_and_terminal_start_at_zero() {
    let env = ZeroEnv::new();
    for id in EnvId::ALL {
        if id == EnvId::ArcadeGrid(ArcadeGrid::Seaquest) {
            continue;
        }
        let record = translate_env(&env, id).unwrap();
        assert!(record.get("time").is_some_and(Value::is_zero), "time for {id}");
        assert!(record.get("terminal").is_some_and(Value::is_zero), "terminal for {id}");
    }
}

#[test]
fn pendulum_copies_state_elements() {
    let env = MapEnv::default().with_vec("state", &[0.1, -0.2]);
    let record = translate(&env, "Pendulum-v0").unwrap();
    assert_eq!(record.len(), 4);
    assert_eq!(record.get("theta"), Some(&Value::Float(0.1)));
    assert_eq!(record.get("theta_dot"), Some(&Value::Float(-0.2)));
    assert_eq!(record.get("time"), Some(&Value::Int(0)));
    assert_eq!(record.get("terminal"), Some(&Value::Int(0)));
}

#[test]
fn cart_pole_copies_state_elements() {
    let env = MapEnv::default().with_vec("state", &[0.0, 0.1, 0.2, 0.3]);
    let record = translate(&env, "CartPole-v0").unwrap();
    assert_eq!(record.len(), 6);
    assert_eq!(record.get("x"), Some(&Value::Float(0.0)));
    assert_eq!(record.get("x_dot"), Some(&Value::Float(0.1)));
    assert_eq!(record.get("theta"), Some(&Value::Float(0.2)));
    assert_eq!(record.get("theta_dot"), Some(&Value::Float(0.3)));
    assert!(record.get("time").unwrap().is_zero());
    assert!(record.get("terminal").unwrap().is_zero());
}

#[test]
fn seaquest_is_empty_whatever_the_source_holds() {
    let env = MapEnv::default()
        .with("env.oxygen", Attr::Int(200))
        .with_vec("env.f_bullets", &[1.0, 2.0]);
    assert!(translate(&env, "Seaquest-MinAtar").unwrap().is_empty());
    assert!(translate(&MapEnv::default(), "Seaquest-MinAtar").unwrap().is_empty());
}

#[test]
fn unknown_env_is_rejected_by_name() {
    let err = translate(&ZeroEnv::new(), "Foo-v9").unwrap_err();
    assert_eq!(err, TranslateError::UnsupportedEnv("Foo-v9".to_string()));
    assert_eq!(err.to_string(), "Foo-v9 is not in set of implemented environments");
}

#[test]
fn unknown_env_does_not_read_the_source() {
    // An empty map would fail on the first read, so an UnsupportedEnv error
    // means validation ran first.
    let err = translate(&MapEnv::default(), "Pong-MinAtar").unwrap_err();
    assert!(matches!(err, TranslateError::UnsupportedEnv(name) if name == "Pong-MinAtar"));
}

#[test]
fn record_does_not_alias_source_arrays() {
    let mut env = MapEnv::default()
        .with("env.pos", Attr::Int(4))
        .with("env.cars", Attr::Array(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], vec![2, 3]))
        .with("env.move_timer", Attr::Int(3))
        .with("env.terminate_timer", Attr::Int(2500));
    let record = translate(&env, "Freeway-MinAtar").unwrap();

    env.array_mut("env.cars")[0] = -1.0;

    let cars = record.get("cars").and_then(Value::as_array).unwrap();
    assert_eq!(cars.shape(), &[2, 3]);
    assert_eq!(cars.data(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
}

#[test]
fn mutating_state_after_translation_leaves_record_unchanged() {
    let mut env = MapEnv::default().with_vec("state", &[0.5, 0.25]);
    let record = translate(&env, "MountainCar-v0").unwrap();
    env.array_mut("state")[0] = 9.0;
    assert_eq!(record.get("position"), Some(&Value::Float(0.5)));
}

#[test]
fn chain_envs_read_time_from_step_counter() {
    let env = MapEnv::default()
        .with("_need_umbrella", Attr::Bool(true))
        .with("_has_umbrella", Attr::Bool(false))
        .with("_total_regret", Attr::Float(0.0))
        .with("_timestep", Attr::Int(7));
    let record = translate(&env, "UmbrellaChain-bsuite").unwrap();
    assert_eq!(record.get("time"), Some(&Value::Int(7)));
    assert_eq!(record.get("need_umbrella"), Some(&Value::Bool(true)));
    assert_eq!(record.get("terminal"), Some(&Value::Int(0)));
}

#[test]
fn mnist_bandit_renames_regret() {
    let env = MapEnv::default()
        .with("_correct_label", Attr::Int(3))
        .with("_total_regret", Attr::Float(1.5));
    let record = translate(&env, "MNISTBandit-bsuite").unwrap();
    assert_eq!(record.get("regret"), Some(&Value::Float(1.5)));
    assert!(!record.contains("total_regret"));
}

#[test]
fn translation_is_idempotent() {
    let env = MapEnv::default().with_vec("state", &[0.1, 0.2, 0.3, 0.4]);
    let a = translate(&env, "Acrobot-v1").unwrap();
    let b = translate(&env, "Acrobot-v1").unwrap();
    assert_eq!(a, b);
}

#[test]
fn missing_attribute_propagates() {
    let env = MapEnv::default().with("_ball_x", Attr::Int(1));
    let err = translate(&env, "Catch-bsuite").unwrap_err();
    assert_eq!(err, TranslateError::Access(AccessError::Missing("_ball_y".to_string())));
}

#[test]
fn short_state_vector_is_out_of_range() {
    let env = MapEnv::default().with_vec("state", &[0.0, 0.1]);
    let err = translate(&env, "CartPole-v0").unwrap_err();
    assert_eq!(
        err,
        TranslateError::Access(AccessError::IndexOutOfRange {
            path: "state".to_string(),
            index: 2,
            len: 2,
        })
    );
}

#[test]
fn scalar_state_is_not_indexable() {
    let env = MapEnv::default().with("state", Attr::Float(0.0));
    let err = translate(&env, "Pendulum-v0").unwrap_err();
    assert_eq!(err, TranslateError::Access(AccessError::NotIndexable("state".to_string())));
}

#[test]
fn inconsistent_array_shape_is_malformed() {
    let env = MapEnv::default()
        .with("_rewards", Attr::Array(vec![1.0, 2.0, 3.0], vec![2, 2]))
        .with("_total_regret", Attr::Float(0.0));
    let err = translate(&env, "SimpleBandit-bsuite").unwrap_err();
    assert!(matches!(
        err,
        TranslateError::Access(AccessError::Malformed { ref path, .. }) if path == "_rewards"
    ));
}

#[test]
fn families_group_identifiers() {
    let classic: Vec<&str> = Family::ClassicControl.envs().map(EnvId::as_str).collect();
    assert_eq!(
        classic,
        ["Pendulum-v0", "CartPole-v0", "MountainCar-v0", "MountainCarContinuous-v0", "Acrobot-v1"]
    );
    assert_eq!("DeepSea-bsuite".parse::<EnvId>().unwrap().family(), Family::TabularChain);
    assert_eq!("Breakout-MinAtar".parse::<EnvId>().unwrap().family(), Family::ArcadeGrid);
}
