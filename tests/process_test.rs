/*!
 * Process Tests
 * Registry, state machine, and queue membership through the public API
 */

use pretty_assertions::assert_eq;
use sched_sim::process::Operation;
use sched_sim::{
    ProcessLifecycle, ProcessManager, ProcessSpec, ProcessState, SimConfig, SimError, Simulator,
};

#[test]
fn test_pids_are_monotonic() {
    let mut pm = ProcessManager::new();
    let pids: Vec<_> = (0..5)
        .map(|i| pm.create(ProcessSpec::new(format!("p{i}")).with_cpu(1)))
        .collect();

    assert_eq!(pids, vec![1, 2, 3, 4, 5]);

    pm.kill(3).unwrap();
    assert_eq!(pm.create(ProcessSpec::new("late")), 6);
}

#[test]
fn test_arrival_order_follows_creation() {
    let mut pm = ProcessManager::new();
    pm.create(ProcessSpec::new("a"));
    pm.create(ProcessSpec::new("a"));
    pm.create(ProcessSpec::new("b"));

    let orders: Vec<_> = pm.list().iter().map(|p| p.arrival_order).collect();
    assert!(orders.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_defaults_stay_in_range() {
    let mut sim = Simulator::builder().with_seed(2024).build().unwrap();
    for i in 0..50 {
        sim.create(ProcessSpec::new(format!("p{i}")));
    }

    for p in sim.list() {
        assert!((1..=10).contains(&p.remaining_cpu), "cpu {}", p.remaining_cpu);
        assert!((10..=300).contains(&p.memory), "memory {}", p.memory);
        assert!((1..=5).contains(&p.priority), "priority {}", p.priority);
        assert_eq!(p.state, ProcessState::Ready);
    }
}

#[test]
fn test_explicit_attributes_win() {
    let mut sim = Simulator::builder().with_seed(5).build().unwrap();
    let pid = sim.create_with("db", Some(42), Some(512), Some(9));

    let p = sim.get(pid).unwrap();
    assert_eq!((p.remaining_cpu, p.memory, p.priority), (42, 512, 9));
}

#[test]
fn test_seeded_defaults_are_reproducible() {
    let draw = || {
        let mut sim = Simulator::builder().with_seed(99).build().unwrap();
        (0..10)
            .map(|_| {
                let pid = sim.create(ProcessSpec::new("x"));
                let p = sim.get(pid).unwrap();
                (p.remaining_cpu, p.memory, p.priority)
            })
            .collect::<Vec<_>>()
    };
    assert_eq!(draw(), draw());
}

#[test]
fn test_configured_ranges() {
    let config = SimConfig {
        cpu_range: "3-3".parse().unwrap(),
        priority_range: "2".parse().unwrap(),
        seed: Some(1),
        ..SimConfig::default()
    };
    let mut sim = Simulator::builder().with_config(config).build().unwrap();
    let pid = sim.create(ProcessSpec::new("fixed"));

    let p = sim.get(pid).unwrap();
    assert_eq!(p.remaining_cpu, 3);
    assert_eq!(p.priority, 2);
}

#[test]
fn test_not_found() {
    let mut pm = ProcessManager::new();
    assert_eq!(pm.kill(1), Err(SimError::NotFound(1)));
    assert_eq!(pm.block(1), Err(SimError::NotFound(1)));
    assert_eq!(pm.unblock(1), Err(SimError::NotFound(1)));
    assert!(!pm.exists(1));
}

#[test]
fn test_kill_already_finished_is_reported() {
    let mut pm = ProcessManager::new();
    let pid = pm.create(ProcessSpec::new("a").with_cpu(4));

    pm.kill(pid).unwrap();
    let err = pm.kill(pid).unwrap_err();

    assert_eq!(
        err,
        SimError::InvalidTransition {
            pid,
            operation: Operation::Kill,
            state: ProcessState::Finished,
        }
    );
    assert_eq!(err.to_string(), format!("Cannot kill process {pid}: already finished"));
    assert_eq!(pm.snapshot().finished, vec![pid]);
}

#[test]
fn test_kill_clears_every_queue() {
    let mut pm = ProcessManager::new();
    let ready = pm.create(ProcessSpec::new("ready").with_cpu(4));
    let blocked = pm.create(ProcessSpec::new("blocked").with_cpu(4));
    pm.block(blocked).unwrap();

    pm.kill(ready).unwrap();
    pm.kill(blocked).unwrap();

    let snap = pm.snapshot();
    assert!(snap.ready.is_empty());
    assert!(snap.blocked.is_empty());
    assert_eq!(snap.finished, vec![ready, blocked]);

    for pid in [ready, blocked] {
        let p = pm.get(pid).unwrap();
        assert_eq!(p.state, ProcessState::Finished);
        assert_eq!(p.remaining_cpu, 0);
    }
}

#[test]
fn test_block_and_unblock_rules() {
    let mut pm = ProcessManager::new();
    let a = pm.create(ProcessSpec::new("a").with_cpu(2));
    let b = pm.create(ProcessSpec::new("b").with_cpu(2));

    assert!(matches!(
        pm.unblock(a),
        Err(SimError::InvalidTransition { operation: Operation::Unblock, .. })
    ));

    pm.block(a).unwrap();
    assert!(pm.block(a).is_err());
    assert_eq!(pm.snapshot().ready, vec![b]);
    assert_eq!(pm.snapshot().blocked, vec![a]);

    pm.unblock(a).unwrap();
    assert_eq!(pm.snapshot().ready, vec![b, a]);
    assert!(pm.snapshot().blocked.is_empty());

    pm.kill(a).unwrap();
    assert!(pm.block(a).is_err());
    assert!(pm.unblock(a).is_err());
}

#[test]
fn test_failed_operation_leaves_state() {
    let mut pm = ProcessManager::new();
    let a = pm.create(ProcessSpec::new("a").with_cpu(2));
    pm.kill(a).unwrap();

    let before = (pm.list(), pm.snapshot());
    let _ = pm.block(a);
    let _ = pm.unblock(a);
    let _ = pm.kill(a);
    let _ = pm.kill(77);

    assert_eq!((pm.list(), pm.snapshot()), before);
}

#[test]
fn test_list_sorted_by_pid() {
    let mut pm = ProcessManager::new();
    for name in ["c", "a", "b"] {
        pm.create(ProcessSpec::new(name).with_cpu(1));
    }
    let pids: Vec<_> = pm.list().iter().map(|p| p.pid).collect();
    assert_eq!(pids, vec![1, 2, 3]);
}
