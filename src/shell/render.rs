/*!
 * Text Rendering
 * Human-readable cycle traces, run summaries, and process tables
 */

use crate::core::types::Pid;
use crate::process::{Process, ProcessLifecycle, ProcessManager};
use crate::scheduler::{CycleEvent, CycleObservation, RunSummary};
use std::fmt::Write;

const RULE_WIDTH: usize = 40;

/// Render one cycle as a block of lines
pub fn observation(obs: &CycleObservation, processes: &ProcessManager) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();

    let _ = writeln!(out, "{rule}");
    let _ = writeln!(
        out,
        "Cycle {} - Context switches: {}",
        obs.cycle, obs.context_switches
    );

    match obs.executing.and_then(|pid| processes.get(pid)) {
        None => {
            let _ = writeln!(out, "-> CPU idle this cycle (no ready process).");
        }
        Some(p) => {
            let quantum = obs
                .quantum_remaining
                .map(|q| format!(" (quantum left: {})", q))
                .unwrap_or_default();
            let _ = writeln!(
                out,
                "-> Running {} (PID {}) - CPU left: {}{}",
                p.name, p.pid, obs.remaining, quantum
            );
        }
    }

    let _ = writeln!(out, "Queues:");
    let _ = writeln!(
        out,
        "  Ready: {}",
        join_or(&obs.queues.ready, processes, true, "empty")
    );
    let _ = writeln!(
        out,
        "  Blocked: {}",
        join_or(&obs.queues.blocked, processes, false, "empty")
    );
    let _ = writeln!(
        out,
        "  Finished: {}",
        join_or(&obs.queues.finished, processes, false, "none")
    );
    let _ = write!(out, "{rule}");

    if let (Some(pid), Some(event)) = (obs.executing, obs.event) {
        match event {
            CycleEvent::Completed => {
                let _ = write!(out, "\nProcess {} finished!", pid);
            }
            CycleEvent::Preempted => {
                let _ = write!(
                    out,
                    "\nProcess {} preempted ({} left), back to the end of the queue.",
                    pid, obs.remaining
                );
            }
        }
    }

    out
}

fn join_or(pids: &[Pid], processes: &ProcessManager, with_cpu: bool, empty: &str) -> String {
    if pids.is_empty() {
        return empty.to_string();
    }
    pids.iter()
        .map(|&pid| match processes.get(pid) {
            Some(p) if with_cpu => format!("{}(PID{},CPU{})", p.name, pid, p.remaining_cpu),
            Some(p) => format!("{}(PID{})", p.name, pid),
            None => format!("?(PID{})", pid),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render the end-of-run line
pub fn summary(summary: &RunSummary) -> String {
    format!(
        "{} run finished in {} cycles. Context switches: {}",
        summary.algorithm.label(),
        summary.total_cycles,
        summary.context_switches
    )
}

/// Render the process table
pub fn process_table(processes: &[Process]) -> String {
    let header = format!(
        "{:<4} | {:<10} | {:<3} | {:<4} | {:<4} | {:<10}",
        "PID", "Name", "CPU", "MEM", "PRIO", "State"
    );
    let mut out = String::new();
    let _ = writeln!(out, "{header}");
    let _ = write!(out, "{}", "-".repeat(header.len()));

    for p in processes {
        let _ = write!(
            out,
            "\n{:<4} | {:<10} | {:<3} | {:<4} | {:<4} | {:<10}",
            p.pid,
            p.name.as_str(),
            p.remaining_cpu,
            p.memory,
            p.priority,
            p.state.as_str()
        );
    }
    out
}
