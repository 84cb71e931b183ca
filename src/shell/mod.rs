/*!
 * Command Shell
 * Interactive front end: parses commands, drives the simulator, prints results
 */

pub mod command;
pub mod render;

pub use command::Command;

use crate::core::errors::SimError;
use crate::core::limits::ENV_OUTPUT;
use crate::core::types::Pid;
use crate::process::{ProcessLifecycle, ProcessSpec};
use crate::simulator::Simulator;
use miette::Diagnostic;
use std::io::{self, BufRead, Write};
use thiserror::Error;
use tracing::{debug, warn};

/// Shell errors
#[derive(Error, Debug)]
pub enum ShellError {
    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("Unknown command '{0}'. Type `help` for the command list.")]
    UnknownCommand(String),

    #[error(transparent)]
    Sim(#[from] SimError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// How `run` output is written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable trace blocks
    #[default]
    Text,
    /// One JSON object per observation, then the summary
    Json,
}

impl OutputMode {
    /// Read `SCHED_SIM_OUTPUT` (`json` selects JSON lines)
    pub fn from_env() -> Self {
        match std::env::var(ENV_OUTPUT) {
            Ok(v) if v.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Whether the shell should keep reading input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Interactive shell over a simulator
pub struct Shell<W: Write> {
    simulator: Simulator,
    out: W,
    output: OutputMode,
    prompt: bool,
}

impl<W: Write> Shell<W> {
    pub fn new(simulator: Simulator, out: W) -> Self {
        Self {
            simulator,
            out,
            output: OutputMode::Text,
            prompt: true,
        }
    }

    pub fn with_output(mut self, output: OutputMode) -> Self {
        self.output = output;
        self
    }

    /// Disable the `SO>` prompt (useful for scripted input)
    pub fn without_prompt(mut self) -> Self {
        self.prompt = false;
        self
    }

    pub fn simulator(&self) -> &Simulator {
        &self.simulator
    }

    pub fn into_inner(self) -> (Simulator, W) {
        (self.simulator, self.out)
    }

    /// Read commands until `exit` or end of input
    pub fn run<R: BufRead>(&mut self, input: R) -> io::Result<()> {
        writeln!(self.out, "{}", command::HELP)?;

        let mut lines = input.lines();
        loop {
            if self.prompt {
                write!(self.out, "SO> ")?;
                self.out.flush()?;
            }

            let Some(line) = lines.next() else {
                writeln!(self.out)?;
                break;
            };

            if self.handle_line(&line?)? == Flow::Exit {
                break;
            }
        }
        Ok(())
    }

    /// Parse and execute one line, reporting errors to the output
    pub fn handle_line(&mut self, line: &str) -> io::Result<Flow> {
        let result = Command::parse(line).and_then(|cmd| match cmd {
            Some(cmd) => self.execute(cmd),
            None => Ok(Flow::Continue),
        });

        match result {
            Ok(flow) => Ok(flow),
            Err(ShellError::Io(err)) => Err(err),
            Err(err) => {
                debug!(error = %err, line, "Command rejected");
                self.report(&err)?;
                Ok(Flow::Continue)
            }
        }
    }

    /// Execute a parsed command
    pub fn execute(&mut self, command: Command) -> Result<Flow, ShellError> {
        match command {
            Command::Create {
                name,
                cpu,
                memory,
                priority,
            } => {
                let pid = self.simulator.create(ProcessSpec {
                    name: name.as_str().into(),
                    cpu,
                    memory,
                    priority,
                });
                if let Some(p) = self.simulator.get(pid) {
                    writeln!(
                        self.out,
                        "Process created: PID {} | {} | CPU={} | MEM={} | PRIO={}",
                        p.pid, p.name, p.remaining_cpu, p.memory, p.priority
                    )?;
                }
            }
            Command::List if self.simulator.processes().is_empty() => {
                writeln!(self.out, "No processes created yet.")?;
            }
            Command::List => {
                writeln!(self.out, "{}", render::process_table(&self.simulator.list()))?;
            }
            Command::Run(name) => self.run_algorithm(&name)?,
            Command::Block(pid) => {
                self.simulator.block(pid)?;
                writeln!(self.out, "Process {} ({}) blocked.", pid, self.name_of(pid))?;
            }
            Command::Unblock(pid) => {
                self.simulator.unblock(pid)?;
                writeln!(
                    self.out,
                    "Process {} ({}) unblocked and back in the ready queue.",
                    pid,
                    self.name_of(pid)
                )?;
            }
            Command::Kill(pid) => {
                self.simulator.kill(pid)?;
                writeln!(self.out, "Process {} ({}) terminated (kill).", pid, self.name_of(pid))?;
            }
            Command::Clear => {
                write!(self.out, "\x1B[2J\x1B[H")?;
                self.out.flush()?;
            }
            Command::Help => writeln!(self.out, "{}", command::HELP)?,
            Command::Exit => {
                writeln!(self.out, "Shutting down simulator.")?;
                return Ok(Flow::Exit);
            }
        }
        Ok(Flow::Continue)
    }

    fn run_algorithm(&mut self, name: &str) -> Result<(), ShellError> {
        let output = self.output;
        let out = &mut self.out;
        let mut run = self.simulator.run(name)?;

        if output == OutputMode::Text {
            writeln!(out, "Starting run: {}", run.algorithm().label())?;
            if !run.processes().has_ready() {
                writeln!(out, "Nothing to run: the ready queue is empty.")?;
            }
        }

        while let Some(obs) = run.next() {
            match output {
                OutputMode::Text => {
                    writeln!(out, "\n{}", render::observation(&obs, run.processes()))?
                }
                OutputMode::Json => writeln!(out, "{}", to_json(&obs))?,
            }
        }

        let summary = run.summary();
        match output {
            OutputMode::Text => writeln!(out, "{}", render::summary(&summary))?,
            OutputMode::Json => writeln!(out, "{}", to_json(&summary))?,
        }
        Ok(())
    }

    fn name_of(&self, pid: Pid) -> String {
        self.simulator
            .get(pid)
            .map(|p| p.name.to_string())
            .unwrap_or_default()
    }

    fn report(&mut self, err: &ShellError) -> io::Result<()> {
        writeln!(self.out, "error: {}", err)?;
        if let ShellError::Sim(sim) = err {
            if let Some(help) = sim.help() {
                writeln!(self.out, "  help: {}", help)?;
            }
        }
        Ok(())
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| {
        warn!(error = %e, "Failed to serialize run output");
        String::from("{}")
    })
}
