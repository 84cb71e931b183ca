/*!
 * Shell Commands
 * Parses one input line into a command
 */

use super::ShellError;
use crate::core::types::{Burst, Memory, Pid, Priority};
use std::str::FromStr;

/// A parsed shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Create {
        name: String,
        cpu: Option<Burst>,
        memory: Option<Memory>,
        priority: Option<Priority>,
    },
    List,
    Run(String),
    Block(Pid),
    Unblock(Pid),
    Kill(Pid),
    Clear,
    Help,
    Exit,
}

pub const CREATE_USAGE: &str = "create <name> [--cpu N] [--mem N] [--prio N]";
pub const RUN_USAGE: &str = "run <fifo|sjf|rr|prio>";

pub const HELP: &str = "\
Scheduler simulator - available commands:
  create <name> [--cpu N] [--mem N] [--prio N]
                          create a process (missing values are random)
  list                    list processes
  run <fifo|sjf|rr|prio>  run a scheduler until the ready queue is empty
  block <PID>             block a process
  unblock <PID>           unblock a process
  kill <PID>              terminate a process
  clear                   clear the screen
  help                    show this message
  exit                    quit";

impl Command {
    /// Parse a line; blank lines yield `Ok(None)`
    pub fn parse(line: &str) -> Result<Option<Self>, ShellError> {
        let mut words = line.split_whitespace();
        let Some(keyword) = words.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = words.collect();

        let command = match keyword {
            "create" => parse_create(&args)?,
            "list" => Self::List,
            "run" => match args.as_slice() {
                [algorithm] => Self::Run(algorithm.to_lowercase()),
                _ => return Err(ShellError::Usage(RUN_USAGE)),
            },
            "block" => Self::Block(parse_pid(&args, "block <PID>")?),
            "unblock" => Self::Unblock(parse_pid(&args, "unblock <PID>")?),
            "kill" => Self::Kill(parse_pid(&args, "kill <PID>")?),
            "clear" => Self::Clear,
            "help" => Self::Help,
            "exit" | "quit" => Self::Exit,
            other => return Err(ShellError::UnknownCommand(other.to_string())),
        };

        Ok(Some(command))
    }
}

impl FromStr for Command {
    type Err = ShellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)?.ok_or(ShellError::Usage("<command> [args]"))
    }
}

fn parse_pid(args: &[&str], usage: &'static str) -> Result<Pid, ShellError> {
    match args {
        [pid] => pid.parse().map_err(|_| ShellError::Usage(usage)),
        _ => Err(ShellError::Usage(usage)),
    }
}

fn parse_create(args: &[&str]) -> Result<Command, ShellError> {
    let mut name_parts = Vec::new();
    let (mut cpu, mut memory, mut priority) = (None, None, None);

    // Name words come first; once a flag appears only flags may follow
    let mut iter = args.iter();
    while let Some(&arg) = iter.next() {
        match arg {
            "--cpu" => cpu = Some(flag_value(iter.next())?),
            "--mem" => memory = Some(flag_value(iter.next())?),
            "--prio" => priority = Some(flag_value(iter.next())?),
            word if cpu.is_none() && memory.is_none() && priority.is_none() => {
                name_parts.push(word)
            }
            _ => return Err(ShellError::Usage(CREATE_USAGE)),
        }
    }

    if name_parts.is_empty() {
        return Err(ShellError::Usage(CREATE_USAGE));
    }

    Ok(Command::Create {
        name: name_parts.join(" "),
        cpu,
        memory,
        priority,
    })
}

fn flag_value<T: FromStr>(value: Option<&&str>) -> Result<T, ShellError> {
    value
        .and_then(|v| v.parse().ok())
        .ok_or(ShellError::Usage(CREATE_USAGE))
}
