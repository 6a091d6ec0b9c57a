//! NETLAB entry point.
//!
//! Plays the role of the course page: prints a selected topic's guide and
//! syntax panels, then hands the terminal over to the simulated sandbox as
//! a stdin/stdout REPL. Course file from arg 1 or `NETLAB_COURSE` (default:
//! the embedded course), topic id from arg 2 or `NETLAB_TOPIC` (default:
//! first topic). The sandbox itself takes no configuration.

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result, anyhow};

use netlab_course::{Course, Module, Topic};
use netlab_shell::Session;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let course = resolve_course()?;
    let topic_id = std::env::args()
        .nth(2)
        .or_else(|| std::env::var("NETLAB_TOPIC").ok());
    let (module, topic) = match &topic_id {
        Some(id) => course
            .topic(id)
            .ok_or_else(|| anyhow!("topic '{id}' not found in course '{}'", course.id))?,
        None => course
            .first_topic()
            .ok_or_else(|| anyhow!("course '{}' has no topics", course.id))?,
    };
    log::info!("course '{}', topic '{}'", course.id, topic.id);

    print_topic(&course, module, topic);
    run_sandbox()
}

/// Course from arg 1 / `NETLAB_COURSE`, falling back to the embedded one.
fn resolve_course() -> Result<Course> {
    let source = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("NETLAB_COURSE").ok());
    match source {
        Some(path) => netlab_course::load(Path::new(&path))
            .with_context(|| format!("loading course file {path}")),
        None => Ok(netlab_course::builtin_course()?),
    }
}

fn print_topic(course: &Course, module: &Module, topic: &Topic) {
    println!("=== {} / {} / {} ===", course.title, module.title, topic.title);
    for page in &topic.theory_pages {
        println!();
        println!("{page}");
    }
    if !topic.syntax_pages.is_empty() {
        println!();
        println!("--- Syntax reference ---");
        for page in &topic.syntax_pages {
            println!("{page}");
        }
    }
    println!();
}

/// Run the simulated sandbox until EOF.
fn run_sandbox() -> Result<()> {
    let mut session = Session::new();

    println!("Sandbox ready -- simulated commands:");
    for (category, cmds) in session.registry().list_by_category() {
        let names: Vec<&str> = cmds.iter().map(|(name, _)| *name).collect();
        println!("  [{category}] {}", names.join(", "));
    }
    println!("(Ctrl-D to exit)");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();
    loop {
        write!(stdout, "{}", session.prompt())?;
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            println!();
            break;
        }
        let turn = session.eval(&line);
        if turn.cleared {
            // ANSI clear-screen stands in for emptying the scrollback.
            write!(stdout, "\x1b[2J\x1b[H")?;
            continue;
        }
        for out in &turn.output {
            println!("{out}");
        }
    }
    Ok(())
}
