// Copyright (C) 2020-2026 Andy Kurnia.

// https://github.com/kkawakam/rustyline/blob/master/examples/example.rs

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Choice {
    Roll,
    Stop,
}

// Anything whose first word does not start with r is a stop, including bad quoting.
pub fn parse_choice(line: &str) -> Choice {
    match shell_words::split(line) {
        Ok(strings) => match strings.first() {
            Some(first) if first.starts_with(['r', 'R']) => Choice::Roll,
            _ => Choice::Stop,
        },
        Err(_) => Choice::Stop,
    }
}

// None means no more input will ever come.
pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> Option<String>;
}

pub struct ScriptedLines(pub std::collections::VecDeque<String>);

impl ScriptedLines {
    pub fn new(lines: &[&str]) -> Self {
        Self(lines.iter().map(|&s| s.to_owned()).collect())
    }
}

impl LineSource for ScriptedLines {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        let line = self.0.pop_front();
        if let Some(line) = &line {
            println!("{}{}", prompt, line);
        }
        line
    }
}

const COMMANDS: &[&str] = &["roll", "stop"];

#[derive(rustyline_derive::Helper, rustyline_derive::Highlighter, rustyline_derive::Validator)]
pub struct ChoiceHelper {
    hinter: rustyline::hint::HistoryHinter,
}

impl rustyline::completion::Completer for ChoiceHelper {
    type Candidate = rustyline::completion::Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<rustyline::completion::Pair>)> {
        let typed = &line[..pos];
        let start = typed.len() - typed.trim_start().len();
        let word = &typed[start..];
        Ok((
            start,
            COMMANDS
                .iter()
                .filter(|command| command.starts_with(word))
                .map(|&command| rustyline::completion::Pair {
                    display: command.to_owned(),
                    replacement: command.to_owned(),
                })
                .collect(),
        ))
    }
}

impl rustyline::hint::Hinter for ChoiceHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, ctx: &rustyline::Context<'_>) -> Option<String> {
        if pos == line.len() && !line.is_empty() {
            if let Some(command) = COMMANDS.iter().find(|command| command.starts_with(line)) {
                return Some(command[line.len()..].to_owned());
            }
        }
        self.hinter.hint(line, pos, ctx)
    }
}

pub struct RlLines(rustyline::Editor<ChoiceHelper, rustyline::history::DefaultHistory>);

impl RlLines {
    pub fn new() -> rustyline::Result<Self> {
        let mut rl = rustyline::Editor::new()?;
        rl.set_helper(Some(ChoiceHelper {
            hinter: rustyline::hint::HistoryHinter::new(),
        }));
        Ok(Self(rl))
    }
}

impl LineSource for RlLines {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        match self.0.readline(prompt) {
            Ok(line) => {
                let _ = self.0.add_history_entry(line.as_str());
                Some(line)
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("CTRL-C");
                None
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("CTRL-D");
                None
            }
            Err(err) => {
                println!("Error: {:?}", err);
                None
            }
        }
    }
}
