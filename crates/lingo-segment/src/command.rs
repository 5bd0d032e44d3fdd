use std::io::Write;
use std::process::{Command, Stdio};
use std::thread;

use lingo_core::{ExternalTokenizer, TokenizeError};

/// Runs an external tokenizer program per call.
///
/// The text goes to the program's stdin; each non-empty stdout line is a
/// token. There is no timeout, callers budget for the call themselves.
#[derive(Debug, Clone)]
pub struct CommandTokenizer {
    program: String,
    args: Vec<String>,
}

impl CommandTokenizer {
    /// `command[0]` is the program, the rest are arguments
    pub fn new(command: &[String]) -> Option<Self> {
        let (program, args) = command.split_first()?;
        Some(Self {
            program: program.clone(),
            args: args.to_vec(),
        })
    }
}

impl ExternalTokenizer for CommandTokenizer {
    fn name(&self) -> &str {
        &self.program
    }

    fn tokenize(&self, text: &str) -> Result<Vec<String>, TokenizeError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| TokenizeError::Failed("stdin not captured".to_string()))?;
        let input = text.to_string();
        // write from another thread so a full stdout pipe cannot deadlock us
        let writer = thread::spawn(move || stdin.write_all(input.as_bytes()));

        let output = child.wait_with_output()?;
        writer
            .join()
            .map_err(|_| TokenizeError::Failed("stdin writer panicked".to_string()))??;

        if !output.status.success() {
            return Err(TokenizeError::Failed(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout)
            .lines()
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }
}
