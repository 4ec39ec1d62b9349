use crate::config::Answers;
use crate::error::{Error, Result};
use log::debug;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum AnswerSource {
    Stdin,
    File(PathBuf),
    None,
}

/// Parses pre-supplied answers, trying JSON first and YAML second.
///
/// Blank input means no answers were supplied.
///
/// # Errors
/// * `Error::ConfigError` if the content is neither valid JSON nor YAML answers
pub fn parse_answers(content: &str) -> Result<Answers> {
    let content = content.trim();
    if content.is_empty() {
        return Ok(Answers::default());
    }

    match serde_json::from_str::<Answers>(content) {
        Ok(answers) => Ok(answers),
        Err(json_err) => serde_yaml::from_str::<Answers>(content).map_err(|yaml_err| {
            debug!("Answers are not JSON: {json_err}");
            Error::ConfigError(format!("Invalid answers format: {yaml_err}"))
        }),
    }
}

pub fn load_from_stdin() -> Result<Answers> {
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    parse_answers(&buffer)
}

pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Answers> {
    let path = path.as_ref();
    debug!("Loading answers from {}", path.display());
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::ConfigError(format!("cannot read answers file '{}': {e}", path.display()))
    })?;
    parse_answers(&content)
}

/// Reads the answers supplied ahead of the prompts, if any.
///
/// Stdin wins over an answers file when both are requested.
pub fn get_answers_from(take_from_stdin: bool, answers_file: Option<&Path>) -> Result<Answers> {
    let answers_source = match (take_from_stdin, answers_file) {
        (true, _) => AnswerSource::Stdin,
        (false, Some(path)) => AnswerSource::File(path.to_path_buf()),
        (false, None) => AnswerSource::None,
    };

    match answers_source {
        AnswerSource::Stdin => load_from_stdin(),
        AnswerSource::File(path) => load_from_file(path),
        AnswerSource::None => Ok(Answers::default()),
    }
}
