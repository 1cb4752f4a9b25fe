//! Command implementations for the kotoba CLI.

use std::fs;
use std::io::Read;

use log::debug;

use crate::cli::args::{Command, InputArgs, KotobaArgs, MetricsArgs, SearchArgs};
use crate::cli::output::{CountResult, WordListResult, output_count, output_metrics, output_search, output_word_list};
use crate::counter::WordCounter;
use crate::error::{KotobaError, Result};

/// Execute a CLI command.
pub fn execute_command(args: KotobaArgs) -> Result<()> {
    match &args.command {
        Command::Count(input) => count_words(input.clone(), &args),
        Command::Parse(input) => parse_words(input.clone(), &args),
        Command::Tokenize(input) => tokenize_text(input.clone(), &args),
        Command::Search(search) => search_content(search.clone(), &args),
        Command::Metrics(metrics) => show_metrics(metrics.clone(), &args),
    }
}

/// Read the text to analyze from the positional argument, a file, or
/// standard input.
fn read_input(input: &InputArgs) -> Result<String> {
    if let Some(text) = &input.text {
        return Ok(text.clone());
    }

    if let Some(path) = &input.file {
        debug!("reading input from {}", path.display());
        return Ok(fs::read_to_string(path)?);
    }

    debug!("reading input from standard input");
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

/// Count words in the input.
fn count_words(input: InputArgs, cli_args: &KotobaArgs) -> Result<()> {
    let text = read_input(&input)?;
    let counter = WordCounter::with_config(input.counter_config());

    let words = counter.count(&text);
    debug!("counted {words} words in {} bytes of input", text.len());

    output_count(&CountResult { words }, cli_args)
}

/// List every word in the input.
fn parse_words(input: InputArgs, cli_args: &KotobaArgs) -> Result<()> {
    let text = read_input(&input)?;
    let counter = WordCounter::with_config(input.counter_config());

    let words = counter.parse(&text);
    let count = words.len();

    output_word_list(&WordListResult { words, count }, cli_args)
}

/// List space-separated tokens without script segmentation.
fn tokenize_text(input: InputArgs, cli_args: &KotobaArgs) -> Result<()> {
    let text = read_input(&input)?;
    let counter = WordCounter::with_config(input.counter_config());

    let words = counter.tokenize(&text);
    let count = words.len();

    output_word_list(&WordListResult { words, count }, cli_args)
}

/// Score the input content against the query keywords.
fn search_content(search: SearchArgs, cli_args: &KotobaArgs) -> Result<()> {
    let counter = WordCounter::with_config(search.input.counter_config());
    if counter.parse(&search.query).is_empty() {
        return Err(KotobaError::invalid_operation(
            "query contains no searchable words",
        ));
    }

    let text = read_input(&search.input)?;
    let result = counter.search(&search.query, &text);
    debug!(
        "query matched {} distinct words for a score of {}",
        result.matched.len(),
        result.score
    );

    output_search(&result, cli_args)
}

/// Estimate reading times for the input.
fn show_metrics(metrics: MetricsArgs, cli_args: &KotobaArgs) -> Result<()> {
    let text = read_input(&metrics.input)?;
    let counter = WordCounter::with_config(metrics.counter_config());

    output_metrics(&counter.metrics(&text), cli_args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    #[test]
    fn test_read_input_prefers_text() {
        let input = InputArgs {
            text: Some("inline text".to_string()),
            file: None,
            punctuation: None,
            punctuation_as_breaker: false,
            no_default_punctuation: false,
        };
        assert_eq!(read_input(&input).unwrap(), "inline text");
    }

    #[test]
    fn test_read_input_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "words in a file").unwrap();

        let input = InputArgs {
            text: None,
            file: Some(file.path().to_path_buf()),
            punctuation: None,
            punctuation_as_breaker: false,
            no_default_punctuation: false,
        };
        assert_eq!(read_input(&input).unwrap(), "words in a file");
    }

    #[test]
    fn test_read_input_missing_file_fails() {
        let input = InputArgs {
            text: None,
            file: Some("/definitely/not/here.txt".into()),
            punctuation: None,
            punctuation_as_breaker: false,
            no_default_punctuation: false,
        };
        assert!(matches!(read_input(&input), Err(KotobaError::Io(_))));
    }

    #[test]
    fn test_execute_count_command() {
        let args =
            KotobaArgs::try_parse_from(["kotoba", "-q", "-f", "json", "count", "one word two"])
                .unwrap();
        assert!(execute_command(args).is_ok());
    }

    #[test]
    fn test_execute_metrics_command_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "one two three four").unwrap();

        let path = file.path().to_str().unwrap().to_string();
        let args = KotobaArgs::try_parse_from([
            "kotoba",
            "-q",
            "-f",
            "json",
            "metrics",
            "--file",
            path.as_str(),
        ])
        .unwrap();
        assert!(execute_command(args).is_ok());
    }

    #[test]
    fn test_search_rejects_wordless_query() {
        let search = SearchArgs {
            query: "??? !!!".to_string(),
            input: InputArgs {
                text: Some("content".to_string()),
                file: None,
                punctuation: None,
                punctuation_as_breaker: false,
                no_default_punctuation: false,
            },
        };
        let args = KotobaArgs::try_parse_from(["kotoba", "search", "??? !!!", "content"]).unwrap();

        let result = search_content(search, &args);
        assert!(matches!(result, Err(KotobaError::InvalidOperation(_))));
    }
}
