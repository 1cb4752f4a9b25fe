//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{KotobaArgs, OutputFormat};
use crate::error::Result;
use crate::metrics::ReadingMetrics;
use crate::search::SearchResult;

/// Result structure for word counting.
#[derive(Debug, Serialize, Deserialize)]
pub struct CountResult {
    pub words: usize,
}

/// Result structure for parse and tokenize listings.
#[derive(Debug, Serialize, Deserialize)]
pub struct WordListResult {
    pub words: Vec<String>,
    pub count: usize,
}

/// Print a count result.
pub fn output_count(result: &CountResult, args: &KotobaArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            println!("{}", result.words);
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Print a word listing, one word per line in human format.
pub fn output_word_list(result: &WordListResult, args: &KotobaArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            for word in &result.words {
                println!("{word}");
            }
            if args.verbosity() > 1 {
                println!();
                println!("{} words", result.count);
            }
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Print a search result.
pub fn output_search(result: &SearchResult, args: &KotobaArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            println!("score: {}", result.score);
            println!("matched: {}", result.matched.join(" "));
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Print reading metrics.
pub fn output_metrics(result: &ReadingMetrics, args: &KotobaArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            println!("words: {}", result.word_count);
            println!(
                "average: {} min ({:.1}s)",
                result.average.minutes,
                result.average.duration.as_secs_f64()
            );
            println!(
                "relaxed: {} min ({:.1}s)",
                result.relaxed.minutes,
                result.relaxed.duration.as_secs_f64()
            );
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Serialize any result as JSON, pretty-printed on request.
fn output_json<T: Serialize>(result: &T, args: &KotobaArgs) -> Result<()> {
    let rendered = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{rendered}");
    Ok(())
}
