// Colored terminal output for classification reports.
//
// Two sections, matching the two measures: Jaccard coefficients with the
// matched words under each topic, then cosine metrics. A closing line names
// the best-matching topic by each measure.

use colored::Colorize;

use super::{format_words, score_bar};
use crate::pipeline::classify::{ClassificationReport, TopicScore};
use crate::text::WordSet;

const BAR_WIDTH: usize = 20;

/// Display a classification report in the terminal.
pub fn display_report(report: &ClassificationReport) {
    if report.topics.is_empty() {
        println!("No topics to compare against.");
        return;
    }

    println!(
        "\n{}",
        format!(
            "=== Jaccard coefficients ({} document words) ===",
            report.document_words
        )
        .bold()
    );
    println!();

    for score in &report.topics {
        println!(
            "  {:<20} {} {:.4}",
            score.topic.bold(),
            colorize_bar(score.jaccard.coefficient),
            score.jaccard.coefficient
        );
        println!(
            "      Intersection: {}",
            format_words(&score.jaccard.intersection).dimmed()
        );
        println!();
    }

    println!("{}", "=== Cosine metrics ===".bold());
    println!();

    for score in &report.topics {
        println!(
            "  {:<20} {} {:.4}  {}",
            score.topic.bold(),
            colorize_bar(score.cosine),
            score.cosine,
            format!("({} shared)", score.overlap).dimmed()
        );
    }
    println!();

    println!(
        "  Best match: {} by Jaccard, {} by cosine",
        best_label(report.best_by_jaccard()),
        best_label(report.best_by_cosine())
    );
}

/// Display a document's normalized word set.
pub fn display_words(words: &WordSet) {
    println!(
        "\n{}",
        format!("=== Normalized words ({}) ===", words.len()).bold()
    );
    println!("{}", format_words(words));
}

fn colorize_bar(score: f64) -> colored::ColoredString {
    let bar = score_bar(score, BAR_WIDTH);
    if score >= 0.5 {
        bar.bright_green()
    } else if score >= 0.2 {
        bar.bright_yellow()
    } else {
        bar.bright_blue()
    }
}

fn best_label(best: Option<&TopicScore>) -> colored::ColoredString {
    match best {
        Some(score) => score.topic.green().bold(),
        None => "none".dimmed(),
    }
}
