//! Markdown and JSON rendering of reports.

use std::fmt::Write;

use anyhow::Result;
use serde::Serialize;

use textproc_types::{
    BatchSentimentReport, EmailReport, SentimentReport, SentimentResult, WordCountReport,
};

pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub(crate) fn words_md(report: &WordCountReport) -> String {
    let mut rows: Vec<(&String, &usize)> = report.word_count.iter().collect();
    rows.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

    let mut s = String::from("## Word counts\n\n|Word|Count|\n|---|---:|\n");
    for (word, count) in rows {
        let _ = writeln!(s, "|{}|{}|", escape(word), count);
    }
    let _ = write!(
        s,
        "\nTotal words: {}. Unique words: {}.\n",
        report.total_words, report.unique_words
    );
    s
}

pub(crate) fn emails_md(report: &EmailReport) -> String {
    let mut s = String::from("## Emails\n\n");
    for email in &report.emails {
        let _ = writeln!(s, "- {email}");
    }
    if !report.emails.is_empty() {
        s.push('\n');
    }
    let _ = writeln!(s, "Found: {}", report.email_count);
    s
}

pub(crate) fn sentiment_md(report: &SentimentReport) -> String {
    let r = &report.result;
    let mut s = String::from("## Sentiment\n\n|Field|Value|\n|---|---|\n");
    let _ = writeln!(s, "|Label|{}|", r.label);
    let _ = writeln!(s, "|Score|{:.4}|", r.score);
    let _ = writeln!(s, "|Confidence|{:.4}|", r.confidence);
    let _ = writeln!(s, "|Language|{}|", r.language);
    let _ = writeln!(s, "|Words|{}|", r.word_count);
    let _ = writeln!(s, "|Positive words|{}|", word_list(&r.positive_words));
    let _ = writeln!(s, "|Negative words|{}|", word_list(&r.negative_words));
    s
}

pub(crate) fn batch_md(report: &BatchSentimentReport) -> String {
    let mut s = String::from(
        "## Batch sentiment\n\n|#|Label|Score|Confidence|Language|\n|---:|---|---:|---:|---|\n",
    );
    for (i, r) in report.results.iter().enumerate() {
        let _ = writeln!(s, "{}", batch_row(i + 1, r));
    }
    let _ = write!(s, "\nDocuments: {}\n", report.count);
    s
}

fn batch_row(n: usize, r: &SentimentResult) -> String {
    format!(
        "|{}|{}|{:.4}|{:.4}|{}|",
        n, r.label, r.score, r.confidence, r.language
    )
}

fn word_list(words: &[String]) -> String {
    if words.is_empty() {
        "-".to_string()
    } else {
        escape(&words.join(", "))
    }
}

fn escape(cell: &str) -> String {
    cell.replace('|', "\\|")
}
