use colored::Colorize;

use crate::{
    Booster,
    BoostError,
    Classifier,
    RefWeightedMajority,
    Sample,
    WeakLearner,
    booster::Round,
};

use std::fs::File;
use std::hash::Hash;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};

const PRINT_EVERY: usize = 10;
const NO_LIMIT: Duration = Duration::MAX;

const CELL: usize = 8;
const DIGITS: usize = 5;
const RULE: usize = 60;
const HALF: usize = (RULE - 4) / 2;

const CSV_HEADER: &str =
    "Round,WeightedError,Confidence,TrainAccuracy,TestAccuracy,Time";


/// A booster that exposes its in-progress state,
/// so that [`Logger`] can report it between rounds.
pub trait CurrentHypothesis<H> {
    /// The combined hypothesis built so far. May be empty.
    fn current_hypothesis(&self) -> RefWeightedMajority<'_, H>;

    /// Statistics of the most recent round, if any round ran.
    fn last_round(&self) -> Option<Round>;
}


/// Drives a [`Booster`] one round at a time and records
/// what happens in each round.
///
/// Per round, `Logger` appends a CSV row with
/// the round number, weighted error, confidence,
/// accuracy on the training sample, accuracy on the test sample,
/// and the elapsed time in milliseconds.
/// Accuracy cells stay empty while no hypothesis is accepted.
/// A colored summary line goes to stdout every `print_every` rounds.
///
/// ```no_run
/// use adaboostm1::prelude::*;
///
/// # fn load() -> (Sample<String>, Sample<String>) { unimplemented!() }
/// let (train, test) = load();
///
/// let booster = AdaBoostM1::init(&train).max_rounds(50);
/// let outcome = Logger::new(booster, DecisionStump::new(), &train)
///     .test_sample(&test)
///     .print_every(5)
///     .time_limit_as_secs(60)
///     .run("adaboostm1.csv")
///     .unwrap();
/// ```
pub struct Logger<'a, B, W, Y> {
    booster: B,
    weak_learner: W,
    train: &'a Sample<Y>,
    test: Option<&'a Sample<Y>>,
    time_limit: Duration,
    print_every: usize,
}


impl<'a, B, W, Y> Logger<'a, B, W, Y> {
    /// Wraps `booster` and `weak_learner`.
    /// `train` must be the sample `booster` trains on.
    pub fn new(booster: B, weak_learner: W, train: &'a Sample<Y>) -> Self {
        Self {
            booster,
            weak_learner,
            train,
            test: None,
            time_limit: NO_LIMIT,
            print_every: PRINT_EVERY,
        }
    }


    /// Also report the accuracy on `test`.
    pub fn test_sample(mut self, test: &'a Sample<Y>) -> Self {
        self.test = Some(test);
        self
    }


    /// Stop after the round in which the total time
    /// spent in rounds exceeds `millis` milliseconds.
    pub fn time_limit_as_millis(mut self, millis: u64) -> Self {
        self.time_limit = Duration::from_millis(millis);
        self
    }


    /// Same as [`Logger::time_limit_as_millis`], in seconds.
    pub fn time_limit_as_secs(mut self, secs: u64) -> Self {
        self.time_limit = Duration::from_secs(secs);
        self
    }


    /// Same as [`Logger::time_limit_as_millis`], in minutes.
    pub fn time_limit_as_mins(mut self, mins: u64) -> Self {
        self.time_limit = Duration::from_secs(mins.saturating_mul(60));
        self
    }


    /// Print a line every `rounds` rounds (default `10`).
    /// `usize::MAX` silences stdout; the CSV file is still written.
    pub fn print_every(mut self, rounds: usize) -> Self {
        self.print_every = rounds.max(1);
        self
    }


    /// Returns the wrapped booster.
    pub fn booster(&self) -> &B {
        &self.booster
    }
}


// One row of the log.
struct Row {
    round: usize,
    error: Option<f64>,
    confidence: Option<f64>,
    train: Option<f64>,
    test: Option<f64>,
    elapsed: Duration,
}


impl Row {
    fn csv(&self) -> String {
        format!(
            "{},{},{},{},{},{}",
            self.round,
            csv_cell(self.error),
            csv_cell(self.confidence),
            csv_cell(self.train),
            csv_cell(self.test),
            self.elapsed.as_millis(),
        )
    }


    fn pretty(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}\t{}\t{}",
            format!("{:>CELL$}", self.round).red(),
            fixed(self.error).blue(),
            fixed(self.confidence).purple(),
            fixed(self.train).green(),
            fixed(self.test).yellow(),
            clock(self.elapsed).bold().cyan(),
        )
    }
}


impl<Y, H, B, W> Logger<'_, B, W, Y>
    where B: Booster<Y, H> + CurrentHypothesis<H>,
          W: WeakLearner<Y, Hypothesis = H>,
          H: Classifier<Y>,
          Y: Clone + Eq + Hash,
{
    fn quiet(&self) -> bool {
        self.print_every == usize::MAX
    }


    fn banner(&self) {
        let limit = if self.time_limit == NO_LIMIT {
            "none".to_string()
        } else {
            clock(self.time_limit)
        };

        let mut lines = vec![
            format!("{:=>RULE$}", ""),
            format!("{:^RULE$}", "SETTINGS".bold()),
            format!("{:->RULE$}", ""),
        ];
        lines.push(entry("Booster", self.booster.name()));
        lines.extend(details(self.booster.info()));
        lines.push(entry("Weak Learner", self.weak_learner.name()));
        lines.extend(details(self.weak_learner.info()));
        lines.push(entry("Time Limit", &limit));
        lines.push(format!("{:=>RULE$}\n", ""));
        println!("\n{}", lines.join("\n"));

        let head = ["", "WEIGHTED", "", "TRAIN", "TEST", "ELAPSED"];
        let tail = ["ROUND", "ERROR", "ALPHA", "ACC.", "ACC.", "TIME"];
        for (row, end) in [(head, ""), (tail, "\n")] {
            let cells = row.iter()
                .map(|c| format!("{:>CELL$}", c.bold()))
                .collect::<Vec<_>>()
                .join("\t");
            println!("      {cells}{end}");
        }
    }


    fn accuracy(&self, sample: Option<&Sample<Y>>) -> Option<f64> {
        self.booster.current_hypothesis()
            .success_rate(sample?.records())
            .ok()
    }


    /// Trains the wrapped booster, writing one CSV row per round
    /// to `filename`, and returns what [`Booster::postprocess`] returns.
    ///
    /// The booster is validated before `filename` is touched,
    /// so a failing call leaves an existing file as it was.
    /// Exceeding the time limit ends training early
    /// through [`Booster::time_out`];
    /// the hypotheses accepted so far are kept.
    pub fn run<P: AsRef<Path>>(&mut self, filename: P)
        -> Result<B::Output, BoostError>
    {
        self.booster.preprocess()?;

        let mut file = BufWriter::new(File::create(filename)?);
        writeln!(file, "{CSV_HEADER}")?;

        if !self.quiet() {
            self.banner();
        }

        let mut elapsed = Duration::ZERO;
        let mut round = 1;
        loop {
            let start = Instant::now();
            let flow = self.booster.boost(&self.weak_learner, round)?;
            elapsed += start.elapsed();

            let last = self.booster.last_round();
            let row = Row {
                round,
                error: last.map(|r| r.error),
                confidence: last.map(|r| r.confidence),
                train: self.accuracy(Some(self.train)),
                test: self.accuracy(self.test),
                elapsed,
            };
            writeln!(file, "{}", row.csv())?;

            if flow.is_break() {
                if !self.quiet() {
                    println!("{} {}\n", "[FIN]".bold().bright_green(), row.pretty());
                }
                break;
            }
            if elapsed > self.time_limit {
                self.booster.time_out(round);
                if !self.quiet() {
                    println!("{} {}\n", "[TLE]".bold().bright_red(), row.pretty());
                }
                break;
            }
            if !self.quiet() && round % self.print_every == 0 {
                println!("{} {}", "[LOG]".bold().magenta(), row.pretty());
            }
            round += 1;
        }
        file.flush()?;

        self.booster.postprocess()
    }
}


fn entry(key: &str, value: &str) -> String {
    format!("+ {:<HALF$}\t{:>HALF$}", key.bold(), value.bold().green())
}


fn details(info: Option<Vec<(&str, String)>>) -> Vec<String> {
    info.unwrap_or_default()
        .into_iter()
        .map(|(key, value)| {
            format!("    + {key:<HALF$}\t{:>w$}", value.yellow(), w = HALF - 8)
        })
        .collect()
}


fn csv_cell(value: Option<f64>) -> String {
    value.map(|v| v.to_string())
        .unwrap_or_default()
}


fn fixed(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:>CELL$.DIGITS$}"),
        None => format!("{:>CELL$}", "-"),
    }
}


// Formats `d` in a fixed width of 8 characters.
fn clock(d: Duration) -> String {
    let ms = d.as_millis();
    let (s, ms) = (ms / 1_000, ms % 1_000);
    let (m, s) = (s / 60, s % 60);
    let (h, m) = (m / 60, m % 60);
    match (h, m, s) {
        (0, 0, 0) => format!("  0.{ms:03}s"),
        (0, 0, _) => format!(" {s:02}.{ms:03}s"),
        (0, _, _) => format!(" {m:02}m {s:02}s"),
        _         => format!(" {h:02}h {m:02}m"),
    }
}
