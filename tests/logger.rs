mod common;

use std::fs;

use adaboostm1::prelude::*;

use common::*;


/// Tests for `Logger`.
#[cfg(test)]
pub mod logger_tests {
    use super::*;

    #[test]
    fn writes_one_line_per_round() {
        let sample = toy_sample();
        let booster = AdaBoostM1::init(&sample).max_rounds(8);

        let mut path = std::env::temp_dir();
        path.push(format!("adaboostm1-logger-{}.csv", std::process::id()));

        let outcome = Logger::new(booster, DecisionStump::new(), &sample)
            .test_sample(&sample)
            .print_every(usize::MAX)
            .run(&path)
            .unwrap();

        let log = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).unwrap();

        let lines = log.lines().collect::<Vec<_>>();
        assert_eq!(
            lines[0],
            "Round,WeightedError,Confidence,TrainAccuracy,TestAccuracy,Time"
        );
        assert_eq!(lines.len(), outcome.rounds().len() + 1);

        for (line, round) in lines[1..].iter().zip(outcome.rounds()) {
            let cells = line.split(',').collect::<Vec<_>>();
            assert_eq!(cells.len(), 6);
            assert_eq!(cells[0], round.round.to_string());

            let error = cells[1].parse::<f64>().unwrap();
            assert!((error - round.error).abs() < 1e-12);

            let train = cells[3].parse::<f64>().unwrap();
            assert!((0.0..=1.0).contains(&train));
            assert_eq!(cells[3], cells[4]);
        }
    }


    #[test]
    fn aborted_run_leaves_accuracy_blank() {
        let sample = toy_sample();
        let booster = AdaBoostM1::init(&sample).max_rounds(8);

        let mut path = std::env::temp_dir();
        path.push(format!("adaboostm1-logger-abort-{}.csv", std::process::id()));

        let outcome = Logger::new(booster, ConstantLearner(BAD), &sample)
            .print_every(usize::MAX)
            .run(&path)
            .unwrap();
        assert!(!outcome.is_trained());

        let log = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).unwrap();

        let lines = log.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 2);

        let cells = lines[1].split(',').collect::<Vec<_>>();
        assert_eq!(cells[0], "1");
        assert_eq!(cells[3], "");
        assert_eq!(cells[4], "");
    }


    #[test]
    fn time_limit_stops_training() {
        let sample = three_classes();
        let booster = AdaBoostM1::init(&sample).max_rounds(1_000);

        let mut path = std::env::temp_dir();
        path.push(format!("adaboostm1-logger-tle-{}.csv", std::process::id()));

        let outcome = Logger::new(booster, DecisionStump::new(), &sample)
            .time_limit_as_millis(0)
            .print_every(usize::MAX)
            .run(&path)
            .unwrap();

        let log = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).unwrap();

        let n_rounds = outcome.rounds().len();
        assert!(outcome.is_trained());
        assert!(n_rounds < 1_000);
        assert_eq!(outcome.stop(), StopReason::TimeLimit { round: n_rounds });
        assert_eq!(log.lines().count(), n_rounds + 1);
    }


    #[test]
    fn failed_run_keeps_existing_log() {
        let sample = toy_sample();
        let booster = AdaBoostM1::init(&sample).max_rounds(3);

        let mut path = std::env::temp_dir();
        path.push(format!("adaboostm1-logger-rerun-{}.csv", std::process::id()));

        let mut logger = Logger::new(booster, AgeStump, &sample)
            .print_every(usize::MAX);
        logger.run(&path).unwrap();
        let before = fs::read_to_string(&path).unwrap();

        let result = logger.run(&path);
        assert!(matches!(result, Err(BoostError::AlreadyTrained)));
        let after = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(before, after);

        // Invalid settings never create the file.
        let mut path = std::env::temp_dir();
        path.push(format!("adaboostm1-logger-invalid-{}.csv", std::process::id()));

        let booster = AdaBoostM1::init(&sample).max_rounds(0);
        let result = Logger::new(booster, AgeStump, &sample)
            .print_every(usize::MAX)
            .run(&path);
        assert!(matches!(result, Err(BoostError::InvalidArgument(_))));
        assert!(!path.exists());
    }
}
