use std::{path::PathBuf, thread, time::Instant};

use anyhow::{Context, Result, bail};
use crossbeam_channel::bounded;
use sign_letters::{
    HandPose, LandmarkFrame, LetterHistory, LetterResult, RecognizerConfig, classify_batch,
    landmark_file::read_landmark_file, start_recognizer,
};

const USAGE: &str = "usage: sign-letters [--history N] [--parallel] FILE...";

struct Options {
    config: RecognizerConfig,
    parallel: bool,
    paths: Vec<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();

    let options = parse_args(std::env::args().skip(1))?;
    options.config.validate()?;
    if options.paths.is_empty() {
        bail!(USAGE);
    }

    let mut names = Vec::new();
    let mut poses = Vec::new();
    for path in &options.paths {
        let file_poses = read_landmark_file(path)?;
        log::debug!("{}: {} poses", path.display(), file_poses.len());
        for (n, pose) in file_poses.into_iter().enumerate() {
            names.push(format!("{}#{}", path.display(), n + 1));
            poses.push(pose);
        }
    }

    let results = if options.parallel {
        classify_in_parallel(&poses)
    } else {
        classify_with_worker(&options.config, &poses)?
    };

    let mut history = LetterHistory::with_capacity(options.config.history_capacity);
    for (name, result) in names.iter().zip(&results) {
        println!("{name} -> {}", result.display_text());
        history.record(result);
    }

    println!("history: {}", history.letters());
    if let Some(current) = history.current() {
        println!("current: {current}");
    }

    Ok(())
}

fn classify_with_worker(
    config: &RecognizerConfig,
    poses: &[HandPose],
) -> Result<Vec<LetterResult>> {
    let (frame_tx, frame_rx) = bounded(config.channel_capacity);
    let (result_tx, result_rx) = bounded(config.channel_capacity);
    let worker = start_recognizer(config, frame_rx, result_tx);

    let frames: Vec<LandmarkFrame> = poses
        .iter()
        .map(|pose| LandmarkFrame::new(Some(pose.to_tuples())))
        .collect();
    let producer = thread::spawn(move || {
        for frame in frames {
            if frame_tx.send(frame).is_err() {
                break;
            }
        }
    });

    let results: Vec<LetterResult> = result_rx.iter().collect();

    if producer.join().is_err() {
        bail!("landmark producer thread panicked");
    }
    if worker.join().is_err() {
        bail!("recognizer thread panicked");
    }
    if results.len() != poses.len() {
        bail!(
            "recognizer returned {} results for {} poses",
            results.len(),
            poses.len()
        );
    }

    Ok(results)
}

fn classify_in_parallel(poses: &[HandPose]) -> Vec<LetterResult> {
    let timestamp = Instant::now();
    poses
        .iter()
        .zip(classify_batch(poses))
        .map(|(pose, classification)| LetterResult {
            classification,
            timestamp,
            landmarks: Some(pose.to_tuples()),
        })
        .collect()
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Options> {
    let mut options = Options {
        config: RecognizerConfig {
            drop_stale_frames: false,
            ..RecognizerConfig::default()
        },
        parallel: false,
        paths: Vec::new(),
    };

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--history" => {
                let value = args.next().context("--history needs a value")?;
                options.config.history_capacity = value
                    .parse()
                    .with_context(|| format!("invalid history capacity `{value}`"))?;
            }
            "--parallel" => options.parallel = true,
            "-h" | "--help" => bail!(USAGE),
            flag if flag.starts_with("--") => bail!("unknown option {flag}\n{USAGE}"),
            path => options.paths.push(PathBuf::from(path)),
        }
    }

    Ok(options)
}
