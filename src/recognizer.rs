use std::thread;

use crossbeam_channel::{Receiver, Sender};

use crate::{
    classifier::classify,
    config::RecognizerConfig,
    landmark::{HandPose, PoseError},
    types::{Classification, LandmarkFrame, LetterResult},
};

/// Spawns the worker that turns landmark frames into letter results.
///
/// The thread exits once the frame channel is disconnected and drained, or
/// when the result receiver is dropped.
pub fn start_recognizer(
    config: &RecognizerConfig,
    frame_rx: Receiver<LandmarkFrame>,
    result_tx: Sender<LetterResult>,
) -> thread::JoinHandle<()> {
    let drop_stale_frames = config.drop_stale_frames;
    log::info!("starting letter recognizer (drop stale frames: {drop_stale_frames})");

    thread::spawn(move || run_worker_loop(drop_stale_frames, frame_rx, result_tx))
}

fn run_worker_loop(
    drop_stale_frames: bool,
    frame_rx: Receiver<LandmarkFrame>,
    result_tx: Sender<LetterResult>,
) {
    loop {
        let frame = if drop_stale_frames {
            recv_latest_frame(&frame_rx)
        } else {
            frame_rx.recv().ok()
        };
        let Some(frame) = frame else {
            break;
        };

        match build_letter_result(frame) {
            Ok(result) => {
                if result_tx.send(result).is_err() {
                    log::debug!("result receiver dropped");
                    break;
                }
            }
            Err(err) => {
                log::warn!("skipping malformed landmark frame: {err}");
            }
        }
    }

    log::info!("letter recognizer stopped");
}

pub fn recv_latest_frame(frame_rx: &Receiver<LandmarkFrame>) -> Option<LandmarkFrame> {
    let mut frame = frame_rx.recv().ok()?;
    while let Ok(newer) = frame_rx.try_recv() {
        frame = newer;
    }
    Some(frame)
}

pub fn build_letter_result(frame: LandmarkFrame) -> Result<LetterResult, PoseError> {
    let classification = match &frame.landmarks {
        Some(points) => classify(&HandPose::from_points(points)?),
        None => Classification::Unclassified,
    };

    Ok(LetterResult {
        classification,
        timestamp: frame.timestamp,
        landmarks: frame.landmarks,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Letter;
    use crossbeam_channel::{bounded, unbounded};

    fn fist_frame() -> LandmarkFrame {
        LandmarkFrame::new(Some(vec![(320.0, 240.0); 21]))
    }

    fn little_finger_frame() -> LandmarkFrame {
        let mut points = vec![(320.0, 240.0); 21];
        points[18] = (360.0, 220.0);
        points[20] = (360.0, 180.0);
        LandmarkFrame::new(Some(points))
    }

    #[test]
    fn builds_results_for_each_frame_kind() {
        let fist = build_letter_result(fist_frame()).unwrap();
        assert_eq!(fist.classification, Classification::Letter(Letter::S));
        assert_eq!(fist.display_text(), "S");

        let empty = build_letter_result(LandmarkFrame::new(None)).unwrap();
        assert_eq!(empty.classification, Classification::Unclassified);
        assert!(empty.landmarks.is_none());

        let short = LandmarkFrame::new(Some(vec![(0.0, 0.0); 5]));
        assert!(matches!(
            build_letter_result(short),
            Err(PoseError::LandmarkCount { got: 5, .. })
        ));
    }

    #[test]
    fn latest_frame_wins() {
        let (tx, rx) = unbounded();
        tx.send(fist_frame()).unwrap();
        tx.send(LandmarkFrame::new(None)).unwrap();
        tx.send(little_finger_frame()).unwrap();

        let latest = recv_latest_frame(&rx).unwrap();
        assert_eq!(latest.landmarks.map(|l| l[20]), Some((360.0, 180.0)));

        drop(tx);
        assert!(recv_latest_frame(&rx).is_none());
    }

    #[test]
    fn worker_classifies_every_frame_in_order() {
        let config = RecognizerConfig {
            drop_stale_frames: false,
            ..RecognizerConfig::default()
        };
        let (frame_tx, frame_rx) = unbounded();
        let (result_tx, result_rx) = unbounded();
        let handle = start_recognizer(&config, frame_rx, result_tx);

        frame_tx.send(fist_frame()).unwrap();
        frame_tx
            .send(LandmarkFrame::new(Some(vec![(1.0, 1.0); 20])))
            .unwrap();
        frame_tx.send(LandmarkFrame::new(None)).unwrap();
        frame_tx.send(little_finger_frame()).unwrap();
        drop(frame_tx);

        let results: Vec<Classification> = result_rx.iter().map(|r| r.classification).collect();
        handle.join().unwrap();

        assert_eq!(
            results,
            vec![
                Classification::Letter(Letter::S),
                Classification::Unclassified,
                Classification::Letter(Letter::I),
            ]
        );
    }

    #[test]
    fn worker_stops_when_results_are_dropped() {
        let (frame_tx, frame_rx) = bounded(1);
        let (result_tx, result_rx) = bounded(1);
        let handle = start_recognizer(&RecognizerConfig::default(), frame_rx, result_tx);

        drop(result_rx);
        frame_tx.send(fist_frame()).unwrap();
        handle.join().unwrap();
    }
}
