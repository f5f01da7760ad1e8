use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressIterator, ProgressStyle};
use pose_compare::{
    codec::{self, Format, SequenceFormat},
    score::{Aggregate, Scorer},
};
use std::{convert::TryFrom, io::Write, path::PathBuf};
use structopt::StructOpt;
use tracing::{debug, info, warn};
use tracing_subscriber::layer::SubscriberExt;

/// Longest sequence the capture front-end records.
const DEFAULT_MAX_FRAMES: &str = "500";

#[derive(structopt::StructOpt)]
struct Opt {
    /// Pose sequence of the reference performer.
    reference: PathBuf,

    /// Pose sequence of the learner.
    attempt: PathBuf,

    /// Input format: versioned or posenet.
    #[structopt(short, long, default_value = "versioned")]
    format: Format,

    /// Keep at most this many leading frames of each sequence.
    #[structopt(short, long, default_value = DEFAULT_MAX_FRAMES)]
    max_frames: usize,

    /// Write the versioned result to this path instead of stdout.
    #[structopt(short, long)]
    output: Option<PathBuf>,

    #[structopt(short, long, default_value = "info", env = "RUST_LOG")]
    log_level: tracing_subscriber::filter::EnvFilter,

    #[structopt(short = "-p", long)]
    show_progress: bool,

    #[structopt(flatten)]
    scorer: Scorer,
}

fn main() -> Result<()> {
    let Opt {
        reference,
        attempt,
        format,
        max_frames,
        output,
        log_level,
        show_progress,
        scorer,
    } = Opt::from_args();

    tracing::subscriber::set_global_default(
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .with(log_level),
    )?;

    scorer
        .validate()
        .context("invalid scoring configuration")?;
    debug!(
        message = "scoring configuration",
        weights = %scorer.weights,
        weight_sum = scorer.weight_sum,
        weights_total = scorer.weights.total(),
        sample_rate = scorer.sample_rate,
    );

    let reference_poses = format
        .read(&reference)
        .with_context(|| format!("failed reading reference sequence {:?}", reference))?
        .truncated(max_frames);
    let attempt_poses = format
        .read(&attempt)
        .with_context(|| format!("failed reading attempt sequence {:?}", attempt))?
        .truncated(max_frames);

    info!(
        message = "loaded pose sequences",
        %format,
        reference_frames = reference_poses.len(),
        attempt_frames = attempt_poses.len(),
    );
    if reference_poses.len() != attempt_poses.len() {
        warn!(
            message = "sequence lengths differ, trailing frames of the longer one are ignored",
            reference_frames = reference_poses.len(),
            attempt_frames = attempt_poses.len(),
        );
    }

    let frames = scorer
        .frames(&reference_poses, &attempt_poses)
        .context("failed to start scoring")?;
    let aggregate = if show_progress {
        let pb = ProgressBar::new(u64::try_from(frames.len())?).with_style(
            ProgressStyle::default_bar()
                .template("{prefix:.bold.dim} {bar:40} {pos}/{len} frames {wide_msg}"),
        );
        let aggregate = Aggregate::from_frames(frames.progress_with(pb.clone()));
        pb.finish_and_clear();
        aggregate
    } else {
        Aggregate::from_frames(frames)
    };
    let aggregate = aggregate.context("failed aggregating frame scores")?;

    if aggregate.degenerate_keypoints > 0 {
        warn!(
            message = "keypoints at the origin have no direction and were scored as zero similarity",
            degenerate_keypoints = aggregate.degenerate_keypoints,
        );
    }

    let result = scorer
        .summarize(&aggregate)
        .context("failed extracting highlights")?;
    info!(message = "comparison finished", score = %result.score);
    eprintln!("{}", result);

    match output {
        Some(path) => codec::write_result(&path, &result)
            .with_context(|| format!("failed writing result to {:?}", path))?,
        None => {
            let bytes = codec::encode_result(&result).context("failed encoding result")?;
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(&bytes)?;
            writeln!(handle)?;
        }
    }

    Ok(())
}
