//! Background worker for batch jobs
//!
//! Each job runs on its own thread and streams progress over an mpsc
//! channel, so the calling thread stays free to redraw. `Complete` is
//! always the last message of a job.

use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread::JoinHandle;
use tracing::debug;

use crate::batch::{self, BatchSummary, DeleteSummary, StatusSink};
use crate::lod::LodPlan;

/// Progress messages sent from the worker thread
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProgressUpdate {
    /// Status line to display
    Status(String),
    /// Job finished; no further messages follow
    Complete,
}

/// Work a worker thread can run
#[derive(Debug, Clone)]
pub enum Job {
    Generate { folder: PathBuf, plan: LodPlan },
    Delete { folder: PathBuf },
}

/// Summary returned by the worker thread
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobSummary {
    Generate(BatchSummary),
    Delete(DeleteSummary),
}

/// Sink that forwards into a progress channel
pub struct ChannelSink {
    tx: Sender<ProgressUpdate>,
}

impl ChannelSink {
    pub fn new(tx: Sender<ProgressUpdate>) -> Self {
        Self { tx }
    }
}

impl StatusSink for ChannelSink {
    fn status(&mut self, line: String) {
        // Receiver gone means nobody is listening anymore; keep working
        let _ = self.tx.send(ProgressUpdate::Status(line));
    }

    fn complete(&mut self) {
        let _ = self.tx.send(ProgressUpdate::Complete);
    }
}

/// Handle to a running job
pub struct JobHandle {
    pub updates: Receiver<ProgressUpdate>,
    thread: JoinHandle<JobSummary>,
}

impl JobHandle {
    /// Wait for the worker and return its summary
    pub fn join(self) -> anyhow::Result<JobSummary> {
        self.thread
            .join()
            .map_err(|_| anyhow::anyhow!("Worker thread panicked"))
    }
}

/// Run `job` on a new thread, forwarding progress into `tx`
pub fn spawn_with_sender(job: Job, tx: Sender<ProgressUpdate>) -> JoinHandle<JobSummary> {
    std::thread::spawn(move || {
        let mut sink = ChannelSink::new(tx);
        match job {
            Job::Generate { folder, plan } => {
                debug!("Worker generating LODs in {}", folder.display());
                JobSummary::Generate(batch::process_folder(&folder, &plan, &mut sink))
            }
            Job::Delete { folder } => {
                debug!("Worker deleting LODs in {}", folder.display());
                JobSummary::Delete(batch::delete_lods_in_folder(&folder, &mut sink))
            }
        }
    })
}

/// Run `job` on a new thread with its own progress channel
pub fn spawn(job: Job) -> JobHandle {
    let (tx, rx) = channel();
    let thread = spawn_with_sender(job, tx);
    JobHandle {
        updates: rx,
        thread,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lod::LodSize;
    use image::{Rgba, RgbaImage};
    use tempfile::TempDir;

    fn drain(handle: &JobHandle) -> Vec<ProgressUpdate> {
        handle.updates.iter().collect()
    }

    #[test]
    fn test_generate_job_completes_once_and_last() {
        let dir = TempDir::new().unwrap();
        RgbaImage::from_pixel(32, 32, Rgba([1, 2, 3, 255]))
            .save(dir.path().join("tile.png"))
            .unwrap();

        let handle = spawn(Job::Generate {
            folder: dir.path().to_path_buf(),
            plan: LodPlan::configurable(vec![LodSize::square(16)], true),
        });
        let updates = drain(&handle);
        let summary = handle.join().unwrap();

        let completes = updates.iter().filter(|u| **u == ProgressUpdate::Complete).count();
        assert_eq!(completes, 1);
        assert_eq!(updates.last(), Some(&ProgressUpdate::Complete));
        match summary {
            JobSummary::Generate(s) => assert_eq!(s.lods_created, 1),
            other => panic!("unexpected summary: {:?}", other),
        }
        assert!(dir.path().join("tile_LOD1.png").exists());
    }

    #[test]
    fn test_delete_job_on_empty_folder() {
        let dir = TempDir::new().unwrap();
        let handle = spawn(Job::Delete {
            folder: dir.path().to_path_buf(),
        });
        let updates = drain(&handle);

        assert_eq!(
            updates,
            vec![
                ProgressUpdate::Status(batch::NO_FILES_FOUND.to_string()),
                ProgressUpdate::Complete,
            ]
        );
        assert_eq!(
            handle.join().unwrap(),
            JobSummary::Delete(DeleteSummary::default())
        );
    }
}
