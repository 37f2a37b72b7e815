use std::time::Instant;

/// 阶段耗时 Guard：drop 时记录 elapsed_ms
///
/// 使用方式：
/// ```ignore
/// let _perf = bpr_agent::perf::StageGuard::new("summarize");
/// // do work...
/// ```
pub struct StageGuard {
    stage: &'static str,
    start: Instant,
}

impl StageGuard {
    pub fn new(stage: &'static str) -> Self {
        Self {
            stage,
            start: Instant::now(),
        }
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}

impl Drop for StageGuard {
    fn drop(&mut self) {
        tracing::info!(
            target: "perf",
            stage = self.stage,
            elapsed_ms = self.elapsed_ms(),
            "done"
        );
    }
}
