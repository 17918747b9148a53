use crate::graph::algos::Algorithm;

/// Work counters collected during one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Full edge passes (Bellman-Ford) or vertices visited (others)
    pub passes: usize,
    /// Calls to the relaxation step
    pub relaxations: usize,
    /// Relaxations that lowered a distance
    pub improvements: usize,
    /// Entries pushed onto the priority queue
    pub heap_pushes: usize,
    /// Superseded queue entries skipped on pop
    pub stale_pops: usize,
}

impl RunStats {
    /// Count one relaxation and whether it improved its target
    pub fn record_relaxation(&mut self, improved: bool) {
        self.relaxations += 1;
        if improved {
            self.improvements += 1;
        }
    }

    pub fn log(&self, algorithm: Algorithm) {
        tracing::debug!(
            algorithm = %algorithm,
            passes = self.passes,
            relaxations = self.relaxations,
            improvements = self.improvements,
            heap_pushes = self.heap_pushes,
            stale_pops = self.stale_pops,
            "run_stats"
        );
    }
}
