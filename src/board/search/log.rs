use super::MoveSource;

/// Summary of one completed search call.
#[derive(Clone, Debug)]
pub struct SearchInfo {
    pub depth: u32,
    pub score: Option<i32>,
    pub nodes: u64,
    pub cutoffs: u64,
    pub time_ms: u128,
    pub best: String,
    pub source: MoveSource,
}

pub trait SearchLogger: Send {
    fn info(&self, info: &SearchInfo);
}

/// Forwards search summaries to the `log` facade at debug level.
pub struct LogSearchLogger;

impl SearchLogger for LogSearchLogger {
    fn info(&self, info: &SearchInfo) {
        log::debug!(
            "search depth {} source {:?} score {} nodes {} cutoffs {} time {}ms best {}",
            info.depth,
            info.source,
            info.score.map_or_else(|| "-".to_string(), |s| s.to_string()),
            info.nodes,
            info.cutoffs,
            info.time_ms,
            info.best
        );
    }
}

/// Prints one `info` line per search to stdout.
pub struct StdoutLogger;

impl SearchLogger for StdoutLogger {
    fn info(&self, info: &SearchInfo) {
        println!(
            "info depth {} score {} nodes {} cutoffs {} time {} best {}",
            info.depth,
            info.score.map_or_else(|| "-".to_string(), |s| s.to_string()),
            info.nodes,
            info.cutoffs,
            info.time_ms,
            info.best
        );
    }
}
