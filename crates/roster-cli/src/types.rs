use std::path::PathBuf;

use roster_model::{RosterStats, StudentRecord};

#[derive(Debug)]
pub struct AssignResult {
    pub input: PathBuf,
    pub records: Vec<StudentRecord>,
    pub output: Option<PathBuf>,
}

#[derive(Debug)]
pub struct ConvertResult {
    pub input: PathBuf,
    pub output: PathBuf,
    pub record_count: usize,
}

#[derive(Debug)]
pub struct StatsResult {
    pub input: PathBuf,
    pub stats: RosterStats,
}
