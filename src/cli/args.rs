use clap::Args;
use std::path::PathBuf;

/// Where a one-shot command reads its graph from
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct GraphArgs {
    /// Edge list, e.g. "AB5, BC4, CD8"
    #[arg(long, short = 'g')]
    pub graph: Option<String>,

    /// File whose first line is the edge list
    #[arg(long)]
    pub graph_file: Option<PathBuf>,
}

#[derive(Args, Debug, Clone, Copy)]
pub struct ListArgs {
    /// Print every matching route, not only the count
    #[arg(long)]
    pub list: bool,
}
