use clap::Args;

/// Graph given on the command line
#[derive(Args, Debug, Clone, Default)]
pub struct GraphArgs {
    /// Directed edge as `u,v=weight` (repeatable)
    #[arg(long = "edge", short = 'e', value_name = "U,V=WEIGHT", action = clap::ArgAction::Append)]
    pub edges: Vec<String>,

    /// Vertex with no incident edges (repeatable)
    #[arg(long = "vertex", value_name = "VERTEX", action = clap::ArgAction::Append)]
    pub vertices: Vec<String>,
}
