//! Shortest path queries over a JSON graph file.

use std::cmp::Ordering;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use std::rc::Rc;

use anyhow::Error;
use clap::{Parser, Subcommand};
use log::info;

use maglev_model::{BasicEdge, BasicGraph, Edge, NodeSet};
use maglev_search::{AltSearch, Dijkstra, GreedyFarthestLandmarks, LandmarkProvider, RandomLandmarks, ShortestPathComputation};

use self::config::{Algorithm, Config};
use self::graph_file::GraphFile;

mod config;
mod errors;
mod graph_file;

type Graph = BasicGraph<String>;

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    let opts: Opts = Opts::parse();
    let config = Config::load(opts.config.as_deref())?.merge(opts.overrides());

    let graph_path = config.graph.clone().ok_or(errors::Error::NoGraph)?;
    let graph = GraphFile::load(&graph_path)?.into_graph()?;
    info!("Loaded graph [{}] with {} nodes and {} edges", graph_path.display(), graph.node_count(), graph.edge_count());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match opts.cmd {
        Command::Landmarks { amount, random } => {
            let landmarks = if random {
                RandomLandmarks::new(&graph, config.seed()).landmarks(amount)
            } else {
                GreedyFarthestLandmarks::new(&graph, config.seed()).landmarks(amount)
            };
            for landmark in landmarks {
                writeln!(out, "{}", landmark)?;
            }
        }
        query => match config.algorithm() {
            Algorithm::Dijkstra => answer(&Dijkstra::new(&graph), &graph, query, &mut out)?,
            Algorithm::Alt => {
                let provider = GreedyFarthestLandmarks::new(&graph, config.seed());
                let alt = AltSearch::with_landmarks(&graph, &provider, config.landmarks());
                answer(&alt, &graph, query, &mut out)?
            }
        },
    }
    Ok(())
}

/// Shortest path queries over a JSON graph file.
#[derive(Parser)]
#[clap(version = "0.1.0", author = "The maglev developers")]
struct Opts {
    /// Config file path (default `./maglev.json` if present)
    #[clap(long = "config")]
    config: Option<PathBuf>,

    /// Graph file path
    #[clap(long = "graph")]
    graph: Option<PathBuf>,

    /// Search algorithm, `dijkstra` (default) or `alt`
    #[clap(long = "algorithm")]
    algorithm: Option<Algorithm>,

    /// Number of landmarks used by `alt` (default 8)
    #[clap(long = "landmarks")]
    landmarks: Option<usize>,

    /// Seed of the landmark selection
    #[clap(long = "seed")]
    seed: Option<u64>,

    #[clap(subcommand)]
    cmd: Command,
}

impl Opts {
    fn overrides(&self) -> Config {
        Config {
            graph: self.graph.clone(),
            algorithm: self.algorithm,
            landmarks: self.landmarks,
            seed: self.seed,
        }
    }
}

#[derive(Subcommand, Clone, PartialEq, Debug)]
enum Command {
    /// Shortest path from the closest source to the destination
    Path {
        #[clap(long = "from", required = true)]
        from: Vec<String>,
        #[clap(long = "to")]
        to: String,
    },

    /// Cost of the shortest path, without the path
    Cost {
        #[clap(long = "from", required = true)]
        from: Vec<String>,
        #[clap(long = "to")]
        to: String,
    },

    /// Nodes settled while searching for the destination
    Space {
        #[clap(long = "from", required = true)]
        from: Vec<String>,
        #[clap(long = "to")]
        to: String,
    },

    /// Costs of all nodes reachable from the sources
    Reachable {
        #[clap(long = "from", required = true)]
        from: Vec<String>,
    },

    /// Select landmarks
    Landmarks {
        amount: usize,
        /// Random instead of farthest landmarks
        #[clap(long = "random")]
        random: bool,
    },
}

fn known_node(graph: &Graph, node: &str) -> Result<String, errors::Error> {
    if graph.contains_node(&node.to_string()) {
        Ok(node.to_string())
    } else {
        Err(errors::Error::UnknownNode(node.to_string()))
    }
}

fn known_nodes(graph: &Graph, nodes: &[String]) -> Result<Vec<String>, errors::Error> {
    nodes.iter().map(|n| known_node(graph, n)).collect()
}

fn answer<C, W>(search: &C, graph: &Graph, query: Command, out: &mut W) -> Result<(), Error>
where
    C: ShortestPathComputation<String, Rc<BasicEdge<String>>>,
    W: Write,
{
    match query {
        Command::Path { from, to } => {
            let (sources, destination) = (known_nodes(graph, &from)?, known_node(graph, &to)?);
            match search.compute_shortest_path(&sources, &destination) {
                Some(path) => {
                    for hop in &path {
                        writeln!(out, "{} -({})-> {}", hop.edge().source(), hop.cost(), hop.edge().destination())?;
                    }
                    writeln!(out, "total cost: {}", path.total_cost())?;
                }
                None => writeln!(out, "no path to {}", destination)?,
            }
        }
        Command::Cost { from, to } => {
            let (sources, destination) = (known_nodes(graph, &from)?, known_node(graph, &to)?);
            match search.compute_shortest_path_cost(&sources, &destination) {
                Some(cost) => writeln!(out, "{}", cost)?,
                None => writeln!(out, "unreachable")?,
            }
        }
        Command::Space { from, to } => {
            let (sources, destination) = (known_nodes(graph, &from)?, known_node(graph, &to)?);
            let mut space = search.compute_search_space(&sources, &destination).into_iter().collect::<Vec<_>>();
            space.sort();
            for node in space {
                writeln!(out, "{}", node)?;
            }
        }
        Command::Reachable { from } => {
            let sources = known_nodes(graph, &from)?;
            let mut costs = search
                .compute_shortest_path_costs_reachable(&sources)
                .into_iter()
                .map(|(node, d)| (node, d.tentative_distance()))
                .collect::<Vec<_>>();
            costs.sort_by(|(n1, c1), (n2, c2)| c1.partial_cmp(c2).unwrap_or(Ordering::Equal).then_with(|| n1.cmp(n2)));
            for (node, cost) in costs {
                writeln!(out, "{}\t{}", node, cost)?;
            }
        }
        Command::Landmarks { .. } => unreachable!("landmarks are not a search query"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph() -> Graph {
        GraphFile::parse(
            r#"{
                "nodes": ["D"],
                "edges": [
                    { "source": "A", "destination": "B", "cost": 1 },
                    { "source": "B", "destination": "C", "cost": 2 },
                    { "source": "A", "destination": "C", "cost": 4 }
                ]
            }"#,
        )
        .expect("valid graph file")
        .into_graph()
        .expect("valid graph")
    }

    fn run_query(query: Command) -> String {
        let g = graph();
        let mut out = Vec::new();
        answer(&Dijkstra::new(&g), &g, query, &mut out).expect("query failed");
        String::from_utf8(out).expect("utf8 output")
    }

    fn strings(s: &[&str]) -> Vec<String> {
        s.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_path_query() {
        let out = run_query(Command::Path { from: strings(&["A"]), to: "C".to_string() });
        assert_eq!(out, "A -(1)-> B\nB -(2)-> C\ntotal cost: 3\n");

        let out = run_query(Command::Path { from: strings(&["A"]), to: "D".to_string() });
        assert_eq!(out, "no path to D\n");
    }

    #[test]
    fn test_cost_and_space_queries() {
        assert_eq!(run_query(Command::Cost { from: strings(&["A", "B"]), to: "C".to_string() }), "2\n");
        assert_eq!(run_query(Command::Cost { from: strings(&["C"]), to: "A".to_string() }), "unreachable\n");
        assert_eq!(run_query(Command::Space { from: strings(&["A"]), to: "B".to_string() }), "A\nB\n");
    }

    #[test]
    fn test_reachable_query() {
        assert_eq!(run_query(Command::Reachable { from: strings(&["A"]) }), "A\t0\nB\t1\nC\t3\n");
    }

    #[test]
    fn test_alt_answers_like_dijkstra() {
        let g = graph();
        let provider = GreedyFarthestLandmarks::new(&g, 0);
        let alt = AltSearch::with_landmarks(&g, &provider, 2);
        let mut out = Vec::new();
        let query = Command::Path { from: strings(&["A"]), to: "C".to_string() };
        answer(&alt, &g, query, &mut out).expect("query failed");
        assert_eq!(String::from_utf8(out).expect("utf8 output"), "A -(1)-> B\nB -(2)-> C\ntotal cost: 3\n");
    }

    #[test]
    fn test_unknown_node() {
        let g = graph();
        let mut out = Vec::new();
        let query = Command::Cost { from: strings(&["A"]), to: "Z".to_string() };
        let err = answer(&Dijkstra::new(&g), &g, query, &mut out).expect_err("unknown node must fail");
        assert_eq!(err.to_string(), "Unknown node [Z]");
    }

    #[test]
    fn test_parse_command_line() {
        let opts = Opts::try_parse_from(&["maglev-route", "--graph", "g.json", "--algorithm", "alt", "path", "--from", "A", "--from", "B", "--to", "C"])
            .expect("valid command line");
        assert_eq!(opts.overrides().algorithm, Some(Algorithm::Alt));
        assert_eq!(opts.overrides().graph, Some(PathBuf::from("g.json")));
        assert_eq!(opts.cmd, Command::Path { from: strings(&["A", "B"]), to: "C".to_string() });

        assert!(Opts::try_parse_from(&["maglev-route", "--algorithm", "bfs", "cost", "--from", "A", "--to", "B"]).is_err());
        assert!(Opts::try_parse_from(&["maglev-route", "path", "--to", "B"]).is_err());
    }
}
