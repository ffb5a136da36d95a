//! wgraph CLI: load a weighted edge list and run graph queries against it

use anyhow::Context;
use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use serde::Serialize;
use serde_json::{json, Value};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use wgraph::{path_cost, EdgeListReader, Graph, GraphConfig};

#[derive(Parser)]
#[command(name = "wgraph", version, about = "Query a weighted undirected edge list")]
struct Cli {
    /// Edge list file (source,target,weight per line)
    #[arg(short, long, env = "WGRAPH_EDGES")]
    edges: PathBuf,

    /// YAML file with reader settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Field delimiter (overrides the config file)
    #[arg(long, global = true)]
    delimiter: Option<char>,

    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Subcommand)]
enum Commands {
    /// Node, edge and degree counts
    Stats,
    /// List every node label in load order
    Nodes,
    /// List the neighbors of a node
    Neighbors { label: String },
    /// Weight of the first edge between two nodes
    Weight { from: String, to: String },
    /// Fewest-hop path between two nodes
    Path { from: String, to: String },
    /// Minimum-weight path between two nodes
    WeightedPath { from: String, to: String },
    /// Connected components using edges with weight <= threshold
    Components { threshold: f64 },
    /// Smallest threshold that connects two nodes
    Threshold { from: String, to: String },
    /// Start an interactive REPL over the loaded graph
    Shell,
}

/// Tabular query output shared by every format
#[derive(Serialize)]
struct QueryOutput {
    columns: Vec<String>,
    records: Vec<Vec<Value>>,
}

impl QueryOutput {
    fn new(columns: &[&str]) -> Self {
        QueryOutput {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            records: Vec::new(),
        }
    }

    fn single(column: &str, value: Value) -> Self {
        let mut out = Self::new(&[column]);
        out.records.push(vec![value]);
        out
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => GraphConfig::from_yaml_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => GraphConfig::default(),
    };
    if let Some(delimiter) = cli.delimiter {
        config = config.with_delimiter(delimiter);
        config.validate()?;
    }
    debug!("Reader config: {:?}", config);

    let graph = EdgeListReader::new(config)
        .read_path(&cli.edges)
        .with_context(|| format!("loading edge list {}", cli.edges.display()))?;

    match cli.command {
        Commands::Shell => run_shell(&graph, &cli.format),
        command => {
            let output = execute(&graph, &command)?;
            print_output(&output, &cli.format)
        }
    }
}

fn execute(graph: &Graph, command: &Commands) -> anyhow::Result<QueryOutput> {
    let output = match command {
        Commands::Stats => {
            let stats = graph.statistics();
            let mut out = QueryOutput::new(&["metric", "value"]);
            out.records.push(vec![json!("nodes"), json!(stats.node_count)]);
            out.records.push(vec![json!("edges"), json!(stats.edge_count)]);
            out.records.push(vec![json!("self_loops"), json!(stats.self_loop_count)]);
            out.records.push(vec![json!("max_degree"), json!(stats.max_degree)]);
            out.records.push(vec![json!("avg_degree"), json!(stats.avg_degree)]);
            out
        }
        Commands::Nodes => {
            let mut out = QueryOutput::new(&["node"]);
            out.records = graph.nodes().into_iter().map(|n| vec![json!(n)]).collect();
            out
        }
        Commands::Neighbors { label } => {
            let mut out = QueryOutput::new(&["neighbor", "weight"]);
            out.records = graph
                .weighted_neighbors(label)
                .into_iter()
                .map(|(n, weight)| vec![json!(n), json!(weight)])
                .collect();
            out
        }
        Commands::Weight { from, to } => QueryOutput::single("weight", json!(graph.edge_weight(from, to))),
        Commands::Path { from, to } => {
            let mut out = QueryOutput::new(&["step", "node"]);
            out.records = graph
                .shortest_path_unweighted(from, to)
                .into_iter()
                .enumerate()
                .map(|(i, n)| vec![json!(i), json!(n)])
                .collect();
            out
        }
        Commands::WeightedPath { from, to } => {
            let path = graph.shortest_path_weighted(from, to);
            let mut out = QueryOutput::new(&["from", "to", "weight", "cost"]);
            for (i, edge) in path.iter().enumerate() {
                let cost = path_cost(&path[..=i]);
                out.records.push(vec![json!(edge.from), json!(edge.to), json!(edge.weight), json!(cost)]);
            }
            out
        }
        Commands::Components { threshold } => {
            let mut out = QueryOutput::new(&["component", "size", "nodes"]);
            out.records = graph
                .connected_components(*threshold)
                .into_iter()
                .enumerate()
                .map(|(i, members)| vec![json!(i), json!(members.len()), json!(members)])
                .collect();
            out
        }
        Commands::Threshold { from, to } => {
            QueryOutput::single("threshold", json!(graph.smallest_connecting_threshold(from, to)))
        }
        Commands::Shell => anyhow::bail!("shell cannot be nested"),
    };
    Ok(output)
}

fn print_output(result: &QueryOutput, format: &OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(result)?);
        }
        OutputFormat::Csv => {
            println!("{}", result.columns.join(","));
            for row in &result.records {
                let cells: Vec<String> = row.iter().map(format_csv_value).collect();
                println!("{}", cells.join(","));
            }
        }
        OutputFormat::Table => {
            if result.records.is_empty() {
                println!("(no results)");
                return Ok(());
            }

            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(&result.columns);

            for row in &result.records {
                let cells: Vec<String> = row.iter().map(format_table_value).collect();
                table.add_row(cells);
            }

            println!("{}", table);
            println!("{} row(s)", result.records.len());
        }
    }

    Ok(())
}

/// Turn one REPL line into a subcommand, reusing the clap definitions.
fn parse_shell_command(line: &str) -> Result<Commands, clap::Error> {
    #[derive(Parser)]
    #[command(name = "wgraph", no_binary_name = true)]
    struct ShellLine {
        #[command(subcommand)]
        command: Commands,
    }

    ShellLine::try_parse_from(line.split_whitespace()).map(|l| l.command)
}

fn run_shell(graph: &Graph, format: &OutputFormat) -> anyhow::Result<()> {
    println!("wgraph interactive shell ({} nodes, {} edges)", graph.num_nodes(), graph.num_edges());
    println!("Type a command (e.g. `path A B`), :help for commands, :quit to exit.\n");

    let stdin = std::io::stdin();
    let mut line = String::new();

    loop {
        eprint!("wgraph> ");

        line.clear();
        if stdin.read_line(&mut line)? == 0 {
            break; // EOF
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match trimmed {
            ":quit" | ":exit" | ":q" => break,
            ":help" | ":h" => {
                println!("Commands:");
                println!("  stats | nodes | neighbors <label> | weight <a> <b>");
                println!("  path <a> <b> | weighted-path <a> <b>");
                println!("  components <threshold> | threshold <a> <b>");
                println!("  :quit                  Exit shell");
            }
            input => match parse_shell_command(input) {
                Ok(command) => match execute(graph, &command) {
                    Ok(output) => print_output(&output, format)?,
                    Err(e) => eprintln!("Error: {}", e),
                },
                Err(e) => eprintln!("{}", e),
            },
        }
    }

    println!("Bye!");
    Ok(())
}

fn format_table_value(v: &Value) -> String {
    match v {
        Value::Null => "null".to_string(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Array(items) => items
            .iter()
            .map(format_table_value)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(_) => serde_json::to_string(v).unwrap_or_default(),
    }
}

fn format_csv_value(v: &Value) -> String {
    match v {
        Value::Null => "".to_string(),
        Value::String(s) => quote_csv(s),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Array(items) => {
            let joined = items.iter().map(format_table_value).collect::<Vec<_>>().join(";");
            quote_csv(&joined)
        }
        Value::Object(_) => quote_csv(&serde_json::to_string(v).unwrap_or_default()),
    }
}

fn quote_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
