//! # Kaleido CLI
//!
//! Demonstration driver for `kaleido-core`. Builds collections, prints them
//! in every traversal order, and offers a small REPL for experimenting with
//! `add`/`remove` and the six orderings.
//!
//! ```text
//! kaleido-cli demo
//! kaleido-cli show 7 15 6 1 2 --order side-cross --order middle-out
//! kaleido-cli show 7 15 6 1 2 --json
//! kaleido-cli interactive
//! ```

use std::fmt::Display;
use std::io::{self, Write};

use clap::{Parser, Subcommand};
use colored::*;
use kaleido_core::{CollectionError, MultiView, Order, Span};
use serde::Serialize;

// ─── CLI ───────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "kaleido-cli")]
#[command(about = "Insertion-ordered collection walked six ways (kaleido-core demo)")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Walk sample integer, string and float collections in every order
    Demo,
    /// Build a collection from the given integers and print selected orders
    Show {
        /// Orders to print (default: all)
        #[arg(short, long = "order")]
        orders: Vec<Order>,
        /// Emit JSON instead of formatted text
        #[arg(long)]
        json: bool,
        /// Elements, in insertion order
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
    },
    /// Interactive REPL for manual experimentation
    Interactive,
}

// ─── Pretty printing ──────────────────────────────────────────────────────

fn header(text: &str) {
    let bar = "═".repeat(60);
    println!("\n{}", bar.bright_cyan());
    println!("  {}", text.bold().bright_white());
    println!("{}", bar.bright_cyan());
}

fn section(text: &str) {
    println!("\n{} {}", "▸".bright_yellow(), text.bold());
}

fn step(text: &str) {
    println!("  {} {}", "•".bright_green(), text);
}

fn warn(text: &str) {
    println!("  {} {}", "!".bright_red(), text);
}

/// Walk a span from its start cursor to its end sentinel.
fn walk<T: Clone>(span: Span<T>) -> Vec<T> {
    let (mut it, end) = span.into_parts();
    let mut out = Vec::with_capacity(it.len());
    while it != end {
        out.push(it.get().clone());
        it.advance();
    }
    out
}

fn joined<T: Display>(items: &[T]) -> String {
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn show_order<T: Display + PartialOrd + Clone>(collection: &MultiView<T>, order: Order) {
    let label = format!("{:<12}", format!("{}:", order));
    let items = walk(collection.traverse(order));
    println!("  {} {}", label.bright_magenta(), joined(&items));
}

fn show_all<T: Display + PartialOrd + Clone>(collection: &MultiView<T>, orders: &[Order]) {
    for order in orders {
        show_order(collection, *order);
    }
}

fn show_contents<T: Display>(collection: &MultiView<T>) {
    step(&format!("Size of container: {}", collection.size()));
    step(&format!("Container contents: {}", collection));
}

fn try_remove<T: Display + PartialEq>(collection: &mut MultiView<T>, value: &T) {
    match collection.remove(value) {
        Ok(()) => step(&format!("remove({}) → {}", value, collection)),
        Err(err @ CollectionError::ElementNotFound) => {
            warn(&format!("remove({}) failed: {}", value, err));
        }
    }
}

// ─── Demo ──────────────────────────────────────────────────────────────────

fn run_demo() {
    header("DEMO — One Collection, Six Traversal Orders");

    section("Integer collection");
    let mut numbers = MultiView::new();
    for n in [7, 15, 6, 1, 2] {
        numbers.add(n);
    }
    show_contents(&numbers);
    show_all(&numbers, &Order::ALL);

    section("String collection");
    let mut words = MultiView::new();
    for w in ["dog", "cat", "bird", "fish"] {
        words.add(w.to_string());
    }
    step(&format!("Words: {}", words));
    show_order(&words, Order::Ascending);

    section("Remove every occurrence");
    let mut repeated = MultiView::new();
    for n in [10, 20, 10, 30] {
        repeated.add(n);
    }
    step(&format!("Before: {}", repeated));
    try_remove(&mut repeated, &10);
    step(&format!("Size after removal: {}", repeated.size()));
    try_remove(&mut repeated, &99);

    section("Float collection");
    let floats: MultiView<f64> = [3.5, 2.25, 1.75, 4.0].into_iter().collect();
    step(&format!("Floats: {}", floats));
    show_all(&floats, &[Order::Ascending, Order::SideCross, Order::MiddleOut]);

    section("Views are snapshots");
    let (mut it, end) = numbers.descending_order().into_parts();
    numbers.add(100);
    *it.get_mut() = -1;
    let mut detached = Vec::new();
    while it != end {
        detached.push(*it.post_advance().get());
    }
    step(&format!("Earlier descending view, first slot overwritten: {}", joined(&detached)));
    step(&format!("Collection after add(100): {}", numbers));
}

// ─── Show ──────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct OrderedView {
    order: Order,
    elements: Vec<i64>,
}

#[derive(Serialize)]
struct ShowReport<'a> {
    contents: &'a MultiView<i64>,
    size: usize,
    views: Vec<OrderedView>,
}

fn run_show(values: Vec<i64>, orders: Vec<Order>, json: bool) -> Result<(), serde_json::Error> {
    let collection: MultiView<i64> = values.into_iter().collect();
    let orders = if orders.is_empty() {
        Order::ALL.to_vec()
    } else {
        orders
    };

    if json {
        let report = ShowReport {
            contents: &collection,
            size: collection.size(),
            views: orders
                .iter()
                .map(|order| OrderedView {
                    order: *order,
                    elements: walk(collection.traverse(*order)),
                })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    header("SHOW");
    show_contents(&collection);
    show_all(&collection, &orders);
    Ok(())
}

// ─── Interactive REPL ──────────────────────────────────────────────────────

fn print_help() {
    println!();
    println!("  {}", "Commands:".bold().underline());
    println!("    {} <n>...                 Append elements", "add".bright_cyan());
    println!("    {} <n>                 Remove every occurrence of n", "remove".bright_cyan());
    println!("    {} [order]               Print one order, or all", "show".bright_cyan());
    println!("    {}                       Print size and contents", "size".bright_cyan());
    println!("    {}                       Exit", "quit".bright_cyan());
    println!();
}

fn run_interactive() {
    header("INTERACTIVE REPL — Kaleido Multi-View Collection");
    print_help();

    let mut collection: MultiView<i64> = MultiView::new();

    loop {
        print!("{}", "kaleido> ".bright_cyan().bold());
        if io::stdout().flush().is_err() {
            break;
        }

        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() || input.is_empty() {
            break;
        }
        let parts: Vec<&str> = input.split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }

        match parts[0] {
            "add" | "a" => {
                if parts.len() < 2 {
                    warn("Usage: add <n>...");
                    continue;
                }
                for raw in &parts[1..] {
                    match raw.parse::<i64>() {
                        Ok(n) => collection.add(n),
                        Err(_) => warn(&format!("Not an integer: '{}'", raw)),
                    }
                }
                step(&format!("{}", collection));
            }

            "remove" | "rm" => {
                match parts.get(1).map(|raw| raw.parse::<i64>()) {
                    Some(Ok(n)) => try_remove(&mut collection, &n),
                    Some(Err(_)) => warn(&format!("Not an integer: '{}'", parts[1])),
                    None => warn("Usage: remove <n>"),
                }
            }

            "show" | "s" => match parts.get(1) {
                None => show_all(&collection, &Order::ALL),
                Some(name) => match name.parse::<Order>() {
                    Ok(order) => show_order(&collection, order),
                    Err(err) => warn(&err.to_string()),
                },
            },

            "size" | "ls" => show_contents(&collection),

            "quit" | "exit" | "q" => {
                println!("  {}", "Goodbye!".dimmed());
                break;
            }

            "help" | "h" | "?" => print_help(),

            other => {
                println!(
                    "  {} Unknown command '{}' — type 'help'",
                    "?".bright_yellow(),
                    other
                );
            }
        }
    }
}

// ─── Entry point ───────────────────────────────────────────────────────────

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    tracing::debug!("starting kaleido-cli");

    match cli.command {
        Commands::Demo => run_demo(),
        Commands::Show {
            orders,
            json,
            values,
        } => {
            if let Err(err) = run_show(values, orders, json) {
                eprintln!("{} {}", "error:".bright_red().bold(), err);
                std::process::exit(1);
            }
        }
        Commands::Interactive => run_interactive(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_orders_and_negative_values() {
        let cli = Cli::try_parse_from([
            "kaleido-cli",
            "show",
            "--order",
            "asc",
            "-o",
            "middle-out",
            "5",
            "-3",
            "9",
        ])
        .unwrap();

        match cli.command {
            Commands::Show {
                orders,
                json,
                values,
            } => {
                assert_eq!(orders, vec![Order::Ascending, Order::MiddleOut]);
                assert!(!json);
                assert_eq!(values, vec![5, -3, 9]);
            }
            _ => panic!("expected show"),
        }
    }

    #[test]
    fn unknown_order_is_rejected() {
        assert!(Cli::try_parse_from(["kaleido-cli", "show", "--order", "zigzag", "1"]).is_err());
    }

    #[test]
    fn walk_and_join() {
        let c: MultiView<i32> = [7, 15, 6, 1, 2].into_iter().collect();
        assert_eq!(joined(&walk(c.side_cross_order())), "1 15 2 7 6");
    }

    #[test]
    fn report_serializes_orders_by_name() {
        let collection: MultiView<i64> = [3, 1, 2].into_iter().collect();
        let report = ShowReport {
            contents: &collection,
            size: collection.size(),
            views: vec![OrderedView {
                order: Order::SideCross,
                elements: walk(collection.side_cross_order()),
            }],
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["contents"], serde_json::json!([3, 1, 2]));
        assert_eq!(json["views"][0]["order"], "side-cross");
        assert_eq!(json["views"][0]["elements"], serde_json::json!([1, 3, 2]));
    }
}
