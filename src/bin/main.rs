use std::env;
use std::path::Path;
use std::process;

use colored::Colorize;
use shapebox::{logging, BoxConfig, BoxError, Circle, ConfigError, ShapeBox, Square, Triangle};

fn load_config() -> Result<BoxConfig, ConfigError> {
    let config = match env::args().nth(1) {
        Some(path) => BoxConfig::load(Path::new(&path))?,
        None => BoxConfig::default(),
    };
    config.apply_env()
}

fn report<T: std::fmt::Display>(step: &str, outcome: Result<T, BoxError>) {
    match outcome {
        Ok(value) => println!("{} {step}: {value}", "✓".green()),
        Err(err) => println!("{} {step}: {err}", "✗".yellow()),
    }
}

fn print_contents(shape_box: &ShapeBox) {
    let listing = shape_box
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    println!(
        "  [{listing}] ({}/{} used)",
        shape_box.len(),
        shape_box.capacity()
    );
}

fn main() {
    let config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            process::exit(1);
        }
    };
    logging::init(&config.log_filter);
    tracing::info!(capacity = config.capacity, "starting shape box demo");

    let mut shape_box = config.build_box();

    report("add Circle(r=2)", shape_box.add_shape(Circle::new(2.0)).map(|_| "ok"));
    report("add Square(side=4)", shape_box.add_shape(Square::new(4.0)).map(|_| "ok"));
    report("add Circle(r=1)", shape_box.add_shape(Circle::new(1.0)).map(|_| "ok"));
    report("add Triangle(side=3)", shape_box.add_shape(Triangle::new(3.0)).map(|_| "ok"));
    print_contents(&shape_box);

    println!("  sum of perimeters: {:.3}", shape_box.sum_perimeter());
    println!("  sum of areas:      {:.3}", shape_box.sum_area());

    report("get #1", shape_box.get_by_index(1));
    report("get #-1", shape_box.get_by_index(-1));

    report("remove all circles", shape_box.remove_all_circles());
    print_contents(&shape_box);
    report("remove all circles again", shape_box.remove_all_circles());
}
