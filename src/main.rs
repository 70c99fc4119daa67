// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::env;
use std::rc::Rc;

use bindery::binding::{BindManager, BindType, ConverterPair, PropertyBag, Value};
use bindery::config::{load_and_validate_config, BindingRuntime, RuntimeBuilder};
use bindery::converters::ConverterRegistry;
use bindery::traits::Participant;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_target(false)
        .init();
}

fn main() {
    init_tracing();

    let args: Vec<String> = env::args().collect();

    let result = match args.len() {
        1 => run_hex_demo(),
        _ if args[1] == "--help" || args[1] == "-h" => {
            print_usage(&args[0]);
            return;
        }
        _ => run_config(&args[1], &args[2..]),
    };

    if let Err(e) = result {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn print_usage(program: &str) {
    eprintln!("Usage: {}                                    run the built-in hex demo", program);
    eprintln!("       {} <bindings.yaml|toml|json> [id.prop=value ...]", program);
    eprintln!("Example: {} configs/hex-demo.yaml mod_a.data=\"aa ff\"", program);
    eprintln!("Set RUST_LOG=debug to watch notifications propagate.");
}

/// Bind a hex text property to a bytes property, update it, unbind, update again.
fn run_hex_demo() -> Result<(), Box<dyn std::error::Error>> {
    let registry = ConverterRegistry::with_builtins();
    let mod_a = Rc::new(PropertyBag::new("mod_a").with_property("data", ""));
    let mod_b = Rc::new(PropertyBag::new("mod_b").with_property("data", Value::Bytes(vec![])));
    let provider: Participant = mod_a.clone();
    let receiver: Participant = mod_b.clone();

    let hex_to_bytes = registry
        .get("hex_to_bytes")
        .ok_or("hex_to_bytes converter is not registered")?;

    println!("🔗 Binding mod_a.data -> mod_b.data via hex_to_bytes");
    BindManager::bind(
        &provider,
        "data",
        &receiver,
        "data",
        BindType::OneWay,
        ConverterPair::forward(hex_to_bytes),
    )?;

    mod_a.set("data", "aa ff")?;
    println!("mod_b.data: {}", mod_b.get("data").unwrap_or_default());

    println!("✂️  Unbinding");
    BindManager::unbind(&provider, "data", &receiver, "data");

    mod_a.set("data", "bb ff")?;
    println!("mod_b.data: {}", mod_b.get("data").unwrap_or_default());

    Ok(())
}

fn run_config(config_file: &str, assignments: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let registry = ConverterRegistry::with_builtins();
    let config = load_and_validate_config(config_file, &registry)?;
    let runtime = RuntimeBuilder::from_config(&config, &registry)?;

    println!("📋 Configuration: {}", config_file);
    println!(
        "🔗 {} participants, {} bindings",
        config.participants.len(),
        runtime.binding_count()
    );

    for assignment in assignments {
        let (target, value) = assignment
            .split_once('=')
            .ok_or_else(|| format!("expected id.prop=value, got '{}'", assignment))?;
        let (id, property) = target
            .split_once('.')
            .ok_or_else(|| format!("expected id.prop, got '{}'", target))?;

        println!("✏️  {}.{} = \"{}\"", id, property, value);
        runtime.set(id, property, value)?;
    }

    print_state(&runtime);
    Ok(())
}

fn print_state(runtime: &BindingRuntime) {
    println!("\n📊 Participants:");
    for id in runtime.ids() {
        println!("  {}", id);
        if let Some(bag) = runtime.participant(id) {
            for (name, value) in bag.snapshot() {
                println!("     • {}: {}", name, value);
            }
        }
    }
}
