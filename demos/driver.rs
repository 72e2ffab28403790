use clap::Parser;
use fib_map::HashMap;
use fib_map::fnv::Fnv1aBuildHasher;

#[derive(Parser, Debug)]
struct Args {
    /// Number of generated keys inserted after the walkthrough
    #[arg(short = 'n', long = "keys", default_value_t = 1000)]
    keys: usize,

    /// Remove every nth generated key before printing statistics
    #[arg(short = 'r', long = "remove_every", default_value_t = 3)]
    remove_every: usize,
}

fn main() {
    let args = Args::parse();

    let mut map: HashMap<&str, &str, Fnv1aBuildHasher> = HashMap::new();
    map.add("world", "hello");
    map.add("hello", "world");
    println!("{}", map.get("hello"));
    map.set("hello", "myst");
    println!("{}", map.get("hello"));
    drop(map);

    println!("Inserting {} generated keys...", args.keys);
    let mut map: HashMap<String, usize, Fnv1aBuildHasher> = HashMap::new();
    for i in 0..args.keys {
        let inserted = map.add(format!("key_{i:08}"), i);
        assert!(inserted, "generated key {i} was already present");
    }
    println!(
        "Inserted {} keys into {} slots (next resize at {})",
        map.len(),
        map.capacity(),
        map.load_factor()
    );

    if args.remove_every > 0 {
        let removed = (0..args.keys)
            .step_by(args.remove_every)
            .filter(|i| map.remove(format!("key_{i:08}").as_str()))
            .count();
        println!("Removed {} keys", removed);
    }

    let hist = map.probe_histogram();
    for (distance, count) in hist.iter().enumerate() {
        println!("{:>3} | {}", distance, count);
    }
    map.debug_stats().print();
}
