use std::env;
use std::fs;

use eyre::Result;

use pyseq_core::{contains, contains_key, enumerate, enumerate_from, product, range, zip, Range};
use pyseq_io::{argparse, print_range, wc, Granularity, Pair};
use pyseq_seq::{join, slice, split_str};

fn main() -> Result<()> {
    demo_contains();
    demo_enumerate()?;
    demo_io()?;
    demo_product()?;
    demo_range()?;
    demo_sequence()?;
    demo_zip()?;
    Ok(())
}

fn demo_contains() {
    println!("--- CONTAINMENT DEMO ---");
    let squares = vec![1, 4, 9, 16];
    if contains(&squares, &16) {
        println!("16 is a perfect square.");
    }

    let primes = [2, 3, 5, 7, 11, 13];
    if contains(&primes, &11) {
        println!("11 is a prime number.");
    }

    let ages: ahash::HashMap<&str, u32> = [("ada", 36), ("grace", 85)].into_iter().collect();
    if contains_key(&ages, &"ada") {
        println!("ada is a registered name.");
    }

    let names: ahash::HashSet<&str> = ["ada", "grace"].into_iter().collect();
    if !contains(&names, &"linus") {
        println!("linus is not contained.");
    }
}

fn demo_enumerate() -> Result<()> {
    println!("\n--- ENUMERATE DEMO ---");
    let words = vec!["iterate", "over", "this", "with", "the", "index"];
    print!("Original list:\n\t");
    print_range(&words)?;

    print!("Pairs starting at 7:\n\t");
    print_range(enumerate_from(&words, 7).map(Pair::from))?;

    print!("Pairs with the default start:\n\t");
    print_range(enumerate(&words).map(Pair::from))?;
    Ok(())
}

fn demo_io() -> Result<()> {
    println!("\n--- IO DEMO ---");
    let argv = ["demo", "-42", "47", "-35", "12"].map(String::from);
    let args: Vec<i32> = argparse(argv)?;
    print!("Command line args: ");
    print_range(&args)?;

    let path = env::temp_dir().join("pyseq-demo.txt");
    fs::write(&path, "to be or not to be\nthat is the question\n")?;
    println!("Stats for {}:", path.display());
    for granularity in [
        Granularity::Characters,
        Granularity::Words,
        Granularity::Lines,
    ] {
        println!("\t{granularity:?}: {}", wc(&path, granularity)?);
    }
    fs::remove_file(&path)?;
    Ok(())
}

fn demo_product() -> Result<()> {
    println!("\n-- PRODUCT DEMO --");
    print!("Iterating over cartesian product: \"abc\" x \"123\".\n\t");
    print_range(product("abc".chars(), "123".chars()).map(Pair::from))?;

    print!("Iterating over cartesian product: \"123\" x \"abc\".\n\t");
    print_range(product("123".chars(), "abc".chars()).map(Pair::from))?;
    Ok(())
}

fn demo_range() -> Result<()> {
    println!("\n--- RANGE DEMO ---");
    print!("range(10): ");
    print_range(range(10))?;

    print!("range(-7): ");
    print_range(range(-7))?;

    print!("range(-5, 4): ");
    print_range(Range::new(-5, 4))?;

    print!("range(4, -5): ");
    print_range(Range::new(4, -5))?;
    Ok(())
}

fn demo_sequence() -> Result<()> {
    println!("\n--- SEQUENCE DEMO ---");
    let nums: Vec<i32> = range(10).into_iter().collect();

    println!("Slicing nums 0-9 inclusive.");
    print!("\tnums[-1:2:-2]: ");
    print_range(&slice(&nums, Some(-1), Some(2), Some(-2))?)?;
    print!("\tnums[3:8:2]: ");
    print_range(&slice(&nums, Some(3), Some(8), Some(2))?)?;

    let title = "watch_dogs_2";
    println!("Original string: {title}");
    let tokens = split_str(title, "_")?;
    print!("After splitting on underscore: ");
    print_range(&tokens)?;

    let restored: String = join(tokens, "**")?;
    println!("After rejoining with double star: {restored}");

    let starred = "&*watch&*dogs&*2&*";
    print!("Splitting {starred} on &*: ");
    print_range(&split_str(starred, "&*")?)?;
    Ok(())
}

fn demo_zip() -> Result<()> {
    println!("\n--- ZIP DEMO ---");
    let nums = vec![8, 6, 7, 5, 3, 0, 9];
    let phrase = "yay zippers";

    print!("Original objects:\n\t");
    print_range(&nums)?;
    println!("\t{phrase}");

    print!("Numbers then letters:\n\t");
    print_range(zip(&nums, phrase.chars()).map(Pair::from))?;

    print!("Letters then numbers:\n\t");
    print_range(zip(phrase.chars(), &nums).map(Pair::from))?;
    Ok(())
}
