//! Demo comparing nested maps against flat maps keyed by tuples.
//!
//! Mirrors a common reporting shape: sales figures indexed by region, year
//! and product. The nested-map version needs a map per level and a loop per
//! level; the tuple-keyed version is a single flat map with composite keys.

use std::error::Error;

use ahash::AHashMap;
use tuplekit::{named_tuple, tuple, NamedTuple, Tuple};

fn main() -> Result<(), Box<dyn Error>> {
    println!("--- Scenario 1: nested maps ---");
    nested_map_demo();

    println!("\n--- Scenario 2: flat map with Tuple keys ---");
    tuple_map_demo()?;

    println!("\n--- Scenario 3: flat map with NamedTuple keys ---");
    named_tuple_map_demo()?;

    Ok(())
}

type NestedSales = AHashMap<String, AHashMap<i64, AHashMap<String, f64>>>;

/// Region -> Year -> Product -> Sales, one map per level.
fn nested_map_demo() {
    let mut sales = NestedSales::new();
    add_nested(&mut sales, "North", 2023, "Widget A", 1500.0);
    add_nested(&mut sales, "North", 2023, "Widget B", 2000.0);
    add_nested(&mut sales, "South", 2023, "Widget A", 1200.0);
    add_nested(&mut sales, "North", 2024, "Widget A", 1800.0);

    // one loop per nesting level
    for (region, years) in &sales {
        for (year, products) in years {
            for (product, amount) in products {
                println!("Region: {region}, Year: {year}, Product: {product} -> Sales: ${amount:.2}");
            }
        }
    }
}

fn add_nested(sales: &mut NestedSales, region: &str, year: i64, product: &str, amount: f64) {
    sales
        .entry(region.to_string())
        .or_default()
        .entry(year)
        .or_default()
        .insert(product.to_string(), amount);
}

/// (Region, Year, Product) -> Sales as a single flat map.
fn tuple_map_demo() -> Result<(), Box<dyn Error>> {
    let mut sales: AHashMap<Tuple, f64> = AHashMap::new();
    sales.insert(tuple!["North", 2023, "Widget A"], 1500.0);
    sales.insert(tuple!["North", 2023, "Widget B"], 2000.0);
    sales.insert(tuple!["South", 2023, "Widget A"], 1200.0);
    sales.insert(tuple!["North", 2024, "Widget A"], 1800.0);

    for (key, amount) in &sales {
        let region: &str = key.get_as(0)?;
        let year: i64 = key.get_as(1)?;
        let product: &str = key.get_as(2)?;
        println!("Region: {region}, Year: {year}, Product: {product} -> Sales: ${amount:.2}");
    }
    Ok(())
}

/// Same flat map, with self-documenting field names on the key.
fn named_tuple_map_demo() -> Result<(), Box<dyn Error>> {
    let mut sales: AHashMap<NamedTuple, f64> = AHashMap::new();
    sales.insert(named_key("North", 2023, "Widget A"), 1500.0);
    sales.insert(named_key("North", 2023, "Widget B"), 2000.0);
    sales.insert(named_key("South", 2023, "Widget A"), 1200.0);
    sales.insert(named_key("North", 2024, "Widget A"), 1800.0);

    for (key, amount) in &sales {
        let (Some(region), Some(year), Some(product)) = (
            key.get_as::<&str>("Region")?,
            key.get_as::<i64>("Year")?,
            key.get_as::<&str>("Product")?,
        ) else {
            continue;
        };
        println!("Region: {region}, Year: {year}, Product: {product} -> Sales: ${amount:.2}");
    }
    Ok(())
}

fn named_key(region: &str, year: i64, product: &str) -> NamedTuple {
    named_tuple! {
        "Region" => region,
        "Year" => year,
        "Product" => product,
    }
}
