//! Basic usage example for cypherlink.
//!
//! Runs the same statements over HTTP and Bolt and prints the rows.

use cypherlink::{create, Credentials, Statement, Transport};
use std::error::Error;

const HTTP_URL: &str = "http://localhost:7474";
const BOLT_URL: &str = "bolt://localhost:7687";
const USER: &str = "neo4j";
const PASSWORD: &str = "pword";

/// Creates a transport for the given URL; the scheme picks HTTP or Bolt.
fn example_transport(url: &str) -> Result<Box<dyn Transport>, Box<dyn Error>> {
    let transport = create(url, Some(Credentials::new(USER, PASSWORD)))?;
    Ok(transport)
}

/// Runs a literal statement and returns the row count.
async fn example_simple_return(transport: &dyn Transport) -> Result<usize, Box<dyn Error>> {
    let results = transport.query("RETURN 1 + 1 AS two").await?;
    if let Some(record) = results.first() {
        println!("  two = {:?}", record.get("two"));
    }
    Ok(results.len())
}

/// Runs a parameterized statement and prints each row as JSON.
async fn example_parameters(transport: &dyn Transport) -> Result<usize, Box<dyn Error>> {
    let statement = Statement::new("UNWIND $names AS name RETURN name, size(name) AS len")
        .with_parameter("names", serde_json::json!(["Alice", "Bob", "Charlie"]));

    let results = transport.run(&statement).await?;
    for record in &results {
        println!("  {}", serde_json::to_string(record)?);
    }
    Ok(results.len())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    for url in [HTTP_URL, BOLT_URL] {
        let transport = example_transport(url)?;
        println!("Using {} transport at {}", transport.scheme(), url);

        let rows = example_simple_return(transport.as_ref()).await?;
        println!("Simple return: {} row(s)", rows);

        let rows = example_parameters(transport.as_ref()).await?;
        println!("Parameters: {} row(s)", rows);
    }

    println!("Done");
    Ok(())
}
