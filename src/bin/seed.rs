//! Seed Tool
//!
//! Creates sample employee records through the GraphQL API.
//!
//! Run with: cargo run --bin seed --release -- --count 50 --endpoint http://localhost:4000/graphql

use std::time::Instant;

use chrono::{Days, Utc};

use employee_registry::client::{CrudApi, GraphQlClient, DEFAULT_ENDPOINT};
use employee_registry::domain::{Department, EmployeeType, NewEmployee, Title};

const FIRST_NAMES: &[&str] = &["Ada", "Alan", "Grace", "Edsger", "Barbara", "Donald", "Frances", "Ken"];
const LAST_NAMES: &[&str] = &["Lovelace", "Turing", "Hopper", "Dijkstra", "Liskov", "Knuth", "Allen", "Thompson"];

fn arg_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

fn sample(i: usize) -> NewEmployee {
    let joining = Utc::now()
        .date_naive()
        .checked_add_days(Days::new(1 + (i % 90) as u64))
        .unwrap_or_else(|| Utc::now().date_naive());

    NewEmployee {
        first_name: FIRST_NAMES[i % FIRST_NAMES.len()].to_string(),
        last_name: LAST_NAMES[(i / FIRST_NAMES.len()) % LAST_NAMES.len()].to_string(),
        age: 20 + (i % 51) as i32,
        date_of_joining: joining,
        title: Title::ALL[i % Title::ALL.len()],
        department: Department::ALL[i % Department::ALL.len()],
        employee_type: EmployeeType::ALL[i % EmployeeType::ALL.len()],
        current_status: Some(if i % 3 == 0 { 0 } else { 1 }),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let args: Vec<String> = std::env::args().collect();
    let count: usize = arg_value(&args, "--count")
        .and_then(|s| s.parse().ok())
        .unwrap_or(20);
    let endpoint = arg_value(&args, "--endpoint")
        .map(str::to_string)
        .or_else(|| std::env::var("API_ENDPOINT").ok())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    println!("Seeding {} employees into {}", count, endpoint);

    let client = GraphQlClient::new(endpoint);
    let start = Instant::now();
    let mut success_count = 0usize;

    for i in 0..count {
        match client.create_employee(&sample(i)).await {
            Ok(record) => {
                success_count += 1;
                println!("Created {} ({})", record.full_name(), record.id);
            }
            Err(e) => eprintln!("Error creating employee: {}", e),
        }
    }

    let elapsed = start.elapsed();

    println!("\n=== Seed Results ===");
    println!("Requested: {}", count);
    println!("Created: {}", success_count);
    println!("Time: {:.2}s", elapsed.as_secs_f64());

    let total = client.employee_list().await?.len();
    println!("Records now in directory: {}", total);

    Ok(())
}
