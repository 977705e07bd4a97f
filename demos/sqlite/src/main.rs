use anyhow::Result;
use sqlparts::db::repository::RepositoryOptions;
use sqlparts::prelude::*;

#[derive(Record, FromRow, Clone, Debug)]
#[allow(dead_code)]
struct User {
    #[field(key = true)]
    id: Integer,
    name: String,
    email: String,
    age: Integer,
}

#[derive(Record, FromRow, Clone, Debug)]
#[allow(dead_code)]
struct Product {
    #[field(key = true)]
    id: Integer,
    product_name: String,
    price: Float,
    owner: Integer,
}

#[derive(FromRow, Debug)]
#[allow(dead_code)]
struct OwnedProduct {
    product_name: String,
    price: Float,
    name: String,
}

fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .try_init()
        .ok();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let config = Config::from_env()
        .unwrap_or_else(|_| Config::new("sqlite:file:demo?mode=memory&cache=shared"));
    let database = Database::from_config(&config).await?;

    database
        .exec(
            "CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name VARCHAR(50) NOT NULL,
                email VARCHAR(255) NOT NULL,
                age INTEGER NOT NULL DEFAULT 0
            )",
        )
        .await?;
    database
        .exec(
            "CREATE TABLE IF NOT EXISTS products (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                product_name VARCHAR(50) NOT NULL,
                price REAL NOT NULL,
                owner INTEGER NOT NULL REFERENCES users(id)
            )",
        )
        .await?;

    let options = RepositoryOptions::from(&config);
    let users = Repository::<User>::new(database.clone(), "users").with_options(options);
    let products = Repository::<Product>::new(database.clone(), "products").with_options(options);

    let joe = users
        .create(params!(name = "joe", email = "joe@example.com", age = 19))
        .await?;
    users
        .create(params!(name = "ann", email = "ann@example.com", age = 17))
        .await?;
    tracing::info!(?joe, "created user");

    let adults = users
        .find(params!("age>=" => 18), &FindParams::default())
        .await?;
    tracing::info!(count = adults.len(), "adults");

    products
        .create(params!(product_name = "tomato", price = 1000.0, owner = joe.id))
        .await?;

    users
        .update(params!(id = joe.id), params!(email = "joseph@example.com"))
        .await?;
    let joe = users.find_by_id(joe.id).await?;
    tracing::info!(email = %joe.email, "updated user");

    let sql = database
        .builder()
        .select(["product_name", "price"])
        .from("products")
        .join(Join::inner("users", "id", "owner").fields(["name"]))
        .order(OrderBy::desc("price"))
        .limit(10, 0)
        .build();
    let owned = database.query_as::<OwnedProduct>(&sql).await?;
    tracing::info!(?owned, "products with owners");

    let removed = products.delete(params!(owner = joe.id)).await?;
    tracing::info!(removed, "deleted products");

    Ok(())
}
