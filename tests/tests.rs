use sqlparts::prelude::*;

#[allow(dead_code)]
async fn setup_database(name: &str) -> Database {
    let database = Database::new(&format!("sqlite:file:{name}?mode=memory&cache=shared"))
        .await
        .expect("failed to init database");

    for statement in [
        "DROP TABLE IF EXISTS users",
        "DROP TABLE IF EXISTS profiles",
        "DROP TABLE IF EXISTS tokens",
        "CREATE TABLE users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            role TEXT NOT NULL DEFAULT 'user',
            weight REAL NOT NULL DEFAULT 0
        )",
        "CREATE TABLE profiles (
            profile_id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER NOT NULL,
            bio TEXT NOT NULL
        )",
        "CREATE TABLE tokens (
            token TEXT PRIMARY KEY,
            owner INTEGER NOT NULL
        )",
    ] {
        database.exec(statement).await.expect("failed to create schema");
    }
    database
}

#[derive(Record, FromRow, Clone, Debug)]
struct User {
    #[field(key = true)]
    id: Integer,
    name: String,
    role: String,
    weight: Float,
}

#[derive(Record, FromRow, Clone, Debug)]
struct Profile {
    #[field(key = true)]
    profile_id: Integer,
    user_id: Integer,
    bio: String,
}

#[derive(Record, FromRow, Clone, Debug)]
struct Token {
    #[field(key = true, uuid = true)]
    token: String,
    owner: Integer,
}

#[derive(FromRow, Debug)]
struct UserBio {
    id: Integer,
    name: String,
    bio: String,
}

#[test]
fn test_derived_schema() {
    assert_eq!(User::COLUMNS, &["id", "name", "role", "weight"]);
    assert_eq!(User::KEY, Some("id"));
    assert!(User::UUID_COLUMNS.is_empty());

    assert_eq!(Token::COLUMNS, &["token", "owner"]);
    assert_eq!(Token::UUID_COLUMNS, &["token"]);
    assert_eq!(Profile::key_column(), "profile_id");
}

#[tokio::test]
async fn test_main() {
    let database = setup_database("main").await;
    let users = Repository::<User>::new(database.clone(), "users");

    // Create
    let john = users
        .create(params!(name = "John", weight = 80.5))
        .await
        .unwrap();
    assert_eq!(john.name, "John");
    assert_eq!(john.role, "user");
    assert_eq!(john.weight, 80.5);

    let doe = users.create(params!(name = "Doe")).await.unwrap();
    assert_ne!(john.id, doe.id);

    // Find
    let found = users.find_by_id(john.id).await.unwrap();
    assert_eq!(found.name, "John");

    let all = users
        .find(Params::new(), &FindParams::default().order(OrderBy::asc("id")))
        .await
        .unwrap();
    assert_eq!(
        all.iter().map(|u| u.name.as_str()).collect::<Vec<_>>(),
        vec!["John", "Doe"]
    );

    let heavy = users
        .find(params!("weight>" => 50.0), &FindParams::default())
        .await
        .unwrap();
    assert_eq!(heavy.len(), 1);
    assert_eq!(heavy[0].id, john.id);

    let by_ids = users
        .find(params!("id" => vec![john.id, doe.id]), &FindParams::default())
        .await
        .unwrap();
    assert_eq!(by_ids.len(), 2);

    let nobody = users
        .find(params!(name = "Nobody"), &FindParams::default())
        .await
        .unwrap();
    assert!(nobody.is_empty());

    // Update
    let affected = users
        .update(params!(id = john.id), params!(role = "admin"))
        .await
        .unwrap();
    assert_eq!(affected, 1);
    let admin = users.find_by_id(john.id).await.unwrap();
    assert_eq!(admin.role, "admin");

    // Delete
    let affected = users.delete_by_id(john.id).await.unwrap();
    assert_eq!(affected, 1);
    let err = users.find_by_id(john.id).await.unwrap_err();
    assert!(err.is_not_found(), "{err:?}");

    let affected = users.delete(params!(name = "Doe")).await.unwrap();
    assert_eq!(affected, 1);
}

#[tokio::test]
async fn test_create_reads_back_generated_key() {
    let database = setup_database("generated_key").await;
    let profiles = Repository::<Profile>::new(database, "profiles");

    let first = profiles
        .create(params!(user_id = 1, bio = "first"))
        .await
        .unwrap();
    let second = profiles
        .create(params!(user_id = 1, bio = "second"))
        .await
        .unwrap();
    assert_eq!(first.profile_id, 1);
    assert_eq!(second.profile_id, 2);
    assert_eq!(second.bio, "second");
}

#[tokio::test]
async fn test_pagination_and_projection() {
    let database = setup_database("pagination").await;
    let users = Repository::<User>::new(database, "users");

    for name in ["a", "b", "c", "d", "e"] {
        users.create(params!(name = name)).await.unwrap();
    }

    let page = users
        .find(
            Params::new(),
            &FindParams::default()
                .order(OrderBy::desc("name"))
                .limit(2)
                .skip(1),
        )
        .await
        .unwrap();
    assert_eq!(
        page.iter().map(|u| u.name.as_str()).collect::<Vec<_>>(),
        vec!["d", "c"]
    );

    let options = sqlparts::db::repository::RepositoryOptions {
        debug: true,
        default_limit: 3,
    };
    let users = users.with_options(options);
    let first_page = users.find(Params::new(), &FindParams::default()).await.unwrap();
    assert_eq!(first_page.len(), 3);
}

#[tokio::test]
async fn test_uuid_key() {
    let database = setup_database("uuid").await;
    let tokens = Repository::<Token>::new(database, "tokens");

    let token = tokens.create(params!(owner = 7)).await.unwrap();
    assert_eq!(token.owner, 7);
    assert_eq!(token.token.len(), 36);

    let again = tokens.find_by_id(token.token.clone()).await.unwrap();
    assert_eq!(again.owner, 7);
}

#[tokio::test]
async fn test_join() {
    let database = setup_database("join").await;
    let users = Repository::<User>::new(database.clone(), "users");
    let profiles = Repository::<Profile>::new(database.clone(), "profiles");

    let jane = users.create(params!(name = "Jane")).await.unwrap();
    users.create(params!(name = "Bob")).await.unwrap();
    let profile = profiles
        .create(params!(user_id = jane.id, bio = "Loves Rust"))
        .await
        .unwrap();
    assert_eq!(profile.user_id, jane.id);

    let sql = database
        .builder()
        .select(["id", "name"])
        .from("users")
        .join(Join::inner("profiles", "user_id", "id").fields(["bio"]))
        .build();
    assert_eq!(
        sql,
        "SELECT u.id, u.name, profiles.bio FROM users as u \
         INNER JOIN profiles AS profiles ON profiles.user_id = u.id"
    );

    let results = database.query_as::<UserBio>(&sql).await.unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, jane.id);
    assert_eq!(results[0].name, "Jane");
    assert_eq!(results[0].bio, "Loves Rust");
}

#[tokio::test]
async fn test_json_payload() {
    let database = setup_database("json").await;
    let users = Repository::<User>::new(database, "users");

    let payload = params_from_json(serde_json::json!({"name": "Ann", "weight": 61.25})).unwrap();
    let ann = users.create(payload).await.unwrap();
    assert_eq!(ann.weight, 61.25);

    let query = params_from_json(serde_json::json!({"name": ["Ann", "Zed"]})).unwrap();
    let found = users.find(query, &FindParams::default()).await.unwrap();
    assert_eq!(found.len(), 1);
}

#[tokio::test]
async fn test_rejected_statement_surfaces_database_error() {
    let database = setup_database("rejected").await;
    let users = Repository::<User>::new(database, "users");

    let err = users.create(Params::new()).await.unwrap_err();
    assert!(matches!(err, Error::Database(_)), "{err:?}");
}
