use anyhow::{Context, Result};
use joinmap_core::{resolve, Error, RelationKind, SchemaInspector};
use joinmap_introspect::PostgresInspector;
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::{env, fs};

const FIXTURE_PATH: &str = "fixtures/sql/postgres/001_library.sql";

fn database_url() -> Option<String> {
    env::var("TEST_DATABASE_URL")
        .ok()
        .or_else(|| env::var("DATABASE_URL").ok())
}

async fn connect() -> Result<Option<PgPool>> {
    let Some(db_url) = database_url() else {
        eprintln!("skipping: set TEST_DATABASE_URL or DATABASE_URL for integration tests");
        return Ok(None);
    };

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(std::time::Duration::from_secs(10))
        .connect(&db_url)
        .await
        .context("connecting to Postgres")?;

    let script = fs::read_to_string(FIXTURE_PATH)
        .with_context(|| format!("reading fixture {FIXTURE_PATH}"))?;
    for statement in script.split(';') {
        let sql = statement.trim();
        if sql.is_empty() {
            continue;
        }
        sqlx::query(sql)
            .execute(&pool)
            .await
            .with_context(|| format!("executing fixture {FIXTURE_PATH}"))?;
    }

    Ok(Some(pool))
}

#[tokio::test]
async fn inspects_relations_and_resolves_joins() -> Result<()> {
    let Some(pool) = connect().await? else {
        return Ok(());
    };
    let inspector = PostgresInspector::new(pool);

    assert_eq!(
        inspector.relation_kind("book").await?,
        Some(RelationKind::Table)
    );
    assert_eq!(
        inspector.relation_kind("RECENT_BOOKS").await?,
        Some(RelationKind::View)
    );
    assert_eq!(inspector.relation_kind("no_such_relation").await?, None);

    // joinmap_it_shadow.book declares a third key to author; constraints must
    // come only from the relation relation_kind answered for.
    let fks = inspector.foreign_keys("book").await?;
    assert_eq!(fks.len(), 2);
    assert!(fks.iter().all(|fk| fk.destination == "author"));

    let author_fk = fks
        .iter()
        .find(|fk| fk.pairs[0].origin == "authorID")
        .expect("author fk");
    assert_eq!(author_fk.pairs[0].destination, "id");

    // joinmap_it_shadow.chapter has a single-column key; the answer must be
    // the primary key of joinmap_it.chapter.
    let pk = inspector.primary_key("chapter").await?;
    assert_eq!(pk, vec!["bookID".to_string(), "position".to_string()]);

    Ok(())
}

#[tokio::test]
async fn resolves_against_a_live_catalog() -> Result<()> {
    let Some(pool) = connect().await? else {
        return Ok(());
    };
    let inspector = PostgresInspector::new(pool);

    // Two declared keys to author: ambiguous until a hint narrows them down.
    let err = resolve(&inspector, "book", "author", None, None)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::AmbiguousForeignKey { .. }));

    let origin_hint = vec!["authorID".to_string()];
    let mapping = resolve(&inspector, "book", "author", Some(&origin_hint), None).await?;
    assert_eq!(mapping.pairs()[0].origin, "authorID");
    assert_eq!(mapping.pairs()[0].destination, "id");

    // A view origin falls back to the destination's primary key.
    let view_hint = vec!["authorID".to_string()];
    let mapping = resolve(
        &inspector,
        "recent_books",
        "author",
        Some(&view_hint),
        None,
    )
    .await?;
    assert_eq!(mapping.pairs()[0].destination, "id");

    let joined = mapping.orient(false);
    assert_eq!(joined.columns()[0].left, "id");
    assert_eq!(joined.columns()[0].right, "authorID");

    Ok(())
}
